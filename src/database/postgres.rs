use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use super::{DatabaseError, TrainingDataStore};
use crate::analytics::DateRange;
use crate::models::{PerformanceRecord, PeriodType, TrainingGoal, TrainingSession};

/// `TrainingDataStore` backed by the shared PostgreSQL database.
#[derive(Clone)]
pub struct PostgresStore {
    db: PgPool,
}

impl PostgresStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct GoalRow {
    id: Uuid,
    athlete_id: Uuid,
    period_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    target_distance: Option<f64>,
    current_distance: Option<f64>,
    target_sessions: Option<i32>,
    current_sessions: Option<i32>,
}

impl TryFrom<GoalRow> for TrainingGoal {
    type Error = DatabaseError;

    fn try_from(row: GoalRow) -> Result<Self, Self::Error> {
        let period_type = row
            .period_type
            .parse::<PeriodType>()
            .map_err(|e| DatabaseError::CorruptRow(e.to_string()))?;

        Ok(TrainingGoal {
            id: row.id,
            athlete_id: row.athlete_id,
            period_type,
            start_date: row.start_date,
            end_date: row.end_date,
            target_distance: row.target_distance,
            current_distance: row.current_distance,
            target_sessions: row.target_sessions,
            current_sessions: row.current_sessions,
        })
    }
}

#[async_trait]
impl TrainingDataStore for PostgresStore {
    #[instrument(skip(self))]
    async fn completed_sessions(
        &self,
        athlete_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<TrainingSession>, DatabaseError> {
        let sessions = sqlx::query_as::<_, TrainingSession>(
            r#"
            SELECT id, athlete_id, date, completed, session_type, distance_km
            FROM training_sessions
            WHERE athlete_id = $1 AND completed = TRUE AND date >= $2 AND date <= $3
            ORDER BY date ASC
            "#,
        )
        .bind(athlete_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.db)
        .await?;

        Ok(sessions)
    }

    #[instrument(skip(self))]
    async fn completed_session_dates(&self, athlete_id: Uuid) -> Result<Vec<NaiveDate>, DatabaseError> {
        let dates = sqlx::query_scalar::<_, NaiveDate>(
            "SELECT DISTINCT date FROM training_sessions WHERE athlete_id = $1 AND completed = TRUE ORDER BY date DESC",
        )
        .bind(athlete_id)
        .fetch_all(&self.db)
        .await?;

        Ok(dates)
    }

    #[instrument(skip(self))]
    async fn performance_records(
        &self,
        athlete_id: Uuid,
        event_type: &str,
        limit: i64,
    ) -> Result<Vec<PerformanceRecord>, DatabaseError> {
        let records = sqlx::query_as::<_, PerformanceRecord>(
            r#"
            SELECT id, athlete_id, event_type, date, time_seconds, location
            FROM performance_records
            WHERE athlete_id = $1 AND event_type = $2
            ORDER BY date DESC
            LIMIT $3
            "#,
        )
        .bind(athlete_id)
        .bind(event_type)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    #[instrument(skip(self))]
    async fn fastest_record(
        &self,
        athlete_id: Uuid,
        event_type: &str,
    ) -> Result<Option<PerformanceRecord>, DatabaseError> {
        let record = sqlx::query_as::<_, PerformanceRecord>(
            r#"
            SELECT id, athlete_id, event_type, date, time_seconds, location
            FROM performance_records
            WHERE athlete_id = $1 AND event_type = $2
            ORDER BY time_seconds ASC
            LIMIT 1
            "#,
        )
        .bind(athlete_id)
        .bind(event_type)
        .fetch_optional(&self.db)
        .await?;

        Ok(record)
    }

    #[instrument(skip(self))]
    async fn active_goal(
        &self,
        athlete_id: Uuid,
        period: PeriodType,
        on: NaiveDate,
    ) -> Result<Option<TrainingGoal>, DatabaseError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, athlete_id, period_type, start_date, end_date,
                   target_distance, current_distance, target_sessions, current_sessions
            FROM training_goals
            WHERE athlete_id = $1 AND period_type = $2 AND start_date <= $3 AND end_date >= $3
            ORDER BY start_date DESC
            LIMIT 1
            "#,
        )
        .bind(athlete_id)
        .bind(period.as_str())
        .bind(on)
        .fetch_optional(&self.db)
        .await?;

        row.map(TrainingGoal::try_from).transpose()
    }
}
