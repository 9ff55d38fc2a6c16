use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DatabaseError, TrainingDataStore};
use crate::analytics::{select_active_goal, DateRange};
use crate::models::{PerformanceRecord, PeriodType, TrainingGoal, TrainingSession};

#[derive(Default)]
struct Tables {
    sessions: Vec<TrainingSession>,
    records: Vec<PerformanceRecord>,
    goals: Vec<TrainingGoal>,
}

/// Process-local store for tests and demo deployments.
///
/// `set_unavailable(true)` makes every query fail, which is how tests
/// exercise the retrieval-failure paths.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_session(&self, session: TrainingSession) {
        self.tables.write().await.sessions.push(session);
    }

    pub async fn insert_record(&self, record: PerformanceRecord) {
        self.tables.write().await.records.push(record);
    }

    pub async fn insert_goal(&self, goal: TrainingGoal) {
        self.tables.write().await.goals.push(goal);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DatabaseError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DatabaseError::Unavailable("in-memory store switched off".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TrainingDataStore for InMemoryStore {
    async fn completed_sessions(
        &self,
        athlete_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<TrainingSession>, DatabaseError> {
        self.check_available()?;
        let tables = self.tables.read().await;

        let mut sessions: Vec<TrainingSession> = tables
            .sessions
            .iter()
            .filter(|s| s.athlete_id == athlete_id && s.completed && range.contains(s.date))
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.date);

        Ok(sessions)
    }

    async fn completed_session_dates(&self, athlete_id: Uuid) -> Result<Vec<NaiveDate>, DatabaseError> {
        self.check_available()?;
        let tables = self.tables.read().await;

        let mut dates: Vec<NaiveDate> = tables
            .sessions
            .iter()
            .filter(|s| s.athlete_id == athlete_id && s.completed)
            .map(|s| s.date)
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();

        Ok(dates)
    }

    async fn performance_records(
        &self,
        athlete_id: Uuid,
        event_type: &str,
        limit: i64,
    ) -> Result<Vec<PerformanceRecord>, DatabaseError> {
        self.check_available()?;
        let tables = self.tables.read().await;

        let mut records: Vec<PerformanceRecord> = tables
            .records
            .iter()
            .filter(|r| r.athlete_id == athlete_id && r.event_type == event_type)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(records)
    }

    async fn fastest_record(
        &self,
        athlete_id: Uuid,
        event_type: &str,
    ) -> Result<Option<PerformanceRecord>, DatabaseError> {
        self.check_available()?;
        let tables = self.tables.read().await;

        Ok(tables
            .records
            .iter()
            .filter(|r| r.athlete_id == athlete_id && r.event_type == event_type)
            .min_by(|a, b| a.time_seconds.total_cmp(&b.time_seconds))
            .cloned())
    }

    async fn active_goal(
        &self,
        athlete_id: Uuid,
        period: PeriodType,
        on: NaiveDate,
    ) -> Result<Option<TrainingGoal>, DatabaseError> {
        self.check_available()?;
        let tables = self.tables.read().await;

        let owned: Vec<TrainingGoal> = tables
            .goals
            .iter()
            .filter(|g| g.athlete_id == athlete_id)
            .cloned()
            .collect();

        Ok(select_active_goal(&owned, period, on).cloned())
    }
}
