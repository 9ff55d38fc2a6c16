use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analytics::{self, DateRange, EvolutionWindow};
use crate::clock::{Clock, SystemClock};
use crate::database::TrainingDataStore;
use crate::error::{StatsError, StatsResult};
use crate::models::{GoalProgress, PeriodType, PersonalBest, RecordEntry, SessionTypeCounts};

/// Default number of entries returned by the record history lookup.
pub const DEFAULT_RECORD_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

/// Distance figures for the current week and month plus the three
/// evolution charts, all derived from one session fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityOverview {
    pub weekly_distance: f64,
    pub monthly_distance: f64,
    pub weekly_sessions: SessionTypeCounts,
    pub weekly_evolution: Vec<f64>,
    pub monthly_evolution: Vec<f64>,
    pub annual_evolution: Vec<f64>,
}

impl ActivityOverview {
    pub fn empty() -> Self {
        Self {
            weekly_distance: 0.0,
            monthly_distance: 0.0,
            weekly_sessions: SessionTypeCounts::default(),
            weekly_evolution: vec![0.0; EvolutionWindow::Weekly.bucket_count()],
            monthly_evolution: vec![0.0; EvolutionWindow::Monthly.bucket_count()],
            annual_evolution: vec![0.0; EvolutionWindow::Annual.bucket_count()],
        }
    }
}

/// Aggregations over an athlete's training data.
///
/// Every method performs one read against the injected store and a pure
/// computation over the result. Failures are returned, not swallowed; see
/// `DashboardService` for the fail-soft variant.
#[derive(Clone)]
pub struct StatisticsService {
    store: Arc<dyn TrainingDataStore>,
    clock: Arc<dyn Clock>,
}

impl StatisticsService {
    pub fn new(store: Arc<dyn TrainingDataStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn TrainingDataStore>, clock: Arc<dyn Clock>) -> Self {
        info!("Statistics service ready");
        Self { store, clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Total distance in km over completed sessions in `[start, end]`.
    pub async fn total_distance(&self, athlete_id: Uuid, start: NaiveDate, end: NaiveDate) -> StatsResult<f64> {
        let range = DateRange::new(start, end)?;
        let sessions = self.store.completed_sessions(athlete_id, range).await?;
        let total = analytics::total_distance(&sessions, &range);

        debug!(%athlete_id, %start, %end, total, "computed total distance");
        Ok(total)
    }

    pub async fn sessions_by_type(
        &self,
        athlete_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StatsResult<SessionTypeCounts> {
        let range = DateRange::new(start, end)?;
        let sessions = self.store.completed_sessions(athlete_id, range).await?;

        Ok(analytics::count_sessions_by_type(&sessions, &range))
    }

    /// Distance since the start of the current week, month or year.
    pub async fn period_distance(&self, athlete_id: Uuid, period: PeriodType) -> StatsResult<f64> {
        let range = analytics::date_range(period, self.today());
        self.total_distance(athlete_id, range.start, range.end).await
    }

    pub async fn period_sessions_by_type(
        &self,
        athlete_id: Uuid,
        period: PeriodType,
    ) -> StatsResult<SessionTypeCounts> {
        let range = analytics::date_range(period, self.today());
        self.sessions_by_type(athlete_id, range.start, range.end).await
    }

    pub async fn current_streak(&self, athlete_id: Uuid) -> StatsResult<u32> {
        let dates = self.store.completed_session_dates(athlete_id).await?;
        let streak = analytics::current_streak(&dates, self.today());

        debug!(%athlete_id, streak, "computed current streak");
        Ok(streak)
    }

    pub async fn longest_streak(&self, athlete_id: Uuid) -> StatsResult<u32> {
        let dates = self.store.completed_session_dates(athlete_id).await?;
        Ok(analytics::longest_streak(&dates))
    }

    /// Current and longest streak from a single read of the training days.
    pub async fn streaks(&self, athlete_id: Uuid) -> StatsResult<Streaks> {
        let dates = self.store.completed_session_dates(athlete_id).await?;

        Ok(Streaks {
            current: analytics::current_streak(&dates, self.today()),
            longest: analytics::longest_streak(&dates),
        })
    }

    /// Fetches completed sessions once over the widest window the home
    /// screen needs and derives every distance figure from that slice.
    pub async fn activity_overview(&self, athlete_id: Uuid) -> StatsResult<ActivityOverview> {
        let today = self.today();
        let week = analytics::date_range(PeriodType::Weekly, today);
        let month = analytics::date_range(PeriodType::Monthly, today);

        let start = [
            week.start,
            month.start,
            EvolutionWindow::Weekly.range(today).start,
            EvolutionWindow::Monthly.range(today).start,
            EvolutionWindow::Annual.range(today).start,
        ]
        .into_iter()
        .min()
        .unwrap_or(today);

        let sessions = self
            .store
            .completed_sessions(athlete_id, DateRange { start, end: today })
            .await?;

        Ok(ActivityOverview {
            weekly_distance: analytics::total_distance(&sessions, &week),
            monthly_distance: analytics::total_distance(&sessions, &month),
            weekly_sessions: analytics::count_sessions_by_type(&sessions, &week),
            weekly_evolution: analytics::evolution(&sessions, EvolutionWindow::Weekly, today),
            monthly_evolution: analytics::evolution(&sessions, EvolutionWindow::Monthly, today),
            annual_evolution: analytics::evolution(&sessions, EvolutionWindow::Annual, today),
        })
    }

    /// Progress of the goal active today, or `None` if no goal is configured.
    pub async fn goal_progress(&self, athlete_id: Uuid, period: PeriodType) -> StatsResult<Option<GoalProgress>> {
        let goal = self.store.active_goal(athlete_id, period, self.today()).await?;
        Ok(goal.as_ref().map(analytics::goal_progress))
    }

    /// Most recent `limit` results for `event_type`, newest first.
    pub async fn performance_records(
        &self,
        athlete_id: Uuid,
        event_type: &str,
        limit: i64,
    ) -> StatsResult<Vec<RecordEntry>> {
        if limit <= 0 {
            return Err(StatsError::invalid(format!("limit must be positive, got {}", limit)));
        }

        let records = self.store.performance_records(athlete_id, event_type, limit).await?;
        Ok(records.into_iter().map(RecordEntry::from).collect())
    }

    /// Fastest recorded time for `event_type`. Lower times are better.
    pub async fn personal_best(&self, athlete_id: Uuid, event_type: &str) -> StatsResult<Option<PersonalBest>> {
        let record = self.store.fastest_record(athlete_id, event_type).await?;
        Ok(record.as_ref().map(PersonalBest::from))
    }

    pub async fn evolution(&self, athlete_id: Uuid, window: EvolutionWindow) -> StatsResult<Vec<f64>> {
        let today = self.today();
        let sessions = self.store.completed_sessions(athlete_id, window.range(today)).await?;

        Ok(analytics::evolution(&sessions, window, today))
    }

    pub async fn weekly_evolution(&self, athlete_id: Uuid) -> StatsResult<Vec<f64>> {
        self.evolution(athlete_id, EvolutionWindow::Weekly).await
    }

    pub async fn monthly_evolution(&self, athlete_id: Uuid) -> StatsResult<Vec<f64>> {
        self.evolution(athlete_id, EvolutionWindow::Monthly).await
    }

    pub async fn annual_evolution(&self, athlete_id: Uuid) -> StatsResult<Vec<f64>> {
        self.evolution(athlete_id, EvolutionWindow::Annual).await
    }
}
