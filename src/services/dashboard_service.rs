use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::analytics::EvolutionWindow;
use crate::error::StatsResult;
use crate::models::{GoalProgress, PeriodType, PersonalBest, RecordEntry, SessionTypeCounts};
use crate::services::{ActivityOverview, StatisticsService, Streaks};

/// Everything the athlete home screen shows, computed in one fan-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub athlete_id: Uuid,
    pub generated_on: NaiveDate,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub weekly_distance: f64,
    pub monthly_distance: f64,
    pub weekly_sessions: SessionTypeCounts,
    pub weekly_goal: Option<GoalProgress>,
    pub monthly_goal: Option<GoalProgress>,
    pub weekly_evolution: Vec<f64>,
    pub monthly_evolution: Vec<f64>,
    pub annual_evolution: Vec<f64>,
}

/// Fail-soft facade over [`StatisticsService`].
///
/// Each call logs its own failure and substitutes a safe default, so one
/// broken query never spoils a sibling on the same screen. Callers that
/// need to tell "no data" from "fetch failed" use the inner service.
#[derive(Clone)]
pub struct DashboardService {
    stats: StatisticsService,
}

fn or_default<T>(result: StatsResult<T>, operation: &'static str, athlete_id: Uuid, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(%athlete_id, operation, error = %e, "statistics query failed, using default");
            default
        }
    }
}

impl DashboardService {
    pub fn new(stats: StatisticsService) -> Self {
        Self { stats }
    }

    pub fn statistics(&self) -> &StatisticsService {
        &self.stats
    }

    pub async fn total_distance(&self, athlete_id: Uuid, start: NaiveDate, end: NaiveDate) -> f64 {
        let result = self.stats.total_distance(athlete_id, start, end).await;
        or_default(result, "total_distance", athlete_id, 0.0)
    }

    pub async fn sessions_by_type(&self, athlete_id: Uuid, start: NaiveDate, end: NaiveDate) -> SessionTypeCounts {
        let result = self.stats.sessions_by_type(athlete_id, start, end).await;
        or_default(result, "sessions_by_type", athlete_id, SessionTypeCounts::default())
    }

    pub async fn current_streak(&self, athlete_id: Uuid) -> u32 {
        let result = self.stats.current_streak(athlete_id).await;
        or_default(result, "current_streak", athlete_id, 0)
    }

    pub async fn longest_streak(&self, athlete_id: Uuid) -> u32 {
        let result = self.stats.longest_streak(athlete_id).await;
        or_default(result, "longest_streak", athlete_id, 0)
    }

    pub async fn goal_progress(&self, athlete_id: Uuid, period: PeriodType) -> Option<GoalProgress> {
        let result = self.stats.goal_progress(athlete_id, period).await;
        or_default(result, "goal_progress", athlete_id, None)
    }

    pub async fn performance_records(&self, athlete_id: Uuid, event_type: &str, limit: i64) -> Vec<RecordEntry> {
        let result = self.stats.performance_records(athlete_id, event_type, limit).await;
        or_default(result, "performance_records", athlete_id, Vec::new())
    }

    pub async fn personal_best(&self, athlete_id: Uuid, event_type: &str) -> Option<PersonalBest> {
        let result = self.stats.personal_best(athlete_id, event_type).await;
        or_default(result, "personal_best", athlete_id, None)
    }

    pub async fn evolution(&self, athlete_id: Uuid, window: EvolutionWindow) -> Vec<f64> {
        let result = self.stats.evolution(athlete_id, window).await;
        or_default(result, "evolution", athlete_id, vec![0.0; window.bucket_count()])
    }

    pub async fn weekly_evolution(&self, athlete_id: Uuid) -> Vec<f64> {
        self.evolution(athlete_id, EvolutionWindow::Weekly).await
    }

    pub async fn monthly_evolution(&self, athlete_id: Uuid) -> Vec<f64> {
        self.evolution(athlete_id, EvolutionWindow::Monthly).await
    }

    pub async fn annual_evolution(&self, athlete_id: Uuid) -> Vec<f64> {
        self.evolution(athlete_id, EvolutionWindow::Annual).await
    }

    pub async fn period_distance(&self, athlete_id: Uuid, period: PeriodType) -> f64 {
        let result = self.stats.period_distance(athlete_id, period).await;
        or_default(result, "period_distance", athlete_id, 0.0)
    }

    pub async fn period_sessions_by_type(&self, athlete_id: Uuid, period: PeriodType) -> SessionTypeCounts {
        let result = self.stats.period_sessions_by_type(athlete_id, period).await;
        or_default(result, "period_sessions_by_type", athlete_id, SessionTypeCounts::default())
    }

    pub async fn streaks(&self, athlete_id: Uuid) -> Streaks {
        let result = self.stats.streaks(athlete_id).await;
        or_default(result, "streaks", athlete_id, Streaks::default())
    }

    pub async fn activity_overview(&self, athlete_id: Uuid) -> ActivityOverview {
        let result = self.stats.activity_overview(athlete_id).await;
        or_default(result, "activity_overview", athlete_id, ActivityOverview::empty())
    }

    /// Runs the dashboard queries concurrently: one read each for training
    /// days, sessions and the two active goals.
    pub async fn summary(&self, athlete_id: Uuid) -> DashboardSummary {
        let (streaks, overview, weekly_goal, monthly_goal) = futures::join!(
            self.streaks(athlete_id),
            self.activity_overview(athlete_id),
            self.goal_progress(athlete_id, PeriodType::Weekly),
            self.goal_progress(athlete_id, PeriodType::Monthly),
        );

        DashboardSummary {
            athlete_id,
            generated_on: self.stats.today(),
            current_streak: streaks.current,
            longest_streak: streaks.longest,
            weekly_distance: overview.weekly_distance,
            monthly_distance: overview.monthly_distance,
            weekly_sessions: overview.weekly_sessions,
            weekly_goal,
            monthly_goal,
            weekly_evolution: overview.weekly_evolution,
            monthly_evolution: overview.monthly_evolution,
            annual_evolution: overview.annual_evolution,
        }
    }
}
