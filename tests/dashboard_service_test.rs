mod common;

use async_trait::async_trait;
use athlete_stats::analytics::DateRange;
use athlete_stats::clock::FixedClock;
use athlete_stats::database::{DatabaseError, InMemoryStore, TrainingDataStore};
use athlete_stats::models::*;
use athlete_stats::services::{DashboardService, StatisticsService};
use chrono::{Duration, NaiveDate};
use mockall::mock;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use uuid::Uuid;

use common::{dashboard_service, days_ago, today, MockDataGenerator};

mock! {
    pub Store {}

    #[async_trait]
    impl TrainingDataStore for Store {
        async fn completed_sessions(
            &self,
            athlete_id: Uuid,
            range: DateRange,
        ) -> Result<Vec<TrainingSession>, DatabaseError>;

        async fn completed_session_dates(&self, athlete_id: Uuid) -> Result<Vec<NaiveDate>, DatabaseError>;

        async fn performance_records(
            &self,
            athlete_id: Uuid,
            event_type: &str,
            limit: i64,
        ) -> Result<Vec<PerformanceRecord>, DatabaseError>;

        async fn fastest_record(
            &self,
            athlete_id: Uuid,
            event_type: &str,
        ) -> Result<Option<PerformanceRecord>, DatabaseError>;

        async fn active_goal(
            &self,
            athlete_id: Uuid,
            period: PeriodType,
            on: NaiveDate,
        ) -> Result<Option<TrainingGoal>, DatabaseError>;
    }
}

fn unavailable() -> DatabaseError {
    DatabaseError::Unavailable("connection reset".to_string())
}

fn dashboard_over(store: MockStore) -> DashboardService {
    DashboardService::new(StatisticsService::with_clock(
        Arc::new(store),
        Arc::new(FixedClock(today())),
    ))
}

#[tokio::test]
async fn outage_yields_safe_defaults() {
    let store = InMemoryStore::new();
    let athlete = Uuid::new_v4();
    store.insert_session(MockDataGenerator::session(athlete, days_ago(0), "track", Some(5.0))).await;
    store.insert_record(MockDataGenerator::record(athlete, "100m", days_ago(0), 11.2)).await;
    store.set_unavailable(true);

    let dashboard = dashboard_service(&store);

    assert_eq!(dashboard.total_distance(athlete, days_ago(6), today()).await, 0.0);
    assert_eq!(
        dashboard.sessions_by_type(athlete, days_ago(6), today()).await,
        SessionTypeCounts::default()
    );
    assert_eq!(dashboard.current_streak(athlete).await, 0);
    assert_eq!(dashboard.goal_progress(athlete, PeriodType::Weekly).await, None);
    assert!(dashboard.performance_records(athlete, "100m", 10).await.is_empty());
    assert_eq!(dashboard.personal_best(athlete, "100m").await, None);
    assert_eq!(dashboard.weekly_evolution(athlete).await, vec![0.0; 7]);
    assert_eq!(dashboard.monthly_evolution(athlete).await, vec![0.0; 4]);
    assert_eq!(dashboard.annual_evolution(athlete).await, vec![0.0; 12]);
}

#[tokio::test]
async fn recovers_once_store_is_back() {
    let store = InMemoryStore::new();
    let athlete = Uuid::new_v4();
    store.insert_session(MockDataGenerator::session(athlete, days_ago(1), "gym", Some(2.0))).await;
    let dashboard = dashboard_service(&store);

    store.set_unavailable(true);
    assert_eq!(dashboard.current_streak(athlete).await, 0);

    store.set_unavailable(false);
    assert_eq!(dashboard.current_streak(athlete).await, 1);
}

#[tokio::test]
async fn failing_streak_query_does_not_spoil_siblings() {
    let athlete = Uuid::new_v4();
    let mut store = MockStore::new();

    store
        .expect_completed_session_dates()
        .times(1)
        .returning(|_| Err(unavailable()));
    store.expect_completed_sessions().times(1).returning(move |id, range| {
        Ok(vec![MockDataGenerator::session(id, range.end, "track", Some(6.0))])
    });
    store
        .expect_active_goal()
        .times(2)
        .returning(move |id, period, on| {
            Ok(Some(MockDataGenerator::goal(id, period, on - Duration::days(1), on, 12.0, 6.0)))
        });

    let summary = dashboard_over(store).summary(athlete).await;

    assert_eq!(summary.athlete_id, athlete);
    assert_eq!(summary.generated_on, today());
    assert_eq!(summary.current_streak, 0);
    assert_eq!(summary.longest_streak, 0);
    assert_eq!(summary.weekly_distance, 6.0);
    assert_eq!(summary.monthly_distance, 6.0);
    assert_eq!(summary.weekly_sessions.track, 1);
    assert_eq!(summary.weekly_goal.map(|g| g.progress), Some(50));
    assert_eq!(summary.monthly_goal.map(|g| g.progress), Some(50));
    assert_eq!(summary.weekly_evolution[6], 100.0);
    assert_eq!(summary.monthly_evolution[3], 100.0);
    assert_eq!(summary.annual_evolution[11], 100.0);
}

#[tokio::test]
async fn summary_reads_each_source_once() {
    let athlete = Uuid::new_v4();
    let mut store = MockStore::new();

    store
        .expect_completed_session_dates()
        .times(1)
        .returning(|_| Ok(vec![days_ago(0), days_ago(1), days_ago(5), days_ago(6), days_ago(7)]));
    store.expect_completed_sessions().times(1).returning(move |id, range| {
        // the single fetch must cover the annual chart window
        assert!(range.start <= days_ago(365));
        assert_eq!(range.end, today());
        Ok(vec![
            MockDataGenerator::session(id, days_ago(0), "track", Some(4.0)),
            MockDataGenerator::session(id, days_ago(12), "gym", Some(2.0)),
        ])
    });
    store.expect_active_goal().times(2).returning(|_, _, _| Ok(None));

    let summary = dashboard_over(store).summary(athlete).await;

    assert_eq!(summary.current_streak, 2);
    assert_eq!(summary.longest_streak, 3);
    assert_eq!(summary.weekly_distance, 4.0);
    assert_eq!(summary.monthly_distance, 6.0);
    assert_eq!(summary.weekly_sessions.total(), 1);
    assert_eq!(summary.annual_evolution[11], 100.0);
}

#[tokio::test]
async fn failing_record_lookup_returns_empty_history() {
    let athlete = Uuid::new_v4();
    let mut store = MockStore::new();

    store
        .expect_performance_records()
        .times(1)
        .returning(|_, event, limit| {
            assert_eq!(event, "800m");
            assert_eq!(limit, 5);
            Err(unavailable())
        });
    store
        .expect_fastest_record()
        .times(1)
        .returning(move |id, event| Ok(Some(MockDataGenerator::record(id, event, days_ago(3), 121.4))));

    let dashboard = dashboard_over(store);

    assert!(dashboard.performance_records(athlete, "800m", 5).await.is_empty());
    assert_eq!(
        dashboard.personal_best(athlete, "800m").await,
        Some(PersonalBest { time: 121.4, date: days_ago(3) })
    );
}

#[tokio::test]
async fn summary_over_real_history() {
    let store = InMemoryStore::new();
    let athlete = Uuid::new_v4();

    for offset in 0..4 {
        store
            .insert_session(MockDataGenerator::session(athlete, days_ago(offset), "track", Some(5.0)))
            .await;
    }
    for offset in 10..16 {
        store
            .insert_session(MockDataGenerator::session(athlete, days_ago(offset), "gym", None))
            .await;
    }
    store
        .insert_goal(MockDataGenerator::goal(athlete, PeriodType::Weekly, days_ago(2), days_ago(-4), 40.0, 10.0))
        .await;

    let summary = dashboard_service(&store).summary(athlete).await;

    assert_eq!(summary.current_streak, 4);
    assert_eq!(summary.longest_streak, 6);
    // Monday to Wednesday
    assert_eq!(summary.weekly_distance, 15.0);
    assert_eq!(summary.monthly_distance, 20.0);
    assert_eq!(summary.weekly_sessions.track, 3);
    assert_eq!(summary.weekly_goal.map(|g| g.progress), Some(25));
    assert_eq!(summary.monthly_goal, None);
    assert_eq!(summary.weekly_evolution, vec![0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0]);
}
