#![allow(dead_code)]

use athlete_stats::clock::FixedClock;
use athlete_stats::database::InMemoryStore;
use athlete_stats::models::*;
use athlete_stats::services::{DashboardService, StatisticsService};
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use uuid::Uuid;

/// Wednesday, so the current week started two days earlier.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

/// Mock data generators
pub struct MockDataGenerator;

impl MockDataGenerator {
    /// A completed session
    pub fn session(athlete_id: Uuid, date: NaiveDate, session_type: &str, distance_km: Option<f64>) -> TrainingSession {
        TrainingSession {
            id: Uuid::new_v4(),
            athlete_id,
            date,
            completed: true,
            session_type: Some(session_type.to_string()),
            distance_km,
        }
    }

    /// A scheduled session the athlete has not logged yet
    pub fn planned_session(athlete_id: Uuid, date: NaiveDate, distance_km: f64) -> TrainingSession {
        TrainingSession {
            completed: false,
            ..Self::session(athlete_id, date, "track", Some(distance_km))
        }
    }

    pub fn record(athlete_id: Uuid, event_type: &str, date: NaiveDate, time_seconds: f64) -> PerformanceRecord {
        PerformanceRecord {
            id: Uuid::new_v4(),
            athlete_id,
            event_type: event_type.to_string(),
            date,
            time_seconds,
            location: Some("Stade Charléty".to_string()),
        }
    }

    pub fn goal(
        athlete_id: Uuid,
        period_type: PeriodType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        target_distance: f64,
        current_distance: f64,
    ) -> TrainingGoal {
        TrainingGoal {
            id: Uuid::new_v4(),
            athlete_id,
            period_type,
            start_date,
            end_date,
            target_distance: Some(target_distance),
            current_distance: Some(current_distance),
            target_sessions: Some(5),
            current_sessions: Some(2),
        }
    }
}

pub fn statistics_service(store: &InMemoryStore) -> StatisticsService {
    StatisticsService::with_clock(Arc::new(store.clone()), Arc::new(FixedClock(today())))
}

pub fn dashboard_service(store: &InMemoryStore) -> DashboardService {
    DashboardService::new(statistics_service(store))
}
