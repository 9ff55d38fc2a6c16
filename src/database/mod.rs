// Read-only access to the training data owned by the backing store

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::analytics::DateRange;
use crate::models::{PerformanceRecord, PeriodType, TrainingGoal, TrainingSession};

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

/// The queries the statistics engine needs from storage.
///
/// Implementations never write. Every method may fail with a
/// [`DatabaseError`]; callers decide on the fallback.
#[async_trait]
pub trait TrainingDataStore: Send + Sync {
    /// Completed sessions of `athlete_id` whose date lies in `range`.
    async fn completed_sessions(
        &self,
        athlete_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<TrainingSession>, DatabaseError>;

    /// Distinct days with at least one completed session, newest first.
    async fn completed_session_dates(&self, athlete_id: Uuid) -> Result<Vec<NaiveDate>, DatabaseError>;

    /// Up to `limit` records for `event_type`, newest first.
    async fn performance_records(
        &self,
        athlete_id: Uuid,
        event_type: &str,
        limit: i64,
    ) -> Result<Vec<PerformanceRecord>, DatabaseError>;

    /// The record with the lowest `time_seconds` for `event_type`.
    async fn fastest_record(
        &self,
        athlete_id: Uuid,
        event_type: &str,
    ) -> Result<Option<PerformanceRecord>, DatabaseError>;

    /// The goal of `period` whose window contains `on`, latest start first.
    async fn active_goal(
        &self,
        athlete_id: Uuid,
        period: PeriodType,
        on: NaiveDate,
    ) -> Result<Option<TrainingGoal>, DatabaseError>;
}
