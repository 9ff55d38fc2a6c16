use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A timed result for a named event such as "100m".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PerformanceRecord {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub event_type: String,
    pub date: NaiveDate,
    /// Lower is better.
    pub time_seconds: f64,
    pub location: Option<String>,
}

/// Record as returned to callers of the history lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub date: NaiveDate,
    pub time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<PerformanceRecord> for RecordEntry {
    fn from(record: PerformanceRecord) -> Self {
        Self {
            date: record.date,
            time: record.time_seconds,
            location: record.location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalBest {
    pub time: f64,
    pub date: NaiveDate,
}

impl From<&PerformanceRecord> for PersonalBest {
    fn from(record: &PerformanceRecord) -> Self {
        Self {
            time: record.time_seconds,
            date: record.date,
        }
    }
}
