use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// One planned or logged training session.
///
/// Several sessions may share a date (two-a-day training); anything keyed
/// on training days de-duplicates by `date`, never by session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TrainingSession {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub date: NaiveDate,
    /// True only once the athlete has logged results for the session.
    pub completed: bool,
    pub session_type: Option<String>,
    pub distance_km: Option<f64>,
}

impl TrainingSession {
    /// Distance contributed to totals; missing values count as zero.
    pub fn distance(&self) -> f64 {
        self.distance_km.unwrap_or(0.0)
    }

    pub fn kind(&self) -> SessionType {
        SessionType::from_label(self.session_type.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Track,
    Gym,
    Competition,
    Other,
}

impl SessionType {
    /// Case-insensitive classification; unknown or missing labels are `Other`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("track") => SessionType::Track,
            Some("gym") => SessionType::Gym,
            Some("competition") => SessionType::Competition,
            _ => SessionType::Other,
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Track => write!(f, "track"),
            SessionType::Gym => write!(f, "gym"),
            SessionType::Competition => write!(f, "competition"),
            SessionType::Other => write!(f, "other"),
        }
    }
}

/// Completed sessions partitioned by type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTypeCounts {
    pub track: u32,
    pub gym: u32,
    pub competition: u32,
    pub other: u32,
}

impl SessionTypeCounts {
    pub fn record(&mut self, kind: SessionType) {
        match kind {
            SessionType::Track => self.track += 1,
            SessionType::Gym => self.gym += 1,
            SessionType::Competition => self.competition += 1,
            SessionType::Other => self.other += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.track + self.gym + self.competition + self.other
    }
}
