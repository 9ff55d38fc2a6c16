use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodType {
    Weekly,
    Monthly,
    Annual,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Weekly => "WEEKLY",
            PeriodType::Monthly => "MONTHLY",
            PeriodType::Annual => "ANNUAL",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" => Ok(PeriodType::Weekly),
            "monthly" | "month" => Ok(PeriodType::Monthly),
            "annual" | "yearly" | "year" => Ok(PeriodType::Annual),
            _ => Err(anyhow::anyhow!("Invalid period type: {}", s)),
        }
    }
}

/// A period-scoped distance and session target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingGoal {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub period_type: PeriodType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target_distance: Option<f64>,
    pub current_distance: Option<f64>,
    pub target_sessions: Option<i32>,
    pub current_sessions: Option<i32>,
}

impl TrainingGoal {
    /// Whether `day` falls inside `[start_date, end_date]`.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub target_distance: f64,
    pub current_distance: f64,
    pub target_sessions: i32,
    pub current_sessions: i32,
    /// Rounded percentage of the distance target; 0 when no target is set.
    pub progress: u32,
}
