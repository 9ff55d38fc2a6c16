use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{PeriodType, TrainingSession};

use super::DateRange;

/// Trailing window used for the distance evolution charts.
///
/// | window  | span                | buckets            |
/// |---------|---------------------|--------------------|
/// | Weekly  | today - 6 ..= today | 7, one per day     |
/// | Monthly | today - 27 ..= today| 4, one per 7 days  |
/// | Annual  | today - 1y ..= today| 12, one per month  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionWindow {
    Weekly,
    Monthly,
    Annual,
}

impl EvolutionWindow {
    pub fn bucket_count(&self) -> usize {
        match self {
            EvolutionWindow::Weekly => 7,
            EvolutionWindow::Monthly => 4,
            EvolutionWindow::Annual => 12,
        }
    }

    pub fn range(&self, today: NaiveDate) -> DateRange {
        let start = match self {
            EvolutionWindow::Weekly => today - Duration::days(6),
            EvolutionWindow::Monthly => today - Duration::days(27),
            EvolutionWindow::Annual => today
                .checked_sub_months(Months::new(12))
                .unwrap_or(today - Duration::days(365)),
        };
        DateRange { start, end: today }
    }

    /// Bucket for `date`, or `None` when it falls outside the window.
    ///
    /// Annual buckets are aligned to the current month: bucket 11 is this
    /// month, bucket 0 the month eleven months back.
    pub fn bucket_index(&self, date: NaiveDate, today: NaiveDate) -> Option<usize> {
        let index = match self {
            EvolutionWindow::Weekly => (date - self.range(today).start).num_days(),
            EvolutionWindow::Monthly => (date - self.range(today).start).num_days().div_euclid(7),
            EvolutionWindow::Annual => 11 - (month_ordinal(today) - month_ordinal(date)),
        };

        usize::try_from(index)
            .ok()
            .filter(|i| *i < self.bucket_count())
    }
}

impl From<PeriodType> for EvolutionWindow {
    fn from(period: PeriodType) -> Self {
        match period {
            PeriodType::Weekly => EvolutionWindow::Weekly,
            PeriodType::Monthly => EvolutionWindow::Monthly,
            PeriodType::Annual => EvolutionWindow::Annual,
        }
    }
}

fn month_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Distance per bucket scaled against the largest bucket (0..=100).
///
/// Only completed sessions with a recorded distance contribute. The divisor
/// is floored at 1 so an empty window yields zeros rather than NaN.
pub fn evolution(sessions: &[TrainingSession], window: EvolutionWindow, today: NaiveDate) -> Vec<f64> {
    let range = window.range(today);
    let mut buckets = vec![0.0; window.bucket_count()];

    for session in sessions {
        let Some(km) = session.distance_km else {
            continue;
        };
        if !session.completed || !range.contains(session.date) {
            continue;
        }
        if let Some(index) = window.bucket_index(session.date, today) {
            buckets[index] += km;
        }
    }

    let max = buckets.iter().copied().fold(0.0_f64, f64::max).max(1.0);
    buckets.into_iter().map(|v| v / max * 100.0).collect()
}
