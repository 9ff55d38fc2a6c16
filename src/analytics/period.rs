use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::models::PeriodType;

/// Length of one lap of a standard outdoor track.
pub const TRACK_LAP_METERS: f64 = 400.0;

/// Inclusive calendar-day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> StatsResult<Self> {
        if start > end {
            return Err(StatsError::invalid(format!(
                "range start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Range from the start of the current period up to `today`.
///
/// Weeks start on Monday, months on day 1, years on January 1.
pub fn date_range(period: PeriodType, today: NaiveDate) -> DateRange {
    let start = match period {
        PeriodType::Weekly => {
            today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
        }
        PeriodType::Monthly => today.with_day(1).unwrap_or(today),
        PeriodType::Annual => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
    };

    DateRange { start, end: today }
}

/// Converts kilometres into 400m track laps.
pub fn calculate_laps(distance_km: f64) -> StatsResult<f64> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(StatsError::invalid(format!(
            "distance must be a non-negative number of kilometres, got {}",
            distance_km
        )));
    }

    Ok(distance_km * 1000.0 / TRACK_LAP_METERS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_range_starts_on_monday() {
        // 2024-03-13 is a Wednesday
        let range = date_range(PeriodType::Weekly, day(2024, 3, 13));
        assert_eq!(range.start, day(2024, 3, 11));
        assert_eq!(range.end, day(2024, 3, 13));
    }

    #[test]
    fn weekly_range_on_monday_is_a_single_day() {
        let range = date_range(PeriodType::Weekly, day(2024, 3, 11));
        assert_eq!(range.start, range.end);
        assert_eq!(range.days(), 1);
    }

    #[test]
    fn weekly_range_on_sunday_spans_the_whole_week() {
        let range = date_range(PeriodType::Weekly, day(2024, 3, 17));
        assert_eq!(range.start, day(2024, 3, 11));
        assert_eq!(range.days(), 7);
    }

    #[test]
    fn monthly_and_annual_ranges() {
        let today = day(2024, 2, 29);
        assert_eq!(date_range(PeriodType::Monthly, today).start, day(2024, 2, 1));
        assert_eq!(date_range(PeriodType::Annual, today).start, day(2024, 1, 1));
        assert_eq!(date_range(PeriodType::Annual, today).end, today);
    }

    #[test]
    fn laps_for_one_lap() {
        assert_eq!(calculate_laps(0.4).unwrap(), 1.0);
        assert_eq!(calculate_laps(0.0).unwrap(), 0.0);
        assert_eq!(calculate_laps(10.0).unwrap(), 25.0);
    }

    #[test]
    fn laps_reject_negative_and_nan() {
        assert_matches!(calculate_laps(-1.0), Err(StatsError::InvalidInput(_)));
        assert_matches!(calculate_laps(f64::NAN), Err(StatsError::InvalidInput(_)));
        assert_matches!(calculate_laps(f64::INFINITY), Err(StatsError::InvalidInput(_)));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_matches!(
            DateRange::new(day(2024, 3, 2), day(2024, 3, 1)),
            Err(StatsError::InvalidInput(_))
        );
    }
}
