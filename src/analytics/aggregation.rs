use crate::models::{SessionTypeCounts, TrainingSession};

use super::DateRange;

fn completed_in<'a>(
    sessions: &'a [TrainingSession],
    range: &'a DateRange,
) -> impl Iterator<Item = &'a TrainingSession> + 'a {
    sessions
        .iter()
        .filter(move |s| s.completed && range.contains(s.date))
}

/// Sum of `distance_km` over completed sessions inside `range`.
pub fn total_distance(sessions: &[TrainingSession], range: &DateRange) -> f64 {
    completed_in(sessions, range).map(TrainingSession::distance).sum()
}

/// Partitions completed sessions inside `range` into the four type buckets.
pub fn count_sessions_by_type(sessions: &[TrainingSession], range: &DateRange) -> SessionTypeCounts {
    completed_in(sessions, range).fold(SessionTypeCounts::default(), |mut counts, session| {
        counts.record(session.kind());
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn session(date: NaiveDate, completed: bool, kind: Option<&str>, km: Option<f64>) -> TrainingSession {
        TrainingSession {
            id: Uuid::new_v4(),
            athlete_id: Uuid::nil(),
            date,
            completed,
            session_type: kind.map(str::to_string),
            distance_km: km,
        }
    }

    fn may() -> DateRange {
        DateRange::new(day(10), day(20)).unwrap()
    }

    #[test]
    fn distance_ignores_planned_and_out_of_range_sessions() {
        let sessions = vec![
            session(day(10), true, Some("track"), Some(5.0)),
            session(day(20), true, Some("track"), Some(2.5)),
            session(day(15), false, Some("track"), Some(100.0)),
            session(day(9), true, Some("track"), Some(100.0)),
            session(day(21), true, Some("track"), Some(100.0)),
            session(day(12), true, Some("gym"), None),
        ];

        assert_eq!(total_distance(&sessions, &may()), 7.5);
    }

    #[test]
    fn distance_of_nothing_is_zero() {
        assert_eq!(total_distance(&[], &may()), 0.0);
    }

    #[test]
    fn type_counts_are_case_insensitive() {
        let sessions = vec![
            session(day(11), true, Some("Track"), None),
            session(day(11), true, Some("GYM"), None),
            session(day(12), true, Some("competition"), None),
            session(day(13), true, Some("yoga"), None),
            session(day(14), true, None, None),
            session(day(14), false, Some("track"), None),
        ];

        let counts = count_sessions_by_type(&sessions, &may());
        assert_eq!(
            counts,
            SessionTypeCounts {
                track: 1,
                gym: 1,
                competition: 1,
                other: 2,
            }
        );
    }

    fn arb_session() -> impl Strategy<Value = TrainingSession> {
        (
            1u32..=28,
            any::<bool>(),
            prop::option::of(prop::sample::select(vec!["track", "Gym", "COMPETITION", "swim", ""])),
            prop::option::of(0.0f64..50.0),
        )
            .prop_map(|(d, completed, kind, km)| session(day(d), completed, kind, km))
    }

    proptest! {
        #[test]
        fn type_partition_is_exhaustive(sessions in prop::collection::vec(arb_session(), 0..60)) {
            let range = may();
            let counted = count_sessions_by_type(&sessions, &range).total() as usize;
            let expected = sessions
                .iter()
                .filter(|s| s.completed && range.contains(s.date))
                .count();
            prop_assert_eq!(counted, expected);
        }

        #[test]
        fn distance_is_sum_of_completed_in_range(sessions in prop::collection::vec(arb_session(), 0..60)) {
            let range = may();
            let expected: f64 = sessions
                .iter()
                .filter(|s| s.completed && range.contains(s.date))
                .map(|s| s.distance_km.unwrap_or(0.0))
                .sum();
            prop_assert!((total_distance(&sessions, &range) - expected).abs() < 1e-9);
        }
    }
}
