use chrono::{Duration, NaiveDate};

/// Distinct days, most recent first.
fn distinct_days_desc(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut days = dates.to_vec();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();
    days
}

/// Consecutive training days ending today or yesterday.
///
/// `dates` are the days with at least one completed session, in any order
/// and possibly repeated. A single missed day (today) keeps the streak
/// alive; two missed days in a row reset it to zero. A latest completed
/// date after `today` also yields zero.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let days = distinct_days_desc(dates);

    let Some(&last_completed) = days.first() else {
        return 0;
    };

    let yesterday = today - Duration::days(1);
    if last_completed != today && last_completed != yesterday {
        return 0;
    }

    let mut streak = 0;
    let mut expected = last_completed;
    for day in days {
        if day != expected {
            break;
        }
        streak += 1;
        expected = expected - Duration::days(1);
    }

    streak
}

/// Longest run of consecutive training days anywhere in the history.
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let mut days = dates.to_vec();
    days.sort_unstable();
    days.dedup();

    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in days {
        run = match previous {
            Some(prev) if day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}
