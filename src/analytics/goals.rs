use chrono::NaiveDate;

use crate::models::{GoalProgress, PeriodType, TrainingGoal};

/// Picks the goal of `period` whose window contains `today`.
/// When several overlap, the most recently started one wins.
pub fn select_active_goal(
    goals: &[TrainingGoal],
    period: PeriodType,
    today: NaiveDate,
) -> Option<&TrainingGoal> {
    goals
        .iter()
        .filter(|g| g.period_type == period && g.is_active_on(today))
        .max_by_key(|g| g.start_date)
}

pub fn goal_progress(goal: &TrainingGoal) -> GoalProgress {
    let target_distance = goal.target_distance.unwrap_or(0.0);
    let current_distance = goal.current_distance.unwrap_or(0.0);

    let progress = if target_distance > 0.0 {
        (current_distance / target_distance * 100.0).round().max(0.0) as u32
    } else {
        0
    };

    GoalProgress {
        target_distance,
        current_distance,
        target_sessions: goal.target_sessions.unwrap_or(0),
        current_sessions: goal.current_sessions.unwrap_or(0),
        progress,
    }
}
