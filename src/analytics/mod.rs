// Pure aggregation over in-memory session and goal slices.
// Nothing in here touches storage; `today` is always passed in.

pub mod aggregation;
pub mod evolution;
pub mod goals;
pub mod period;
pub mod streak;

pub use aggregation::{count_sessions_by_type, total_distance};
pub use evolution::{evolution, EvolutionWindow};
pub use goals::{goal_progress, select_active_goal};
pub use period::{calculate_laps, date_range, DateRange, TRACK_LAP_METERS};
pub use streak::{current_streak, longest_streak};
