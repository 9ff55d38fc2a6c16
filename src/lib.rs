// Training statistics engine: streaks, distance totals, goal progress,
// personal bests and evolution charts over an athlete's training log.

pub mod analytics;
pub mod api;
pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;

pub use error::{StatsError, StatsResult};
