// Business logic services

pub mod statistics_service;
pub mod dashboard_service;

pub use statistics_service::{ActivityOverview, StatisticsService, Streaks, DEFAULT_RECORD_LIMIT};
pub use dashboard_service::{DashboardService, DashboardSummary};
