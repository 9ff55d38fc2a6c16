use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiError;
use crate::analytics::{self, DateRange, EvolutionWindow};
use crate::models::{GoalProgress, PeriodType, PersonalBest, RecordEntry, SessionTypeCounts};
use crate::services::{DashboardService, DashboardSummary, DEFAULT_RECORD_LIMIT};

const MAX_RECORD_LIMIT: i64 = 100;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn bad_request(code: &str, message: &str) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(ApiError::new(code, message)))
}

fn not_found(code: &str, message: &str) -> (StatusCode, Json<ApiError>) {
    (StatusCode::NOT_FOUND, Json(ApiError::new(code, message)))
}

#[derive(Clone)]
pub struct StatsAppState {
    pub dashboard: DashboardService,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LapsQuery {
    pub distance_km: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub athlete_id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_distance_km: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionCountsResponse {
    pub athlete_id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub counts: SessionTypeCounts,
    pub total: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StreakResponse {
    pub athlete_id: Uuid,
    pub current_streak_days: u32,
    pub longest_streak_days: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EvolutionResponse {
    pub athlete_id: Uuid,
    pub window: EvolutionWindow,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub values: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LapsResponse {
    pub distance_km: f64,
    pub laps: f64,
}

pub fn stats_routes(dashboard: DashboardService) -> Router {
    let shared_state = StatsAppState { dashboard };

    Router::new()
        .route("/stats/summary", get(get_summary))
        .route("/stats/distance", get(get_distance))
        .route("/stats/sessions", get(get_session_counts))
        .route("/stats/streak", get(get_streak))
        .route("/stats/evolution/:period", get(get_evolution))
        .route("/goals/:period/progress", get(get_goal_progress))
        .route("/records/:event_type", get(get_records))
        .route("/records/:event_type/best", get(get_personal_best))
        .with_state(shared_state)
}

pub fn tool_routes() -> Router {
    Router::new().route("/laps", get(get_laps))
}

type PathInput<T> = Result<Path<T>, PathRejection>;
type QueryInput<T> = Result<Query<T>, QueryRejection>;

fn path_params<T>(input: PathInput<T>) -> Result<T, (StatusCode, Json<ApiError>)> {
    input
        .map(|Path(params)| params)
        .map_err(|rejection| bad_request("INVALID_PATH", &rejection.body_text()))
}

fn query_params<T>(input: QueryInput<T>) -> Result<T, (StatusCode, Json<ApiError>)> {
    input
        .map(|Query(params)| params)
        .map_err(|rejection| bad_request("INVALID_QUERY", &rejection.body_text()))
}

fn parse_period(raw: &str) -> Result<PeriodType, (StatusCode, Json<ApiError>)> {
    raw.parse::<PeriodType>()
        .map_err(|_| bad_request("INVALID_PERIOD", "Period must be weekly, monthly or annual"))
}

/// Explicit bounds, defaulting to the current week up to today.
fn resolve_range(query: &RangeQuery, today: NaiveDate) -> Result<DateRange, (StatusCode, Json<ApiError>)> {
    let week = analytics::date_range(PeriodType::Weekly, today);
    let start = query.start.unwrap_or(week.start);
    let end = query.end.unwrap_or(week.end);

    DateRange::new(start, end).map_err(|e| bad_request("INVALID_RANGE", &e.to_string()))
}

pub async fn get_summary(
    State(state): State<StatsAppState>,
    path: PathInput<Uuid>,
) -> ApiResult<DashboardSummary> {
    let athlete_id = path_params(path)?;

    Ok(Json(state.dashboard.summary(athlete_id).await))
}

pub async fn get_distance(
    State(state): State<StatsAppState>,
    path: PathInput<Uuid>,
    query: QueryInput<RangeQuery>,
) -> ApiResult<DistanceResponse> {
    let athlete_id = path_params(path)?;
    let query = query_params(query)?;
    let range = resolve_range(&query, state.dashboard.statistics().today())?;
    let total_distance_km = state
        .dashboard
        .total_distance(athlete_id, range.start, range.end)
        .await;

    Ok(Json(DistanceResponse {
        athlete_id,
        start: range.start,
        end: range.end,
        total_distance_km,
    }))
}

pub async fn get_session_counts(
    State(state): State<StatsAppState>,
    path: PathInput<Uuid>,
    query: QueryInput<RangeQuery>,
) -> ApiResult<SessionCountsResponse> {
    let athlete_id = path_params(path)?;
    let query = query_params(query)?;
    let range = resolve_range(&query, state.dashboard.statistics().today())?;
    let counts = state
        .dashboard
        .sessions_by_type(athlete_id, range.start, range.end)
        .await;

    Ok(Json(SessionCountsResponse {
        athlete_id,
        start: range.start,
        end: range.end,
        total: counts.total(),
        counts,
    }))
}

pub async fn get_streak(
    State(state): State<StatsAppState>,
    path: PathInput<Uuid>,
) -> ApiResult<StreakResponse> {
    let athlete_id = path_params(path)?;
    let streaks = state.dashboard.streaks(athlete_id).await;

    Ok(Json(StreakResponse {
        athlete_id,
        current_streak_days: streaks.current,
        longest_streak_days: streaks.longest,
    }))
}

pub async fn get_evolution(
    State(state): State<StatsAppState>,
    path: PathInput<(Uuid, String)>,
) -> ApiResult<EvolutionResponse> {
    let (athlete_id, period) = path_params(path)?;
    let window = EvolutionWindow::from(parse_period(&period)?);
    let range = window.range(state.dashboard.statistics().today());
    let values = state.dashboard.evolution(athlete_id, window).await;

    Ok(Json(EvolutionResponse {
        athlete_id,
        window,
        start: range.start,
        end: range.end,
        values,
    }))
}

pub async fn get_goal_progress(
    State(state): State<StatsAppState>,
    path: PathInput<(Uuid, String)>,
) -> ApiResult<GoalProgress> {
    let (athlete_id, period) = path_params(path)?;
    let period = parse_period(&period)?;

    state
        .dashboard
        .goal_progress(athlete_id, period)
        .await
        .map(Json)
        .ok_or_else(|| not_found("GOAL_NOT_FOUND", "No active goal for this period"))
}

pub async fn get_records(
    State(state): State<StatsAppState>,
    path: PathInput<(Uuid, String)>,
    query: QueryInput<RecordsQuery>,
) -> ApiResult<Vec<RecordEntry>> {
    let (athlete_id, event_type) = path_params(path)?;
    let query = query_params(query)?;
    let limit = query.limit.unwrap_or(DEFAULT_RECORD_LIMIT);
    if limit <= 0 {
        return Err(bad_request("INVALID_LIMIT", "Limit must be a positive integer"));
    }

    let records = state
        .dashboard
        .performance_records(athlete_id, &event_type, limit.min(MAX_RECORD_LIMIT))
        .await;

    Ok(Json(records))
}

pub async fn get_personal_best(
    State(state): State<StatsAppState>,
    path: PathInput<(Uuid, String)>,
) -> ApiResult<PersonalBest> {
    let (athlete_id, event_type) = path_params(path)?;

    state
        .dashboard
        .personal_best(athlete_id, &event_type)
        .await
        .map(Json)
        .ok_or_else(|| not_found("RECORD_NOT_FOUND", "No records for this event"))
}

pub async fn get_laps(query: QueryInput<LapsQuery>) -> ApiResult<LapsResponse> {
    let query = query_params(query)?;
    let laps = analytics::calculate_laps(query.distance_km)
        .map_err(|e| bad_request("INVALID_DISTANCE", &e.to_string()))?;

    Ok(Json(LapsResponse {
        distance_km: query.distance_km,
        laps,
    }))
}
