// 🌐 HTTP API - Leaderboard endpoints over a read-only snapshot
//
// The snapshot is loaded once at startup and shared immutably. Each request
// runs the ranking engine from scratch, so no locking is needed.

use crate::config::LeaderboardConfig;
use crate::entities::Country;
use crate::ranking::{Category, Placement, RankingEngine};
use crate::report::LeaderboardReport;
use crate::source::parse_json;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Vec<Country>>,
    pub config: Arc<LeaderboardConfig>,
    pub engine: RankingEngine,
}

impl AppState {
    pub fn new(snapshot: Vec<Country>, config: LeaderboardConfig) -> Self {
        AppState {
            snapshot: Arc::new(snapshot),
            config: Arc::new(config),
            engine: RankingEngine::new(),
        }
    }
}

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            }),
        )
            .into_response()
    }

    fn fail(status: StatusCode, error: String) -> Response {
        (
            status,
            Json(ApiResponse::<T> {
                success: false,
                data: None,
                error: Some(error),
            }),
        )
            .into_response()
    }
}

/// One category's top list with its display label
#[derive(Serialize)]
struct CategoryResponse {
    category: Category,
    label: String,
    placements: Vec<Placement>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/health
async fn health_check() -> Response {
    ApiResponse::ok("OK")
}

/// GET /api/countries - Snapshot as loaded
async fn get_countries(State(state): State<AppState>) -> Response {
    ApiResponse::ok(state.snapshot.as_slice())
}

/// GET /api/leaderboard - Full report for the snapshot
async fn get_leaderboard(State(state): State<AppState>) -> Response {
    report_response(&state, &state.snapshot)
}

/// GET /api/leaderboard/:category - One top-3 list
async fn get_category(State(state): State<AppState>, Path(category): Path<String>) -> Response {
    let category = match category.parse::<Category>() {
        Ok(category) => category,
        Err(e) => return ApiResponse::<CategoryResponse>::fail(StatusCode::NOT_FOUND, e),
    };

    ApiResponse::ok(CategoryResponse {
        category,
        label: state.config.labels.label(category).to_string(),
        placements: state.engine.top_n(&state.snapshot, category),
    })
}

/// POST /api/rank - Rank the posted collection instead of the snapshot
async fn rank_posted(State(state): State<AppState>, body: String) -> Response {
    match parse_json(&body) {
        Ok(countries) => report_response(&state, &countries),
        Err(e) => {
            tracing::warn!(error = %e, "rejected rank request");
            ApiResponse::<LeaderboardReport>::fail(StatusCode::BAD_REQUEST, format!("{:#}", e))
        }
    }
}

fn report_response(state: &AppState, countries: &[Country]) -> Response {
    match LeaderboardReport::build(&state.engine, countries, &state.config.labels) {
        Ok(report) => ApiResponse::ok(report),
        Err(e) => {
            tracing::error!(error = %e, "failed to build report");
            ApiResponse::<LeaderboardReport>::fail(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{:#}", e),
            )
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/countries", get(get_countries))
        .route("/leaderboard", get(get_leaderboard))
        .route("/leaderboard/:category", get(get_category))
        .route("/rank", post(rank_posted))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}
