//! HTTP API handlers.
//!
//! - **POST /predict**: the delegated calculation contract. Returns only the
//!   total, rounded to two decimals.
//! - **POST /footprint**: the full report (breakdown, comparisons,
//!   recommendations).
//! - **GET /benchmarks**: the fixed reference footprints.
//! - **GET /health**: liveness.
//!
//! Request bodies are flat camelCase [`InputProfile`] objects. Missing fields
//! take the survey defaults; malformed bodies are rejected by the JSON
//! extractor before any handler runs.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::benchmark::{BENCHMARKS, Benchmark};
use crate::calculator::compute;
use crate::factors::EmissionFactorTable;
use crate::model::{InputProfile, PredictResponse};
use crate::report::{FootprintReport, build_report, round_to};

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Factor table applied to every request.
    pub factors: EmissionFactorTable,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(post_predict))
        .route("/footprint", post(post_footprint))
        .route("/benchmarks", get(get_benchmarks))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /predict - Compute the monthly footprint total.
///
/// # Response
///
/// ```json
/// { "footprint": 468.25 }
/// ```
#[instrument(skip(state, profile))]
pub async fn post_predict(
    State(state): State<AppState>,
    Json(profile): Json<InputProfile>,
) -> Json<PredictResponse> {
    let result = compute(&profile, &state.factors);
    let footprint = round_to(result.total, 2);

    info!(footprint, "Footprint predicted");

    Json(PredictResponse { footprint })
}

/// POST /footprint - Compute the full footprint report.
///
/// # Response
///
/// ```json
/// {
///     "generated_at": "2026-01-15T10:30:00Z",
///     "total_kg": 468,
///     "breakdown": [{ "category": "transportation", "kg": 128, "percentage": 42.5 }, ...],
///     "uncategorized_kg": 68,
///     "dominant_category": "electricity",
///     "rating": "moderate",
///     "comparisons": [...],
///     "recommendations": { "priority": {...}, "others": [...] },
///     ...
/// }
/// ```
#[instrument(skip(state, profile))]
pub async fn post_footprint(
    State(state): State<AppState>,
    Json(profile): Json<InputProfile>,
) -> Json<FootprintReport> {
    let report = build_report(&profile, &state.factors, Utc::now());

    info!(
        total_kg = report.total_kg,
        dominant = ?report.dominant_category,
        rating = ?report.rating,
        recommendation_count = report.recommendations.others.len()
            + usize::from(report.recommendations.priority.is_some()),
        "Footprint report generated"
    );

    Json(report)
}

/// GET /benchmarks - The fixed reference footprints, in display order.
pub async fn get_benchmarks() -> Json<Vec<Benchmark>> {
    Json(BENCHMARKS.to_vec())
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
