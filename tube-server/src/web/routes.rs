//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::validate::{RouteError, RouteValidator};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/map", get(map_view))
        .route("/api/symbol", get(lookup_symbol))
        .route("/route/validate", post(validate_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The map as plain text, with rulers.
async fn map_view(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.map.render(),
    )
}

/// Look up the map symbol for a line or station name.
async fn lookup_symbol(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<SymbolResponse>, AppError> {
    let (symbol, kind) = state
        .catalog
        .resolve(&query.name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown station or line: {}", query.name),
        })?;

    Ok(Json(SymbolResponse {
        name: query.name,
        symbol,
        kind,
    }))
}

/// Validate a route from a start station.
async fn validate_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ValidateRouteResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: ValidateRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "JSON parse error");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let validator = RouteValidator::new(&state.map, &state.catalog, &state.config);
    let summary = validator.validate(&req.start, &req.route)?;

    Ok(Json(ValidateRouteResponse::from_summary(&req, summary)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    InvalidRoute(RouteError),
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        AppError::InvalidRoute(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message, code) = match &self {
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, message.clone(), None)
            }
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone(), None),
            AppError::InvalidRoute(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                e.to_string(),
                Some(e.code()),
            ),
        };

        warn!(%status, error = %message, "request failed");

        let body = Json(ErrorResponse {
            error: message,
            code,
        });
        (status, body).into_response()
    }
}
