//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::SymbolKind;
use crate::domain::Route;
use crate::validate::RouteSummary;

/// Request to validate a route.
#[derive(Debug, Deserialize)]
pub struct ValidateRouteRequest {
    /// Name of the start station
    pub start: String,

    /// Route tokens, e.g. "S,SE,E" or "SSEE"
    pub route: String,
}

/// A valid route.
#[derive(Debug, Serialize)]
pub struct ValidateRouteResponse {
    /// Start station name, as requested
    pub start: String,

    /// The decoded route, comma separated
    pub route: String,

    /// Stations passed through, not counting the start
    pub stations_passed: usize,

    /// Destination station name, if the route ends on a known station
    pub destination: Option<String>,
}

impl ValidateRouteResponse {
    /// Build a response from a request and its validation summary.
    pub fn from_summary(req: &ValidateRouteRequest, summary: RouteSummary) -> Self {
        Self {
            start: req.start.clone(),
            route: Route::decode(&req.route).to_string(),
            stations_passed: summary.stations_passed,
            destination: summary.destination,
        }
    }
}

/// Query for a station or line symbol.
#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    /// Station or line name
    pub name: String,
}

/// A resolved symbol.
#[derive(Debug, Serialize)]
pub struct SymbolResponse {
    /// The name that was looked up
    pub name: String,

    /// The map character for the name
    pub symbol: char,

    /// Whether the name is a line or a station
    pub kind: SymbolKind,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Numeric route error code, for rejected routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}
