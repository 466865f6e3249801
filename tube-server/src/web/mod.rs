//! Web layer for the tube route validator.
//!
//! Provides HTTP endpoints for viewing the map, looking up symbols and
//! validating routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
