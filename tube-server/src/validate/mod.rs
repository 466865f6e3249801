//! Route validation.
//!
//! Walks an encoded route across a [`TubeMap`](crate::map::TubeMap) from a
//! named start station, checking every step, and reports either the first
//! problem found or the number of stations passed and the destination.

mod config;
mod error;
mod walker;

#[cfg(test)]
mod walker_tests;

pub use config::ValidatorConfig;
pub use error::{RouteError, describe_code};
pub use walker::{RouteSummary, RouteValidator, is_station_cell};
