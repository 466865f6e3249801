//! Domain types for tube route validation.
//!
//! Directions, decoded routes and grid coordinates. These are plain values
//! with no knowledge of any particular map.

mod coord;
mod direction;

pub use coord::Coord;
pub use direction::{Direction, InvalidDirection, Route};
