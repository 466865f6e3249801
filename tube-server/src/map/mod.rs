//! The tube map grid.
//!
//! A map is loaded once from a plain text file and is read-only afterwards.
//! Alphanumeric characters are stations, spaces are empty ground, and any
//! other character is track belonging to a line.

mod error;
mod grid;
mod render;

pub use error::MapError;
pub use grid::{EMPTY, TubeMap};
