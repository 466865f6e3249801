//! Tube route validator.
//!
//! Checks proposed routes across an ASCII-art transit map: a route is a
//! string of compass directions walked from a named station, and is valid if
//! it stays on track, changes line only at stations, never doubles back
//! between stations, and ends where a station can be named.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod map;
pub mod validate;
pub mod web;
