//! Station and line name lookup.
//!
//! Two listings map single-character map symbols to human-readable names:
//! one for stations, one for lines. Each is parsed once from a text file and
//! is read-only afterwards.

mod error;
mod listing;

pub use error::CatalogError;
pub use listing::{Listing, SymbolCatalog, SymbolKind};
