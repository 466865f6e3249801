//! Symbol listings and the combined station/line catalog.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use super::error::CatalogError;

/// A parsed symbol → name listing.
///
/// Each non-blank source line is a symbol character, one separator character,
/// then the name. Names are matched exactly. When a name or symbol appears
/// more than once, the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    entries: Vec<(char, String)>,
    by_name: HashMap<String, char>,
    by_symbol: HashMap<char, usize>,
}

impl Listing {
    /// Create an empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a listing from text.
    ///
    /// ```
    /// use tube_server::catalog::Listing;
    ///
    /// let stations = Listing::parse("A Angel\nB Bank\n").unwrap();
    /// assert_eq!(stations.symbol("Bank"), Some('B'));
    /// assert_eq!(stations.name('A'), Some("Angel"));
    /// ```
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut listing = Self::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim_start();
            let mut chars = line.chars();
            let Some(symbol) = chars.next() else {
                continue;
            };

            // One separator character follows the symbol
            chars.next();
            let name = chars.as_str();
            if name.is_empty() {
                return Err(CatalogError::MissingName {
                    line: idx + 1,
                    symbol,
                });
            }

            listing.insert(symbol, name);
        }

        Ok(listing)
    }

    /// Load a listing from a text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Append an entry. Earlier entries keep precedence for lookups.
    pub fn insert(&mut self, symbol: char, name: impl Into<String>) {
        let name = name.into();
        let idx = self.entries.len();

        self.by_name.entry(name.clone()).or_insert(symbol);
        self.by_symbol.entry(symbol).or_insert(idx);
        self.entries.push((symbol, name));
    }

    /// The symbol of the first entry named `name`.
    pub fn symbol(&self, name: &str) -> Option<char> {
        self.by_name.get(name).copied()
    }

    /// The name of the first entry with `symbol`.
    pub fn name(&self, symbol: char) -> Option<&str> {
        self.by_symbol
            .get(&symbol)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    /// Returns true if some entry is named `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All entries in source order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(s, n)| (*s, n.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the listing has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which listing a symbol was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Line,
    Station,
}

/// Station and line listings together.
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    stations: Listing,
    lines: Listing,
}

impl SymbolCatalog {
    /// Create a catalog from parsed listings.
    pub fn new(stations: Listing, lines: Listing) -> Self {
        Self { stations, lines }
    }

    /// Load both listings from files.
    pub fn load(
        stations_path: impl AsRef<Path>,
        lines_path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        Ok(Self::new(
            Listing::load(stations_path)?,
            Listing::load(lines_path)?,
        ))
    }

    /// The station listing.
    pub fn stations(&self) -> &Listing {
        &self.stations
    }

    /// The line listing.
    pub fn lines(&self) -> &Listing {
        &self.lines
    }

    /// Resolve a name to its symbol, searching lines before stations.
    pub fn resolve(&self, name: &str) -> Option<(char, SymbolKind)> {
        self.lines
            .symbol(name)
            .map(|s| (s, SymbolKind::Line))
            .or_else(|| self.stations.symbol(name).map(|s| (s, SymbolKind::Station)))
    }

    /// The symbol for a line or station name, searching lines first.
    ///
    /// A name present in both listings resolves to its line symbol.
    pub fn symbol_for_name(&self, name: &str) -> Option<char> {
        self.resolve(name).map(|(symbol, _)| symbol)
    }

    /// The station name for a map symbol.
    pub fn station_name(&self, symbol: char) -> Option<&str> {
        self.stations.name(symbol)
    }

    /// The line name for a map symbol.
    pub fn line_name(&self, symbol: char) -> Option<&str> {
        self.lines.name(symbol)
    }

    /// Returns true if `name` is a known station.
    pub fn is_station(&self, name: &str) -> bool {
        self.stations.contains_name(name)
    }
}
