//! Grid storage and lookups.

use std::path::Path;

use crate::domain::Coord;

use super::error::MapError;

/// The character used for empty, off-track cells.
pub const EMPTY: char = ' ';

/// A rectangular grid of map characters.
///
/// Rows are stored in a single row-major buffer. Every row has the same
/// width; rows shorter than the widest line of the source are padded with
/// spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TubeMap {
    cells: Vec<char>,
    height: usize,
    width: usize,
}

impl TubeMap {
    /// Parse a map from text, one row per line.
    ///
    /// ```
    /// use tube_server::domain::Coord;
    /// use tube_server::map::TubeMap;
    ///
    /// let map = TubeMap::parse("A-B\n  |\n").unwrap();
    /// assert_eq!(map.dimensions(), (2, 3));
    /// assert_eq!(map.cell(Coord::new(1, 0)), ' ');
    /// ```
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();

        if rows.is_empty() {
            return Err(MapError::Empty);
        }

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            let padding = width - row.len();
            cells.extend(row);
            cells.extend(std::iter::repeat_n(EMPTY, padding));
        }

        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Load a map from a text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Returns `(height, width)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns true if `coord` lies within the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// The character at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid. Check with [`contains`](Self::contains)
    /// first, or use [`get`](Self::get).
    pub fn cell(&self, coord: Coord) -> char {
        assert!(self.contains(coord), "coordinate {coord} outside map");
        self.cells[coord.row * self.width + coord.col]
    }

    /// The character at `coord`, or `None` if it is outside the grid.
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.contains(coord).then(|| self.cell(coord))
    }

    /// Find the first cell holding `symbol`, scanning rows top to bottom and
    /// each row left to right.
    pub fn find_symbol(&self, symbol: char) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&c| c == symbol)
            .map(|i| Coord::new(i / self.width, i % self.width))
    }

    /// Iterate over the rows of the map.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        (0..self.height).map(move |r| &self.cells[r * self.width..(r + 1) * self.width])
    }
}
