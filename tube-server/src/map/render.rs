//! Text rendering of a map with row and column rulers.

use std::fmt;

use super::grid::TubeMap;

impl TubeMap {
    /// Render the map with column rulers above and row numbers on the left.
    ///
    /// ```
    /// use tube_server::map::TubeMap;
    ///
    /// let map = TubeMap::parse("A-B").unwrap();
    /// assert_eq!(map.render(), "      \n   012\n 0 A-B\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TubeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tens ruler
        f.write_str("   ")?;
        for c in 0..self.width() {
            if c != 0 && c % 10 == 0 {
                write!(f, "{}", c / 10)?;
            } else {
                f.write_str(" ")?;
            }
        }
        writeln!(f)?;

        // Units ruler
        f.write_str("   ")?;
        for c in 0..self.width() {
            write!(f, "{}", c % 10)?;
        }
        writeln!(f)?;

        for (r, row) in self.rows().enumerate() {
            write!(f, "{r:>2} ")?;
            for &ch in row {
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
