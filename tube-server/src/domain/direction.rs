//! Compass directions and route decoding.

use std::fmt;
use std::str::FromStr;

/// Error returned when a route token is not a compass direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: {token:?}")]
pub struct InvalidDirection {
    token: String,
}

impl InvalidDirection {
    /// The token that failed to decode.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// One of the eight compass directions a route can step in.
///
/// # Examples
///
/// ```
/// use tube_server::domain::Direction;
///
/// let ne = Direction::parse("NE").unwrap();
/// assert_eq!(ne, Direction::NorthEast);
/// assert_eq!(ne.as_str(), "NE");
///
/// // Tokens are case-sensitive
/// assert!(Direction::parse("ne").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All directions, in token-table order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Parse a single route token (`N`, `S`, `E`, `W`, `NE`, `NW`, `SE`, `SW`).
    pub fn parse(token: &str) -> Result<Self, InvalidDirection> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == token)
            .ok_or_else(|| InvalidDirection {
                token: token.to_string(),
            })
    }

    /// Returns the route token for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::West => "W",
            Direction::East => "E",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        }
    }

    /// Row and column offsets of one step in this direction.
    ///
    /// Rows grow southwards and columns grow eastwards.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded route: the ordered tokens of a route string.
///
/// Tokens that failed to decode are kept in place so that the walker reports
/// them only when it reaches them; earlier traversal errors take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    tokens: Vec<Result<Direction, InvalidDirection>>,
}

impl Route {
    /// Decode a route string such as `"E,E,SE"` or `"NEE"`.
    ///
    /// Commas separate tokens and are otherwise ignored. Two characters are
    /// taken together when they form a compound direction, otherwise one.
    ///
    /// ```
    /// use tube_server::domain::{Direction, Route};
    ///
    /// let route = Route::decode("NEE");
    /// let steps: Vec<_> = route.tokens().iter().cloned().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(steps, vec![Direction::NorthEast, Direction::East]);
    /// ```
    pub fn decode(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] == ',' {
                i += 1;
                continue;
            }

            if let Some(&second) = chars.get(i + 1) {
                let pair: String = [chars[i], second].iter().collect();
                if let Ok(direction) = Direction::parse(&pair) {
                    tokens.push(Ok(direction));
                    i += 2;
                    continue;
                }
            }

            tokens.push(Direction::parse(&chars[i].to_string()));
            i += 1;
        }

        Self { tokens }
    }

    /// Build a route from already-decoded directions.
    pub fn from_directions(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            tokens: directions.into_iter().map(Ok).collect(),
        }
    }

    /// The decoded tokens in order.
    pub fn tokens(&self) -> &[Result<Direction, InvalidDirection>] {
        &self.tokens
    }

    /// Number of tokens, including ones that failed to decode.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the route has no steps.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match token {
                Ok(direction) => f.write_str(direction.as_str())?,
                Err(invalid) => f.write_str(invalid.token())?,
            }
        }
        Ok(())
    }
}
