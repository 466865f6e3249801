//! Route validation errors.

/// Why a route was rejected.
///
/// Each variant has a stable numeric code (see [`RouteError::code`]) for
/// callers that report outcomes as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RouteError {
    /// The start station is not in the station listing or not on the map
    #[error("Start station invalid")]
    StartStationInvalid,

    /// The route ends on a cell that is not a known station
    #[error("Route endpoint is not a station")]
    RouteEndpointIsNotStation,

    /// The route changes line away from a station
    #[error("Line hopping between stations not possible")]
    LineHoppingBetweenStations,

    /// The route reverses along a line away from a station
    #[error("Backtracking along line between stations not possible")]
    BacktrackingBetweenStations,

    /// A route token is not a compass direction
    #[error("Invalid direction")]
    InvalidDirection,

    /// The route steps onto empty ground
    #[error("Route goes off track")]
    OffTrack,

    /// The route steps off the edge of the map
    #[error("Route goes off map")]
    OutOfBounds,
}

impl RouteError {
    /// All errors, in code order.
    pub const ALL: [RouteError; 7] = [
        RouteError::StartStationInvalid,
        RouteError::RouteEndpointIsNotStation,
        RouteError::LineHoppingBetweenStations,
        RouteError::BacktrackingBetweenStations,
        RouteError::InvalidDirection,
        RouteError::OffTrack,
        RouteError::OutOfBounds,
    ];

    /// The numeric code for this error. Codes are small negative integers so
    /// they never collide with a station count.
    pub fn code(&self) -> i32 {
        match self {
            RouteError::StartStationInvalid => -1,
            RouteError::RouteEndpointIsNotStation => -2,
            RouteError::LineHoppingBetweenStations => -3,
            RouteError::BacktrackingBetweenStations => -4,
            RouteError::InvalidDirection => -5,
            RouteError::OffTrack => -6,
            RouteError::OutOfBounds => -7,
        }
    }

    /// The error for a numeric code, if any.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

/// Human-readable description of a numeric route error code.
///
/// ```
/// use tube_server::validate::describe_code;
///
/// assert_eq!(describe_code(-6), "Route goes off track");
/// assert_eq!(describe_code(42), "Unknown error");
/// ```
pub fn describe_code(code: i32) -> &'static str {
    match RouteError::from_code(code) {
        Some(RouteError::StartStationInvalid) => "Start station invalid",
        Some(RouteError::RouteEndpointIsNotStation) => "Route endpoint is not a station",
        Some(RouteError::LineHoppingBetweenStations) => {
            "Line hopping between stations not possible"
        }
        Some(RouteError::BacktrackingBetweenStations) => {
            "Backtracking along line between stations not possible"
        }
        Some(RouteError::InvalidDirection) => "Invalid direction",
        Some(RouteError::OffTrack) => "Route goes off track",
        Some(RouteError::OutOfBounds) => "Route goes off map",
        None => "Unknown error",
    }
}
