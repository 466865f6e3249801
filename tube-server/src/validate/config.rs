//! Route validation configuration.

/// Configuration parameters for route validation.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Reject routes whose final cell is not a known station.
    ///
    /// Off by default: a route may end on track, in which case the
    /// destination is left unresolved.
    pub require_station_endpoint: bool,
}

impl ValidatorConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(require_station_endpoint: bool) -> Self {
        Self {
            require_station_endpoint,
        }
    }

    /// A configuration that rejects routes ending off-station.
    pub fn strict() -> Self {
        Self::new(true)
    }
}
