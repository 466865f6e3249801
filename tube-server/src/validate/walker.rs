//! The route walk.
//!
//! A route is walked one step at a time from the start station's cell. Each
//! step must land on the map and on track. Away from stations a route may
//! neither switch to a different line symbol nor step straight back onto the
//! cell it just left. Every time the walk leaves a station cell after the
//! first step, the station count goes up by one.

use tracing::{debug, trace};

use crate::catalog::SymbolCatalog;
use crate::domain::{Coord, Route};
use crate::map::{EMPTY, TubeMap};

use super::config::ValidatorConfig;
use super::error::RouteError;

/// The outcome of a valid route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Stations passed through after the first step. The start station is
    /// never counted.
    pub stations_passed: usize,

    /// Name of the station the route ends on, if the final cell is a known
    /// station.
    pub destination: Option<String>,
}

/// Returns true if a map character is a station cell.
pub fn is_station_cell(symbol: char) -> bool {
    symbol.is_ascii_alphanumeric()
}

/// Position and history while walking a route.
struct WalkState {
    /// Symbol of the cell we are standing on
    current: char,
    position: Coord,
    /// The cell we stood on before this one
    previous: Option<Coord>,
    stations_passed: usize,
}

/// Validates routes against a map and its catalog.
///
/// Validation is a pure function of the map, the catalog, the configuration
/// and the route; a validator can be reused for any number of routes.
pub struct RouteValidator<'a> {
    map: &'a TubeMap,
    catalog: &'a SymbolCatalog,
    config: &'a ValidatorConfig,
}

impl<'a> RouteValidator<'a> {
    /// Create a new validator.
    pub fn new(
        map: &'a TubeMap,
        catalog: &'a SymbolCatalog,
        config: &'a ValidatorConfig,
    ) -> Self {
        Self {
            map,
            catalog,
            config,
        }
    }

    /// Decode `route` and walk it from `start_station`.
    pub fn validate(&self, start_station: &str, route: &str) -> Result<RouteSummary, RouteError> {
        self.validate_route(start_station, &Route::decode(route))
    }

    /// Walk a decoded route from `start_station`.
    ///
    /// Stops at the first problem found; checks run in this order for each
    /// step: direction, map bounds, off track, backtracking, line hopping.
    pub fn validate_route(
        &self,
        start_station: &str,
        route: &Route,
    ) -> Result<RouteSummary, RouteError> {
        if !self.catalog.is_station(start_station) {
            debug!(start = start_station, "unknown start station");
            return Err(RouteError::StartStationInvalid);
        }

        let symbol = self
            .catalog
            .symbol_for_name(start_station)
            .ok_or(RouteError::StartStationInvalid)?;
        let position = self.map.find_symbol(symbol).ok_or_else(|| {
            debug!(start = start_station, %symbol, "start station not on map");
            RouteError::StartStationInvalid
        })?;

        let mut walk = WalkState {
            current: symbol,
            position,
            previous: None,
            stations_passed: 0,
        };

        for (i, token) in route.tokens().iter().enumerate() {
            let direction = *token.as_ref().map_err(|e| {
                debug!(step = i, token = e.token(), "invalid direction");
                RouteError::InvalidDirection
            })?;

            let next_pos = walk
                .position
                .step(direction)
                .filter(|&c| self.map.contains(c))
                .ok_or(RouteError::OutOfBounds)?;

            let next = self.map.cell(next_pos);
            trace!(
                step = i,
                %direction,
                from = %walk.position,
                to = %next_pos,
                %next,
                "route step"
            );

            if next == EMPTY {
                return Err(RouteError::OffTrack);
            }

            if i > 0 && !is_station_cell(walk.current) && walk.previous == Some(next_pos) {
                return Err(RouteError::BacktrackingBetweenStations);
            }

            if i > 0 && walk.current != next {
                if !is_station_cell(walk.current) && !is_station_cell(next) {
                    return Err(RouteError::LineHoppingBetweenStations);
                } else if is_station_cell(walk.current) {
                    walk.stations_passed += 1;
                }
            }

            walk.previous = Some(walk.position);
            walk.position = next_pos;
            walk.current = next;
        }

        let destination = self
            .catalog
            .station_name(walk.current)
            .map(str::to_string);

        if destination.is_none() && self.config.require_station_endpoint {
            debug!(end = %walk.position, symbol = %walk.current, "route ends off-station");
            return Err(RouteError::RouteEndpointIsNotStation);
        }

        debug!(
            start = start_station,
            steps = route.len(),
            stations_passed = walk.stations_passed,
            destination = destination.as_deref().unwrap_or(""),
            "route valid"
        );

        Ok(RouteSummary {
            stations_passed: walk.stations_passed,
            destination,
        })
    }
}
