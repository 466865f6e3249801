//! Scenario tests for route validation.

use super::*;
use crate::catalog::{Listing, SymbolCatalog};
use crate::domain::{Direction, Route};
use crate::map::TubeMap;

const MAP: &str = "\
A---B---C
    |   #
    |   #
    D###E
   /
  F";

const STATIONS: &str = "\
A Aldgate
B Bank
C Camden Town
D Dalston
E Euston
F Finchley Road
Z Zone Six
";

const LINES: &str = "\
- Central
| Northern
# Jubilee
/ Victoria
";

fn map() -> TubeMap {
    TubeMap::parse(MAP).unwrap()
}

fn catalog() -> SymbolCatalog {
    SymbolCatalog::new(
        Listing::parse(STATIONS).unwrap(),
        Listing::parse(LINES).unwrap(),
    )
}

fn validate(start: &str, route: &str) -> Result<RouteSummary, RouteError> {
    validate_with(&ValidatorConfig::default(), start, route)
}

fn validate_with(
    config: &ValidatorConfig,
    start: &str,
    route: &str,
) -> Result<RouteSummary, RouteError> {
    let map = map();
    let catalog = catalog();
    RouteValidator::new(&map, &catalog, config).validate(start, route)
}

fn summary(stations_passed: usize, destination: Option<&str>) -> RouteSummary {
    RouteSummary {
        stations_passed,
        destination: destination.map(str::to_string),
    }
}

// ============================================================================
// Valid routes
// ============================================================================

#[test]
fn empty_route_stays_at_start() {
    assert_eq!(validate("Aldgate", ""), Ok(summary(0, Some("Aldgate"))));
    assert_eq!(validate("Euston", ",,"), Ok(summary(0, Some("Euston"))));
}

#[test]
fn adjacent_station_is_not_counted() {
    // Arriving at a station from a line never counts; only leaving one does
    assert_eq!(validate("Aldgate", "E,E,E,E"), Ok(summary(0, Some("Bank"))));
}

#[test]
fn passing_through_a_station_counts_it() {
    assert_eq!(
        validate("Aldgate", "E,E,E,E,E,E,E,E"),
        Ok(summary(1, Some("Camden Town")))
    );
}

#[test]
fn changing_line_at_a_station() {
    // Central to Bank, then Northern down to Dalston
    assert_eq!(
        validate("Aldgate", "E,E,E,E,S,S,S"),
        Ok(summary(1, Some("Dalston")))
    );
}

#[test]
fn long_route_through_several_stations() {
    assert_eq!(
        validate("Aldgate", "E,E,E,E,S,S,S,E,E,E,E,N,N,N"),
        Ok(summary(3, Some("Camden Town")))
    );
}

#[test]
fn diagonal_steps() {
    assert_eq!(
        validate("Dalston", "SW,SW"),
        Ok(summary(0, Some("Finchley Road")))
    );
    assert_eq!(
        validate("Finchley Road", "NE,NE,E,E,E,E"),
        Ok(summary(1, Some("Euston")))
    );
}

#[test]
fn concatenated_tokens_match_comma_separated() {
    assert_eq!(validate("Dalston", "SWSW"), validate("Dalston", "SW,SW"));
    assert_eq!(
        validate("Aldgate", "EEEESSS"),
        validate("Aldgate", "E,E,E,E,S,S,S")
    );
}

#[test]
fn route_may_end_on_track_by_default() {
    assert_eq!(validate("Aldgate", "E,E"), Ok(summary(0, None)));
}

#[test]
fn reversing_on_a_station_is_allowed() {
    // Standing on Bank, stepping back west is a fresh departure, not a reversal
    assert_eq!(validate("Aldgate", "E,E,E,E,W"), Ok(summary(1, None)));
    assert_eq!(
        validate("Aldgate", "E,E,E,E,W,W,W,W"),
        Ok(summary(1, Some("Aldgate")))
    );
}

#[test]
fn validate_route_accepts_decoded_directions() {
    let map = map();
    let catalog = catalog();
    let config = ValidatorConfig::default();
    let validator = RouteValidator::new(&map, &catalog, &config);

    let route = Route::from_directions([Direction::SouthWest, Direction::SouthWest]);
    assert_eq!(
        validator.validate_route("Dalston", &route),
        Ok(summary(0, Some("Finchley Road")))
    );
}

#[test]
fn validator_is_reusable() {
    let map = map();
    let catalog = catalog();
    let config = ValidatorConfig::default();
    let validator = RouteValidator::new(&map, &catalog, &config);

    let first = validator.validate("Aldgate", "E,E,E,E");
    let _ = validator.validate("Aldgate", "E,W");
    let again = validator.validate("Aldgate", "E,E,E,E");
    assert_eq!(first, again);
}

// ============================================================================
// Start station
// ============================================================================

#[test]
fn unknown_start_station() {
    assert_eq!(
        validate("Nowhere", "E"),
        Err(RouteError::StartStationInvalid)
    );
    assert_eq!(validate("", ""), Err(RouteError::StartStationInvalid));
    assert_eq!(validate("aldgate", ""), Err(RouteError::StartStationInvalid));
}

#[test]
fn line_name_is_not_a_start_station() {
    assert_eq!(
        validate("Central", "E"),
        Err(RouteError::StartStationInvalid)
    );
}

#[test]
fn start_station_missing_from_map() {
    assert_eq!(
        validate("Zone Six", ""),
        Err(RouteError::StartStationInvalid)
    );
}

#[test]
fn start_station_checked_before_route() {
    assert_eq!(
        validate("Nowhere", "X,Y,Z"),
        Err(RouteError::StartStationInvalid)
    );
}

#[test]
fn start_name_shared_with_line_resolves_to_line_symbol() {
    let map = map();
    let catalog = SymbolCatalog::new(
        Listing::parse("V Victoria\n").unwrap(),
        Listing::parse(LINES).unwrap(),
    );
    let config = ValidatorConfig::default();
    let validator = RouteValidator::new(&map, &catalog, &config);

    // "Victoria" is a station name, but its symbol is taken from the line
    // listing, so the walk starts on the first '/' cell
    assert_eq!(validator.validate("Victoria", ""), Ok(summary(0, None)));
}

// ============================================================================
// Traversal errors
// ============================================================================

#[test]
fn invalid_direction() {
    assert_eq!(validate("Aldgate", "X"), Err(RouteError::InvalidDirection));
    assert_eq!(validate("Aldgate", "E,e"), Err(RouteError::InvalidDirection));
    assert_eq!(
        validate("Aldgate", "E,E,Q,E"),
        Err(RouteError::InvalidDirection)
    );
}

#[test]
fn earlier_errors_win_over_later_invalid_tokens() {
    assert_eq!(validate("Aldgate", "W,X"), Err(RouteError::OutOfBounds));
    assert_eq!(validate("Aldgate", "S,X"), Err(RouteError::OffTrack));
}

#[test]
fn off_map() {
    assert_eq!(validate("Aldgate", "W"), Err(RouteError::OutOfBounds));
    assert_eq!(validate("Aldgate", "N"), Err(RouteError::OutOfBounds));
    assert_eq!(validate("Aldgate", "NW"), Err(RouteError::OutOfBounds));
    assert_eq!(validate("Camden Town", "E"), Err(RouteError::OutOfBounds));
    assert_eq!(validate("Finchley Road", "S"), Err(RouteError::OutOfBounds));
}

#[test]
fn off_track() {
    assert_eq!(validate("Aldgate", "S"), Err(RouteError::OffTrack));
    assert_eq!(validate("Aldgate", "SE"), Err(RouteError::OffTrack));
    assert_eq!(validate("Bank", "S,E"), Err(RouteError::OffTrack));
}

#[test]
fn backtracking_along_a_line() {
    assert_eq!(
        validate("Aldgate", "E,W"),
        Err(RouteError::BacktrackingBetweenStations)
    );
    assert_eq!(
        validate("Aldgate", "E,E,W"),
        Err(RouteError::BacktrackingBetweenStations)
    );
    assert_eq!(
        validate("Bank", "S,S,N"),
        Err(RouteError::BacktrackingBetweenStations)
    );
}

#[test]
fn line_hopping() {
    // Northern '|' at (2, 4) is diagonally adjacent to Jubilee '#' at (3, 5)
    assert_eq!(
        validate("Bank", "S,S,SE"),
        Err(RouteError::LineHoppingBetweenStations)
    );
}

// ============================================================================
// Endpoint policy
// ============================================================================

#[test]
fn strict_endpoint_rejects_route_ending_on_track() {
    let strict = ValidatorConfig::strict();
    assert_eq!(
        validate_with(&strict, "Aldgate", "E,E"),
        Err(RouteError::RouteEndpointIsNotStation)
    );
}

#[test]
fn strict_endpoint_accepts_route_ending_on_station() {
    let strict = ValidatorConfig::strict();
    assert_eq!(
        validate_with(&strict, "Aldgate", "E,E,E,E"),
        Ok(summary(0, Some("Bank")))
    );
    assert_eq!(
        validate_with(&strict, "Aldgate", ""),
        Ok(summary(0, Some("Aldgate")))
    );
}

#[test]
fn traversal_errors_take_precedence_over_endpoint() {
    let strict = ValidatorConfig::strict();
    assert_eq!(
        validate_with(&strict, "Aldgate", "E,W"),
        Err(RouteError::BacktrackingBetweenStations)
    );
}

// ============================================================================
// Single-line map
// ============================================================================

fn single_line(route: &str) -> Result<RouteSummary, RouteError> {
    let map = TubeMap::parse("A-B").unwrap();
    let catalog = SymbolCatalog::new(
        Listing::parse("A StationA\nB StationB\n").unwrap(),
        Listing::parse("- Line\n").unwrap(),
    );
    let config = ValidatorConfig::default();
    RouteValidator::new(&map, &catalog, &config).validate("StationA", route)
}

#[test]
fn single_line_to_next_station() {
    // The count only goes up when leaving a station after the first step
    assert_eq!(single_line("E,E"), Ok(summary(0, Some("StationB"))));
}

#[test]
fn single_line_reversal() {
    assert_eq!(
        single_line("E,W,E"),
        Err(RouteError::BacktrackingBetweenStations)
    );
}

#[test]
fn single_line_off_either_end() {
    assert_eq!(single_line("W"), Err(RouteError::OutOfBounds));
    assert_eq!(single_line("E,E,E"), Err(RouteError::OutOfBounds));
}

#[test]
fn single_line_hop() {
    let map = TubeMap::parse("A-=B").unwrap();
    let catalog = SymbolCatalog::new(
        Listing::parse("A StationA\nB StationB\n").unwrap(),
        Listing::parse("- Red\n= Blue\n").unwrap(),
    );
    let config = ValidatorConfig::default();
    let validator = RouteValidator::new(&map, &catalog, &config);

    assert_eq!(
        validator.validate("StationA", "E,E,E"),
        Err(RouteError::LineHoppingBetweenStations)
    );
}

// ============================================================================
// Bundled sample map
// ============================================================================

fn sample(start: &str, route: &str) -> Result<RouteSummary, RouteError> {
    let map = TubeMap::parse(include_str!("../../data/map.txt")).unwrap();
    let catalog = SymbolCatalog::new(
        Listing::parse(include_str!("../../data/stations.txt")).unwrap(),
        Listing::parse(include_str!("../../data/lines.txt")).unwrap(),
    );
    let config = ValidatorConfig::default();
    RouteValidator::new(&map, &catalog, &config).validate(start, route)
}

#[test]
fn sample_map_down_the_northern_line() {
    assert_eq!(
        sample("Oxford Circus", "S,S,S,S,S,S"),
        Ok(summary(1, Some("Victoria")))
    );
}

#[test]
fn sample_map_across_and_down() {
    assert_eq!(
        sample("Acton Town", "EEEEEEEEEEEEEEEEEE,SE,SE,SE,S,S,S"),
        Ok(summary(4, Some("Shadwell")))
    );
}

#[test]
fn sample_map_rejections() {
    assert_eq!(sample("Paddington", "N"), Err(RouteError::OutOfBounds));
    assert_eq!(sample("Paddington", "E"), Err(RouteError::OffTrack));
    assert_eq!(
        sample("Kings Cross", "SE,NW"),
        Err(RouteError::BacktrackingBetweenStations)
    );
}

// ============================================================================
// Properties
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any route from an unknown start station is rejected up front
        #[test]
        fn unknown_start_always_rejected(
            start in "[a-z]{1,12}",
            route in "[NSEW,X]{0,24}",
        ) {
            prop_assert_eq!(validate(&start, &route), Err(RouteError::StartStationInvalid));
        }

        /// A first step off the top of the map is always out of bounds
        #[test]
        fn first_step_north_from_top_row(route in "[NSEW,]{0,16}") {
            let result = validate("Aldgate", &format!("N,{route}"));
            prop_assert_eq!(result, Err(RouteError::OutOfBounds));
        }

        /// Station counts never exceed the number of steps
        #[test]
        fn count_bounded_by_steps(route in "(N|S|E|W|NE|NW|SE|SW){0,20}") {
            if let Ok(summary) = validate("Bank", &route) {
                prop_assert!(summary.stations_passed <= Route::decode(&route).len());
            }
        }
    }
}
