//! Journey reconstruction shared by the unoptimized and optimized
//! reconstructing routing modes (spec.md §4.4).

use crate::model::Time;
use crate::model::container::{StopIdx, TimetableContainer};
use crate::model::{Footpath, Journey, JourneyLeg};
use crate::routing::scan::scan;
use crate::routing::state::{INFINITY, Reached, ScanState};

/// Mode 2: unoptimized earliest-arrival query with journey reconstruction.
///
/// Runs the same unpruned scan as [`crate::routing::earliest_arrival`], but
/// tracks `L` and reconstructs the journey at the end. Returns `None` if
/// `target` is unreachable.
pub(crate) fn earliest_arrival_with_reconstruction(
    container: &TimetableContainer,
    source: StopIdx,
    target: StopIdx,
    desired_dep_time: Time,
) -> Option<Journey> {
    let state = scan(container, source, desired_dep_time, None, true, false);
    reconstruct_journey(container, &state, source, target)
}

/// Walks `state.reached_via` back from `target` to `source`, building the
/// journey leg by leg.
///
/// A footpath taken directly off a connection's arrival is bundled as that
/// leg's trailing walk rather than emitted as its own leg, matching
/// [`JourneyLeg::ride`]'s shape; a footpath taken directly from the query's
/// source stop (no preceding ride) becomes a standalone walking leg.
pub(crate) fn reconstruct_journey(
    container: &TimetableContainer,
    state: &ScanState,
    source: StopIdx,
    target: StopIdx,
) -> Option<Journey> {
    if state.earliest_arrival[target] >= INFINITY {
        return None;
    }
    if source == target {
        return Some(Journey::empty());
    }

    let mut journey = Journey::empty();
    let mut current = target;

    loop {
        match state.reached_via[current] {
            None => break,
            Some(Reached::Connection(indexed)) => {
                let board_position = state.earliest_trip_position[indexed.trip].expect("boarded trip has a board position");
                let board = container.indexed_trip_connection(indexed.trip, board_position);
                let leg = JourneyLeg::ride(container.connection(&board).clone(), container.connection(&indexed).clone(), None).ok()?;
                journey.prepend(leg).ok()?;
                current = board.from;
            }
            Some(Reached::Footpath { from, walking_time }) => match state.reached_via[from] {
                Some(Reached::Connection(indexed)) => {
                    let board_position =
                        state.earliest_trip_position[indexed.trip].expect("boarded trip has a board position");
                    let board = container.indexed_trip_connection(indexed.trip, board_position);
                    let in_connection = container.connection(&board).clone();
                    let out_connection = container.connection(&indexed).clone();
                    let trailing_walk = Footpath::new(container.stop_id(from), container.stop_id(current), walking_time);
                    let leg = JourneyLeg::ride(in_connection, out_connection, Some(trailing_walk)).ok()?;
                    journey.prepend(leg).ok()?;
                    current = board.from;
                }
                None => {
                    let leg = JourneyLeg::walk(Footpath::new(container.stop_id(from), container.stop_id(current), walking_time));
                    journey.prepend(leg).ok()?;
                    current = from;
                }
                Some(Reached::Footpath { .. }) => unreachable!("footpaths are never chained off another footpath"),
            },
        }
    }

    Some(journey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, Footpath as FootpathModel, Stop, Trip, TripType};

    fn build(
        stops: &[&str],
        footpaths: &[(&str, &str, u32)],
        trips: Vec<Trip>,
    ) -> TimetableContainer {
        let stops_per_id = stops
            .iter()
            .map(|&id| (id.to_string(), Stop::new(id, "", id, 0.0, 0.0, false, None)))
            .collect();
        let footpaths_per_from_to = footpaths
            .iter()
            .map(|&(from, to, t)| ((from.to_string(), to.to_string()), FootpathModel::new(from, to, t)))
            .collect();
        let trips_per_id = trips.into_iter().map(|t| (t.id().to_string(), t)).collect();
        TimetableContainer::build(stops_per_id, footpaths_per_from_to, trips_per_id).unwrap()
    }

    #[test]
    fn reconstructs_single_hop_ride() {
        let trip = Trip::new("t1", vec![Connection::new("t1", "a", "b", 100, 200).unwrap()], TripType::Bus).unwrap();
        let container = build(&["a", "b"], &[], vec![trip]);
        let a = container.stop_idx("a").unwrap();
        let b = container.stop_idx("b").unwrap();
        let journey = earliest_arrival_with_reconstruction(&container, a, b, 50).unwrap();
        assert_eq!(journey.num_journey_legs(), 1);
        assert_eq!(journey.num_pt_journey_legs(), 1);
        assert_eq!(journey.dep_time(), Some(100));
        assert_eq!(journey.arr_time(), Some(200));
    }

    #[test]
    fn reconstructs_ride_with_trailing_walk() {
        let trip = Trip::new("t1", vec![Connection::new("t1", "a", "b", 100, 200).unwrap()], TripType::Bus).unwrap();
        let container = build(&["a", "b", "c"], &[("b", "c", 60)], vec![trip]);
        let a = container.stop_idx("a").unwrap();
        let c = container.stop_idx("c").unwrap();
        let journey = earliest_arrival_with_reconstruction(&container, a, c, 50).unwrap();
        assert_eq!(journey.num_journey_legs(), 1);
        assert_eq!(journey.arr_time(), Some(260));
        assert_eq!(journey.last_stop_id(), Some("c"));
    }

    #[test]
    fn reconstructs_pure_walk_when_no_trip_needed() {
        let container = build(&["a", "b"], &[("a", "b", 90)], vec![]);
        let a = container.stop_idx("a").unwrap();
        let b = container.stop_idx("b").unwrap();
        let journey = earliest_arrival_with_reconstruction(&container, a, b, 0).unwrap();
        assert_eq!(journey.num_journey_legs(), 1);
        assert_eq!(journey.num_pt_journey_legs(), 0);
        assert_eq!(journey.dep_time(), None);
    }

    #[test]
    fn self_query_reconstructs_to_empty_journey() {
        let container = build(&["a"], &[], vec![]);
        let a = container.stop_idx("a").unwrap();
        let journey = earliest_arrival_with_reconstruction(&container, a, a, 50).unwrap();
        assert!(journey.is_empty());
    }

    #[test]
    fn unreachable_target_returns_none() {
        let container = build(&["a", "b"], &[], vec![]);
        let a = container.stop_idx("a").unwrap();
        let b = container.stop_idx("b").unwrap();
        assert!(earliest_arrival_with_reconstruction(&container, a, b, 0).is_none());
    }
}
