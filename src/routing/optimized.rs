//! Mode 3: optimized earliest-arrival query with journey reconstruction.
//!
//! Adds the "stopping" pruning over mode 2: once the target's earliest
//! arrival is known, connections departing after it can never improve the
//! answer and the scan can stop early (spec.md §4.4).

use crate::model::Journey;
use crate::model::Time;
use crate::model::container::{StopIdx, TimetableContainer};
use crate::routing::reconstruction::reconstruct_journey;
use crate::routing::scan::scan;

pub(crate) fn optimized_earliest_arrival_with_reconstruction(
    container: &TimetableContainer,
    source: StopIdx,
    target: StopIdx,
    desired_dep_time: Time,
) -> Option<Journey> {
    let state = scan(container, source, desired_dep_time, Some(target), true, true);
    reconstruct_journey(container, &state, source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::earliest_arrival::earliest_arrival;
    use crate::routing::reconstruction::earliest_arrival_with_reconstruction;
    use crate::model::{Connection, Footpath, Stop, Trip, TripType};

    /// Builds the small multi-trip network used throughout these tests: two
    /// competing trips from `a` to `c`, one direct and slower, one via a
    /// transfer at `b` that arrives earlier.
    fn competing_trips_network() -> TimetableContainer {
        let stops = ["a", "b", "c"]
            .into_iter()
            .map(|id| (id.to_string(), Stop::new(id, "", id, 0.0, 0.0, false, None)))
            .collect();
        let footpaths = [("b", "b", 30)]
            .into_iter()
            .map(|(from, to, t)| ((from.to_string(), to.to_string()), Footpath::new(from, to, t)))
            .collect();
        let slow_direct = Trip::new("slow", vec![Connection::new("slow", "a", "c", 0, 1000).unwrap()], TripType::Bus).unwrap();
        let leg1 = Trip::new("fast1", vec![Connection::new("fast1", "a", "b", 0, 100).unwrap()], TripType::Bus).unwrap();
        let leg2 = Trip::new("fast2", vec![Connection::new("fast2", "b", "c", 150, 300).unwrap()], TripType::Bus).unwrap();
        let trips = [slow_direct, leg1, leg2].into_iter().map(|t| (t.id().to_string(), t)).collect();
        TimetableContainer::build(stops, footpaths, trips).unwrap()
    }

    #[test]
    fn optimized_and_unoptimized_agree_with_time_only_mode() {
        let container = competing_trips_network();
        let a = container.stop_idx("a").unwrap();
        let c = container.stop_idx("c").unwrap();

        let time_only = earliest_arrival(&container, a, c, 0);
        let unoptimized = earliest_arrival_with_reconstruction(&container, a, c, 0).unwrap();
        let optimized = optimized_earliest_arrival_with_reconstruction(&container, a, c, 0).unwrap();

        assert_eq!(time_only, Some(300));
        assert_eq!(unoptimized.arr_time(), Some(300));
        assert_eq!(optimized.arr_time(), Some(300));
        assert_eq!(unoptimized.num_pt_journey_legs(), optimized.num_pt_journey_legs());
    }

    #[test]
    fn optimized_mode_picks_the_faster_connection() {
        let container = competing_trips_network();
        let a = container.stop_idx("a").unwrap();
        let c = container.stop_idx("c").unwrap();
        let journey = optimized_earliest_arrival_with_reconstruction(&container, a, c, 0).unwrap();
        assert_eq!(journey.num_pt_journey_legs(), 2);
    }
}
