//! Mode 1: unoptimized earliest-arrival query (spec.md §4.4).
//!
//! Returns only the arrival time, so the scan runs without the
//! reconstruction bookkeeping the other two modes pay for.

use crate::model::Time;
use crate::model::container::{StopIdx, TimetableContainer};
use crate::routing::scan::scan;
use crate::routing::state::INFINITY;

/// Earliest time `target` can be reached departing `source` no earlier
/// than `desired_dep_time`, or `None` if it is unreachable.
///
/// `source == target` always returns `Some(desired_dep_time)`.
pub(crate) fn earliest_arrival(
    container: &TimetableContainer,
    source: StopIdx,
    target: StopIdx,
    desired_dep_time: Time,
) -> Option<Time> {
    let state = scan(container, source, desired_dep_time, None, false, false);
    let arrival = state.earliest_arrival[target];
    (arrival < INFINITY).then_some(arrival)
}
