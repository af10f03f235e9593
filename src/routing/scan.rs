//! The connection scan loop shared by every routing mode (spec.md §4.3).
//!
//! `earliest_arrival.rs`, `reconstruction.rs` and `optimized.rs` each call
//! [`scan`] with a different combination of `track_reconstruction` and
//! `stop_at_target`; the loop body itself never changes.

use crate::model::Time;
use crate::model::container::{StopIdx, TimetableContainer};
use crate::routing::binary_search::lower_bound_by_dep_time;
use crate::routing::state::{INFINITY, Reached, ScanState};

/// Runs one connection scan from `source` departing no earlier than
/// `desired_dep_time`.
///
/// `stop_at_target` enables the optimized mode's pruning: once `target`'s
/// earliest arrival is known, scanning stops as soon as a connection departs
/// after it, since connections are processed in non-decreasing departure
/// order and can never again improve on an already-settled target.
pub(crate) fn scan(
    container: &TimetableContainer,
    source: StopIdx,
    desired_dep_time: Time,
    target: Option<StopIdx>,
    track_reconstruction: bool,
    stop_at_target: bool,
) -> ScanState {
    let mut state = ScanState::new(container.num_stops(), container.num_trips(), track_reconstruction);

    // Zero-hop case: staying at the source stop is always "reachable" at
    // the desired departure time. This also resolves a self-query
    // (`source == target`) to `desired_dep_time` without special-casing it.
    // The source needs no dwell of its own before boarding.
    state.earliest_arrival[source] = desired_dep_time;
    state.board_ready[source] = desired_dep_time;

    for footpath in container.outgoing_footpaths(source) {
        let candidate = desired_dep_time + footpath.walking_time;
        if candidate < state.earliest_arrival[footpath.to] {
            state.earliest_arrival[footpath.to] = candidate;
            // Single-hop rule: footpaths never chain off another footpath,
            // so a stop reached this way carries no further dwell yet.
            state.board_ready[footpath.to] = candidate;
            if track_reconstruction {
                state.reached_via[footpath.to] = Some(Reached::Footpath {
                    from: source,
                    walking_time: footpath.walking_time,
                });
            }
        }
    }

    let start = lower_bound_by_dep_time(container.sorted_connections(), desired_dep_time);
    for connection in &container.sorted_connections()[start..] {
        if stop_at_target {
            if let Some(target) = target {
                let best_at_target = state.earliest_arrival[target];
                if best_at_target < INFINITY && connection.dep_time > best_at_target {
                    break;
                }
            }
        }

        if state.earliest_trip_position[connection.trip].is_none() {
            if state.board_ready[connection.from] > connection.dep_time {
                continue;
            }
            state.earliest_trip_position[connection.trip] = Some(connection.position_in_trip);
        }

        if connection.arr_time < state.earliest_arrival[connection.to] {
            state.earliest_arrival[connection.to] = connection.arr_time;
            if track_reconstruction {
                state.reached_via[connection.to] = Some(Reached::Connection(*connection));
            }

            // `c.to`'s own loop footpath is its minimum change time: fold it
            // into the board-ready value so a different trip can't be
            // boarded there before the dwell elapses (spec.md §4.3.6).
            // Continuing on the same trip never consults `board_ready`, so
            // this never penalizes a through-ride.
            let dwell = container
                .outgoing_footpaths(connection.to)
                .iter()
                .find(|footpath| footpath.to == connection.to)
                .map_or(0, |footpath| footpath.walking_time);
            state.board_ready[connection.to] = connection.arr_time + dwell;

            for footpath in container.outgoing_footpaths(connection.to) {
                if footpath.to == connection.to {
                    continue;
                }

                let candidate = connection.arr_time + footpath.walking_time;
                if candidate < state.earliest_arrival[footpath.to] {
                    state.earliest_arrival[footpath.to] = candidate;
                    state.board_ready[footpath.to] = candidate;
                    if track_reconstruction {
                        state.reached_via[footpath.to] = Some(Reached::Footpath {
                            from: connection.to,
                            walking_time: footpath.walking_time,
                        });
                    }
                }
            }
        }
    }

    state
}
