//! Query-scoped mutable state: the S/T/L tables of spec.md §4.3.

use crate::model::Time;
use crate::model::container::{IndexedConnection, StopIdx};

/// Upper bound on any reachable time: two days past midnight. Large enough
/// that overnight service (spec.md §4.3.6) never saturates it, small enough
/// to never overflow when a footpath's walking time is added on top.
pub const INFINITY: Time = 2 * 24 * 3600;

/// How a stop's current earliest-arrival time in `L` was reached.
///
/// Footpaths are only ever relaxed off a connection's arrival stop or off
/// the query's source stop, never off another footpath (spec.md §4.2), so
/// `Footpath::from` always resolves to a stop whose own entry is either
/// `Connection` or the `None` sentinel at the source.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reached {
    Connection(IndexedConnection),
    Footpath { from: StopIdx, walking_time: Time },
}

/// `S`, `T` and `L` from spec.md §4.3, scoped to a single query.
pub(crate) struct ScanState {
    /// `S`: earliest known arrival time at each stop. This is the raw
    /// arrival - what a rider actually experiences getting off at that stop
    /// - and is what gets reported back to the caller (spec.md §4.3.1).
    pub(crate) earliest_arrival: Vec<Time>,
    /// Earliest time a stop is ready to board a *different* trip: the raw
    /// arrival plus that stop's own loop footpath (its minimum change time),
    /// if it has one. Continuing on the same trip never needs this - it
    /// only gates boarding a new one (spec.md §4.3.6).
    pub(crate) board_ready: Vec<Time>,
    /// `T`: position within its trip of the earliest connection boarded,
    /// once that trip has been boarded at all.
    pub(crate) earliest_trip_position: Vec<Option<usize>>,
    /// `L`: reconstruction pointer per stop. Only populated by the traced
    /// scan variants.
    pub(crate) reached_via: Vec<Option<Reached>>,
}

impl ScanState {
    pub(crate) fn new(num_stops: usize, num_trips: usize, track_reconstruction: bool) -> Self {
        ScanState {
            earliest_arrival: vec![INFINITY; num_stops],
            board_ready: vec![INFINITY; num_stops],
            earliest_trip_position: vec![None; num_trips],
            reached_via: if track_reconstruction {
                vec![None; num_stops]
            } else {
                Vec::new()
            },
        }
    }
}
