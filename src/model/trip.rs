//! Trips (component A): an ordered, validated sequence of connections.

use hashbrown::HashSet;
use itertools::Itertools;

use crate::TimetableError;
use crate::model::Connection;

/// Coarse vehicle category, carried through for reporting. Defaults to
/// `Unknown` when a feed doesn't supply one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripType {
    Tram,
    Rail,
    Bus,
    Ferry,
    CableCar,
    Funicular,
    #[default]
    Unknown,
}

/// Identity plus an ordered list of connections belonging to the same
/// vehicle run.
///
/// Invariants across consecutive connections `c_i, c_{i+1}` (spec.md §3):
/// `c_i.to_stop == c_{i+1}.from_stop` and `c_i.arr_time <= c_{i+1}.dep_time`.
#[derive(Debug, Clone)]
pub struct Trip {
    id: String,
    connections: Vec<Connection>,
    trip_type: TripType,
}

impl Trip {
    pub fn new(
        id: impl Into<String>,
        connections: Vec<Connection>,
        trip_type: TripType,
    ) -> Result<Self, TimetableError> {
        let id = id.into();
        for (prev, next) in connections.iter().tuple_windows() {
            if prev.to_stop_id() != next.from_stop_id() {
                return Err(TimetableError::NonAdjacentConnections {
                    trip_id: id,
                    prev_to: prev.to_stop_id().to_string(),
                    next_from: next.from_stop_id().to_string(),
                });
            }
            if prev.arr_time() > next.dep_time() {
                return Err(TimetableError::NonMonotonicTrip {
                    trip_id: id,
                    prev_arr: prev.arr_time(),
                    next_dep: next.dep_time(),
                });
            }
        }
        Ok(Trip {
            id,
            connections,
            trip_type,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    /// All stop ids touched by this trip, used by the container to
    /// validate that every referenced stop exists.
    pub(crate) fn stop_ids(&self) -> HashSet<&str> {
        let mut ids = HashSet::with_capacity(self.connections.len() + 1);
        for connection in &self.connections {
            ids.insert(connection.from_stop_id());
            ids.insert(connection.to_stop_id());
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(trip: &str, from: &str, to: &str, dep: u32, arr: u32) -> Connection {
        Connection::new(trip, from, to, dep, arr).unwrap()
    }

    #[test]
    fn accepts_consistent_chain() {
        let trip = Trip::new(
            "t1",
            vec![conn("t1", "a", "b", 0, 10), conn("t1", "b", "c", 20, 30)],
            TripType::Bus,
        )
        .unwrap();
        assert_eq!(trip.connections().len(), 2);
    }

    #[test]
    fn rejects_non_adjacent_stops() {
        let err = Trip::new(
            "t1",
            vec![conn("t1", "a", "b", 0, 10), conn("t1", "x", "c", 20, 30)],
            TripType::Bus,
        )
        .unwrap_err();
        assert!(matches!(err, TimetableError::NonAdjacentConnections { .. }));
    }

    #[test]
    fn rejects_non_monotonic_times() {
        let err = Trip::new(
            "t1",
            vec![conn("t1", "a", "b", 0, 30), conn("t1", "b", "c", 20, 40)],
            TripType::Bus,
        )
        .unwrap_err();
        assert!(matches!(err, TimetableError::NonMonotonicTrip { .. }));
    }

    #[test]
    fn single_connection_trip_is_always_consistent() {
        assert!(Trip::new("t1", vec![conn("t1", "a", "b", 0, 10)], TripType::Unknown).is_ok());
    }
}
