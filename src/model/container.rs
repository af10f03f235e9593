//! The timetable container (component B): owns every validated stop,
//! footpath and trip, and derives the interned, array-of-struct indices the
//! routing engine scans over.

use hashbrown::HashMap;
use log::{info, warn};

use crate::TimetableError;
use crate::model::transitivity::check_transitivity;
use crate::model::{Connection, Footpath, Stop, Time, Trip};

/// Interned index of a [`Stop`] within a [`TimetableContainer`].
pub type StopIdx = usize;
/// Interned index of a [`Trip`] within a [`TimetableContainer`].
pub type TripIdx = usize;

/// One elementary connection, with its endpoints resolved to interned stop
/// indices and its trip resolved to an interned trip index, ready to be
/// sorted by `(dep_time, arr_time)` for the scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IndexedConnection {
    pub trip: TripIdx,
    pub position_in_trip: usize,
    pub from: StopIdx,
    pub to: StopIdx,
    pub dep_time: Time,
    pub arr_time: Time,
}

/// One outgoing footpath, with its target resolved to an interned stop
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IndexedFootpath {
    pub to: StopIdx,
    pub walking_time: Time,
}

/// Owns the whole static timetable and the indices derived from it.
///
/// Built once via [`TimetableContainer::build`] and then queried many times;
/// there is no mutation after construction.
#[derive(Debug)]
pub struct TimetableContainer {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopIdx>,
    trips: Vec<Trip>,
    trip_index: HashMap<String, TripIdx>,
    sorted_connections: Vec<IndexedConnection>,
    /// The same connections as `sorted_connections`, grouped by trip and
    /// kept in trip order, so the routing engine can resolve a boarding
    /// connection's endpoints without re-parsing stop ids during
    /// reconstruction.
    indexed_trip_connections: Vec<Vec<IndexedConnection>>,
    outgoing_footpaths: Vec<Vec<IndexedFootpath>>,
    stops_by_name: HashMap<String, StopIdx>,
}

impl TimetableContainer {
    /// Validates and assembles a timetable out of the three raw maps an
    /// ingestion collaborator (e.g. [`crate::loading`]) produces.
    ///
    /// Every map key must match the id embedded in its value, and every
    /// stop id referenced by a footpath or a trip's connections must exist
    /// in `stops_per_id` (spec.md §3). Construction never fails on
    /// non-transitive footpaths; it only logs a warning, since the scan
    /// loop only ever follows direct footpaths (spec.md §4.2).
    pub fn build(
        stops_per_id: HashMap<String, Stop>,
        footpaths_per_from_to: HashMap<(String, String), Footpath>,
        trips_per_id: HashMap<String, Trip>,
    ) -> Result<Self, TimetableError> {
        for (key, stop) in &stops_per_id {
            if key != stop.id() {
                return Err(TimetableError::StopIdMismatch {
                    key: key.clone(),
                    actual: stop.id().to_string(),
                });
            }
        }

        for ((key_from, key_to), footpath) in &footpaths_per_from_to {
            if key_from != footpath.from_stop_id() || key_to != footpath.to_stop_id() {
                return Err(TimetableError::FootpathKeyMismatch {
                    key_from: key_from.clone(),
                    key_to: key_to.clone(),
                    actual_from: footpath.from_stop_id().to_string(),
                    actual_to: footpath.to_stop_id().to_string(),
                });
            }
            if !stops_per_id.contains_key(footpath.from_stop_id()) || !stops_per_id.contains_key(footpath.to_stop_id())
            {
                return Err(TimetableError::DanglingFootpathStop {
                    from: footpath.from_stop_id().to_string(),
                    to: footpath.to_stop_id().to_string(),
                });
            }
        }

        for (key, trip) in &trips_per_id {
            if key != trip.id() {
                return Err(TimetableError::TripIdMismatch {
                    key: key.clone(),
                    actual: trip.id().to_string(),
                });
            }
            for stop_id in trip.stop_ids() {
                if !stops_per_id.contains_key(stop_id) {
                    return Err(TimetableError::DanglingTripStop {
                        trip_id: trip.id().to_string(),
                        stop_id: stop_id.to_string(),
                    });
                }
            }
        }

        let report = check_transitivity(&footpaths_per_from_to);
        if !report.is_empty() {
            warn!(
                "timetable footpaths are not transitively closed: {} missing, {} tighter-than-existing; \
                 the scan loop only follows direct footpaths, call make_transitive explicitly if needed",
                report.missing.len(),
                report.tighter.len(),
            );
        }

        // Intern stops in id order, for a build that is deterministic
        // regardless of the incoming hash map's iteration order.
        let mut stops_sorted: Vec<(String, Stop)> = stops_per_id.into_iter().collect();
        stops_sorted.sort_by(|a, b| a.0.cmp(&b.0));
        let mut stops = Vec::with_capacity(stops_sorted.len());
        let mut stop_index = HashMap::with_capacity(stops_sorted.len());
        for (id, stop) in stops_sorted {
            stop_index.insert(id, stops.len());
            stops.push(stop);
        }

        let mut trips_sorted: Vec<(String, Trip)> = trips_per_id.into_iter().collect();
        trips_sorted.sort_by(|a, b| a.0.cmp(&b.0));
        let mut trips = Vec::with_capacity(trips_sorted.len());
        let mut trip_index = HashMap::with_capacity(trips_sorted.len());
        for (id, trip) in trips_sorted {
            trip_index.insert(id, trips.len());
            trips.push(trip);
        }

        let mut sorted_connections = Vec::new();
        let mut indexed_trip_connections = Vec::with_capacity(trips.len());
        for (trip_idx, trip) in trips.iter().enumerate() {
            let mut per_trip = Vec::with_capacity(trip.connections().len());
            for (position_in_trip, connection) in trip.connections().iter().enumerate() {
                let indexed = IndexedConnection {
                    trip: trip_idx,
                    position_in_trip,
                    from: stop_index[connection.from_stop_id()],
                    to: stop_index[connection.to_stop_id()],
                    dep_time: connection.dep_time(),
                    arr_time: connection.arr_time(),
                };
                sorted_connections.push(indexed);
                per_trip.push(indexed);
            }
            indexed_trip_connections.push(per_trip);
        }
        sorted_connections.sort_by_key(|c| (c.dep_time, c.arr_time));

        let mut outgoing_footpaths = vec![Vec::new(); stops.len()];
        for footpath in footpaths_per_from_to.values() {
            let from = stop_index[footpath.from_stop_id()];
            let to = stop_index[footpath.to_stop_id()];
            outgoing_footpaths[from].push(IndexedFootpath {
                to,
                walking_time: footpath.walking_time(),
            });
        }

        // Stops sharing a human-facing name resolve to the station over a
        // platform, and otherwise to the shortest, lexicographically-first
        // id - an arbitrary but deterministic tie-break (spec.md §4.5).
        let mut candidates_by_name: HashMap<&str, Vec<StopIdx>> = HashMap::new();
        for (idx, stop) in stops.iter().enumerate() {
            candidates_by_name.entry(stop.name()).or_default().push(idx);
        }
        let mut stops_by_name = HashMap::with_capacity(candidates_by_name.len());
        for (name, candidates) in candidates_by_name {
            let best = candidates
                .into_iter()
                .min_by_key(|&idx| (!stops[idx].is_station(), stops[idx].id().len(), stops[idx].id().to_string()))
                .expect("name groups are never empty");
            stops_by_name.insert(name.to_string(), best);
        }

        info!(
            "timetable built: {} stops, {} trips, {} connections, {} footpaths",
            stops.len(),
            trips.len(),
            sorted_connections.len(),
            footpaths_per_from_to.len(),
        );

        Ok(TimetableContainer {
            stops,
            stop_index,
            trips,
            trip_index,
            sorted_connections,
            indexed_trip_connections,
            outgoing_footpaths,
            stops_by_name,
        })
    }

    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    pub fn num_trips(&self) -> usize {
        self.trips.len()
    }

    pub fn num_connections(&self) -> usize {
        self.sorted_connections.len()
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn stop_by_id(&self, stop_id: &str) -> Option<&Stop> {
        self.stop_index.get(stop_id).map(|&idx| &self.stops[idx])
    }

    /// Resolves a human-facing stop name to the single representative stop
    /// chosen at build time (spec.md §4.5's `_by_name` wrappers).
    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stops_by_name.get(name).map(|&idx| &self.stops[idx])
    }

    pub fn trip_by_id(&self, trip_id: &str) -> Option<&Trip> {
        self.trip_index.get(trip_id).map(|&idx| &self.trips[idx])
    }

    pub(crate) fn stop_idx(&self, stop_id: &str) -> Option<StopIdx> {
        self.stop_index.get(stop_id).copied()
    }

    pub(crate) fn stop_id(&self, idx: StopIdx) -> &str {
        self.stops[idx].id()
    }

    pub(crate) fn stop(&self, idx: StopIdx) -> &Stop {
        &self.stops[idx]
    }

    pub(crate) fn sorted_connections(&self) -> &[IndexedConnection] {
        &self.sorted_connections
    }

    pub(crate) fn outgoing_footpaths(&self, stop: StopIdx) -> &[IndexedFootpath] {
        &self.outgoing_footpaths[stop]
    }

    pub(crate) fn trip_connections(&self, trip: TripIdx) -> &[Connection] {
        self.trips[trip].connections()
    }

    pub(crate) fn connection(&self, indexed: &IndexedConnection) -> &Connection {
        &self.trips[indexed.trip].connections()[indexed.position_in_trip]
    }

    pub(crate) fn indexed_trip_connection(&self, trip: TripIdx, position_in_trip: usize) -> IndexedConnection {
        self.indexed_trip_connections[trip][position_in_trip]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TripType;

    fn stop(id: &str) -> Stop {
        Stop::new(id, id, format!("stop {id}"), 0.0, 0.0, false, None)
    }

    fn one_trip_network() -> (HashMap<String, Stop>, HashMap<(String, String), Footpath>, HashMap<String, Trip>) {
        let stops = [stop("a"), stop("b"), stop("c")]
            .into_iter()
            .map(|s| (s.id().to_string(), s))
            .collect();
        let footpaths = [Footpath::new("a", "a", 60), Footpath::new("b", "b", 60), Footpath::new("c", "c", 60)]
            .into_iter()
            .map(|fp| ((fp.from_stop_id().to_string(), fp.to_stop_id().to_string()), fp))
            .collect();
        let trip = Trip::new(
            "t1",
            vec![
                Connection::new("t1", "a", "b", 100, 200).unwrap(),
                Connection::new("t1", "b", "c", 200, 300).unwrap(),
            ],
            TripType::Bus,
        )
        .unwrap();
        let trips = [(trip.id().to_string(), trip)].into_iter().collect();
        (stops, footpaths, trips)
    }

    #[test]
    fn builds_indices_from_valid_network() {
        let (stops, footpaths, trips) = one_trip_network();
        let container = TimetableContainer::build(stops, footpaths, trips).unwrap();
        assert_eq!(container.num_stops(), 3);
        assert_eq!(container.num_trips(), 1);
        assert_eq!(container.num_connections(), 2);
        assert!(container.stop_by_id("a").is_some());
        assert_eq!(container.sorted_connections()[0].dep_time, 100);
        assert_eq!(container.sorted_connections()[1].dep_time, 200);
    }

    #[test]
    fn rejects_dangling_trip_stop() {
        let (stops, footpaths, _) = one_trip_network();
        let bad_trip = Trip::new("t2", vec![Connection::new("t2", "a", "z", 0, 10).unwrap()], TripType::Bus).unwrap();
        let trips = [(bad_trip.id().to_string(), bad_trip)].into_iter().collect();
        let err = TimetableContainer::build(stops, footpaths, trips).unwrap_err();
        assert!(matches!(err, TimetableError::DanglingTripStop { .. }));
    }

    #[test]
    fn rejects_dangling_footpath_stop() {
        let (stops, _, trips) = one_trip_network();
        let footpaths = [(("a".to_string(), "z".to_string()), Footpath::new("a", "z", 60))]
            .into_iter()
            .collect();
        let err = TimetableContainer::build(stops, footpaths, trips).unwrap_err();
        assert!(matches!(err, TimetableError::DanglingFootpathStop { .. }));
    }

    #[test]
    fn stop_by_name_prefers_station_then_shortest_id() {
        let mut stops_per_id = HashMap::new();
        stops_per_id.insert("99".to_string(), Stop::new("99", "", "Bern", 0.0, 0.0, false, None));
        stops_per_id.insert("2".to_string(), Stop::new("2", "", "Bern", 0.0, 0.0, true, None));
        let container = TimetableContainer::build(stops_per_id, HashMap::new(), HashMap::new()).unwrap();
        assert_eq!(container.stop_by_name("Bern").unwrap().id(), "2");
    }
}
