//! Reads a GTFS-shaped feed directory into the value types
//! [`crate::model::TimetableContainer::build`] expects.

use std::fs::File;
use std::path::Path;

use hashbrown::HashMap;
use log::{info, warn};

use super::raw_types::{FeedRoute, FeedStop, FeedStopTime, FeedTrip, route_type_to_trip_type};
use crate::loading::config::FootpathSynthesisConfig;
use crate::loading::error::LoadingError;
use crate::loading::transfers::{add_beeline_footpaths, add_loop_footpaths, add_parent_station_footpaths, wgs84_to_spherical_mercator};
use crate::model::{Connection, Footpath, Stop, TimetableContainer, Trip};

fn read_csv<T>(dir: &Path, file_name: &str) -> Result<Vec<T>, LoadingError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let path = dir.join(file_name);
    let file = File::open(&path).map_err(|source| LoadingError::Io {
        path: path.display().to_string(),
        source,
    })?;
    csv::Reader::from_reader(file)
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| LoadingError::Csv {
            path: path.display().to_string(),
            source,
        })
}

fn read_csv_optional<T>(dir: &Path, file_name: &str) -> Result<Vec<T>, LoadingError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    if dir.join(file_name).exists() {
        read_csv(dir, file_name)
    } else {
        Ok(Vec::new())
    }
}

/// Reads a GTFS-shaped feed directory and builds a [`TimetableContainer`].
///
/// Required files: `stops.txt`, `routes.txt`, `trips.txt`, `stop_times.txt`.
/// `transfers.txt` is optional; only `transfer_type == 2` rows carrying a
/// `min_transfer_time` are used directly, matching what feeds actually
/// publish footpaths as (spec.md §6). Whatever footpaths the feed leaves
/// out are synthesized per `config`. There is no calendar filtering: every
/// trip in `trips.txt` is assumed to run every day the query cares about.
pub fn load_gtfs_dir(dir: &Path, config: &FootpathSynthesisConfig) -> Result<TimetableContainer, LoadingError> {
    let feed_stops: Vec<FeedStop> = read_csv(dir, "stops.txt")?;
    let feed_routes: Vec<FeedRoute> = read_csv(dir, "routes.txt")?;
    let feed_trips: Vec<FeedTrip> = read_csv(dir, "trips.txt")?;
    let feed_stop_times: Vec<FeedStopTime> = read_csv(dir, "stop_times.txt")?;
    let feed_transfers: Vec<super::raw_types::FeedTransfer> = read_csv_optional(dir, "transfers.txt")?;

    let stops: HashMap<String, Stop> = feed_stops
        .into_iter()
        .map(|feed_stop| {
            let point = wgs84_to_spherical_mercator(feed_stop.stop_lat, feed_stop.stop_lon);
            let parent_station_id = (!feed_stop.parent_station.is_empty()).then_some(feed_stop.parent_station);
            let stop = Stop::new(
                feed_stop.stop_id.clone(),
                feed_stop.stop_code,
                feed_stop.stop_name,
                point.x(),
                point.y(),
                feed_stop.location_type == 1,
                parent_station_id,
            );
            (feed_stop.stop_id, stop)
        })
        .collect();

    let route_type_by_id: HashMap<String, u16> = feed_routes.into_iter().map(|r| (r.route_id, r.route_type)).collect();

    let trip_type_by_trip_id: HashMap<String, u16> = feed_trips
        .into_iter()
        .map(|trip| (trip.trip_id, route_type_by_id.get(&trip.route_id).copied().unwrap_or(u16::MAX)))
        .collect();

    let mut stop_times_by_trip: HashMap<String, Vec<FeedStopTime>> = HashMap::new();
    for stop_time in feed_stop_times {
        stop_times_by_trip.entry(stop_time.trip_id.clone()).or_default().push(stop_time);
    }

    let mut trips = HashMap::with_capacity(stop_times_by_trip.len());
    for (trip_id, mut stop_times) in stop_times_by_trip {
        let Some(&route_type) = trip_type_by_trip_id.get(&trip_id) else {
            return Err(LoadingError::UnknownTrip { trip_id });
        };
        stop_times.sort_by_key(|st| st.stop_sequence);
        let trip_type = route_type_to_trip_type(route_type);
        let connections: Vec<Connection> = stop_times
            .windows(2)
            .map(|pair| {
                let (from, to) = (&pair[0], &pair[1]);
                Connection::new(trip_id.clone(), from.stop_id.clone(), to.stop_id.clone(), from.departure_time, to.arrival_time)
            })
            .collect::<Result<Vec<Connection>, crate::TimetableError>>()?;
        if connections.is_empty() {
            continue;
        }
        trips.insert(trip_id.clone(), Trip::new(trip_id, connections, trip_type)?);
    }

    let mut footpaths: HashMap<(String, String), Footpath> = HashMap::new();
    for transfer in feed_transfers {
        if transfer.transfer_type != 2 {
            continue;
        }
        let Some(walking_time) = transfer.min_transfer_time else {
            warn!(
                "transfer ({} -> {}) has transfer_type 2 but no min_transfer_time, skipping",
                transfer.from_stop_id, transfer.to_stop_id
            );
            continue;
        };
        footpaths.insert(
            (transfer.from_stop_id.clone(), transfer.to_stop_id.clone()),
            Footpath::new(transfer.from_stop_id, transfer.to_stop_id, walking_time),
        );
    }

    add_loop_footpaths(&mut footpaths, &stops, config);
    add_parent_station_footpaths(&mut footpaths, &stops, config);
    add_beeline_footpaths(&mut footpaths, &stops, config);

    info!(
        "loaded feed from {}: {} stops, {} trips, {} footpaths",
        dir.display(),
        stops.len(),
        trips.len(),
        footpaths.len(),
    );

    Ok(TimetableContainer::build(stops, footpaths, trips)?)
}
