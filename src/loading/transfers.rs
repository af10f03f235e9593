//! Footpath synthesis: fills the gaps a feed's own `transfers.txt` leaves,
//! by the three rules in spec.md §6.
//!
//! 1. Every stop gets a loop footpath (its minimum dwell time).
//! 2. Every child stop gets a footpath to and from its parent station.
//! 3. Any two stops within walking distance get a beeline footpath.
//!
//! None of these ever overwrite a footpath the feed already defines.

use std::f64::consts::PI;

use geo::Point;
use hashbrown::HashMap;
use log::debug;

use crate::loading::config::FootpathSynthesisConfig;
use crate::model::{Footpath, Stop};

const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Projects WGS84 coordinates onto the spherical Mercator plane, so beeline
/// distances can be computed with plain Euclidean geometry.
pub fn wgs84_to_spherical_mercator(lat: f64, lon: f64) -> Point<f64> {
    let x = EARTH_RADIUS_M * lon.to_radians();
    let y = EARTH_RADIUS_M * ((PI / 4.0 + lat.to_radians() / 2.0).tan()).ln();
    Point::new(x, y)
}

fn euclidean_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

type FootpathMap = HashMap<(String, String), Footpath>;

/// Adds a loop footpath for every stop that doesn't already have one.
pub fn add_loop_footpaths(footpaths: &mut FootpathMap, stops: &HashMap<String, Stop>, config: &FootpathSynthesisConfig) {
    let mut added = 0;
    for stop in stops.values() {
        let key = (stop.id().to_string(), stop.id().to_string());
        footpaths.entry(key).or_insert_with(|| {
            added += 1;
            Footpath::new(stop.id(), stop.id(), config.default_loop_walking_time)
        });
    }
    debug!("added {added} loop footpath(s)");
}

/// Adds a bidirectional footpath between every child stop and its parent
/// station, for any pair the feed doesn't already connect.
pub fn add_parent_station_footpaths(
    footpaths: &mut FootpathMap,
    stops: &HashMap<String, Stop>,
    config: &FootpathSynthesisConfig,
) {
    let mut added = 0;
    for stop in stops.values() {
        let Some(parent_id) = stop.parent_station_id() else {
            continue;
        };
        if !stops.contains_key(parent_id) {
            continue;
        }
        for (from, to) in [(stop.id(), parent_id), (parent_id, stop.id())] {
            let key = (from.to_string(), to.to_string());
            footpaths.entry(key).or_insert_with(|| {
                added += 1;
                Footpath::new(from, to, config.parent_station_walking_time)
            });
        }
    }
    debug!("added {added} parent-station footpath(s)");
}

/// Adds a bidirectional footpath between any two distinct stops within
/// `max_beeline_distance_m` of each other.
///
/// Quadratic in the number of stops; fine for the feed sizes this module
/// targets, but not meant for continent-scale timetables.
pub fn add_beeline_footpaths(footpaths: &mut FootpathMap, stops: &HashMap<String, Stop>, config: &FootpathSynthesisConfig) {
    let projected: Vec<(&Stop, Point<f64>)> = stops
        .values()
        .map(|stop| (stop, Point::new(stop.easting(), stop.northing())))
        .collect();

    let mut added = 0;
    for (i, (stop_a, point_a)) in projected.iter().enumerate() {
        for (stop_b, point_b) in &projected[i + 1..] {
            let distance = euclidean_distance(*point_a, *point_b);
            if distance > config.max_beeline_distance_m {
                continue;
            }
            let walking_time = (distance / config.walking_speed_m_per_s).round() as u32;
            for (from, to) in [(stop_a.id(), stop_b.id()), (stop_b.id(), stop_a.id())] {
                let key = (from.to_string(), to.to_string());
                footpaths.entry(key).or_insert_with(|| {
                    added += 1;
                    Footpath::new(from, to, walking_time)
                });
            }
        }
    }
    debug!("added {added} beeline footpath(s)");
}
