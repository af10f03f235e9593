//! Row shapes of the GTFS-like feed files this crate reads.
//!
//! Deliberately minimal: only the columns routing actually needs. Service
//! calendars (`calendar.txt`/`calendar_dates.txt`) are out of scope - every
//! trip in `trips.txt` is treated as running every day.

use serde::Deserialize;

use super::de::deserialize_gtfs_time;
use crate::model::Time;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedStop {
    pub stop_id: String,
    #[serde(default)]
    pub stop_code: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
    #[serde(default)]
    pub location_type: u8,
    #[serde(default)]
    pub parent_station: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedRoute {
    pub route_id: String,
    pub route_type: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedTrip {
    pub route_id: String,
    pub trip_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedStopTime {
    pub trip_id: String,
    #[serde(deserialize_with = "deserialize_gtfs_time")]
    pub arrival_time: Time,
    #[serde(deserialize_with = "deserialize_gtfs_time")]
    pub departure_time: Time,
    pub stop_id: String,
    pub stop_sequence: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedTransfer {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub transfer_type: u8,
    #[serde(default)]
    pub min_transfer_time: Option<Time>,
}

/// Maps a GTFS `routes.txt` `route_type` code to the coarse category
/// [`crate::model::TripType`] carries.
pub fn route_type_to_trip_type(route_type: u16) -> crate::model::TripType {
    use crate::model::TripType;
    match route_type {
        0 => TripType::Tram,
        1 | 2 => TripType::Rail,
        3 => TripType::Bus,
        4 => TripType::Ferry,
        5 => TripType::CableCar,
        6 | 7 => TripType::Funicular,
        _ => TripType::Unknown,
    }
}
