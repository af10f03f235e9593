use thiserror::Error;

/// Fatal failures raised while validating and assembling the timetable.
///
/// Every variant names the offending key/value pair so ingestion can point
/// at the bad record directly.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TimetableError {
    #[error("stop map key {key} does not match stop id {actual}")]
    StopIdMismatch { key: String, actual: String },

    #[error(
        "footpath map key ({key_from}, {key_to}) does not match footpath ({actual_from}, {actual_to})"
    )]
    FootpathKeyMismatch {
        key_from: String,
        key_to: String,
        actual_from: String,
        actual_to: String,
    },

    #[error("footpath ({from}, {to}) references unknown stop")]
    DanglingFootpathStop { from: String, to: String },

    #[error("trip map key {key} does not match trip id {actual}")]
    TripIdMismatch { key: String, actual: String },

    #[error("trip {trip_id} references unknown stop {stop_id}")]
    DanglingTripStop { trip_id: String, stop_id: String },

    #[error("connection dep_time {dep_time} <= arr_time {arr_time} does not hold for trip {trip_id}")]
    InvalidConnection {
        trip_id: String,
        dep_time: u32,
        arr_time: u32,
    },

    #[error(
        "trip {trip_id}: connection to_stop {prev_to} does not equal next connection from_stop {next_from}"
    )]
    NonAdjacentConnections {
        trip_id: String,
        prev_to: String,
        next_from: String,
    },

    #[error(
        "trip {trip_id}: connection arr_time {prev_arr} is greater than next connection dep_time {next_dep}"
    )]
    NonMonotonicTrip {
        trip_id: String,
        prev_arr: u32,
        next_dep: u32,
    },
}

/// Failures raised while constructing a single [`crate::model::JourneyLeg`].
///
/// The CSA engine never surfaces these to callers - it only ever builds
/// legs it has already proven valid from its own tables. This error exists
/// so the invariant is still checked at the one place legs are assembled.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum JourneyLegError {
    #[error(
        "ride leg in_connection trip_id {in_trip} does not match out_connection trip_id {out_trip}"
    )]
    TripMismatch { in_trip: String, out_trip: String },

    #[error("ride leg in_connection.arr_time {in_arr} is greater than out_connection.dep_time {out_dep}")]
    NotMonotonic { in_arr: u32, out_dep: u32 },

    #[error(
        "ride leg out_connection.to_stop {to_stop} does not match trailing footpath.from_stop {fp_from}"
    )]
    TrailingWalkMismatch { to_stop: String, fp_from: String },
}

/// Query-level failures. An unreachable target is *not* an error (see
/// [`crate::routing`]) - these variants only cover malformed queries.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RoutingError {
    #[error("no stop named {0:?}")]
    UnknownStopName(String),

    #[error("no stop with id {0:?}")]
    UnknownStopId(String),
}
