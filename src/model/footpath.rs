//! Footpaths (component A): directed walking edges between stops.

use crate::model::Time;

/// A directed walking edge `(from_stop, to_stop, walking_time)`.
///
/// A loop (`from_stop_id == to_stop_id`) is permitted and represents the
/// minimum dwell time at that stop (spec.md §3). `walking_time` is typed
/// as an unsigned integer, so the `walking_time >= 0` invariant holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Footpath {
    from_stop_id: String,
    to_stop_id: String,
    walking_time: Time,
}

impl Footpath {
    pub fn new(from_stop_id: impl Into<String>, to_stop_id: impl Into<String>, walking_time: Time) -> Self {
        Footpath {
            from_stop_id: from_stop_id.into(),
            to_stop_id: to_stop_id.into(),
            walking_time,
        }
    }

    pub fn from_stop_id(&self) -> &str {
        &self.from_stop_id
    }

    pub fn to_stop_id(&self) -> &str {
        &self.to_stop_id
    }

    pub fn walking_time(&self) -> Time {
        self.walking_time
    }

    /// A loop footpath represents the minimum dwell at its stop.
    pub fn is_loop(&self) -> bool {
        self.from_stop_id == self.to_stop_id
    }
}
