//! Connections (component A): a single elementary vehicle hop.

use crate::TimetableError;
use crate::model::Time;

/// A single vehicle hop `(trip_id, from_stop, to_stop, dep_time, arr_time)`.
///
/// Invariant: `dep_time <= arr_time` (spec.md §3), enforced by the
/// constructor. Times are seconds since midnight and may exceed
/// `24 * 3600` to express overnight service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    trip_id: String,
    from_stop_id: String,
    to_stop_id: String,
    dep_time: Time,
    arr_time: Time,
}

impl Connection {
    pub fn new(
        trip_id: impl Into<String>,
        from_stop_id: impl Into<String>,
        to_stop_id: impl Into<String>,
        dep_time: Time,
        arr_time: Time,
    ) -> Result<Self, TimetableError> {
        let trip_id = trip_id.into();
        if dep_time > arr_time {
            return Err(TimetableError::InvalidConnection {
                trip_id,
                dep_time,
                arr_time,
            });
        }
        Ok(Connection {
            trip_id,
            from_stop_id: from_stop_id.into(),
            to_stop_id: to_stop_id.into(),
            dep_time,
            arr_time,
        })
    }

    pub fn trip_id(&self) -> &str {
        &self.trip_id
    }

    pub fn from_stop_id(&self) -> &str {
        &self.from_stop_id
    }

    pub fn to_stop_id(&self) -> &str {
        &self.to_stop_id
    }

    pub fn dep_time(&self) -> Time {
        self.dep_time
    }

    pub fn arr_time(&self) -> Time {
        self.arr_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_dep_after_arr() {
        let err = Connection::new("t1", "1", "2", 100, 50).unwrap_err();
        assert_eq!(
            err,
            TimetableError::InvalidConnection {
                trip_id: "t1".to_string(),
                dep_time: 100,
                arr_time: 50,
            }
        );
    }

    #[test]
    fn accepts_equal_dep_arr() {
        assert!(Connection::new("t1", "1", "2", 100, 100).is_ok());
    }
}
