//! Journey model (component E): an ordered sequence of journey legs.

use std::collections::VecDeque;

use crate::JourneyLegError;
use crate::model::{Connection, Footpath, Time};

/// One leg of a journey.
///
/// A tagged union rather than a triple of nullable fields, per spec.md §9:
/// either a pure walking leg, or a ride on a single trip optionally
/// followed by a walk to continue the journey.
#[derive(Debug, Clone, PartialEq)]
pub enum JourneyLeg {
    /// A walk between two stops (or a dwell, if `footpath.is_loop()`).
    Walk(Footpath),
    /// A ride on one trip from `in_connection.from_stop_id` to
    /// `out_connection.to_stop_id`, optionally followed by a walk.
    Ride {
        in_connection: Connection,
        out_connection: Connection,
        trailing_walk: Option<Footpath>,
    },
}

impl JourneyLeg {
    pub fn walk(footpath: Footpath) -> Self {
        JourneyLeg::Walk(footpath)
    }

    /// Builds a ride leg, checking the invariants from spec.md §3:
    /// `in_connection` and `out_connection` share a trip id, board-before-
    /// alight ordering holds, and a trailing walk (if any) starts where the
    /// ride ends.
    ///
    /// The tighter of the two historical validation rules is used here:
    /// `in_connection.arr_time <= out_connection.dep_time` (spec.md §9,
    /// "inconsistent trip-validation bound").
    pub fn ride(
        in_connection: Connection,
        out_connection: Connection,
        trailing_walk: Option<Footpath>,
    ) -> Result<Self, JourneyLegError> {
        if in_connection.trip_id() != out_connection.trip_id() {
            return Err(JourneyLegError::TripMismatch {
                in_trip: in_connection.trip_id().to_string(),
                out_trip: out_connection.trip_id().to_string(),
            });
        }
        // When the ride is a single elementary hop, in_connection and
        // out_connection are the same connection and there is no seam
        // between boarding and alighting connections to validate.
        if in_connection != out_connection && in_connection.arr_time() > out_connection.dep_time() {
            return Err(JourneyLegError::NotMonotonic {
                in_arr: in_connection.arr_time(),
                out_dep: out_connection.dep_time(),
            });
        }
        if let Some(footpath) = &trailing_walk {
            if out_connection.to_stop_id() != footpath.from_stop_id() {
                return Err(JourneyLegError::TrailingWalkMismatch {
                    to_stop: out_connection.to_stop_id().to_string(),
                    fp_from: footpath.from_stop_id().to_string(),
                });
            }
        }
        Ok(JourneyLeg::Ride {
            in_connection,
            out_connection,
            trailing_walk,
        })
    }

    pub fn is_pure_walk(&self) -> bool {
        matches!(self, JourneyLeg::Walk(_))
    }

    pub fn is_ride(&self) -> bool {
        matches!(self, JourneyLeg::Ride { .. })
    }

    /// The stop id this leg is boarded/entered from.
    pub fn first_stop_id(&self) -> &str {
        match self {
            JourneyLeg::Walk(footpath) => footpath.from_stop_id(),
            JourneyLeg::Ride { in_connection, .. } => in_connection.from_stop_id(),
        }
    }

    /// The stop id this leg alights/arrives at (after any trailing walk).
    pub fn last_stop_id(&self) -> &str {
        match self {
            JourneyLeg::Walk(footpath) => footpath.to_stop_id(),
            JourneyLeg::Ride {
                out_connection,
                trailing_walk,
                ..
            } => trailing_walk
                .as_ref()
                .map_or(out_connection.to_stop_id(), Footpath::to_stop_id),
        }
    }
}

/// An ordered sequence of journey legs, built back-to-front with
/// [`Journey::prepend`].
///
/// Invariants (spec.md §3): no two consecutive pure-walking legs; the last
/// stop of each leg equals the first stop of the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journey {
    legs: VecDeque<JourneyLeg>,
}

/// Raised by [`Journey::prepend`] when a leg would violate a journey-level
/// invariant (as opposed to a leg-level one, see [`JourneyLegError`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JourneyError {
    #[error("leg last_stop_id {leg_last} does not match journey's current first_stop_id {journey_first}")]
    NotAdjacent {
        leg_last: String,
        journey_first: String,
    },
    #[error("two consecutive pure-walking legs are not allowed")]
    ConsecutiveWalks,
}

impl Journey {
    pub fn empty() -> Self {
        Journey {
            legs: VecDeque::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn legs(&self) -> impl Iterator<Item = &JourneyLeg> {
        self.legs.iter()
    }

    /// Prepends `leg` so it becomes the new first leg of the journey.
    pub fn prepend(&mut self, leg: JourneyLeg) -> Result<(), JourneyError> {
        if let Some(first) = self.legs.front() {
            if leg.last_stop_id() != first.first_stop_id() {
                return Err(JourneyError::NotAdjacent {
                    leg_last: leg.last_stop_id().to_string(),
                    journey_first: first.first_stop_id().to_string(),
                });
            }
            if leg.is_pure_walk() && first.is_pure_walk() {
                return Err(JourneyError::ConsecutiveWalks);
            }
        }
        self.legs.push_front(leg);
        Ok(())
    }

    pub fn num_journey_legs(&self) -> usize {
        self.legs.len()
    }

    pub fn num_pt_journey_legs(&self) -> usize {
        self.legs.iter().filter(|leg| leg.is_ride()).count()
    }

    pub fn first_stop_id(&self) -> Option<&str> {
        self.legs.front().map(JourneyLeg::first_stop_id)
    }

    pub fn last_stop_id(&self) -> Option<&str> {
        self.legs.back().map(JourneyLeg::last_stop_id)
    }

    /// Departure time of the journey (spec.md §4.4).
    pub fn dep_time(&self) -> Option<Time> {
        match self.legs.front()? {
            JourneyLeg::Ride { in_connection, .. } => Some(in_connection.dep_time()),
            JourneyLeg::Walk(footpath) => match self.legs.get(1) {
                Some(JourneyLeg::Ride { in_connection, .. }) => {
                    Some(in_connection.dep_time() - footpath.walking_time())
                }
                _ => None,
            },
        }
    }

    /// Arrival time of the journey (spec.md §4.4): the last ride's
    /// `arr_time` plus a trailing walk, or undefined if the journey never
    /// boards a trip.
    pub fn arr_time(&self) -> Option<Time> {
        match self.legs.back()? {
            JourneyLeg::Ride {
                out_connection,
                trailing_walk,
                ..
            } => Some(out_connection.arr_time() + trailing_walk.as_ref().map_or(0, Footpath::walking_time)),
            JourneyLeg::Walk(_) => None,
        }
    }

    pub fn pt_in_stop_ids(&self) -> Vec<String> {
        self.legs
            .iter()
            .filter_map(|leg| match leg {
                JourneyLeg::Ride { in_connection, .. } => Some(in_connection.from_stop_id().to_string()),
                JourneyLeg::Walk(_) => None,
            })
            .collect()
    }

    pub fn pt_out_stop_ids(&self) -> Vec<String> {
        self.legs
            .iter()
            .filter_map(|leg| match leg {
                JourneyLeg::Ride { out_connection, .. } => Some(out_connection.to_stop_id().to_string()),
                JourneyLeg::Walk(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(trip: &str, from: &str, to: &str, dep: u32, arr: u32) -> Connection {
        Connection::new(trip, from, to, dep, arr).unwrap()
    }

    #[test]
    fn empty_journey_has_no_endpoints() {
        let journey = Journey::empty();
        assert!(journey.is_empty());
        assert_eq!(journey.first_stop_id(), None);
        assert_eq!(journey.dep_time(), None);
        assert_eq!(journey.arr_time(), None);
    }

    #[test]
    fn single_walk_leg_has_undefined_times() {
        let mut journey = Journey::empty();
        journey.prepend(JourneyLeg::walk(Footpath::new("a", "b", 300))).unwrap();
        assert_eq!(journey.num_journey_legs(), 1);
        assert_eq!(journey.num_pt_journey_legs(), 0);
        assert_eq!(journey.dep_time(), None);
        assert_eq!(journey.arr_time(), None);
    }

    #[test]
    fn rejects_consecutive_walks() {
        let mut journey = Journey::empty();
        journey.prepend(JourneyLeg::walk(Footpath::new("b", "c", 60))).unwrap();
        let err = journey
            .prepend(JourneyLeg::walk(Footpath::new("a", "b", 60)))
            .unwrap_err();
        assert_eq!(err, JourneyError::ConsecutiveWalks);
    }

    #[test]
    fn rejects_non_adjacent_prepend() {
        let mut journey = Journey::empty();
        journey
            .prepend(JourneyLeg::ride(conn("t1", "b", "c", 100, 200), conn("t1", "b", "c", 100, 200), None).unwrap())
            .unwrap();
        let err = journey
            .prepend(JourneyLeg::ride(conn("t0", "x", "y", 0, 50), conn("t0", "x", "y", 0, 50), None).unwrap())
            .unwrap_err();
        assert!(matches!(err, JourneyError::NotAdjacent { .. }));
    }

    #[test]
    fn ride_then_leading_walk_derives_dep_time() {
        let mut journey = Journey::empty();
        journey
            .prepend(JourneyLeg::ride(conn("t1", "b", "c", 700, 900), conn("t1", "b", "c", 700, 900), None).unwrap())
            .unwrap();
        journey.prepend(JourneyLeg::walk(Footpath::new("a", "b", 120))).unwrap();
        assert_eq!(journey.dep_time(), Some(700 - 120));
        assert_eq!(journey.arr_time(), Some(900));
    }

    #[test]
    fn trailing_walk_is_added_to_arrival() {
        let journey_leg = JourneyLeg::ride(
            conn("t1", "a", "b", 0, 100),
            conn("t1", "a", "b", 0, 100),
            Some(Footpath::new("b", "c", 50)),
        )
        .unwrap();
        let mut journey = Journey::empty();
        journey.prepend(journey_leg).unwrap();
        assert_eq!(journey.arr_time(), Some(150));
        assert_eq!(journey.last_stop_id(), Some("c"));
    }

    #[test]
    fn ride_rejects_mismatched_trip_ids() {
        let err = JourneyLeg::ride(conn("t1", "a", "b", 0, 10), conn("t2", "b", "c", 20, 30), None).unwrap_err();
        assert!(matches!(err, JourneyLegError::TripMismatch { .. }));
    }

    #[test]
    fn ride_rejects_trailing_walk_from_wrong_stop() {
        let err = JourneyLeg::ride(
            conn("t1", "a", "b", 0, 10),
            conn("t1", "a", "b", 0, 10),
            Some(Footpath::new("x", "y", 10)),
        )
        .unwrap_err();
        assert!(matches!(err, JourneyLegError::TrailingWalkMismatch { .. }));
    }
}
