//! A Connection Scan Algorithm (Dibbelt et al., 2017) journey planner over a
//! static public-transit timetable.
//!
//! The [`model`] module holds the validated timetable (stops, footpaths,
//! connections, trips) and the [`model::TimetableContainer`] that owns it;
//! [`routing`] is the query engine built on top of it; [`loading`] is a
//! thin ingestion collaborator that turns a GTFS-shaped feed into the value
//! types [`model::TimetableContainer::build`] expects.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::{JourneyLegError, RoutingError, TimetableError};
pub use model::{Connection, Footpath, Journey, JourneyLeg, Stop, Time, TimetableContainer, Trip, TripType};
pub use routing::{
    INFINITY, route_earliest_arrival, route_earliest_arrival_by_name, route_earliest_arrival_with_reconstruction,
    route_earliest_arrival_with_reconstruction_by_name, route_optimized_earliest_arrival_with_reconstruction,
    route_optimized_earliest_arrival_with_reconstruction_by_name,
};
