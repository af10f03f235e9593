//! Convenience re-export of the crate's everyday types and entry points.

pub use crate::error::{JourneyLegError, RoutingError, TimetableError};
pub use crate::loading::{FootpathSynthesisConfig, LoadingError, load_gtfs_dir};
pub use crate::model::{Connection, Footpath, Journey, JourneyLeg, Stop, Time, TimetableContainer, Trip, TripType};
pub use crate::routing::{
    INFINITY, route_earliest_arrival, route_earliest_arrival_by_name, route_earliest_arrival_with_reconstruction,
    route_earliest_arrival_with_reconstruction_by_name, route_optimized_earliest_arrival_with_reconstruction,
    route_optimized_earliest_arrival_with_reconstruction_by_name,
};
