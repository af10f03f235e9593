//! Data model for the connection scan timetable.
//!
//! Contains the validated value types of the static timetable (stops,
//! footpaths, connections, trips), the journey model produced by the
//! routing engine, the container that owns everything and derives the
//! indices the scan loop runs over, and the footpath-transitivity utility.

pub mod connection;
pub mod container;
pub mod footpath;
pub mod journey;
pub mod stop;
pub mod transitivity;
pub mod trip;

pub use connection::Connection;
pub use container::TimetableContainer;
pub use footpath::Footpath;
pub use journey::{Journey, JourneyLeg};
pub use stop::Stop;
pub use transitivity::{TransitivityReport, check_transitivity, make_transitive};
pub use trip::{Trip, TripType};

/// Seconds since midnight. May exceed `24 * 3600` to express overnight
/// service (spec.md §4.3.6).
pub type Time = u32;
