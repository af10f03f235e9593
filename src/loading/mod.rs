//! Ingestion collaborator: turns a GTFS-shaped feed directory into the
//! value types [`crate::model::TimetableContainer::build`] expects.
//!
//! Out of scope for the routing engine itself (spec.md §1's non-goals), but
//! carried here as a thin, realistic producer of those value types.

mod config;
mod error;
pub mod gtfs;
mod transfers;

pub use config::FootpathSynthesisConfig;
pub use error::LoadingError;
pub use gtfs::load_gtfs_dir;
pub use transfers::wgs84_to_spherical_mercator;
