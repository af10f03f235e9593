//! GTFS-shaped feed ingestion.

mod de;
mod ingest;
mod raw_types;

pub use ingest::load_gtfs_dir;
pub use raw_types::{FeedRoute, FeedStop, FeedStopTime, FeedTrip, FeedTransfer};
