//! The connection scan routing engine (component D).
//!
//! Three query modes share one scan loop ([`scan`]) and differ only in how
//! much bookkeeping they do and whether they stop early:
//!
//! 1. [`earliest_arrival`] - time only, full scan, no reconstruction.
//! 2. [`reconstruction::earliest_arrival_with_reconstruction`] - full scan,
//!    tracks `L`, reconstructs the journey.
//! 3. [`optimized::optimized_earliest_arrival_with_reconstruction`] - same
//!    as mode 2, plus the "stopping" pruning once the target is settled.
//!
//! [`engine`] wraps all three behind a stop-id and a stop-name API and is
//! the module's only public surface; everything else here operates on
//! interned [`crate::model::container::StopIdx`]/`TripIdx` indices.

mod binary_search;
mod earliest_arrival;
mod engine;
mod optimized;
mod reconstruction;
mod scan;
mod state;

pub use engine::{
    route_earliest_arrival, route_earliest_arrival_by_name, route_earliest_arrival_with_reconstruction,
    route_earliest_arrival_with_reconstruction_by_name, route_optimized_earliest_arrival_with_reconstruction,
    route_optimized_earliest_arrival_with_reconstruction_by_name,
};
pub use state::INFINITY;
