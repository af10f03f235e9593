//! Public routing API (component D): the three query modes, each available
//! by stop id and by stop name (spec.md §4.4, §4.5).

use crate::RoutingError;
use crate::model::container::TimetableContainer;
use crate::model::{Journey, Time};
use crate::routing::earliest_arrival::earliest_arrival;
use crate::routing::optimized::optimized_earliest_arrival_with_reconstruction;
use crate::routing::reconstruction::earliest_arrival_with_reconstruction;

fn resolve(container: &TimetableContainer, stop_id: &str) -> Result<usize, RoutingError> {
    container
        .stop_idx(stop_id)
        .ok_or_else(|| RoutingError::UnknownStopId(stop_id.to_string()))
}

fn resolve_by_name(container: &TimetableContainer, name: &str) -> Result<usize, RoutingError> {
    let stop = container
        .stop_by_name(name)
        .ok_or_else(|| RoutingError::UnknownStopName(name.to_string()))?;
    Ok(resolve(container, stop.id()).expect("stop resolved by name always has a valid id"))
}

/// Mode 1: earliest arrival time only.
pub fn route_earliest_arrival(
    container: &TimetableContainer,
    from_stop_id: &str,
    to_stop_id: &str,
    desired_dep_time: Time,
) -> Result<Option<Time>, RoutingError> {
    let from = resolve(container, from_stop_id)?;
    let to = resolve(container, to_stop_id)?;
    Ok(earliest_arrival(container, from, to, desired_dep_time))
}

/// Mode 1, resolved by stop name instead of stop id.
pub fn route_earliest_arrival_by_name(
    container: &TimetableContainer,
    from_name: &str,
    to_name: &str,
    desired_dep_time: Time,
) -> Result<Option<Time>, RoutingError> {
    let from = resolve_by_name(container, from_name)?;
    let to = resolve_by_name(container, to_name)?;
    Ok(earliest_arrival(container, from, to, desired_dep_time))
}

/// Mode 2: unoptimized earliest arrival with journey reconstruction.
pub fn route_earliest_arrival_with_reconstruction(
    container: &TimetableContainer,
    from_stop_id: &str,
    to_stop_id: &str,
    desired_dep_time: Time,
) -> Result<Option<Journey>, RoutingError> {
    let from = resolve(container, from_stop_id)?;
    let to = resolve(container, to_stop_id)?;
    Ok(earliest_arrival_with_reconstruction(container, from, to, desired_dep_time))
}

/// Mode 2, resolved by stop name instead of stop id.
pub fn route_earliest_arrival_with_reconstruction_by_name(
    container: &TimetableContainer,
    from_name: &str,
    to_name: &str,
    desired_dep_time: Time,
) -> Result<Option<Journey>, RoutingError> {
    let from = resolve_by_name(container, from_name)?;
    let to = resolve_by_name(container, to_name)?;
    Ok(earliest_arrival_with_reconstruction(container, from, to, desired_dep_time))
}

/// Mode 3: optimized earliest arrival with journey reconstruction.
pub fn route_optimized_earliest_arrival_with_reconstruction(
    container: &TimetableContainer,
    from_stop_id: &str,
    to_stop_id: &str,
    desired_dep_time: Time,
) -> Result<Option<Journey>, RoutingError> {
    let from = resolve(container, from_stop_id)?;
    let to = resolve(container, to_stop_id)?;
    Ok(optimized_earliest_arrival_with_reconstruction(container, from, to, desired_dep_time))
}

/// Mode 3, resolved by stop name instead of stop id.
pub fn route_optimized_earliest_arrival_with_reconstruction_by_name(
    container: &TimetableContainer,
    from_name: &str,
    to_name: &str,
    desired_dep_time: Time,
) -> Result<Option<Journey>, RoutingError> {
    let from = resolve_by_name(container, from_name)?;
    let to = resolve_by_name(container, to_name)?;
    Ok(optimized_earliest_arrival_with_reconstruction(container, from, to, desired_dep_time))
}
