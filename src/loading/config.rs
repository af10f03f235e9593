//! Footpath synthesis configuration.
//!
//! A feed's own `transfers.txt` always wins; these parameters only fill in
//! gaps it leaves (spec.md §6, via the three rules implemented in
//! [`crate::loading::transfers`]).

use crate::model::Time;

#[derive(Debug, Clone, Copy)]
pub struct FootpathSynthesisConfig {
    /// Dwell time assigned to a stop's loop footpath when the feed doesn't
    /// already define one.
    pub default_loop_walking_time: Time,
    /// Walking time assigned to a synthesized edge between a station and
    /// one of its child stops.
    pub parent_station_walking_time: Time,
    /// Maximum beeline distance, in metres, within which two stops get a
    /// synthesized footpath.
    pub max_beeline_distance_m: f64,
    /// Walking speed, in metres per second, used to turn beeline distance
    /// into a walking time.
    pub walking_speed_m_per_s: f64,
}

impl Default for FootpathSynthesisConfig {
    fn default() -> Self {
        FootpathSynthesisConfig {
            default_loop_walking_time: 0,
            parent_station_walking_time: 0,
            max_beeline_distance_m: 100.0,
            walking_speed_m_per_s: 2.0 / 3.6,
        }
    }
}
