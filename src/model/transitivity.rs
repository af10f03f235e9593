//! Footpath transitivity utility (component C).
//!
//! The CSA scan loop only ever follows *direct* outgoing footpaths (spec.md
//! §4.2), so this module is an opt-in pre-processing step, not something the
//! engine depends on.

use hashbrown::HashMap;
use log::info;

use crate::model::Footpath;

/// Violations of transitivity found in a footpath map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitivityReport {
    /// `(a, c)` pairs reachable via some `(a, b), (b, c)` chain but absent
    /// from the footpath map.
    pub missing: Vec<Footpath>,
    /// `(a, c)` pairs present in the map but longer than some `(a, b), (b, c)`
    /// chain.
    pub tighter: Vec<Footpath>,
}

impl TransitivityReport {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.tighter.is_empty()
    }
}

/// Checks the footpath map for violations of the triangle inequality.
///
/// For every pair of footpaths `(a -> b)`, `(b -> c)`: if `(a -> c)` is
/// absent it is reported in [`TransitivityReport::missing`]; if it exists
/// but is strictly longer than the sum of the two hops, the shorter
/// version is reported in [`TransitivityReport::tighter`] (spec.md §4.2).
pub fn check_transitivity(footpaths: &HashMap<(String, String), Footpath>) -> TransitivityReport {
    let mut outgoing: HashMap<&str, Vec<&Footpath>> = HashMap::new();
    for footpath in footpaths.values() {
        outgoing.entry(footpath.from_stop_id()).or_default().push(footpath);
    }

    let mut missing = Vec::new();
    let mut tighter = Vec::new();

    for a_to_b in footpaths.values() {
        let Some(b_outgoing) = outgoing.get(a_to_b.to_stop_id()) else {
            continue;
        };
        for b_to_c in b_outgoing {
            let a = a_to_b.from_stop_id();
            let c = b_to_c.to_stop_id();
            let combined = a_to_b.walking_time() + b_to_c.walking_time();
            match footpaths.get(&(a.to_string(), c.to_string())) {
                None => missing.push(Footpath::new(a, c, combined)),
                Some(existing) if combined < existing.walking_time() => {
                    tighter.push(Footpath::new(a, c, combined));
                }
                Some(_) => {}
            }
        }
    }

    TransitivityReport { missing, tighter }
}

/// Iterates [`check_transitivity`] to a fixpoint, upserting every reported
/// footpath (by `(from, to)` key) after each pass.
///
/// Termination is guaranteed: walking times on any key only ever decrease
/// and are bounded below by zero (spec.md §4.2). Returns the number of
/// iterations taken.
///
/// Can produce a large number of implausible long-walk footpaths; disabled
/// by default, call explicitly when the caller wants the closure.
pub fn make_transitive(footpaths: &mut HashMap<(String, String), Footpath>) -> usize {
    let mut iterations = 0;
    loop {
        let report = check_transitivity(footpaths);
        if report.is_empty() {
            break;
        }
        for footpath in report.missing.into_iter().chain(report.tighter) {
            let key = (footpath.from_stop_id().to_string(), footpath.to_stop_id().to_string());
            footpaths.insert(key, footpath);
        }
        iterations += 1;
    }
    info!("footpath transitive closure reached after {iterations} iteration(s)");
    iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str, u32)]) -> HashMap<(String, String), Footpath> {
        entries
            .iter()
            .map(|&(from, to, t)| ((from.to_string(), to.to_string()), Footpath::new(from, to, t)))
            .collect()
    }

    #[test]
    fn detects_missing_transitive_edge() {
        let footpaths = map(&[("a", "b", 60), ("b", "c", 60)]);
        let report = check_transitivity(&footpaths);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].walking_time(), 120);
        assert!(report.tighter.is_empty());
    }

    #[test]
    fn detects_tighter_existing_edge() {
        let footpaths = map(&[("a", "b", 60), ("b", "c", 60), ("a", "c", 1000)]);
        let report = check_transitivity(&footpaths);
        assert_eq!(report.tighter.len(), 1);
        assert_eq!(report.tighter[0].walking_time(), 120);
    }

    #[test]
    fn no_violations_on_already_transitive_map() {
        let footpaths = map(&[("a", "b", 60), ("b", "c", 60), ("a", "c", 120)]);
        let report = check_transitivity(&footpaths);
        assert!(report.is_empty());
    }

    #[test]
    fn make_transitive_terminates_and_closes() {
        let mut footpaths = map(&[("a", "b", 60), ("b", "c", 60), ("c", "d", 60)]);
        let iterations = make_transitive(&mut footpaths);
        assert!(iterations > 0);
        assert!(check_transitivity(&footpaths).is_empty());
        assert_eq!(footpaths.get(&("a".to_string(), "d".to_string())).unwrap().walking_time(), 180);
    }
}
