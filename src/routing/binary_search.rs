//! Lower-bound search over connections sorted by departure time.
//!
//! Implemented iteratively rather than recursively (spec.md §9): a query
//! against a timetable with hundreds of thousands of connections would
//! otherwise risk stack growth for no benefit.

use crate::model::Time;
use crate::model::container::IndexedConnection;

/// Index of the first connection with `dep_time >= target`, or
/// `connections.len()` if every connection departs before `target`.
pub(crate) fn lower_bound_by_dep_time(connections: &[IndexedConnection], target: Time) -> usize {
    let mut lo = 0usize;
    let mut hi = connections.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if connections[mid].dep_time < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(dep_time: Time) -> IndexedConnection {
        IndexedConnection {
            trip: 0,
            position_in_trip: 0,
            from: 0,
            to: 1,
            dep_time,
            arr_time: dep_time + 10,
        }
    }

    #[test]
    fn finds_exact_match() {
        let connections: Vec<_> = [10, 20, 30, 40].into_iter().map(conn).collect();
        assert_eq!(lower_bound_by_dep_time(&connections, 20), 1);
    }

    #[test]
    fn finds_first_greater_when_no_exact_match() {
        let connections: Vec<_> = [10, 20, 30, 40].into_iter().map(conn).collect();
        assert_eq!(lower_bound_by_dep_time(&connections, 25), 2);
    }

    #[test]
    fn returns_len_when_target_after_everything() {
        let connections: Vec<_> = [10, 20].into_iter().map(conn).collect();
        assert_eq!(lower_bound_by_dep_time(&connections, 1000), 2);
    }

    #[test]
    fn returns_zero_when_target_before_everything() {
        let connections: Vec<_> = [10, 20].into_iter().map(conn).collect();
        assert_eq!(lower_bound_by_dep_time(&connections, 0), 0);
    }

    #[test]
    fn empty_slice_returns_zero() {
        assert_eq!(lower_bound_by_dep_time(&[], 5), 0);
    }
}
