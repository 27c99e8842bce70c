//! Determinism utilities: stable ordering for result views and the
//! first-among-ties scan used for winner selection.
//!
//! This module is **I/O-free**. All sorts are stable (`slice::sort_by`), so
//! equal keys keep candidate-list order.

use core::cmp::Ordering;

use crate::entities::ResultRecord;

/* -------------------------------------------------------------------------- */
/*                               Result ordering                              */
/* -------------------------------------------------------------------------- */

/// Descending by votes; ties compare `Equal` so a stable sort keeps input order.
#[inline]
pub fn cmp_votes_desc(a: &ResultRecord, b: &ResultRecord) -> Ordering {
    b.votes.cmp(&a.votes)
}

/// Ascending by candidate name, then id.
#[inline]
pub fn cmp_name_asc(a: &ResultRecord, b: &ResultRecord) -> Ordering {
    match a.name.cmp(&b.name) {
        Ordering::Equal => a.id.as_str().cmp(b.id.as_str()),
        o => o,
    }
}

/// Ascending by party, then descending by votes.
#[inline]
pub fn cmp_party_then_votes(a: &ResultRecord, b: &ResultRecord) -> Ordering {
    match a.party.cmp(&b.party) {
        Ordering::Equal => cmp_votes_desc(a, b),
        o => o,
    }
}

/// Sort records **in place** into the default result order (votes ↓, stable).
#[inline]
pub fn sort_results_by_votes(xs: &mut [ResultRecord]) {
    xs.sort_by(cmp_votes_desc);
}

/* -------------------------------------------------------------------------- */
/*                              First-max selection                           */
/* -------------------------------------------------------------------------- */

/// Index of the first item (in iteration order) carrying the strictly largest key.
///
/// Returns `None` for an empty input or when the maximum is zero: an election
/// where nobody received a vote has no winner.
pub fn first_nonzero_max<I>(keys: I) -> Option<usize>
where
    I: IntoIterator<Item = u64>,
{
    let mut best: Option<(usize, u64)> = None;
    for (i, k) in keys.into_iter().enumerate() {
        match best {
            Some((_, b)) if k <= b => {}
            _ => best = Some((i, k)),
        }
    }
    best.filter(|&(_, k)| k > 0).map(|(i, _)| i)
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, name: &str, party: &str, votes: u64) -> ResultRecord {
        ResultRecord { id: id.into(), name: name.into(), party: party.into(), votes }
    }

    #[test]
    fn votes_desc_is_stable_for_ties() {
        let mut v = vec![rec("A", "a", "x", 1), rec("B", "b", "x", 3), rec("C", "c", "y", 1)];
        sort_results_by_votes(&mut v);
        let got: Vec<&str> = v.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(got, vec!["B", "A", "C"]);
    }

    #[test]
    fn party_then_votes() {
        let mut v = vec![rec("A", "a", "y", 1), rec("B", "b", "x", 1), rec("C", "c", "x", 5)];
        v.sort_by(cmp_party_then_votes);
        let got: Vec<&str> = v.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(got, vec!["C", "B", "A"]);
    }

    #[test]
    fn first_max_prefers_earliest() {
        assert_eq!(first_nonzero_max([1, 4, 2, 4]), Some(1));
        assert_eq!(first_nonzero_max([0, 0, 0]), None);
        assert_eq!(first_nonzero_max(Vec::<u64>::new()), None);
        assert_eq!(first_nonzero_max([0, 0, 7]), Some(2));
    }
}
