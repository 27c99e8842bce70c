//! Recursive vote summation over a region hierarchy.
//!
//! No cycle guard. An owned `RegionNode` tree cannot be cyclic, and neither can
//! a parsed JSON value, so recursion always terminates; depth is bounded only
//! by the input.

use serde_json::Value;
use tracing::trace;

use tally_core::RegionNode;

/// Sum of `votes` over `tree` and all of its descendants; `None` counts as 0.
pub fn count_votes_in_regions(tree: Option<&RegionNode>) -> i64 {
    let Some(node) = tree else { return 0 };
    let below = node
        .sub_regions
        .iter()
        .fold(0i64, |acc, sub| acc.saturating_add(count_votes_in_regions(Some(sub))));
    let total = node.votes.saturating_add(below);
    trace!(region = %node.name, own = node.votes, total, "region counted");
    total
}

/// Lenient variant over untyped JSON.
///
/// - non-object → 0
/// - `votes` contributes only when numeric
/// - `subRegions` that is not an array counts as empty
///
/// Fractional votes are summed over the whole tree and truncated toward zero
/// once, at the root.
pub fn count_votes_in_value(tree: &Value) -> i64 {
    let sum = sum_value(tree);
    // `as` saturates at the i64 bounds.
    sum.whole.saturating_add(sum.frac.trunc() as i64)
}

/// Integer votes stay exact; non-integer votes accumulate separately.
#[derive(Default)]
struct VoteSum {
    whole: i64,
    frac: f64,
}

impl VoteSum {
    fn add(mut self, other: VoteSum) -> VoteSum {
        self.whole = self.whole.saturating_add(other.whole);
        self.frac += other.frac;
        self
    }
}

fn sum_value(tree: &Value) -> VoteSum {
    let Some(obj) = tree.as_object() else { return VoteSum::default() };
    let own = obj.get("votes").map(numeric_votes).unwrap_or_default();
    match obj.get("subRegions") {
        Some(Value::Array(subs)) => subs.iter().map(sum_value).fold(own, VoteSum::add),
        _ => own,
    }
}

fn numeric_votes(v: &Value) -> VoteSum {
    if let Some(n) = v.as_i64() {
        VoteSum { whole: n, frac: 0.0 }
    } else if let Some(f) = v.as_f64() {
        VoteSum { whole: 0, frac: f }
    } else {
        VoteSum::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_tree_sums_all_levels() {
        let tree = RegionNode::with_children(
            "root",
            2,
            vec![RegionNode::leaf("a", 3), RegionNode::leaf("b", 1)],
        );
        assert_eq!(count_votes_in_regions(Some(&tree)), 6);
    }

    #[test]
    fn none_is_zero() {
        assert_eq!(count_votes_in_regions(None), 0);
    }

    #[test]
    fn deep_chain() {
        let mut node = RegionNode::leaf("leaf", 1);
        for i in 0..50 {
            node = RegionNode::with_children(format!("lvl{i}"), 1, vec![node]);
        }
        assert_eq!(count_votes_in_regions(Some(&node)), 51);
    }

    #[test]
    fn value_variant_matches_reference_example() {
        let tree = json!({"votes": 2, "subRegions": [{"votes": 3, "subRegions": []}, {"votes": 1}]});
        assert_eq!(count_votes_in_value(&tree), 6);
    }

    #[test]
    fn value_variant_is_lenient() {
        assert_eq!(count_votes_in_value(&json!(null)), 0);
        assert_eq!(count_votes_in_value(&json!(42)), 0);
        assert_eq!(count_votes_in_value(&json!({"votes": "many"})), 0);
        assert_eq!(count_votes_in_value(&json!({"votes": 4, "subRegions": "nope"})), 4);
        assert_eq!(count_votes_in_value(&json!({"votes": 2.9, "subRegions": [null, {"votes": 1}]})), 3);
        assert_eq!(count_votes_in_value(&json!({"subRegions": [{"votes": 5}]})), 5);
    }

    #[test]
    fn fractional_votes_truncate_once_at_root() {
        let tree = json!({"votes": 2.5, "subRegions": [{"votes": 2.5}]});
        assert_eq!(count_votes_in_value(&tree), 5);
        let mixed = json!({"votes": 1, "subRegions": [{"votes": 0.4}, {"votes": 0.4}, {"votes": -0.3}]});
        assert_eq!(count_votes_in_value(&mixed), 1);
    }

    #[test]
    fn large_integer_votes_stay_exact() {
        let big = (1i64 << 53) + 1;
        let tree = json!({"votes": big, "subRegions": [{"votes": 1}]});
        assert_eq!(count_votes_in_value(&tree), big + 1);
    }
}
