//! Lenient coercion of untyped JSON records into core types.
//!
//! Everything here is total: malformed input degrades to an empty list, a
//! skipped element or `None`, never an error.

use serde_json::Value;
use tracing::trace;

use tally_core::{Candidate, RegionNode, Tally, Voter};

/// Candidate list from an untyped value.
///
/// Non-arrays become an empty list. Elements that are not objects with a
/// string `id` are skipped; a missing `name` or `party` becomes `""`.
pub fn candidates_from_value(v: &Value) -> Vec<Candidate> {
    let Some(items) = v.as_array() else {
        trace!("candidate input is not a list; using an empty list");
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let id = obj.get("id")?.as_str()?;
            Some(Candidate::new(id, str_field(obj.get("name")), str_field(obj.get("party"))))
        })
        .collect()
}

/// Voter from an untyped record: string `id`, string `name`, non-negative
/// numeric `age` (fractions floor). Anything else is `None`.
pub fn voter_from_value(v: &Value) -> Option<Voter> {
    let obj = v.as_object()?;
    let id = obj.get("id")?.as_str()?;
    let name = obj.get("name")?.as_str()?;
    let age = age_years(obj.get("age")?)?;
    Some(Voter::new(id, name, age))
}

/// Region tree from an untyped value; `None` for non-objects.
///
/// Non-numeric `votes` count as 0, a non-array `subRegions` as no children,
/// and non-object children are dropped.
pub fn region_from_value(v: &Value) -> Option<RegionNode> {
    let obj = v.as_object()?;
    let votes = obj.get("votes").map(votes_of).unwrap_or(0);
    let sub_regions = match obj.get("subRegions") {
        Some(Value::Array(subs)) => subs.iter().filter_map(region_from_value).collect(),
        _ => Vec::new(),
    };
    Some(RegionNode::with_children(str_field(obj.get("name")), votes, sub_regions))
}

/// Tally from an untyped object; entries whose value is not a non-negative
/// integer are skipped. `None` for non-objects.
pub fn tally_from_value(v: &Value) -> Option<Tally> {
    let obj = v.as_object()?;
    Some(
        obj.iter()
            .filter_map(|(k, count)| count.as_u64().map(|n| (k.clone(), n)))
            .collect(),
    )
}

fn str_field(v: Option<&Value>) -> String {
    v.and_then(Value::as_str).unwrap_or_default().to_owned()
}

fn age_years(v: &Value) -> Option<u32> {
    if let Some(n) = v.as_u64() {
        return Some(u32::try_from(n).unwrap_or(u32::MAX));
    }
    let f = v.as_f64()?;
    // Float → int `as` saturates at u32::MAX.
    (f >= 0.0).then(|| f.floor() as u32)
}

fn votes_of(v: &Value) -> i64 {
    v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)).unwrap_or(0)
}
