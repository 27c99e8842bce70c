//! Pure incremental tally.
//!
//! Contract:
//! - The input tally is borrowed immutably; every call returns a fresh map.
//! - A missing key counts as 0 before the increment.
//! - Degenerate input (empty id, non-object tally) yields an empty tally, never an error.

use serde_json::{Map, Value};
use tracing::trace;

use tally_core::{Receipt, Tally};

/// Return a copy of `current` with `candidate_id` incremented by one.
///
/// An empty `candidate_id` counts as absent and yields an empty tally.
pub fn tally_pure(current: &Tally, candidate_id: &str) -> Tally {
    if candidate_id.is_empty() {
        return Tally::new();
    }
    let mut next = current.clone();
    let slot = next.entry(candidate_id.to_owned()).or_insert(0);
    *slot = slot.saturating_add(1);
    trace!(candidate_id, count = *slot, "tally_pure");
    next
}

/// Untyped variant for tallies that arrive as JSON.
///
/// Returns `{}` unless `current` is an object and `candidate_id` is a non-empty
/// string. Keys other than `candidate_id` are copied verbatim; a non-numeric
/// value under `candidate_id` is treated as 0.
pub fn tally_pure_value(current: &Value, candidate_id: &Value) -> Value {
    let (Some(map), Some(id)) = (current.as_object(), candidate_id.as_str()) else {
        return Value::Object(Map::new());
    };
    if id.is_empty() {
        return Value::Object(Map::new());
    }

    let mut next = map.clone();
    let bumped = match next.get(id) {
        Some(v) => increment_number(v),
        None => Value::from(1u64),
    };
    next.insert(id.to_owned(), bumped);
    Value::Object(next)
}

fn increment_number(v: &Value) -> Value {
    if let Some(n) = v.as_u64() {
        Value::from(n.saturating_add(1))
    } else if let Some(n) = v.as_i64() {
        Value::from(n + 1)
    } else if let Some(f) = v.as_f64() {
        Value::from(f + 1.0)
    } else {
        Value::from(1u64)
    }
}

/// Fold a sequence of receipts into a tally, one `tally_pure` step per receipt.
pub fn fold_receipts<'a, I>(receipts: I) -> Tally
where
    I: IntoIterator<Item = &'a Receipt>,
{
    receipts
        .into_iter()
        .fold(Tally::new(), |acc, r| tally_pure(&acc, r.candidate_id.as_str()))
}
