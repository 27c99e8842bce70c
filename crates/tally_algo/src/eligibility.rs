//! Voter eligibility validators built from a rules configuration.
//!
//! Checks, first failure wins:
//!   1. record is a JSON object            → "Invalid voter object"
//!   2. each required field, in list order → "Missing field: <name>"
//!   3. numeric `age` ≥ `min_age`          → "Voter below minimum age <min_age>"
//!
//! A field counts as missing when absent or `null`. `age` may be a number or a
//! numeric string (`"19"`); any other value skips check 3. Validators are
//! standalone: the session's `register_voter` does not consult them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use tally_core::MIN_VOTING_AGE;

/// Outcome of one validation.
///
/// `reason` is `Some("")` on success, `Some(text)` on a rejection and `None`
/// only from the degenerate validator produced by malformed rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl VoterCheck {
    fn ok() -> Self {
        Self { valid: true, reason: Some(String::new()) }
    }

    fn reject(reason: impl Into<String>) -> Self {
        Self { valid: false, reason: Some(reason.into()) }
    }

    fn degenerate() -> Self {
        Self { valid: false, reason: None }
    }
}

/// A standalone eligibility predicate.
pub type VoteValidator = Box<dyn Fn(&Value) -> VoterCheck + Send + Sync>;

/// Rules recognized by [`create_vote_validator`]. Wire form: `{minAge, requiredFields}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationRules {
    pub min_age: f64,
    pub required_fields: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_age: f64::from(MIN_VOTING_AGE),
            required_fields: vec!["id".into(), "name".into(), "age".into()],
        }
    }
}

impl ValidationRules {
    /// Parse an untyped rules object. `None` when the value is not a
    /// well-formed configuration:
    /// - not an object,
    /// - `minAge` present (non-null) but not a number,
    /// - `requiredFields` present (non-null) but not an array of strings.
    pub fn from_value(rules: &Value) -> Option<Self> {
        let obj = rules.as_object()?;
        let mut out = Self::default();

        match obj.get("minAge") {
            None | Some(Value::Null) => {}
            Some(v) => out.min_age = v.as_f64()?,
        }

        match obj.get("requiredFields") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                out.required_fields = items
                    .iter()
                    .map(|f| f.as_str().map(str::to_owned))
                    .collect::<Option<Vec<_>>>()?;
            }
            Some(_) => return None,
        }

        Some(out)
    }

    /// Check one voter record against these rules.
    pub fn check(&self, voter: &Value) -> VoterCheck {
        let Some(obj) = voter.as_object() else {
            return VoterCheck::reject("Invalid voter object");
        };

        if let Some(missing) = self
            .required_fields
            .iter()
            .find(|f| matches!(obj.get(f.as_str()), None | Some(Value::Null)))
        {
            return VoterCheck::reject(format!("Missing field: {missing}"));
        }

        if let Some(age) = obj.get("age").and_then(age_of) {
            if age < self.min_age {
                return VoterCheck::reject(format!("Voter below minimum age {}", self.min_age));
            }
        }

        VoterCheck::ok()
    }

    /// Freeze these rules into a standalone validator.
    pub fn into_validator(self) -> VoteValidator {
        Box::new(move |voter: &Value| self.check(voter))
    }
}

/// Numeric `age`, or a string that parses as a finite number.
fn age_of(v: &Value) -> Option<f64> {
    match v {
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        other => other.as_f64(),
    }
}

/// Build a validator from an untyped rules configuration.
///
/// Malformed rules yield a validator that rejects everything with no reason.
pub fn create_vote_validator(rules: &Value) -> VoteValidator {
    match ValidationRules::from_value(rules) {
        Some(parsed) => {
            debug!(min_age = parsed.min_age, fields = ?parsed.required_fields, "vote validator built");
            parsed.into_validator()
        }
        None => {
            debug!("malformed validator rules; every check will fail");
            Box::new(|_: &Value| VoterCheck::degenerate())
        }
    }
}
