//! crates/tally_core/src/ids.rs
//! Voter and candidate identifiers. Opaque strings; the only shape rule the
//! engine cares about is "non-empty", checked where registration/seeding happens.

use core::borrow::Borrow;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! simple_string_newtype {
    ($(#[$m:meta])* $name:ident) => {
        $(#[$m])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            #[inline] pub fn new(s: impl Into<String>) -> Self { Self(s.into()) }
            #[inline] pub fn as_str(&self) -> &str { &self.0 }
            #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self { Self(value.to_owned()) }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self { Self(value) }
        }

        // Lets `BTreeSet<$name>` / `BTreeMap<$name, _>` be queried with a plain `&str`.
        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str { &self.0 }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str { &self.0 }
        }
    }
}

simple_string_newtype!(
    /// Identifier of a registered (or registering) voter.
    VoterId
);
simple_string_newtype!(
    /// Identifier of a candidate; unique within a session's candidate list.
    CandidateId
);
