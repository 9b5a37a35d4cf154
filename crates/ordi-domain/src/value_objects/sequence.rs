//! Registration sequence numbers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::FIRST_SEQUENCE;

/// Per-abstraction registration counter value
///
/// The sole ordering key of an ordered view. Assigned at registration time
/// and strictly increasing for one abstraction within one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(u64);

impl Sequence {
    /// The first sequence handed out for any abstraction
    pub const FIRST: Self = Self(FIRST_SEQUENCE);

    /// Wrap a raw counter value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw counter value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The sequence following this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
