//! Ordered view options

use serde::{Deserialize, Serialize};

/// What a failed materialization leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// The view returns to its unmaterialized state; the next access retries
    #[default]
    Retry,
    /// The view stays failed; later accesses report `ViewPoisoned`
    Poison,
}

/// Behaviour of ordered views resolved from a provider
///
/// Registered as a singleton by `build_provider`; views resolved from a
/// provider without it use the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderedViewOptions {
    /// Failure handling during materialization
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}
