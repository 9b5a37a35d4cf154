//! Service lifetimes

use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a produced instance is cached by the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// One instance per root provider, shared by every scope
    Singleton,
    /// One instance per resolution scope
    Scoped,
    /// A new instance on every resolution
    #[default]
    Transient,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Singleton => "singleton",
            Self::Scoped => "scoped",
            Self::Transient => "transient",
        };
        f.write_str(name)
    }
}
