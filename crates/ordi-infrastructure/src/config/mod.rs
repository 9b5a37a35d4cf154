//! Configuration
//!
//! `ContainerConfig` with figment-based loading (defaults → TOML → env).

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ContainerConfig, LoggingConfig};
