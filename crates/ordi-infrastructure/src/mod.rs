//! # Infrastructure Layer
//!
//! The container collaborator and the ordered-resolution layer built on it.
//!
//! ## Module Categories
//!
//! ### Container
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | Service collection, provider and scopes |
//! | [`bootstrap`] | Composition root helpers |
//!
//! ### Ordered Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`registration`] | Descriptor adapter and registration extensions |
//! | [`ordered`] | Ordered view, materialization cell and container binding |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod logging;
pub mod ordered;
pub mod registration;

// Re-export commonly used types
pub use bootstrap::{build_provider, build_provider_with_loader};
pub use container::{Scope, ServiceCollection, ServiceModule, ServiceProvider};
pub use error_ext::ErrorContext;
pub use ordered::{FailurePolicy, OrderedResolverExt, OrderedView, OrderedViewOptions};
pub use registration::{OrderedRegistrationExt, Registration, ServiceDescriptor};
