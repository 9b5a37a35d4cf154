//! Service Container
//!
//! The storage and lifetime collaborator the ordered-resolution layer runs
//! on. It implements the registry and resolver ports and nothing more.
//!
//! ```text
//! ServiceCollection (register_producer) ── build() ──► ServiceProvider (root scope)
//!                                                         │
//!                                                         └─ create_scope() ──► Scope
//! ```

pub mod collection;
pub mod module;
pub mod provider;

pub use collection::ServiceCollection;
pub use module::ServiceModule;
pub use provider::{Scope, ServiceProvider};
