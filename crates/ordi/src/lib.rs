//! # ordi
//!
//! Ordered, cached resolution of every implementation of an abstraction.
//!
//! Register any number of implementations of a trait, in any mix of forms
//! (concrete type, factory, instance, pre-built descriptor). Resolve them as
//! an [`OrderedView`] that follows registration order exactly and returns the
//! same instances on every access within a scope.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ordi::prelude::*;
//!
//! trait Middleware: Send + Sync {
//!     fn name(&self) -> &str;
//! }
//!
//! struct Auth;
//! impl Component for Auth {
//!     fn construct(_: &dyn ServiceResolver) -> Result<Self> {
//!         Ok(Auth)
//!     }
//! }
//! impl Middleware for Auth {
//!     fn name(&self) -> &str { "auth" }
//! }
//! ordi::bind!(Auth => dyn Middleware);
//!
//! let mut services = ServiceCollection::new();
//! services.add_ordered::<dyn Middleware, Auth>(Lifetime::Scoped)?;
//! let provider = services.build();
//!
//! let scope = provider.create_scope();
//! let chain = scope.get_ordered::<dyn Middleware>()?;
//! assert_eq!(chain.items()?[0].name(), "auth");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - service keys, registration entries, container ports, errors
//! - `infrastructure` - container, registration extensions, ordered views,
//!   configuration and logging

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ordi_domain::*;
}

/// Infrastructure layer - container, ordered views, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ordi_infrastructure::*;
}

pub use ordi_domain::bind;

// Re-export commonly used types at the crate root
pub use domain::{
    Binds, Component, Error, Lifetime, ResolverExt, Result, Sequence, ServiceKey,
    ServiceRegistry, ServiceResolver,
};
pub use infrastructure::{
    FailurePolicy, OrderedRegistrationExt, OrderedResolverExt, OrderedView, OrderedViewOptions,
    Registration, Scope, ServiceCollection, ServiceDescriptor, ServiceModule, ServiceProvider,
    build_provider,
};

/// Everything needed to register and resolve ordered services
pub mod prelude {
    pub use crate::domain::{
        Binds, Component, Error, Lifetime, ResolverExt, Result, ServiceRegistry, ServiceResolver,
    };
    pub use crate::infrastructure::{
        OrderedRegistrationExt, OrderedResolverExt, OrderedView, Scope, ServiceCollection,
        ServiceDescriptor, ServiceModule, ServiceProvider,
    };
}
