//! Domain Port Interfaces
//!
//! Boundary contracts between the ordered-resolution core and the container
//! that stores and realizes registrations.
//!
//! ## Organization
//!
//! - **registry** - RegisterProducer side: sequence allocation and storage
//! - **resolver** - ResolveAll / single-item side, plus typed extensions
//! - **component** - How concrete implementation types are constructed and bound

/// Concrete implementation construction and binding
pub mod component;
/// Registration storage contract
pub mod registry;
/// Resolution contract
pub mod resolver;

pub use component::{Binds, Component};
pub use registry::ServiceRegistry;
pub use resolver::{
    ErasedFactory, ErasedInstance, ResolverExt, ResolverHandle, SequencedInstance,
    ServiceResolver, erase, unerase,
};
