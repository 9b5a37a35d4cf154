//! # Domain Layer
//!
//! Core types and boundary contracts for ordered resolution.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | Service keys, sequences, lifetimes, registration entries |
//! | [`ports`] | Registry/resolver contracts the container must honour |
//! | [`constants`] | Domain constants |
//!
//! The domain never depends on a concrete container. The infrastructure
//! crate implements [`ports::ServiceRegistry`] and [`ports::ServiceResolver`].

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    Binds, Component, ErasedFactory, ErasedInstance, ResolverExt, ResolverHandle,
    SequencedInstance, ServiceRegistry, ServiceResolver, erase, unerase,
};
pub use value_objects::{Lifetime, Producer, RegistrationEntry, Sequence, ServiceKey};
