//! Concrete implementation types
//!
//! A type registered by type (rather than by factory or instance) must know
//! how to construct itself from a resolver ([`Component`]) and how to present
//! itself as the abstraction it is registered under ([`Binds`]).

use std::sync::Arc;

use super::ServiceResolver;
use crate::error::Result;

/// A concrete type the container can construct
pub trait Component: Sized + Send + Sync + 'static {
    /// Build a new instance, resolving dependencies from `resolver`
    fn construct(resolver: &dyn ServiceResolver) -> Result<Self>;
}

/// Upcast from a concrete component to the abstraction `T`
///
/// Every component binds to itself. Binding to a trait object is declared
/// with [`bind!`](crate::bind).
pub trait Binds<T: ?Sized>: Component {
    /// Present this instance as `T`
    fn bind(self: Arc<Self>) -> Arc<T>;
}

impl<C: Component> Binds<C> for C {
    fn bind(self: Arc<Self>) -> Arc<C> {
        self
    }
}

/// Declare that a component can be registered under one or more trait objects
///
/// ```ignore
/// bind!(ConsoleSink => dyn Sink, dyn Flush);
/// ```
#[macro_export]
macro_rules! bind {
    ($implementation:ty => $($abstraction:ty),+ $(,)?) => {
        $(
            impl $crate::ports::Binds<$abstraction> for $implementation {
                fn bind(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$abstraction> {
                    self
                }
            }
        )+
    };
}
