//! Pre-built service descriptors
//!
//! A descriptor is an opaque, type-erased registration built ahead of time,
//! for example by a plugin that does not know which collection it will be
//! added to. The abstraction it targets is only checked when it is registered.

use std::any::type_name;
use std::sync::Arc;

use ordi_domain::error::Result;
use ordi_domain::ports::{Binds, ServiceResolver, erase};
use ordi_domain::value_objects::{Lifetime, Producer, ServiceKey};

use super::adapter::{component_factory, erase_factory};

/// Abstraction + lifetime + producer, erased
#[derive(Clone, Debug)]
pub struct ServiceDescriptor {
    abstraction: ServiceKey,
    yields: ServiceKey,
    lifetime: Lifetime,
    producer: Producer,
}

impl ServiceDescriptor {
    /// Descriptor constructing the concrete type `I` as `T`
    pub fn of_type<T, I>(lifetime: Lifetime) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        I: Binds<T>,
    {
        Self {
            abstraction: ServiceKey::of::<T>(),
            yields: ServiceKey::of::<T>(),
            lifetime,
            producer: Producer::Constructor {
                implementation: type_name::<I>(),
                construct: erase_factory(component_factory::<T, I>()),
            },
        }
    }

    /// Descriptor running a factory closure
    pub fn factory<T, F>(lifetime: Lifetime, factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceResolver) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self {
            abstraction: ServiceKey::of::<T>(),
            yields: ServiceKey::of::<T>(),
            lifetime,
            producer: Producer::Factory(erase_factory::<T>(Arc::new(factory))),
        }
    }

    /// Descriptor handing out a pre-built instance
    pub fn instance<T: ?Sized + Send + Sync + 'static>(instance: Arc<T>) -> Self {
        Self {
            abstraction: ServiceKey::of::<T>(),
            yields: ServiceKey::of::<T>(),
            lifetime: Lifetime::Singleton,
            producer: Producer::Instance(erase(instance)),
        }
    }

    /// Descriptor from erased parts
    ///
    /// `yields` names the abstraction whose `Arc` the producer actually
    /// wraps. It must equal `abstraction` for the descriptor to be accepted.
    pub fn from_parts(
        abstraction: ServiceKey,
        yields: ServiceKey,
        lifetime: Lifetime,
        producer: Producer,
    ) -> Self {
        Self {
            abstraction,
            yields,
            lifetime,
            producer,
        }
    }

    /// Declared abstraction
    pub fn abstraction(&self) -> ServiceKey {
        self.abstraction
    }

    /// Abstraction the producer yields
    pub fn yields(&self) -> ServiceKey {
        self.yields
    }

    /// Declared lifetime
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// The erased producer
    pub fn producer(&self) -> &Producer {
        &self.producer
    }

    pub(crate) fn into_parts(self) -> (Lifetime, Producer) {
        (self.lifetime, self.producer)
    }
}
