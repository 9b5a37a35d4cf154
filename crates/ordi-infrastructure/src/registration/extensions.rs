//! Registration Extensions
//!
//! Typed entry points for every registration form. Each registration
//! reserves the abstraction's next sequence number, adapts the request into
//! an entry, stores the entry and makes sure the ordered view binding for the
//! abstraction is installed.
//!
//! ## Usage
//!
//! ```ignore
//! let mut services = ServiceCollection::new();
//! services
//!     .add_ordered::<dyn Middleware, Auth>(Lifetime::Scoped)?
//!     .add_ordered_factory::<dyn Middleware, _>(Lifetime::Transient, |_| Ok(Arc::new(Gzip)))?
//!     .add_ordered_instance::<dyn Middleware>(Arc::new(Logger::default()))?;
//! ```

use std::sync::Arc;

use ordi_domain::error::Result;
use ordi_domain::ports::{Binds, ServiceRegistry, ServiceResolver};
use ordi_domain::value_objects::{Lifetime, Sequence, ServiceKey};
use tracing::debug;

use super::adapter::{DescriptorAdapter, Registration};
use super::descriptor::ServiceDescriptor;
use crate::ordered::binding::OrderedViewBinding;

/// Ordered registration on any [`ServiceRegistry`]
///
/// Registering the same arguments twice produces two independent entries.
/// Forms may be interleaved freely; the ordered view follows call order.
pub trait OrderedRegistrationExt {
    /// Register any form and return the sequence it was given
    fn add_registration<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        registration: Registration<T>,
    ) -> Result<Sequence>;

    /// Register any form, chaining
    fn add_ordered_registration<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        registration: Registration<T>,
    ) -> Result<&mut Self>;

    /// Register the concrete type `I` under `T`
    fn add_ordered<T, I>(&mut self, lifetime: Lifetime) -> Result<&mut Self>
    where
        T: ?Sized + Send + Sync + 'static,
        I: Binds<T>;

    /// Register a factory under `T`
    fn add_ordered_factory<T, F>(&mut self, lifetime: Lifetime, factory: F) -> Result<&mut Self>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceResolver) -> Result<Arc<T>> + Send + Sync + 'static;

    /// Register a pre-built instance under `T`
    fn add_ordered_instance<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        instance: Arc<T>,
    ) -> Result<&mut Self>;

    /// Register a pre-built descriptor under `T`
    ///
    /// Fails with `InvalidRegistration` when the descriptor targets another
    /// abstraction or its producer yields something other than `T`.
    fn add_ordered_descriptor<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        descriptor: ServiceDescriptor,
    ) -> Result<&mut Self>;

    /// Declare `T` as an ordered abstraction without implementations
    fn add_ordered_abstraction<T: ?Sized + Send + Sync + 'static>(&mut self) -> Result<&mut Self>;
}

impl<R: ServiceRegistry> OrderedRegistrationExt for R {
    fn add_registration<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        registration: Registration<T>,
    ) -> Result<Sequence> {
        let form = registration.form();
        let sequence = self.next_sequence(ServiceKey::of::<T>());
        let entry = DescriptorAdapter::adapt(registration, sequence)?;
        self.register_producer(entry)?;
        OrderedViewBinding::install::<T, _>(self)?;
        debug!(
            abstraction = std::any::type_name::<T>(),
            sequence = sequence.value(),
            form,
            "Registration added"
        );
        Ok(sequence)
    }

    fn add_ordered_registration<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        registration: Registration<T>,
    ) -> Result<&mut Self> {
        self.add_registration(registration)?;
        Ok(self)
    }

    fn add_ordered<T, I>(&mut self, lifetime: Lifetime) -> Result<&mut Self>
    where
        T: ?Sized + Send + Sync + 'static,
        I: Binds<T>,
    {
        self.add_ordered_registration(Registration::<T>::of_type::<I>(lifetime))
    }

    fn add_ordered_factory<T, F>(&mut self, lifetime: Lifetime, factory: F) -> Result<&mut Self>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceResolver) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.add_ordered_registration(Registration::<T>::factory(lifetime, factory))
    }

    fn add_ordered_instance<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        instance: Arc<T>,
    ) -> Result<&mut Self> {
        self.add_ordered_registration(Registration::instance(instance))
    }

    fn add_ordered_descriptor<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        descriptor: ServiceDescriptor,
    ) -> Result<&mut Self> {
        self.add_ordered_registration(Registration::<T>::descriptor(descriptor))
    }

    fn add_ordered_abstraction<T: ?Sized + Send + Sync + 'static>(&mut self) -> Result<&mut Self> {
        OrderedViewBinding::install::<T, _>(self)?;
        Ok(self)
    }
}
