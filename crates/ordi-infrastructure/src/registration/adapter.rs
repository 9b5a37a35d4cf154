//! Descriptor Adapter
//!
//! Reduces the four registration forms to one [`RegistrationEntry`] carrying
//! the sequence number reserved for it.
//!
//! ```text
//! Registration::Type ───────┐
//! Registration::Factory ────┤
//! Registration::Instance ───┼──► DescriptorAdapter::adapt(.., sequence) ──► RegistrationEntry
//! Registration::Descriptor ─┘          (validates descriptors)
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use ordi_domain::error::{Error, Result};
use ordi_domain::ports::{Binds, ErasedFactory, ServiceResolver, erase};
use ordi_domain::value_objects::{Lifetime, Producer, RegistrationEntry, Sequence, ServiceKey};

use super::descriptor::ServiceDescriptor;

/// Producer of `Arc<T>` before type erasure
pub type TypedFactory<T> = Arc<dyn Fn(&dyn ServiceResolver) -> Result<Arc<T>> + Send + Sync>;

/// One registration request for abstraction `T`
pub enum Registration<T: ?Sized + Send + Sync + 'static> {
    /// Construct a concrete implementation type
    Type {
        /// Implementation type name
        implementation: &'static str,
        /// Caching policy
        lifetime: Lifetime,
        /// Constructor already upcast to `T`
        construct: TypedFactory<T>,
    },
    /// Run a factory closure
    Factory {
        /// Caching policy
        lifetime: Lifetime,
        /// The factory
        factory: TypedFactory<T>,
    },
    /// Hand out a pre-built instance
    Instance(Arc<T>),
    /// A pre-built, type-erased descriptor
    Descriptor(ServiceDescriptor),
}

impl<T: ?Sized + Send + Sync + 'static> Registration<T> {
    /// Register the concrete type `I`
    pub fn of_type<I: Binds<T>>(lifetime: Lifetime) -> Self {
        Self::Type {
            implementation: type_name::<I>(),
            lifetime,
            construct: component_factory::<T, I>(),
        }
    }

    /// Register a factory closure
    pub fn factory<F>(lifetime: Lifetime, factory: F) -> Self
    where
        F: Fn(&dyn ServiceResolver) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self::Factory {
            lifetime,
            factory: Arc::new(factory),
        }
    }

    /// Register a pre-built instance
    pub fn instance(instance: Arc<T>) -> Self {
        Self::Instance(instance)
    }

    /// Register a pre-built descriptor
    pub fn descriptor(descriptor: ServiceDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }

    /// Short name of the registration form
    pub fn form(&self) -> &'static str {
        match self {
            Self::Type { .. } => "type",
            Self::Factory { .. } => "factory",
            Self::Instance(_) => "instance",
            Self::Descriptor(_) => "descriptor",
        }
    }
}

impl<T: ?Sized + Send + Sync + 'static> fmt::Debug for Registration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("abstraction", &type_name::<T>())
            .field("form", &self.form())
            .finish()
    }
}

/// Normalizes registration forms into registration entries
pub struct DescriptorAdapter;

impl DescriptorAdapter {
    /// Build the entry for `registration` under `T` with the given sequence
    pub fn adapt<T: ?Sized + Send + Sync + 'static>(
        registration: Registration<T>,
        sequence: Sequence,
    ) -> Result<RegistrationEntry> {
        let (lifetime, producer) = match registration {
            Registration::Type {
                implementation,
                lifetime,
                construct,
            } => (
                lifetime,
                Producer::Constructor {
                    implementation,
                    construct: erase_factory(construct),
                },
            ),
            Registration::Factory { lifetime, factory } => {
                (lifetime, Producer::Factory(erase_factory(factory)))
            }
            Registration::Instance(instance) => {
                (Lifetime::Singleton, Producer::Instance(erase(instance)))
            }
            Registration::Descriptor(descriptor) => {
                Self::validate::<T>(&descriptor)?;
                descriptor.into_parts()
            }
        };

        Ok(RegistrationEntry::new(
            ServiceKey::of::<T>(),
            sequence,
            lifetime,
            producer,
        ))
    }

    /// Check that `descriptor` can be registered under `T`
    pub fn validate<T: ?Sized + Send + Sync + 'static>(descriptor: &ServiceDescriptor) -> Result<()> {
        let abstraction = ServiceKey::of::<T>();

        if descriptor.abstraction() != abstraction {
            return Err(Error::invalid_registration(
                abstraction.name(),
                format!(
                    "descriptor declares abstraction {}",
                    descriptor.abstraction()
                ),
            ));
        }

        if descriptor.yields() != abstraction {
            return Err(Error::invalid_registration(
                abstraction.name(),
                format!(
                    "descriptor producer yields {}, which is not assignable to {}",
                    descriptor.yields(),
                    abstraction
                ),
            ));
        }

        if let Producer::Instance(instance) = descriptor.producer() {
            if !instance.is::<Arc<T>>() {
                return Err(Error::invalid_registration(
                    abstraction.name(),
                    "descriptor instance is not an instance of the abstraction",
                ));
            }
        }

        Ok(())
    }
}

/// Constructor of `I`, upcast to `T`
pub(crate) fn component_factory<T, I>() -> TypedFactory<T>
where
    T: ?Sized + Send + Sync + 'static,
    I: Binds<T>,
{
    Arc::new(|resolver: &dyn ServiceResolver| -> Result<Arc<T>> {
        let component = I::construct(resolver)?;
        Ok(<I as Binds<T>>::bind(Arc::new(component)))
    })
}

/// Erase the output type of a typed factory
pub(crate) fn erase_factory<T: ?Sized + Send + Sync + 'static>(factory: TypedFactory<T>) -> ErasedFactory {
    Arc::new(move |resolver: &dyn ServiceResolver| factory(resolver).map(erase::<T>))
}
