//! Registration entries
//!
//! The normalized shape every registration form is reduced to before it is
//! handed to a [`ServiceRegistry`](crate::ports::ServiceRegistry).

use std::fmt;

use super::{Lifetime, Sequence, ServiceKey};
use crate::constants::{FACTORY_IMPLEMENTATION_NAME, INSTANCE_IMPLEMENTATION_NAME};
use crate::ports::{ErasedFactory, ErasedInstance};

/// Type-erased producer of one instance
#[derive(Clone)]
pub enum Producer {
    /// Constructs a concrete implementation type
    Constructor {
        /// Type name of the implementation
        implementation: &'static str,
        /// Erased constructor, already bound to the abstraction
        construct: ErasedFactory,
    },
    /// Runs user factory code
    Factory(ErasedFactory),
    /// Hands out a pre-built instance
    Instance(ErasedInstance),
}

impl Producer {
    /// Short name of the registration form
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Constructor { .. } => "type",
            Self::Factory(_) => "factory",
            Self::Instance(_) => "instance",
        }
    }

    /// Implementation type name, or a placeholder for factories and instances
    pub fn implementation_name(&self) -> &'static str {
        match self {
            Self::Constructor { implementation, .. } => implementation,
            Self::Factory(_) => FACTORY_IMPLEMENTATION_NAME,
            Self::Instance(_) => INSTANCE_IMPLEMENTATION_NAME,
        }
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("kind", &self.kind())
            .field("implementation", &self.implementation_name())
            .finish()
    }
}

/// One sequence-numbered producer registered under an abstraction
#[derive(Clone, Debug)]
pub struct RegistrationEntry {
    /// Abstraction the producer is registered under
    pub abstraction: ServiceKey,
    /// Ordering key within the abstraction
    pub sequence: Sequence,
    /// Caching policy applied by the container
    pub lifetime: Lifetime,
    /// What produces the instance
    pub producer: Producer,
}

impl RegistrationEntry {
    /// Assemble an entry
    pub fn new(
        abstraction: ServiceKey,
        sequence: Sequence,
        lifetime: Lifetime,
        producer: Producer,
    ) -> Self {
        Self {
            abstraction,
            sequence,
            lifetime,
            producer,
        }
    }
}
