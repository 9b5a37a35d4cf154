//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ordi
#[derive(Error, Debug)]
pub enum Error {
    /// Registration rejected before it reached the container
    #[error("Invalid registration for {abstraction}: {message}")]
    InvalidRegistration {
        /// Abstraction the registration was declared under
        abstraction: String,
        /// Why the registration was rejected
        message: String,
    },

    /// Single-item resolution of a service nobody registered
    #[error("Service not registered: {service}")]
    NotRegistered {
        /// Type name of the requested service
        service: String,
    },

    /// A producer yielded a value of an unexpected type
    #[error("Type mismatch: expected {expected}, producer yielded {actual}")]
    TypeMismatch {
        /// Type the caller asked for
        expected: String,
        /// Type the producer actually yielded
        actual: String,
    },

    /// A lazy view outlived the scope it was resolved from
    #[error("Resolution scope disposed before {service} was materialized")]
    ScopeDisposed {
        /// Type name of the service being materialized
        service: String,
    },

    /// Ordered view materialization failed earlier under the poison policy
    #[error("Ordered view for {abstraction} is poisoned: {message}")]
    ViewPoisoned {
        /// Abstraction of the poisoned view
        abstraction: String,
        /// Message of the failure that poisoned the view
        message: String,
    },

    /// Failure raised by user factory code
    #[error("Factory error: {message}")]
    Factory {
        /// Description of the factory failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Registration and resolution errors
impl Error {
    /// Create an invalid registration error
    pub fn invalid_registration<A: Into<String>, S: Into<String>>(abstraction: A, message: S) -> Self {
        Self::InvalidRegistration {
            abstraction: abstraction.into(),
            message: message.into(),
        }
    }

    /// Create a not registered error
    pub fn not_registered<S: Into<String>>(service: S) -> Self {
        Self::NotRegistered {
            service: service.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<E: Into<String>, A: Into<String>>(expected: E, actual: A) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a scope disposed error
    pub fn scope_disposed<S: Into<String>>(service: S) -> Self {
        Self::ScopeDisposed {
            service: service.into(),
        }
    }

    /// Create a view poisoned error
    pub fn view_poisoned<A: Into<String>, S: Into<String>>(abstraction: A, message: S) -> Self {
        Self::ViewPoisoned {
            abstraction: abstraction.into(),
            message: message.into(),
        }
    }
}

// Caller-domain and ambient errors
impl Error {
    /// Create a factory error
    pub fn factory<S: Into<String>>(message: S) -> Self {
        Self::Factory {
            message: message.into(),
            source: None,
        }
    }

    /// Create a factory error with source
    pub fn factory_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Factory {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}
