//! Container Bootstrap
//!
//! Composition root helpers: apply configuration to a collection and build
//! the provider.
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let mut services = ServiceCollection::new();
//! services.add_module(&PipelineModule)?;
//! let provider = build_provider(services, &config)?;
//!
//! let scope = provider.create_scope();
//! let stages = scope.get_ordered::<dyn Stage>()?;
//! ```

use std::sync::Arc;

use ordi_domain::error::Result;
use tracing::info;

use crate::config::{ConfigLoader, ContainerConfig};
use crate::container::{ServiceCollection, ServiceProvider};
use crate::registration::{OrderedRegistrationExt, Registration};

/// Register configuration-driven services and build the provider
///
/// The view options from `config` are registered last, so they take
/// precedence over any options registered by modules.
pub fn build_provider(
    mut services: ServiceCollection,
    config: &ContainerConfig,
) -> Result<ServiceProvider> {
    services.add_registration(Registration::instance(Arc::new(config.views)))?;

    let provider = services.build();
    info!(
        registrations = provider.registration_count(),
        abstractions = provider.abstraction_count(),
        failure_policy = ?config.views.failure_policy,
        "Service provider ready"
    );
    Ok(provider)
}

/// Load configuration with `loader`, then [`build_provider`]
pub fn build_provider_with_loader(
    services: ServiceCollection,
    loader: &ConfigLoader,
) -> Result<ServiceProvider> {
    let config = loader.load()?;
    build_provider(services, &config)
}
