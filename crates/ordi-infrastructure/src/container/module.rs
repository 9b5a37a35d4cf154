//! Service modules
//!
//! Group related registrations behind one named unit so a composition root
//! reads as a list of modules instead of a list of registrations.

use ordi_domain::error::Result;

use super::collection::ServiceCollection;

/// A named group of registrations
pub trait ServiceModule: Send + Sync {
    /// Module name used in logs
    fn name(&self) -> &str;

    /// Add this module's registrations to `services`
    fn register(&self, services: &mut ServiceCollection) -> Result<()>;
}
