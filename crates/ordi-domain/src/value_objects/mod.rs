//! Value Objects
//!
//! Immutable identities and records shared by the registry and resolver ports.

mod key;
mod lifetime;
mod registration;
mod sequence;

pub use key::ServiceKey;
pub use lifetime::Lifetime;
pub use registration::{Producer, RegistrationEntry};
pub use sequence::Sequence;
