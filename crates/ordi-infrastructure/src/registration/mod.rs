//! Registration
//!
//! Four registration forms, one entry shape.
//!
//! | Form | Entry point | Producer |
//! |------|-------------|----------|
//! | concrete type | `add_ordered::<T, I>` | `Producer::Constructor` |
//! | factory | `add_ordered_factory::<T, _>` | `Producer::Factory` |
//! | instance | `add_ordered_instance::<T>` | `Producer::Instance` |
//! | descriptor | `add_ordered_descriptor::<T>` | whatever the descriptor carries |

pub mod adapter;
pub mod descriptor;
pub mod extensions;

pub use adapter::{DescriptorAdapter, Registration, TypedFactory};
pub use descriptor::ServiceDescriptor;
pub use extensions::OrderedRegistrationExt;
