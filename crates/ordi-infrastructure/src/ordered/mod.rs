//! Ordered Resolution
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`view`] | `OrderedView<T>`: ordered, lazily materialized, cached |
//! | [`cell`] | Once-only materialization state machine |
//! | [`binding`] | Container binding and `get_ordered::<T>()` |
//! | [`options`] | Failure policy for materialization |

pub mod binding;
pub mod cell;
pub mod options;
pub mod view;

pub use binding::{OrderedResolverExt, OrderedViewBinding};
pub use cell::MaterializeCell;
pub use options::{FailurePolicy, OrderedViewOptions};
pub use view::{OrderedView, SequencedItem, ViewSource};
