//! Ordered View
//!
//! The resolvable, cached collection of every implementation of one
//! abstraction. A view snapshots its source once, sorts the snapshot by
//! registration sequence and serves every later access from that snapshot.

use std::fmt;
use std::sync::Arc;

use ordi_domain::error::Result;
use ordi_domain::value_objects::{Sequence, ServiceKey};
use tracing::debug;

use super::cell::MaterializeCell;
use super::options::FailurePolicy;

/// A realized implementation tagged with its registration sequence
pub struct SequencedItem<T: ?Sized> {
    /// Sequence of the registration that produced it
    pub sequence: Sequence,
    /// The implementation
    pub instance: Arc<T>,
}

impl<T: ?Sized> Clone for SequencedItem<T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            instance: Arc::clone(&self.instance),
        }
    }
}

/// Where a view gets its implementations from
pub trait ViewSource<T: ?Sized>: Send + Sync {
    /// Realize every implementation; called at most once per successful
    /// materialization
    fn collect(&self) -> Result<Vec<SequencedItem<T>>>;
}

/// Ordered, lazily materialized, cached collection of `T`
///
/// Element `i` is the implementation with the `i`-th smallest registration
/// sequence. Once materialized, every access yields the same `Arc`s.
pub struct OrderedView<T: ?Sized + Send + Sync + 'static> {
    abstraction: ServiceKey,
    source: Option<Box<dyn ViewSource<T>>>,
    cell: MaterializeCell<Vec<Arc<T>>>,
}

impl<T: ?Sized + Send + Sync + 'static> OrderedView<T> {
    /// View that materializes from `source` on first access
    pub fn new<S>(source: S, policy: FailurePolicy) -> Self
    where
        S: ViewSource<T> + 'static,
    {
        let abstraction = ServiceKey::of::<T>();
        Self {
            abstraction,
            source: Some(Box::new(source)),
            cell: MaterializeCell::new(abstraction.name(), policy),
        }
    }

    /// View over items that are already realized
    pub fn from_sequenced(mut items: Vec<SequencedItem<T>>) -> Self {
        items.sort_by_key(|item| item.sequence);
        let abstraction = ServiceKey::of::<T>();
        Self {
            abstraction,
            source: None,
            cell: MaterializeCell::ready(
                abstraction.name(),
                items.into_iter().map(|item| item.instance).collect(),
            ),
        }
    }

    /// Materialized view with no elements
    pub fn empty() -> Self {
        Self::from_sequenced(Vec::new())
    }

    /// Abstraction this view collects
    pub fn abstraction(&self) -> ServiceKey {
        self.abstraction
    }

    /// Whether the backing snapshot exists yet
    pub fn is_materialized(&self) -> bool {
        self.cell.is_ready()
    }

    /// All elements in registration order, materializing on first call
    pub fn items(&self) -> Result<&[Arc<T>]> {
        self.cell
            .get_or_materialize(|| self.materialize())
            .map(Vec::as_slice)
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<Option<Arc<T>>> {
        Ok(self.items()?.get(index).cloned())
    }

    /// Number of elements
    pub fn len(&self) -> Result<usize> {
        Ok(self.items()?.len())
    }

    /// Whether the view has no elements
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.items()?.is_empty())
    }

    /// Iterate the cached elements; restartable
    pub fn iter(&self) -> Result<std::slice::Iter<'_, Arc<T>>> {
        Ok(self.items()?.iter())
    }

    /// Snapshot of the elements as an owned vector
    pub fn to_vec(&self) -> Result<Vec<Arc<T>>> {
        Ok(self.items()?.to_vec())
    }

    fn materialize(&self) -> Result<Vec<Arc<T>>> {
        let Some(source) = &self.source else {
            return Ok(Vec::new());
        };

        let mut items = source.collect()?;
        items.sort_by_key(|item| item.sequence);

        debug!(
            abstraction = self.abstraction.name(),
            count = items.len(),
            "Ordered view materialized"
        );
        Ok(items.into_iter().map(|item| item.instance).collect())
    }
}

impl<T: ?Sized + Send + Sync + 'static> fmt::Debug for OrderedView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedView")
            .field("abstraction", &self.abstraction)
            .field("materialized", &self.is_materialized())
            .field("len", &self.cell.get().map(Vec::len))
            .finish()
    }
}
