//! Resolution port
//!
//! Instances cross the container boundary type-erased: an [`ErasedInstance`]
//! always wraps an `Arc<T>` where `T` is the abstraction it was registered
//! under. [`ResolverExt`] restores the static type.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::error::{Error, Result};
use crate::value_objects::{Sequence, ServiceKey};

/// Type-erased instance; the payload is an `Arc<T>`
pub type ErasedInstance = Arc<dyn Any + Send + Sync>;

/// Type-erased producer invoked with the resolving scope
pub type ErasedFactory = Arc<dyn Fn(&dyn ServiceResolver) -> Result<ErasedInstance> + Send + Sync>;

/// Erase an instance of abstraction `T`
pub fn erase<T: ?Sized + Send + Sync + 'static>(instance: Arc<T>) -> ErasedInstance {
    Arc::new(instance)
}

/// Recover the `Arc<T>` behind an erased instance
pub fn unerase<T: ?Sized + Send + Sync + 'static>(instance: &ErasedInstance) -> Result<Arc<T>> {
    instance.downcast_ref::<Arc<T>>().cloned().ok_or_else(|| {
        Error::type_mismatch(
            std::any::type_name::<T>(),
            format!("{:?}", (**instance).type_id()),
        )
    })
}

/// A realized instance with the sequence of the entry that produced it
#[derive(Clone)]
pub struct SequencedInstance {
    /// Sequence of the producing registration
    pub sequence: Sequence,
    /// The realized instance
    pub instance: ErasedInstance,
}

impl fmt::Debug for SequencedInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequencedInstance")
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

/// Weak reference to a resolver
///
/// Lazily materialized values hold one of these instead of the scope itself
/// so that caching a value inside its scope does not keep the scope alive.
#[derive(Clone)]
pub struct ResolverHandle {
    inner: Weak<dyn ServiceResolver>,
}

impl ResolverHandle {
    /// Wrap a weak resolver reference
    pub fn new(inner: Weak<dyn ServiceResolver>) -> Self {
        Self { inner }
    }

    /// The resolver, if its scope is still alive
    pub fn upgrade(&self) -> Option<Arc<dyn ServiceResolver>> {
        self.inner.upgrade()
    }
}

impl fmt::Debug for ResolverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverHandle")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

/// Container-side resolution contract
pub trait ServiceResolver: Send + Sync {
    /// Resolve one instance; the most recent registration wins
    fn resolve_erased(&self, abstraction: ServiceKey) -> Result<ErasedInstance>;

    /// Resolve every registration of `abstraction` in registration order
    ///
    /// An unknown abstraction yields an empty collection.
    fn resolve_all_erased(&self, abstraction: ServiceKey) -> Result<Vec<SequencedInstance>>;

    /// Whether at least one producer is registered under `abstraction`
    fn is_registered(&self, abstraction: ServiceKey) -> bool;

    /// Weak handle to this resolver's scope
    fn handle(&self) -> ResolverHandle;
}

/// Typed resolution on top of [`ServiceResolver`]
pub trait ResolverExt {
    /// Resolve `T`, failing with [`Error::NotRegistered`] when absent
    fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>>;

    /// Resolve `T`, returning `None` when absent
    fn try_get<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>>;

    /// Resolve every registration of `T` in registration order
    fn get_all<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Vec<Arc<T>>>;
}

impl<R: ServiceResolver + ?Sized> ResolverExt for R {
    fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let instance = self.resolve_erased(ServiceKey::of::<T>())?;
        unerase::<T>(&instance)
    }

    fn try_get<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>> {
        let key = ServiceKey::of::<T>();
        if !self.is_registered(key) {
            return Ok(None);
        }
        let instance = self.resolve_erased(key)?;
        unerase::<T>(&instance).map(Some)
    }

    fn get_all<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Vec<Arc<T>>> {
        self.resolve_all_erased(ServiceKey::of::<T>())?
            .iter()
            .map(|item| unerase::<T>(&item.instance))
            .collect()
    }
}
