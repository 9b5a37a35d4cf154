//! Container Binding
//!
//! Teaches the container to answer "the ordered view of `T`". Installing the
//! binding registers a scoped producer for `OrderedView<T>`, so the
//! container's own scoped cache keeps one view per scope and the view's cell
//! keeps one materialization per view.
//!
//! ```text
//! get_ordered::<T>()
//!        │
//!        ├─ OrderedView<T> bound?  ── yes ──► scoped OrderedView<T>, materialized
//!        │                                    before it is returned
//!        │
//!        └─ no ──► OrderedView::from_sequenced(resolve_all(T))   (empty when T is unknown)
//! ```
//!
//! `get_ordered` materializes while the caller still holds the scope, so the
//! returned view never depends on the scope staying alive. A view resolved
//! raw (`get::<OrderedView<T>>()`) stays lazy and reports `ScopeDisposed` if
//! it is first read after its scope is gone.
//!
//! Single-item (`get::<T>()`) and collection (`get_all::<T>()`) resolution
//! never pass through here.

use std::marker::PhantomData;
use std::sync::Arc;

use ordi_domain::error::{Error, Result};
use ordi_domain::ports::{
    ErasedFactory, ErasedInstance, ResolverExt, ResolverHandle, ServiceRegistry, ServiceResolver,
    erase, unerase,
};
use ordi_domain::value_objects::{Lifetime, Producer, RegistrationEntry, ServiceKey};
use tracing::{debug, trace};

use super::options::OrderedViewOptions;
use super::view::{OrderedView, SequencedItem, ViewSource};

/// Installs the per-abstraction ordered view producer
pub struct OrderedViewBinding;

impl OrderedViewBinding {
    /// Install the binding for `T`; returns `false` if it was already there
    pub fn install<T, R>(registry: &mut R) -> Result<bool>
    where
        T: ?Sized + Send + Sync + 'static,
        R: ServiceRegistry + ?Sized,
    {
        let key = ServiceKey::of::<OrderedView<T>>();
        if registry.is_registered(key) {
            return Ok(false);
        }

        let factory: ErasedFactory =
            Arc::new(|resolver: &dyn ServiceResolver| -> Result<ErasedInstance> {
                let options = resolver
                    .try_get::<OrderedViewOptions>()?
                    .map(|options| *options)
                    .unwrap_or_default();
                let source = ScopeSource::<T>::new(resolver.handle());
                Ok(erase(Arc::new(OrderedView::new(
                    source,
                    options.failure_policy,
                ))))
            });

        let sequence = registry.next_sequence(key);
        registry.register_producer(RegistrationEntry::new(
            key,
            sequence,
            Lifetime::Scoped,
            Producer::Factory(factory),
        ))?;

        debug!(
            abstraction = std::any::type_name::<T>(),
            "Ordered view binding installed"
        );
        Ok(true)
    }
}

/// Resolution of ordered views
pub trait OrderedResolverExt {
    /// The materialized ordered view of `T` for this resolver's scope
    ///
    /// Never fails for lack of registrations: an unknown abstraction yields
    /// an empty view. A failing producer fails this call with its own error;
    /// what the next call sees depends on the view's failure policy.
    fn get_ordered<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<OrderedView<T>>>;
}

impl<R: ServiceResolver + ?Sized> OrderedResolverExt for R {
    fn get_ordered<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<OrderedView<T>>> {
        if let Some(view) = self.try_get::<OrderedView<T>>()? {
            view.items()?;
            return Ok(view);
        }

        trace!(
            abstraction = std::any::type_name::<T>(),
            "No ordered view binding, resolving directly"
        );
        Ok(Arc::new(OrderedView::from_sequenced(collect_sequenced::<T, R>(
            self,
        )?)))
    }
}

/// Realized implementations of `T`, typed and tagged with their sequence
fn collect_sequenced<T, R>(resolver: &R) -> Result<Vec<SequencedItem<T>>>
where
    T: ?Sized + Send + Sync + 'static,
    R: ServiceResolver + ?Sized,
{
    resolver
        .resolve_all_erased(ServiceKey::of::<T>())?
        .iter()
        .map(|item| {
            Ok(SequencedItem {
                sequence: item.sequence,
                instance: unerase::<T>(&item.instance)?,
            })
        })
        .collect()
}

/// View source reading from the scope the view was resolved in
struct ScopeSource<T: ?Sized> {
    handle: ResolverHandle,
    _abstraction: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> ScopeSource<T> {
    fn new(handle: ResolverHandle) -> Self {
        Self {
            handle,
            _abstraction: PhantomData,
        }
    }
}

impl<T: ?Sized + Send + Sync + 'static> ViewSource<T> for ScopeSource<T> {
    fn collect(&self) -> Result<Vec<SequencedItem<T>>> {
        let resolver = self
            .handle
            .upgrade()
            .ok_or_else(|| Error::scope_disposed(std::any::type_name::<OrderedView<T>>()))?;
        collect_sequenced::<T, dyn ServiceResolver>(&*resolver)
    }
}
