//! Service provider and resolution scopes
//!
//! ## Instance caching
//!
//! | Lifetime | Cached in |
//! |----------|-----------|
//! | Singleton | root scope cell, shared by every child scope |
//! | Scoped | the resolving scope's own cell |
//! | Transient | never cached |
//!
//! Each cacheable entry owns one [`OnceCell`], so a producer runs at most once
//! per cell and concurrent resolvers block on that cell only.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use once_cell::sync::OnceCell;
use ordi_domain::error::{Error, Result};
use ordi_domain::ports::{ErasedInstance, ResolverHandle, SequencedInstance, ServiceResolver};
use ordi_domain::value_objects::{Lifetime, Producer, RegistrationEntry, ServiceKey};
use tracing::{debug, trace};

/// Frozen registrations indexed by abstraction
struct Registrations {
    entries: Vec<RegistrationEntry>,
    by_key: HashMap<ServiceKey, Vec<usize>>,
}

impl Registrations {
    fn new(entries: Vec<RegistrationEntry>) -> Self {
        let mut by_key: HashMap<ServiceKey, Vec<usize>> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_key.entry(entry.abstraction).or_default().push(index);
        }
        Self { entries, by_key }
    }

    fn indices(&self, abstraction: ServiceKey) -> &[usize] {
        self.by_key
            .get(&abstraction)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// State shared by a scope and every handle to it
struct ScopeState {
    id: u64,
    registrations: Arc<Registrations>,
    root: Option<Arc<ScopeState>>,
    cells: Vec<OnceCell<ErasedInstance>>,
    self_ref: Weak<ScopeState>,
}

impl ScopeState {
    fn new(id: u64, registrations: Arc<Registrations>, root: Option<Arc<ScopeState>>) -> Arc<Self> {
        let cells = (0..registrations.entries.len())
            .map(|_| OnceCell::new())
            .collect();
        Arc::new_cyclic(|self_ref| Self {
            id,
            registrations,
            root,
            cells,
            self_ref: self_ref.clone(),
        })
    }

    fn instantiate(&self, index: usize) -> Result<ErasedInstance> {
        let entry = &self.registrations.entries[index];

        if let Producer::Instance(instance) = &entry.producer {
            return Ok(Arc::clone(instance));
        }

        match (entry.lifetime, &self.root) {
            (Lifetime::Singleton, Some(root)) => root.instantiate(index),
            (Lifetime::Singleton | Lifetime::Scoped, _) => self.cells[index]
                .get_or_try_init(|| self.produce(entry))
                .cloned(),
            (Lifetime::Transient, _) => self.produce(entry),
        }
    }

    fn produce(&self, entry: &RegistrationEntry) -> Result<ErasedInstance> {
        trace!(
            scope = self.id,
            abstraction = entry.abstraction.name(),
            sequence = entry.sequence.value(),
            form = entry.producer.kind(),
            "Producing instance"
        );
        match &entry.producer {
            Producer::Instance(instance) => Ok(Arc::clone(instance)),
            Producer::Constructor { construct, .. } | Producer::Factory(construct) => {
                construct(self)
            }
        }
    }
}

impl ServiceResolver for ScopeState {
    fn resolve_erased(&self, abstraction: ServiceKey) -> Result<ErasedInstance> {
        let index = self
            .registrations
            .indices(abstraction)
            .last()
            .copied()
            .ok_or_else(|| Error::not_registered(abstraction.name()))?;
        self.instantiate(index)
    }

    fn resolve_all_erased(&self, abstraction: ServiceKey) -> Result<Vec<SequencedInstance>> {
        self.registrations
            .indices(abstraction)
            .iter()
            .map(|&index| {
                Ok(SequencedInstance {
                    sequence: self.registrations.entries[index].sequence,
                    instance: self.instantiate(index)?,
                })
            })
            .collect()
    }

    fn is_registered(&self, abstraction: ServiceKey) -> bool {
        self.registrations.by_key.contains_key(&abstraction)
    }

    fn handle(&self) -> ResolverHandle {
        let weak: Weak<dyn ServiceResolver> = self.self_ref.clone();
        ResolverHandle::new(weak)
    }
}

/// Built container; also acts as the root resolution scope
pub struct ServiceProvider {
    root: Arc<ScopeState>,
    next_scope_id: AtomicU64,
}

impl ServiceProvider {
    pub(crate) fn new(entries: Vec<RegistrationEntry>) -> Self {
        let registrations = Arc::new(Registrations::new(entries));
        debug!(
            registrations = registrations.entries.len(),
            abstractions = registrations.by_key.len(),
            "Service provider built"
        );
        Self {
            root: ScopeState::new(0, registrations, None),
            next_scope_id: AtomicU64::new(1),
        }
    }

    /// Open a child resolution scope
    pub fn create_scope(&self) -> Scope {
        let id = self.next_scope_id.fetch_add(1, Ordering::Relaxed);
        trace!(scope = id, "Scope created");
        Scope {
            state: ScopeState::new(
                id,
                Arc::clone(&self.root.registrations),
                Some(Arc::clone(&self.root)),
            ),
        }
    }

    /// Total number of registrations
    pub fn registration_count(&self) -> usize {
        self.root.registrations.entries.len()
    }

    /// Number of distinct abstractions with at least one registration
    pub fn abstraction_count(&self) -> usize {
        self.root.registrations.by_key.len()
    }
}

impl ServiceResolver for ServiceProvider {
    fn resolve_erased(&self, abstraction: ServiceKey) -> Result<ErasedInstance> {
        self.root.resolve_erased(abstraction)
    }

    fn resolve_all_erased(&self, abstraction: ServiceKey) -> Result<Vec<SequencedInstance>> {
        self.root.resolve_all_erased(abstraction)
    }

    fn is_registered(&self, abstraction: ServiceKey) -> bool {
        self.root.is_registered(abstraction)
    }

    fn handle(&self) -> ResolverHandle {
        self.root.handle()
    }
}

impl fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("registrations", &self.registration_count())
            .field("abstractions", &self.abstraction_count())
            .finish()
    }
}

/// Child resolution scope
///
/// Scoped instances and ordered views resolved here live as long as the
/// scope. Clones share the same cache.
#[derive(Clone)]
pub struct Scope {
    state: Arc<ScopeState>,
}

impl Scope {
    /// Identifier of this scope, unique per provider
    pub fn id(&self) -> u64 {
        self.state.id
    }
}

impl ServiceResolver for Scope {
    fn resolve_erased(&self, abstraction: ServiceKey) -> Result<ErasedInstance> {
        self.state.resolve_erased(abstraction)
    }

    fn resolve_all_erased(&self, abstraction: ServiceKey) -> Result<Vec<SequencedInstance>> {
        self.state.resolve_all_erased(abstraction)
    }

    fn is_registered(&self, abstraction: ServiceKey) -> bool {
        self.state.is_registered(abstraction)
    }

    fn handle(&self) -> ResolverHandle {
        self.state.handle()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope").field("id", &self.state.id).finish()
    }
}
