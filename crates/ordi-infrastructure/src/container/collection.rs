//! Service collection - the pre-build registration store

use std::collections::HashMap;

use ordi_domain::error::{Error, Result};
use ordi_domain::ports::ServiceRegistry;
use ordi_domain::value_objects::{RegistrationEntry, Sequence, ServiceKey};
use tracing::debug;

use super::module::ServiceModule;
use super::provider::ServiceProvider;

/// Append-only list of registrations, built once into a [`ServiceProvider`]
///
/// Entries are kept in global insertion order, which is also the
/// per-abstraction registration order.
#[derive(Debug, Default)]
pub struct ServiceCollection {
    entries: Vec<RegistrationEntry>,
    next_sequences: HashMap<ServiceKey, Sequence>,
    last_sequences: HashMap<ServiceKey, Sequence>,
}

impl ServiceCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries across all abstractions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in insertion order
    pub fn entries(&self) -> &[RegistrationEntry] {
        &self.entries
    }

    /// Number of entries stored under `abstraction`
    pub fn count_for(&self, abstraction: ServiceKey) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.abstraction == abstraction)
            .count()
    }

    /// Apply a module's registrations
    pub fn add_module(&mut self, module: &dyn ServiceModule) -> Result<&mut Self> {
        let before = self.entries.len();
        module.register(self)?;
        debug!(
            module = module.name(),
            added = self.entries.len() - before,
            "Service module registered"
        );
        Ok(self)
    }

    /// Freeze the registrations into a provider
    pub fn build(self) -> ServiceProvider {
        ServiceProvider::new(self.entries)
    }
}

impl ServiceRegistry for ServiceCollection {
    fn next_sequence(&mut self, abstraction: ServiceKey) -> Sequence {
        let slot = self
            .next_sequences
            .entry(abstraction)
            .or_insert(Sequence::FIRST);
        let sequence = *slot;
        *slot = sequence.next();
        sequence
    }

    fn register_producer(&mut self, entry: RegistrationEntry) -> Result<()> {
        let abstraction = entry.abstraction;

        if let Some(last) = self.last_sequences.get(&abstraction) {
            if entry.sequence <= *last {
                return Err(Error::invalid_registration(
                    abstraction.name(),
                    format!(
                        "sequence {} does not follow last registered sequence {}",
                        entry.sequence, last
                    ),
                ));
            }
        }

        // Sequences supplied from outside next_sequence must not be reissued
        let next = self
            .next_sequences
            .entry(abstraction)
            .or_insert(Sequence::FIRST);
        if *next <= entry.sequence {
            *next = entry.sequence.next();
        }
        self.last_sequences.insert(abstraction, entry.sequence);

        debug!(
            abstraction = abstraction.name(),
            sequence = entry.sequence.value(),
            lifetime = %entry.lifetime,
            form = entry.producer.kind(),
            implementation = entry.producer.implementation_name(),
            "Producer registered"
        );
        self.entries.push(entry);
        Ok(())
    }

    fn is_registered(&self, abstraction: ServiceKey) -> bool {
        self.last_sequences.contains_key(&abstraction)
    }
}
