//! Unit tests for the typed resolver extension

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use ordi_domain::{
    Error, ErasedInstance, ResolverExt, ResolverHandle, Result, Sequence, SequencedInstance,
    ServiceKey, ServiceResolver, erase, unerase,
};

trait Shape: Send + Sync {
    fn sides(&self) -> u32;
}

struct Triangle;
impl Shape for Triangle {
    fn sides(&self) -> u32 {
        3
    }
}

struct Square;
impl Shape for Square {
    fn sides(&self) -> u32 {
        4
    }
}

/// Resolver over a fixed map of realized instances
#[derive(Default)]
struct MapResolver {
    items: HashMap<ServiceKey, Vec<SequencedInstance>>,
}

impl MapResolver {
    fn with<T: ?Sized + Send + Sync + 'static>(mut self, instance: Arc<T>) -> Self {
        let bucket = self.items.entry(ServiceKey::of::<T>()).or_default();
        let sequence = Sequence::new(bucket.len() as u64);
        bucket.push(SequencedInstance {
            sequence,
            instance: erase(instance),
        });
        self
    }
}

impl ServiceResolver for MapResolver {
    fn resolve_erased(&self, abstraction: ServiceKey) -> Result<ErasedInstance> {
        self.items
            .get(&abstraction)
            .and_then(|bucket| bucket.last())
            .map(|item| Arc::clone(&item.instance))
            .ok_or_else(|| Error::not_registered(abstraction.name()))
    }

    fn resolve_all_erased(&self, abstraction: ServiceKey) -> Result<Vec<SequencedInstance>> {
        Ok(self.items.get(&abstraction).cloned().unwrap_or_default())
    }

    fn is_registered(&self, abstraction: ServiceKey) -> bool {
        self.items.contains_key(&abstraction)
    }

    fn handle(&self) -> ResolverHandle {
        let weak: Weak<dyn ServiceResolver> = Weak::<MapResolver>::new();
        ResolverHandle::new(weak)
    }
}

#[test]
fn test_get_returns_last_registration() {
    let resolver = MapResolver::default()
        .with::<dyn Shape>(Arc::new(Triangle))
        .with::<dyn Shape>(Arc::new(Square));

    let shape = resolver.get::<dyn Shape>().unwrap();
    assert_eq!(shape.sides(), 4);
}

#[test]
fn test_get_all_keeps_order() {
    let resolver = MapResolver::default()
        .with::<dyn Shape>(Arc::new(Triangle))
        .with::<dyn Shape>(Arc::new(Square));

    let sides: Vec<u32> = resolver
        .get_all::<dyn Shape>()
        .unwrap()
        .iter()
        .map(|shape| shape.sides())
        .collect();
    assert_eq!(sides, vec![3, 4]);
}

#[test]
fn test_missing_service() {
    let resolver = MapResolver::default();

    assert!(matches!(
        resolver.get::<dyn Shape>(),
        Err(Error::NotRegistered { .. })
    ));
    assert!(resolver.try_get::<dyn Shape>().unwrap().is_none());
    assert!(resolver.get_all::<dyn Shape>().unwrap().is_empty());
}

#[test]
fn test_works_through_trait_object() {
    let resolver = MapResolver::default().with::<String>(Arc::new("hello".to_string()));
    let dynamic: &dyn ServiceResolver = &resolver;

    assert_eq!(dynamic.get::<String>().unwrap().as_str(), "hello");
}

#[test]
fn test_unerase_rejects_wrong_type() {
    let instance = erase::<String>(Arc::new("text".to_string()));

    assert!(unerase::<String>(&instance).is_ok());
    assert!(matches!(
        unerase::<u32>(&instance),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_detached_handle_does_not_upgrade() {
    let resolver = MapResolver::default();
    assert!(resolver.handle().upgrade().is_none());
}
