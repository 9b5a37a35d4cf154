//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ordi_domain::{Component, Result, ServiceResolver};

/// Service identified by a small integer
pub trait FakeService: Send + Sync {
    fn id(&self) -> usize;
}

pub struct FakeServiceWithId {
    id: usize,
}

impl FakeServiceWithId {
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}

impl FakeService for FakeServiceWithId {
    fn id(&self) -> usize {
        self.id
    }
}

/// Constructed by the container, always with id 0
impl Component for FakeServiceWithId {
    fn construct(_resolver: &dyn ServiceResolver) -> Result<Self> {
        Ok(Self::new(0))
    }
}

ordi_domain::bind!(FakeServiceWithId => dyn FakeService);

/// Middleware chain element
pub trait Middleware: Send + Sync {
    fn name(&self) -> String;
}

pub struct AuthMiddleware;

impl Component for AuthMiddleware {
    fn construct(_resolver: &dyn ServiceResolver) -> Result<Self> {
        Ok(Self)
    }
}

impl Middleware for AuthMiddleware {
    fn name(&self) -> String {
        "auth".to_string()
    }
}

pub struct GzipMiddleware;

impl Component for GzipMiddleware {
    fn construct(_resolver: &dyn ServiceResolver) -> Result<Self> {
        Ok(Self)
    }
}

impl Middleware for GzipMiddleware {
    fn name(&self) -> String {
        "gzip".to_string()
    }
}

/// Middleware whose name comes from a `String` registered in the container
pub struct PrefixedMiddleware {
    prefix: Arc<String>,
}

impl Component for PrefixedMiddleware {
    fn construct(resolver: &dyn ServiceResolver) -> Result<Self> {
        use ordi_domain::ResolverExt;
        Ok(Self {
            prefix: resolver.get::<String>()?,
        })
    }
}

impl Middleware for PrefixedMiddleware {
    fn name(&self) -> String {
        format!("{}-prefixed", self.prefix)
    }
}

ordi_domain::bind!(AuthMiddleware => dyn Middleware);
ordi_domain::bind!(GzipMiddleware => dyn Middleware);
ordi_domain::bind!(PrefixedMiddleware => dyn Middleware);

/// Middleware with a fixed name, built by factories and instances
pub struct NamedMiddleware(pub &'static str);

impl Middleware for NamedMiddleware {
    fn name(&self) -> String {
        self.0.to_string()
    }
}

/// Factory that counts how often it runs
pub fn counting_factory(
    name: &'static str,
    calls: &Arc<AtomicUsize>,
) -> impl Fn(&dyn ServiceResolver) -> Result<Arc<dyn Middleware>> + Send + Sync + 'static {
    let calls = Arc::clone(calls);
    move |_resolver: &dyn ServiceResolver| -> Result<Arc<dyn Middleware>> {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(NamedMiddleware(name)))
    }
}

/// Names of a middleware chain, in order
pub fn names(items: &[Arc<dyn Middleware>]) -> Vec<String> {
    items.iter().map(|item| item.name()).collect()
}

/// Ids of a fake service chain, in order
pub fn ids(items: &[Arc<dyn FakeService>]) -> Vec<usize> {
    items.iter().map(|item| item.id()).collect()
}

/// Thin data pointer of an `Arc`, for identity comparisons across threads
pub fn address<T: ?Sized>(item: &Arc<T>) -> usize {
    Arc::as_ptr(item).cast::<()>() as usize
}
