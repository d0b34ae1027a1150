//! Resolution scopes.
//!
//! A [`Scope`] is the unit of lifetime for scoped services: it builds each
//! scoped registration at most once, hands out the same `Arc` on every later
//! resolution, and discards everything it built when dropped. A web server
//! would open one scope per inbound request.

use crate::container::Container;
use crate::core::{downcast_arc, Erased, InjectionKey, Provider, ResolutionGuard};
use crate::error::ResolveError;
use dashmap::DashMap;
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(1);

/// A resolution scope borrowed from a [`Container`].
pub struct Scope<'c> {
  id: u64,
  container: &'c Container,
  instances: DashMap<InjectionKey, Erased>,
}

impl<'c> Scope<'c> {
  pub(crate) fn new(container: &'c Container) -> Self {
    let id = NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed);
    tracing::debug!(scope_id = id, "scope created");
    Self {
      id,
      container,
      instances: DashMap::new(),
    }
  }

  /// A process-unique identifier for this scope.
  pub fn id(&self) -> u64 {
    self.id
  }

  /// The container this scope resolves against.
  pub fn container(&self) -> &'c Container {
    self.container
  }

  /// Number of scoped instances built so far in this scope.
  pub fn instance_count(&self) -> usize {
    self.instances.len()
  }

  /// Resolves a service within this scope.
  ///
  /// Scoped services are built on first use and cached for the life of the
  /// scope. Singleton and transient services are resolved by the container.
  ///
  /// # Errors
  ///
  /// Returns [`ResolveError::NotRegistered`] if nothing is registered under the
  /// type and name, or [`ResolveError::CircularDependency`] if the service is
  /// already being resolved on this thread.
  pub fn resolve<T: ?Sized + Any + Send + Sync>(
    &self,
    name: Option<&str>,
  ) -> Result<Arc<T>, ResolveError> {
    let key = InjectionKey::of::<T>(name);
    let _guard = ResolutionGuard::enter(key.clone())?;

    if let Some(instance) = self.instances.get(&key) {
      tracing::trace!(scope_id = self.id, service = key.type_name, "scoped instance reused");
      return downcast_arc::<T>(instance.value(), &key);
    }

    let provider = self
      .container
      .provider(&key)
      .ok_or_else(|| key.not_registered())?;
    let factory = match provider.value() {
      Provider::Scoped { factory } => factory,
      unscoped => return self.container.resolve_unscoped::<T>(&key, unscoped),
    };
    let built = factory();
    drop(provider);

    tracing::trace!(scope_id = self.id, service = key.type_name, "scoped instance built");
    // A concurrent resolution in the same scope may have won the race; keep its instance.
    let instance = self.instances.entry(key.clone()).or_insert(built);
    downcast_arc::<T>(instance.value(), &key)
  }

  /// Resolves a service within this scope, returning `None` on any failure.
  pub fn get<T: ?Sized + Any + Send + Sync>(&self, name: Option<&str>) -> Option<Arc<T>> {
    self.resolve::<T>(name).ok()
  }
}

impl fmt::Debug for Scope<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Scope")
      .field("id", &self.id)
      .field("instances", &self.instances.len())
      .finish()
  }
}

impl Drop for Scope<'_> {
  fn drop(&mut self) {
    tracing::debug!(
      scope_id = self.id,
      instances = self.instances.len(),
      "scope ended, discarding instances"
    );
  }
}
