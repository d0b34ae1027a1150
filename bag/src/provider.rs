//! Registration of the bag with a container.

use crate::bag::RequestBag;
use request_bag_ioc::{resolve_from, Container, ResolveError, Scope, ServiceProvider};
use std::sync::Arc;

/// Registers [`RequestBag`] as a scoped service: each [`Scope`](request_bag_ioc::Scope)
/// gets its own empty bag on first resolution and drops it when the scope ends.
///
/// ```
/// use request_bag::{RequestBag, RequestBagServiceProvider};
/// use request_bag_ioc::Container;
///
/// let container = Container::new();
/// container.register(RequestBagServiceProvider);
///
/// let request = container.create_scope();
/// let bag = RequestBag::from_scope(&request);
/// bag.add("tenant", "acme");
/// assert!(RequestBag::from_scope(&request).has("tenant"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBagServiceProvider;

impl ServiceProvider for RequestBagServiceProvider {
  fn register(&self, container: &Container) {
    container.add_scoped(RequestBag::new);
  }
}

impl RequestBag {
  /// Resolves the scope's bag.
  ///
  /// # Errors
  ///
  /// Fails if no bag is registered with the scope's container.
  pub fn try_from_scope(scope: &Scope<'_>) -> Result<Arc<RequestBag>, ResolveError> {
    scope.resolve::<RequestBag>(None)
  }

  /// Resolves the scope's bag.
  ///
  /// # Panics
  ///
  /// Panics if [`RequestBagServiceProvider`] (or an equivalent scoped
  /// registration) was never applied to the scope's container.
  pub fn from_scope(scope: &Scope<'_>) -> Arc<RequestBag> {
    resolve_from!(scope, RequestBag)
  }
}
