//! Service providers: grouped registration logic for a container.

use crate::container::Container;

/// A unit of registration, applied with [`Container::register`].
///
/// `register` adds bindings. `boot` runs afterwards and may resolve services
/// that `register` (or an earlier provider) added.
pub trait ServiceProvider {
  fn register(&self, container: &Container);

  fn boot(&self, _container: &Container) {}
}
