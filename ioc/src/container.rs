//! The main `Container` struct and its associated methods.

use crate::core::{downcast_arc, Erased, Factory, InjectionKey, Lifetime, Provider, ResolutionGuard};
use crate::error::ResolveError;
use crate::provider::ServiceProvider;
use crate::scope::Scope;
use dashmap::mapref::one::Ref;
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// The Inversion of Control (IoC) container.
///
/// This struct holds the registrations for all services. It is thread-safe
/// and allows for dynamic registration and resolution of services. Scoped
/// services are resolved through a [`Scope`] created with [`Container::create_scope`].
#[derive(Default)]
pub struct Container {
  providers: DashMap<InjectionKey, Provider>,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- PRIVATE HELPERS ---

  fn insert(&self, key: InjectionKey, provider: Provider) {
    tracing::debug!(
      lifetime = %provider.lifetime(),
      service = key.type_name,
      name = ?key.name,
      "registered service"
    );
    self.providers.insert(key, provider);
  }

  fn erase<T: Any + Send + Sync>(
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) -> Factory {
    Box::new(move || -> Erased { Box::new(Arc::new(factory())) })
  }

  fn erase_trait<I: ?Sized + Any + Send + Sync>(
    factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) -> Factory {
    Box::new(move || -> Erased { Box::new(factory()) })
  }

  fn add_instance_internal<T: Any + Send + Sync>(&self, name: Option<&str>, instance: T) {
    let erased: Erased = Box::new(Arc::new(instance));
    let provider = Provider::Singleton {
      cell: once_cell::sync::OnceCell::with_value(erased),
      factory: None,
    };
    self.insert(InjectionKey::of::<T>(name), provider);
  }

  fn add_singleton_internal<T: Any + Send + Sync>(
    &self,
    name: Option<&str>,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) {
    let provider = Provider::Singleton {
      cell: once_cell::sync::OnceCell::new(),
      factory: Some(Self::erase(factory)),
    };
    self.insert(InjectionKey::of::<T>(name), provider);
  }

  fn add_transient_internal<T: Any + Send + Sync>(
    &self,
    name: Option<&str>,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) {
    let provider = Provider::Transient {
      factory: Self::erase(factory),
    };
    self.insert(InjectionKey::of::<T>(name), provider);
  }

  fn add_scoped_internal<T: Any + Send + Sync>(
    &self,
    name: Option<&str>,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) {
    let provider = Provider::Scoped {
      factory: Self::erase(factory),
    };
    self.insert(InjectionKey::of::<T>(name), provider);
  }

  fn add_singleton_trait_internal<I: ?Sized + Any + Send + Sync>(
    &self,
    name: Option<&str>,
    factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    let provider = Provider::Singleton {
      cell: once_cell::sync::OnceCell::new(),
      factory: Some(Self::erase_trait(factory)),
    };
    self.insert(InjectionKey::of::<I>(name), provider);
  }

  fn add_scoped_trait_internal<I: ?Sized + Any + Send + Sync>(
    &self,
    name: Option<&str>,
    factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    let provider = Provider::Scoped {
      factory: Self::erase_trait(factory),
    };
    self.insert(InjectionKey::of::<I>(name), provider);
  }

  pub(crate) fn provider(&self, key: &InjectionKey) -> Option<Ref<'_, InjectionKey, Provider>> {
    self.providers.get(key)
  }

  /// Resolves a singleton or transient registration. Scoped registrations are
  /// rejected here; `Scope` handles them before falling back to this.
  pub(crate) fn resolve_unscoped<T: ?Sized + Any + Send + Sync>(
    &self,
    key: &InjectionKey,
    provider: &Provider,
  ) -> Result<Arc<T>, ResolveError> {
    match provider {
      Provider::Singleton { cell, factory } => {
        let instance = cell.get_or_try_init(|| {
          factory
            .as_ref()
            .map(|build| build())
            .ok_or_else(|| key.not_registered())
        })?;
        downcast_arc::<T>(instance, key)
      }
      Provider::Transient { factory } => downcast_arc::<T>(&factory(), key),
      Provider::Scoped { .. } => Err(key.scope_required()),
    }
  }

  // --- PUBLIC API ---

  // --- Instance Registration ---
  pub fn add_instance<T: Any + Send + Sync>(&self, instance: T) {
    self.add_instance_internal(None, instance);
  }
  pub fn add_instance_with_name<T: Any + Send + Sync>(&self, name: &str, instance: T) {
    self.add_instance_internal(Some(name), instance);
  }

  // --- Singleton Registration ---
  pub fn add_singleton<T: Any + Send + Sync>(
    &self,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) {
    self.add_singleton_internal(None, factory);
  }
  pub fn add_singleton_with_name<T: Any + Send + Sync>(
    &self,
    name: &str,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) {
    self.add_singleton_internal(Some(name), factory);
  }

  // --- Transient Registration ---
  pub fn add_transient<T: Any + Send + Sync>(
    &self,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) {
    self.add_transient_internal(None, factory);
  }
  pub fn add_transient_with_name<T: Any + Send + Sync>(
    &self,
    name: &str,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) {
    self.add_transient_internal(Some(name), factory);
  }

  // --- Scoped Registration ---
  /// Registers a service that is built at most once per [`Scope`].
  pub fn add_scoped<T: Any + Send + Sync>(&self, factory: impl Fn() -> T + Send + Sync + 'static) {
    self.add_scoped_internal(None, factory);
  }
  pub fn add_scoped_with_name<T: Any + Send + Sync>(
    &self,
    name: &str,
    factory: impl Fn() -> T + Send + Sync + 'static,
  ) {
    self.add_scoped_internal(Some(name), factory);
  }

  // --- Trait Registration ---
  pub fn add_singleton_trait<I: ?Sized + Any + Send + Sync>(
    &self,
    factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    self.add_singleton_trait_internal(None, factory);
  }
  pub fn add_singleton_trait_with_name<I: ?Sized + Any + Send + Sync>(
    &self,
    name: &str,
    factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    self.add_singleton_trait_internal(Some(name), factory);
  }
  pub fn add_scoped_trait<I: ?Sized + Any + Send + Sync>(
    &self,
    factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    self.add_scoped_trait_internal(None, factory);
  }
  pub fn add_scoped_trait_with_name<I: ?Sized + Any + Send + Sync>(
    &self,
    name: &str,
    factory: impl Fn() -> Arc<I> + Send + Sync + 'static,
  ) {
    self.add_scoped_trait_internal(Some(name), factory);
  }

  // --- Providers ---
  /// Runs a provider's `register` step followed by its `boot` step.
  pub fn register<P: ServiceProvider>(&self, provider: P) {
    provider.register(self);
    provider.boot(self);
  }

  // --- Scopes ---
  /// Opens a new resolution scope, typically one per request.
  pub fn create_scope(&self) -> Scope<'_> {
    Scope::new(self)
  }

  // --- Resolution ---
  /// Returns `true` if anything is registered under the type and name.
  pub fn is_registered<T: ?Sized + Any>(&self, name: Option<&str>) -> bool {
    self.providers.contains_key(&InjectionKey::of::<T>(name))
  }

  /// The lifetime a service was registered with, if it is registered.
  pub fn lifetime_of<T: ?Sized + Any>(&self, name: Option<&str>) -> Option<Lifetime> {
    self
      .providers
      .get(&InjectionKey::of::<T>(name))
      .map(|provider| provider.lifetime())
  }

  /// Resolves a singleton or transient service from the container.
  ///
  /// # Errors
  ///
  /// Returns [`ResolveError::ScopeRequired`] for scoped services, which only a
  /// [`Scope`] can build.
  pub fn resolve<T: ?Sized + Any + Send + Sync>(
    &self,
    name: Option<&str>,
  ) -> Result<Arc<T>, ResolveError> {
    let key = InjectionKey::of::<T>(name);
    let _guard = ResolutionGuard::enter(key.clone())?;

    let provider = self.providers.get(&key).ok_or_else(|| key.not_registered())?;
    tracing::trace!(service = key.type_name, name = ?key.name, "resolving from container");
    self.resolve_unscoped::<T>(&key, provider.value())
  }

  /// Resolves a service from the container, returning `None` on any failure.
  pub fn get<T: ?Sized + Any + Send + Sync>(&self, name: Option<&str>) -> Option<Arc<T>> {
    self.resolve::<T>(name).ok()
  }
}
