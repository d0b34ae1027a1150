//! Public macros for ergonomic service resolution.
//!
//! Each macro takes the resolver explicitly as its first argument: a
//! [`Container`](crate::Container), a [`Scope`](crate::Scope), or anything else
//! with a `resolve::<T>(Option<&str>)` method.

/// Resolves a required service, panicking if it cannot be resolved.
///
/// # Panics
///
/// Panics with the [`ResolveError`](crate::ResolveError) message if the service
/// is missing, scoped but resolved from the root container, or circular. For a
/// non-panicking version, use [`maybe_resolve_from!`].
///
/// # Examples
///
/// ```
/// use request_bag_ioc::{resolve_from, Container};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync { fn greet(&self) -> String; }
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// let container = Container::new();
/// container.add_singleton(|| String::from("hello"));
/// container.add_singleton_trait::<dyn Greeter>(|| Arc::new(EnglishGreeter));
///
/// let scope = container.create_scope();
/// assert_eq!(*resolve_from!(scope, String), "hello");
/// assert_eq!(resolve_from!(scope, trait Greeter).greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve_from {
  (@required $resolver:expr, $type:ty, $name:expr) => {
    match $resolver.resolve::<$type>($name) {
      Ok(service) => service,
      Err(err) => panic!("{}", err),
    }
  };
  ($resolver:expr, trait $trait_ident:ident) => {
    $crate::resolve_from!(@required $resolver, dyn $trait_ident, None)
  };
  ($resolver:expr, trait $trait_ident:ident, $name:expr) => {
    $crate::resolve_from!(@required $resolver, dyn $trait_ident, Some($name))
  };
  ($resolver:expr, $type:ty) => {
    $crate::resolve_from!(@required $resolver, $type, None)
  };
  ($resolver:expr, $type:ty, $name:expr) => {
    $crate::resolve_from!(@required $resolver, $type, Some($name))
  };
}

/// Resolves a service, returning `None` if it cannot be resolved.
#[macro_export]
macro_rules! maybe_resolve_from {
  ($resolver:expr, trait $trait_ident:ident) => {
    $resolver.resolve::<dyn $trait_ident>(None).ok()
  };
  ($resolver:expr, trait $trait_ident:ident, $name:expr) => {
    $resolver.resolve::<dyn $trait_ident>(Some($name)).ok()
  };
  ($resolver:expr, $type:ty) => {
    $resolver.resolve::<$type>(None).ok()
  };
  ($resolver:expr, $type:ty, $name:expr) => {
    $resolver.resolve::<$type>(Some($name)).ok()
  };
}
