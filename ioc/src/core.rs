//! Core, non-public data structures for the IoC container.

use crate::error::ResolveError;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

thread_local! {
  // Keys currently being resolved on this thread. A key seen twice means a cycle.
  static RESOLVING_STACK: RefCell<HashSet<InjectionKey>> = RefCell::new(HashSet::new());
}

/// An RAII guard that detects circular dependencies.
///
/// Entering adds the key to the thread-local resolution stack and fails if the
/// key is already there. Dropping the guard removes the key again.
pub(crate) struct ResolutionGuard {
  key: InjectionKey,
}

impl ResolutionGuard {
  pub(crate) fn enter(key: InjectionKey) -> Result<Self, ResolveError> {
    let inserted = RESOLVING_STACK.with(|stack| stack.borrow_mut().insert(key.clone()));
    if !inserted {
      tracing::warn!(key = ?key, "circular dependency detected");
      return Err(ResolveError::CircularDependency {
        key: format!("{:?}", key),
      });
    }
    Ok(Self { key })
  }
}

impl Drop for ResolutionGuard {
  fn drop(&mut self) {
    RESOLVING_STACK.with(|stack| {
      stack.borrow_mut().remove(&self.key);
    });
  }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct InjectionKey {
  pub(crate) type_id: TypeId,
  pub(crate) type_name: &'static str,
  pub(crate) name: Option<String>,
}

impl InjectionKey {
  pub(crate) fn of<T: ?Sized + Any>(name: Option<&str>) -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      type_name: std::any::type_name::<T>(),
      name: name.map(str::to_owned),
    }
  }

  pub(crate) fn not_registered(&self) -> ResolveError {
    ResolveError::NotRegistered {
      type_name: self.type_name,
      name: self.name.clone(),
    }
  }

  pub(crate) fn scope_required(&self) -> ResolveError {
    ResolveError::ScopeRequired {
      type_name: self.type_name,
      name: self.name.clone(),
    }
  }
}

impl fmt::Debug for InjectionKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "Key({}, Name({}))", self.type_name, name),
      None => write!(f, "Key({})", self.type_name),
    }
  }
}

/// A type-erased `Arc<T>` as produced by a factory.
pub(crate) type Erased = Box<dyn Any + Send + Sync>;
pub(crate) type Factory = Box<dyn Fn() -> Erased + Send + Sync>;

/// How long a resolved instance lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
  /// One instance per container, built on first resolution.
  Singleton,
  /// One instance per [`Scope`](crate::Scope), discarded when the scope is dropped.
  Scoped,
  /// A fresh instance on every resolution.
  Transient,
}

impl fmt::Display for Lifetime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Lifetime::Singleton => "singleton",
      Lifetime::Scoped => "scoped",
      Lifetime::Transient => "transient",
    })
  }
}

pub(crate) enum Provider {
  Singleton {
    cell: once_cell::sync::OnceCell<Erased>,
    factory: Option<Factory>,
  },
  Scoped {
    factory: Factory,
  },
  Transient {
    factory: Factory,
  },
}

impl Provider {
  pub(crate) fn lifetime(&self) -> Lifetime {
    match self {
      Provider::Singleton { .. } => Lifetime::Singleton,
      Provider::Scoped { .. } => Lifetime::Scoped,
      Provider::Transient { .. } => Lifetime::Transient,
    }
  }
}

/// Clones the `Arc<T>` held inside an erased box.
pub(crate) fn downcast_arc<T: ?Sized + Any + Send + Sync>(
  erased: &Erased,
  key: &InjectionKey,
) -> Result<std::sync::Arc<T>, ResolveError> {
  erased
    .downcast_ref::<std::sync::Arc<T>>()
    .cloned()
    .ok_or(ResolveError::TypeMismatch {
      type_name: key.type_name,
    })
}
