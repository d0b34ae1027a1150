//! Errors reported while resolving services.

use thiserror::Error;

/// The reason a service could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  /// Nothing is registered under the requested type and name.
  #[error("Failed to resolve required service: {}{}", .type_name, fmt_name(.name))]
  NotRegistered {
    type_name: &'static str,
    name: Option<String>,
  },

  /// The service has a scoped lifetime and was requested from the root container.
  #[error("Service {}{} is scoped and must be resolved from a Scope", .type_name, fmt_name(.name))]
  ScopeRequired {
    type_name: &'static str,
    name: Option<String>,
  },

  /// The service is already being resolved further up the current thread's call stack.
  #[error("Circular dependency detected while resolving service: {key}")]
  CircularDependency { key: String },

  /// A registration exists but holds a value of a different type.
  #[error("Registered instance could not be downcast to {type_name}")]
  TypeMismatch { type_name: &'static str },
}

fn fmt_name(name: &Option<String>) -> String {
  match name {
    Some(n) => format!(" (name '{}')", n),
    None => String::new(),
  }
}
