//! # Request Bag IoC
//!
//! A thread-safe Inversion of Control container with singleton, transient and
//! scoped lifetimes.
//!
//! ## Core Concepts
//!
//! - **Container**: The central registry for all your services. There is no
//!   global instance; pass the container (or a scope) to the code that needs it.
//! - **Scope**: A short-lived resolution context, usually one per request.
//!   Scoped services are built once per scope and dropped with it.
//! - **Resolution**: `resolve` returns a [`ResolveError`] on failure, `get`
//!   returns an `Option`, and the [`resolve_from!`] macro panics.
//! - **Traits**: Services can be registered against a trait and resolved as a trait object.
//! - **Providers**: A [`ServiceProvider`] groups related registrations.
//!
//! ## Quick Start
//!
//! ```
//! use request_bag_ioc::{resolve_from, Container};
//! use std::sync::Mutex;
//!
//! #[derive(Default)]
//! struct RequestLog(Mutex<Vec<String>>);
//!
//! let container = Container::new();
//! container.add_instance(String::from("v1"));
//! container.add_scoped(RequestLog::default);
//!
//! // One scope per request.
//! let scope = container.create_scope();
//! resolve_from!(scope, RequestLog).0.lock().unwrap().push("start".into());
//! assert_eq!(resolve_from!(scope, RequestLog).0.lock().unwrap().len(), 1);
//!
//! // A new request sees a fresh scoped instance but the same singleton.
//! let next = container.create_scope();
//! assert!(resolve_from!(next, RequestLog).0.lock().unwrap().is_empty());
//! assert_eq!(*resolve_from!(next, String), "v1");
//! ```

mod container;
mod core;
mod error;
mod macros;
mod provider;
mod scope;

pub use crate::core::Lifetime;
pub use container::Container;
pub use error::ResolveError;
pub use provider::ServiceProvider;
pub use scope::Scope;
