//! # Request Bag
//!
//! A key-value bag that lives for exactly one request.
//!
//! Values are [`serde_json::Value`]s stored under string keys. The bag tells
//! "never set" apart from "set to something empty": [`RequestBag::exists`] checks
//! presence only, while [`RequestBag::has`] also requires the value to be
//! non-empty (see [`is_empty_value`]).
//!
//! The bag is handed to request-handling code explicitly. Register it with
//! [`RequestBagServiceProvider`], open one [`Scope`] per request, and resolve
//! it from that scope; every resolution within the scope returns the same bag.
//!
//! ```
//! use request_bag::{RequestBag, RequestBagServiceProvider};
//! use request_bag_ioc::{Container, Scope};
//! use serde_json::json;
//!
//! fn authenticate(scope: &Scope<'_>) {
//!   RequestBag::from_scope(scope).add("user", json!({ "id": 7 })).add("retry", 0);
//! }
//!
//! fn respond(scope: &Scope<'_>) -> bool {
//!   let bag = RequestBag::from_scope(scope);
//!   bag.has("user") && !bag.has("retry") && bag.exists("retry")
//! }
//!
//! let container = Container::new();
//! container.register(RequestBagServiceProvider);
//!
//! let request = container.create_scope();
//! authenticate(&request);
//! assert!(respond(&request));
//!
//! // The next request starts with an empty bag.
//! assert!(RequestBag::from_scope(&container.create_scope()).is_empty());
//! ```

mod bag;
mod emptiness;
mod provider;

pub use bag::RequestBag;
pub use emptiness::is_empty_value;
pub use provider::RequestBagServiceProvider;
pub use request_bag_ioc::Scope;
pub use serde_json::{Map, Value};
