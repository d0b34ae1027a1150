//! Simulates a few requests flowing through middleware and a handler that
//! share state only through the request's bag.
//!
//! Run with `RUST_LOG=trace` to see the scope and bag events.

use request_bag::{RequestBag, RequestBagServiceProvider, Scope};
use request_bag_ioc::Container;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn auth_middleware(scope: &Scope<'_>, token: Option<&str>) {
  let bag = RequestBag::from_scope(scope);
  match token {
    Some(token) => bag.add("user", json!({ "token": token, "roles": ["reader"] })),
    None => bag.add("user", json!(null)),
  };
}

fn query_middleware(scope: &Scope<'_>, query: &[(&str, &str)]) {
  RequestBag::from_scope(scope).merge(query.iter().copied());
}

fn handler(scope: &Scope<'_>) -> String {
  let bag = RequestBag::from_scope(scope);
  if !bag.has("user") {
    return format!("401 (user key present: {})", bag.exists("user"));
  }
  let page = bag.get_or("page", "1");
  format!("200 page={} bag={}", page, serde_json::Value::Object(bag.all()))
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let container = Container::new();
  container.register(RequestBagServiceProvider);

  let requests: [(Option<&str>, &[(&str, &str)]); 3] = [
    (Some("abc"), &[("page", "2")]),
    (None, &[]),
    (Some("xyz"), &[("sort", "desc")]),
  ];

  for (token, query) in requests {
    let scope = container.create_scope();
    auth_middleware(&scope, token);
    query_middleware(&scope, query);
    println!("request {} -> {}", scope.id(), handler(&scope));
  }
}
