use request_bag_ioc::{resolve_from, Container};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc, Mutex,
};

// A per-request record of what happened while handling it.
#[derive(Default)]
struct RequestTrace {
  steps: Mutex<Vec<String>>,
}

static REQUESTS_SEEN: AtomicUsize = AtomicUsize::new(0);

fn handle(container: &Container, path: &str) {
  // One scope per request; everything scoped is dropped when it ends.
  let scope = container.create_scope();
  REQUESTS_SEEN.fetch_add(1, Ordering::SeqCst);

  let trace = resolve_from!(scope, RequestTrace);
  trace.steps.lock().unwrap().push(format!("routing {}", path));

  // Later code in the same request resolves the same instance.
  let again = resolve_from!(scope, RequestTrace);
  assert!(Arc::ptr_eq(&trace, &again));
  again.steps.lock().unwrap().push("responding".to_string());

  println!("[scope {}] {:?}", scope.id(), trace.steps.lock().unwrap());
}

fn main() {
  let container = Container::new();
  container.add_scoped(RequestTrace::default);

  handle(&container, "/users");
  handle(&container, "/orders");

  assert_eq!(REQUESTS_SEEN.load(Ordering::SeqCst), 2);
}
