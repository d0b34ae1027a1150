use request_bag_ioc::{resolve_from, Container};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct Tracker {
  id: usize,
}

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_tracker(kind: &str) -> Tracker {
  println!("Creating {} Tracker...", kind);
  Tracker {
    id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
  }
}

fn main() {
  let container = Container::new();

  // Built once for the whole container.
  container.add_singleton_with_name("singleton", || next_tracker("SINGLETON"));
  // Built on every resolution.
  container.add_transient_with_name("transient", || next_tracker("TRANSIENT"));
  // Built once per scope.
  container.add_scoped_with_name("scoped", || next_tracker("SCOPED"));

  println!("--- Resolving Singletons ---");
  let s1 = resolve_from!(&container, Tracker, "singleton");
  let s2 = resolve_from!(&container, Tracker, "singleton");
  assert!(Arc::ptr_eq(&s1, &s2), "Singleton instances should be identical");
  println!("Singleton IDs: {} and {}\n", s1.id, s2.id);

  println!("--- Resolving Transients ---");
  let t1 = resolve_from!(&container, Tracker, "transient");
  let t2 = resolve_from!(&container, Tracker, "transient");
  assert!(!Arc::ptr_eq(&t1, &t2), "Transient instances should be different");
  println!("Transient IDs: {} and {}\n", t1.id, t2.id);

  println!("--- Resolving Scoped ---");
  let first_request = container.create_scope();
  let r1 = resolve_from!(first_request, Tracker, "scoped");
  let r2 = resolve_from!(first_request, Tracker, "scoped");
  assert!(Arc::ptr_eq(&r1, &r2), "Same scope should share one instance");

  let second_request = container.create_scope();
  let r3 = resolve_from!(second_request, Tracker, "scoped");
  assert!(!Arc::ptr_eq(&r1, &r3), "Different scopes get different instances");
  println!("Scoped IDs: {} (first request) and {} (second request)", r1.id, r3.id);
}
