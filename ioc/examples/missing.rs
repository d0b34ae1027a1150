use request_bag_ioc::{resolve_from, Container, ResolveError};
use std::panic;

struct UnregisteredService;

fn main() {
  let container = Container::new();

  // --- Using the panicking `resolve_from!` macro ---
  println!("Attempting to resolve a service that was never registered...");
  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    let _service = resolve_from!(&container, UnregisteredService);
  }));
  assert!(result.is_err(), "resolve_from! should have panicked.");
  println!("Caught the expected panic from resolve_from!.");

  // --- Using the fallible `resolve()` method ---
  println!("\nNow resolving with `resolve()`...");
  match container.resolve::<UnregisteredService>(None) {
    Ok(_) => panic!("Should not have found the service!"),
    Err(ResolveError::NotRegistered { type_name, .. }) => {
      println!("Correctly received NotRegistered for {}", type_name)
    }
    Err(other) => panic!("Unexpected error: {}", other),
  }
}
