use injector::{global, resolve, Component, Registry};
use std::panic;

#[derive(Component)]
struct UnregisteredService;

trait UnboundTrait: Send + Sync {}

fn main() {
  // Nothing is installed, so the global container is empty.
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(|| {
    // This line will panic!
    let _service = resolve!(UnregisteredService);
  });

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the fallible `resolve()` method ---
  println!("\nNow, resolving through the fallible `resolve()` method...");

  match global().resolve::<UnregisteredService>() {
    Ok(_) => panic!("Should not have found the service!"),
    Err(err) => println!("Correctly received an error: {err}"),
  }
  match global().resolve::<dyn UnboundTrait>() {
    Ok(_) => panic!("Should not have found a binding!"),
    Err(err) => println!("Correctly received an error: {err}"),
  }

  // A private container is no different.
  let container = Registry::new().build();
  assert!(container.get::<UnregisteredService>().is_none());
}
