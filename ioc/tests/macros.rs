// ioc/tests/macros.rs

//! Tests for the global container and the `bind!` / `resolve!` macros.
//!
//! The global slot can be filled once per process, so every test goes through
//! `setup`, which installs the same container the first time it runs.

use injector::{bind, global, install, resolve, Component, Container, ErrorKind, Injector, Registry};
use serial_test::serial;
use std::sync::{Arc, Once};

// --- Test Fixtures ---

struct MacroTestService {
  value: i32,
}

impl Component for MacroTestService {
  fn construct(_: &Injector<'_>) -> injector::Result<Self> {
    Ok(MacroTestService { value: 42 })
  }
}

trait MacroTestTrait: Send + Sync {
  fn value(&self) -> i32;
}

impl MacroTestTrait for MacroTestService {
  fn value(&self) -> i32 {
    self.value
  }
}

trait UnboundTrait: Send + Sync {}
struct UnregisteredService;

static SETUP: Once = Once::new();

fn setup() -> &'static Container {
  SETUP.call_once(|| {
    let mut registry = Registry::new();
    registry.component::<MacroTestService>();
    bind!(registry, MacroTestTrait => MacroTestService);
    install(registry.build()).unwrap();
  });
  global()
}

// --- Global Macro Tests ---

#[test]
#[serial]
fn test_resolve_concrete_from_global() {
  setup();

  let first = resolve!(MacroTestService);
  let second = resolve!(MacroTestService);

  assert_eq!(first.value, 42);
  assert!(Arc::ptr_eq(&first, &second));
}

#[test]
#[serial]
fn test_resolve_trait_from_global() {
  setup();

  let service = resolve!(trait MacroTestTrait);

  assert_eq!(service.value(), 42);
}

#[test]
#[serial]
fn test_second_install_is_rejected() {
  setup();

  let err = install(Registry::new().build()).err().unwrap();

  assert_eq!(err.kind(), ErrorKind::AlreadyInstalled);
  // The originally installed container stays in place.
  assert_eq!(global().binding_count(), 1);
}

#[test]
#[serial]
fn test_global_reports_errors_without_macros() {
  let container = setup();

  assert_eq!(
    container.resolve::<dyn UnboundTrait>().err().map(|e| e.kind()),
    Some(ErrorKind::Resolution)
  );
  assert_eq!(
    container.resolve::<UnregisteredService>().err().map(|e| e.kind()),
    Some(ErrorKind::Configuration)
  );
}

#[test]
#[serial]
#[should_panic(expected = "Failed to resolve required service")]
fn test_resolve_panics_on_missing_concrete_service() {
  setup();
  resolve!(UnregisteredService);
}

#[test]
#[serial]
#[should_panic(expected = "Failed to resolve required trait service")]
fn test_resolve_panics_on_missing_trait_service() {
  setup();
  resolve!(trait UnboundTrait);
}

#[test]
fn test_bind_macro_registers_a_single_entry() {
  let mut registry = Registry::new();
  bind!(registry, MacroTestTrait => MacroTestService);
  bind!(registry, MacroTestTrait => MacroTestService);

  assert_eq!(registry.binding_count(), 1);
  assert!(registry.has_binding::<dyn MacroTestTrait>());
}
