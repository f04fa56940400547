//! The mutable builder that collects bindings and components.

use crate::component::Component;
use crate::container::Container;
use crate::core::{Binding, ComponentEntry};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Collects the binding table and the set of components before a
/// [`Container`] is built.
///
/// Registration takes `&mut self` and is finished with [`Registry::build`],
/// after which the tables can no longer change.
#[derive(Default)]
pub struct Registry {
  pub(crate) bindings: HashMap<TypeId, Binding>,
  pub(crate) components: HashMap<TypeId, ComponentEntry>,
}

impl Registry {
  /// Creates a new, empty `Registry`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Marks `C` as eligible for container-managed construction.
  ///
  /// Registering the same type again has no effect.
  pub fn component<C: Component>(&mut self) -> &mut Self {
    self
      .components
      .entry(TypeId::of::<C>())
      .or_insert_with(ComponentEntry::new::<C>);
    self
  }

  /// Binds the abstraction `I` to the component `C`.
  ///
  /// `upcast` turns the shared component into the abstraction; for a trait
  /// object this is just the unsizing coercion, which the [`bind!`] macro
  /// writes out. Each abstraction has exactly one entry: binding it again
  /// replaces the previous target.
  ///
  /// [`bind!`]: crate::bind
  pub fn bind<I, C>(&mut self, upcast: impl Fn(Arc<C>) -> Arc<I> + Send + Sync + 'static) -> &mut Self
  where
    I: ?Sized + Any + Send + Sync,
    C: Component,
  {
    let binding = Binding::new::<I, C>(upcast);
    if let Some(previous) = self.bindings.get(&binding.abstraction.type_id) {
      if previous.target != binding.target {
        tracing::warn!(
          abstraction = binding.abstraction.type_name,
          previous = previous.target.type_name,
          target = binding.target.type_name,
          "replacing existing binding"
        );
      }
    }
    self.bindings.insert(binding.abstraction.type_id, binding);
    self
  }

  /// Whether the abstraction `I` has a binding.
  pub fn has_binding<I: ?Sized + Any>(&self) -> bool {
    self.bindings.contains_key(&TypeId::of::<I>())
  }

  /// Whether `C` was registered as a component.
  pub fn has_component<C: ?Sized + Any>(&self) -> bool {
    self.components.contains_key(&TypeId::of::<C>())
  }

  pub fn binding_count(&self) -> usize {
    self.bindings.len()
  }

  pub fn component_count(&self) -> usize {
    self.components.len()
  }

  /// Freezes the tables into a [`Container`].
  pub fn build(self) -> Container {
    tracing::debug!(
      bindings = self.bindings.len(),
      components = self.components.len(),
      "building container"
    );
    Container::from_registry(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::component::Injector;
  use crate::error::Result;

  trait Greeter: Send + Sync {}

  struct English;
  impl Greeter for English {}
  impl Component for English {
    fn construct(_: &Injector<'_>) -> Result<Self> {
      Ok(English)
    }
  }

  struct German;
  impl Greeter for German {}
  impl Component for German {
    fn construct(_: &Injector<'_>) -> Result<Self> {
      Ok(German)
    }
  }

  #[test]
  fn rebinding_keeps_a_single_entry_per_abstraction() {
    let mut registry = Registry::new();
    registry.bind::<dyn Greeter, English>(|c| c);
    registry.bind::<dyn Greeter, German>(|c| c);

    assert_eq!(registry.binding_count(), 1);
    let binding = &registry.bindings[&TypeId::of::<dyn Greeter>()];
    assert_eq!(binding.target.type_id, TypeId::of::<German>());
  }

  #[test]
  fn component_registration_is_idempotent() {
    let mut registry = Registry::new();
    registry.component::<English>().component::<English>();

    assert_eq!(registry.component_count(), 1);
    assert!(registry.has_component::<English>());
    assert!(!registry.has_component::<German>());
  }
}
