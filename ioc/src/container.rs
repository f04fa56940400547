//! The main `Container` struct and its associated methods.

use crate::component::Injector;
use crate::core::{self, Binding, ComponentEntry, Instance, InjectionKey, ResolutionGuard};
use crate::error::{Error, Result};
use crate::registry::Registry;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// The dependency-injection container.
///
/// Holds the frozen binding table and component set taken from a
/// [`Registry`], plus the cache of singleton instances, one per concrete
/// component type. Instances are created lazily on first resolution and
/// live as long as the container.
///
/// The container is `Send + Sync` so it can be shared or installed
/// globally, but it is meant to be wired from a single bootstrap thread:
/// two threads racing on the first resolution of the same type may both
/// construct it, and only the instance stored first is ever handed out.
#[derive(Default)]
pub struct Container {
  bindings: HashMap<TypeId, Binding>,
  components: HashMap<TypeId, ComponentEntry>,
  instances: DashMap<TypeId, Instance>,
}

impl Container {
  /// Creates a new, empty `Container`. Every resolution against it fails.
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn from_registry(registry: Registry) -> Self {
    Self {
      bindings: registry.bindings,
      components: registry.components,
      instances: DashMap::new(),
    }
  }

  // --- PRIVATE HELPERS ---

  /// Returns the singleton of the component identified by `key`, building
  /// and caching it first if needed.
  fn instance_of(&self, key: &InjectionKey) -> Result<Instance> {
    let entry = self
      .components
      .get(&key.type_id)
      .ok_or(Error::Configuration {
        type_name: key.type_name,
      })?;

    if let Some(cached) = self.instances.get(&key.type_id) {
      tracing::trace!(component = key.type_name, "reusing cached instance");
      return entry.share(&**cached);
    }

    // Dropped once this component is built, or as soon as building fails.
    let _guard = ResolutionGuard::enter(key.clone())?;

    tracing::debug!(
      component = key.type_name,
      injected = ?entry.injected_fields,
      "constructing component"
    );
    let instance = entry.construct(&Injector::new(self, key.type_name))?;

    let stored = self.instances.entry(key.type_id).or_insert(instance);
    entry.share(&**stored)
  }

  // --- PUBLIC API ---

  /// Resolves `T` to its fully wired singleton.
  ///
  /// `T` may be an abstraction (usually `dyn Trait`) with a binding, in
  /// which case the bound component is resolved and upcast, or a concrete
  /// component type, which resolves to itself.
  ///
  /// # Errors
  ///
  /// - [`Error::Resolution`] if `T` is abstract and has no binding.
  /// - [`Error::Configuration`] if the concrete type, or any type reached
  ///   while injecting its fields, is not a registered component.
  /// - [`Error::Construction`] if a constructor fails.
  /// - [`Error::CircularDependency`] if a type depends on itself.
  pub fn resolve<T: ?Sized + Any + Send + Sync>(&self) -> Result<Arc<T>> {
    let requested = InjectionKey::of::<T>();

    let boxed = match self.bindings.get(&requested.type_id) {
      Some(binding) => {
        let instance = self.instance_of(&binding.target)?;
        binding.upcast(&*instance)?
      }
      None if core::is_abstract::<T>() => {
        return Err(Error::Resolution {
          abstraction: requested.type_name,
        })
      }
      None => self.instance_of(&requested)?,
    };

    boxed
      .downcast::<Arc<T>>()
      .map(|shared| *shared)
      .map_err(|_| Error::TypeMismatch {
        type_name: requested.type_name,
      })
  }

  /// Resolves `T`, discarding the reason if that fails.
  pub fn get<T: ?Sized + Any + Send + Sync>(&self) -> Option<Arc<T>> {
    self.resolve::<T>().ok()
  }

  /// Whether an instance of the concrete type `C` has been built already.
  pub fn is_cached<C: ?Sized + Any>(&self) -> bool {
    self.instances.contains_key(&TypeId::of::<C>())
  }

  /// Number of singletons built so far.
  pub fn cached_count(&self) -> usize {
    self.instances.len()
  }

  pub fn has_binding<I: ?Sized + Any>(&self) -> bool {
    self.bindings.contains_key(&TypeId::of::<I>())
  }

  pub fn binding_count(&self) -> usize {
    self.bindings.len()
  }

  pub fn component_count(&self) -> usize {
    self.components.len()
  }
}
