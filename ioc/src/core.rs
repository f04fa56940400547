//! Core, non-public data structures for the container.

use crate::component::{Component, Injector};
use crate::error::{Error, Result};
use std::any::{self, Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::sync::Arc;

/// A type-erased `Arc<C>` as stored in the instance cache.
pub(crate) type Instance = Box<dyn Any + Send + Sync>;

thread_local! {
  // The chain of concrete types currently being constructed on this thread,
  // outermost first. Re-entering a type already on the chain is a cycle.
  static RESOLVING_STACK: RefCell<Vec<InjectionKey>> = RefCell::new(Vec::new());
}

/// An RAII guard that tracks a type on the resolution chain.
///
/// Entering a type that is already on the chain fails with
/// [`Error::CircularDependency`] instead of recursing forever. Dropping the
/// guard pops the type again, also when construction bails out early.
pub(crate) struct ResolutionGuard {
  key: InjectionKey,
}

impl ResolutionGuard {
  pub(crate) fn enter(key: InjectionKey) -> Result<Self> {
    RESOLVING_STACK.with(|stack| {
      let mut stack = stack.borrow_mut();
      if let Some(start) = stack.iter().position(|k| *k == key) {
        let path = stack[start..]
          .iter()
          .chain(std::iter::once(&key))
          .map(|k| k.type_name)
          .collect::<Vec<_>>()
          .join(" -> ");
        return Err(Error::CircularDependency { path });
      }
      stack.push(key.clone());
      Ok(())
    })?;
    Ok(Self { key })
  }
}

impl Drop for ResolutionGuard {
  fn drop(&mut self) {
    RESOLVING_STACK.with(|stack| {
      let mut stack = stack.borrow_mut();
      if let Some(pos) = stack.iter().rposition(|k| *k == self.key) {
        stack.remove(pos);
      }
    });
  }
}

/// Identity of a type as seen by the container.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct InjectionKey {
  pub(crate) type_id: TypeId,
  pub(crate) type_name: &'static str,
}

impl InjectionKey {
  pub(crate) fn of<T: ?Sized + Any>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      type_name: any::type_name::<T>(),
    }
  }
}

impl fmt::Debug for InjectionKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key({})", self.type_name)
  }
}

/// Whether `T` can only be reached through a binding.
///
/// Pointers to unsized types (trait objects, slices) carry metadata and are
/// wider than a thin pointer, which is how abstractions are told apart from
/// concrete types without any registration.
pub(crate) fn is_abstract<T: ?Sized>() -> bool {
  mem::size_of::<*const T>() != mem::size_of::<*const ()>()
}

type Factory = Box<dyn Fn(&Injector<'_>) -> Result<Instance> + Send + Sync>;
type Share = fn(&(dyn Any + Send + Sync)) -> Option<Instance>;
type Upcast = Box<dyn Fn(&(dyn Any + Send + Sync)) -> Option<Instance> + Send + Sync>;

/// A concrete type registered as a component.
pub(crate) struct ComponentEntry {
  pub(crate) key: InjectionKey,
  pub(crate) injected_fields: &'static [&'static str],
  factory: Factory,
  share: Share,
}

impl ComponentEntry {
  pub(crate) fn new<C: Component>() -> Self {
    Self {
      key: InjectionKey::of::<C>(),
      injected_fields: C::injected_fields(),
      factory: Box::new(|injector: &Injector<'_>| {
        C::construct(injector).map(|component| Box::new(Arc::new(component)) as Instance)
      }),
      share: |instance: &(dyn Any + Send + Sync)| {
        instance
          .downcast_ref::<Arc<C>>()
          .map(|component| Box::new(Arc::clone(component)) as Instance)
      },
    }
  }

  pub(crate) fn construct(&self, injector: &Injector<'_>) -> Result<Instance> {
    (self.factory)(injector)
  }

  /// Clones the cached `Arc<C>` out of its type-erased slot.
  pub(crate) fn share(&self, instance: &(dyn Any + Send + Sync)) -> Result<Instance> {
    (self.share)(instance).ok_or(Error::TypeMismatch {
      type_name: self.key.type_name,
    })
  }
}

/// An abstraction bound to the concrete component that implements it.
pub(crate) struct Binding {
  pub(crate) abstraction: InjectionKey,
  pub(crate) target: InjectionKey,
  upcast: Upcast,
}

impl Binding {
  pub(crate) fn new<I, C>(upcast: impl Fn(Arc<C>) -> Arc<I> + Send + Sync + 'static) -> Self
  where
    I: ?Sized + Any + Send + Sync,
    C: Component,
  {
    Self {
      abstraction: InjectionKey::of::<I>(),
      target: InjectionKey::of::<C>(),
      upcast: Box::new(move |instance: &(dyn Any + Send + Sync)| {
        instance
          .downcast_ref::<Arc<C>>()
          .map(|component| Box::new(upcast(Arc::clone(component))) as Instance)
      }),
    }
  }

  /// Turns a cached `Arc<C>` into a boxed `Arc<I>`.
  pub(crate) fn upcast(&self, instance: &(dyn Any + Send + Sync)) -> Result<Instance> {
    (self.upcast)(instance).ok_or(Error::TypeMismatch {
      type_name: self.target.type_name,
    })
  }
}
