//! The `Component` marker trait and the handle components are built with.

use crate::container::Container;
use crate::error::Result;
use std::any::Any;
use std::sync::Arc;

/// A concrete type the container knows how to build.
///
/// Implementing the trait makes a type constructible; registering it with
/// [`Registry::component`](crate::Registry::component) makes it eligible for
/// resolution. Most implementations come from `#[derive(Component)]`, where
/// every field tagged `#[inject]` is resolved through the [`Injector`] and
/// every other field falls back to `Default::default()`.
///
/// ```
/// use injector::{Component, Injector, Registry};
/// use std::sync::Arc;
///
/// struct Clock;
///
/// impl Component for Clock {
///   fn construct(_: &Injector<'_>) -> injector::Result<Self> {
///     Ok(Clock)
///   }
/// }
///
/// struct Scheduler {
///   clock: Arc<Clock>,
/// }
///
/// impl Component for Scheduler {
///   fn construct(injector: &Injector<'_>) -> injector::Result<Self> {
///     Ok(Scheduler { clock: injector.inject::<Clock>("clock")? })
///   }
///
///   fn injected_fields() -> &'static [&'static str] {
///     &["clock"]
///   }
/// }
///
/// let mut registry = Registry::new();
/// registry.component::<Clock>().component::<Scheduler>();
/// let container = registry.build();
///
/// let scheduler = container.resolve::<Scheduler>().unwrap();
/// assert!(Arc::ptr_eq(&scheduler.clock, &container.resolve::<Clock>().unwrap()));
/// ```
pub trait Component: Any + Send + Sync + Sized {
  /// Builds a fresh instance, resolving dependencies through `injector`.
  ///
  /// Errors from `injector` should be propagated as they are. Failures of
  /// the constructor itself are reported with
  /// [`Error::construction`](crate::Error::construction).
  fn construct(injector: &Injector<'_>) -> Result<Self>;

  /// Names of the fields filled by injection, for diagnostics.
  fn injected_fields() -> &'static [&'static str] {
    &[]
  }
}

/// The view of the container handed to a component under construction.
pub struct Injector<'a> {
  container: &'a Container,
  component: &'static str,
}

impl<'a> Injector<'a> {
  pub(crate) fn new(container: &'a Container, component: &'static str) -> Self {
    Self {
      container,
      component,
    }
  }

  /// Resolves the dependency stored in `field`.
  pub fn inject<T: ?Sized + Any + Send + Sync>(&self, field: &'static str) -> Result<Arc<T>> {
    tracing::debug!(
      component = self.component,
      field,
      dependency = std::any::type_name::<T>(),
      "injecting field"
    );
    self.container.resolve::<T>().map_err(|err| {
      tracing::debug!(component = self.component, field, error = %err, "field injection failed");
      err
    })
  }

  /// The type name of the component being built.
  pub fn component(&self) -> &'static str {
    self.component
  }

  /// The container performing the resolution.
  pub fn container(&self) -> &'a Container {
    self.container
  }
}

/// A field type the container can fill, the target of `#[inject]`.
///
/// Implemented for `Arc<T>` of every resolvable `T`, so an injected field
/// declares its dependency through its type: `Arc<dyn Reader>` asks for the
/// binding of `Reader`, `Arc<ReaderImpl>` for the component itself.
pub trait Injectable: Sized {
  fn inject(injector: &Injector<'_>, field: &'static str) -> Result<Self>;
}

impl<T: ?Sized + Any + Send + Sync> Injectable for Arc<T> {
  fn inject(injector: &Injector<'_>, field: &'static str) -> Result<Self> {
    injector.inject::<T>(field)
  }
}
