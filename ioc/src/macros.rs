//! Public macros for binding abstractions and resolving services.

/// Binds a trait to the component implementing it on a [`Registry`].
///
/// Expands to [`Registry::bind`] with the unsizing coercion from
/// `Arc<Impl>` to `Arc<dyn Trait>` written out.
///
/// ```
/// use injector::{bind, Component, Injector, Registry};
///
/// trait Reader: Send + Sync {}
///
/// struct ReaderImpl;
/// impl Reader for ReaderImpl {}
/// impl Component for ReaderImpl {
///   fn construct(_: &Injector<'_>) -> injector::Result<Self> {
///     Ok(ReaderImpl)
///   }
/// }
///
/// let mut registry = Registry::new();
/// bind!(registry, Reader => ReaderImpl);
/// assert!(registry.has_binding::<dyn Reader>());
/// ```
///
/// [`Registry`]: crate::Registry
/// [`Registry::bind`]: crate::Registry::bind
#[macro_export]
macro_rules! bind {
  ($registry:expr, $abstraction:ident => $component:ty) => {
    $registry.bind::<dyn $abstraction, $component>(
      |component: ::std::sync::Arc<$component>| -> ::std::sync::Arc<dyn $abstraction> { component },
    )
  };
}

/// Resolves a service from the global container.
///
/// # Panics
///
/// This macro panics if the service cannot be resolved, with the resolution
/// error in the message. For a non-panicking version, use
/// `global().resolve::<T>()` directly.
///
/// # Examples
///
/// ```
/// use injector::{bind, install, resolve, Component, Injector, Registry};
///
/// trait Greeter: Send + Sync {
///   fn greet(&self) -> String;
/// }
///
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter {
///   fn greet(&self) -> String {
///     "Hello!".to_string()
///   }
/// }
/// impl Component for EnglishGreeter {
///   fn construct(_: &Injector<'_>) -> injector::Result<Self> {
///     Ok(EnglishGreeter)
///   }
/// }
///
/// let mut registry = Registry::new();
/// registry.component::<EnglishGreeter>();
/// bind!(registry, Greeter => EnglishGreeter);
/// install(registry.build()).unwrap();
///
/// let greeter = resolve!(trait Greeter);
/// assert_eq!(greeter.greet(), "Hello!");
/// let same = resolve!(EnglishGreeter);
/// assert_eq!(same.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
  // Arm for resolving a trait object: resolve!(trait MyTrait)
  (trait $trait_ident:ident) => {
    match $crate::global().resolve::<dyn $trait_ident>() {
      ::std::result::Result::Ok(service) => service,
      ::std::result::Result::Err(err) => panic!(
        "Failed to resolve required trait service {}: {}",
        ::std::any::type_name::<dyn $trait_ident>(),
        err
      ),
    }
  };

  // Arm for resolving a concrete type: resolve!(MyService)
  ($type:ty) => {
    match $crate::global().resolve::<$type>() {
      ::std::result::Result::Ok(service) => service,
      ::std::result::Result::Err(err) => panic!(
        "Failed to resolve required service {}: {}",
        ::std::any::type_name::<$type>(),
        err
      ),
    }
  };
}
