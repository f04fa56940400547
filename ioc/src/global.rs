//! The process-wide container slot and its access functions.

use crate::container::Container;
use crate::error::{Error, Result};
use once_cell::sync::OnceCell;

// The one and only global container. Filled by `install`, or with an empty
// container on the first access through `global` if nothing was installed.
static GLOBAL_CONTAINER: OnceCell<Container> = OnceCell::new();

/// Installs `container` as the global container.
///
/// This can succeed once per process, and only before [`global`] was first
/// called.
///
/// # Examples
///
/// ```
/// use injector::{global, install, Registry};
///
/// let container = install(Registry::new().build()).unwrap();
/// assert!(std::ptr::eq(container, global()));
/// assert!(install(Registry::new().build()).is_err());
/// ```
pub fn install(container: Container) -> Result<&'static Container> {
  let mut container = Some(container);
  let installed = GLOBAL_CONTAINER.get_or_init(|| {
    tracing::debug!("installing global container");
    container.take().unwrap_or_default()
  });
  match container {
    None => Ok(installed),
    Some(_) => Err(Error::AlreadyInstalled),
  }
}

/// Provides a reference to the global container.
///
/// If nothing was installed yet, an empty container takes the slot and every
/// later [`install`] fails.
pub fn global() -> &'static Container {
  GLOBAL_CONTAINER.get_or_init(Container::default)
}
