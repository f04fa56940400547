//! Errors raised while resolving components.

use std::any;
use std::error::Error as StdError;

/// A boxed error returned by a failing component constructor.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can abort a resolution.
///
/// None of these are recoverable at the point they are raised: the chain of
/// resolutions that led to them is abandoned and nothing is cached for the
/// types that were being built.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The requested abstraction has no implementation bound to it.
  #[error("no implementation registered for {abstraction}")]
  Resolution { abstraction: &'static str },

  /// The concrete type was never registered as a component.
  #[error("injection failed, missing component registration on {type_name}")]
  Configuration { type_name: &'static str },

  /// The component's constructor returned an error.
  #[error("can't create new instance of {type_name}: {source}")]
  Construction {
    type_name: &'static str,
    #[source]
    source: BoxError,
  },

  /// A type depends on itself, directly or through other components.
  #[error("circular dependency detected: {path}")]
  CircularDependency { path: String },

  /// A cached instance did not have the type its registration promised.
  #[error("cached instance for {type_name} has an unexpected type")]
  TypeMismatch { type_name: &'static str },

  /// `install` was called after the global container was already set.
  #[error("the global container is already installed")]
  AlreadyInstalled,
}

/// The discriminant of an [`Error`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  Resolution,
  Configuration,
  Construction,
  CircularDependency,
  TypeMismatch,
  AlreadyInstalled,
}

impl Error {
  /// Wraps a constructor failure of component `C`.
  pub fn construction<C: ?Sized>(source: impl Into<BoxError>) -> Self {
    Error::Construction {
      type_name: any::type_name::<C>(),
      source: source.into(),
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::Resolution { .. } => ErrorKind::Resolution,
      Error::Configuration { .. } => ErrorKind::Configuration,
      Error::Construction { .. } => ErrorKind::Construction,
      Error::CircularDependency { .. } => ErrorKind::CircularDependency,
      Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
      Error::AlreadyInstalled => ErrorKind::AlreadyInstalled,
    }
  }
}
