//! # Injector
//!
//! A small dependency-injection container with singleton scope.
//!
//! Components are concrete types implementing [`Component`], usually through
//! `#[derive(Component)]`. Fields tagged `#[inject]` are filled by resolving
//! their declared type recursively; abstractions (trait objects) are mapped
//! to components through a binding table. Every component is built at most
//! once per container and shared as an `Arc`.
//!
//! ## Core Concepts
//!
//! - **Registry**: collects bindings and components at bootstrap.
//! - **Container**: the frozen tables plus the singleton cache, built once
//!   from a registry. Resolution goes through [`Container::resolve`].
//! - **Global Container**: an optional process-wide slot, see [`install`]
//!   and [`global`], used by the [`resolve!`] macro.
//! - **Errors**: a missing binding, an unregistered component, a failing
//!   constructor or a dependency cycle abort resolution with an [`Error`].
//!
//! ## Quick Start
//!
//! ```
//! use injector::{bind, Component, Registry};
//! use std::sync::Arc;
//!
//! trait Reader: Send + Sync {
//!   fn read(&self) -> String;
//! }
//!
//! #[derive(Component)]
//! struct ReaderImpl;
//!
//! impl Reader for ReaderImpl {
//!   fn read(&self) -> String {
//!     "1,apple".to_string()
//!   }
//! }
//!
//! trait Service: Send + Sync {
//!   fn describe(&self) -> String;
//! }
//!
//! #[derive(Component)]
//! struct ServiceImpl {
//!   #[inject]
//!   reader: Arc<dyn Reader>,
//! }
//!
//! impl Service for ServiceImpl {
//!   fn describe(&self) -> String {
//!     format!("read {}", self.reader.read())
//!   }
//! }
//!
//! let mut registry = Registry::new();
//! registry.component::<ReaderImpl>().component::<ServiceImpl>();
//! bind!(registry, Reader => ReaderImpl);
//! bind!(registry, Service => ServiceImpl);
//! let container = registry.build();
//!
//! let service = container.resolve::<dyn Service>().unwrap();
//! assert_eq!(service.describe(), "read 1,apple");
//! assert!(Arc::ptr_eq(&service, &container.resolve::<dyn Service>().unwrap()));
//! ```

mod component;
mod container;
mod core;
mod error;
mod global;
mod macros;
mod registry;

pub use component::{Component, Injectable, Injector};
pub use container::Container;
pub use error::{BoxError, Error, ErrorKind, Result};
pub use global::{global, install};
pub use registry::Registry;

#[cfg(feature = "derive")]
pub use injector_derive::Component;
