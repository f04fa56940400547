//! A product catalog loaded from CSV files.
//!
//! The three services are wired by the `injector` container:
//! [`ProductService`] depends on a [`FileReaderService`] and a
//! [`ProductParser`], and [`bindings`] maps each trait to its single
//! implementation.
//!
//! ```no_run
//! use product_catalog::{bindings, ProductService};
//! use std::path::Path;
//!
//! let container = bindings().build();
//! let service = container.resolve::<dyn ProductService>()?;
//! let products = service.get_all_from_file(Path::new("products.csv"))?;
//! # Ok::<(), product_catalog::CatalogError>(())
//! ```

mod error;
mod model;
mod parser;
mod reader;
mod service;

pub use error::CatalogError;
pub use model::Product;
pub use parser::{ProductParser, ProductParserImpl};
pub use reader::{FileReaderService, FileReaderServiceImpl};
pub use service::{ProductService, ProductServiceImpl};

use injector::{bind, Registry};

/// The fixed binding table of the catalog: one implementation per service.
pub fn bindings() -> Registry {
  let mut registry = Registry::new();
  registry
    .component::<FileReaderServiceImpl>()
    .component::<ProductParserImpl>()
    .component::<ProductServiceImpl>();
  bind!(registry, FileReaderService => FileReaderServiceImpl);
  bind!(registry, ProductParser => ProductParserImpl);
  bind!(registry, ProductService => ProductServiceImpl);
  registry
}
