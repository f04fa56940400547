use crate::error::CatalogError;
use crate::model::Product;
use crate::parser::ProductParser;
use crate::reader::FileReaderService;
use injector::Component;
use std::path::Path;
use std::sync::Arc;

/// Loads the catalog through the reader and the parser.
pub trait ProductService: Send + Sync {
  /// Reads and parses every product in the file. A header line whose first
  /// column is `id` is skipped.
  fn get_all_from_file(&self, path: &Path) -> Result<Vec<Product>, CatalogError>;

  /// The products of one category, compared case-insensitively.
  fn get_all_by_category(&self, path: &Path, category: &str) -> Result<Vec<Product>, CatalogError> {
    let mut products = self.get_all_from_file(path)?;
    products.retain(|product| product.category.eq_ignore_ascii_case(category));
    Ok(products)
  }
}

#[derive(Component)]
pub struct ProductServiceImpl {
  #[inject]
  file_reader: Arc<dyn FileReaderService>,
  #[inject]
  product_parser: Arc<dyn ProductParser>,
}

impl ProductService for ProductServiceImpl {
  fn get_all_from_file(&self, path: &Path) -> Result<Vec<Product>, CatalogError> {
    let lines = self.file_reader.read_file(path)?;
    let products = lines
      .iter()
      .filter(|line| !is_header(line))
      .map(|line| self.product_parser.parse(line))
      .collect::<Result<Vec<_>, _>>()?;
    tracing::info!(path = %path.display(), products = products.len(), "loaded catalog");
    Ok(products)
  }
}

fn is_header(line: &str) -> bool {
  line
    .split(',')
    .next()
    .is_some_and(|first| first.trim().eq_ignore_ascii_case("id"))
}
