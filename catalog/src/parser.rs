use crate::error::CatalogError;
use crate::model::Product;
use injector::Component;

const FIELDS: usize = 5;

/// Turns one CSV line into a [`Product`].
pub trait ProductParser: Send + Sync {
  /// Parses `id,title,price,category,description`.
  ///
  /// The description is the last column and may itself contain commas.
  fn parse(&self, line: &str) -> Result<Product, CatalogError>;
}

#[derive(Component)]
pub struct ProductParserImpl;

impl ProductParser for ProductParserImpl {
  fn parse(&self, line: &str) -> Result<Product, CatalogError> {
    let columns: Vec<&str> = line.splitn(FIELDS, ',').map(str::trim).collect();
    let &[id, title, price, category, description] = columns.as_slice() else {
      return Err(CatalogError::parse(
        line,
        format!("expected {FIELDS} columns, found {}", columns.len()),
      ));
    };

    let id = id
      .parse::<u64>()
      .map_err(|e| CatalogError::parse(line, format!("bad id '{id}': {e}")))?;
    let price = price
      .parse::<f64>()
      .map_err(|e| CatalogError::parse(line, format!("bad price '{price}': {e}")))?;
    if !price.is_finite() || price < 0.0 {
      return Err(CatalogError::parse(line, format!("price out of range: {price}")));
    }

    Ok(Product {
      id,
      title: title.to_string(),
      price,
      category: category.to_string(),
      description: description.to_string(),
    })
  }
}
