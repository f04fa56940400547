/// One entry of the product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
  pub id: u64,
  pub title: String,
  pub price: f64,
  pub category: String,
  pub description: String,
}
