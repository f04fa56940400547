use clap::Parser;
use product_catalog::{bindings, CatalogError, ProductService};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Print the products stored in a CSV file.
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about)]
struct Args {
  /// CSV file with `id,title,price,category,description` lines.
  #[arg(short, long)]
  file: PathBuf,

  /// Only list products of this category.
  #[arg(short, long)]
  category: Option<String>,
}

fn run(args: &Args) -> Result<(), CatalogError> {
  let container = bindings().build();
  let service = container.resolve::<dyn ProductService>()?;

  let products = match &args.category {
    Some(category) => service.get_all_by_category(&args.file, category)?,
    None => service.get_all_from_file(&args.file)?,
  };

  for product in &products {
    println!(
      "{:>5}  {:<24} {:>10.2}  {:<12} {}",
      product.id, product.title, product.price, product.category, product.description
    );
  }
  Ok(())
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::error!(error = %err, "catalog failed");
      ExitCode::FAILURE
    }
  }
}
