use crate::error::CatalogError;
use injector::Component;
use std::fs;
use std::path::Path;

/// Reads raw lines out of a product file.
pub trait FileReaderService: Send + Sync {
  /// Returns every non-blank line of the file, trimmed.
  fn read_file(&self, path: &Path) -> Result<Vec<String>, CatalogError>;
}

#[derive(Component)]
pub struct FileReaderServiceImpl;

impl FileReaderService for FileReaderServiceImpl {
  fn read_file(&self, path: &Path) -> Result<Vec<String>, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    let lines: Vec<String> = contents
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .map(str::to_string)
      .collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "read product file");
    Ok(lines)
  }
}
