use crate::catalog::TemplateCatalog;
use crate::error::{Result, TemplarError};
use crate::model::Category;
use std::path::PathBuf;

/// Maps a catalog name to its source path on disk. Never touches the filesystem
/// beyond existence checks.
pub fn run(catalog: &TemplateCatalog, category: Category, name: &str) -> Result<PathBuf> {
    if name.trim().is_empty() {
        return Err(TemplarError::InvalidName);
    }

    let entry = catalog
        .get(category, name)
        .ok_or_else(|| TemplarError::NotFound {
            category,
            name: name.to_string(),
        })?;

    let source = catalog.source_path(entry);
    if !catalog.is_present(entry) {
        return Err(TemplarError::NotInitialized(source));
    }

    tracing::debug!(%category, name, source = %source.display(), "resolved template");
    Ok(source)
}
