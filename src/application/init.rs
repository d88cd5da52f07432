//! Initialize workspace use case

use crate::domain::Content;
use crate::error::Result;
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new workspace at the specified path.
///
/// Writes a default config and an empty content document with the standard sections.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::default())?;
    repo.save_content(&Content::standard())?;

    info!(path = %path.display(), "workspace initialized");
    Ok(repo)
}
