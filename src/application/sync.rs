//! Sync use case: rebuild the content from an editor form snapshot and save it

use crate::domain::{Content, EditorForm};
use crate::error::{PurpleLineError, Result};
use crate::infrastructure::{ContentRepository, FileSystemRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse an editor form snapshot
pub fn read_form(json: &str) -> Result<EditorForm> {
    serde_json::from_str(json)
        .map_err(|e| PurpleLineError::Content(format!("Invalid editor form: {}", e)))
}

/// Resync the saved content from the form at `form_path` and save the result.
///
/// Nothing is written when the form cannot be read or parsed.
pub fn sync_from_file(repository: &FileSystemRepository, form_path: &Path) -> Result<Content> {
    let form = read_form(&fs::read_to_string(form_path)?)?;
    sync(repository, &form)
}

pub fn sync(repository: &FileSystemRepository, form: &EditorForm) -> Result<Content> {
    let mut content = repository.load_content()?;
    content.resync(form);
    repository.save_content(&content)?;

    info!(items = form.items.len(), "content resynced from editor form");
    Ok(content)
}
