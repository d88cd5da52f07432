//! Reset use case: back up the current issue and start a blank one

use crate::domain::Content;
use crate::error::Result;
use crate::infrastructure::{ContentRepository, FileSystemRepository};
use tracing::info;

/// Copy the current content to the backup, then save a cleared document.
///
/// The backup is written first, so a failure never loses the current issue.
pub fn reset(repository: &FileSystemRepository) -> Result<Content> {
    let current = repository.load_content()?;
    repository.save_backup(&current)?;

    let cleared = current.cleared();
    repository.save_content(&cleared)?;

    info!("content reset");
    Ok(cleared)
}
