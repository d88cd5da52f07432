//! File system repository

use crate::domain::Content;
use crate::error::{PurpleLineError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Live content document, relative to the workspace root
pub const CONTENT_FILE: &str = "purpleline.json";

/// Copy of the document taken just before the last reset
pub const BACKUP_FILE: &str = "last-purpleline.json";

/// Abstract repository for workspace operations
pub trait ContentRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .purpleline/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .purpleline/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .purpleline directory exists
    fn is_initialized(&self) -> bool;

    /// Create .purpleline directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the live content document
    fn load_content(&self) -> Result<Content>;

    /// Replace the live content document
    fn save_content(&self, content: &Content) -> Result<()>;

    /// Overwrite the single reset backup
    fn save_backup(&self, content: &Content) -> Result<()>;
}

/// File system implementation of ContentRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks PURPLELINE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("PURPLELINE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(PurpleLineError::Config(format!(
                    "PURPLELINE_ROOT is set to '{}' but no .purpleline directory found. \
                    Run 'purpleline init' in that directory or unset PURPLELINE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(PurpleLineError::NotWorkspace(start.to_path_buf())),
            }
        }
    }

    pub fn content_path(&self) -> PathBuf {
        self.root.join(CONTENT_FILE)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.root.join(BACKUP_FILE)
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    /// Write through a temporary file in the same directory, then rename into place.
    ///
    /// A failed write leaves whatever was at `path` untouched.
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let mut file = NamedTempFile::new_in(&self.root)?;
        file.write_all(contents.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| PurpleLineError::Io(e.error))?;
        Ok(())
    }
}

impl ContentRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(PurpleLineError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&config_dir)?;
        Ok(())
    }

    fn load_content(&self) -> Result<Content> {
        let path = self.content_path();

        if !path.exists() {
            debug!(path = %path.display(), "no content document yet, starting empty");
            return Ok(Content::standard());
        }

        let json = fs::read_to_string(&path)?;
        Content::from_json(&json)
    }

    fn save_content(&self, content: &Content) -> Result<()> {
        let path = self.content_path();
        self.write_atomic(&path, &content.to_json_pretty()?)?;
        info!(path = %path.display(), "content saved");
        Ok(())
    }

    fn save_backup(&self, content: &Content) -> Result<()> {
        let path = self.backup_path();
        self.write_atomic(&path, &content.to_json_pretty()?)?;
        info!(path = %path.display(), "backup written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, Rank};
    use tempfile::TempDir;

    fn initialized() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        (temp, repo)
    }

    #[test]
    fn test_initialize_creates_config_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".purpleline").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, repo) = initialized();
        let result = repo.initialize();
        assert!(matches!(result, Err(PurpleLineError::Config(_))));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _repo) = initialized();
        let nested = temp.path().join("drafts").join("july");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_from_outside_workspace() {
        let temp = TempDir::new().unwrap();
        let result = FileSystemRepository::discover_from(temp.path());
        assert!(matches!(result, Err(PurpleLineError::NotWorkspace(_))));
    }

    #[test]
    fn test_missing_content_loads_standard() {
        let (_temp, repo) = initialized();
        assert_eq!(repo.load_content().unwrap(), Content::standard());
    }

    #[test]
    fn test_save_and_load_content() {
        let (temp, repo) = initialized();
        let mut content = Content::standard();
        content.metadata.subject = "Summer issue".to_string();
        content.sections[0].items.push(Item {
            headline: "Hello".to_string(),
            domestic: Rank::new(1),
            ..Item::default()
        });

        repo.save_content(&content).unwrap();
        assert!(temp.path().join("purpleline.json").exists());
        assert_eq!(repo.load_content().unwrap(), content);
    }

    #[test]
    fn test_save_leaves_no_temporary_files() {
        let (temp, repo) = initialized();
        repo.save_content(&Content::standard()).unwrap();
        repo.save_content(&Content::standard()).unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2, "{:?}", names);
        assert!(names.contains(&".purpleline".to_string()));
        assert!(names.contains(&"purpleline.json".to_string()));
    }

    #[test]
    fn test_backup_keeps_only_latest() {
        let (temp, repo) = initialized();
        let mut first = Content::standard();
        first.metadata.subject = "first".to_string();
        let mut second = Content::standard();
        second.metadata.subject = "second".to_string();

        repo.save_backup(&first).unwrap();
        repo.save_backup(&second).unwrap();

        let json = fs::read_to_string(temp.path().join("last-purpleline.json")).unwrap();
        assert_eq!(Content::from_json(&json).unwrap().metadata.subject, "second");
    }

    #[test]
    fn test_corrupt_content_is_reported() {
        let (temp, repo) = initialized();
        fs::write(temp.path().join("purpleline.json"), "{\"sections\": [").unwrap();
        assert!(matches!(
            repo.load_content(),
            Err(PurpleLineError::Content(_))
        ));
    }
}
