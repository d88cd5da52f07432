//! Error types for purpleline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the purpleline application
#[derive(Debug, Error)]
pub enum PurpleLineError {
    #[error("Not a purpleline workspace: {0}")]
    NotWorkspace(PathBuf),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Invalid content document: {0}")]
    Content(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Access list error: {0}")]
    Access(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Telemetry error: {0}")]
    Telemetry(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PurpleLineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PurpleLineError::NotWorkspace(_) => 2,
            PurpleLineError::InvalidTarget(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PurpleLineError::NotWorkspace(path) => {
                format!(
                    "Not a purpleline workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'purpleline init' in this directory to create a workspace\n\
                    • Navigate to an existing purpleline workspace\n\
                    • Set PURPLELINE_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            PurpleLineError::InvalidTarget(target) => {
                format!(
                    "Invalid target: '{}'\n\n\
                    Valid targets:\n\
                    • domestic       email for the US list\n\
                    • international  email for the international list\n\
                    • web            fragment for the web archive\n\n\
                    Example:\n\
                    purpleline render domestic --output domestic.html",
                    target
                )
            }
            PurpleLineError::Content(msg) => {
                format!(
                    "Invalid content document: {}\n\n\
                    Suggestions:\n\
                    • Check purpleline.json for a stray comma or quote\n\
                    • Restore the previous version from last-purpleline.json",
                    msg
                )
            }
            PurpleLineError::Access(msg) => {
                format!(
                    "{}\n\n\
                    Ranges must look like 129.105.0.0/16\n\
                    Example: allowed_ranges = [\"10.120.224.0/19\"]",
                    msg
                )
            }
            PurpleLineError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!("{}\n\nList current values: purpleline config --list", msg)
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PurpleLineError
pub type Result<T> = std::result::Result<T, PurpleLineError>;
