//! Infrastructure layer - External I/O and persistence

pub mod access;
pub mod config;
pub mod http;
pub mod repository;
pub mod telemetry;

pub use config::Config;
pub use repository::{ContentRepository, FileSystemRepository};
