//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod render;
pub mod reset;
pub mod serve;
pub mod status;
pub mod sync;

pub use manage_config::ConfigService;
pub use render::{Output, RenderService};
pub use status::{SectionStatus, StatusReport};
