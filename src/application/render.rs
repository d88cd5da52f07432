//! Render use case

use crate::domain::templates::chrome;
use crate::domain::{Content, LinkTagger, Newsletter, Placeholders, TemplateTable, Target};
use crate::error::{PurpleLineError, Result};
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// One of the documents that can be produced from the content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Email(Target),
    Web,
}

impl Output {
    pub const ALL: [Output; 3] = [
        Output::Email(Target::Domestic),
        Output::Email(Target::International),
        Output::Web,
    ];
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Email(target) => write!(f, "{}", target),
            Output::Web => write!(f, "web"),
        }
    }
}

impl FromStr for Output {
    type Err = PurpleLineError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("web") {
            return Ok(Output::Web);
        }
        s.parse::<Target>()
            .map(Output::Email)
            .map_err(|_| PurpleLineError::InvalidTarget(s.to_string()))
    }
}

/// Renders content with the standard layouts and the workspace's campaign settings
pub struct RenderService {
    config: Config,
    table: TemplateTable,
    placeholders: Placeholders,
}

impl RenderService {
    pub fn new(config: Config) -> Self {
        let placeholders = config.placeholders();
        RenderService {
            config,
            table: TemplateTable::standard(),
            placeholders,
        }
    }

    /// Render `output` for `content`. A web preview is wrapped in the archive page shell.
    pub fn render(&self, content: &Content, output: Output, preview: bool) -> Result<String> {
        let campaign = self.config.campaign(&content.metadata.date);
        let tagger = LinkTagger::new(campaign, &self.config.tracking.domains)?;
        let newsletter = Newsletter::new(&self.table, &tagger, &self.placeholders);

        let html = match output {
            Output::Email(target) => newsletter.render(content, target),
            Output::Web if preview => chrome::web_preview(&newsletter.render_web(content)),
            Output::Web => newsletter.render_web(content),
        };

        info!(%output, preview, bytes = html.len(), "rendered");
        Ok(html)
    }
}

/// Render the workspace's saved content
pub fn render_workspace(
    repository: &FileSystemRepository,
    output: Output,
    preview: bool,
) -> Result<String> {
    let config = repository.load_config()?;
    let content = repository.load_content()?;
    RenderService::new(config).render(&content, output, preview)
}
