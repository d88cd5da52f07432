//! Config management use case

use crate::error::{PurpleLineError, Result};
use crate::infrastructure::config::LogFormat;
use crate::infrastructure::telemetry::parse_level;
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};
use std::net::SocketAddr;

/// Keys readable and writable through `purpleline config`
pub const CONFIG_KEYS: [&str; 9] = [
    "campaign.source",
    "campaign.medium",
    "campaign.name",
    "server.address",
    "logging.level",
    "logging.format",
    "placeholders.lead",
    "placeholders.secondary",
    "placeholders.two_column",
];

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        lookup(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        let value = value.trim();

        match key {
            "campaign.source" => config.campaign.source = value.to_string(),
            "campaign.medium" => config.campaign.medium = value.to_string(),
            "campaign.name" => config.campaign.name = value.to_string(),
            "server.address" => {
                value.parse::<SocketAddr>().map_err(|e| {
                    PurpleLineError::Config(format!("Invalid server.address '{}': {}", value, e))
                })?;
                config.server.address = value.to_string();
            }
            "logging.level" => {
                parse_level(value)?;
                config.logging.level = value.to_string();
            }
            "logging.format" => {
                config.logging.format = value.parse::<LogFormat>().map_err(PurpleLineError::Config)?;
            }
            "placeholders.lead" => config.placeholders.lead = value.to_string(),
            "placeholders.secondary" => config.placeholders.secondary = value.to_string(),
            "placeholders.two_column" => config.placeholders.two_column = value.to_string(),
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// Every settable key with its current value
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.repository.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|key| Ok((*key, lookup(&config, key)?)))
            .collect()
    }
}

fn lookup(config: &Config, key: &str) -> Result<String> {
    Ok(match key {
        "campaign.source" => config.campaign.source.clone(),
        "campaign.medium" => config.campaign.medium.clone(),
        "campaign.name" => config.campaign.name.clone(),
        "server.address" => config.server.address.clone(),
        "logging.level" => config.logging.level.clone(),
        "logging.format" => config.logging.format.to_string(),
        "placeholders.lead" => config.placeholders.lead.clone(),
        "placeholders.secondary" => config.placeholders.secondary.clone(),
        "placeholders.two_column" => config.placeholders.two_column.clone(),
        _ => return Err(unknown_key(key)),
    })
}

fn unknown_key(key: &str) -> PurpleLineError {
    PurpleLineError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
