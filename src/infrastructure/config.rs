//! Workspace configuration stored in .purpleline/config.toml

use crate::domain::{Campaign, Placeholders};
use crate::error::{PurpleLineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_DIR: &str = ".purpleline";
pub const CONFIG_FILE: &str = "config.toml";

const IMAGE_BASE: &str = "https://image.alums.northwestern.edu/lib/fe3111747364047e7d1474/m/1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub campaign: CampaignConfig,
    pub placeholders: PlaceholderConfig,
    pub tracking: TrackingConfig,
    pub access: AccessConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Fixed parts of the utm parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    pub source: String,
    pub medium: String,
    pub name: String,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        CampaignConfig {
            source: "SFMC Purple Line Email".to_string(),
            medium: "email".to_string(),
            name: "Purple Line".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub lead: String,
    pub secondary: String,
    pub two_column: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        PlaceholderConfig {
            lead: format!("{IMAGE_BASE}/5a3a103b-5439-4d96-a3c2-0e6c38db3d94.png"),
            secondary: format!("{IMAGE_BASE}/99f43204-0a45-4087-93bb-1292ed8b5d7e.png"),
            two_column: format!("{IMAGE_BASE}/f891bd61-8982-4aee-870c-47b7edd7a55a.png"),
        }
    }
}

/// Domains whose links inside free text get campaign parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub domains: Vec<String>,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        TrackingConfig {
            domains: [
                "alumni.northwestern",
                "secure.ard.northwestern",
                "wewill.northwestern",
                "our.northwestern",
            ]
            .iter()
            .map(|d| d.to_string())
            .collect(),
        }
    }
}

/// Networks allowed to call the save and reset endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    pub allowed_ranges: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        AccessConfig {
            allowed_ranges: [
                "129.105.0.0/16",
                "129.105.212.0/24",
                "129.105.216.0/24",
                "192.26.87.0/24",
                "192.26.86.0/24",
                "165.124.0.0/16",
                "99.99.0.0/16",
                "165.124.167.2/16",
                "199.74.64.0/18",
                "10.120.224.0/19",
            ]
            .iter()
            .map(|r| r.to_string())
            .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by RUST_LOG
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "Invalid log format: '{}'. Valid formats are: compact, json",
                other
            )),
        }
    }
}

impl Config {
    /// Load config from .purpleline/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PurpleLineError::NotWorkspace(path.to_path_buf())
            } else {
                PurpleLineError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PurpleLineError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .purpleline/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Campaign identity for an issue published on `date`
    pub fn campaign(&self, date: &str) -> Campaign {
        Campaign {
            source: self.campaign.source.clone(),
            medium: self.campaign.medium.clone(),
            name: self.campaign.name.clone(),
            date: date.to_string(),
        }
    }

    pub fn placeholders(&self) -> Placeholders {
        Placeholders {
            lead: self.placeholders.lead.clone(),
            secondary: self.placeholders.secondary.clone(),
            two_column: self.placeholders.two_column.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.campaign.source, "SFMC Purple Line Email");
        assert_eq!(config.campaign.medium, "email");
        assert_eq!(config.tracking.domains.len(), 4);
        assert_eq!(config.access.allowed_ranges.len(), 10);
        assert_eq!(config.server.address, "127.0.0.1:8080");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.placeholders.lead.ends_with(".png"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.campaign.name = "Purple Line Extra".to_string();
        config.logging.format = LogFormat::Json;

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".purpleline/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(CONFIG_DIR)).unwrap();
        fs::write(
            temp.path().join(CONFIG_DIR).join(CONFIG_FILE),
            "[server]\naddress = \"0.0.0.0:9000\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.server.address, "0.0.0.0:9000");
        assert_eq!(loaded.campaign, CampaignConfig::default());
        assert_eq!(loaded.logging.level, "info");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            PurpleLineError::NotWorkspace(_) => {}
            other => panic!("Expected NotWorkspace error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(CONFIG_DIR)).unwrap();
        fs::write(temp.path().join(CONFIG_DIR).join(CONFIG_FILE), "[server\n").unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(PurpleLineError::Config(_))
        ));
    }

    #[test]
    fn test_campaign_carries_date() {
        let campaign = Config::default().campaign("2025-09-17");
        assert_eq!(campaign.date, "2025-09-17");
        assert_eq!(campaign.name, "Purple Line");
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("pretty".parse::<LogFormat>().is_err());
    }
}
