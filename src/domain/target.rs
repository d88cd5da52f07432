//! Distribution targets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A distribution variant of the newsletter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// The US mailing list
    #[default]
    Domestic,
    /// The international mailing list
    International,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Domestic, Target::International];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Domestic => "domestic",
            Target::International => "international",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "domestic" | "us" => Ok(Target::Domestic),
            "international" | "intl" => Ok(Target::International),
            _ => Err(s.to_string()),
        }
    }
}
