use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid log level {0:?}. Expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

// Status texts shown under each player's revealed move
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Labels {
    pub your_turn: String,
    pub waiting: String,
    pub win: String,
    pub lose: String,
    pub draw: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            your_turn: String::new(),
            waiting: "...".to_string(),
            win: "You Won!".to_string(),
            lose: "You Lost!".to_string(),
            draw: "DRAW!".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub labels: Labels,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            labels: Labels::default(),
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    // Missing fields fall back to their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn max_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
