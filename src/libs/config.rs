//! Configuration management.
//!
//! Settings are stored as JSON in the platform application data directory,
//! next to the task collection. A missing configuration file yields the
//! defaults; a corrupt one is reported and also falls back to the defaults,
//! so a broken config never blocks the planner itself.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Display theme. Affects table rendering only, never semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    /// Loads the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(err) => {
                msg_warning!(Message::ConfigParseError(err.to_string()));
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive configuration setup.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Display theme")
            .items(&["light", "dark"])
            .default(match current.theme {
                Theme::Light => 0,
                Theme::Dark => 1,
            })
            .interact()?;

        let config = Config {
            theme: if selection == 1 { Theme::Dark } else { Theme::Light },
        };
        config.save()?;
        msg_success!(Message::ConfigSaved);
        Ok(config)
    }
}
