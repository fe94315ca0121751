//! Configuration management for the daylog application.
//!
//! Settings live in a JSON file inside the platform data directory and are
//! edited through an interactive wizard. Two optional modules exist: the
//! local status server (its port is validated before being accepted) and
//! the record retention policy consumed by the prune command. Unconfigured
//! modules are omitted from the file entirely.
//!
//! ```rust,no_run
//! use daylog::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! if let Some(server) = &config.server {
//!     println!("status server port: {}", server.port);
//! }
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::validate::{validate_http_port, MIN_CUTOFF_AGE_DAYS};
use crate::{msg_error, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Local HTTP status server settings.
///
/// Only the port is configured here; binding and serving happen elsewhere.
/// The wizard refuses ports outside `[1024, 65535]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { port: 8080 }
    }
}

/// Record retention policy.
///
/// Records older than `keep_days` days are eligible for deletion by the
/// prune command. The floor matches the cutoff-date validator, so a
/// configured policy can never produce a cutoff the validator rejects.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RetentionConfig {
    pub keep_days: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        RetentionConfig { keep_days: 90 }
    }
}

/// Main configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<RetentionConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults so re-running the wizard
    /// only changes what the user touches. Returns the updated
    /// configuration for the caller to save.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(e) => {
                msg_error!(Message::ConfigReadFailed(e.to_string()));
                Config::default()
            }
        };

        let modules = ["Server", "Retention"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    let port: i64 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptServerPort.to_string())
                        .default(default.port as i64)
                        .validate_with(|value: &i64| validate_http_port(*value).map(|_| ()).map_err(|e| e.to_string()))
                        .interact_text()?;
                    config.server = Some(ServerConfig {
                        port: validate_http_port(port)?,
                    });
                }
                "Retention" => {
                    let default = config.retention.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleRetention);
                    config.retention = Some(RetentionConfig {
                        keep_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRetentionDays.to_string())
                            .default(default.keep_days)
                            .validate_with(|value: &u32| {
                                if (*value as i64) < MIN_CUTOFF_AGE_DAYS {
                                    Err(Message::RetentionTooShort(MIN_CUTOFF_AGE_DAYS).to_string())
                                } else {
                                    Ok(())
                                }
                            })
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
