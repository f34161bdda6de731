use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::{
    services::DEFAULT_JOINT_LABEL,
    utils::{app_data_dir, config_file_in, ensure_dir, write_atomic},
};
use crate::errors::{FinanceError, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_joint_label")]
    pub joint_label: String,
    /// Names used only when a fresh document is bootstrapped.
    #[serde(default = "Config::default_user1_name")]
    pub user1_name: String,
    #[serde(default = "Config::default_user2_name")]
    pub user2_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            joint_label: Self::default_joint_label(),
            user1_name: Self::default_user1_name(),
            user2_name: Self::default_user2_name(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 5] =
        ["locale", "currency", "joint_label", "user1_name", "user2_name"];

    fn default_locale() -> String {
        "pt-BR".into()
    }

    fn default_currency() -> String {
        "BRL".into()
    }

    fn default_joint_label() -> String {
        DEFAULT_JOINT_LABEL.into()
    }

    fn default_user1_name() -> String {
        "Lucas".into()
    }

    fn default_user2_name() -> String {
        "Cecília".into()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "locale" => Some(&self.locale),
            "currency" => Some(&self.currency),
            "joint_label" => Some(&self.joint_label),
            "user1_name" => Some(&self.user1_name),
            "user2_name" => Some(&self.user2_name),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::invalid("value", "must not be empty"));
        }
        let slot = match key {
            "locale" => &mut self.locale,
            "currency" => {
                self.currency = value.to_uppercase();
                return Ok(());
            }
            "joint_label" => &mut self.joint_label,
            "user1_name" => &mut self.user1_name,
            "user2_name" => &mut self.user2_name,
            other => {
                return Err(ValidationError::invalid(
                    "key",
                    format!("unknown setting `{other}`"),
                ))
            }
        };
        *slot = value.to_string();
        Ok(())
    }
}

/// Loads and saves `config.json` in the application data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, FinanceError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, FinanceError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, FinanceError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), FinanceError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
