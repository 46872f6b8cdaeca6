use crate::currency::CurrencyFormat;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::warn;

fn default_session_key() -> String {
    "isAdminAuthenticated".to_string()
}

fn default_delete_confirmation() -> String {
    "Are you sure you want to delete this book?".to_string()
}

/// Credentials accepted by the login page.
///
/// A demo gate only; nothing here is hashed or verified server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

impl AdminCredentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username.trim() && self.password == password
    }
}

/// Back-office settings, read from YAML. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackofficeConfig {
    /// Storage key of the admin session flag
    #[serde(default = "default_session_key")]
    pub session_key: String,
    /// Question asked before a book is removed from the list
    #[serde(default = "default_delete_confirmation")]
    pub delete_confirmation: String,
    #[serde(default)]
    pub currency: CurrencyFormat,
    #[serde(default)]
    pub admin: AdminCredentials,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
            delete_confirmation: default_delete_confirmation(),
            currency: CurrencyFormat::default(),
            admin: AdminCredentials::default(),
        }
    }
}

impl BackofficeConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse `yaml`, falling back to defaults when it is unusable.
    pub fn from_yaml_or_default(yaml: &str) -> Self {
        match Self::from_yaml(yaml) {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid back-office config, using defaults: {e}");
                Self::default()
            }
        }
    }
}
