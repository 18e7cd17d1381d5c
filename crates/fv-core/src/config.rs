//! Controller configuration.
//!
//! Every field has a default matching the live site, so an empty `{}` (or no
//! config at all) behaves exactly like the stock controller.

use crate::error::{Error, Result};
use serde::Deserialize;

pub const DEFAULT_USER_KEY: &str = "fitverse_user";
pub const DEFAULT_CART_KEY: &str = "fitverse_cart";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub user_key: String,
    pub cart_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user_key: DEFAULT_USER_KEY.to_owned(),
            cart_key: DEFAULT_CART_KEY.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            display_ms: 3_000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageKeys,
    /// Inject the stylesheet that freezes transforms and keyframe animations.
    pub anti_shake: bool,
    pub notification: NotificationTimings,
    pub home_document: String,
    pub login_document: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            anti_shake: true,
            notification: NotificationTimings::default(),
            home_document: "index.html".to_owned(),
            login_document: "login.html".to_owned(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(Error::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() -> anyhow::Result<()> {
        let config = AppConfig::from_json("{}")?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.user_key, "fitverse_user");
        assert_eq!(config.storage.cart_key, "fitverse_cart");
        assert_eq!(config.notification.display_ms, 3_000);
        assert_eq!(config.notification.exit_ms, 300);
        assert!(config.anti_shake);
        Ok(())
    }

    #[test]
    fn partial_config_overrides_only_named_fields() -> anyhow::Result<()> {
        let config = AppConfig::from_json(
            r#"{"anti_shake":false,"storage":{"cart_key":"staging_cart"},"notification":{"display_ms":1000}}"#,
        )?;
        assert!(!config.anti_shake);
        assert_eq!(config.storage.user_key, "fitverse_user");
        assert_eq!(config.storage.cart_key, "staging_cart");
        assert_eq!(config.notification.display_ms, 1_000);
        assert_eq!(config.notification.exit_ms, 300);
        assert_eq!(config.home_document, "index.html");
        Ok(())
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = AppConfig::from_json(r#"{"anti_shake":"yes"}"#);
        assert!(matches!(err, Err(Error::Config(_))));
    }
}
