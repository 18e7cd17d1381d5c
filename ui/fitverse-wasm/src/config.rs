//! Page-level configuration.
//!
//! Read from an optional `<script type="application/json" id="fitverse-config">`
//! block. Missing means defaults; malformed is logged and also means defaults.

use crate::dom;
use fv_core::AppConfig;

pub const CONFIG_ELEMENT_ID: &str = "fitverse-config";

pub fn load() -> AppConfig {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return AppConfig::default();
    };
    match AppConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("fitverse: using default config: {err}"));
            AppConfig::default()
        }
    }
}
