//! Dialog Configuration
//!
//! Bundled labels and close behavior for the done-housework dialog.

use housework_form::FormConfig;

static FORM_CONFIG_JSON: &str = include_str!("../assets/form_config.json");

/// Parse the bundled configuration, falling back to defaults
pub fn load_form_config() -> FormConfig {
    parse_or_default(FORM_CONFIG_JSON)
}

fn parse_or_default(json: &str) -> FormConfig {
    FormConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("[CONFIG] {}; using defaults", e);
        FormConfig::default()
    })
}
