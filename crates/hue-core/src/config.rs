#![forbid(unsafe_code)]

//! Runtime configuration for the front-end.
//!
//! Every field has a default matching the markup the page ships with, so
//! `HueConfig::default()` works without any host-provided configuration.
//!
//! ```json
//! {
//!   "endpoint": "/api/generate",
//!   "notification_ms": 2000,
//!   "dom": { "palette": "palette" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::Theme;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HueConfig {
    /// Path or URL the palette request is POSTed to.
    pub endpoint: String,
    /// Storage key holding the theme preference.
    pub theme_storage_key: String,
    /// Theme used when nothing is stored.
    pub default_theme: Theme,
    /// Class applied to the document body in light mode.
    pub light_class: String,
    /// Class marking the active theme toggle.
    pub selected_class: String,
    /// Lifetime of a copy notification.
    pub notification_ms: u32,
    /// `tracing` filter directive, e.g. `info` or `hue_core=debug`.
    pub log_directive: String,
    pub dom: DomIds,
}

impl Default for HueConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/generate".to_string(),
            theme_storage_key: "theme".to_string(),
            default_theme: Theme::Dark,
            light_class: "light-theme".to_string(),
            selected_class: "selected".to_string(),
            notification_ms: 2000,
            log_directive: "info".to_string(),
            dom: DomIds::default(),
        }
    }
}

/// Element ids and classes the front-end binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomIds {
    pub base_color: String,
    pub mode: String,
    pub count: String,
    pub generate_button: String,
    pub palette: String,
    /// Class shared by all theme toggles; each carries `data-theme`.
    pub theme_toggle_class: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            base_color: "baseColor".to_string(),
            mode: "modeSelect".to_string(),
            count: "countInput".to_string(),
            generate_button: "generatebtn".to_string(),
            palette: "palette".to_string(),
            theme_toggle_class: "theme-toggle".to_string(),
        }
    }
}

impl HueConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::invalid("endpoint", "must not be empty"));
        }
        if self.theme_storage_key.is_empty() {
            return Err(ConfigError::invalid(
                "theme_storage_key",
                "must not be empty",
            ));
        }
        if self.notification_ms == 0 {
            return Err(ConfigError::invalid(
                "notification_ms",
                "must be greater than zero",
            ));
        }
        let ids = [
            ("dom.base_color", &self.dom.base_color),
            ("dom.mode", &self.dom.mode),
            ("dom.count", &self.dom.count),
            ("dom.generate_button", &self.dom.generate_button),
            ("dom.palette", &self.dom.palette),
            ("dom.theme_toggle_class", &self.dom.theme_toggle_class),
        ];
        if let Some((field, _)) = ids.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::invalid(*field, "must not be empty"));
        }
        Ok(())
    }
}
