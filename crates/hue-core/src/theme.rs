#![forbid(unsafe_code)]

//! Light/dark theme state, persistence, and toggle marking.
//!
//! [`ThemeManager`] owns the current [`Theme`], persists every change through
//! a [`KeyValueStore`], and pushes styling through a [`ThemeView`]. Storage
//! failures never escape: the manager keeps working in memory for the rest of
//! the session.

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::HueConfig;
use crate::storage::KeyValueStore;

/// Visual style variant of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Exact, case-sensitive match against the persisted names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering boundary for theme styling.
pub trait ThemeView {
    /// Add or remove the light-mode class on the document.
    fn set_light_class(&mut self, enabled: bool);

    /// The `data-theme` value of each toggle control, in document order.
    fn toggle_themes(&self) -> Vec<Option<String>>;

    /// Set or clear the selected marker on the toggle at `index`.
    fn set_toggle_selected(&mut self, index: usize, selected: bool);
}

/// Owns the theme preference for one page.
#[derive(Debug)]
pub struct ThemeManager<S, V> {
    theme: Theme,
    default_theme: Theme,
    storage_key: String,
    store: S,
    view: V,
}

impl<S: KeyValueStore, V: ThemeView> ThemeManager<S, V> {
    pub fn new(store: S, view: V, storage_key: impl Into<String>, default_theme: Theme) -> Self {
        Self {
            theme: default_theme,
            default_theme,
            storage_key: storage_key.into(),
            store,
            view,
        }
    }

    pub fn from_config(config: &HueConfig, store: S, view: V) -> Self {
        Self::new(
            store,
            view,
            config.theme_storage_key.clone(),
            config.default_theme,
        )
    }

    /// Load the persisted theme (or the default) and apply it.
    pub fn initialize(&mut self) -> Theme {
        self.theme = self.load();
        debug!(theme = %self.theme, "theme initialized");
        self.apply_theme(self.theme);
        self.theme
    }

    /// Switch to the theme named by a toggle control and persist it.
    ///
    /// Names other than `light` and `dark` select the dark appearance.
    pub fn set_theme(&mut self, name: &str) {
        let theme = Theme::parse(name).unwrap_or_else(|| {
            warn!(requested = name, "unknown theme name, falling back to dark");
            Theme::Dark
        });
        self.set(theme);
    }

    /// Typed form of [`set_theme`](Self::set_theme).
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.apply_theme(theme);
        if let Err(err) = self.store.set(&self.storage_key, theme.as_str()) {
            warn!(%err, key = %self.storage_key, "theme not persisted, keeping it for this session");
        }
    }

    /// Toggle the light class for `theme` and refresh the toggle markers.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.view.set_light_class(theme.is_light());
        self.update_toggle_buttons();
    }

    /// Mark exactly the toggles naming the current theme as selected.
    pub fn update_toggle_buttons(&mut self) {
        let current = self.theme.as_str();
        let toggles = self.view.toggle_themes();
        for (index, name) in toggles.iter().enumerate() {
            let selected = name.as_deref() == Some(current);
            self.view.set_toggle_selected(index, selected);
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, V) {
        (self.store, self.view)
    }

    fn load(&self) -> Theme {
        match self.store.get(&self.storage_key) {
            Ok(Some(stored)) => Theme::parse(&stored).unwrap_or_else(|| {
                warn!(stored = %stored, "ignoring unrecognized stored theme");
                self.default_theme
            }),
            Ok(None) => self.default_theme,
            Err(err) => {
                warn!(%err, "theme storage unavailable, using default");
                self.default_theme
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_is_exact() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Light"), None);
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(!Theme::default().is_light());
    }

    #[test]
    fn serde_uses_persisted_names() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
    }
}
