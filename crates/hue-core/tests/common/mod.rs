//! In-memory implementations of every host seam, shared by integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::{Future, ready};
use std::time::Duration;

use hue_core::{
    Clipboard, ClipboardError, KeyValueStore, PaletteClient, PaletteError, PaletteRequest,
    PaletteResponse, PaletteView, StorageError, Swatch, ThemeView,
};

// ── Theme seams ─────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingThemeView {
    pub light_class: bool,
    /// `(data-theme, selected)` per toggle, in document order.
    pub toggles: Vec<(Option<String>, bool)>,
}

impl RecordingThemeView {
    pub fn with_toggles(names: &[Option<&str>]) -> Self {
        Self {
            light_class: false,
            toggles: names
                .iter()
                .map(|name| (name.map(str::to_string), false))
                .collect(),
        }
    }

    /// Standard page: one dark and one light toggle.
    pub fn standard() -> Self {
        Self::with_toggles(&[Some("dark"), Some("light")])
    }

    pub fn selected(&self) -> Vec<Option<&str>> {
        self.toggles
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(name, _)| name.as_deref())
            .collect()
    }
}

impl ThemeView for RecordingThemeView {
    fn set_light_class(&mut self, enabled: bool) {
        self.light_class = enabled;
    }

    fn toggle_themes(&self) -> Vec<Option<String>> {
        self.toggles.iter().map(|(name, _)| name.clone()).collect()
    }

    fn set_toggle_selected(&mut self, index: usize, selected: bool) {
        if let Some(toggle) = self.toggles.get_mut(index) {
            toggle.1 = selected;
        }
    }
}

/// A store whose every access fails, like `localStorage` in a locked-down
/// browser profile.
#[derive(Debug, Default)]
pub struct UnavailableStore {
    pub write_attempts: usize,
}

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("access denied".to_string()))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        self.write_attempts += 1;
        Err(StorageError::WriteRejected {
            key: key.to_string(),
            message: "quota exceeded".to_string(),
        })
    }
}

// ── Palette seams ───────────────────────────────────────────────────────

/// Replays queued outcomes in order and records every request it was sent.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    outcomes: RefCell<VecDeque<Result<PaletteResponse, PaletteError>>>,
    pub requests: RefCell<Vec<PaletteRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, outcome: Result<PaletteResponse, PaletteError>) -> Self {
        self.outcomes.borrow_mut().push_back(outcome);
        self
    }

    pub fn then_palette(self, colors: &[&str]) -> Self {
        self.then(Ok(PaletteResponse::ok(
            colors.iter().map(|c| (*c).to_string()).collect(),
        )))
    }

    pub fn then_body(self, body: &str) -> Self {
        self.then(PaletteResponse::from_json(body))
    }

    pub fn sent(&self) -> Vec<PaletteRequest> {
        self.requests.borrow().clone()
    }
}

impl PaletteClient for ScriptedClient {
    fn generate(
        &self,
        request: &PaletteRequest,
    ) -> impl Future<Output = Result<PaletteResponse, PaletteError>> {
        self.requests.borrow_mut().push(request.clone());
        let outcome = self
            .outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(PaletteError::transport("no scripted response left")));
        ready(outcome)
    }
}

#[derive(Debug, Default)]
pub struct RecordingPaletteView {
    pub swatches: Vec<Swatch>,
    pub error: Option<String>,
    pub notifications: Vec<(String, Duration)>,
    pub render_calls: usize,
}

impl PaletteView for RecordingPaletteView {
    fn render_swatches(&mut self, swatches: &[Swatch]) {
        self.error = None;
        self.swatches = swatches.to_vec();
        self.render_calls += 1;
    }

    fn show_error(&mut self, text: &str) {
        self.swatches.clear();
        self.error = Some(text.to_string());
    }

    fn show_notification(&mut self, text: &str, duration: Duration) {
        self.notifications.push((text.to_string(), duration));
    }
}

#[derive(Debug, Default)]
pub struct FakeClipboard {
    pub contents: Option<String>,
    pub refuse: bool,
}

impl FakeClipboard {
    pub fn refusing() -> Self {
        Self {
            contents: None,
            refuse: true,
        }
    }
}

impl Clipboard for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.refuse {
            return Err(ClipboardError::Unavailable(
                "insecure context".to_string(),
            ));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
