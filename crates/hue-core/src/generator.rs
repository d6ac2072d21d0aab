#![forbid(unsafe_code)]

//! Palette form state, the generate request/render cycle, and click-to-copy.
//!
//! [`PaletteGenerator`] never touches a document directly. Swatches, errors,
//! and notifications go through a [`PaletteView`]; the network goes through a
//! [`PaletteClient`]; copies go through a [`Clipboard`].
//!
//! A generation is split in two synchronous halves around the network call:
//! [`begin_generation`](PaletteGenerator::begin_generation) snapshots the form
//! and issues a ticket, [`finish_generation`](PaletteGenerator::finish_generation)
//! applies the outcome if that ticket is still the latest. Hosts that keep the
//! generator behind a `RefCell` await the client between the two without
//! holding a borrow. Single owners can use
//! [`generate_palette`](PaletteGenerator::generate_palette) instead.

use core::time::Duration;

use tracing::{debug, info, warn};

use crate::api::{PaletteClient, PaletteRequest, PaletteResponse};
use crate::color::{TextColor, text_color};
use crate::config::HueConfig;
use crate::error::{ClipboardError, PaletteError};
use crate::ticket::{RequestSequencer, RequestTicket};

/// One rendered color sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Color exactly as returned by the server; also the label text.
    pub hex: String,
    pub text_color: TextColor,
    /// Hover hint.
    pub title: String,
}

impl Swatch {
    #[must_use]
    pub fn new(hex: impl Into<String>) -> Self {
        let hex = hex.into();
        Self {
            text_color: text_color(&hex),
            title: format!("Click to copy: {hex}"),
            hex,
        }
    }
}

/// Rendering boundary for the palette area and notifications.
pub trait PaletteView {
    /// Remove everything in the palette area, then add `swatches` in order.
    fn render_swatches(&mut self, swatches: &[Swatch]);

    /// Remove everything in the palette area, then show a single error line.
    fn show_error(&mut self, text: &str);

    /// Show a transient, non-blocking message that removes itself after
    /// `duration`. Concurrent notifications stack independently.
    fn show_notification(&mut self, text: &str, duration: Duration);
}

/// System clipboard seam.
pub trait Clipboard {
    /// Hand `text` to the clipboard. `Ok` means the host accepted the write.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Live mirror of the three form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteForm {
    base_color: String,
    mode: String,
    count: u32,
}

impl Default for PaletteForm {
    fn default() -> Self {
        Self::new("#3498db", "analogous", 5)
    }
}

impl PaletteForm {
    #[must_use]
    pub fn new(base_color: impl Into<String>, mode: impl Into<String>, count: u32) -> Self {
        Self {
            base_color: base_color.into(),
            mode: mode.into(),
            count,
        }
    }

    /// Build from raw control values; an unparseable count uses the default.
    #[must_use]
    pub fn from_controls(base_color: &str, mode: &str, count: &str) -> Self {
        let mut form = Self {
            base_color: base_color.to_string(),
            mode: mode.to_string(),
            ..Self::default()
        };
        form.set_count_input(count);
        form
    }

    pub fn set_base_color(&mut self, value: &str) {
        self.base_color = value.to_string();
    }

    pub fn set_mode(&mut self, value: &str) {
        self.mode = value.to_string();
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    /// Update the count from control text. Returns `false` and keeps the
    /// previous count when the text is not a non-negative integer.
    pub fn set_count_input(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<u32>() {
            Ok(count) => {
                self.count = count;
                true
            }
            Err(err) => {
                warn!(raw, %err, kept = self.count, "ignoring unparseable swatch count");
                false
            }
        }
    }

    #[must_use]
    pub fn base_color(&self) -> &str {
        &self.base_color
    }

    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn to_request(&self) -> PaletteRequest {
        PaletteRequest {
            base_color: self.base_color.clone(),
            mode: self.mode.clone(),
            count: self.count,
        }
    }
}

/// A request that has been started but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    pub ticket: RequestTicket,
    pub request: PaletteRequest,
}

/// What the palette area shows right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaletteDisplay {
    #[default]
    Empty,
    Swatches(Vec<Swatch>),
    Error(String),
}

/// Result of applying one generation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The palette area now shows this many swatches.
    Rendered { swatches: usize },
    /// The palette area now shows the error.
    Failed(PaletteError),
    /// A newer request was started; nothing changed.
    Stale,
}

/// Owns the palette form and drives the request/render cycle.
#[derive(Debug)]
pub struct PaletteGenerator<C, V, K> {
    form: PaletteForm,
    sequencer: RequestSequencer,
    display: PaletteDisplay,
    notification_duration: Duration,
    client: C,
    view: V,
    clipboard: K,
}

impl<C, V, K> PaletteGenerator<C, V, K>
where
    C: PaletteClient,
    V: PaletteView,
    K: Clipboard,
{
    pub fn new(
        form: PaletteForm,
        client: C,
        view: V,
        clipboard: K,
        notification_duration: Duration,
    ) -> Self {
        Self {
            form,
            sequencer: RequestSequencer::new(),
            display: PaletteDisplay::Empty,
            notification_duration,
            client,
            view,
            clipboard,
        }
    }

    pub fn from_config(
        config: &HueConfig,
        form: PaletteForm,
        client: C,
        view: V,
        clipboard: K,
    ) -> Self {
        Self::new(
            form,
            client,
            view,
            clipboard,
            Duration::from_millis(u64::from(config.notification_ms)),
        )
    }

    /// Run the initial generation with whatever the controls held at load.
    pub async fn initialize(&mut self) -> GenerationOutcome {
        info!(
            base_color = self.form.base_color(),
            mode = self.form.mode(),
            count = self.form.count(),
            "palette generator loaded"
        );
        self.generate_palette().await
    }

    /// Submit the current form and apply the response.
    pub async fn generate_palette(&mut self) -> GenerationOutcome {
        let pending = self.begin_generation();
        let outcome = self.client.generate(&pending.request).await;
        self.finish_generation(pending.ticket, outcome)
    }

    /// Snapshot the form and supersede any request still in flight.
    pub fn begin_generation(&mut self) -> PendingGeneration {
        let ticket = self.sequencer.issue();
        let request = self.form.to_request();
        debug!(
            ticket = ticket.get(),
            base_color = %request.base_color,
            mode = %request.mode,
            count = request.count,
            "palette request started"
        );
        PendingGeneration { ticket, request }
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn finish_generation(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<PaletteResponse, PaletteError>,
    ) -> GenerationOutcome {
        if !self.sequencer.is_current(ticket) {
            debug!(
                ticket = ticket.get(),
                latest = self.sequencer.latest().map(RequestTicket::get),
                "discarding superseded palette response"
            );
            return GenerationOutcome::Stale;
        }

        match outcome.and_then(PaletteResponse::into_palette) {
            Ok(colors) => {
                self.render_palette(&colors);
                GenerationOutcome::Rendered {
                    swatches: colors.len(),
                }
            }
            Err(err) => {
                warn!(ticket = ticket.get(), %err, "palette generation failed");
                self.show_error(err.user_message());
                GenerationOutcome::Failed(err)
            }
        }
    }

    /// Replace the palette area with one swatch per color, in order.
    pub fn render_palette(&mut self, colors: &[String]) {
        let swatches: Vec<Swatch> = colors.iter().map(Swatch::new).collect();
        self.view.render_swatches(&swatches);
        debug!(swatches = swatches.len(), "palette rendered");
        self.display = PaletteDisplay::Swatches(swatches);
    }

    /// Replace the palette area with `Error: <message>`.
    pub fn show_error(&mut self, message: &str) {
        let text = format!("Error: {message}");
        self.view.show_error(&text);
        self.display = PaletteDisplay::Error(text);
    }

    pub fn show_notification(&mut self, message: &str) {
        self.view
            .show_notification(message, self.notification_duration);
    }

    /// Copy a swatch color and confirm with a notification.
    ///
    /// Returns `false` when the clipboard refused the write; no notification
    /// is shown in that case.
    pub fn copy_swatch(&mut self, hex: &str) -> bool {
        match self.clipboard.write_text(hex) {
            Ok(()) => {
                debug!(hex, "swatch copied");
                self.show_notification(&format!("Copied: {hex}"));
                true
            }
            Err(err) => {
                warn!(hex, %err, "swatch copy failed");
                false
            }
        }
    }

    pub fn form(&self) -> &PaletteForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PaletteForm {
        &mut self.form
    }

    pub fn display(&self) -> &PaletteDisplay {
        &self.display
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn clipboard(&self) -> &K {
        &self.clipboard
    }
}
