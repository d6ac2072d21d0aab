#![forbid(unsafe_code)]

//! Platform-independent core of the Hue palette front-end.
//!
//! # Role in Hue
//! `hue-core` holds every decision the page makes: which theme is active and
//! what gets persisted, what the palette request contains, whether a response
//! is still wanted, what each swatch looks like, and what the user is told when
//! something fails. It has no JS or DOM types; hosts implement the seams.
//!
//! # This crate provides
//! - [`ThemeManager`] with the [`ThemeView`] and [`KeyValueStore`] seams.
//! - [`PaletteGenerator`] with the [`PaletteView`], [`PaletteClient`], and
//!   [`Clipboard`] seams.
//! - [`text_color`] label contrast and [`Rgb`] hex decoding.
//! - [`RequestSequencer`] tickets so only the latest response is applied.
//! - [`HueConfig`] and the error types.
//!
//! # How it fits in the system
//! `hue-web` implements the seams with `web-sys` and composes both components
//! at page load. Tests implement them with in-memory fakes.

pub mod api;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod storage;
pub mod theme;
pub mod ticket;

pub use api::{PaletteClient, PaletteRequest, PaletteResponse};
pub use color::{Rgb, TEXT_LUMINANCE_THRESHOLD, TextColor, text_color};
pub use config::{DomIds, HueConfig};
pub use error::{
    ClipboardError, ColorError, ConfigError, GENERIC_FAILURE_MESSAGE, PaletteError, StorageError,
};
pub use generator::{
    Clipboard, GenerationOutcome, PaletteDisplay, PaletteForm, PaletteGenerator, PaletteView,
    PendingGeneration, Swatch,
};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{Theme, ThemeManager, ThemeView};
pub use ticket::{RequestSequencer, RequestTicket};
