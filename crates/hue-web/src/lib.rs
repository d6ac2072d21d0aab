#![forbid(unsafe_code)]

//! Browser front-end for the Hue palette generator.
//!
//! This crate implements the `hue-core` seams with `web-sys`:
//! `localStorage` for the theme preference, `fetch` for the palette endpoint,
//! DOM views for swatches, errors, and notifications, and the async clipboard.
//! [`start`] is the `wasm-bindgen` entry point that composes everything once
//! the document is ready.
//!
//! Only [`style`] compiles on native targets; everything else is `wasm32`.

pub mod style;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod client;
#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use app::{CONFIG_ELEMENT_ID, start};

/// Best-effort human-readable text for a thrown JS value.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{err:?}")
}
