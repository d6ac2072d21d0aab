#![forbid(unsafe_code)]

//! `web-sys` implementations of the rendering and clipboard seams.

use core::time::Duration;

use hue_core::{Clipboard, ClipboardError, HueConfig, PaletteView, Swatch, ThemeView};
use js_sys::Reflect;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlElement};

use crate::js_error_message;
use crate::style::{
    self, Declaration, SWATCH_CLASS, SWATCH_HEX_ATTR, THEME_ATTR, error_declarations,
    notification_declarations, swatch_declarations,
};

fn apply_declarations(element: &Element, declarations: &[Declaration]) -> Result<(), JsValue> {
    let style = element.dyn_ref::<HtmlElement>().map(HtmlElement::style);
    let Some(style) = style else {
        return Err(JsValue::from_str("element has no inline style"));
    };
    for (property, value) in declarations {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// Look up `#id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}

// ── Theme ───────────────────────────────────────────────────────────────

/// Theme styling on `document.body` and the `.theme-toggle` controls.
#[derive(Debug, Clone)]
pub struct DomThemeView {
    document: Document,
    body: HtmlElement,
    toggle_selector: String,
    light_class: String,
    selected_class: String,
}

impl DomThemeView {
    pub fn new(document: Document, config: &HueConfig) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        Ok(Self {
            document,
            body,
            toggle_selector: style::class_selector(&config.dom.theme_toggle_class),
            light_class: config.light_class.clone(),
            selected_class: config.selected_class.clone(),
        })
    }

    /// Every toggle control, in document order.
    pub fn toggles(&self) -> Vec<Element> {
        let list = match self.document.query_selector_all(&self.toggle_selector) {
            Ok(list) => list,
            Err(err) => {
                warn!(error = %js_error_message(&err), "theme toggle query failed");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl ThemeView for DomThemeView {
    fn set_light_class(&mut self, enabled: bool) {
        if let Err(err) = self
            .body
            .class_list()
            .toggle_with_force(&self.light_class, enabled)
        {
            warn!(error = %js_error_message(&err), "could not toggle light class");
        }
    }

    fn toggle_themes(&self) -> Vec<Option<String>> {
        self.toggles()
            .iter()
            .map(|toggle| toggle.get_attribute(THEME_ATTR))
            .collect()
    }

    fn set_toggle_selected(&mut self, index: usize, selected: bool) {
        let Some(toggle) = self.toggles().into_iter().nth(index) else {
            return;
        };
        if let Err(err) = toggle
            .class_list()
            .toggle_with_force(&self.selected_class, selected)
        {
            warn!(error = %js_error_message(&err), index, "could not mark theme toggle");
        }
    }
}

// ── Palette ─────────────────────────────────────────────────────────────

/// Renders into the palette container and appends notifications to `body`.
#[derive(Debug, Clone)]
pub struct DomPaletteView {
    document: Document,
    container: Element,
}

impl DomPaletteView {
    #[must_use]
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }

    #[must_use]
    pub fn container(&self) -> &Element {
        &self.container
    }

    fn clear(&self) {
        self.container.set_text_content(None);
    }

    fn swatch_element(&self, swatch: &Swatch) -> Result<Element, JsValue> {
        let element = self.document.create_element("div")?;
        element.class_list().add_1(SWATCH_CLASS)?;
        element.set_attribute(SWATCH_HEX_ATTR, &swatch.hex)?;
        element.set_attribute("title", &swatch.title)?;
        element.set_text_content(Some(&swatch.hex));
        apply_declarations(&element, &swatch_declarations(swatch))?;
        Ok(element)
    }

    fn try_render(&self, swatches: &[Swatch]) -> Result<(), JsValue> {
        self.clear();
        for swatch in swatches {
            let element = self.swatch_element(swatch)?;
            self.container.append_child(&element)?;
        }
        Ok(())
    }

    fn try_show_error(&self, text: &str) -> Result<(), JsValue> {
        let element = self.document.create_element("div")?;
        apply_declarations(&element, &error_declarations())?;
        element.set_text_content(Some(text));
        self.clear();
        self.container.append_child(&element)?;
        Ok(())
    }

    fn try_notify(&self, text: &str, duration: Duration) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let notification = self.document.create_element("div")?;
        apply_declarations(&notification, &notification_declarations())?;
        notification.set_text_content(Some(text));
        body.append_child(&notification)?;

        let remove = Closure::once_into_js(move || notification.remove());
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            millis,
        )?;
        Ok(())
    }
}

impl PaletteView for DomPaletteView {
    fn render_swatches(&mut self, swatches: &[Swatch]) {
        if let Err(err) = self.try_render(swatches) {
            warn!(error = %js_error_message(&err), "palette render failed");
        }
    }

    fn show_error(&mut self, text: &str) {
        if let Err(err) = self.try_show_error(text) {
            warn!(error = %js_error_message(&err), "error display failed");
        }
    }

    fn show_notification(&mut self, text: &str, duration: Duration) {
        if let Err(err) = self.try_notify(text, duration) {
            warn!(error = %js_error_message(&err), "notification failed");
        }
    }
}

/// Hex color of the swatch containing `target`, if any.
pub fn swatch_hex_for_target(target: &Element) -> Option<String> {
    target
        .closest(&style::class_selector(SWATCH_CLASS))
        .ok()
        .flatten()
        .and_then(|swatch| swatch.get_attribute(SWATCH_HEX_ATTR))
}

// ── Clipboard ───────────────────────────────────────────────────────────

/// `navigator.clipboard.writeText`, fire-and-forget.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window()
            .ok_or_else(|| ClipboardError::Unavailable("no global window".to_string()))?;
        let navigator = window.navigator();
        // Absent outside secure contexts, so probe before casting.
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|err| ClipboardError::Unavailable(js_error_message(&err)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable(
                "navigator.clipboard is not available".to_string(),
            ));
        }
        let clipboard: web_sys::Clipboard = clipboard.unchecked_into();
        let pending = JsFuture::from(clipboard.write_text(text));
        let copied = text.to_string();
        spawn_local(async move {
            if let Err(err) = pending.await {
                warn!(hex = %copied, error = %js_error_message(&err), "clipboard write rejected");
            }
        });
        Ok(())
    }
}
