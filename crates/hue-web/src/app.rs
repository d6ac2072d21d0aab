#![forbid(unsafe_code)]

//! Page-load composition root.
//!
//! Builds both components with their DOM, storage, and network dependencies,
//! wires the page's events to them, and starts the first generation. The
//! components live behind `Rc<RefCell<_>>` shared with the event closures,
//! which are leaked for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use hue_core::{
    HueConfig, PaletteClient, PaletteForm, PaletteGenerator, ThemeManager,
};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, HtmlSelectElement};

use crate::client::FetchClient;
use crate::console;
use crate::dom::{
    BrowserClipboard, DomPaletteView, DomThemeView, element_by_id, swatch_hex_for_target,
};
use crate::js_error_message;
use crate::storage::LocalStorageStore;
use crate::style::THEME_ATTR;

/// Id of the optional `<script type="application/json">` holding config.
pub const CONFIG_ELEMENT_ID: &str = "hue-config";

type WebThemeManager = ThemeManager<LocalStorageStore, DomThemeView>;
type WebPaletteGenerator = PaletteGenerator<FetchClient, DomPaletteView, BrowserClipboard>;

/// Entry point run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console::install_panic_hook();
    let document = document()?;
    if document.ready_state() == "loading" {
        let boot_later = Closure::once_into_js(|| {
            if let Err(err) = boot() {
                console::console_error(&format!("hue failed to start: {}", js_error_message(&err)));
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", boot_later.unchecked_ref())?;
        Ok(())
    } else {
        boot()
    }
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no global document"))
}

fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = document()?;

    let (config, config_error) = match load_config(&document) {
        Ok(config) => (config, None),
        Err(message) => (HueConfig::default(), Some(message)),
    };
    console::init_logging(&config.log_directive);
    if let Some(message) = config_error {
        warn!(%message, "using default configuration");
    }

    let themes = mount_theme_manager(&window, &document, &config)?;
    let palette = mount_palette_generator(&document, &config)?;
    debug!(theme = %themes.borrow().theme(), "front-end mounted");

    spawn_local(run_generation(palette));
    Ok(())
}

/// Read the inline config element; absent means defaults.
fn load_config(document: &Document) -> Result<HueConfig, String> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(HueConfig::default());
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(HueConfig::default());
    }
    HueConfig::from_json_str(&text).map_err(|err| err.to_string())
}

/// Attach a page-lifetime listener.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn mount_theme_manager(
    window: &web_sys::Window,
    document: &Document,
    config: &HueConfig,
) -> Result<Rc<RefCell<WebThemeManager>>, JsValue> {
    let view = DomThemeView::new(document.clone(), config)?;
    let toggles = view.toggles();
    let mut manager = ThemeManager::from_config(config, LocalStorageStore::new(window), view);
    manager.initialize();
    let manager = Rc::new(RefCell::new(manager));

    for toggle in toggles {
        let manager = Rc::clone(&manager);
        let source = toggle.clone();
        listen(&toggle, "click", move |_event| {
            let name = source.get_attribute(THEME_ATTR).unwrap_or_default();
            manager.borrow_mut().set_theme(&name);
        })?;
    }
    Ok(manager)
}

fn mount_palette_generator(
    document: &Document,
    config: &HueConfig,
) -> Result<Rc<RefCell<WebPaletteGenerator>>, JsValue> {
    let ids = &config.dom;
    let base_color: HtmlInputElement = element_by_id(document, &ids.base_color)?;
    let mode: HtmlSelectElement = element_by_id(document, &ids.mode)?;
    let count: HtmlInputElement = element_by_id(document, &ids.count)?;
    let button: Element = element_by_id(document, &ids.generate_button)?;
    let container: Element = element_by_id(document, &ids.palette)?;

    let form = PaletteForm::from_controls(&base_color.value(), &mode.value(), &count.value());
    let generator = PaletteGenerator::from_config(
        config,
        form,
        FetchClient::new(config.endpoint.clone()),
        DomPaletteView::new(document.clone(), container.clone()),
        BrowserClipboard,
    );
    info!(
        base_color = generator.form().base_color(),
        mode = generator.form().mode(),
        count = generator.form().count(),
        "palette generator loaded"
    );
    let generator = Rc::new(RefCell::new(generator));

    {
        let generator = Rc::clone(&generator);
        let control = base_color.clone();
        listen(&base_color, "input", move |_event| {
            generator.borrow_mut().form_mut().set_base_color(&control.value());
        })?;
    }
    {
        let generator = Rc::clone(&generator);
        let control = mode.clone();
        listen(&mode, "change", move |_event| {
            generator.borrow_mut().form_mut().set_mode(&control.value());
        })?;
    }
    {
        let generator = Rc::clone(&generator);
        let control = count.clone();
        listen(&count, "change", move |_event| {
            generator.borrow_mut().form_mut().set_count_input(&control.value());
        })?;
    }
    {
        let generator = Rc::clone(&generator);
        listen(&button, "click", move |_event| {
            spawn_local(run_generation(Rc::clone(&generator)));
        })?;
    }
    {
        // One delegated listener survives every re-render of the swatches.
        let generator = Rc::clone(&generator);
        listen(&container, "click", move |event| {
            let hex = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| swatch_hex_for_target(&target));
            if let Some(hex) = hex {
                generator.borrow_mut().copy_swatch(&hex);
            }
        })?;
    }

    Ok(generator)
}

/// One generate round-trip without holding the generator across the await.
async fn run_generation(generator: Rc<RefCell<WebPaletteGenerator>>) {
    let (pending, client) = {
        let mut generator = generator.borrow_mut();
        (generator.begin_generation(), generator.client().clone())
    };
    let outcome = client.generate(&pending.request).await;
    generator
        .borrow_mut()
        .finish_generation(pending.ticket, outcome);
}
