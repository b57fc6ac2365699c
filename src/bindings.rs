//! JS Bindings
//!
//! Functions exported to page markup, and the DOM wiring run at startup.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::{ClientFormUi, Services};
use crate::components::{
    RequestDetail, AFTER_REQUEST_EVENT, BEFORE_REQUEST_EVENT, RESPONSE_ERROR_EVENT,
};
use crate::config::{UiConfig, CONFIG_ELEMENT_ID};
use crate::context::{self, PageUi};
use crate::error::{UiError, UiResult};
use crate::format;
use crate::models::{Severity, UploadedFile};
use crate::platform::{BrowserClipboard, DomFile};
use crate::store::{BrowserStorage, KeyValueStore, MemoryStore};
use crate::tasks::BrowserScheduler;
use crate::view::{DomView, View};

// ========================
// Startup
// ========================

/// Text of the optional `#ui-config` JSON block
fn config_block(view: &DomView) -> Option<String> {
    view.element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
}

/// Build the page instance over the live document and install it.
/// Also reports whether the config block was already parsed into the document.
pub fn boot() -> UiResult<(Rc<PageUi>, bool)> {
    let view = DomView::current().ok_or(UiError::Unavailable("document"))?;
    let block = config_block(&view);
    let config = UiConfig::from_page_block(block.as_deref());

    let store: Rc<dyn KeyValueStore> = match BrowserStorage::local() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("localStorage unavailable; settings will not persist");
            Rc::new(MemoryStore::new())
        }
    };
    let services = Services {
        store,
        scheduler: Rc::new(BrowserScheduler),
        clipboard: Rc::new(BrowserClipboard),
    };

    let ui = Rc::new(ClientFormUi::new(Rc::new(view), services, config));
    context::install(ui.clone());
    Ok((ui, block.is_some()))
}

/// Run the DOM-ready wiring now, or once the document finishes parsing
pub fn when_dom_ready(ui: Rc<PageUi>, config_seen: bool) {
    if !ui.view().is_loading() {
        on_dom_ready(adopt_late_config(ui, config_seen));
        return;
    }
    let document = ui.view().document().clone();
    let on_ready = Closure::once(move |_: web_sys::Event| {
        on_dom_ready(adopt_late_config(ui, config_seen))
    });
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}

/// A config block placed after the script is only visible once parsing ends;
/// rebuild the page instance with it.
fn adopt_late_config(ui: Rc<PageUi>, config_seen: bool) -> Rc<PageUi> {
    if config_seen {
        return ui;
    }
    let Some(block) = config_block(ui.view()) else {
        return ui;
    };
    let config = UiConfig::from_page_block(Some(&block));
    log::set_max_level(config.log_level().to_level_filter());

    let late = Rc::new(ui.with_config(config));
    context::install(late.clone());
    late.restore_theme();
    late
}

fn on_dom_ready(ui: Rc<PageUi>) {
    bind_file_inputs(&ui);
    bind_request_events(&ui);

    let handle = ui.clone();
    dom_hotkeys::bind_global_keydown(move |press| handle.key_pressed(press));

    let forms = ui.register_auto_save();
    log::debug!("auto-save active on {} form(s)", forms);
    log::info!("Video generator web UI loaded");
}

fn bind_file_inputs(ui: &Rc<PageUi>) {
    for input in ui.view().file_inputs() {
        let handle = ui.clone();
        let target = input.clone();
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let file = target.files().and_then(|files| files.get(0)).map(|file| {
                UploadedFile::new(
                    file.name(),
                    file.type_(),
                    file.size() as u64,
                    Rc::new(DomFile::new(file)),
                )
            });
            let element: &web_sys::Element = target.as_ref();
            handle.file_selected(element, file);
        });
        let _ = input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        on_change.forget();
    }
}

fn bind_request_events(ui: &Rc<PageUi>) {
    let Some(body) = ui.view().document().body() else {
        return;
    };
    for name in [BEFORE_REQUEST_EVENT, AFTER_REQUEST_EVENT, RESPONSE_ERROR_EVENT] {
        let handle = ui.clone();
        let on_event = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let detail = ev
                .dyn_ref::<web_sys::CustomEvent>()
                .map(|custom| custom.detail())
                .unwrap_or(JsValue::UNDEFINED);
            let decoded = serde_wasm_bindgen::from_value::<RequestDetail>(detail);
            if let Some(event) = RequestDetail::decode_event(name, decoded) {
                handle.request_event(&event);
            }
        });
        let _ = body.add_event_listener_with_callback(name, on_event.as_ref().unchecked_ref());
        on_event.forget();
    }
}

// ========================
// Markup-Callable Functions
// ========================

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) {
    if let Some(ui) = context::page_ui() {
        ui.copy_to_clipboard(text);
    }
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, severity: Option<String>) {
    let severity = severity.as_deref().map(Severity::parse).unwrap_or_default();
    if let Some(ui) = context::page_ui() {
        ui.show_toast(message, severity);
    }
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str) -> bool {
    context::page_ui().map_or(true, |ui| ui.validate_form(form_id))
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<(), JsValue> {
    if let Some(ui) = context::page_ui() {
        ui.toggle_theme()?;
    }
    Ok(())
}

#[wasm_bindgen(js_name = autoSaveForm)]
pub fn auto_save_form(form_id: &str) {
    if let Some(ui) = context::page_ui() {
        ui.auto_save_form(form_id);
    }
}

#[wasm_bindgen(js_name = useExample)]
pub fn use_example(prompt: &str) {
    if let Some(ui) = context::page_ui() {
        ui.use_example(prompt);
    }
}

#[wasm_bindgen(js_name = formatFileSize)]
pub fn format_file_size(bytes: f64) -> String {
    format::format_file_size(bytes)
}

#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration(seconds: f64) -> String {
    format::format_duration(seconds)
}
