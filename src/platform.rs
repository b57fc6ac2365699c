//! Browser Capabilities
//!
//! Clipboard and file-read ports with completion callbacks, plus their
//! browser-backed and in-memory implementations.

use std::rc::Rc;

use base64::Engine;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::{describe_js, UiError, UiResult};
use crate::tasks::Scheduler;

/// One-shot completion callback
pub type Completion<T> = Box<dyn FnOnce(T)>;

/// System clipboard write access
pub trait Clipboard {
    /// Write `text`; `done` runs on a later turn with the outcome
    fn write_text(&self, text: &str, done: Completion<UiResult<()>>);
}

/// Binary content of a selected file
pub trait FileContent {
    /// Read the content as a `data:` URL. `on_load` runs on a later turn;
    /// a failed read never calls it.
    fn read_data_url(&self, mime_type: &str, on_load: Completion<String>);
}

// ========================
// Browser Implementations
// ========================

/// `navigator.clipboard` wrapper
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str, done: Completion<UiResult<()>>) {
        let promise = web_sys::window()
            .map(|win| win.navigator())
            .and_then(|nav| js_sys::Reflect::get(&nav, &JsValue::from_str("clipboard")).ok())
            .filter(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
            .map(|clipboard| clipboard.unchecked_into::<web_sys::Clipboard>().write_text(text));

        leptos::task::spawn_local(async move {
            let result = match promise {
                Some(promise) => JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| UiError::Clipboard(describe_js(&e))),
                None => Err(UiError::Unavailable("navigator.clipboard")),
            };
            done(result);
        });
    }
}

/// A `File` picked through an `<input type="file">`
#[derive(Debug, Clone)]
pub struct DomFile {
    file: web_sys::File,
}

impl DomFile {
    pub fn new(file: web_sys::File) -> Self {
        Self { file }
    }
}

impl FileContent for DomFile {
    fn read_data_url(&self, _mime_type: &str, on_load: Completion<String>) {
        let Ok(reader) = web_sys::FileReader::new() else {
            return;
        };
        let target = reader.clone();
        let onload = Closure::once(move |_: web_sys::Event| {
            if let Some(url) = target.result().ok().and_then(|r| r.as_string()) {
                on_load(url);
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        let _ = reader.read_as_data_url(&self.file);
    }
}

// ========================
// In-Memory Implementations
// ========================

/// File bytes held in memory; encoding happens on a deferred task
pub struct MemoryFile {
    bytes: Vec<u8>,
    scheduler: Rc<dyn Scheduler>,
}

impl MemoryFile {
    pub fn new(bytes: Vec<u8>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self { bytes, scheduler }
    }
}

impl FileContent for MemoryFile {
    fn read_data_url(&self, mime_type: &str, on_load: Completion<String>) {
        let url = data_url(mime_type, &self.bytes);
        self.scheduler.defer(Box::new(move || on_load(url)));
    }
}

/// Encode bytes as a base64 `data:` URL
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
