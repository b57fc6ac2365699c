//! UI Errors
//!
//! Failure categories surfaced by the page glue.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Common result type for UI operations
pub type UiResult<T> = Result<T, UiError>;

/// Errors raised by browser-facing operations
#[derive(Debug, Error)]
pub enum UiError {
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("storage write failed for key `{key}`: {reason}")]
    Storage { key: String, reason: String },

    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("browser api unavailable: {0}")]
    Unavailable(&'static str),
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Render a JS exception value for logs and error payloads
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
