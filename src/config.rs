//! UI Configuration
//!
//! Element ids, class names and tunables shared by the components. The
//! tunables can be overridden by a JSON block in the page:
//! `<script type="application/json" id="ui-config">{...}</script>`.

use std::time::Duration;

use serde::Deserialize;

use crate::error::UiResult;

// ========================
// DOM Contract
// ========================

pub const IMAGE_PREVIEW_ID: &str = "imagePreview";
pub const VIDEO_PREVIEW_ID: &str = "videoPreview";
pub const TOAST_CONTAINER_ID: &str = "toastContainer";
pub const PROMPT_ID: &str = "prompt";
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

pub const UPLOAD_WRAPPER_SELECTOR: &str = ".file-upload-wrapper";
pub const UPLOAD_LABEL_SELECTOR: &str = ".file-upload-label";
pub const FILE_NAME_SELECTOR: &str = ".file-name";
pub const HAS_FILE_CLASS: &str = "has-file";
pub const HIDDEN_CLASS: &str = "d-none";
pub const INVALID_CLASS: &str = "is-invalid";

pub const REQUIRED_SELECTOR: &str = "[required]";
pub const FIELD_SELECTOR: &str = "input, textarea, select";

/// Forms registered for auto-save at DOM-ready
pub const AUTO_SAVE_FORMS: [&str; 3] = [
    "text-to-video-form",
    "image-to-video-form",
    "video-to-video-form",
];

// ========================
// Tunables
// ========================

/// Page-level settings, every field optional in the JSON source
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Form ids wired for auto-save
    pub auto_save_forms: Vec<String>,
    /// How long a toast stays up
    pub toast_lifetime_ms: u64,
    /// Storage key holding the theme
    pub theme_key: String,
    /// Attribute on `<html>` carrying the theme
    pub theme_attribute: String,
    /// Response substring that marks a successful generation
    pub success_marker: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            auto_save_forms: AUTO_SAVE_FORMS.iter().map(|s| s.to_string()).collect(),
            toast_lifetime_ms: 3000,
            theme_key: "theme".to_string(),
            theme_attribute: "data-bs-theme".to_string(),
            success_marker: "alert-success".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(text: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse the page block, falling back to defaults when absent or malformed
    pub fn from_page_block(text: Option<&str>) -> Self {
        match text.map(str::trim).filter(|t| !t.is_empty()) {
            None => Self::default(),
            Some(text) => Self::from_json(text).unwrap_or_else(|e| {
                log::warn!("ignoring ui-config block: {}", e);
                Self::default()
            }),
        }
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
