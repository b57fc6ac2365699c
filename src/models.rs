//! Frontend Models
//!
//! Transient UI entities handled by the page glue.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::platform::FileContent;

/// Toast severity, mapped onto the `bg-{severity}` style class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }

    /// Parse a severity name as passed from markup; unknown names fall back to info
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "danger" => Severity::Danger,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub lifetime: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity, lifetime: Duration) -> Self {
        Self {
            message: message.into(),
            severity,
            lifetime,
        }
    }

    /// Style classes for the toast root node
    pub fn classes(&self) -> Vec<String> {
        let mut classes: Vec<String> = ["toast", "align-items-center", "text-white"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        classes.push(format!("bg-{}", self.severity));
        classes.push("border-0".to_string());
        classes
    }
}

/// Which preview element a selected file feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Video,
}

/// A user-selected file
#[derive(Clone)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub content: Rc<dyn FileContent>,
}

impl UploadedFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size: u64,
        content: Rc<dyn FileContent>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            content,
        }
    }

    /// Preview target decided by MIME prefix only
    pub fn preview_kind(&self) -> Option<PreviewKind> {
        if self.mime_type.starts_with("image/") {
            Some(PreviewKind::Image)
        } else if self.mime_type.starts_with("video/") {
            Some(PreviewKind::Video)
        } else {
            None
        }
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// The two theme values written by the toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Current theme as read off the document attribute; anything but "dark" is light
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Storage key for a persisted form field: `{formId}_{fieldName}`
pub fn field_key(form_id: &str, field_name: &str) -> String {
    format!("{}_{}", form_id, field_name)
}
