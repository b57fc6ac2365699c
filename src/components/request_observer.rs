//! Request Lifecycle Observer
//!
//! Turns htmx request lifecycle events into log lines and toasts.

use serde::Deserialize;

use crate::models::Severity;
use crate::view::View;

use super::ToastService;

pub const BEFORE_REQUEST_EVENT: &str = "htmx:beforeRequest";
pub const AFTER_REQUEST_EVENT: &str = "htmx:afterRequest";
pub const RESPONSE_ERROR_EVENT: &str = "htmx:responseError";

/// A request lifecycle event dispatched by htmx on `document.body`
#[derive(Debug, Clone, PartialEq)]
pub enum RequestEvent {
    BeforeRequest { path: String },
    AfterRequest { path: String, successful: bool, response_text: String },
    ResponseError { detail: String },
}

// ========================
// Event Detail Decoding
// ========================

/// The fields read off an htmx event `detail` object
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestDetail {
    pub path: Option<String>,
    pub path_info: Option<PathInfo>,
    pub successful: bool,
    pub xhr: Option<XhrDetail>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathInfo {
    pub request_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct XhrDetail {
    pub response: Option<String>,
}

impl RequestDetail {
    pub fn path(&self) -> String {
        self.path
            .clone()
            .or_else(|| self.path_info.as_ref().and_then(|p| p.request_path.clone()))
            .unwrap_or_default()
    }

    pub fn response_text(&self) -> String {
        self.xhr
            .as_ref()
            .and_then(|x| x.response.clone())
            .unwrap_or_default()
    }

    /// Map a decode attempt onto an event; an unreadable detail yields none
    pub fn decode_event<E: std::fmt::Display>(
        event_name: &str,
        decoded: Result<Self, E>,
    ) -> Option<RequestEvent> {
        match decoded {
            Ok(detail) => detail.into_event(event_name),
            Err(e) => {
                log::warn!("unreadable {} detail: {}", event_name, e);
                None
            }
        }
    }

    /// Map a decoded detail onto the event named `event_name`
    pub fn into_event(self, event_name: &str) -> Option<RequestEvent> {
        match event_name {
            BEFORE_REQUEST_EVENT => Some(RequestEvent::BeforeRequest { path: self.path() }),
            AFTER_REQUEST_EVENT => Some(RequestEvent::AfterRequest {
                path: self.path(),
                successful: self.successful,
                response_text: self.response_text(),
            }),
            RESPONSE_ERROR_EVENT => {
                let detail = self
                    .error
                    .clone()
                    .unwrap_or_else(|| format!("request to {} failed", self.path()));
                Some(RequestEvent::ResponseError { detail })
            }
            _ => None,
        }
    }
}

// ========================
// Observer
// ========================

pub struct RequestObserver<V: View> {
    toasts: ToastService<V>,
    success_marker: String,
}

impl<V: View> RequestObserver<V> {
    pub fn new(toasts: ToastService<V>, success_marker: impl Into<String>) -> Self {
        Self {
            toasts,
            success_marker: success_marker.into(),
        }
    }

    pub fn handle(&self, event: &RequestEvent) {
        match event {
            RequestEvent::BeforeRequest { path } => {
                log::info!("Request starting: {}", path);
            }
            RequestEvent::AfterRequest {
                path,
                successful,
                response_text,
            } => {
                log::info!("Request completed: {}", path);
                if !successful {
                    self.toasts
                        .show("Request failed. Please try again.", Severity::Danger);
                } else if response_text.contains(&self.success_marker) {
                    self.toasts
                        .show("Video generated successfully!", Severity::Success);
                }
            }
            RequestEvent::ResponseError { detail } => {
                log::error!("Request error: {}", detail);
                self.toasts.show(
                    "Connection error. Check if the API server is running.",
                    Severity::Danger,
                );
            }
        }
    }
}
