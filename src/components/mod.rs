//! UI Components
//!
//! Page behaviors, each written against the [`View`](crate::view::View) seam.

mod auto_save;
mod form_validator;
mod prompt_example;
mod request_observer;
mod submit_shortcut;
mod theme;
mod toast;
mod upload_preview;

pub use auto_save::AutoSave;
pub use form_validator::FormValidator;
pub use prompt_example::use_example;
pub use request_observer::{
    RequestDetail, RequestEvent, RequestObserver, AFTER_REQUEST_EVENT, BEFORE_REQUEST_EVENT,
    RESPONSE_ERROR_EVENT,
};
pub use submit_shortcut::SubmitShortcut;
pub use theme::ThemeToggle;
pub use toast::ToastService;
pub use upload_preview::UploadPreview;
