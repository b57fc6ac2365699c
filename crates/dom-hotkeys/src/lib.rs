//! DOM Hotkeys
//!
//! Key chord matching and a global `keydown` binding.
//! Matching works on plain [`KeyPress`] values so it can be tested off the browser.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Modifier requirement for a chord
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    /// No modifier required
    None,
    /// Ctrl on Windows/Linux or Cmd on macOS; either satisfies the chord
    CtrlOrMeta,
    Shift,
    Alt,
}

/// A key plus a required modifier. Extra modifiers do not prevent a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub modifier: Modifier,
}

/// Snapshot of a keyboard event
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
        }
    }
}

impl KeyChord {
    pub fn new(key: impl Into<String>, modifier: Modifier) -> Self {
        Self {
            key: key.into(),
            modifier,
        }
    }

    /// Ctrl+`key` or Cmd+`key`
    pub fn ctrl_or_meta(key: impl Into<String>) -> Self {
        Self::new(key, Modifier::CtrlOrMeta)
    }

    pub fn matches(&self, press: &KeyPress) -> bool {
        if press.key != self.key {
            return false;
        }
        match self.modifier {
            Modifier::None => true,
            Modifier::CtrlOrMeta => press.ctrl || press.meta,
            Modifier::Shift => press.shift,
            Modifier::Alt => press.alt,
        }
    }
}

/// Bind a document-level keydown handler.
/// When `handler` returns true the browser default action is prevented.
pub fn bind_global_keydown<F>(handler: F)
where
    F: Fn(&KeyPress) -> bool + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if handler(&KeyPress::from_event(&ev)) {
            ev.prevent_default();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}
