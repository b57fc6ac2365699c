//! Submit Shortcut
//!
//! Ctrl/Cmd+Enter submits the form that contains the focused element.

use std::rc::Rc;

use dom_hotkeys::{KeyChord, KeyPress};

use crate::view::View;

pub struct SubmitShortcut<V: View> {
    view: Rc<V>,
    chord: KeyChord,
}

impl<V: View> SubmitShortcut<V> {
    pub fn new(view: Rc<V>) -> Self {
        Self {
            view,
            chord: KeyChord::ctrl_or_meta("Enter"),
        }
    }

    /// Returns true when a form was submitted and the default action should be prevented
    pub fn handle(&self, press: &KeyPress) -> bool {
        if !self.chord.matches(press) {
            return false;
        }
        let Some(form) = self
            .view
            .active_element()
            .and_then(|focused| self.view.closest(&focused, "form"))
        else {
            return false;
        };
        self.view.request_submit(&form);
        true
    }
}
