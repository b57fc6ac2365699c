//! Form Validator
//!
//! Flags required fields that are blank after trimming.

use std::rc::Rc;

use crate::config::{INVALID_CLASS, REQUIRED_SELECTOR};
use crate::view::View;

pub struct FormValidator<V: View> {
    view: Rc<V>,
}

impl<V: View> FormValidator<V> {
    pub fn new(view: Rc<V>) -> Self {
        Self { view }
    }

    /// Mark every blank required field invalid and clear the rest.
    /// A missing form counts as valid. Submission is left to the caller.
    pub fn validate(&self, form_id: &str) -> bool {
        let Some(form) = self.view.element_by_id(form_id) else {
            return true;
        };

        let mut valid = true;
        for field in self.view.query_all(&form, REQUIRED_SELECTOR) {
            if self.view.value(&field).trim().is_empty() {
                self.view.add_class(&field, INVALID_CLASS);
                valid = false;
            } else {
                self.view.remove_class(&field, INVALID_CLASS);
            }
        }
        valid
    }
}
