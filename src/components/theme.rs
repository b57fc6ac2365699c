//! Theme Toggle
//!
//! Dark/light theme stored on the `<html>` element and in local storage.

use std::rc::Rc;

use crate::error::UiResult;
use crate::models::Theme;
use crate::store::KeyValueStore;
use crate::view::View;

pub struct ThemeToggle<V: View> {
    view: Rc<V>,
    store: Rc<dyn KeyValueStore>,
    key: String,
    attribute: String,
}

impl<V: View> ThemeToggle<V> {
    pub fn new(
        view: Rc<V>,
        store: Rc<dyn KeyValueStore>,
        key: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            view,
            store,
            key: key.into(),
            attribute: attribute.into(),
        }
    }

    /// Apply the stored theme, if any, to the document root.
    /// Returns the applied value.
    pub fn restore(&self) -> Option<String> {
        let saved = self.store.get(&self.key).filter(|v| !v.is_empty())?;
        let root = self.view.document_element()?;
        self.view.set_attribute(&root, &self.attribute, &saved);
        Some(saved)
    }

    /// Flip between dark and light and persist the result
    pub fn toggle(&self) -> UiResult<Theme> {
        let root = self.view.document_element();
        let current = root
            .as_ref()
            .and_then(|r| self.view.attribute(r, &self.attribute));
        let next = Theme::from_attribute(current.as_deref()).flipped();

        if let Some(root) = &root {
            self.view.set_attribute(root, &self.attribute, next.as_str());
        }
        self.store.set(&self.key, next.as_str())?;
        log::debug!("theme set to {}", next.as_str());
        Ok(next)
    }
}
