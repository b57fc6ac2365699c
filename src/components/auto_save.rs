//! Auto-Save Manager
//!
//! Persists form field values on change and restores them into empty
//! fields when the form is wired up.

use std::rc::Rc;

use crate::config::FIELD_SELECTOR;
use crate::models::field_key;
use crate::store::KeyValueStore;
use crate::view::View;

pub struct AutoSave<V: View> {
    view: Rc<V>,
    store: Rc<dyn KeyValueStore>,
}

impl<V: View> AutoSave<V> {
    pub fn new(view: Rc<V>, store: Rc<dyn KeyValueStore>) -> Self {
        Self { view, store }
    }

    /// Restore saved values into the form's empty fields and save every
    /// later change. Returns the number of fields wired; 0 if the form is absent.
    pub fn attach(&self, form_id: &str) -> usize {
        let Some(form) = self.view.element_by_id(form_id) else {
            return 0;
        };
        let fields = self.view.query_all(&form, FIELD_SELECTOR);

        for field in &fields {
            let key = field_key(form_id, &self.field_name(field));
            if let Some(saved) = self.store.get(&key).filter(|v| !v.is_empty()) {
                if self.view.value(field).is_empty() {
                    self.view.set_value(field, &saved);
                }
            }
        }

        for field in &fields {
            let (view, store) = (self.view.clone(), self.store.clone());
            let (form_id, target) = (form_id.to_string(), field.clone());
            self.view.listen(
                field,
                "change",
                Box::new(move || {
                    let name = view.attribute(&target, "name").unwrap_or_default();
                    store.set(&field_key(&form_id, &name), &view.value(&target))
                }),
            );
        }

        log::debug!("auto-save attached to #{} ({} fields)", form_id, fields.len());
        fields.len()
    }

    fn field_name(&self, field: &V::Node) -> String {
        self.view.attribute(field, "name").unwrap_or_default()
    }
}
