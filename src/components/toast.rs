//! Toast Notifications
//!
//! Transient, auto-dismissing notifications stacked in a fixed container,
//! plus the clipboard helper that reports through them.

use std::rc::Rc;
use std::time::Duration;

use crate::config::TOAST_CONTAINER_ID;
use crate::models::{Severity, Toast};
use crate::platform::Clipboard;
use crate::tasks::Scheduler;
use crate::view::View;

const CONTAINER_CLASSES: &[&str] = &["toast-container", "position-fixed", "bottom-0", "end-0", "p-3"];

const CLOSE_BUTTON_CLASSES: &[&str] = &["btn-close", "btn-close-white", "me-2", "m-auto"];

/// Shows toasts; each call produces exactly one node
pub struct ToastService<V: View> {
    view: Rc<V>,
    scheduler: Rc<dyn Scheduler>,
    clipboard: Rc<dyn Clipboard>,
    lifetime: Duration,
}

impl<V: View> Clone for ToastService<V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            scheduler: self.scheduler.clone(),
            clipboard: self.clipboard.clone(),
            lifetime: self.lifetime,
        }
    }
}

impl<V: View> ToastService<V> {
    pub fn new(
        view: Rc<V>,
        scheduler: Rc<dyn Scheduler>,
        clipboard: Rc<dyn Clipboard>,
        lifetime: Duration,
    ) -> Self {
        Self {
            view,
            scheduler,
            clipboard,
            lifetime,
        }
    }

    /// Show `message`, auto-dismissed after the configured lifetime.
    /// Returns `None` only when the document has no body to host the container.
    pub fn show(&self, message: &str, severity: Severity) -> Option<V::Node> {
        let toast = Toast::new(message, severity, self.lifetime);
        let container = self.ensure_container()?;
        let (node, close) = self.build(&toast);
        self.view.append_child(&container, &node);
        self.view.add_class(&node, "show");
        log::debug!("toast [{}]: {}", toast.severity, toast.message);

        let (view, target) = (self.view.clone(), node.clone());
        self.view.listen(
            &close,
            "click",
            Box::new(move || {
                dismiss(&*view, &target);
                Ok(())
            }),
        );

        let (view, target) = (self.view.clone(), node.clone());
        self.scheduler
            .defer_after(toast.lifetime, Box::new(move || dismiss(&*view, &target)));

        Some(node)
    }

    /// Copy `text` and report the outcome as a toast
    pub fn copy_to_clipboard(&self, text: &str) {
        let toasts = self.clone();
        self.clipboard.write_text(
            text,
            Box::new(move |result| match result {
                Ok(()) => {
                    toasts.show("Copied to clipboard!", Severity::Success);
                }
                Err(e) => {
                    log::warn!("{}", e);
                    toasts.show("Failed to copy", Severity::Danger);
                }
            }),
        );
    }

    /// The one container node, created under `body` on first use
    fn ensure_container(&self) -> Option<V::Node> {
        if let Some(existing) = self.view.element_by_id(TOAST_CONTAINER_ID) {
            return Some(existing);
        }
        let body = self.view.body()?;
        let container = self.view.create_element("div");
        self.view.set_attribute(&container, "id", TOAST_CONTAINER_ID);
        add_classes(&*self.view, &container, CONTAINER_CLASSES);
        self.view.append_child(&body, &container);
        Some(container)
    }

    /// Build the toast node; returns it with its close button
    fn build(&self, toast: &Toast) -> (V::Node, V::Node) {
        let view = &*self.view;

        let root = view.create_element("div");
        for class in toast.classes() {
            view.add_class(&root, &class);
        }
        view.set_attribute(&root, "role", "alert");

        let row = view.create_element("div");
        view.add_class(&row, "d-flex");

        let body = view.create_element("div");
        view.add_class(&body, "toast-body");
        view.set_text(&body, &toast.message);

        let close = view.create_element("button");
        view.set_attribute(&close, "type", "button");
        view.set_attribute(&close, "aria-label", "Close");
        add_classes(view, &close, CLOSE_BUTTON_CLASSES);

        view.append_child(&row, &body);
        view.append_child(&row, &close);
        view.append_child(&root, &row);
        (root, close)
    }
}

fn add_classes<V: View>(view: &V, node: &V::Node, classes: &[&str]) {
    for class in classes {
        view.add_class(node, class);
    }
}

fn dismiss<V: View>(view: &V, toast: &V::Node) {
    view.remove_class(toast, "show");
    view.remove(toast);
}
