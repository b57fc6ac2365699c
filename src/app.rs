//! Client Form UI
//!
//! Owns every page behavior and the shared services they run on.

use std::rc::Rc;

use dom_hotkeys::KeyPress;

use crate::components::{
    use_example, AutoSave, FormValidator, RequestEvent, RequestObserver, SubmitShortcut,
    ThemeToggle, ToastService, UploadPreview,
};
use crate::config::UiConfig;
use crate::error::UiResult;
use crate::models::{Severity, Theme, UploadedFile};
use crate::platform::Clipboard;
use crate::store::KeyValueStore;
use crate::tasks::Scheduler;
use crate::view::View;

/// Platform services injected into the UI
#[derive(Clone)]
pub struct Services {
    pub store: Rc<dyn KeyValueStore>,
    pub scheduler: Rc<dyn Scheduler>,
    pub clipboard: Rc<dyn Clipboard>,
}

pub struct ClientFormUi<V: View> {
    view: Rc<V>,
    services: Services,
    config: UiConfig,
    toasts: ToastService<V>,
    upload: UploadPreview<V>,
    requests: RequestObserver<V>,
    validator: FormValidator<V>,
    theme: ThemeToggle<V>,
    auto_save: AutoSave<V>,
    shortcut: SubmitShortcut<V>,
}

impl<V: View> ClientFormUi<V> {
    pub fn new(view: Rc<V>, services: Services, config: UiConfig) -> Self {
        let toasts = ToastService::new(
            view.clone(),
            services.scheduler.clone(),
            services.clipboard.clone(),
            config.toast_lifetime(),
        );
        Self {
            upload: UploadPreview::new(view.clone()),
            requests: RequestObserver::new(toasts.clone(), config.success_marker.clone()),
            validator: FormValidator::new(view.clone()),
            theme: ThemeToggle::new(
                view.clone(),
                services.store.clone(),
                config.theme_key.clone(),
                config.theme_attribute.clone(),
            ),
            auto_save: AutoSave::new(view.clone(), services.store.clone()),
            shortcut: SubmitShortcut::new(view.clone()),
            toasts,
            view,
            services,
            config,
        }
    }

    /// A fresh instance over the same view and services with `config` applied
    pub fn with_config(&self, config: UiConfig) -> Self {
        Self::new(self.view.clone(), self.services.clone(), config)
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // ========================
    // Page Lifecycle
    // ========================

    /// Apply the saved theme; runs before the document is interactive
    pub fn restore_theme(&self) -> Option<String> {
        self.theme.restore()
    }

    /// Wire auto-save for every configured form. Returns how many forms had fields wired.
    pub fn register_auto_save(&self) -> usize {
        self.config
            .auto_save_forms
            .iter()
            .filter(|form_id| self.auto_save.attach(form_id) > 0)
            .count()
    }

    // ========================
    // Event Entry Points
    // ========================

    pub fn file_selected(&self, input: &V::Node, file: Option<UploadedFile>) {
        self.upload.file_selected(input, file);
    }

    pub fn request_event(&self, event: &RequestEvent) {
        self.requests.handle(event);
    }

    /// Returns true when the key press was consumed
    pub fn key_pressed(&self, press: &KeyPress) -> bool {
        self.shortcut.handle(press)
    }

    // ========================
    // Markup-Callable Operations
    // ========================

    pub fn show_toast(&self, message: &str, severity: Severity) -> Option<V::Node> {
        self.toasts.show(message, severity)
    }

    pub fn copy_to_clipboard(&self, text: &str) {
        self.toasts.copy_to_clipboard(text);
    }

    pub fn validate_form(&self, form_id: &str) -> bool {
        self.validator.validate(form_id)
    }

    pub fn toggle_theme(&self) -> UiResult<Theme> {
        self.theme.toggle()
    }

    pub fn auto_save_form(&self, form_id: &str) -> usize {
        self.auto_save.attach(form_id)
    }

    pub fn use_example(&self, prompt: &str) -> bool {
        use_example(&*self.view, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AUTO_SAVE_FORMS, TOAST_CONTAINER_ID};
    use crate::platform::Completion;
    use crate::store::MemoryStore;
    use crate::tasks::ManualScheduler;
    use crate::view::fake::FakeDocument;
    use std::time::Duration;

    struct OkClipboard(Rc<ManualScheduler>);

    impl Clipboard for OkClipboard {
        fn write_text(&self, _text: &str, done: Completion<UiResult<()>>) {
            self.0.defer(Box::new(move || done(Ok(()))));
        }
    }

    struct Harness {
        doc: Rc<FakeDocument>,
        store: Rc<MemoryStore>,
        scheduler: Rc<ManualScheduler>,
        ui: ClientFormUi<FakeDocument>,
    }

    fn harness(store: MemoryStore) -> Harness {
        let doc = Rc::new(FakeDocument::new());
        let store = Rc::new(store);
        let scheduler = Rc::new(ManualScheduler::new());
        let services = Services {
            store: store.clone(),
            scheduler: scheduler.clone(),
            clipboard: Rc::new(OkClipboard(scheduler.clone())),
        };
        let ui = ClientFormUi::new(doc.clone(), services, UiConfig::default());
        Harness {
            doc,
            store,
            scheduler,
            ui,
        }
    }

    #[test]
    fn test_registers_only_the_fixed_forms() {
        let h = harness(MemoryStore::with_entries([
            ("text-to-video-form_prompt", "a cat surfing"),
            ("gallery-form_query", "ignored"),
        ]));
        let body = h.doc.body_id();
        let mut prompts = Vec::new();
        for form_id in AUTO_SAVE_FORMS {
            let form = h.doc.add(body, "form", &[("id", form_id)]);
            prompts.push(h.doc.add(form, "textarea", &[("name", "prompt")]));
        }
        let gallery = h.doc.add(body, "form", &[("id", "gallery-form")]);
        let query = h.doc.add(gallery, "input", &[("name", "query")]);

        assert_eq!(h.ui.register_auto_save(), 3);
        assert_eq!(h.doc.value(&prompts[0]), "a cat surfing");
        assert_eq!(h.doc.value(&query), "");
        assert_eq!(h.doc.listener_count(query, "change"), 0);

        h.doc.change_value(prompts[2], "restyle as anime").unwrap();
        assert_eq!(
            h.store.get("video-to-video-form_prompt").as_deref(),
            Some("restyle as anime")
        );
    }

    #[test]
    fn test_register_skips_empty_forms() {
        let h = harness(MemoryStore::new());
        h.doc.add(h.doc.body_id(), "form", &[("id", "image-to-video-form")]);
        assert_eq!(h.ui.register_auto_save(), 0);
    }

    #[test]
    fn test_theme_restore_then_toggle() {
        let h = harness(MemoryStore::with_entries([("theme", "dark")]));
        assert_eq!(h.ui.restore_theme().as_deref(), Some("dark"));
        assert_eq!(h.ui.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(h.store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_with_config_applies_late_settings() {
        let h = harness(MemoryStore::with_entries([("vg-theme", "dark")]));
        assert!(h.ui.restore_theme().is_none());

        let config = UiConfig::from_page_block(Some(r#"{"themeKey": "vg-theme", "toastLifetimeMs": 500}"#));
        let ui = h.ui.with_config(config);
        assert_eq!(ui.restore_theme().as_deref(), Some("dark"));

        ui.show_toast("short", Severity::Info);
        let container = h.doc.element_by_id(TOAST_CONTAINER_ID).unwrap();
        h.scheduler.advance(Duration::from_millis(500));
        assert!(h.doc.children(container).is_empty());
    }

    #[test]
    fn test_copy_then_toast_expires() {
        let h = harness(MemoryStore::new());
        h.ui.copy_to_clipboard("seed 42");
        h.scheduler.run_until_idle();

        let container = h.doc.element_by_id(TOAST_CONTAINER_ID).unwrap();
        assert_eq!(h.doc.children(container).len(), 1);

        h.scheduler.advance(Duration::from_millis(3000));
        assert!(h.doc.children(container).is_empty());
    }

    #[test]
    fn test_shortcut_and_examples_route_through_view() {
        let h = harness(MemoryStore::new());
        let form = h.doc.add(h.doc.body_id(), "form", &[("id", "text-to-video-form")]);
        let prompt = h.doc.add(form, "textarea", &[("id", "prompt"), ("name", "prompt")]);

        assert!(h.ui.use_example("A lighthouse at dusk"));
        assert_eq!(h.doc.value(&prompt), "A lighthouse at dusk");
        assert!(h.ui.key_pressed(&KeyPress::new("Enter").with_ctrl()));
        assert_eq!(h.doc.submitted(), vec![form]);
    }

    #[test]
    fn test_validate_and_request_events() {
        let h = harness(MemoryStore::new());
        let form = h.doc.add(h.doc.body_id(), "form", &[("id", "image-to-video-form")]);
        let image = h.doc.add(form, "input", &[("name", "image"), ("required", "")]);

        assert!(!h.ui.validate_form("image-to-video-form"));
        assert!(h.doc.has_class(image, "is-invalid"));

        h.ui.request_event(&RequestEvent::AfterRequest {
            path: "/generate".into(),
            successful: false,
            response_text: String::new(),
        });
        let container = h.doc.element_by_id(TOAST_CONTAINER_ID).unwrap();
        assert_eq!(h.doc.text_content(container), "Request failed. Please try again.");
    }
}
