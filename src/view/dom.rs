//! Browser-backed view over `web_sys::Document`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::{Listener, View};

/// The live document
#[derive(Debug, Clone)]
pub struct DomView {
    document: Document,
}

impl DomView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// View over `window.document`, if running in a page
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// True while the parser is still building the document
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    /// Every `<input type="file">` currently in the document
    pub fn file_inputs(&self) -> Vec<web_sys::HtmlInputElement> {
        collect_elements(self.document.query_selector_all("input[type=\"file\"]"))
            .into_iter()
            .filter_map(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .collect()
    }
}

fn collect_elements(list: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl View for DomView {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn document_element(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn create_element(&self, tag: &str) -> Element {
        self.document
            .create_element(tag)
            .unwrap_or_else(|e| wasm_bindgen::throw_val(e))
    }

    fn query_first(&self, scope: &Element, selector: &str) -> Option<Element> {
        scope.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, scope: &Element, selector: &str) -> Vec<Element> {
        collect_elements(scope.query_selector_all(selector))
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).ok().flatten()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<web_sys::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = node.dyn_ref::<web_sys::HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = node.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = node.dyn_ref::<web_sys::HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn focus(&self, node: &Element) {
        if let Some(el) = node.dyn_ref::<web_sys::HtmlElement>() {
            let _ = el.focus();
        }
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn append_text(&self, parent: &Element, text: &str) {
        let _ = parent.append_child(&self.document.create_text_node(text));
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn request_submit(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<web_sys::HtmlFormElement>() {
            let _ = form.request_submit();
        }
    }

    fn listen(&self, node: &Element, event: &str, mut handler: Listener) {
        let callback = Closure::<dyn FnMut(web_sys::Event) -> Result<(), JsValue>>::new(
            move |_: web_sys::Event| handler().map_err(JsValue::from),
        );
        let _ = node.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        callback.forget();
    }
}
