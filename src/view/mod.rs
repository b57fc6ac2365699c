//! View Layer
//!
//! Typed DOM access used by the components. `DomView` talks to the real
//! document; tests drive the components through an in-memory fake.

mod dom;
#[cfg(test)]
pub(crate) mod fake;

pub use dom::DomView;

use crate::error::UiResult;

/// Event handler attached through [`View::listen`]. An `Err` escapes the
/// listener as an uncaught fault.
pub type Listener = Box<dyn FnMut() -> UiResult<()>>;

/// Typed accessors over a document
pub trait View: 'static {
    /// Handle to one element
    type Node: Clone + PartialEq + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn body(&self) -> Option<Self::Node>;

    /// The root `<html>` element
    fn document_element(&self) -> Option<Self::Node>;

    fn active_element(&self) -> Option<Self::Node>;

    fn create_element(&self, tag: &str) -> Self::Node;

    /// First descendant of `scope` matching `selector`
    fn query_first(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// All descendants of `scope` matching `selector`, in document order
    fn query_all(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// `node` itself or its nearest ancestor matching `selector`
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    fn set_text(&self, node: &Self::Node, text: &str);

    /// Current value of a form control; empty for anything else
    fn value(&self, node: &Self::Node) -> String;

    fn set_value(&self, node: &Self::Node, value: &str);

    fn focus(&self, node: &Self::Node);

    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    /// Append `text` to `parent` as a text node
    fn append_text(&self, parent: &Self::Node, text: &str);

    /// Detach `node` from the document; no-op when already detached
    fn remove(&self, node: &Self::Node);

    fn request_submit(&self, form: &Self::Node);

    fn listen(&self, node: &Self::Node, event: &str, handler: Listener);
}
