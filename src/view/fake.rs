//! In-memory document for component tests.
//!
//! Supports the selector subset the components use: `tag`, `.class`,
//! `[attr]` and comma-separated lists of those.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use super::{Listener, View};
use crate::error::UiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    value: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Default)]
struct State {
    nodes: Vec<NodeData>,
    active: Option<usize>,
    submitted: Vec<usize>,
}

const ROOT: usize = 0;
const BODY: usize = 1;

/// Tag reported for text nodes
pub const TEXT_TAG: &str = "#text";

pub struct FakeDocument {
    state: RefCell<State>,
    listeners: RefCell<HashMap<(usize, String), Vec<Listener>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        let doc = Self {
            state: RefCell::new(State::default()),
            listeners: RefCell::new(HashMap::new()),
        };
        let root = doc.create_element("html");
        let body = doc.create_element("body");
        debug_assert_eq!((root.0, body.0), (ROOT, BODY));
        doc.append_child(&root, &body);
        doc
    }

    pub fn body_id(&self) -> NodeId {
        NodeId(BODY)
    }

    /// Create `tag` under `parent` with the given attributes (`class` is split)
    pub fn add(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let node = self.create_element(tag);
        for (name, value) in attrs {
            if *name == "class" {
                for class in value.split_whitespace() {
                    self.add_class(&node, class);
                }
            } else {
                self.set_attribute(&node, name, value);
            }
        }
        self.append_child(&parent, &node);
        node
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.state.borrow().nodes[node.0].classes.iter().any(|c| c == class)
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.state.borrow().nodes[node.0].tag.clone()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.state.borrow().nodes[node.0]
            .children
            .iter()
            .map(|&c| NodeId(c))
            .collect()
    }

    /// Concatenated text of the subtree
    pub fn text_content(&self, node: NodeId) -> String {
        let state = self.state.borrow();
        let mut out = String::new();
        let mut stack = vec![node.0];
        while let Some(idx) = stack.pop() {
            out.push_str(&state.nodes[idx].text);
            stack.extend(state.nodes[idx].children.iter().rev());
        }
        out
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        let state = self.state.borrow();
        let mut cur = Some(node.0);
        while let Some(idx) = cur {
            if idx == ROOT {
                return true;
            }
            cur = state.nodes[idx].parent;
        }
        false
    }

    pub fn listener_count(&self, node: NodeId, event: &str) -> usize {
        self.listeners
            .borrow()
            .get(&(node.0, event.to_string()))
            .map_or(0, Vec::len)
    }

    /// Dispatch `event` to the listeners of `node`
    pub fn fire(&self, node: NodeId, event: &str) -> UiResult<()> {
        let key = (node.0, event.to_string());
        let mut handlers = self.listeners.borrow_mut().remove(&key).unwrap_or_default();
        let mut result = Ok(());
        for handler in handlers.iter_mut() {
            if let Err(e) = handler() {
                result = Err(e);
                break;
            }
        }
        let mut listeners = self.listeners.borrow_mut();
        let slot = listeners.entry(key).or_default();
        handlers.append(slot);
        *slot = handlers;
        result
    }

    /// Type into a control and fire `change`
    pub fn change_value(&self, node: NodeId, value: &str) -> UiResult<()> {
        self.set_value(&node, value);
        self.fire(node, "change")
    }

    pub fn submitted(&self) -> Vec<NodeId> {
        self.state.borrow().submitted.iter().map(|&i| NodeId(i)).collect()
    }

    fn matches(&self, idx: usize, selector: &str) -> bool {
        let state = self.state.borrow();
        let node = &state.nodes[idx];
        selector.split(',').map(str::trim).any(|part| {
            if let Some(class) = part.strip_prefix('.') {
                node.classes.iter().any(|c| c == class)
            } else if let Some(attr) = part.strip_prefix('[').and_then(|p| p.strip_suffix(']')) {
                node.attrs.contains_key(attr)
            } else {
                node.tag.eq_ignore_ascii_case(part)
            }
        })
    }

    fn descendants(&self, idx: usize) -> Vec<usize> {
        let state = self.state.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<usize> = state.nodes[idx].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(state.nodes[next].children.iter().rev());
        }
        out
    }

    fn is_control(&self, idx: usize) -> bool {
        matches!(
            self.state.borrow().nodes[idx].tag.as_str(),
            "input" | "textarea" | "select"
        )
    }
}

impl View for FakeDocument {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(ROOT)
            .into_iter()
            .find(|&idx| self.state.borrow().nodes[idx].attrs.get("id").map(String::as_str) == Some(id))
            .map(NodeId)
    }

    fn body(&self) -> Option<NodeId> {
        Some(NodeId(BODY))
    }

    fn document_element(&self) -> Option<NodeId> {
        Some(NodeId(ROOT))
    }

    fn active_element(&self) -> Option<NodeId> {
        Some(NodeId(self.state.borrow().active.unwrap_or(BODY)))
    }

    fn create_element(&self, tag: &str) -> NodeId {
        let mut state = self.state.borrow_mut();
        state.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        });
        NodeId(state.nodes.len() - 1)
    }

    fn query_first(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        self.descendants(scope.0)
            .into_iter()
            .find(|&idx| self.matches(idx, selector))
            .map(NodeId)
    }

    fn query_all(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.descendants(scope.0)
            .into_iter()
            .filter(|&idx| self.matches(idx, selector))
            .map(NodeId)
            .collect()
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let mut cur = Some(node.0);
        while let Some(idx) = cur {
            if self.matches(idx, selector) {
                return Some(NodeId(idx));
            }
            cur = self.state.borrow().nodes[idx].parent;
        }
        None
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.state.borrow().nodes[node.0].attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.state.borrow_mut().nodes[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut state = self.state.borrow_mut();
        let classes = &mut state.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.state.borrow_mut().nodes[node.0].classes.retain(|c| c != class);
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let children = std::mem::take(&mut self.state.borrow_mut().nodes[node.0].children);
        let mut state = self.state.borrow_mut();
        for child in children {
            state.nodes[child].parent = None;
        }
        state.nodes[node.0].text = text.to_string();
    }

    fn value(&self, node: &NodeId) -> String {
        if self.is_control(node.0) {
            self.state.borrow().nodes[node.0].value.clone()
        } else {
            String::new()
        }
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        if self.is_control(node.0) {
            self.state.borrow_mut().nodes[node.0].value = value.to_string();
        }
    }

    fn focus(&self, node: &NodeId) {
        self.state.borrow_mut().active = Some(node.0);
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        self.remove(child);
        let mut state = self.state.borrow_mut();
        state.nodes[child.0].parent = Some(parent.0);
        state.nodes[parent.0].children.push(child.0);
    }

    fn append_text(&self, parent: &NodeId, text: &str) {
        let node = self.create_element(TEXT_TAG);
        self.state.borrow_mut().nodes[node.0].text = text.to_string();
        self.append_child(parent, &node);
    }

    fn remove(&self, node: &NodeId) {
        let mut state = self.state.borrow_mut();
        if let Some(parent) = state.nodes[node.0].parent.take() {
            state.nodes[parent].children.retain(|&c| c != node.0);
        }
    }

    fn request_submit(&self, form: &NodeId) {
        self.state.borrow_mut().submitted.push(form.0);
    }

    fn listen(&self, node: &NodeId, event: &str, handler: Listener) {
        self.listeners
            .borrow_mut()
            .entry((node.0, event.to_string()))
            .or_default()
            .push(handler);
    }
}
