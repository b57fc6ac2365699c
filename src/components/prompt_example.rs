//! Prompt Examples
//!
//! Copies an example prompt into the `#prompt` field.

use crate::config::PROMPT_ID;
use crate::view::View;

/// Fill and focus the prompt field; false when the page has none
pub fn use_example<V: View>(view: &V, prompt: &str) -> bool {
    let Some(field) = view.element_by_id(PROMPT_ID) else {
        return false;
    };
    view.set_value(&field, prompt);
    view.focus(&field);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fake::FakeDocument;

    #[test]
    fn test_fills_and_focuses_prompt() {
        let doc = FakeDocument::new();
        let prompt = doc.add(doc.body_id(), "textarea", &[("id", "prompt")]);
        doc.set_value(&prompt, "old");

        assert!(use_example(&doc, "A red fox running through snow"));
        assert_eq!(doc.value(&prompt), "A red fox running through snow");
        assert_eq!(doc.active_element(), Some(prompt));
    }

    #[test]
    fn test_missing_prompt_is_noop() {
        let doc = FakeDocument::new();
        assert!(!use_example(&doc, "anything"));
    }
}
