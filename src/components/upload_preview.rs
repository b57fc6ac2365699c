//! Upload Preview
//!
//! Reacts to a file-input change: annotates the upload label with the file
//! name and loads image/video previews as `data:` URLs.

use std::rc::Rc;

use crate::config::{
    FILE_NAME_SELECTOR, HAS_FILE_CLASS, HIDDEN_CLASS, IMAGE_PREVIEW_ID, UPLOAD_LABEL_SELECTOR,
    UPLOAD_WRAPPER_SELECTOR, VIDEO_PREVIEW_ID,
};
use crate::models::{PreviewKind, UploadedFile};
use crate::view::View;

pub struct UploadPreview<V: View> {
    view: Rc<V>,
}

impl<V: View> UploadPreview<V> {
    pub fn new(view: Rc<V>) -> Self {
        Self { view }
    }

    /// Handle a change on `input`. Only the first selected file is passed in;
    /// `None` (selection cleared) is a no-op.
    ///
    /// Reads are never cancelled: if an older read finishes after a newer
    /// one, the older content wins the preview.
    pub fn file_selected(&self, input: &V::Node, file: Option<UploadedFile>) {
        let Some(file) = file else {
            return;
        };
        log::debug!("file selected: {} ({}, {} bytes)", file.name, file.mime_type, file.size);

        self.annotate_label(input, &file.name);

        let target = match file.preview_kind() {
            Some(PreviewKind::Image) => IMAGE_PREVIEW_ID,
            Some(PreviewKind::Video) => VIDEO_PREVIEW_ID,
            None => return,
        };
        let Some(preview) = self.view.element_by_id(target) else {
            return;
        };

        let view = self.view.clone();
        file.content.read_data_url(
            &file.mime_type,
            Box::new(move |url| {
                view.set_attribute(&preview, "src", &url);
                view.remove_class(&preview, HIDDEN_CLASS);
            }),
        );
    }

    fn annotate_label(&self, input: &V::Node, file_name: &str) {
        let view = &*self.view;
        let Some(label) = view
            .closest(input, UPLOAD_WRAPPER_SELECTOR)
            .and_then(|wrapper| view.query_first(&wrapper, UPLOAD_LABEL_SELECTOR))
        else {
            return;
        };

        view.add_class(&label, HAS_FILE_CLASS);
        if let Some(previous) = view.query_first(&label, FILE_NAME_SELECTOR) {
            view.remove(&previous);
        }

        let annotation = view.create_element("div");
        for class in ["file-name", "text-primary", "mt-2"] {
            view.add_class(&annotation, class);
        }
        let icon = view.create_element("i");
        view.add_class(&icon, "bi");
        view.add_class(&icon, "bi-file-earmark-check");

        view.append_child(&annotation, &icon);
        view.append_text(&annotation, &format!(" {}", file_name));
        view.append_child(&label, &annotation);
    }
}
