//! DOM-backed surface

use web_sys::{Document, Element};

use crate::render::ids;
use crate::surface::Surface;

/// Writes into elements of the live document by id
pub struct DocumentSurface {
    document: Document,
}

impl DocumentSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            log::debug!("Element #{id} not found, skipping");
        }
        element
    }
}

impl Surface for DocumentSurface {
    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.element(id) {
            element.set_class_name(class);
        }
    }

    fn show_error(&mut self, message: &str) {
        log::warn!("{message}");
        if let Some(element) = self.element(ids::FETCH_ERROR) {
            element.set_text_content(Some(message));
            element.set_class_name("fetch-error visible");
        }
    }

    fn clear_error(&mut self) {
        if let Some(element) = self.element(ids::FETCH_ERROR) {
            element.set_text_content(None);
            element.set_class_name("fetch-error");
        }
    }
}
