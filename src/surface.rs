//! Page surface the renderer writes into
//!
//! The browser implementation targets DOM elements by id; [`MemorySurface`]
//! records the same writes for headless use and tests.

use std::collections::BTreeMap;

/// Text and class writes by element id, plus the fetch-error notice.
///
/// Writes never fail: an element missing from the page is skipped.
pub trait Surface {
    fn set_text(&mut self, id: &str, text: &str);

    fn set_class(&mut self, id: &str, class: &str);

    /// Show a user-visible "fetch failed" notice
    fn show_error(&mut self, message: &str);

    /// Remove the notice, if any
    fn clear_error(&mut self);
}

/// Recorded state of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub class: String,
}

/// In-memory surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    elements: BTreeMap<String, ElementState>,
    error: Option<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text.as_str())
    }

    pub fn class(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.class.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Ids written so far, sorted
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }
}

impl Surface for MemorySurface {
    fn set_text(&mut self, id: &str, text: &str) {
        self.elements.entry(id.to_string()).or_default().text = text.to_string();
    }

    fn set_class(&mut self, id: &str, class: &str) {
        self.elements.entry(id.to_string()).or_default().class = class.to_string();
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_records_writes() {
        let mut surface = MemorySurface::new();
        surface.set_text("token-price", "$1.0000");
        surface.set_class("price-change", "metric-change positive");
        surface.set_text("token-price", "$2.0000");

        assert_eq!(surface.text("token-price"), Some("$2.0000"));
        assert_eq!(surface.class("price-change"), Some("metric-change positive"));
        assert_eq!(surface.text("price-change"), Some(""));
        assert_eq!(surface.text("missing"), None);
        assert_eq!(surface.ids().collect::<Vec<_>>(), vec!["price-change", "token-price"]);
    }

    #[test]
    fn test_error_notice() {
        let mut surface = MemorySurface::new();
        surface.show_error("Unable to fetch data. Retrying...");
        assert_eq!(surface.error(), Some("Unable to fetch data. Retrying..."));
        surface.clear_error();
        assert!(surface.error().is_none());
    }
}
