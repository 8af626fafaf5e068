//! In-memory [`Canvas`] recording draw operations per page.

use super::canvas::{Canvas, DrawOp};

/// Recorded operations of one page, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    ops: Vec<DrawOp>,
}

impl Page {
    /// Operations in draw order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text runs on this page, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any text run on this page equals `needle`.
    #[must_use]
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

/// A document as a list of pages of draw operations.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pages: Vec<Page>,
    current: usize,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    /// A document with one empty page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            current: 0,
        }
    }

    /// All pages.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

impl Canvas for DisplayList {
    fn add_page(&mut self) {
        self.pages.push(Page::default());
        self.current = self.pages.len() - 1;
    }

    fn set_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        }
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn draw(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.get_mut(self.current) {
            page.ops.push(op);
        }
    }
}
