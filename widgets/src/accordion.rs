//! Single-open accordion.

use crate::config::AccordionConfig;

/// Page-side operations for an accordion with a fixed number of items.
pub trait AccordionSurface {
    /// Apply the expanded style to item `index` and mark it open.
    fn expand(&mut self, index: usize);
    /// Collapse item `index` to zero height and clear its open marker.
    fn collapse(&mut self, index: usize);
}

/// `max-height` for an expanded content block. `scroll_height` is the
/// content's natural height, measured after the expanded padding is applied.
pub fn expanded_max_height(config: &AccordionConfig, scroll_height: f64) -> String {
    format!("{}px", scroll_height + config.height_buffer_px)
}

/// Result of a button click, mostly for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionChange {
    Opened(usize),
    Closed(usize),
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Collapse every item. Called once before any listener is attached.
    pub fn init<S: AccordionSurface + ?Sized>(&mut self, surface: &mut S) {
        for index in 0..self.len {
            surface.collapse(index);
        }
        self.open = None;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn click<S: AccordionSurface + ?Sized>(
        &mut self,
        index: usize,
        surface: &mut S,
    ) -> AccordionChange {
        if index >= self.len {
            return AccordionChange::Ignored;
        }

        if self.open == Some(index) {
            surface.collapse(index);
            self.open = None;
            return AccordionChange::Closed(index);
        }

        for other in 0..self.len {
            surface.collapse(other);
        }
        surface.expand(index);
        self.open = Some(index);
        AccordionChange::Opened(index)
    }
}
