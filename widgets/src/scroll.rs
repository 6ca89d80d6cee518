//! In-page anchor scrolling that clears the sticky header.

use crate::config::ScrollConfig;

/// Id named by an in-page link, e.g. `"#pricing"` -> `"pricing"`.
///
/// A bare `"#"` (the usual "top of page" placeholder) names nothing.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Page-side operations needed to scroll to an element.
pub trait ScrollSurface {
    /// Top edge of the element with `id`, relative to the viewport.
    fn element_top(&self, id: &str) -> Option<f64>;
    /// Current vertical scroll position of the document.
    fn page_y_offset(&self) -> f64;
    fn smooth_scroll_to(&mut self, top: f64);
}

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    header_offset: f64,
}

impl SmoothScroll {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            header_offset: config.header_offset_px,
        }
    }

    /// Document offset that puts an element `element_top` px below the viewport
    /// top just under the header.
    pub fn target_top(&self, element_top: f64, page_y_offset: f64) -> f64 {
        element_top + page_y_offset - self.header_offset
    }

    /// Handle a click on a link with `href`. Returns `true` when the link was
    /// taken over and the native jump must be cancelled.
    pub fn on_link_click<S: ScrollSurface + ?Sized>(&self, href: &str, surface: &mut S) -> bool {
        let Some(id) = fragment_target(href) else {
            return false;
        };
        let Some(element_top) = surface.element_top(id) else {
            return false;
        };

        let top = self.target_top(element_top, surface.page_y_offset());
        tracing::debug!(target = id, top, "smooth scrolling");
        surface.smooth_scroll_to(top);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fragments() {
        assert_eq!(fragment_target("#pricing"), Some("pricing"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/docs#install"), None);
    }

    #[test]
    fn target_top_subtracts_header() {
        let scroll = SmoothScroll::new(&ScrollConfig::default());
        assert_eq!(scroll.target_top(500.0, 1200.0), 1620.0);
        assert_eq!(scroll.target_top(-300.0, 400.0), 20.0);
    }
}
