//! Smooth scrolling for in-page links.

use std::rc::Rc;

use landing_widgets::{Feature, ScrollConfig, ScrollSurface, SmoothScroll, WidgetsError};
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{self, JsResultExt};

const FEATURE: Feature = Feature::SmoothScroll;

struct DomScroll {
    document: Document,
    window: Window,
}

impl ScrollSurface for DomScroll {
    fn element_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|element| element.get_bounding_client_rect().top())
    }

    fn page_y_offset(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub(crate) fn install(document: &Document, config: &ScrollConfig) -> Result<(), WidgetsError> {
    let links = dom::elements(document.query_selector_all(&config.link_selector).dom(FEATURE)?);
    if links.is_empty() {
        return Err(WidgetsError::missing(FEATURE, config.link_selector.clone()));
    }
    let window = web_sys::window().ok_or_else(|| WidgetsError::missing(FEATURE, "window"))?;

    let scroll = Rc::new(SmoothScroll::new(config));
    for link in &links {
        let scroll = scroll.clone();
        let link_handle = link.clone();
        let mut surface = DomScroll {
            document: document.clone(),
            window: window.clone(),
        };
        dom::listen(link, "click", move |event| {
            let Some(href) = link_handle.get_attribute("href") else {
                return;
            };
            if scroll.on_link_click(&href, &mut surface) {
                event.prevent_default();
            }
        })
        .dom(FEATURE)?;
    }

    tracing::debug!(links = links.len(), "smooth scroll wired");
    Ok(())
}
