//! FAQ accordion bound to `[data-accordion-item]` markup.

use std::cell::RefCell;
use std::rc::Rc;

use landing_widgets::{
    Accordion, AccordionConfig, AccordionSurface, Feature, WidgetsError, expanded_max_height,
};
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{self, JsResultExt};

const FEATURE: Feature = Feature::Accordion;

struct AccordionItem {
    item: Element,
    button: Element,
    content: HtmlElement,
    icon: Option<Element>,
}

struct DomAccordion {
    items: Vec<AccordionItem>,
    config: AccordionConfig,
}

impl DomAccordion {
    fn set_styles(content: &HtmlElement, styles: &[(&str, &str)]) {
        let style = content.style();
        for (property, value) in styles {
            dom::warn_on_err(FEATURE, "styling content", style.set_property(property, value));
        }
    }
}

impl AccordionSurface for DomAccordion {
    fn expand(&mut self, index: usize) {
        let Some(entry) = self.items.get(index) else {
            return;
        };

        // Padding first: the measured height has to include it.
        Self::set_styles(
            &entry.content,
            &[
                ("opacity", "1"),
                ("padding-top", self.config.padding_top.as_str()),
                ("padding-bottom", self.config.padding_bottom.as_str()),
            ],
        );
        let measured = f64::from(entry.content.scroll_height());
        let max_height = expanded_max_height(&self.config, measured);
        Self::set_styles(&entry.content, &[("max-height", max_height.as_str())]);

        if let Some(icon) = &entry.icon {
            icon.set_class_name(&self.config.expanded_icon_class);
        }
        dom::warn_on_err(
            FEATURE,
            "marking item open",
            entry.item.class_list().add_1(&self.config.open_class),
        );
    }

    fn collapse(&mut self, index: usize) {
        let Some(entry) = self.items.get(index) else {
            return;
        };

        Self::set_styles(
            &entry.content,
            &[
                ("max-height", "0"),
                ("padding-top", "0"),
                ("padding-bottom", "0"),
                ("opacity", "0"),
            ],
        );
        if let Some(icon) = &entry.icon {
            icon.set_class_name(&self.config.collapsed_icon_class);
        }
        dom::warn_on_err(
            FEATURE,
            "clearing open marker",
            entry.item.class_list().remove_1(&self.config.open_class),
        );
    }
}

fn collect_items(
    document: &Document,
    config: &AccordionConfig,
) -> Result<Vec<AccordionItem>, WidgetsError> {
    let mut items = Vec::new();
    for item in dom::elements(document.query_selector_all(&config.item_selector).dom(FEATURE)?) {
        let button = item.query_selector(&config.button_selector).dom(FEATURE)?;
        let content = item.query_selector(&config.content_selector).dom(FEATURE)?;
        let (Some(button), Some(content)) = (button, content) else {
            tracing::debug!("skipping accordion item without button or content");
            continue;
        };
        let content = dom::html(content, FEATURE)?;
        let icon = button.query_selector("i").dom(FEATURE)?;
        items.push(AccordionItem {
            item,
            button,
            content,
            icon,
        });
    }
    Ok(items)
}

pub(crate) fn install(document: &Document, config: &AccordionConfig) -> Result<(), WidgetsError> {
    let items = collect_items(document, config)?;
    if items.is_empty() {
        return Err(WidgetsError::missing(FEATURE, config.item_selector.clone()));
    }

    for entry in &items {
        let style = entry.content.style();
        style.set_property("overflow", "hidden").dom(FEATURE)?;
        style.set_property("transition", &config.transition).dom(FEATURE)?;
    }

    let buttons: Vec<Element> = items.iter().map(|entry| entry.button.clone()).collect();
    let mut accordion = Accordion::new(items.len());
    let mut surface = DomAccordion {
        items,
        config: config.clone(),
    };
    accordion.init(&mut surface);

    let state = Rc::new(RefCell::new((accordion, surface)));
    for (index, button) in buttons.iter().enumerate() {
        let state = state.clone();
        dom::listen(button, "click", move |event| {
            event.prevent_default();
            let mut guard = state.borrow_mut();
            let (accordion, surface) = &mut *guard;
            let change = accordion.click(index, surface);
            tracing::debug!(?change, "accordion toggled");
        })
        .dom(FEATURE)?;
    }

    tracing::debug!(items = buttons.len(), "accordion wired");
    Ok(())
}
