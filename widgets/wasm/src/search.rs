//! Resource card search box.

use std::cell::RefCell;
use std::rc::Rc;

use landing_widgets::{
    CardSurface, Feature, ResourceCard, SearchConfig, SearchFilter, WidgetsError,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::dom::{self, JsResultExt};

const FEATURE: Feature = Feature::Search;

/// Cards as they were on the page when a search ran.
struct DomCards {
    cards: Vec<HtmlElement>,
    config: SearchConfig,
}

impl DomCards {
    fn collect(document: &Document, config: &SearchConfig) -> Result<Self, WidgetsError> {
        let found = document.query_selector_all(&config.card_selector).dom(FEATURE)?;
        let cards = dom::elements(found)
            .into_iter()
            .filter_map(|card| card.dyn_into::<HtmlElement>().ok())
            .collect();
        Ok(Self {
            cards,
            config: config.clone(),
        })
    }

    fn text(card: &Element, selector: &str) -> String {
        card.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }
}

impl CardSurface for DomCards {
    fn cards(&self) -> Vec<ResourceCard> {
        self.cards
            .iter()
            .map(|card| ResourceCard {
                title: Self::text(card, &self.config.title_selector),
                description: Self::text(card, &self.config.description_selector),
                category: Self::text(card, &self.config.category_selector),
            })
            .collect()
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(card) = self.cards.get(index) {
            let display = if visible { "block" } else { "none" };
            let result = card.style().set_property("display", display);
            dom::warn_on_err(FEATURE, "toggling card", result);
        }
    }

    fn set_highlighted(&mut self, index: usize, highlighted: bool) {
        if let Some(card) = self.cards.get(index) {
            let classes = card.class_list();
            let result = if highlighted {
                classes.add_1(&self.config.highlight_class)
            } else {
                classes.remove_1(&self.config.highlight_class)
            };
            dom::warn_on_err(FEATURE, "toggling highlight", result);
        }
    }
}

struct SearchBox {
    document: Document,
    input: HtmlInputElement,
    filter: RefCell<SearchFilter>,
    config: SearchConfig,
}

/// Filter against the current input value and schedule the highlight clear.
fn run_search(search: &Rc<SearchBox>) {
    let mut cards = match DomCards::collect(&search.document, &search.config) {
        Ok(cards) => cards,
        Err(e) => {
            tracing::warn!(error = %e, "could not read resource cards");
            return;
        }
    };

    let outcome = search.filter.borrow_mut().search(&search.input.value(), &mut cards);
    if let Some(outcome) = outcome {
        let search = search.clone();
        dom::defer(outcome.clear.delay, move || {
            search.filter.borrow_mut().clear_highlight(outcome.clear, &mut cards);
        });
    }
}

pub(crate) fn install(document: &Document, config: &SearchConfig) -> Result<(), WidgetsError> {
    let selector = config.input_selector();
    let input = document
        .query_selector(&selector)
        .dom(FEATURE)?
        .ok_or_else(|| WidgetsError::missing(FEATURE, selector.clone()))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| WidgetsError::dom(FEATURE, format!("{selector} is not an input")))?;
    let button = input
        .next_element_sibling()
        .ok_or_else(|| WidgetsError::missing(FEATURE, format!("{selector} + button")))?;

    let search = Rc::new(SearchBox {
        document: document.clone(),
        input: input.clone(),
        filter: RefCell::new(SearchFilter::new(config)),
        config: config.clone(),
    });

    {
        let search = search.clone();
        dom::listen(&button, "click", move |_| run_search(&search)).dom(FEATURE)?;
    }

    dom::listen(&input, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key_event.key() == "Enter" && !key_event.is_composing() {
            run_search(&search);
        }
    })
    .dom(FEATURE)?;

    tracing::debug!("search wired");
    Ok(())
}
