//! Small web-sys helpers shared by the widget bindings.

use std::time::Duration;

use landing_widgets::{Feature, WidgetsError};
use leptos::prelude::set_timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

/// Attach a JS error to the feature that hit it.
pub(crate) trait JsResultExt<T> {
    fn dom(self, feature: Feature) -> Result<T, WidgetsError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn dom(self, feature: Feature) -> Result<T, WidgetsError> {
        self.map_err(|e| WidgetsError::dom(feature, describe(&e)))
    }
}

/// Best-effort human readable text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Log a failed mutation from inside a surface method, where there is no
/// caller to propagate to.
pub(crate) fn warn_on_err(feature: Feature, what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        tracing::warn!(feature = feature.as_label(), error = %describe(&e), "{what} failed");
    }
}

pub(crate) fn by_id(document: &Document, feature: Feature, id: &str) -> Result<Element, WidgetsError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetsError::missing(feature, format!("#{id}")))
}

pub(crate) fn html(element: Element, feature: Feature) -> Result<HtmlElement, WidgetsError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|e| WidgetsError::dom(feature, format!("{e:?} is not an HTML element")))
}

/// Collect a `NodeList` into the elements it contains.
pub(crate) fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Register a listener that lives as long as the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Keep the closure alive
    Ok(())
}

/// Run `task` once after `delay` on the browser event loop.
pub(crate) fn defer(delay: Duration, task: impl FnOnce() + 'static) {
    set_timeout(task, delay);
}
