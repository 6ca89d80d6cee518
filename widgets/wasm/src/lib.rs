//! Browser bindings for `landing-widgets`.
//!
//! Loading the module attaches every widget to the current page once the DOM
//! is ready. Element ids, selectors and timings come from an optional
//! `<script type="application/json" id="landing-widgets-config">` block;
//! pages that load the module by hand can call [`enhance`] with their own JSON
//! instead. Called while the document is still loading, [`enhance`] reserves
//! the page right away and boots on `DOMContentLoaded`.

use anyhow::{Context, anyhow};
use landing_widgets::WidgetsConfig;
use landing_widgets::config::CONFIG_ELEMENT_ID;
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod accordion;
mod boot;
mod dom;
pub mod logging;
mod menu;
mod scroll;
mod search;
mod video;

pub use boot::{BootLatch, BootReport, boot};

thread_local! {
    static LATCH: BootLatch = const { BootLatch::new() };
}

fn document() -> anyhow::Result<Document> {
    web_sys::window()
        .context("no window")?
        .document()
        .context("window has no document")
}

/// Raw text of the in-page config block, if the page has one.
fn page_config_json(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
}

/// Run `task` once the DOM has been parsed: now, or on `DOMContentLoaded`.
fn when_ready(document: &Document, task: impl FnOnce(&Document) + 'static) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        task(document);
        return Ok(());
    }

    let deferred = document.clone();
    let mut task = Some(task);
    dom::listen(document, "DOMContentLoaded", move |_| {
        if let Some(task) = task.take() {
            task(&deferred);
        }
    })
}

/// Boot from the in-page config block, falling back to defaults when it does
/// not parse. Returns `None` when the page was already booted.
pub fn auto_boot(latch: &BootLatch, document: &Document) -> Option<BootReport> {
    let raw = page_config_json(document).unwrap_or_default();
    let parsed = WidgetsConfig::from_json(&raw);

    let level = parsed.as_ref().map(|c| c.log_level.as_str()).unwrap_or("info");
    logging::init(level);

    let config = parsed.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default widget configuration");
        WidgetsConfig::default()
    });

    // A manual `enhance()` call may already own the page.
    if latch.claim().is_err() {
        tracing::debug!("page already enhanced, skipping automatic boot");
        return None;
    }
    Some(boot(document, &config))
}

/// Parse `config_json` (or the in-page block when `None`), claim the page and
/// boot it as soon as the DOM is ready. Malformed JSON is rejected before
/// anything is claimed.
pub fn enhance_page(
    latch: &BootLatch,
    document: &Document,
    config_json: Option<&str>,
) -> anyhow::Result<()> {
    let config = match config_json {
        Some(json) => WidgetsConfig::from_json(json).context("parsing enhance() config")?,
        None => WidgetsConfig::from_json(&page_config_json(document).unwrap_or_default())
            .context("parsing in-page config")?,
    };
    logging::init(&config.log_level);

    latch.claim()?;
    when_ready(document, move |document| {
        boot(document, &config);
    })
    .map_err(|e| anyhow!("waiting for DOMContentLoaded: {}", dom::describe(&e)))
}

/// Module entry point: panic hook, then boot now or on `DOMContentLoaded`.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("{e:#}")));
            return;
        }
    };

    let registered = when_ready(&document, |document| {
        LATCH.with(|latch| auto_boot(latch, document));
    });
    if let Err(e) = registered {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "Error initializing components: {}",
            dom::describe(&e)
        )));
    }
}

/// Boot with an explicit JSON config instead of relying on the automatic boot.
///
/// Malformed JSON is rejected rather than replaced with defaults, and so is a
/// second boot of the same page.
#[wasm_bindgen]
pub fn enhance(config_json: Option<String>) -> Result<(), JsValue> {
    let to_js = |e: anyhow::Error| JsValue::from_str(&format!("{e:#}"));

    let document = document().map_err(to_js)?;
    LATCH
        .with(|latch| enhance_page(latch, &document, config_json.as_deref()))
        .map_err(to_js)
}

/// Crate version, handy as a load check from the console.
#[wasm_bindgen]
pub fn version() -> String {
    format!("landing-widgets-wasm v{}", env!("CARGO_PKG_VERSION"))
}
