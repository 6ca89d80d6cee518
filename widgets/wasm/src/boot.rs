//! One-shot page initialization.
//!
//! Every feature is installed independently. A feature whose anchors are
//! missing is skipped quietly; any other failure is logged and the remaining
//! features still install.

use std::cell::Cell;

use landing_widgets::styles::{UTILITY_STYLE_ID, utility_css};
use landing_widgets::{Feature, WidgetsConfig, WidgetsError};
use web_sys::Document;

use crate::dom::JsResultExt;
use crate::{accordion, menu, scroll, search, video};

/// What happened to each feature during boot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootReport {
    pub installed: Vec<Feature>,
    pub skipped: Vec<Feature>,
    pub failed: Vec<(Feature, String)>,
}

impl BootReport {
    fn record(&mut self, feature: Feature, result: Result<(), WidgetsError>) {
        match result {
            Ok(()) => self.installed.push(feature),
            Err(e) if e.is_missing_anchor() => {
                tracing::debug!(feature = feature.as_label(), reason = %e, "feature skipped");
                self.skipped.push(feature);
            }
            Err(e) => {
                tracing::error!(
                    feature = feature.as_label(),
                    error = %e,
                    "feature failed to initialize"
                );
                self.failed.push((feature, e.to_string()));
            }
        }
    }

    pub fn is_installed(&self, feature: Feature) -> bool {
        self.installed.contains(&feature)
    }
}

/// First claim wins. Guards the page against being booted twice.
#[derive(Debug, Default)]
pub struct BootLatch {
    claimed: Cell<bool>,
}

impl BootLatch {
    pub const fn new() -> Self {
        Self {
            claimed: Cell::new(false),
        }
    }

    /// Take the latch. Fails if someone already did.
    pub fn claim(&self) -> anyhow::Result<()> {
        if self.claimed.replace(true) {
            anyhow::bail!("landing widgets are already initialized");
        }
        Ok(())
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed.get()
    }
}

fn install(
    feature: Feature,
    document: &Document,
    config: &WidgetsConfig,
) -> Result<(), WidgetsError> {
    match feature {
        Feature::Accordion => accordion::install(document, &config.accordion),
        Feature::MobileMenu => menu::install(document, config),
        Feature::VideoModal => video::install(document, &config.video, &config.hidden_class),
        Feature::SmoothScroll => scroll::install(document, &config.scroll),
        Feature::Search => search::install(document, &config.search),
    }
}

/// Add the utility stylesheet to `<head>` unless it is already there.
pub(crate) fn inject_styles(
    document: &Document,
    config: &WidgetsConfig,
) -> Result<(), WidgetsError> {
    // Styles aren't a feature of their own; failures are attributed to search,
    // the main consumer of the highlight rule.
    const OWNER: Feature = Feature::Search;

    if document.get_element_by_id(UTILITY_STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| WidgetsError::missing(OWNER, "head"))?;
    let style = document.create_element("style").dom(OWNER)?;
    style.set_id(UTILITY_STYLE_ID);
    style.set_text_content(Some(&utility_css(config)));
    head.append_child(&style).dom(OWNER)?;
    Ok(())
}

pub fn boot(document: &Document, config: &WidgetsConfig) -> BootReport {
    if let Err(e) = inject_styles(document, config) {
        tracing::warn!(error = %e, "utility styles not injected");
    }

    let mut report = BootReport::default();
    for feature in Feature::ALL {
        report.record(feature, install(feature, document, config));
    }

    tracing::info!(
        installed = report.installed.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "landing widgets initialized"
    );
    report
}
