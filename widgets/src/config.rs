//! Widget configuration.
//!
//! Every section defaults to the markup and timings the landing page ships
//! with, so an empty JSON object (or no config at all) is a complete setup.
//! Pages override individual fields through a
//! `<script type="application/json" id="landing-widgets-config">` block.

use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// Id of the optional in-page JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "landing-widgets-config";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    /// Class that removes an element from layout entirely.
    pub hidden_class: String,
    /// `tracing` level filter for the console subscriber.
    pub log_level: String,
    pub panel: PanelConfig,
    pub accordion: AccordionConfig,
    pub video: VideoConfig,
    pub scroll: ScrollConfig,
    pub search: SearchConfig,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            hidden_class: "hidden".into(),
            log_level: "info".into(),
            panel: PanelConfig::default(),
            accordion: AccordionConfig::default(),
            video: VideoConfig::default(),
            scroll: ScrollConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// What `open()` does when the panel is already open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReopenPolicy {
    /// Guarded no-op.
    #[default]
    Ignore,
    /// Re-run every open step and restart the slide-in.
    Restart,
}

/// Slide-in mobile menu
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub trigger_id: String,
    pub container_id: String,
    pub panel_id: String,
    pub overlay_id: String,
    pub close_id: String,
    /// Icon class while the panel is closed (hamburger).
    pub open_icon_class: String,
    /// Icon class while the panel is open.
    pub close_icon_class: String,
    /// Delay between unhiding and starting the slide-in transform.
    pub open_delay_ms: u64,
    /// Length of the CSS transform transition.
    pub transition_ms: u64,
    /// Viewport width at which the desktop nav takes over.
    pub breakpoint_px: f64,
    pub reopen: ReopenPolicy,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            trigger_id: "mobile-menu-button".into(),
            container_id: "mobile-menu".into(),
            panel_id: "mobile-menu-panel".into(),
            overlay_id: "mobile-menu-overlay".into(),
            close_id: "mobile-menu-close".into(),
            open_icon_class: "fas fa-bars text-xl".into(),
            close_icon_class: "fas fa-times text-xl".into(),
            open_delay_ms: 10,
            transition_ms: 300,
            breakpoint_px: 768.0,
            reopen: ReopenPolicy::Ignore,
        }
    }
}

impl PanelConfig {
    pub fn open_delay(&self) -> Duration {
        // Zero would let the transform land in the same frame as the unhide.
        Duration::from_millis(self.open_delay_ms.max(1))
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// FAQ accordion
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    pub item_selector: String,
    pub button_selector: String,
    pub content_selector: String,
    /// Extra pixels added to the content's scroll height when expanded.
    pub height_buffer_px: f64,
    pub padding_top: String,
    pub padding_bottom: String,
    pub transition: String,
    /// Class added to an expanded item.
    pub open_class: String,
    pub expanded_icon_class: String,
    pub collapsed_icon_class: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            item_selector: "[data-accordion-item]".into(),
            button_selector: "[data-accordion-button]".into(),
            content_selector: "[data-accordion-content]".into(),
            height_buffer_px: 20.0,
            padding_top: "0.5rem".into(),
            padding_bottom: "1.25rem".into(),
            transition: "max-height 0.3s ease, padding 0.3s ease".into(),
            open_class: "accordion-open".into(),
            expanded_icon_class: "fas fa-minus text-primary-500".into(),
            collapsed_icon_class: "fas fa-plus text-primary-500".into(),
        }
    }
}

/// Testimonial video lightbox
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub thumbnail_id: String,
    pub modal_id: String,
    pub close_id: String,
    pub video_id: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            thumbnail_id: "video-thumbnail".into(),
            modal_id: "video-modal".into(),
            close_id: "close-video-modal".into(),
            video_id: "testimonial-video".into(),
        }
    }
}

/// In-page anchor scrolling
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub link_selector: String,
    /// Height of the sticky header the target must clear.
    pub header_offset_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            link_selector: "a[href^=\"#\"]".into(),
            header_offset_px: 80.0,
        }
    }
}

/// Resource card filter
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The search input is located by its exact placeholder text.
    pub placeholder: String,
    pub card_selector: String,
    pub title_selector: String,
    pub description_selector: String,
    pub category_selector: String,
    pub highlight_class: String,
    pub highlight_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder: "Search for resources...".into(),
            card_selector: "#resources .card-hover".into(),
            title_selector: "h3".into(),
            description_selector: "p".into(),
            category_selector: ".uppercase".into(),
            highlight_class: "highlight-search".into(),
            highlight_ms: 3000,
        }
    }
}

impl SearchConfig {
    pub fn input_selector(&self) -> String {
        format!("input[placeholder=\"{}\"]", self.placeholder)
    }

    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}

impl WidgetsConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = WidgetsConfig::default();
        assert_eq!(config.hidden_class, "hidden");
        assert_eq!(config.panel.transition(), Duration::from_millis(300));
        assert_eq!(config.panel.open_delay(), Duration::from_millis(10));
        assert_eq!(config.panel.breakpoint_px, 768.0);
        assert_eq!(config.panel.reopen, ReopenPolicy::Ignore);
        assert_eq!(config.scroll.header_offset_px, 80.0);
        assert_eq!(config.search.highlight_duration(), Duration::from_millis(3000));
        assert_eq!(config.accordion.height_buffer_px, 20.0);
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(WidgetsConfig::from_json("").unwrap(), WidgetsConfig::default());
        assert_eq!(WidgetsConfig::from_json("{}").unwrap(), WidgetsConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = WidgetsConfig::from_json(
            r#"{
                "log_level": "debug",
                "panel": { "transition_ms": 450, "reopen": "restart" },
                "search": { "placeholder": "Find docs" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.panel.transition_ms, 450);
        assert_eq!(config.panel.reopen, ReopenPolicy::Restart);
        // untouched fields in a touched section keep defaults
        assert_eq!(config.panel.trigger_id, "mobile-menu-button");
        assert_eq!(config.search.input_selector(), "input[placeholder=\"Find docs\"]");
        assert_eq!(config.accordion, AccordionConfig::default());
    }

    #[test]
    fn test_zero_open_delay_is_clamped() {
        let config = WidgetsConfig::from_json(r#"{"panel": {"open_delay_ms": 0}}"#).unwrap();
        assert_eq!(config.panel.open_delay(), Duration::from_millis(1));
    }

    #[test]
    fn test_malformed_json() {
        let err = WidgetsConfig::from_json("{ panel: ").unwrap_err();
        assert!(matches!(err, crate::WidgetsError::Config(_)));
        assert!(err.to_string().starts_with("invalid widget configuration"));
    }
}
