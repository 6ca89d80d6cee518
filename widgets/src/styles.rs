//! Utility CSS injected once at boot.
//!
//! The page's own stylesheet is a utility-class framework; these few rules
//! cover states only the widgets produce (search highlight pulse, open
//! accordion item, menu-open body on small screens).

use crate::config::WidgetsConfig;

/// Id of the injected `<style>` element, so a second boot doesn't duplicate it.
pub const UTILITY_STYLE_ID: &str = "landing-widgets-styles";

/// Utility rules with the configured class names substituted in.
pub fn utility_css(config: &WidgetsConfig) -> String {
    format!(
        r#"
.{highlight} {{
    animation: highlightPulse 1s ease-in-out;
    border: 2px solid #3b82f6 !important;
}}

@keyframes highlightPulse {{
    0% {{ transform: scale(1); }}
    50% {{ transform: scale(1.02); }}
    100% {{ transform: scale(1); }}
}}

.{accordion_open} {{
    background-color: #f8fafc;
}}

@media (max-width: {mobile_max}px) {{
    .mobile-menu-open {{
        overflow: hidden;
    }}
}}
"#,
        highlight = config.search.highlight_class,
        accordion_open = config.accordion.open_class,
        mobile_max = config.panel.breakpoint_px - 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_css_carries_widget_classes() {
        let css = utility_css(&WidgetsConfig::default());
        assert!(css.contains(".highlight-search {"));
        assert!(css.contains("@keyframes highlightPulse"));
        assert!(css.contains(".accordion-open {"));
        assert!(css.contains("max-width: 767px"));
    }

    #[test]
    fn class_names_follow_config() {
        let mut config = WidgetsConfig::default();
        config.search.highlight_class = "pulse".into();
        let css = utility_css(&config);
        assert!(css.contains(".pulse {"));
        assert!(!css.contains("highlight-search"));
    }
}
