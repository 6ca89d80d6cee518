//! Error taxonomy shared by every widget.
//!
//! The only expected failure is a missing anchor element; the page simply does
//! not carry that widget. Everything else means the browser rejected a call.

use std::fmt;

use thiserror::Error;

/// The independently initialized widgets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Accordion,
    MobileMenu,
    VideoModal,
    SmoothScroll,
    Search,
}

impl Feature {
    /// Every feature, in boot order.
    pub const ALL: [Feature; 5] = [
        Feature::Accordion,
        Feature::MobileMenu,
        Feature::VideoModal,
        Feature::SmoothScroll,
        Feature::Search,
    ];

    /// Stable lowercase label, used in log fields.
    pub fn as_label(&self) -> &'static str {
        match self {
            Feature::Accordion => "accordion",
            Feature::MobileMenu => "mobile-menu",
            Feature::VideoModal => "video-modal",
            Feature::SmoothScroll => "smooth-scroll",
            Feature::Search => "search",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetsError {
    /// A required element is not on the page. The feature is skipped.
    #[error("{feature}: required anchor `{anchor}` not found")]
    MissingAnchor { feature: Feature, anchor: String },

    /// A browser API call was rejected while wiring or driving a feature.
    #[error("{feature}: DOM call failed: {message}")]
    Dom { feature: Feature, message: String },

    /// Page-supplied configuration could not be parsed.
    #[error("invalid widget configuration: {0}")]
    Config(String),
}

impl WidgetsError {
    pub fn missing(feature: Feature, anchor: impl Into<String>) -> Self {
        WidgetsError::MissingAnchor {
            feature,
            anchor: anchor.into(),
        }
    }

    pub fn dom(feature: Feature, message: impl Into<String>) -> Self {
        WidgetsError::Dom {
            feature,
            message: message.into(),
        }
    }

    /// Missing anchors are expected on pages that don't carry a widget.
    pub fn is_missing_anchor(&self) -> bool {
        matches!(self, WidgetsError::MissingAnchor { .. })
    }

    pub fn feature(&self) -> Option<Feature> {
        match self {
            WidgetsError::MissingAnchor { feature, .. } | WidgetsError::Dom { feature, .. } => {
                Some(*feature)
            }
            WidgetsError::Config(_) => None,
        }
    }
}

impl From<serde_json::Error> for WidgetsError {
    fn from(e: serde_json::Error) -> Self {
        WidgetsError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WidgetsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_labels() {
        assert_eq!(Feature::MobileMenu.as_label(), "mobile-menu");
        assert_eq!(Feature::Search.to_string(), "search");
        assert_eq!(Feature::ALL.len(), 5);
    }

    #[test]
    fn missing_anchor_message_names_feature_and_anchor() {
        let err = WidgetsError::missing(Feature::VideoModal, "#video-thumbnail");
        assert!(err.is_missing_anchor());
        assert_eq!(err.feature(), Some(Feature::VideoModal));
        assert_eq!(
            err.to_string(),
            "video-modal: required anchor `#video-thumbnail` not found"
        );
    }

    #[test]
    fn json_errors_become_config_errors() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: WidgetsError = parse.unwrap_err().into();
        assert!(matches!(err, WidgetsError::Config(_)));
        assert_eq!(err.feature(), None);
        assert!(!err.is_missing_anchor());
    }
}
