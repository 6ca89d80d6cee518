//! # landing-widgets
//!
//! Behavior for the interactive bits of a static marketing page: the slide-in
//! mobile menu, the FAQ accordion, the testimonial video lightbox, anchor
//! smooth scrolling and the resource card search.
//!
//! Nothing here touches the DOM. Each widget is a small state machine that
//! mutates the page through a capability trait ([`PanelSurface`],
//! [`AccordionSurface`], [`VideoSurface`], [`ScrollSurface`],
//! [`CardSurface`]), and work that has to happen later is handed back to the
//! caller as a value carrying a generation number. The browser bindings live
//! in the `landing-widgets-wasm` crate.
//!
//! ## Modules
//!
//! - [`panel`] - slide-in menu controller (open/close sequencing)
//! - [`accordion`] - single-open accordion
//! - [`search`] - card filter and highlight
//! - [`scroll`] - header-aware anchor scrolling
//! - [`video`] - video lightbox
//! - [`config`] - JSON configuration with page defaults
//! - [`styles`] - utility CSS injected at boot

pub mod accordion;
pub mod config;
pub mod error;
pub mod panel;
pub mod scroll;
pub mod search;
pub mod styles;
pub mod video;

pub use accordion::{Accordion, AccordionChange, AccordionSurface, expanded_max_height};
pub use config::{
    AccordionConfig, PanelConfig, ReopenPolicy, ScrollConfig, SearchConfig, VideoConfig,
    WidgetsConfig,
};
pub use error::{Feature, Result, WidgetsError};
pub use panel::{
    CloseReason, Deferred, DeferredAction, MenuIcon, PanelController, PanelSurface, PanelTransform,
};
pub use scroll::{ScrollSurface, SmoothScroll, fragment_target};
pub use search::{
    CardSurface, HighlightClear, ResourceCard, SearchFilter, SearchOutcome, SearchQuery,
};
pub use video::{VideoModal, VideoSurface};
