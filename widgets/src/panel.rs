//! Slide-in panel controller.
//!
//! The panel is driven by a CSS transform transition, which only animates while
//! the element is paintable. Opening therefore unhides first and defers the
//! slide-in by a tick; closing slides out first and defers the hide until the
//! transition has finished. Both deferred steps are returned to the caller as
//! [`Deferred`] work tagged with the generation that produced it, and
//! [`PanelController::fire`] drops any work whose generation has been
//! superseded by a later open or close.

use std::fmt;
use std::time::Duration;

use crate::config::{PanelConfig, ReopenPolicy};

/// Horizontal placement of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTransform {
    OnScreen,
    OffScreen,
}

impl PanelTransform {
    pub fn as_css(&self) -> &'static str {
        match self {
            PanelTransform::OnScreen => "translateX(0)",
            PanelTransform::OffScreen => "translateX(100%)",
        }
    }
}

/// Affordance shown on the trigger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger: pressing it opens the panel.
    Open,
    /// Cross: pressing it closes the panel.
    Close,
}

/// Everything the controller is allowed to change on the page.
pub trait PanelSurface {
    /// Toggle the structural hidden flag on the panel container.
    fn set_hidden(&mut self, hidden: bool);
    fn set_transform(&mut self, transform: PanelTransform);
    /// Suppress or restore page-level scrolling.
    fn set_scroll_lock(&mut self, locked: bool);
    fn set_icon(&mut self, icon: MenuIcon);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Move the panel on screen once the unhide has been painted.
    SlideIn,
    /// Remove the panel from layout once the slide-out has finished.
    Hide,
}

/// Work to run after `delay`, valid only while `generation` is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub generation: u64,
    pub action: DeferredAction,
    pub delay: Duration,
}

/// What asked the panel to close. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    CloseButton,
    Backdrop,
    NavLink,
    Escape,
    Resize,
    OutsideClick,
}

impl CloseReason {
    pub fn as_label(&self) -> &'static str {
        match self {
            CloseReason::Toggle => "toggle",
            CloseReason::CloseButton => "close-button",
            CloseReason::Backdrop => "backdrop",
            CloseReason::NavLink => "nav-link",
            CloseReason::Escape => "escape",
            CloseReason::Resize => "resize",
            CloseReason::OutsideClick => "outside-click",
        }
    }
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Open/closed flag plus the generation of the last state change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PanelState {
    is_open: bool,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct PanelController {
    state: PanelState,
    open_delay: Duration,
    transition: Duration,
    breakpoint_px: f64,
    reopen: ReopenPolicy,
}

impl PanelController {
    /// A closed panel. The surface is expected to already be hidden and
    /// off-screen, which is how the markup ships.
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            state: PanelState::default(),
            open_delay: config.open_delay(),
            transition: config.transition(),
            breakpoint_px: config.breakpoint_px,
            reopen: config.reopen,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    pub fn open<S: PanelSurface + ?Sized>(&mut self, surface: &mut S) -> Option<Deferred> {
        if self.state.is_open && self.reopen == ReopenPolicy::Ignore {
            return None;
        }

        self.state.is_open = true;
        self.state.generation += 1;
        surface.set_hidden(false);
        surface.set_scroll_lock(true);
        surface.set_icon(MenuIcon::Close);

        tracing::debug!(generation = self.state.generation, "panel opening");
        Some(Deferred {
            generation: self.state.generation,
            action: DeferredAction::SlideIn,
            delay: self.open_delay,
        })
    }

    pub fn close<S: PanelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        reason: CloseReason,
    ) -> Option<Deferred> {
        if !self.state.is_open {
            return None;
        }

        self.state.is_open = false;
        self.state.generation += 1;
        surface.set_transform(PanelTransform::OffScreen);
        surface.set_scroll_lock(false);
        surface.set_icon(MenuIcon::Open);

        tracing::debug!(
            generation = self.state.generation,
            reason = reason.as_label(),
            "panel closing"
        );
        Some(Deferred {
            generation: self.state.generation,
            action: DeferredAction::Hide,
            delay: self.transition,
        })
    }

    pub fn toggle<S: PanelSurface + ?Sized>(&mut self, surface: &mut S) -> Option<Deferred> {
        if self.state.is_open {
            self.close(surface, CloseReason::Toggle)
        } else {
            self.open(surface)
        }
    }

    /// Run deferred work if nothing has superseded it. Returns whether it applied.
    pub fn fire<S: PanelSurface + ?Sized>(&mut self, deferred: Deferred, surface: &mut S) -> bool {
        if deferred.generation != self.state.generation {
            tracing::debug!(
                stale = deferred.generation,
                current = self.state.generation,
                action = ?deferred.action,
                "dropping superseded panel step"
            );
            return false;
        }

        match deferred.action {
            DeferredAction::SlideIn => surface.set_transform(PanelTransform::OnScreen),
            DeferredAction::Hide => surface.set_hidden(true),
        }
        true
    }

    /// Escape closes an open panel.
    pub fn on_key<S: PanelSurface + ?Sized>(&mut self, key: &str, surface: &mut S) -> Option<Deferred> {
        if key == "Escape" {
            self.close(surface, CloseReason::Escape)
        } else {
            None
        }
    }

    /// Growing past the breakpoint closes an open panel.
    pub fn on_resize<S: PanelSurface + ?Sized>(
        &mut self,
        viewport_width: f64,
        surface: &mut S,
    ) -> Option<Deferred> {
        if viewport_width >= self.breakpoint_px {
            self.close(surface, CloseReason::Resize)
        } else {
            None
        }
    }

    /// A document-level click that landed outside both the panel and its trigger.
    pub fn on_outside_click<S: PanelSurface + ?Sized>(
        &mut self,
        inside_panel: bool,
        inside_trigger: bool,
        surface: &mut S,
    ) -> Option<Deferred> {
        if inside_panel || inside_trigger {
            return None;
        }
        self.close(surface, CloseReason::OutsideClick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Hidden(bool),
        Transform(PanelTransform),
        Lock(bool),
        Icon(MenuIcon),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl PanelSurface for Recorder {
        fn set_hidden(&mut self, hidden: bool) {
            self.calls.push(Call::Hidden(hidden));
        }
        fn set_transform(&mut self, transform: PanelTransform) {
            self.calls.push(Call::Transform(transform));
        }
        fn set_scroll_lock(&mut self, locked: bool) {
            self.calls.push(Call::Lock(locked));
        }
        fn set_icon(&mut self, icon: MenuIcon) {
            self.calls.push(Call::Icon(icon));
        }
    }

    fn controller() -> PanelController {
        PanelController::new(&PanelConfig::default())
    }

    #[test]
    fn open_unhides_locks_and_defers_slide_in() {
        let mut panel = controller();
        let mut surface = Recorder::default();

        let deferred = panel.open(&mut surface).expect("open schedules slide-in");

        assert!(panel.is_open());
        assert_eq!(
            surface.calls,
            vec![
                Call::Hidden(false),
                Call::Lock(true),
                Call::Icon(MenuIcon::Close)
            ]
        );
        assert_eq!(deferred.action, DeferredAction::SlideIn);
        assert_eq!(deferred.delay, Duration::from_millis(10));

        surface.calls.clear();
        assert!(panel.fire(deferred, &mut surface));
        assert_eq!(surface.calls, vec![Call::Transform(PanelTransform::OnScreen)]);
    }

    #[test]
    fn close_slides_out_now_and_defers_hide() {
        let mut panel = controller();
        let mut surface = Recorder::default();
        let slide_in = panel.open(&mut surface).unwrap();
        panel.fire(slide_in, &mut surface);
        surface.calls.clear();

        let deferred = panel
            .close(&mut surface, CloseReason::CloseButton)
            .expect("close schedules hide");

        assert!(!panel.is_open());
        assert_eq!(
            surface.calls,
            vec![
                Call::Transform(PanelTransform::OffScreen),
                Call::Lock(false),
                Call::Icon(MenuIcon::Open)
            ]
        );
        assert_eq!(deferred.action, DeferredAction::Hide);
        assert_eq!(deferred.delay, Duration::from_millis(300));
    }

    #[test]
    fn close_while_closed_is_a_no_op() {
        let mut panel = controller();
        let mut surface = Recorder::default();

        assert_eq!(panel.close(&mut surface, CloseReason::Escape), None);
        assert_eq!(panel.generation(), 0);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn reopen_policy_ignore_and_restart() {
        let mut surface = Recorder::default();

        let mut guarded = controller();
        guarded.open(&mut surface);
        assert_eq!(guarded.open(&mut surface), None);
        assert_eq!(guarded.generation(), 1);

        let config = PanelConfig {
            reopen: ReopenPolicy::Restart,
            ..PanelConfig::default()
        };
        let mut restarting = PanelController::new(&config);
        let first = restarting.open(&mut surface).unwrap();
        let second = restarting.open(&mut surface).unwrap();
        assert_eq!(second.generation, 2);
        assert!(!restarting.fire(first, &mut surface));
        assert!(restarting.fire(second, &mut surface));
    }

    #[test]
    fn stale_hide_does_not_rehide_reopened_panel() {
        let mut panel = controller();
        let mut surface = Recorder::default();

        panel.open(&mut surface);
        let hide = panel.close(&mut surface, CloseReason::Toggle).unwrap();
        let slide_in = panel.open(&mut surface).unwrap();
        surface.calls.clear();

        assert!(!panel.fire(hide, &mut surface));
        assert!(panel.fire(slide_in, &mut surface));
        assert_eq!(surface.calls, vec![Call::Transform(PanelTransform::OnScreen)]);
    }

    #[test]
    fn toggle_dispatches_on_state() {
        let mut panel = controller();
        let mut surface = Recorder::default();

        assert_eq!(panel.toggle(&mut surface).unwrap().action, DeferredAction::SlideIn);
        assert_eq!(panel.toggle(&mut surface).unwrap().action, DeferredAction::Hide);
        assert!(!panel.is_open());
    }

    #[test]
    fn triggers_only_close_when_they_should() {
        let mut panel = controller();
        let mut surface = Recorder::default();
        panel.open(&mut surface);

        assert_eq!(panel.on_key("Enter", &mut surface), None);
        assert_eq!(panel.on_resize(767.0, &mut surface), None);
        assert_eq!(panel.on_outside_click(true, false, &mut surface), None);
        assert_eq!(panel.on_outside_click(false, true, &mut surface), None);
        assert!(panel.is_open());

        assert!(panel.on_resize(768.0, &mut surface).is_some());
        assert!(!panel.is_open());

        panel.open(&mut surface);
        assert!(panel.on_key("Escape", &mut surface).is_some());

        panel.open(&mut surface);
        assert!(panel.on_outside_click(false, false, &mut surface).is_some());
        assert!(!panel.is_open());
    }

    #[test]
    fn transform_css() {
        assert_eq!(PanelTransform::OnScreen.as_css(), "translateX(0)");
        assert_eq!(PanelTransform::OffScreen.as_css(), "translateX(100%)");
        assert_eq!(CloseReason::NavLink.to_string(), "nav-link");
    }
}
