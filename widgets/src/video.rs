//! Video lightbox.

/// Page-side operations for the modal and its video element.
pub trait VideoSurface {
    fn set_modal_hidden(&mut self, hidden: bool);
    /// Seek back to the start.
    fn rewind(&mut self);
    fn play(&mut self);
    fn pause(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoModal {
    open: bool,
}

impl VideoModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Thumbnail click: show the modal and play from the beginning.
    pub fn open<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) {
        self.open = true;
        surface.set_modal_hidden(false);
        surface.rewind();
        surface.play();
    }

    /// Hide the modal, stop playback and reset it.
    pub fn close<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) {
        self.open = false;
        surface.set_modal_hidden(true);
        surface.pause();
        surface.rewind();
    }

    /// Click inside the modal container. Only a click on the backdrop itself
    /// (not on the player or its frame) closes it.
    pub fn on_modal_click<S: VideoSurface + ?Sized>(
        &mut self,
        target_is_backdrop: bool,
        surface: &mut S,
    ) -> bool {
        if !target_is_backdrop {
            return false;
        }
        self.close(surface);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Player {
        log: Vec<&'static str>,
    }

    impl VideoSurface for Player {
        fn set_modal_hidden(&mut self, hidden: bool) {
            self.log.push(if hidden { "hide" } else { "show" });
        }
        fn rewind(&mut self) {
            self.log.push("rewind");
        }
        fn play(&mut self) {
            self.log.push("play");
        }
        fn pause(&mut self) {
            self.log.push("pause");
        }
    }

    #[test]
    fn open_then_close() {
        let mut modal = VideoModal::new();
        let mut player = Player::default();

        modal.open(&mut player);
        assert!(modal.is_open());
        modal.close(&mut player);
        assert!(!modal.is_open());

        assert_eq!(
            player.log,
            vec!["show", "rewind", "play", "hide", "pause", "rewind"]
        );
    }

    #[test]
    fn only_backdrop_clicks_close() {
        let mut modal = VideoModal::new();
        let mut player = Player::default();
        modal.open(&mut player);

        assert!(!modal.on_modal_click(false, &mut player));
        assert!(modal.is_open());
        assert!(modal.on_modal_click(true, &mut player));
        assert!(!modal.is_open());
    }
}
