//! Testimonial video lightbox.

use std::cell::RefCell;
use std::rc::Rc;

use landing_widgets::{Feature, VideoConfig, VideoModal, VideoSurface, WidgetsError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlMediaElement};

use crate::dom::{self, JsResultExt};

const FEATURE: Feature = Feature::VideoModal;

struct DomVideo {
    modal: Element,
    video: HtmlMediaElement,
    hidden_class: String,
}

impl VideoSurface for DomVideo {
    fn set_modal_hidden(&mut self, hidden: bool) {
        let classes = self.modal.class_list();
        let result = if hidden {
            classes.add_1(&self.hidden_class)
        } else {
            classes.remove_1(&self.hidden_class)
        };
        dom::warn_on_err(FEATURE, "toggling modal", result);
    }

    fn rewind(&mut self) {
        self.video.set_current_time(0.0);
    }

    fn play(&mut self) {
        match self.video.play() {
            Ok(promise) => log_rejected_play(promise),
            Err(e) => dom::warn_on_err(FEATURE, "starting playback", Err(e)),
        }
    }

    fn pause(&mut self) {
        dom::warn_on_err(FEATURE, "pausing playback", self.video.pause());
    }
}

/// Autoplay policies reject `play()` asynchronously; surface that in the log.
fn log_rejected_play(promise: js_sys::Promise) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            tracing::warn!(error = %dom::describe(&e), "video playback was refused");
        }
    });
}

pub(crate) fn install(
    document: &Document,
    config: &VideoConfig,
    hidden_class: &str,
) -> Result<(), WidgetsError> {
    let thumbnail = dom::by_id(document, FEATURE, &config.thumbnail_id)?;
    let modal = dom::by_id(document, FEATURE, &config.modal_id)?;
    let close = dom::by_id(document, FEATURE, &config.close_id)?;
    let video = dom::by_id(document, FEATURE, &config.video_id)?
        .dyn_into::<HtmlMediaElement>()
        .map_err(|_| {
            WidgetsError::dom(FEATURE, format!("#{} is not a media element", config.video_id))
        })?;

    let backdrop: JsValue = modal.clone().into();
    let state = Rc::new(RefCell::new((
        VideoModal::new(),
        DomVideo {
            modal: modal.clone(),
            video,
            hidden_class: hidden_class.to_string(),
        },
    )));

    {
        let state = state.clone();
        dom::listen(&thumbnail, "click", move |_| {
            let mut guard = state.borrow_mut();
            let (modal, surface) = &mut *guard;
            modal.open(surface);
        })
        .dom(FEATURE)?;
    }

    {
        let state = state.clone();
        dom::listen(&close, "click", move |_| {
            let mut guard = state.borrow_mut();
            let (modal, surface) = &mut *guard;
            modal.close(surface);
        })
        .dom(FEATURE)?;
    }

    dom::listen(&modal, "click", move |event| {
        let on_backdrop = event.target().map(JsValue::from).as_ref() == Some(&backdrop);
        let mut guard = state.borrow_mut();
        let (modal, surface) = &mut *guard;
        modal.on_modal_click(on_backdrop, surface);
    })
    .dom(FEATURE)?;

    tracing::debug!("video modal wired");
    Ok(())
}
