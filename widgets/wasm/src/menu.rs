//! Slide-in mobile menu bound to the page.
//!
//! The trigger button is required. The panel container is optional in the
//! page markup: when it is missing a default one is rendered at the end of
//! `<body>`.

use std::cell::RefCell;
use std::rc::Rc;

use landing_widgets::{
    CloseReason, Deferred, Feature, MenuIcon, PanelConfig, PanelController, PanelSurface,
    PanelTransform, WidgetsConfig, WidgetsError,
};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node};

use crate::dom::{self, JsResultExt};

const FEATURE: Feature = Feature::MobileMenu;

/// Links rendered in the default panel.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Become an Interviewer"),
    ("#resources", "Pricing"),
    ("#security", "Start a free trial"),
    ("#faq", "FAQ"),
];

/// The page elements the controller drives.
struct DomPanel {
    container: Element,
    panel: HtmlElement,
    body: HtmlElement,
    icon: Option<Element>,
    hidden_class: String,
    open_icon_class: String,
    close_icon_class: String,
}

impl PanelSurface for DomPanel {
    fn set_hidden(&mut self, hidden: bool) {
        let classes = self.container.class_list();
        let result = if hidden {
            classes.add_1(&self.hidden_class)
        } else {
            classes.remove_1(&self.hidden_class)
        };
        dom::warn_on_err(FEATURE, "toggling hidden class", result);
    }

    fn set_transform(&mut self, transform: PanelTransform) {
        let result = self.panel.style().set_property("transform", transform.as_css());
        dom::warn_on_err(FEATURE, "setting transform", result);
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        let style = self.body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        dom::warn_on_err(FEATURE, "toggling scroll lock", result);
    }

    fn set_icon(&mut self, icon: MenuIcon) {
        if let Some(element) = &self.icon {
            element.set_class_name(match icon {
                MenuIcon::Open => &self.open_icon_class,
                MenuIcon::Close => &self.close_icon_class,
            });
        }
    }
}

struct MobileMenu {
    controller: PanelController,
    surface: DomPanel,
}

type SharedMenu = Rc<RefCell<MobileMenu>>;

/// Apply one controller operation and schedule whatever it defers.
fn drive(
    menu: &SharedMenu,
    op: impl FnOnce(&mut PanelController, &mut DomPanel) -> Option<Deferred>,
) {
    let deferred = {
        let mut guard = menu.borrow_mut();
        let MobileMenu {
            controller,
            surface,
        } = &mut *guard;
        op(controller, surface)
    };

    if let Some(deferred) = deferred {
        let menu = menu.clone();
        dom::defer(deferred.delay, move || {
            let mut guard = menu.borrow_mut();
            let MobileMenu {
                controller,
                surface,
            } = &mut *guard;
            controller.fire(deferred, surface);
        });
    }
}

fn close_on(menu: &SharedMenu, reason: CloseReason) -> impl FnMut(Event) + 'static {
    let menu = menu.clone();
    move |_| drive(&menu, |controller, surface| controller.close(surface, reason))
}

/// Default panel markup: backdrop, slide-in sheet, close button, nav links.
#[component]
fn FallbackMenu(
    container_id: String,
    overlay_id: String,
    panel_id: String,
    close_id: String,
    hidden_class: String,
) -> impl IntoView {
    view! {
        <div id=container_id class=format!("fixed inset-0 z-50 {hidden_class}")>
            <div class="fixed inset-0 bg-black bg-opacity-50" id=overlay_id></div>
            <div
                class="fixed top-0 right-0 h-full w-64 bg-white shadow-xl transform translate-x-full transition-transform duration-300 ease-in-out"
                id=panel_id
            >
                <div class="flex items-center justify-between p-6 border-b">
                    <span class="text-xl font-bold text-dark-900">"Menu"</span>
                    <button
                        id=close_id
                        class="p-2 rounded-md text-gray-500 hover:text-gray-700 hover:bg-gray-100"
                    >
                        <i class="fas fa-times text-xl"></i>
                    </button>
                </div>
                <nav class="p-6">
                    <div class="space-y-4">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=*href
                                        class="block py-3 px-4 text-gray-700 hover:text-primary-600 hover:bg-gray-50 rounded-lg transition-colors"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="mt-8 pt-8 border-t border-gray-200 space-y-4">
                        <button class="w-full px-4 py-3 border border-gray-300 rounded-lg hover:bg-gray-50 transition-colors font-medium text-center">
                            "Login"
                        </button>
                        <button class="w-full px-4 py-3 bg-dark-900 text-white rounded-lg hover:bg-dark-800 transition-colors font-medium text-center">
                            "Sign up"
                        </button>
                    </div>
                </nav>
            </div>
        </div>
    }
}

fn mount_fallback(config: &PanelConfig, hidden_class: &str) {
    let container_id = config.container_id.clone();
    let overlay_id = config.overlay_id.clone();
    let panel_id = config.panel_id.clone();
    let close_id = config.close_id.clone();
    let hidden_class = hidden_class.to_string();

    tracing::debug!(id = %container_id, "rendering default mobile menu");
    leptos::mount::mount_to_body(move || {
        view! {
            <FallbackMenu
                container_id=container_id
                overlay_id=overlay_id
                panel_id=panel_id
                close_id=close_id
                hidden_class=hidden_class
            />
        }
    });
}

pub(crate) fn install(document: &Document, config: &WidgetsConfig) -> Result<(), WidgetsError> {
    let panel_config = &config.panel;
    let trigger = dom::by_id(document, FEATURE, &panel_config.trigger_id)?;
    let body = document
        .body()
        .ok_or_else(|| WidgetsError::missing(FEATURE, "body"))?;
    let window = web_sys::window().ok_or_else(|| WidgetsError::missing(FEATURE, "window"))?;

    if document.get_element_by_id(&panel_config.container_id).is_none() {
        mount_fallback(panel_config, &config.hidden_class);
    }
    let container = dom::by_id(document, FEATURE, &panel_config.container_id)?;
    let panel = dom::html(dom::by_id(document, FEATURE, &panel_config.panel_id)?, FEATURE)?;
    let icon = trigger.query_selector("i").dom(FEATURE)?;

    let menu: SharedMenu = Rc::new(RefCell::new(MobileMenu {
        controller: PanelController::new(panel_config),
        surface: DomPanel {
            container: container.clone(),
            panel,
            body,
            icon,
            hidden_class: config.hidden_class.clone(),
            open_icon_class: panel_config.open_icon_class.clone(),
            close_icon_class: panel_config.close_icon_class.clone(),
        },
    }));

    {
        let menu = menu.clone();
        dom::listen(&trigger, "click", move |_| {
            drive(&menu, |controller, surface| controller.toggle(surface))
        })
        .dom(FEATURE)?;
    }

    if let Some(close) = document.get_element_by_id(&panel_config.close_id) {
        dom::listen(&close, "click", close_on(&menu, CloseReason::CloseButton)).dom(FEATURE)?;
    }
    if let Some(overlay) = document.get_element_by_id(&panel_config.overlay_id) {
        dom::listen(&overlay, "click", close_on(&menu, CloseReason::Backdrop)).dom(FEATURE)?;
    }
    let links = dom::elements(container.query_selector_all("a[href^=\"#\"]").dom(FEATURE)?);
    for link in &links {
        dom::listen(link, "click", close_on(&menu, CloseReason::NavLink)).dom(FEATURE)?;
    }

    {
        let menu = menu.clone();
        let trigger = trigger.clone();
        dom::listen(document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside_panel = container.contains(target.as_ref());
            let inside_trigger = trigger.contains(target.as_ref());
            drive(&menu, |controller, surface| {
                controller.on_outside_click(inside_panel, inside_trigger, surface)
            });
        })
        .dom(FEATURE)?;
    }

    {
        let menu = menu.clone();
        dom::listen(document, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                let key = key_event.key();
                drive(&menu, |controller, surface| controller.on_key(&key, surface));
            }
        })
        .dom(FEATURE)?;
    }

    {
        let menu = menu.clone();
        let viewport = window.clone();
        dom::listen(&window, "resize", move |_| {
            let Some(width) = viewport.inner_width().ok().and_then(|w| w.as_f64()) else {
                return;
            };
            drive(&menu, |controller, surface| controller.on_resize(width, surface));
        })
        .dom(FEATURE)?;
    }

    tracing::debug!(nav_links = links.len(), "mobile menu wired");
    Ok(())
}
