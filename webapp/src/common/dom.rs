use js_sys::{Array, Reflect};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use menu_core::{
    haptics::Haptic,
    nav::Viewport,
    strip::{StripMetrics, TabGeometry},
    theme::Theme,
};

// dom id of the scrollable category strip; each tab carries data-id="<section id>"
pub const STRIP_ID: &str = "category-strip";

fn smooth() -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options
}

// the live page, seen through the navigation controller's Viewport trait
//
// it is cheap to build, so handlers create one per event rather than holding on to elements
// that may be re-rendered in the meantime
pub struct DomViewport {
    window: Option<Window>,
    document: Option<Document>,
}

impl DomViewport {
    pub fn new() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|window| window.document());

        DomViewport { window, document }
    }

    fn strip(&self) -> Option<HtmlElement> {
        self.document
            .as_ref()?
            .get_element_by_id(STRIP_ID)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Viewport for DomViewport {
    fn section_top(&self, id: &str) -> Option<f64> {
        let document = self.document.as_ref()?;
        let target = document.get_element_by_id(id)?;
        let body = document.body()?;

        Some(target.get_bounding_client_rect().top() - body.get_bounding_client_rect().top())
    }

    fn scroll_page_to(&mut self, top: f64) {
        if let Some(window) = &self.window {
            let options = smooth();
            options.set_top(top);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn strip_metrics(&self) -> Option<StripMetrics> {
        let strip = self.strip()?;

        Some(StripMetrics {
            scroll_left: f64::from(strip.scroll_left()),
            scroll_width: f64::from(strip.scroll_width()),
            client_width: f64::from(strip.client_width()),
        })
    }

    fn tab_geometry(&self, id: &str) -> Option<TabGeometry> {
        let tab = self
            .strip()?
            .query_selector(&format!("[data-id=\"{id}\"]"))
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(TabGeometry {
            offset_left: f64::from(tab.offset_left()),
            width: f64::from(tab.offset_width()),
        })
    }

    fn scroll_strip_to(&mut self, left: f64) {
        if let Some(strip) = self.strip() {
            let options = smooth();
            options.set_left(left);
            strip.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn scroll_strip_by(&mut self, delta: f64) {
        if let Some(strip) = self.strip() {
            let options = smooth();
            options.set_left(delta);
            strip.scroll_by_with_scroll_to_options(&options);
        }
    }
}

pub fn scroll_to_top() {
    DomViewport::new().scroll_page_to(0.0);
}

pub fn current_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

// the presentation flag every style rule keys off; other classes on the root are left alone
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    let Some(root) = root else {
        return;
    };

    let classes = root.class_list();
    let swapped = classes
        .remove_1(theme.toggled().as_str())
        .and_then(|_| classes.add_1(theme.as_str()));

    if let Err(err) = swapped {
        warn!(?err, "could not apply theme class");
    }
}

// best-effort vibration; unsupported platforms simply ignore it
pub fn haptic(kind: Haptic) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let navigator = window.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false) {
        return;
    }

    let pattern = kind
        .pattern()
        .iter()
        .map(|ms| JsValue::from(*ms))
        .collect::<Array>();

    let _ = navigator.vibrate_with_pattern(&pattern);
}
