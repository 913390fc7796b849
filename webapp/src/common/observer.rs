use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use menu_core::nav::{Intersection, ObservationZone};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// an IntersectionObserver over the section anchors
//
// the closure has to outlive every callback, so it is owned here; dropping the observer
// disconnects it first
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl SectionObserver {
    // sections that are not in the document are skipped
    pub fn observe<F>(ids: &[String], zone: ObservationZone, mut on_batch: F) -> Option<Self>
    where
        F: FnMut(Vec<Intersection>) + 'static,
    {
        let callback: ObserverCallback = Closure::new(move |entries: Array, _: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection {
                    id: entry.target().id(),
                    intersecting: entry.is_intersecting(),
                    top: entry.bounding_client_rect().top(),
                })
                .collect();

            on_batch(batch);
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&zone.root_margin());
        options.set_threshold(&JsValue::from_f64(0.0));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

        let document = web_sys::window()?.document()?;
        for id in ids {
            if let Some(anchor) = document.get_element_by_id(id) {
                observer.observe(&anchor);
            }
        }

        Some(SectionObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// a window event listener that is removed again when dropped
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(handler);

        web_sys::window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(WindowListener { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}
