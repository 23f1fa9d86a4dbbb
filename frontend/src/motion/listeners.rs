use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, Window,
};

/// Window scroll listener that unregisters itself when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Calls `on_scroll` with the vertical offset right away and on every scroll event.
    pub fn attach(on_scroll: impl Fn(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;

        let window_clone = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll(window_clone.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        if let Err(err) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            warn!("Could not listen for scroll events: {:?}", err);
            return None;
        }

        // Pick up the offset of a reloaded page that is already scrolled.
        if let Err(err) = callback.as_ref().unchecked_ref::<Function>().call0(&JsValue::NULL) {
            warn!("Initial scroll check failed: {:?}", err);
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Could not remove scroll listener: {:?}", err);
        }
    }
}

/// Intersection observer on a single element, disconnected when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl VisibilityObserver {
    /// Reports `true` whenever at least `threshold` of `element` is on screen, `false` when it leaves.
    pub fn observe(element: &Element, threshold: f64, on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(Array)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
        observer.observe(element);

        Some(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smoothly scrolls to the element named by an in-page anchor such as `#projects`.
pub fn scroll_to_anchor(anchor: &str) {
    let id = anchor.trim_start_matches('#');
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section found for anchor {}", anchor),
    }
}
