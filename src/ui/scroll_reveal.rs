//! Scroll-triggered fade-in for cards
//!
//! One `IntersectionObserver` watches every element matching the reveal
//! selectors. Each element starts at `opacity: 0`; the first time it crosses
//! the threshold it gets the fade-in animation and is unobserved.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::log;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::core::{PageConfig, RevealTracker};

/// Attribute linking a DOM element to its tracker id
const REVEAL_ID_ATTR: &str = "data-reveal-id";

fn reveal_id(element: &Element) -> Option<u32> {
    element.get_attribute(REVEAL_ID_ATTR)?.parse().ok()
}

fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    match element.dyn_ref::<HtmlElement>() {
        Some(el) => el.style().set_property(property, value),
        None => Ok(()),
    }
}

/// Register all reveal targets in `document` and start observing them.
///
/// Returns the number of elements armed.
pub fn arm_scroll_reveal(document: &Document, config: &PageConfig) -> Result<usize, JsValue> {
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let animation = config.reveal_animation;

    let callback_tracker = Rc::clone(&tracker);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = reveal_id(&target) else {
                    continue;
                };
                if callback_tracker
                    .borrow_mut()
                    .on_intersection(id, entry.is_intersecting())
                {
                    let _ = set_style(&target, "animation", animation);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let nodes = document.query_selector_all(config.reveal_selectors)?;
    let mut armed = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let id = tracker.borrow_mut().register();
        element.set_attribute(REVEAL_ID_ATTR, &id.to_string())?;
        set_style(&element, "opacity", "0")?;
        observer.observe(&element);
        armed += 1;
    }

    // The observer lives as long as the page
    callback.forget();

    log!("Scroll reveal armed for {} elements", armed);
    Ok(armed)
}
