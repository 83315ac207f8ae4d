//! Navigation highlighter
//!
//! On every scroll event the `section[id]` under `scrollY + offset` is looked
//! up and its `.nav-menu` link gets the `active` class.

use leptos::logging::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::core::nav_spy::link_href;
use crate::core::{PageConfig, SectionBounds, active_section};

const NAV_LINKS: &str = ".nav-menu a";
const ACTIVE_CLASS: &str = "active";

/// Measure every `section[id]` in document order
pub fn collect_sections(document: &Document) -> Result<Vec<SectionBounds>, JsValue> {
    let nodes = document.query_selector_all("section[id]")?;
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(section) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        sections.push(SectionBounds::new(
            section.id(),
            f64::from(section.offset_top()),
            f64::from(section.client_height()),
        ));
    }
    Ok(sections)
}

/// Move the `active` class to the link for `section_id`
pub fn highlight_link(document: &Document, section_id: &str) -> Result<(), JsValue> {
    let links = document.query_selector_all(NAV_LINKS)?;
    for i in 0..links.length() {
        if let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            link.class_list().remove_1(ACTIVE_CLASS)?;
        }
    }

    let selector = format!("{NAV_LINKS}[href=\"{}\"]", link_href(section_id));
    if let Some(link) = document.query_selector(&selector)? {
        link.class_list().add_1(ACTIVE_CLASS)?;
    }
    Ok(())
}

fn update(window: &Window, document: &Document, offset: f64) -> Result<(), JsValue> {
    let sections = collect_sections(document)?;
    if let Some(id) = active_section(&sections, window.scroll_y()?, offset) {
        highlight_link(document, id)?;
    }
    Ok(())
}

/// Attach the scroll listener to `window`
pub fn arm_nav_spy(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let offset = config.nav_offset_px;
    let listener_window = window.clone();
    let listener_document = document.clone();

    let handler = Closure::<dyn Fn()>::new(move || {
        if let Err(e) = update(&listener_window, &listener_document, offset) {
            warn!("Nav spy update failed: {:?}", e);
        }
    });
    window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())?;

    // Keep the closure alive
    handler.forget();
    Ok(())
}
