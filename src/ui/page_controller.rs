//! One-time page setup and the scroll-to-section entry point

use crate::core::PageConfig;

/// Arm the scroll reveal observer and the nav spy listener.
///
/// Called once after hydration with the page's window and document. A part
/// that fails to arm is logged and skipped; the rest of the page keeps working.
#[cfg(not(feature = "ssr"))]
pub fn setup_page(window: &web_sys::Window, document: &web_sys::Document, config: &PageConfig) {
    use leptos::logging::warn;

    if let Err(e) = crate::ui::scroll_reveal::arm_scroll_reveal(document, config) {
        warn!("Scroll reveal unavailable: {:?}", e);
    }
    if let Err(e) = crate::ui::nav_spy::arm_nav_spy(window, document, config) {
        warn!("Nav spy unavailable: {:?}", e);
    }
}

/// Run [`setup_page`] once the component has mounted in the browser
pub fn use_page_setup(config: PageConfig) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::prelude::Effect;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            setup_page(&window, &document, &config);
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = config;
    }
}

/// Smoothly scroll the element with `id` into view; no-op if it is missing
pub fn scroll_to_section(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}
