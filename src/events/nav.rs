use super::Wiring;
use crate::core::constants::NAV_SCROLL_DURATION_SEC;
use crate::core::{SectionId, SectionLayout};
use crate::dom::{self, DomSectionLayout};
use gloo_events::{EventListener, EventListenerOptions};
use web_sys as web;

use super::scroll::NAV_TARGET_SELECTOR;

/// Clicks on `[data-nav-target="<section>"]` scroll to that section.
pub fn wire_nav_targets(w: &Wiring) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for el in dom::query_all(&w.document, NAV_TARGET_SELECTOR) {
        let raw = el.get_attribute("data-nav-target").unwrap_or_default();
        let section = match raw.parse::<SectionId>() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[nav] {e}");
                continue;
            }
        };
        let w = w.clone();
        listeners.push(EventListener::new_with_options(
            &el,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |ev| {
                ev.prevent_default();
                scroll_to_section(&w, section);
            },
        ));
    }
    listeners
}

pub fn scroll_to_section(w: &Wiring, section: SectionId) {
    let layout = DomSectionLayout::new(&w.document);
    let Some(geom) = layout.geometry(section) else {
        log::warn!("[nav] no #{section} element on this page");
        return;
    };
    log::info!("[nav] scroll to {section} (top={:.0})", geom.top);

    if w.settings.smooth_scroll.enabled {
        let mut smooth = w.smooth.borrow_mut();
        smooth.set_limit(dom::scroll_limit(&w.window, &w.document));
        smooth.scroll_to(geom.top, NAV_SCROLL_DURATION_SEC);
    } else {
        let opts = web::ScrollToOptions::new();
        opts.set_top(geom.top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.window.scroll_to_with_scroll_to_options(&opts);
    }
}
