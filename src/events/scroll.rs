use super::Wiring;
use crate::core::motion::parallax_percent;
use crate::core::scroll::{scroll_progress, ScrollUpdate};
use crate::core::{SectionId, SectionLayout};
use crate::dom::{self, DomSectionLayout};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const NAV_ID: &str = "site-nav";
pub const NAV_SCROLLED_CLASS: &str = "nav-scrolled";
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const HERO_BG_SELECTOR: &str = ".hero-bg";
pub const NAV_TARGET_SELECTOR: &str = "[data-nav-target]";

pub fn wire_scroll(w: &Wiring) -> EventListener {
    let w = w.clone();
    let window = w.window.clone();
    EventListener::new(&window, "scroll", move |_| {
        on_scroll(&w, false);
    })
}

/// Handle one scroll sample. `force` repaints nav state even when nothing
/// changed (used once at mount).
pub fn on_scroll(w: &Wiring, force: bool) {
    let offset = dom::scroll_y(&w.window);
    {
        let mut smooth = w.smooth.borrow_mut();
        if !smooth.is_animating() {
            smooth.sync(offset);
        }
    }

    let layout = DomSectionLayout::new(&w.document);
    let update = w.tracker.borrow_mut().update(offset, &layout);
    apply_update(&w.document, &update, force);

    let progress = scroll_progress(
        offset,
        dom::document_height(&w.document),
        dom::viewport_height(&w.window),
    );
    if let Some(bar) = dom::html_element_by_id(&w.document, PROGRESS_BAR_ID) {
        dom::set_style(&bar, "width", &format!("{:.3}%", progress * 100.0));
    }

    if let Some(hero) = layout.geometry(SectionId::Home) {
        let pct = parallax_percent(offset, hero.top, hero.height);
        for el in dom::query_all(&w.document, HERO_BG_SELECTOR) {
            if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
                dom::set_style(el, "transform", &format!("translate3d(0, {pct:.2}%, 0)"));
            }
        }
    }
}

fn apply_update(document: &web::Document, update: &ScrollUpdate, force: bool) {
    if update.active_changed || force {
        log::debug!("[scroll] active section -> {}", update.active);
        mark_active(document, update.active);
    }
    if update.nav_changed || force {
        if let Some(nav) = document.get_element_by_id(NAV_ID) {
            dom::set_class(&nav, NAV_SCROLLED_CLASS, update.nav_scrolled);
        }
    }
}

/// Highlight the nav entries pointing at `active`.
pub fn mark_active(document: &web::Document, active: SectionId) {
    for el in dom::query_all(document, NAV_TARGET_SELECTOR) {
        let is_active = el
            .get_attribute("data-nav-target")
            .is_some_and(|t| t == active.as_str());
        _ = el.set_attribute("data-active", if is_active { "true" } else { "false" });
        dom::set_class(&el, "active", is_active);
    }
}
