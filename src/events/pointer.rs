use super::Wiring;
use crate::core::CursorVariant;
use crate::dom;
use glam::DVec2;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CURSOR_ID: &str = "cursor";
pub const HOVER_SELECTOR: &str = "[data-cursor]";

pub fn wire_pointermove(w: &Wiring) -> EventListener {
    let w = w.clone();
    let window = w.window.clone();
    EventListener::new(&window, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pointer = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        let rects = dom::magnetic_rects(&w.document);

        let before = w.cursor.borrow().variant();
        let after = {
            let mut cursor = w.cursor.borrow_mut();
            let pull = cursor.on_pointer_move(pointer, &rects, &w.settings.magnetic);
            if let Some(i) = pull.engaged {
                log::trace!("[cursor] magnetic element {i} offset=({:.1},{:.1})", pull.offset.x, pull.offset.y);
            }
            cursor.variant()
        };
        if before != after {
            apply_variant(&w.document, after);
        }
    })
}

/// Enter/leave listeners for every `[data-cursor]` element.
pub fn wire_hover_targets(w: &Wiring) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for el in dom::query_all(&w.document, HOVER_SELECTOR) {
        let Some(variant) = el
            .get_attribute("data-cursor")
            .as_deref()
            .and_then(CursorVariant::from_attr)
        else {
            log::warn!("[cursor] ignoring data-cursor on <{}>", el.tag_name().to_lowercase());
            continue;
        };

        let w_enter = w.clone();
        listeners.push(EventListener::new(&el, "mouseenter", move |_| {
            let v = {
                let mut cursor = w_enter.cursor.borrow_mut();
                cursor.on_hover_enter(variant);
                cursor.variant()
            };
            apply_variant(&w_enter.document, v);
        }));

        let w_leave = w.clone();
        listeners.push(EventListener::new(&el, "mouseleave", move |_| {
            let v = {
                let mut cursor = w_leave.cursor.borrow_mut();
                cursor.on_hover_leave();
                cursor.variant()
            };
            apply_variant(&w_leave.document, v);
        }));
    }
    listeners
}

pub fn apply_variant(document: &web::Document, variant: CursorVariant) {
    if let Some(el) = document.get_element_by_id(CURSOR_ID) {
        for v in CursorVariant::ALL {
            dom::set_class(&el, v.class_name(), v == variant);
        }
    }
}
