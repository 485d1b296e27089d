use super::Wiring;
use crate::dom;
use gloo_events::{EventListener, EventListenerOptions};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// WheelEvent.deltaMode values
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;
const LINE_HEIGHT_PX: f64 = 16.0;

fn wheel_delta_px(ev: &web::WheelEvent, viewport_height: f64) -> f64 {
    match ev.delta_mode() {
        DOM_DELTA_LINE => ev.delta_y() * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => ev.delta_y() * viewport_height,
        _ => ev.delta_y(),
    }
}

fn refresh_limit(w: &Wiring) {
    let limit = dom::scroll_limit(&w.window, &w.document);
    w.smooth.borrow_mut().set_limit(limit);
}

/// Route wheel and touch drags through the smooth scroller instead of the
/// native scroll. Both listeners are non-passive so they can cancel it.
pub fn wire_wheel_and_touch(w: &Wiring) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let window = w.window.clone();

    let w_wheel = w.clone();
    listeners.push(EventListener::new_with_options(
        &window,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            if ev.ctrl_key() {
                // pinch-zoom gesture
                return;
            }
            ev.prevent_default();
            refresh_limit(&w_wheel);
            let delta = wheel_delta_px(ev, dom::viewport_height(&w_wheel.window));
            w_wheel.smooth.borrow_mut().on_wheel(delta);
        },
    ));

    let last_touch_y: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

    let touch_start = last_touch_y.clone();
    listeners.push(EventListener::new(&window, "touchstart", move |ev| {
        let y = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().item(0))
            .map(|t| t.client_y() as f64);
        touch_start.set(y);
    }));

    let w_touch = w.clone();
    let touch_move = last_touch_y.clone();
    listeners.push(EventListener::new_with_options(
        &window,
        "touchmove",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            let Some(touch) = ev.touches().item(0) else {
                return;
            };
            let y = touch.client_y() as f64;
            if let Some(prev) = touch_move.replace(Some(y)) {
                ev.prevent_default();
                refresh_limit(&w_touch);
                w_touch.smooth.borrow_mut().on_touch(prev - y);
            }
        },
    ));

    let touch_end = last_touch_y;
    listeners.push(EventListener::new(&window, "touchend", move |_| {
        touch_end.set(None);
    }));

    listeners
}

pub fn wire_resize(w: &Wiring) -> EventListener {
    let w = w.clone();
    let window = w.window.clone();
    EventListener::new(&window, "resize", move |_| {
        refresh_limit(&w);
        super::scroll::on_scroll(&w, false);
    })
}
