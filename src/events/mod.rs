pub mod nav;
pub mod pointer;
pub mod scroll;
pub mod wheel;

use crate::core::{CursorState, ScrollTracker, Settings, SmoothScroll};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared state handed to every handler. Each piece is owned by exactly one
/// kind of event; the frame loop only reads cursor state and drives the scroller.
#[derive(Clone)]
pub struct Wiring {
    pub window: web::Window,
    pub document: web::Document,
    pub settings: Rc<Settings>,
    pub tracker: Rc<RefCell<ScrollTracker>>,
    pub cursor: Rc<RefCell<CursorState>>,
    pub smooth: Rc<RefCell<SmoothScroll>>,
}

/// Register every page listener. Dropping the returned handles removes them.
pub fn wire_all(w: &Wiring) -> Vec<EventListener> {
    let mut listeners = vec![scroll::wire_scroll(w), pointer::wire_pointermove(w)];
    listeners.extend(pointer::wire_hover_targets(w));
    listeners.extend(nav::wire_nav_targets(w));
    listeners.push(wheel::wire_resize(w));
    if w.settings.smooth_scroll.enabled {
        listeners.extend(wheel::wire_wheel_and_touch(w));
    }
    log::info!("[events] {} listeners registered", listeners.len());
    listeners
}
