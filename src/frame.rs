use crate::core::constants::SPRING_MAX_FRAME_SEC;
use crate::core::motion::{skill_float, SkillFloat};
use crate::core::{Spring2, SpringConfig};
use crate::dom;
use crate::events::pointer::CURSOR_ID;
use crate::events::Wiring;
use glam::DVec2;
use gloo_render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const BLOB_ID: &str = "cursor-blob";
pub const SKILL_SELECTOR: &str = ".skill-item";

/// Per-frame state: smooth-scroll stepping and the spring-smoothed cursor layers.
pub struct FrameContext {
    w: Wiring,
    cursor_el: Option<web::HtmlElement>,
    blob_el: Option<web::HtmlElement>,
    skills: Vec<(web::HtmlElement, SkillFloat)>,
    cursor: Spring2,
    blob: Spring2,
    magnetic: Spring2,
    started: Instant,
    last_ts_ms: Option<f64>,
}

impl FrameContext {
    pub fn new(w: Wiring) -> Self {
        let springs = w.settings.springs;
        let cursor_el = dom::html_element_by_id(&w.document, CURSOR_ID);
        let blob_el = dom::html_element_by_id(&w.document, BLOB_ID);
        let skills = dom::query_all(&w.document, SKILL_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .enumerate()
            .map(|(i, el)| (el, skill_float(i)))
            .collect();
        Self {
            w,
            cursor_el,
            blob_el,
            skills,
            cursor: Spring2::new(springs.cursor, DVec2::ZERO),
            blob: Spring2::new(springs.blob, DVec2::ZERO),
            magnetic: Spring2::new(springs.magnetic, DVec2::ZERO),
            started: Instant::now(),
            last_ts_ms: None,
        }
    }

    pub fn frame(&mut self, ts_ms: f64) {
        let dt_sec = match self.last_ts_ms {
            Some(prev) => ((ts_ms - prev) / 1000.0).clamp(0.0, SPRING_MAX_FRAME_SEC),
            None => 0.0,
        };
        self.last_ts_ms = Some(ts_ms);

        let next = self.w.smooth.borrow_mut().advance(ts_ms / 1000.0);
        if let Some(y) = next {
            let x = self.w.window.scroll_x().unwrap_or(0.0);
            self.w.window.scroll_to_with_x_and_y(x, y);
        }

        let (pointer, pull, scale) = {
            let c = self.w.cursor.borrow();
            (c.pointer, c.pull.offset, c.scale())
        };
        self.cursor.set_target(pointer);
        self.blob.set_target(pointer);
        self.magnetic.set_target(pull);

        let pos = self.cursor.step(dt_sec) + self.magnetic.step(dt_sec);
        let blob = self.blob.step(dt_sec);

        if let Some(el) = &self.cursor_el {
            dom::set_style(
                el,
                "transform",
                &format!(
                    "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) scale({scale})",
                    pos.x, pos.y
                ),
            );
        }
        if let Some(el) = &self.blob_el {
            dom::set_style(
                el,
                "transform",
                &format!("translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%)", blob.x, blob.y),
            );
        }

        let t = self.started.elapsed().as_secs_f64();
        for (el, float) in &self.skills {
            let o = float.offset_at(t);
            dom::set_style(el, "transform", &format!("translate3d({:.2}px, {:.2}px, 0)", o.x, o.y));
        }
    }
}

/// Recurring animation-frame driver. The callback chain stops when `stop` is
/// called or the loop is dropped; the pending frame is cancelled either way.
pub struct AnimationLoop {
    slot: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn start(ctx: FrameContext) -> Self {
        let ctx = Rc::new(RefCell::new(ctx));
        let slot = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(true));
        schedule(ctx, slot.clone(), running.clone());
        log::info!("[frame] loop started");
        Self { slot, running }
    }

    pub fn stop(&self) {
        if self.running.replace(false) {
            // dropping the handle cancels the pending frame and breaks the
            // callback -> slot reference cycle
            self.slot.borrow_mut().take();
            log::info!("[frame] loop stopped");
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(
    ctx: Rc<RefCell<FrameContext>>,
    slot: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
) {
    if !running.get() {
        return;
    }
    let slot_cb = slot.clone();
    let handle = request_animation_frame(move |ts_ms| {
        slot_cb.borrow_mut().take();
        if !running.get() {
            return;
        }
        ctx.borrow_mut().frame(ts_ms);
        schedule(ctx, slot_cb, running);
    });
    *slot.borrow_mut() = Some(handle);
}

/// Log a spring's coefficients at mount.
pub fn describe_spring(name: &str, cfg: &SpringConfig) {
    log::debug!(
        "[frame] {name} spring k={} c={} zeta={:.2}",
        cfg.stiffness,
        cfg.damping,
        cfg.damping_ratio()
    );
}
