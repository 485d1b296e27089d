use crate::core::constants::LOADING_TICK_MS;
use crate::core::motion::{LoadingPhase, LoadingProgress, LoadingSequence};
use crate::dom;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

const LOADER_ID: &str = "loading-overlay";
const LOADER_PROGRESS_ID: &str = "loading-progress";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        dom::set_class(&el, "hidden", false);
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        dom::set_class(&el, "hidden", true);
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}

pub fn set_progress_label(document: &web::Document, progress: &LoadingProgress) {
    if let Some(el) = document.get_element_by_id(LOADER_PROGRESS_ID) {
        el.set_text_content(Some(&progress.label()));
    }
}

/// Reflect the intro phase on `<body data-phase=..>` so CSS can stage the hero.
pub fn apply_phase(document: &web::Document, phase: LoadingPhase) {
    let name = match phase {
        LoadingPhase::Loading => "loading",
        LoadingPhase::Visible => "visible",
        LoadingPhase::Loaded => "loaded",
        LoadingPhase::Done => "done",
    };
    if let Some(body) = document.body() {
        _ = body.set_attribute("data-phase", name);
    }
    if phase == LoadingPhase::Done && !is_hidden(document) {
        hide(document);
    }
}

/// Drive the percentage counter until the sequence finishes or `cancelled` is set.
pub async fn run_progress(document: web::Document, cancelled: Rc<Cell<bool>>) {
    let mut progress = LoadingProgress::default();
    let mut rng = rand::thread_rng();
    set_progress_label(&document, &progress);
    while !progress.is_complete() && !cancelled.get() {
        TimeoutFuture::new(LOADING_TICK_MS).await;
        progress.tick(&mut rng);
        set_progress_label(&document, &progress);
    }
}

/// Step through the intro phases on their schedule.
pub async fn run_sequence(document: web::Document, cancelled: Rc<Cell<bool>>) {
    let seq = LoadingSequence::default();
    show(&document);
    apply_phase(&document, LoadingPhase::Loading);
    for (phase, wait_sec) in seq.steps() {
        TimeoutFuture::new((wait_sec * 1000.0).round().max(0.0) as u32).await;
        if cancelled.get() {
            return;
        }
        log::info!("[loader] phase {:?}", phase);
        apply_phase(&document, phase);
    }
    if let Some(el) = document.get_element_by_id(LOADER_PROGRESS_ID) {
        let mut done = LoadingProgress::default();
        done.finish();
        el.set_text_content(Some(&done.label()));
    }
}
