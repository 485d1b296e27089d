#![cfg(target_arch = "wasm32")]
use crate::core::settings::SettingsError;
use crate::core::{content, CursorState, ScrollTracker, SectionId, Settings, SmoothScroll};
use gloo_events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod reveal;

const SETTINGS_SCRIPT_ID: &str = "folio-settings";

/// Everything registered by `mount`. Dropping it removes every listener,
/// cancels the animation frame, disconnects the reveal observer and stops
/// the loader tasks.
struct Mount {
    wiring: events::Wiring,
    _listeners: Vec<EventListener>,
    _reveal: Option<reveal::RevealObserver>,
    animation: frame::AnimationLoop,
    loader_cancelled: Rc<Cell<bool>>,
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.loader_cancelled.set(true);
        self.animation.stop();
        log::info!("[mount] torn down");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Mount>> = const { RefCell::new(None) };
}

fn load_settings(document: &web::Document) -> (Settings, Option<SettingsError>) {
    match dom::inline_json(document, SETTINGS_SCRIPT_ID) {
        None => (Settings::default(), None),
        Some(text) => match Settings::from_json(&text) {
            Ok(s) => (s, None),
            Err(e) => (Settings::default(), Some(e)),
        },
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let (settings, settings_err) = match dom::window_document() {
        Some(doc) => load_settings(&doc),
        None => (Settings::default(), None),
    };
    let level = settings.level_filter().unwrap_or(log::Level::Info);
    console_log::init_with_level(level).ok();
    log::info!("folio-web starting");
    if let Some(e) = settings_err {
        log::warn!("[settings] {e}; using defaults");
    }

    if let Err(e) = mount_with(settings) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Attach all page behavior. A no-op when already mounted.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let (settings, err) = load_settings(&document);
    if let Some(e) = err {
        log::warn!("[settings] {e}; using defaults");
    }
    mount_with(settings).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// Detach all page behavior.
#[wasm_bindgen]
pub fn unmount() {
    MOUNTED.with(|m| m.borrow_mut().take());
}

#[wasm_bindgen(js_name = isMounted)]
pub fn is_mounted() -> bool {
    MOUNTED.with(|m| m.borrow().is_some())
}

/// Id of the section currently highlighted in the navigation.
#[wasm_bindgen(js_name = activeSection)]
pub fn active_section() -> Option<String> {
    MOUNTED.with(|m| {
        m.borrow()
            .as_ref()
            .map(|mount| mount.wiring.tracker.borrow().active().as_str().to_string())
    })
}

/// Smoothly scroll to the section with DOM id `id`.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) -> Result<(), JsValue> {
    let section: SectionId = id.parse().map_err(|e| JsValue::from_str(&format!("{e}")))?;
    MOUNTED.with(|m| match m.borrow().as_ref() {
        Some(mount) => {
            events::nav::scroll_to_section(&mount.wiring, section);
            Ok(())
        }
        None => Err(JsValue::from_str("not mounted")),
    })
}

/// Static content tables (skills, experience, projects, links).
#[wasm_bindgen(js_name = portfolioContent)]
pub fn portfolio_content() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&content::snapshot()).map_err(JsValue::from)
}

/// Skills grouped by category, categories in order of first use.
#[wasm_bindgen(js_name = skillsByCategory)]
pub fn skills_by_category() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&content::skills_by_category()).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = featuredProjects)]
pub fn featured_projects() -> Result<JsValue, JsValue> {
    let featured: Vec<_> = content::featured_projects().collect();
    serde_wasm_bindgen::to_value(&featured).map_err(JsValue::from)
}

/// Detail page content for `slug`, or `undefined` when the project has none.
#[wasm_bindgen(js_name = projectDetail)]
pub fn project_detail(slug: &str) -> Result<JsValue, JsValue> {
    match content::project_detail(slug) {
        Some(detail) => serde_wasm_bindgen::to_value(detail).map_err(JsValue::from),
        None => {
            log::debug!("[content] no detail page for {slug:?}");
            Ok(JsValue::UNDEFINED)
        }
    }
}

fn mount_with(settings: Settings) -> anyhow::Result<()> {
    if is_mounted() {
        log::info!("[mount] already mounted");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    frame::describe_spring("cursor", &settings.springs.cursor);
    frame::describe_spring("blob", &settings.springs.blob);
    frame::describe_spring("magnetic", &settings.springs.magnetic);

    let limit = dom::scroll_limit(&window, &document);
    let mut smooth = SmoothScroll::new(settings.smooth_scroll, limit);
    smooth.sync(dom::scroll_y(&window));

    let wiring = events::Wiring {
        window: window.clone(),
        document: document.clone(),
        settings: Rc::new(settings),
        tracker: Rc::new(RefCell::new(ScrollTracker::default())),
        cursor: Rc::new(RefCell::new(CursorState::default())),
        smooth: Rc::new(RefCell::new(smooth)),
    };

    let listeners = events::wire_all(&wiring);
    events::scroll::on_scroll(&wiring, true);
    events::pointer::apply_variant(&document, wiring.cursor.borrow().variant());

    reveal::apply_stagger_delays(&document);
    let reveal = match reveal::RevealObserver::observe(&document) {
        Ok(r) => Some(r),
        Err(e) => {
            // reveal targets stay visible without the observer
            log::warn!("[reveal] {e}");
            None
        }
    };

    let animation = frame::AnimationLoop::start(frame::FrameContext::new(wiring.clone()));

    let loader_cancelled = Rc::new(Cell::new(false));
    spawn_local(overlay::run_sequence(document.clone(), loader_cancelled.clone()));
    spawn_local(overlay::run_progress(document, loader_cancelled.clone()));

    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Mount {
            wiring,
            _listeners: listeners,
            _reveal: reveal,
            animation,
            loader_cancelled,
        });
    });
    log::info!("[mount] ready");
    Ok(())
}
