use crate::core::easing::CubicBezier;
use crate::core::motion::{experience_highlight_delay, RevealGroup};
use crate::dom;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const REVEAL_SELECTOR: &str = ".section-reveal, .reveal-text, [data-stagger]";
const REVEAL_THRESHOLD: f64 = 0.2;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
const HIGHLIGHT_SELECTOR: &str = "[data-highlight]";

/// Assign `transition-delay` to every `[data-stagger="<group>"]` element from
/// its position inside the group. Highlights inside experience cards are
/// scheduled after their card.
pub fn apply_stagger_delays(document: &web::Document) {
    let hero_curve = CubicBezier::HERO.css();
    let mut counters: HashMap<RevealGroup, usize> = HashMap::new();
    for el in dom::query_all(document, "[data-stagger]") {
        let Some(raw) = el.get_attribute("data-stagger") else {
            continue;
        };
        let Some(group) = RevealGroup::from_attr(&raw) else {
            log::warn!("[reveal] unknown stagger group {raw:?}");
            continue;
        };
        let index = counters.entry(group).or_insert(0);
        let delay = group.delay(*index);
        let card = *index;
        *index += 1;
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            dom::set_style(html, "transition-delay", &format!("{delay:.2}s"));
            if group == RevealGroup::HeroLetter {
                dom::set_style(html, "transition-timing-function", &hero_curve);
            }
        }
        if group == RevealGroup::ExperienceCard {
            stagger_highlights(&el, card);
        }
    }
}

fn stagger_highlights(card_el: &web::Element, card: usize) {
    let Ok(list) = card_el.query_selector_all(HIGHLIGHT_SELECTOR) else {
        return;
    };
    let highlights = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok());
    for (i, el) in highlights.enumerate() {
        let delay = experience_highlight_delay(card, i);
        dom::set_style(&el, "transition-delay", &format!("{delay:.2}s"));
    }
}

/// Toggles `data-revealed` as elements enter and leave the viewport.
/// Disconnects on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(document: &web::Document) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let value = if entry.is_intersecting() { "true" } else { "false" };
                    _ = entry.target().set_attribute("data-revealed", value);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        let targets = dom::query_all(document, REVEAL_SELECTOR);
        for el in &targets {
            _ = el.set_attribute("data-revealed", "false");
            observer.observe(el);
        }
        log::info!("[reveal] observing {} elements", targets.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
