use crate::core::{Rect, SectionGeometry, SectionId, SectionLayout};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn document_height(document: &web::Document) -> f64 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Largest reachable scroll offset.
pub fn scroll_limit(window: &web::Window, document: &web::Document) -> f64 {
    (document_height(document) - viewport_height(window)).max(0.0)
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Section geometry read live from the render tree.
pub struct DomSectionLayout<'a> {
    document: &'a web::Document,
}

impl<'a> DomSectionLayout<'a> {
    pub fn new(document: &'a web::Document) -> Self {
        Self { document }
    }
}

impl SectionLayout for DomSectionLayout<'_> {
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        let el = html_element_by_id(self.document, id.as_str())?;
        Some(SectionGeometry::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }
}

pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";

/// Bounding boxes of every magnetic element, in document order.
pub fn magnetic_rects(document: &web::Document) -> Vec<Rect> {
    query_all(document, MAGNETIC_SELECTOR)
        .iter()
        .map(|el| {
            let r = el.get_bounding_client_rect();
            Rect::new(r.left(), r.top(), r.width(), r.height())
        })
        .collect()
}

/// Inline JSON text of `<script id=..>`, if present.
pub fn inline_json(document: &web::Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .filter(|s| !s.trim().is_empty())
}
