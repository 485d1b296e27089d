use super::constants::{NAV_SCROLLED_THRESHOLD_PX, PROBE_LOOKAHEAD_PX};
use super::content::SectionId;

/// Vertical extent of a rendered section, in document pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open membership: `[top, top + height)`.
    #[inline]
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// Source of live section geometry (the render tree on the web side).
pub trait SectionLayout {
    /// `None` when the section has no element in the current document.
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry>;
}

impl SectionLayout for [(SectionId, SectionGeometry)] {
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        self.iter().find(|(s, _)| *s == id).map(|(_, g)| *g)
    }
}

impl<const N: usize> SectionLayout for [(SectionId, SectionGeometry); N] {
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        self.as_slice().geometry(id)
    }
}

impl SectionLayout for Vec<(SectionId, SectionGeometry)> {
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        self.as_slice().geometry(id)
    }
}

#[inline]
pub fn probe_position(scroll_offset: f64) -> f64 {
    scroll_offset + PROBE_LOOKAHEAD_PX
}

/// First section, in declared order, whose range holds the probe position.
pub fn resolve_active<L: SectionLayout + ?Sized>(scroll_offset: f64, layout: &L) -> Option<SectionId> {
    let probe = probe_position(scroll_offset);
    SectionId::ALL
        .into_iter()
        .find(|id| layout.geometry(*id).is_some_and(|g| g.contains(probe)))
}

#[inline]
pub fn is_nav_scrolled(scroll_offset: f64) -> bool {
    probe_position(scroll_offset) > NAV_SCROLLED_THRESHOLD_PX
}

/// Share of the scrollable range already travelled, in `[0, 1]`.
pub fn scroll_progress(scroll_offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    (scroll_offset / range).clamp(0.0, 1.0)
}

/// What changed after one scroll sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub active: SectionId,
    pub active_changed: bool,
    pub nav_scrolled: bool,
    pub nav_changed: bool,
}

/// Active section and nav background state carried between scroll events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollTracker {
    active: SectionId,
    nav_scrolled: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SectionId::Home)
    }
}

impl ScrollTracker {
    pub fn new(initial: SectionId) -> Self {
        Self {
            active: initial,
            nav_scrolled: false,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn nav_scrolled(&self) -> bool {
        self.nav_scrolled
    }

    /// Recompute from one discrete scroll sample. The previous active section
    /// is kept when the probe falls outside every known section.
    pub fn update<L: SectionLayout + ?Sized>(&mut self, scroll_offset: f64, layout: &L) -> ScrollUpdate {
        let prev_active = self.active;
        let prev_nav = self.nav_scrolled;

        if let Some(id) = resolve_active(scroll_offset, layout) {
            self.active = id;
        }
        self.nav_scrolled = is_nav_scrolled(scroll_offset);

        ScrollUpdate {
            active: self.active,
            active_changed: self.active != prev_active,
            nav_scrolled: self.nav_scrolled,
            nav_changed: self.nav_scrolled != prev_nav,
        }
    }
}
