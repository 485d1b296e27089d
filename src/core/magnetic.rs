use super::constants::{MAGNETIC_PULL, MAGNETIC_RADIUS_PX};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Bounding box of an element in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Visual variant of the cursor-following indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
    Text,
    Magnetic,
}

impl CursorVariant {
    pub const ALL: [CursorVariant; 4] = [
        CursorVariant::Default,
        CursorVariant::Hover,
        CursorVariant::Text,
        CursorVariant::Magnetic,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            CursorVariant::Default => "cursor-default",
            CursorVariant::Hover => "cursor-hover",
            CursorVariant::Text => "cursor-text",
            CursorVariant::Magnetic => "cursor-magnetic",
        }
    }

    /// Parses the value of a `data-cursor` attribute. Only the hover-style
    /// variants can be requested from markup.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "hover" => Some(CursorVariant::Hover),
            "text" => Some(CursorVariant::Text),
            _ => None,
        }
    }
}

/// Which engaged element wins when several radii overlap at the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagneticPolicy {
    /// Closest centre wins; on equal distance the earlier element is kept.
    #[default]
    Nearest,
    /// Whichever engaged element comes last in document order.
    LastEngaged,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagneticSettings {
    pub radius: f64,
    pub pull: f64,
    pub policy: MagneticPolicy,
}

impl Default for MagneticSettings {
    fn default() -> Self {
        Self {
            radius: MAGNETIC_RADIUS_PX,
            pull: MAGNETIC_PULL,
            policy: MagneticPolicy::Nearest,
        }
    }
}

/// Raw attraction for one pointer sample, before spring smoothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MagneticPull {
    pub offset: DVec2,
    pub variant: CursorVariant,
    /// Index into the rect list of the winning element.
    pub engaged: Option<usize>,
}

/// Strength in `[0, 1]` for a pointer `distance` away from a centre;
/// `None` when the element is not engaged.
#[inline]
pub fn engagement(distance: f64, radius: f64) -> Option<f64> {
    (distance < radius).then(|| (1.0 - distance / radius).max(0.0))
}

pub fn attract(pointer: DVec2, rects: &[Rect], settings: &MagneticSettings) -> MagneticPull {
    let mut winner: Option<(usize, f64, DVec2)> = None;

    for (i, rect) in rects.iter().enumerate() {
        let center = rect.center();
        let distance = pointer.distance(center);
        let Some(strength) = engagement(distance, settings.radius) else {
            continue;
        };
        let offset = (pointer - center) * strength * settings.pull;
        match (settings.policy, winner) {
            (MagneticPolicy::Nearest, Some((_, best, _))) if distance >= best => {}
            _ => winner = Some((i, distance, offset)),
        }
    }

    match winner {
        Some((i, _, offset)) => MagneticPull {
            offset,
            variant: CursorVariant::Magnetic,
            engaged: Some(i),
        },
        None => MagneticPull::default(),
    }
}

/// Pointer position, markup-driven hover variant and the latest magnetic
/// result, combined into what the cursor indicator should show.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorState {
    pub pointer: DVec2,
    pub hover: Option<CursorVariant>,
    pub pull: MagneticPull,
}

impl CursorState {
    pub fn on_pointer_move(&mut self, pointer: DVec2, rects: &[Rect], settings: &MagneticSettings) -> MagneticPull {
        self.pointer = pointer;
        self.pull = attract(pointer, rects, settings);
        self.pull
    }

    pub fn on_hover_enter(&mut self, variant: CursorVariant) {
        self.hover = Some(variant);
    }

    pub fn on_hover_leave(&mut self) {
        self.hover = None;
    }

    /// Magnetic engagement overrides a hover variant, which overrides Default.
    pub fn variant(&self) -> CursorVariant {
        match (self.pull.variant, self.hover) {
            (CursorVariant::Magnetic, _) => CursorVariant::Magnetic,
            (_, Some(v)) => v,
            _ => CursorVariant::Default,
        }
    }

    /// Indicator scale: hover grows the dot.
    pub fn scale(&self) -> f64 {
        if self.variant() == CursorVariant::Hover {
            1.2
        } else {
            1.0
        }
    }
}
