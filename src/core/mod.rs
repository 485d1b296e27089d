pub mod constants;
pub mod content;
pub mod easing;
pub mod magnetic;
pub mod motion;
pub mod scroll;
pub mod settings;
pub mod smooth_scroll;
pub mod spring;

pub use content::SectionId;
pub use magnetic::{attract, CursorState, CursorVariant, MagneticPolicy, MagneticSettings, Rect};
pub use scroll::{ScrollTracker, SectionGeometry, SectionLayout};
pub use settings::Settings;
pub use smooth_scroll::SmoothScroll;
pub use spring::{Spring2, SpringConfig};
