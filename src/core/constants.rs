/// Scroll, cursor and motion tuning constants.
///
/// These constants express intended behavior (lookahead distances, radii,
/// spring coefficients, timings) and keep magic numbers out of the code.
// Scroll tracker
pub const PROBE_LOOKAHEAD_PX: f64 = 100.0; // probe = scroll offset + lookahead
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 100.0; // probe above this darkens the nav

// Magnetic cursor
pub const MAGNETIC_RADIUS_PX: f64 = 100.0; // strict: distance must be below this
pub const MAGNETIC_PULL: f64 = 0.3; // fraction of the pointer-to-centre vector applied

// Spring presets (stiffness, damping); unit mass
pub const CURSOR_SPRING_STIFFNESS: f64 = 1000.0;
pub const CURSOR_SPRING_DAMPING: f64 = 50.0;
pub const BLOB_SPRING_STIFFNESS: f64 = 50.0;
pub const BLOB_SPRING_DAMPING: f64 = 30.0;
pub const MAGNETIC_SPRING_STIFFNESS: f64 = 300.0;
pub const MAGNETIC_SPRING_DAMPING: f64 = 30.0;

// Spring integration
pub const SPRING_MAX_SUBSTEP_SEC: f64 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f64 = 0.064; // clamp after tab suspension
pub const SPRING_REST_DELTA: f64 = 0.01; // px
pub const SPRING_REST_SPEED: f64 = 0.01; // px/s

// Smooth scrolling
pub const SMOOTH_SCROLL_DURATION_SEC: f64 = 1.2;
pub const WHEEL_MULTIPLIER: f64 = 0.8;
pub const TOUCH_MULTIPLIER: f64 = 2.0;
pub const NAV_SCROLL_DURATION_SEC: f64 = 1.5;

// Reveal and stagger timing (seconds)
pub const ANIMATION_DELAY_INITIAL: f64 = 0.2;
pub const ANIMATION_DELAY_STAGGER: f64 = 0.1;
pub const ANIMATION_DELAY_SECTION: f64 = 0.3;
pub const HERO_LETTER_BASE_DELAY: f64 = 2.5;
pub const HERO_LETTER_STAGGER: f64 = 0.05;
pub const SKILL_BASE_DELAY: f64 = 1.4;
pub const SKILL_STAGGER: f64 = 0.08;
pub const EXPERIENCE_CARD_STAGGER: f64 = 0.3;
pub const EXPERIENCE_HIGHLIGHT_BASE: f64 = 1.0;
pub const EXPERIENCE_HIGHLIGHT_STAGGER: f64 = 0.15;
pub const PROJECT_CARD_STAGGER: f64 = 0.2;
pub const DETAIL_TECH_STAGGER: f64 = 0.05;
pub const GALLERY_IMAGE_STAGGER: f64 = 0.1;
pub const REVEAL_WORD_STAGGER: f64 = 0.02;

// Ambient skill float
pub const SKILL_FLOAT_PHASE_STEP: f64 = 0.5;
pub const SKILL_FLOAT_AMPLITUDE_X: f64 = 5.0;
pub const SKILL_FLOAT_AMPLITUDE_Y: f64 = 10.0;
pub const SKILL_FLOAT_BASE_PERIOD_SEC: f64 = 3.0;
pub const SKILL_FLOAT_PERIOD_STEP_SEC: f64 = 0.2;

// Hero parallax: background travels this share of its height over the hero
pub const HERO_PARALLAX_MAX_PERCENT: f64 = 50.0;

// Loading sequence (seconds since start)
pub const LOADING_VISIBLE_AT_SEC: f64 = 0.5;
pub const LOADING_LOADED_AT_SEC: f64 = 0.8;
pub const LOADING_DONE_AT_SEC: f64 = 2.3;
pub const LOADING_TICK_MS: u32 = 100;
pub const LOADING_MAX_STEP: f64 = 15.0;
pub const LOADING_COMPLETE: f64 = 100.0;
