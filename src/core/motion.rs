use super::constants::*;
use super::easing::sine_in_out;
use glam::DVec2;
use rand::Rng;

/// Start delay of the `index`-th element of a staggered group.
#[inline]
pub fn stagger(base: f64, step: f64, index: usize) -> f64 {
    base + step * index as f64
}

/// Staggered entrance groups found on the pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    HeroLetter,
    Skill,
    ExperienceCard,
    ProjectCard,
    DetailTech,
    GalleryImage,
    Word,
    Section,
    Item,
}

impl RevealGroup {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "hero-letter" => Some(RevealGroup::HeroLetter),
            "skill" => Some(RevealGroup::Skill),
            "experience" => Some(RevealGroup::ExperienceCard),
            "project" => Some(RevealGroup::ProjectCard),
            "tech" => Some(RevealGroup::DetailTech),
            "gallery" => Some(RevealGroup::GalleryImage),
            "word" => Some(RevealGroup::Word),
            "section" => Some(RevealGroup::Section),
            "item" => Some(RevealGroup::Item),
            _ => None,
        }
    }

    /// `(base, step)` in seconds.
    pub fn timing(self) -> (f64, f64) {
        match self {
            RevealGroup::HeroLetter => (HERO_LETTER_BASE_DELAY, HERO_LETTER_STAGGER),
            RevealGroup::Skill => (SKILL_BASE_DELAY, SKILL_STAGGER),
            RevealGroup::ExperienceCard => (0.0, EXPERIENCE_CARD_STAGGER),
            RevealGroup::ProjectCard => (0.0, PROJECT_CARD_STAGGER),
            RevealGroup::DetailTech => (0.0, DETAIL_TECH_STAGGER),
            RevealGroup::GalleryImage => (0.0, GALLERY_IMAGE_STAGGER),
            RevealGroup::Word => (0.0, REVEAL_WORD_STAGGER),
            RevealGroup::Section => (0.0, ANIMATION_DELAY_SECTION),
            RevealGroup::Item => (ANIMATION_DELAY_INITIAL, ANIMATION_DELAY_STAGGER),
        }
    }

    pub fn delay(self, index: usize) -> f64 {
        let (base, step) = self.timing();
        stagger(base, step, index)
    }
}

/// Delay of highlight `highlight` inside experience card `card`.
pub fn experience_highlight_delay(card: usize, highlight: usize) -> f64 {
    stagger(0.0, EXPERIENCE_CARD_STAGGER, card)
        + stagger(EXPERIENCE_HIGHLIGHT_BASE, EXPERIENCE_HIGHLIGHT_STAGGER, highlight)
}

/// Looping float applied to the `index`-th skill chip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillFloat {
    pub amplitude: DVec2,
    pub period_sec: f64,
}

pub fn skill_float(index: usize) -> SkillFloat {
    let phase = index as f64 * SKILL_FLOAT_PHASE_STEP;
    SkillFloat {
        amplitude: DVec2::new(
            phase.cos() * SKILL_FLOAT_AMPLITUDE_X,
            phase.sin() * SKILL_FLOAT_AMPLITUDE_Y,
        ),
        period_sec: SKILL_FLOAT_BASE_PERIOD_SEC + index as f64 * SKILL_FLOAT_PERIOD_STEP_SEC,
    }
}

impl SkillFloat {
    /// Yoyo between rest and full amplitude; one leg lasts `period_sec`.
    pub fn offset_at(&self, t_sec: f64) -> DVec2 {
        if self.period_sec <= 0.0 {
            return DVec2::ZERO;
        }
        let legs = (t_sec.max(0.0) / self.period_sec).rem_euclid(2.0);
        let leg_t = if legs < 1.0 { legs } else { 2.0 - legs };
        self.amplitude * sine_in_out(leg_t)
    }
}

pub fn float_offset(index: usize, t_sec: f64) -> DVec2 {
    skill_float(index).offset_at(t_sec)
}

/// Hero background translation, in percent of its own height.
pub fn parallax_percent(scroll_offset: f64, hero_top: f64, hero_height: f64) -> f64 {
    if hero_height <= 0.0 {
        return 0.0;
    }
    let t = ((scroll_offset - hero_top) / hero_height).clamp(0.0, 1.0);
    t * HERO_PARALLAX_MAX_PERCENT
}

/// Intro phases, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadingPhase {
    Loading,
    Visible,
    Loaded,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingSequence {
    pub visible_at: f64,
    pub loaded_at: f64,
    pub done_at: f64,
}

impl Default for LoadingSequence {
    fn default() -> Self {
        Self {
            visible_at: LOADING_VISIBLE_AT_SEC,
            loaded_at: LOADING_LOADED_AT_SEC,
            done_at: LOADING_DONE_AT_SEC,
        }
    }
}

impl LoadingSequence {
    pub fn phase_at(&self, elapsed_sec: f64) -> LoadingPhase {
        if elapsed_sec >= self.done_at {
            LoadingPhase::Done
        } else if elapsed_sec >= self.loaded_at {
            LoadingPhase::Loaded
        } else if elapsed_sec >= self.visible_at {
            LoadingPhase::Visible
        } else {
            LoadingPhase::Loading
        }
    }

    /// `(phase, seconds since previous step)` in firing order.
    pub fn steps(&self) -> [(LoadingPhase, f64); 3] {
        [
            (LoadingPhase::Visible, self.visible_at),
            (LoadingPhase::Loaded, self.loaded_at - self.visible_at),
            (LoadingPhase::Done, self.done_at - self.loaded_at),
        ]
    }
}

/// Percentage counter shown by the loader.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingProgress {
    value: f64,
}

impl LoadingProgress {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.value >= LOADING_COMPLETE
    }

    /// One tick: advance by a random amount up to the max step, never past 100.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if !self.is_complete() {
            let step = rng.gen::<f64>() * LOADING_MAX_STEP;
            self.value = (self.value + step).min(LOADING_COMPLETE);
        }
        self.value
    }

    pub fn finish(&mut self) {
        self.value = LOADING_COMPLETE;
    }

    /// Whole percent for display.
    pub fn label(&self) -> String {
        format!("{:.0}%", self.value.floor())
    }
}
