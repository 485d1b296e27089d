use super::magnetic::MagneticSettings;
use super::smooth_scroll::SmoothScrollConfig;
use super::spring::SpringConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringSettings {
    pub cursor: SpringConfig,
    pub blob: SpringConfig,
    pub magnetic: SpringConfig,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            cursor: SpringConfig::CURSOR,
            blob: SpringConfig::BLOB,
            magnetic: SpringConfig::MAGNETIC,
        }
    }
}

/// Runtime tuning. Every field falls back to its default when omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub magnetic: MagneticSettings,
    pub smooth_scroll: SmoothScrollConfig,
    pub springs: SpringSettings,
    /// `log` level name: error, warn, info, debug or trace.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            magnetic: MagneticSettings::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            springs: SpringSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

fn check_spring(field: &'static str, s: &SpringConfig) -> Result<(), SettingsError> {
    if !(s.stiffness > 0.0) {
        return Err(SettingsError::Invalid {
            field,
            reason: "stiffness must be positive",
        });
    }
    if !(s.damping >= 0.0) {
        return Err(SettingsError::Invalid {
            field,
            reason: "damping must not be negative",
        });
    }
    if !(s.mass > 0.0) {
        return Err(SettingsError::Invalid {
            field,
            reason: "mass must be positive",
        });
    }
    Ok(())
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.magnetic.radius > 0.0) {
            return Err(SettingsError::Invalid {
                field: "magnetic.radius",
                reason: "must be positive",
            });
        }
        if !(self.magnetic.pull > 0.0 && self.magnetic.pull <= 1.0) {
            return Err(SettingsError::Invalid {
                field: "magnetic.pull",
                reason: "must be in (0, 1]",
            });
        }
        if !(self.smooth_scroll.duration >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "smooth_scroll.duration",
                reason: "must not be negative",
            });
        }
        check_spring("springs.cursor", &self.springs.cursor)?;
        check_spring("springs.blob", &self.springs.blob)?;
        check_spring("springs.magnetic", &self.springs.magnetic)?;
        if self.level_filter().is_none() {
            return Err(SettingsError::Invalid {
                field: "log_level",
                reason: "unknown level name",
            });
        }
        Ok(())
    }

    pub fn level_filter(&self) -> Option<log::Level> {
        self.log_level.parse().ok()
    }
}
