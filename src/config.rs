//! Engine and viewer configuration.
//!
//! Both structs deserialize from partial JSON / JS objects; missing fields take
//! their defaults. Field names are camelCase on the wire so a page can pass
//! `{ easingFactor: 0.05 }` straight through.

use serde::{Deserialize, Serialize};

use crate::error::{FilmstripError, Result};

/// Default fraction of the remaining gap closed per tick.
pub const DEFAULT_EASING_FACTOR: f32 = 0.08;
/// Default distance the target may overshoot either hard edge.
pub const DEFAULT_OVERSHOOT_MARGIN: f32 = 500.0;
/// Default multiplier applied to vertical wheel deltas.
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 1.5;

/// How wheel input is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WheelPolicy {
    /// Leave the target unclamped; the integrator's elastic bound absorbs overshoot.
    #[default]
    Elastic,
    /// Clamp the target to `[0, max_offset]` at the instant of input.
    Clamped,
}

/// Extra scroll range added past the content end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CenteringAdjustment {
    /// `max_offset = content - viewport`
    None,
    /// `max_offset = content - viewport / 2`, so the last item can reach the center.
    #[default]
    HalfViewport,
}

impl CenteringAdjustment {
    /// Additional range for a viewport of the given extent.
    pub fn amount(self, viewport_extent: f32) -> f32 {
        match self {
            Self::None => 0.0,
            Self::HalfViewport => viewport_extent / 2.0,
        }
    }
}

/// How the thumbnail strip follows the active item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum ThumbCentering {
    /// Jump straight to the centered position on focus change.
    #[default]
    Instant,
    /// Ease toward the centered position every tick.
    Eased { factor: f32 },
}

/// Tunables for the scroll-focus engine. Constant for the life of a view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Fraction of the remaining gap closed per tick, in `(0, 1)`.
    pub easing_factor: f32,
    /// Soft bound past either edge for the target offset.
    pub overshoot_margin: f32,
    /// Multiplier for wheel `deltaY`.
    pub wheel_sensitivity: f32,
    pub wheel_policy: WheelPolicy,
    pub centering: CenteringAdjustment,
    pub thumb_centering: ThumbCentering,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            easing_factor: DEFAULT_EASING_FACTOR,
            overshoot_margin: DEFAULT_OVERSHOOT_MARGIN,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            wheel_policy: WheelPolicy::default(),
            centering: CenteringAdjustment::default(),
            thumb_centering: ThumbCentering::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON object and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall, reverse or blow up the integrator.
    pub fn validate(&self) -> Result<()> {
        check_factor("easingFactor", self.easing_factor)?;
        if !self.overshoot_margin.is_finite() || self.overshoot_margin < 0.0 {
            return Err(FilmstripError::InvalidConfig(format!(
                "overshootMargin must be a finite, non-negative number (got {})",
                self.overshoot_margin
            )));
        }
        if !self.wheel_sensitivity.is_finite() {
            return Err(FilmstripError::InvalidConfig(format!(
                "wheelSensitivity must be finite (got {})",
                self.wheel_sensitivity
            )));
        }
        if let ThumbCentering::Eased { factor } = self.thumb_centering {
            check_factor("thumbCentering.factor", factor)?;
        }
        Ok(())
    }
}

fn check_factor(name: &str, value: f32) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(FilmstripError::InvalidConfig(format!(
            "{name} must be in (0, 1) (got {value})"
        )))
    }
}

/// DOM binding for the wasm viewer, plus the engine tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerOptions {
    /// Id of the main strip element that receives the translation.
    pub track_id: String,
    /// Id of the thumbnail strip element.
    pub thumb_track_id: String,
    /// Selector for the element whose width the thumbnails center within.
    pub thumb_container_selector: String,
    /// Class of main-strip items.
    pub item_class: String,
    /// Class of thumbnail items.
    pub thumb_class: String,
    /// Class toggled on the focused pair.
    pub active_class: String,
    /// Console log level (`"off"`, `"warn"`, `"debug"`, ...).
    pub log_level: String,
    pub engine: EngineConfig,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            track_id: "track".to_string(),
            thumb_track_id: "thumb-track".to_string(),
            thumb_container_selector: ".thumbnails-container".to_string(),
            item_class: "gallery-image".to_string(),
            thumb_class: "thumb-img".to_string(),
            active_class: "active".to_string(),
            log_level: "warn".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl ViewerOptions {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("trackId", &self.track_id),
            ("thumbTrackId", &self.thumb_track_id),
            ("itemClass", &self.item_class),
            ("thumbClass", &self.thumb_class),
            ("activeClass", &self.active_class),
        ] {
            if value.trim().is_empty() {
                return Err(FilmstripError::InvalidConfig(format!(
                    "{name} must not be empty"
                )));
            }
        }
        self.engine.validate()
    }
}
