//! Input events and the table that turns them into engine intents.
//!
//! Hosts translate their native events into [`InputEvent`]s; the engine only
//! ever applies [`Intent`]s. Keeping the mapping in one `match` keeps event
//! wiring out of the frame loop.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// Which strip an input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strip {
    Main,
    Thumbnails,
}

/// A host input, already reduced to the numbers the engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum InputEvent {
    /// Mouse wheel; vertical motion scrolls the strip horizontally.
    #[serde(rename_all = "camelCase")]
    Wheel { delta_y: f32 },
    /// Click on an item of either strip.
    Click { strip: Strip, index: usize },
    /// Window resize.
    #[serde(rename_all = "camelCase")]
    Resize { viewport_extent: f32 },
    /// Thumbnail container resize.
    #[serde(rename_all = "camelCase")]
    ThumbContainerResize { extent: f32 },
}

/// A state mutation requested by an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Move the target offset by this amount.
    Nudge(f32),
    /// Center the main-strip item at this index.
    CenterOn(usize),
    /// New viewport extent; recompute the scroll range.
    Remeasure { viewport_extent: f32 },
    /// New thumbnail container extent.
    ResizeThumbContainer { extent: f32 },
}

impl InputEvent {
    /// Map this event to the intent it stands for.
    pub fn intent(&self, config: &EngineConfig) -> Intent {
        match *self {
            Self::Wheel { delta_y } => Intent::Nudge(delta_y * config.wheel_sensitivity),
            // Both strips resolve an index to the same main-strip item.
            Self::Click { index, .. } => Intent::CenterOn(index),
            Self::Resize { viewport_extent } => Intent::Remeasure { viewport_extent },
            Self::ThumbContainerResize { extent } => Intent::ResizeThumbContainer { extent },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn wheel_scaled_by_sensitivity() {
        let config = EngineConfig {
            wheel_sensitivity: 2.0,
            ..EngineConfig::default()
        };
        assert_eq!(
            InputEvent::Wheel { delta_y: 40.0 }.intent(&config),
            Intent::Nudge(80.0)
        );
    }

    #[test]
    fn clicks_from_either_strip_match() {
        let config = EngineConfig::default();
        let main = InputEvent::Click {
            strip: Strip::Main,
            index: 3,
        };
        let thumb = InputEvent::Click {
            strip: Strip::Thumbnails,
            index: 3,
        };
        assert_eq!(main.intent(&config), thumb.intent(&config));
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: InputEvent =
            serde_json::from_str(r#"{"kind": "wheel", "deltaY": -120}"#).unwrap();
        assert_eq!(event, InputEvent::Wheel { delta_y: -120.0 });
        let event: InputEvent =
            serde_json::from_str(r#"{"kind": "click", "strip": "thumbnails", "index": 1}"#)
                .unwrap();
        assert_eq!(
            event,
            InputEvent::Click {
                strip: Strip::Thumbnails,
                index: 1
            }
        );
    }
}
