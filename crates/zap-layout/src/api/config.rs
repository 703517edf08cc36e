use serde::{Deserialize, Serialize};

use crate::api::error::Result;
use crate::extensions::easing::Easing;

/// Tuning for layout reconciliation, provided by the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Duration in seconds of every move/rotate/scale timeline entry (default: 0.3).
    pub move_duration: f32,
    /// Max world-space distance treated as "already in position" (default: 0.01).
    pub position_tolerance: f32,
    /// Max per-axis angular delta in degrees treated as "already rotated" (default: 0.01).
    pub rotation_tolerance_degrees: f32,
    /// Max distance between uniform scale vectors treated as "already scaled" (default: 0.01).
    pub scale_tolerance: f32,
    /// Easing attached to emitted timeline entries (default: QuadOut).
    pub easing: Easing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            move_duration: 0.3,
            position_tolerance: 0.01,
            rotation_tolerance_degrees: 0.01,
            scale_tolerance: 0.01,
            easing: Easing::QuadOut,
        }
    }
}

impl LayoutConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = LayoutConfig::from_json(r#"{ "move_duration": 0.5 }"#).unwrap();
        assert_eq!(config.move_duration, 0.5);
        assert_eq!(config.position_tolerance, 0.01);
        assert_eq!(config.easing, Easing::QuadOut);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LayoutConfig::from_json(r#"{ "move_duration": "slow" }"#).unwrap_err();
        assert!(matches!(err, crate::api::error::LayoutError::Config(_)));
    }

    #[test]
    fn easing_names_are_snake_case() {
        let config = LayoutConfig::from_json(r#"{ "easing": "cubic_in_out" }"#).unwrap();
        assert_eq!(config.easing, Easing::CubicInOut);
    }
}
