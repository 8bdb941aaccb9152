// crates/clipstrip-core/src/config.rs
//
// Tunables for the player. Every field has a default so a partial JSON file
// (or none at all) is valid; `validate()` rejects values the timeline math
// cannot work with.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Playback rates offered by the speed menu.
pub const DEFAULT_PLAYBACK_RATES: [f64; 12] =
    [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.5, 3.0, 3.5, 4.0];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Filmstrip slots on screen. Odd, so slot `count / 2` is the centre.
    pub slot_count:           usize,
    /// Seconds between adjacent filmstrip slots.
    pub step_seconds:         f64,
    pub side_thumb_width:     f32,
    pub center_thumb_width:   f32,
    pub slot_gap:             f32,
    /// Total pointer travel below which a filmstrip press counts as a tap.
    pub tap_threshold_px:     f32,
    /// Length of the candidate range seeded on first load and on reset.
    pub default_clip_seconds: f64,
    pub playback_rates:       Vec<f64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            slot_count:           9,
            step_seconds:         1.0,
            side_thumb_width:     120.0,
            center_thumb_width:   160.0,
            slot_gap:             6.0,
            tap_threshold_px:     6.0,
            default_clip_seconds: 5.0,
            playback_rates:       DEFAULT_PLAYBACK_RATES.to_vec(),
        }
    }
}

impl PlayerConfig {
    /// Drag distance that advances the filmstrip by one step.
    ///
    /// ```
    /// use clipstrip_core::config::PlayerConfig;
    /// assert_eq!(PlayerConfig::default().slot_pixel_width(), 126.0);
    /// ```
    pub fn slot_pixel_width(&self) -> f32 {
        self.side_thumb_width + self.slot_gap
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_count == 0 || self.slot_count % 2 == 0 {
            return Err(ConfigError::SlotCount(self.slot_count));
        }
        let positive: [(&'static str, f64); 5] = [
            ("step_seconds",         self.step_seconds),
            ("side_thumb_width",     self.side_thumb_width as f64),
            ("center_thumb_width",   self.center_thumb_width as f64),
            ("tap_threshold_px",     self.tap_threshold_px as f64),
            ("default_clip_seconds", self.default_clip_seconds),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(self.slot_gap >= 0.0) {
            return Err(ConfigError::NonPositive { field: "slot_gap", value: self.slot_gap as f64 });
        }
        if self.playback_rates.is_empty() {
            return Err(ConfigError::NoPlaybackRates);
        }
        if let Some(&bad) = self.playback_rates.iter().find(|r| !(**r > 0.0 && r.is_finite())) {
            return Err(ConfigError::PlaybackRate(bad));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn is_allowed_rate(&self, rate: f64) -> bool {
        self.playback_rates.iter().any(|r| (r - rate).abs() < 1e-9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlayerConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = PlayerConfig::from_json(r#"{ "step_seconds": 2.0 }"#).unwrap();
        assert_eq!(cfg.step_seconds, 2.0);
        assert_eq!(cfg.slot_count, 9);
        assert_eq!(cfg.playback_rates.len(), 12);
    }

    #[test]
    fn even_slot_count_is_rejected() {
        let err = PlayerConfig::from_json(r#"{ "slot_count": 8 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::SlotCount(8)));
    }

    #[test]
    fn zero_step_is_rejected() {
        let cfg = PlayerConfig { step_seconds: 0.0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { field: "step_seconds", .. })));
    }

    #[test]
    fn bad_rates_are_rejected() {
        let empty = PlayerConfig { playback_rates: vec![], ..Default::default() };
        assert!(matches!(empty.validate(), Err(ConfigError::NoPlaybackRates)));
        let negative = PlayerConfig { playback_rates: vec![1.0, -2.0], ..Default::default() };
        assert!(matches!(negative.validate(), Err(ConfigError::PlaybackRate(r)) if r == -2.0));
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        assert!(matches!(PlayerConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
