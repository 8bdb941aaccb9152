// crates/clipstrip-core/src/error.rs
//
// The core's only fallible surface is configuration. Timeline operations
// never fail: not-ready conditions are no-ops and bad input is clamped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The filmstrip needs a true centre slot.
    #[error("filmstrip slot count must be odd and non-zero, got {0}")]
    SlotCount(usize),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("playback rate list is empty")]
    NoPlaybackRates,

    #[error("invalid playback rate {0}")]
    PlaybackRate(f64),

    #[error("config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
