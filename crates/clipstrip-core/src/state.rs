// crates/clipstrip-core/src/state.rs
// Plain timeline data: no egui, no transport handles, no threads.
// Serializable via serde so the UI (and tests) can snapshot it.
use serde::{Deserialize, Serialize};

/// Clock-side view of the media, owned by `TimelineClock`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineState {
    /// 0 until the transport reports metadata.
    pub duration:      f64,
    pub current:       f64,
    pub is_playing:    bool,
    pub playback_rate: f64,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            duration:      0.0,
            current:       0.0,
            is_playing:    false,
            playback_rate: 1.0,
        }
    }
}

impl TimelineState {
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }
}

/// A `[start, end]` span in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end:   f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Build a range from two points in either order.
    ///
    /// ```
    /// use clipstrip_core::state::TimeRange;
    /// assert_eq!(TimeRange::normalized(45.0, 30.0), TimeRange::new(30.0, 45.0));
    /// ```
    pub fn normalized(a: f64, b: f64) -> Self {
        Self { start: a.min(b), end: a.max(b) }
    }

    pub fn clamp(&self, t: f64) -> f64 {
        crate::helpers::time::clamp(t, self.start, self.end)
    }
}

/// Which range handle a seek-bar gesture is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeHandle {
    Start,
    End,
}

/// The representative thumbnail instant; `None` until the user picks one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailSelection {
    pub selected: Option<f64>,
}

/// Mutually-exclusive interaction modes sharing the one time axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Handles are live. `baseline` is the candidate range on entry and
    /// backs both dirty tracking and cancel.
    EditingRange { baseline: TimeRange },
    /// Playback is clamped to the committed range.
    RestrictedPlayback,
    /// Filmstrip is open; transport is paused and preview time is decoupled.
    PickingThumbnail,
}

impl InteractionMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::EditingRange { .. })
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::RestrictedPlayback)
    }

    pub fn is_picking(&self) -> bool {
        matches!(self, Self::PickingThumbnail)
    }

    pub fn baseline(&self) -> Option<TimeRange> {
        match self {
            Self::EditingRange { baseline } => Some(*baseline),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle                  => "idle",
            Self::EditingRange { .. }   => "editing range",
            Self::RestrictedPlayback    => "range playback",
            Self::PickingThumbnail      => "picking thumbnail",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_clamp_keeps_inside_points() {
        let r = TimeRange::new(10.0, 20.0);
        assert_eq!(r.clamp(25.0), 20.0);
        assert_eq!(r.clamp(5.0), 10.0);
        assert_eq!(r.clamp(12.5), 12.5);
    }

    #[test]
    fn duration_is_known_only_once_positive() {
        let mut s = TimelineState::default();
        assert!(!s.has_duration());
        s.duration = 120.0;
        assert!(s.has_duration());
    }

    #[test]
    fn only_editing_carries_a_baseline() {
        let b = TimeRange::new(1.0, 2.0);
        assert_eq!(InteractionMode::EditingRange { baseline: b }.baseline(), Some(b));
        assert_eq!(InteractionMode::RestrictedPlayback.baseline(), None);
        assert!(InteractionMode::default() == InteractionMode::Idle);
    }
}
