// crates/clipstrip-core/src/seek_bar.rs
//
// Seek bar geometry, gesture tracking and the view model the shell paints.
// The controller logic that decides what a click or drag does lives in
// `ClipPlayer`, which owns the clock and range; this module only maps
// pixels to time and remembers what the current press is doing.

use serde::{Deserialize, Serialize};

use crate::helpers::time::{clamp, format_time};
use crate::state::{RangeHandle, TimeRange};

pub const MARKER_OPACITY_IDLE:    f32 = 0.65;
pub const MARKER_OPACITY_EDITING: f32 = 1.0;

/// Horizontal extent of the track in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pub left:  f32,
    pub width: f32,
}

impl TrackGeometry {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// `(x − left) / width × duration`, with `x` clamped to the track.
    ///
    /// ```
    /// use clipstrip_core::seek_bar::TrackGeometry;
    /// let g = TrackGeometry::new(100.0, 400.0);
    /// assert_eq!(g.time_at(300.0, 120.0), 60.0);
    /// assert_eq!(g.time_at(20.0, 120.0), 0.0);
    /// assert_eq!(g.time_at(900.0, 120.0), 120.0);
    /// ```
    pub fn time_at(&self, x: f32, duration: f64) -> f64 {
        if self.width <= 0.0 || duration <= 0.0 {
            return 0.0;
        }
        let frac = clamp((x - self.left) as f64 / self.width as f64, 0.0, 1.0);
        frac * duration
    }

    pub fn x_at(&self, t: f64, duration: f64) -> f32 {
        self.left + fraction(t, duration) * self.width
    }
}

/// What the pointer currently held on the bar is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarGesture {
    #[default]
    Idle,
    /// Free scrub: every move seeks.
    Scrubbing,
    /// Range edit: every move drives one handle.
    Handle(RangeHandle),
}

fn fraction(t: f64, duration: f64) -> f32 {
    if duration > 0.0 {
        clamp(t / duration, 0.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Everything needed to paint the bar for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeekBarView {
    /// Filled segment, 0..=1.
    pub progress:       f32,
    pub start_fraction: f32,
    pub end_fraction:   f32,
    pub marker_opacity: f32,
    /// Floating labels above the markers; only while editing.
    pub start_label:    Option<String>,
    pub end_label:      Option<String>,
    pub current_label:  String,
    pub duration_label: String,
}

impl SeekBarView {
    pub fn build(current: f64, duration: f64, range: TimeRange, editing: bool) -> Self {
        let (start_label, end_label) = if editing {
            (Some(format_time(range.start)), Some(format_time(range.end)))
        } else {
            (None, None)
        };
        Self {
            progress:       fraction(current, duration),
            start_fraction: fraction(range.start, duration),
            end_fraction:   fraction(range.end, duration),
            marker_opacity: if editing { MARKER_OPACITY_EDITING } else { MARKER_OPACITY_IDLE },
            start_label,
            end_label,
            current_label:  format_time(current),
            duration_label: format_time(duration),
        }
    }
}
