// crates/clipstrip-core/src/range.rs
//
// RangeSelector: candidate in/out points and the last committed range.
//
// The setters keep `start <= end` after every call by clamping against the
// opposite handle, so a handle dragged past its partner stops on it instead
// of swapping. Edit-mode bookkeeping (baseline, dirty) lives in
// `InteractionMode::EditingRange`; this type only holds the values.

use crate::helpers::time::clamp_to_media;
use crate::state::{RangeHandle, TimeRange};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeSelector {
    candidate: TimeRange,
    committed: Option<TimeRange>,
}

impl RangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate(&self) -> TimeRange {
        self.candidate
    }

    pub fn committed(&self) -> Option<TimeRange> {
        self.committed
    }

    /// Range that a draft is built from: the committed range once there is
    /// one, otherwise the live candidate.
    pub fn draft_range(&self) -> TimeRange {
        let r = self.committed.unwrap_or(self.candidate);
        TimeRange::normalized(r.start, r.end)
    }

    pub fn set_start(&mut self, t: f64, duration: f64) {
        let t = clamp_to_media(t, duration);
        self.candidate.start = t.min(self.candidate.end);
    }

    pub fn set_end(&mut self, t: f64, duration: f64) {
        let t = clamp_to_media(t, duration);
        self.candidate.end = t.max(self.candidate.start);
    }

    pub fn set_handle(&mut self, handle: RangeHandle, t: f64, duration: f64) {
        match handle {
            RangeHandle::Start => self.set_start(t, duration),
            RangeHandle::End   => self.set_end(t, duration),
        }
    }

    /// Nearest handle to `t`; ties go to the start handle.
    ///
    /// ```
    /// use clipstrip_core::range::RangeSelector;
    /// use clipstrip_core::state::{RangeHandle, TimeRange};
    /// let mut r = RangeSelector::new();
    /// r.apply(TimeRange::new(10.0, 20.0), false);
    /// assert_eq!(r.pick_handle(12.0), RangeHandle::Start);
    /// assert_eq!(r.pick_handle(15.0), RangeHandle::Start);
    /// assert_eq!(r.pick_handle(18.0), RangeHandle::End);
    /// ```
    pub fn pick_handle(&self, t: f64) -> RangeHandle {
        let to_start = (t - self.candidate.start).abs();
        let to_end   = (t - self.candidate.end).abs();
        if to_start <= to_end { RangeHandle::Start } else { RangeHandle::End }
    }

    pub fn is_dirty_against(&self, baseline: TimeRange) -> bool {
        self.candidate != baseline
    }

    /// Store the normalised candidate as the committed range.
    pub fn commit(&mut self) -> TimeRange {
        let r = TimeRange::normalized(self.candidate.start, self.candidate.end);
        self.committed = Some(r);
        r
    }

    pub fn restore(&mut self, baseline: TimeRange) {
        self.candidate = baseline;
    }

    /// Seed `[0, min(default_len, duration)]` unless a range already exists.
    /// Returns whether the candidate changed.
    pub fn seed_default(&mut self, duration: f64, default_len: f64) -> bool {
        if duration <= 0.0 || self.candidate.end != 0.0 {
            return false;
        }
        self.candidate = TimeRange::new(0.0, default_len.min(duration));
        true
    }

    /// Forget the committed range and go back to the default candidate.
    pub fn reset(&mut self, duration: f64, default_len: f64) {
        let end = if duration > 0.0 { default_len.min(duration) } else { default_len };
        self.candidate = TimeRange::new(0.0, end);
        self.committed = None;
    }

    /// Overwrite both candidate and (optionally) committed range.
    pub fn apply(&mut self, range: TimeRange, commit: bool) {
        self.candidate = range;
        if commit {
            self.committed = Some(range);
        }
    }
}
