// crates/clipstrip-core/src/filmstrip.rs
//
// Filmstrip scrubber: a strip of `slot_count` frames centred on `preview_time`
// that the user drags horizontally to step through time one slot at a time,
// or taps to pick a thumbnail.
//
// States: Closed → Open-Idle (open) → Open-Dragging (pointer_down) and back.
//
// Drag math: the strip follows the pointer 1:1 through a pixel accumulator.
// Each time the accumulator reaches a full slot width it gives one slot back
// and `preview_time` moves one step (left drag = forward in time). Fast moves
// that cross several slots in one event step several times. The translate
// offset shown on screen is coalesced to one update per frame; the stepped
// preview times are never coalesced.
//
// The gesture fields are private and not part of the observable state; the
// caller only sees the stepped times and the release outcome.

use tracing::trace;

use crate::config::PlayerConfig;
use crate::helpers::frame_sync::FrameCoalescer;
use crate::helpers::time::clamp_to_media;

// ── Layout ───────────────────────────────────────────────────────────────────

/// Horizontal geometry of the strip: side slots, one wider centre slot,
/// a fixed gap between neighbours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilmstripLayout {
    pub slot_count:   usize,
    pub side_width:   f32,
    pub center_width: f32,
    pub gap:          f32,
}

impl FilmstripLayout {
    pub fn from_config(cfg: &PlayerConfig) -> Self {
        Self {
            slot_count:   cfg.slot_count,
            side_width:   cfg.side_thumb_width,
            center_width: cfg.center_thumb_width,
            gap:          cfg.slot_gap,
        }
    }

    pub fn center_index(&self) -> usize {
        self.slot_count / 2
    }

    pub fn slot_width(&self, index: usize) -> f32 {
        if index == self.center_index() { self.center_width } else { self.side_width }
    }

    /// Width of the whole strip at rest.
    ///
    /// ```
    /// use clipstrip_core::config::PlayerConfig;
    /// use clipstrip_core::filmstrip::FilmstripLayout;
    /// let l = FilmstripLayout::from_config(&PlayerConfig::default());
    /// assert_eq!(l.strip_width(), 8.0 * 120.0 + 160.0 + 8.0 * 6.0);
    /// ```
    pub fn strip_width(&self) -> f32 {
        if self.slot_count == 0 {
            return 0.0;
        }
        let sides = (self.slot_count - 1) as f32;
        sides * self.side_width + self.center_width + sides * self.gap
    }

    /// `(left, width)` of every slot, measured from the strip's left edge.
    pub fn slot_spans(&self) -> Vec<(f32, f32)> {
        let mut x = 0.0;
        (0..self.slot_count)
            .map(|i| {
                let w = self.slot_width(i);
                let span = (x, w);
                x += w + self.gap;
                span
            })
            .collect()
    }

    /// Slot under `x` (strip-relative). Gaps and the outside map to `None`.
    pub fn slot_index_at(&self, x: f32) -> Option<usize> {
        self.slot_spans()
            .iter()
            .position(|&(left, w)| x >= left && x < left + w)
    }
}

// ── Gesture ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
struct DragGesture {
    last_x:         f32,
    /// Pixels moved since the last full-slot snap, signed.
    accumulated:    f32,
    /// Absolute travel since press; separates taps from drags.
    total_movement: f32,
    /// Time of the slot under the pointer at press, the tap candidate.
    down_time:      Option<f64>,
}

/// How a filmstrip press ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEnd {
    /// Short press on a slot: select that slot's time.
    Tap(f64),
    /// A drag, or a press that landed between slots. Nothing is selected.
    Released,
}

// ── Filmstrip ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Filmstrip {
    open:          bool,
    preview_time:  f64,
    slot_count:    usize,
    step_seconds:  f64,
    slot_px:       f32,
    tap_threshold: f32,
    gesture:       Option<DragGesture>,
    offset:        FrameCoalescer<f32>,
}

impl Filmstrip {
    pub fn new(cfg: &PlayerConfig) -> Self {
        Self {
            open:          false,
            preview_time:  0.0,
            slot_count:    cfg.slot_count,
            step_seconds:  cfg.step_seconds,
            slot_px:       cfg.slot_pixel_width(),
            tap_threshold: cfg.tap_threshold_px,
            gesture:       None,
            offset:        FrameCoalescer::new(0.0),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn preview_time(&self) -> f64 {
        self.preview_time
    }

    pub fn set_preview_time(&mut self, t: f64) {
        self.preview_time = t;
    }

    /// Closed → Open-Idle at `t` (already clamped by the caller).
    pub fn open(&mut self, t: f64) {
        self.open         = true;
        self.preview_time = t;
        self.gesture      = None;
        self.offset.reset(0.0);
    }

    /// Any state → Closed. An in-flight drag is dropped and the strip snaps
    /// back to centred alignment.
    pub fn close(&mut self) {
        self.open    = false;
        self.gesture = None;
        self.offset.reset(0.0);
    }

    /// Timestamps of all slots, centred on the preview time and spaced one
    /// step apart. Each is clamped on its own, so near either end of the
    /// media the edge slots repeat the boundary time.
    pub fn slot_times(&self, duration: f64) -> Vec<f64> {
        let mid = (self.slot_count / 2) as f64;
        (0..self.slot_count)
            .map(|i| clamp_to_media(self.preview_time + (i as f64 - mid) * self.step_seconds, duration))
            .collect()
    }

    pub fn center_index(&self) -> usize {
        self.slot_count / 2
    }

    /// Open-Idle → Open-Dragging. `under_pointer` is the time of the slot
    /// under the press, if any.
    pub fn pointer_down(&mut self, x: f32, under_pointer: Option<f64>) {
        self.gesture = Some(DragGesture {
            last_x:         x,
            accumulated:    0.0,
            total_movement: 0.0,
            down_time:      under_pointer,
        });
        self.offset.request(0.0);
    }

    /// Feed one pointer sample. Returns every preview time stepped to, in
    /// order, so the caller can seek the transport after each step.
    pub fn pointer_move(&mut self, x: f32, duration: f64) -> Vec<f64> {
        let mut stepped = Vec::new();
        let Some(mut g) = self.gesture else { return stepped };

        let dx = x - g.last_x;
        g.last_x = x;
        g.total_movement += dx.abs();
        g.accumulated    += dx;
        self.offset.request(g.accumulated);

        if self.slot_px > 0.0 {
            while g.accumulated <= -self.slot_px {
                g.accumulated += self.slot_px;
                self.offset.request(g.accumulated);
                stepped.extend(self.step_preview(1, duration));
            }
            while g.accumulated >= self.slot_px {
                g.accumulated -= self.slot_px;
                self.offset.request(g.accumulated);
                stepped.extend(self.step_preview(-1, duration));
            }
        }

        self.gesture = Some(g);
        stepped
    }

    /// Open-Dragging → Open-Idle. A short press on a slot becomes a tap that
    /// moves the preview there; a real drag leaves the preview where the
    /// stepping put it. The strip always snaps back to centre.
    pub fn pointer_up(&mut self) -> Option<GestureEnd> {
        let g = self.gesture.take()?;
        self.offset.request(0.0);
        match g.down_time {
            Some(t) if g.total_movement < self.tap_threshold => {
                self.preview_time = t;
                Some(GestureEnd::Tap(t))
            }
            _ => Some(GestureEnd::Released),
        }
    }

    /// Pointer capture lost: end the gesture without selecting anything.
    pub fn pointer_cancel(&mut self) {
        if self.gesture.take().is_some() {
            self.offset.request(0.0);
        }
    }

    fn step_preview(&mut self, steps: i32, duration: f64) -> Option<f64> {
        if duration <= 0.0 {
            return None;
        }
        let next = clamp_to_media(self.preview_time + steps as f64 * self.step_seconds, duration);
        trace!(from = self.preview_time, to = next, "filmstrip step");
        self.preview_time = next;
        Some(next)
    }

    /// Residual drag pixels not yet converted into a step.
    pub fn accumulated_px(&self) -> f32 {
        self.gesture.map(|g| g.accumulated).unwrap_or(0.0)
    }

    /// Apply the pending translate offset for this display frame.
    pub fn take_frame_offset(&mut self) -> Option<f32> {
        self.offset.take_frame()
    }

    /// True while an offset is waiting for the next display frame.
    pub fn offset_pending(&self) -> bool {
        self.offset.has_pending()
    }

    /// Offset currently applied to the strip.
    pub fn render_offset(&self) -> f32 {
        self.offset.applied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_at(t: f64) -> Filmstrip {
        let mut f = Filmstrip::new(&PlayerConfig::default());
        f.open(t);
        f
    }

    #[test]
    fn fast_left_drag_steps_twice_and_keeps_residual() {
        let mut f = open_at(37.0);
        f.pointer_down(500.0, Some(37.0));
        let steps = f.pointer_move(240.0, 120.0);
        assert_eq!(steps, vec![38.0, 39.0]);
        assert_eq!(f.preview_time(), 39.0);
        assert!((f.accumulated_px() - (-8.0)).abs() < 1e-4);
    }

    #[test]
    fn right_drag_steps_backward() {
        let mut f = open_at(37.0);
        f.pointer_down(100.0, None);
        assert!(f.pointer_move(200.0, 120.0).is_empty());
        assert_eq!(f.pointer_move(230.0, 120.0), vec![36.0]);
        assert!((f.accumulated_px() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn stepping_clamps_at_media_start() {
        let mut f = open_at(0.0);
        f.pointer_down(0.0, None);
        assert_eq!(f.pointer_move(126.0, 120.0), vec![0.0]);
        assert_eq!(f.preview_time(), 0.0);
    }

    #[test]
    fn no_steps_without_duration() {
        let mut f = open_at(5.0);
        f.pointer_down(500.0, None);
        assert!(f.pointer_move(0.0, 0.0).is_empty());
        assert_eq!(f.preview_time(), 5.0);
    }

    #[test]
    fn short_press_is_a_tap() {
        let mut f = open_at(37.0);
        f.pointer_down(300.0, Some(35.0));
        f.pointer_move(303.0, 120.0);
        f.pointer_move(301.0, 120.0);
        assert_eq!(f.pointer_up(), Some(GestureEnd::Tap(35.0)));
        assert_eq!(f.preview_time(), 35.0);
    }

    #[test]
    fn travel_past_threshold_is_a_drag() {
        let mut f = open_at(37.0);
        f.pointer_down(300.0, Some(35.0));
        f.pointer_move(304.0, 120.0);
        f.pointer_move(300.0, 120.0);
        assert_eq!(f.pointer_up(), Some(GestureEnd::Released));
        assert_eq!(f.preview_time(), 37.0);
    }

    #[test]
    fn release_snaps_offset_back() {
        let mut f = open_at(37.0);
        f.pointer_down(300.0, None);
        f.pointer_move(250.0, 120.0);
        assert_eq!(f.take_frame_offset(), Some(-50.0));
        f.pointer_up();
        assert!(f.offset_pending());
        assert_eq!(f.render_offset(), -50.0);
        assert_eq!(f.take_frame_offset(), Some(0.0));
        assert!(!f.offset_pending());
        assert_eq!(f.render_offset(), 0.0);
    }

    #[test]
    fn close_mid_drag_zeroes_everything() {
        let mut f = open_at(37.0);
        f.pointer_down(300.0, None);
        f.pointer_move(200.0, 120.0);
        f.close();
        assert!(!f.is_dragging());
        assert_eq!(f.accumulated_px(), 0.0);
        assert_eq!(f.render_offset(), 0.0);
        assert_eq!(f.take_frame_offset(), None);
    }

    #[test]
    fn edge_slots_repeat_boundary() {
        let f = open_at(1.0);
        let times = f.slot_times(120.0);
        assert_eq!(times.len(), 9);
        assert_eq!(&times[..4], &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(times[4], 1.0);
        assert_eq!(times[8], 5.0);
    }

    #[test]
    fn layout_hit_testing() {
        let l = FilmstripLayout::from_config(&PlayerConfig::default());
        assert_eq!(l.slot_index_at(10.0), Some(0));
        assert_eq!(l.slot_index_at(122.0), None);
        assert_eq!(l.slot_index_at(126.0), Some(1));
        // centre slot starts after four side slots
        assert_eq!(l.slot_index_at(4.0 * 126.0 + 150.0), Some(4));
        assert_eq!(l.slot_index_at(-1.0), None);
        assert_eq!(l.slot_index_at(l.strip_width() + 1.0), None);
    }
}
