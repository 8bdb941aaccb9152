// crates/clipstrip-core/src/helpers/frame_sync.rs
//
// Latest-wins slot for purely cosmetic values that should be applied at most
// once per display refresh (the filmstrip's drag translate offset).
//
// Producers call `request()` as often as pointer events arrive; the render
// tick calls `take_frame()` once per frame. Only the newest pending value is
// ever applied. `reset()` discards whatever is pending and puts a known value
// on screen, which is what closing the strip wants.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCoalescer<T: Copy> {
    pending: Option<T>,
    applied: T,
}

impl<T: Copy> FrameCoalescer<T> {
    pub fn new(initial: T) -> Self {
        Self { pending: None, applied: initial }
    }

    /// Queue `value` for the next frame, replacing any earlier pending value.
    pub fn request(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Apply the pending value (if any) and return it.
    pub fn take_frame(&mut self) -> Option<T> {
        let v = self.pending.take()?;
        self.applied = v;
        Some(v)
    }

    /// Drop anything pending and apply `value` immediately.
    pub fn reset(&mut self, value: T) {
        self.pending = None;
        self.applied = value;
    }

    /// The value currently on screen.
    pub fn applied(&self) -> T {
        self.applied
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_request_is_applied() {
        let mut c = FrameCoalescer::new(0.0_f32);
        c.request(-10.0);
        c.request(-25.0);
        c.request(-40.0);
        assert_eq!(c.applied(), 0.0);
        assert_eq!(c.take_frame(), Some(-40.0));
        assert_eq!(c.applied(), -40.0);
        assert_eq!(c.take_frame(), None);
    }

    #[test]
    fn reset_discards_pending_value() {
        let mut c = FrameCoalescer::new(0.0_f32);
        c.request(12.0);
        assert!(c.has_pending());
        c.reset(0.0);
        assert!(!c.has_pending());
        assert_eq!(c.applied(), 0.0);
        assert_eq!(c.take_frame(), None);
    }
}
