// crates/clipstrip-core/src/clock.rs
//
// TimelineClock: the single source of truth for current time and duration.
//
// It wraps an (optional) MediaTransport, translates its notifications into
// `TimelineState`, and is the only component allowed to write transport time.
// Without a transport attached every operation is a silent no-op.

use crossbeam_channel::Receiver;
use tracing::trace;

use crate::helpers::time::{clamp_to_media, finite_or_zero};
use crate::state::{TimeRange, TimelineState};
use crate::transport::{MediaTransport, TransportEvent};

pub struct TimelineClock<T: MediaTransport> {
    transport: Option<T>,
    events:    Option<Receiver<TransportEvent>>,
    state:     TimelineState,
}

impl<T: MediaTransport> Default for TimelineClock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MediaTransport> TimelineClock<T> {
    pub fn new() -> Self {
        Self { transport: None, events: None, state: TimelineState::default() }
    }

    /// Attach a transport and subscribe to it. Any previous transport is
    /// dropped along with its subscription. The local rate is pushed to the
    /// new transport so the two agree from the start.
    pub fn attach(&mut self, mut transport: T) {
        self.events = Some(transport.subscribe());
        transport.set_playback_rate(self.state.playback_rate);
        self.transport = Some(transport);
    }

    pub fn transport(&self) -> Option<&T> {
        self.transport.as_ref()
    }

    pub fn transport_mut(&mut self) -> Option<&mut T> {
        self.transport.as_mut()
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    pub fn duration(&self) -> f64 {
        self.state.duration
    }

    pub fn current(&self) -> f64 {
        self.state.current
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Take the notifications queued so far, in arrival order.
    pub fn drain_events(&mut self) -> Vec<TransportEvent> {
        self.events
            .as_ref()
            .map(|rx| rx.try_iter().collect())
            .unwrap_or_default()
    }

    // ── Event handlers ───────────────────────────────────────────────────────

    /// Returns the loaded duration.
    pub fn on_loaded_metadata(&mut self) -> f64 {
        let Some(t) = self.transport.as_ref() else { return self.state.duration };
        self.state.duration = finite_or_zero(t.duration()).max(0.0);
        self.state.current  = finite_or_zero(t.current_time()).max(0.0);
        trace!(duration = self.state.duration, "metadata loaded");
        self.state.duration
    }

    /// Read the transport time, applying the restricted-playback policy when
    /// `restrict` is set: below the range the transport is pulled up to
    /// `start`; at or past `end` it is pinned to `end` and paused.
    /// Returns the time recorded as current.
    pub fn on_time_update(&mut self, restrict: Option<TimeRange>) -> Option<f64> {
        let transport = self.transport.as_mut()?;
        let mut t = finite_or_zero(transport.current_time());
        if let Some(range) = restrict {
            if t < range.start {
                t = range.start;
                transport.set_current_time(range.start);
            } else if t >= range.end {
                t = range.end;
                transport.set_current_time(range.end);
                transport.pause();
            }
        }
        self.state.current = t;
        Some(t)
    }

    pub fn on_play(&mut self) {
        self.state.is_playing = true;
    }

    pub fn on_pause(&mut self) {
        self.state.is_playing = false;
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    /// Write a clamped time to the transport. `current` is not touched here;
    /// it follows on the next time update.
    pub fn seek(&mut self, t: f64) {
        let known = self.state.duration;
        let Some(transport) = self.transport.as_mut() else { return };
        let duration = if known > 0.0 { known } else { finite_or_zero(transport.duration()) };
        let target = clamp_to_media(t, duration);
        trace!(target, "seek");
        transport.set_current_time(target);
    }

    pub fn play(&mut self) {
        if let Some(t) = self.transport.as_mut() {
            t.play();
        }
    }

    pub fn pause(&mut self) {
        if let Some(t) = self.transport.as_mut() {
            if !t.is_paused() {
                t.pause();
            }
        }
    }

    /// True when the transport is paused; also true with no transport.
    pub fn transport_paused(&self) -> bool {
        self.transport.as_ref().map(|t| t.is_paused()).unwrap_or(true)
    }

    /// Live transport time, falling back to the last recorded time.
    pub fn transport_time(&self) -> f64 {
        self.transport
            .as_ref()
            .map(|t| finite_or_zero(t.current_time()))
            .unwrap_or(self.state.current)
    }

    /// Local state and transport rate change together.
    pub fn set_playback_rate(&mut self, rate: f64) {
        self.state.playback_rate = rate;
        if let Some(t) = self.transport.as_mut() {
            t.set_playback_rate(rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ScriptedTransport;

    fn loaded(duration: f64) -> TimelineClock<ScriptedTransport> {
        let mut clock = TimelineClock::new();
        clock.attach(ScriptedTransport::new());
        clock.transport_mut().unwrap().load(duration);
        clock.drain_events();
        clock.on_loaded_metadata();
        clock
    }

    #[test]
    fn detached_clock_ignores_everything() {
        let mut clock: TimelineClock<ScriptedTransport> = TimelineClock::new();
        clock.seek(10.0);
        clock.play();
        assert_eq!(clock.on_time_update(None), None);
        assert_eq!(clock.current(), 0.0);
        assert!(clock.transport_paused());
    }

    #[test]
    fn seek_clamps_before_writing() {
        let mut clock = loaded(120.0);
        clock.seek(1_000.0);
        assert!((clock.transport_time() - 119.999).abs() < 1e-9);
        clock.seek(-5.0);
        assert_eq!(clock.transport_time(), 0.0);
    }

    #[test]
    fn seek_does_not_update_current_until_time_update() {
        let mut clock = loaded(120.0);
        clock.seek(30.0);
        assert_eq!(clock.current(), 0.0);
        clock.on_time_update(None);
        assert_eq!(clock.current(), 30.0);
    }

    #[test]
    fn restricted_overrun_pins_and_pauses() {
        let mut clock = loaded(120.0);
        clock.play();
        clock.transport_mut().unwrap().set_current_time(25.0);
        let t = clock.on_time_update(Some(TimeRange::new(10.0, 20.0)));
        assert_eq!(t, Some(20.0));
        assert_eq!(clock.transport_time(), 20.0);
        assert!(clock.transport_paused());
    }

    #[test]
    fn restricted_underrun_pulls_up_without_pausing() {
        let mut clock = loaded(120.0);
        clock.play();
        clock.transport_mut().unwrap().set_current_time(5.0);
        let t = clock.on_time_update(Some(TimeRange::new(10.0, 20.0)));
        assert_eq!(t, Some(10.0));
        assert!(!clock.transport_paused());
    }

    #[test]
    fn rate_is_mirrored_onto_transport() {
        let mut clock = loaded(10.0);
        clock.set_playback_rate(2.5);
        assert_eq!(clock.state().playback_rate, 2.5);
        assert_eq!(clock.transport().unwrap().playback_rate(), 2.5);
    }
}
