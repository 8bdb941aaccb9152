// crates/clipstrip-core/src/transport.rs
//
// The media transport seam. The core treats playback as an opaque
// clock-and-transport device: it reads and writes time, toggles play/pause,
// and listens for four notifications delivered over a crossbeam channel.
//
// Notifications carry no payload. Handlers re-read the transport so a seek
// issued by the core is only believed once the transport reports it.

use crossbeam_channel::{unbounded, Receiver, Sender};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportEvent {
    LoadedMetadata,
    TimeUpdate,
    Play,
    Pause,
}

pub trait MediaTransport {
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// 0 (or NaN) while metadata is still loading.
    fn duration(&self) -> f64;
    fn is_paused(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);
    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);
    /// Register a listener. Every subscriber receives every later event.
    fn subscribe(&mut self) -> Receiver<TransportEvent>;
}

// ── ScriptedTransport ─────────────────────────────────────────────────────────
// In-memory transport. Tests drive it step by step; the desktop shell drives
// it with wall-clock `advance(dt)` as a software playback clock.

#[derive(Debug)]
pub struct ScriptedTransport {
    duration:    f64,
    current:     f64,
    paused:      bool,
    rate:        f64,
    subscribers: Vec<Sender<TransportEvent>>,
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            duration:    0.0,
            current:     0.0,
            paused:      true,
            rate:        1.0,
            subscribers: Vec::new(),
        }
    }

    /// Finish "loading" media of the given length and announce it.
    pub fn load(&mut self, duration: f64) {
        self.duration = duration.max(0.0);
        self.current  = 0.0;
        self.emit(TransportEvent::LoadedMetadata);
    }

    /// Advance the playhead by `dt` wall-clock seconds if playing.
    /// Stops at the end of media like a browser `<video>` does.
    pub fn advance(&mut self, dt: f64) {
        if self.paused || self.duration <= 0.0 || !(dt > 0.0) {
            return;
        }
        self.current = (self.current + dt * self.rate).min(self.duration);
        self.emit(TransportEvent::TimeUpdate);
        if self.current >= self.duration {
            self.paused = true;
            self.emit(TransportEvent::Pause);
        }
    }

    fn emit(&mut self, ev: TransportEvent) {
        // Drop listeners whose receiver is gone.
        self.subscribers.retain(|tx| tx.send(ev).is_ok());
    }
}

impl MediaTransport for ScriptedTransport {
    fn current_time(&self) -> f64 {
        self.current
    }

    fn set_current_time(&mut self, seconds: f64) {
        let t = seconds.max(0.0);
        if (t - self.current).abs() > f64::EPSILON {
            self.current = t;
            self.emit(TransportEvent::TimeUpdate);
        }
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        if self.paused {
            self.paused = false;
            self.emit(TransportEvent::Play);
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.emit(TransportEvent::Pause);
        }
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn subscribe(&mut self) -> Receiver<TransportEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }
}
