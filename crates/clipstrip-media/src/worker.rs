// crates/clipstrip-media/src/worker.rs
//
// ThumbnailWorker: one background thread rendering placeholder thumbnails.
// All public API that clipstrip-ui calls lives here.
//
// Requests are de-duplicated by URL in a small FIFO guarded by a parking_lot
// mutex + condvar; results go back over a bounded crossbeam channel that the
// UI drains once per frame. Non-placeholder URLs are rejected: those are
// loaded by the UI's image loaders, not here.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::{Condvar, Mutex};
use tracing::{debug, warn};

use clipstrip_core::media_types::MediaResult;
use clipstrip_core::thumbnail::placeholder_second;

use crate::placeholder::render_placeholder;

/// Queue depth after which the oldest request is dropped. The filmstrip
/// shows nine slots, so anything older has already scrolled away.
const MAX_QUEUED: usize = 32;

#[derive(Default)]
struct RequestQueue {
    urls:     VecDeque<String>,
    shutdown: bool,
}

impl RequestQueue {
    /// Append `url` unless it is already waiting. Returns the url that was
    /// evicted to make room, if any.
    fn push(&mut self, url: &str) -> Option<String> {
        if self.shutdown || self.urls.iter().any(|u| u == url) {
            return None;
        }
        let evicted = if self.urls.len() >= MAX_QUEUED {
            self.urls.pop_front()
        } else {
            None
        };
        self.urls.push_back(url.to_owned());
        evicted
    }
}

pub struct ThumbnailWorker {
    pub rx:   Receiver<MediaResult>,
    queue:    Arc<(Mutex<RequestQueue>, Condvar)>,
    stopped:  Arc<AtomicBool>,
    handle:   Option<JoinHandle<()>>,
}

impl ThumbnailWorker {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (tx, rx) = bounded(64);
        let queue: Arc<(Mutex<RequestQueue>, Condvar)> =
            Arc::new((Mutex::new(RequestQueue::default()), Condvar::new()));
        let stopped = Arc::new(AtomicBool::new(false));

        let slot = Arc::clone(&queue);
        let done = Arc::clone(&stopped);
        let handle = thread::Builder::new()
            .name("clipstrip-thumbs".into())
            .spawn(move || run(slot, tx, width, height, done))
            .context("spawning thumbnail worker thread")?;

        Ok(Self { rx, queue, stopped, handle: Some(handle) })
    }

    /// Queue `url` for rendering unless it is already waiting. When the
    /// queue is full the oldest request is dropped and its url returned so
    /// the caller can ask for it again later.
    pub fn request(&self, url: &str) -> Option<String> {
        if placeholder_second(url).is_none() {
            warn!(url, "not a placeholder thumbnail url");
            return None;
        }
        let (lock, cvar) = &*self.queue;
        let evicted = lock.lock().push(url);
        cvar.notify_one();
        if let Some(old) = &evicted {
            debug!(url = %old, "thumbnail request evicted");
        }
        evicted
    }

    pub fn pending(&self) -> usize {
        self.queue.0.lock().urls.len()
    }

    /// True once the worker thread has exited.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub fn shutdown(&mut self) {
        {
            let (lock, cvar) = &*self.queue;
            let mut q = lock.lock();
            q.shutdown = true;
            q.urls.clear();
            cvar.notify_all();
        }
        // Unblock a send on a full channel.
        while self.rx.try_recv().is_ok() {}
        if let Some(h) = self.handle.take() {
            if h.join().is_err() {
                warn!("thumbnail worker panicked");
            }
        }
    }
}

impl Drop for ThumbnailWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(
    queue:   Arc<(Mutex<RequestQueue>, Condvar)>,
    tx:      Sender<MediaResult>,
    width:   u32,
    height:  u32,
    stopped: Arc<AtomicBool>,
) {
    loop {
        let url = {
            let (lock, cvar) = &*queue;
            let mut q = lock.lock();
            while q.urls.is_empty() && !q.shutdown {
                cvar.wait(&mut q);
            }
            if q.shutdown {
                break;
            }
            match q.urls.pop_front() {
                Some(u) => u,
                None => continue,
            }
        };

        let result = match placeholder_second(&url)
            .context("bad placeholder url")
            .and_then(|sec| render_placeholder(sec, width, height))
        {
            Ok(frame) => MediaResult::Thumbnail(frame),
            Err(e)    => MediaResult::Error { url: url.clone(), msg: format!("{e:#}") },
        };

        // Back off while the UI is behind; bail out on shutdown.
        let mut pending = result;
        loop {
            match tx.try_send(pending) {
                Ok(()) => break,
                Err(TrySendError::Disconnected(_)) => {
                    stopped.store(true, Ordering::Relaxed);
                    return;
                }
                Err(TrySendError::Full(back)) => {
                    if queue.0.lock().shutdown {
                        stopped.store(true, Ordering::Relaxed);
                        return;
                    }
                    pending = back;
                    thread::sleep(std::time::Duration::from_millis(4));
                }
            }
        }
        debug!(url = %url, "thumbnail rendered");
    }
    stopped.store(true, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn renders_requested_placeholder() {
        let w = ThumbnailWorker::new(16, 9).unwrap();
        w.request("placeholder://thumb/12");
        match w.rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            MediaResult::Thumbnail(f) => {
                assert_eq!(f.sec, 12);
                assert_eq!(f.url, "placeholder://thumb/12");
                assert_eq!(f.data.len(), 16 * 9 * 4);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn foreign_urls_are_not_queued() {
        let w = ThumbnailWorker::new(16, 9).unwrap();
        w.request("https://example.com/t/12.jpg");
        assert_eq!(w.pending(), 0);
        assert!(w.rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn full_queue_evicts_and_reports_oldest() {
        let mut q = RequestQueue::default();
        for sec in 0..MAX_QUEUED {
            assert_eq!(q.push(&format!("placeholder://thumb/{sec}")), None);
        }
        assert_eq!(q.push("placeholder://thumb/5"), None, "duplicates are ignored");
        assert_eq!(
            q.push("placeholder://thumb/999").as_deref(),
            Some("placeholder://thumb/0"),
        );
        assert_eq!(q.urls.len(), MAX_QUEUED);
        assert_eq!(q.urls.back().map(String::as_str), Some("placeholder://thumb/999"));
    }

    #[test]
    fn shutdown_queue_accepts_nothing() {
        let mut q = RequestQueue { shutdown: true, ..Default::default() };
        assert_eq!(q.push("placeholder://thumb/1"), None);
        assert!(q.urls.is_empty());
    }

    #[test]
    fn shutdown_joins_thread() {
        let mut w = ThumbnailWorker::new(16, 9).unwrap();
        w.request("placeholder://thumb/1");
        w.shutdown();
        assert!(w.is_stopped());
        w.request("placeholder://thumb/2");
        assert_eq!(w.pending(), 0);
    }
}
