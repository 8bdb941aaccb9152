// crates/clipstrip-ui/src/context.rs
//
// AppContext owns the runtime handles that are not part of the player or the
// list: the thumbnail worker and the GPU texture cache it fills.
// ClipStripApp holds one of these plus the player, the list and the modules.

use eframe::egui;
use tracing::warn;

use clipstrip_media::{MediaResult, ThumbnailWorker};

use crate::modules::ThumbnailCache;

pub struct AppContext {
    pub worker:          ThumbnailWorker,
    pub thumbnail_cache: ThumbnailCache,
}

impl AppContext {
    pub fn new(worker: ThumbnailWorker) -> Self {
        Self { worker, thumbnail_cache: ThumbnailCache::new() }
    }

    /// Upload every frame the worker finished since the last call.
    pub fn ingest_media_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.worker.rx.try_recv() {
            match result {
                MediaResult::Thumbnail(frame) => {
                    let tex = ctx.load_texture(
                        format!("thumb-{}", frame.sec),
                        egui::ColorImage::from_rgba_unmultiplied(
                            [frame.width as usize, frame.height as usize], &frame.data,
                        ),
                        egui::TextureOptions::LINEAR,
                    );
                    self.thumbnail_cache.insert(frame.url, tex);
                    ctx.request_repaint();
                }
                MediaResult::Error { url, msg } => {
                    warn!(url = %url, "thumbnail failed: {msg}");
                    self.thumbnail_cache.mark_failed(url);
                }
            }
        }
    }

    /// Hand URLs first seen this frame to the worker. Requests the worker
    /// evicts are forgotten so they are asked for again when next drawn.
    pub fn flush_requests(&mut self) {
        for url in self.thumbnail_cache.take_wanted() {
            if let Some(evicted) = self.worker.request(&url) {
                self.thumbnail_cache.forget(&evicted);
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.worker.shutdown();
    }
}
