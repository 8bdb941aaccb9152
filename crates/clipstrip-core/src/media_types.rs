// crates/clipstrip-core/src/media_types.rs
//
// Types that flow across the channel between clipstrip-media and clipstrip-ui.
// No egui, no threads, just plain data.

/// A rendered thumbnail for one whole-second bucket.
pub struct ThumbnailFrame {
    /// The URL the frame was requested for; the UI caches by it.
    pub url:    String,
    pub sec:    u64,
    pub width:  u32,
    pub height: u32,
    pub data:   Vec<u8>, // RGBA
}

impl std::fmt::Debug for ThumbnailFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailFrame")
            .field("url", &self.url)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Results sent from the ThumbnailWorker thread to the UI.
#[derive(Debug)]
pub enum MediaResult {
    Thumbnail(ThumbnailFrame),
    Error { url: String, msg: String },
}
