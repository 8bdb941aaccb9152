// crates/clipstrip-media/src/lib.rs
//
// No egui dependency. Talks to clipstrip-ui over channels only.
//
// To add a new thumbnail source:
//   1. Create a new module file here
//   2. Add `pub mod mymodule;` below
//   3. Dispatch to it from worker.rs by URL scheme

pub mod placeholder;
pub mod worker;

// Re-export the main public API so clipstrip-ui imports are simple.
pub use worker::ThumbnailWorker;
pub use clipstrip_core::media_types::{MediaResult, ThumbnailFrame};
pub use placeholder::{CAPTION_H, THUMB_H, THUMB_W};
