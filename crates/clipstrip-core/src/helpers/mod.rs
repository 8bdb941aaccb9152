pub mod frame_sync;
pub mod time;
