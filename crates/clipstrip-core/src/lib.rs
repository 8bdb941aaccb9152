// crates/clipstrip-core/src/lib.rs
//
// Timeline interaction core for ClipStrip. Pure data and state machines:
// no egui, no threads. The media transport is reached only through the
// `MediaTransport` trait.

pub mod clock;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod filmstrip;
pub mod helpers;
pub mod list;
pub mod media_types;
pub mod player;
pub mod range;
pub mod seek_bar;
pub mod state;
pub mod thumbnail;
pub mod transport;

pub use commands::ClipCommand;
pub use config::PlayerConfig;
pub use draft::{CommittedItem, Draft};
pub use error::ConfigError;
pub use list::ItemList;
pub use player::{ClipPlayer, PlayerEvent};
pub use state::{InteractionMode, RangeHandle, TimeRange};
pub use thumbnail::ThumbnailResolver;
pub use transport::{MediaTransport, ScriptedTransport, TransportEvent};
