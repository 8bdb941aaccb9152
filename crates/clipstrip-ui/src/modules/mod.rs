// crates/clipstrip-ui/src/modules/mod.rs
//
// Module registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing PlayerModule
//   2. Add `pub mod mypanel;` below
//   3. Add a field and one `ui()` call in app.rs

pub mod controls;
pub mod filmstrip;
pub mod item_list;
pub mod monitor;
pub mod seek_bar;
pub mod step_panel;

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use egui::load::SizedTexture;
use egui::{Align2, Color32, FontId, ImageSource, Rect, TextureHandle, Ui};

use clipstrip_core::commands::ClipCommand;
use clipstrip_core::helpers::time::format_time;
use clipstrip_core::thumbnail::placeholder_second;
use clipstrip_core::{ClipPlayer, ItemList, ScriptedTransport};

use crate::theme::{BG_0, TEXT_DIM};

/// The player as hosted by the shell: driven by the software clock.
pub type Player = ClipPlayer<ScriptedTransport>;

/// Thumbnail textures keyed by URL.
///
/// Generated (`placeholder://`) frames are rendered by the media worker and
/// uploaded here; anything else is handed to the egui_extras URI loaders.
#[derive(Default)]
pub struct ThumbnailCache {
    textures:  HashMap<String, TextureHandle>,
    requested: HashSet<String>,
    failed:    HashSet<String>,
    wanted:    Vec<String>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: String, tex: TextureHandle) {
        self.textures.insert(url, tex);
    }

    pub fn mark_failed(&mut self, url: String) {
        self.failed.insert(url);
    }

    /// The worker dropped `url` before rendering it; ask again next time it
    /// is drawn.
    pub fn forget(&mut self, url: &str) {
        self.requested.remove(url);
    }

    /// URLs seen for the first time since the last call.
    pub fn take_wanted(&mut self) -> Vec<String> {
        std::mem::take(&mut self.wanted)
    }

    /// Image source for `url`, or None while a generated frame is pending.
    pub fn source(&mut self, url: &str) -> Option<ImageSource<'static>> {
        if placeholder_second(url).is_none() {
            return Some(ImageSource::Uri(url.to_owned().into()));
        }
        if let Some(tex) = self.textures.get(url) {
            return Some(ImageSource::Texture(SizedTexture::from_handle(tex)));
        }
        if !self.failed.contains(url) && self.requested.insert(url.to_owned()) {
            self.wanted.push(url.to_owned());
        }
        None
    }
}

/// Every panel implements this trait.
/// Modules read the player and list, emit commands; they never mutate either.
pub trait PlayerModule {
    fn name(&self) -> &str;
    fn ui(
        &mut self,
        ui:          &mut Ui,
        player:      &Player,
        list:        &ItemList,
        thumb_cache: &mut ThumbnailCache,
        cmd:         &mut Vec<ClipCommand>,
    );
}

/// Paint the thumbnail for `time` into `rect`. Generated frames carry no
/// text, so the timestamp (and `caption`, if any) is painted over them.
pub fn paint_thumb(
    ui:          &Ui,
    rect:        Rect,
    url:         Option<&str>,
    time:        f64,
    caption:     Option<&str>,
    thumb_cache: &mut ThumbnailCache,
) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 3.0, BG_0);

    let Some(url) = url else {
        painter.text(rect.center(), Align2::CENTER_CENTER, "—",
            FontId::proportional(14.0), TEXT_DIM);
        return;
    };

    match thumb_cache.source(url) {
        Some(src) => {
            egui::Image::new(src)
                .corner_radius(egui::CornerRadius::same(3))
                .paint_at(ui, rect);
        }
        None => {
            painter.text(rect.center(), Align2::CENTER_CENTER, "…",
                FontId::proportional(14.0), TEXT_DIM);
            // Poll for the finished frame without spinning.
            ui.ctx().request_repaint_after(Duration::from_millis(50));
            return;
        }
    }

    if placeholder_second(url).is_some() {
        let size = (rect.height() * 0.22).clamp(9.0, 28.0);
        painter.text(rect.center() - egui::vec2(0.0, size * 0.3), Align2::CENTER_CENTER,
            format_time(time), FontId::monospace(size), Color32::WHITE);
        if let Some(caption) = caption {
            painter.text(rect.center_bottom() - egui::vec2(0.0, 4.0), Align2::CENTER_BOTTOM,
                caption, FontId::proportional((size * 0.45).max(8.0)),
                Color32::from_white_alpha(200));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_urls_go_to_the_loaders() {
        let mut cache = ThumbnailCache::new();
        match cache.source("https://cdn/t/3.jpg") {
            Some(ImageSource::Uri(u)) => assert_eq!(u, "https://cdn/t/3.jpg"),
            _ => panic!("expected a uri source"),
        }
        assert!(cache.take_wanted().is_empty());
    }

    #[test]
    fn placeholder_is_requested_once() {
        let mut cache = ThumbnailCache::new();
        assert!(cache.source("placeholder://thumb/3").is_none());
        assert!(cache.source("placeholder://thumb/3").is_none());
        assert_eq!(cache.take_wanted(), vec!["placeholder://thumb/3".to_string()]);
        assert!(cache.take_wanted().is_empty());
    }

    #[test]
    fn forgotten_placeholder_is_requested_again() {
        let mut cache = ThumbnailCache::new();
        assert!(cache.source("placeholder://thumb/4").is_none());
        assert_eq!(cache.take_wanted().len(), 1);
        cache.forget("placeholder://thumb/4");
        assert!(cache.source("placeholder://thumb/4").is_none());
        assert_eq!(cache.take_wanted(), vec!["placeholder://thumb/4".to_string()]);
    }

    #[test]
    fn failed_placeholder_is_not_requested() {
        let mut cache = ThumbnailCache::new();
        cache.mark_failed("placeholder://thumb/9".into());
        assert!(cache.source("placeholder://thumb/9").is_none());
        assert!(cache.take_wanted().is_empty());
    }
}
