// crates/clipstrip-ui/src/modules/monitor.rs
//
// The picture area. There is no decoder behind the software clock, so the
// monitor shows the thumbnail for the frame on screen: the preview time
// while the filmstrip is open, the playhead otherwise.

use egui::{Align2, Color32, FontId, Rect, RichText, Sense, Stroke, Ui};

use clipstrip_core::commands::ClipCommand;
use clipstrip_core::ItemList;

use crate::helpers::format::rate_label;
use super::{paint_thumb, Player, PlayerModule, ThumbnailCache};
use crate::theme::{ACCENT, BG_2, BORDER, RANGE_MARKER, TEXT_DIM};

const ASPECT: f32 = 16.0 / 9.0;

#[derive(Default)]
pub struct MonitorModule;

impl PlayerModule for MonitorModule {
    fn name(&self) -> &str { "Monitor" }

    fn ui(&mut self, ui: &mut Ui, player: &Player, _list: &ItemList, thumb_cache: &mut ThumbnailCache, cmd: &mut Vec<ClipCommand>) {
        // ── Header ───────────────────────────────────────────────────────────
        egui::Frame::new()
            .fill(BG_2)
            .inner_margin(egui::Margin { left: 8, right: 8, top: 5, bottom: 5 })
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.name()).size(12.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mode = player.mode();
                        let color = if mode.is_restricted() || mode.is_editing() { RANGE_MARKER } else { TEXT_DIM };
                        ui.label(RichText::new(mode.label()).size(10.0).color(color));
                    });
                });
            });

        // ── Frame ────────────────────────────────────────────────────────────
        let avail = ui.available_size();
        let h = (avail.x / ASPECT).min(avail.y - 4.0).max(60.0);
        let w = h * ASPECT;
        let (outer, resp) = ui.allocate_exact_size(egui::vec2(avail.x, h), Sense::click());
        let rect = Rect::from_center_size(outer.center(), egui::vec2(w, h));
        ui.painter().rect_stroke(rect.expand(1.0), 4, Stroke::new(1.0, BORDER), egui::StrokeKind::Outside);
        ui.painter().rect_filled(rect, 3.0, Color32::BLACK);

        if player.duration() <= 0.0 {
            ui.painter().text(rect.center(), Align2::CENTER_CENTER, "NO MEDIA",
                FontId::monospace(16.0), Color32::from_gray(48));
            return;
        }

        let t = if player.filmstrip().is_open() { player.preview_time() } else { player.current() };
        let url = player.resolver().resolve(t);
        let caption = if player.filmstrip().is_open() { "Preview" } else { "" };
        paint_thumb(ui, rect, url.as_deref(), t, (!caption.is_empty()).then_some(caption), thumb_cache);

        if player.is_playing() {
            let bp = egui::pos2(rect.max.x - 46.0, rect.min.y + 6.0);
            ui.painter().rect_filled(Rect::from_min_size(bp, egui::vec2(40.0, 15.0)), 3.0, ACCENT);
            ui.painter().text(bp + egui::vec2(20.0, 7.5), Align2::CENTER_CENTER,
                rate_label(player.playback_rate()), FontId::monospace(9.0), Color32::BLACK);
        }

        if resp.clicked() {
            cmd.push(ClipCommand::PlayPause);
        }
    }
}
