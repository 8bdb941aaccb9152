// crates/clipstrip-ui/src/modules/seek_bar.rs
//
// The scrub track under the monitor. Painting comes from the core's
// `SeekBarView`; pointer handling only converts x to time and forwards
// press / move / release / click. What a press means (scrub or drag a range
// handle) is decided by the player.

use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Ui};

use clipstrip_core::commands::ClipCommand;
use clipstrip_core::seek_bar::TrackGeometry;
use clipstrip_core::ItemList;

use super::{Player, PlayerModule, ThumbnailCache};
use crate::theme::{PROGRESS, RANGE_BAND, RANGE_MARKER, TEXT_DIM, TRACK};

const BAR_H:    f32 = 36.0;
const TRACK_H:  f32 = 6.0;
const MARKER_W: f32 = 3.0;
const LABEL_H:  f32 = 14.0;

#[derive(Default)]
pub struct SeekBarModule {
    /// Pointer went down on the track and has not been released yet.
    held:   bool,
    last_x: f32,
}

impl PlayerModule for SeekBarModule {
    fn name(&self) -> &str { "Seek bar" }

    fn ui(&mut self, ui: &mut Ui, player: &Player, _list: &ItemList, _thumb_cache: &mut ThumbnailCache, cmd: &mut Vec<ClipCommand>) {
        let view = player.seek_bar_view();
        let duration = player.duration();

        ui.horizontal(|ui| {
            ui.label(RichText::new(&view.current_label).monospace().size(11.0));
            let w = (ui.available_width() - 48.0).max(40.0);
            let (rect, resp) = ui.allocate_exact_size(egui::vec2(w, BAR_H), Sense::click_and_drag());
            ui.label(RichText::new(&view.duration_label).monospace().size(11.0).color(TEXT_DIM));

            let track = Rect::from_center_size(
                Pos2::new(rect.center().x, rect.bottom() - BAR_H * 0.35),
                egui::vec2(rect.width(), TRACK_H),
            );
            let geom = TrackGeometry::new(track.left(), track.width());
            let painter = ui.painter_at(rect.expand(2.0));

            // ── Track, range band, progress ─────────────────────────────────
            painter.rect_filled(track, 3.0, TRACK);
            let x_of = |f: f32| track.left() + f * track.width();
            let (sx, ex) = (x_of(view.start_fraction), x_of(view.end_fraction));
            if ex > sx {
                painter.rect_filled(
                    Rect::from_min_max(Pos2::new(sx, track.top()), Pos2::new(ex, track.bottom())),
                    0.0, RANGE_BAND);
            }
            painter.rect_filled(
                Rect::from_min_max(track.min, Pos2::new(x_of(view.progress), track.bottom())),
                3.0, PROGRESS);
            painter.circle_filled(Pos2::new(x_of(view.progress), track.center().y), 6.0, PROGRESS);

            // ── Range markers ───────────────────────────────────────────────
            let marker = RANGE_MARKER.gamma_multiply(view.marker_opacity);
            for (x, label) in [(sx, &view.start_label), (ex, &view.end_label)] {
                let m = Rect::from_center_size(
                    Pos2::new(x, track.center().y),
                    egui::vec2(MARKER_W, TRACK_H + 10.0),
                );
                painter.rect_filled(m, 1.0, marker);
                if let Some(label) = label {
                    let at = Pos2::new(x, m.top() - 2.0);
                    let galley_rect = Rect::from_center_size(
                        Pos2::new(x, at.y - LABEL_H * 0.5),
                        egui::vec2(label.len() as f32 * 7.0 + 6.0, LABEL_H),
                    );
                    painter.rect_filled(galley_rect, 2.0, Color32::from_black_alpha(200));
                    painter.text(galley_rect.center(), Align2::CENTER_CENTER, label,
                        FontId::monospace(10.0), RANGE_MARKER);
                }
            }
            if player.mode().is_editing() {
                painter.rect_stroke(track.expand(3.0), 3.0, Stroke::new(1.0, marker),
                    egui::StrokeKind::Outside);
            }

            // ── Pointer ─────────────────────────────────────────────────────
            let pointer = resp.interact_pointer_pos();
            let down = resp.is_pointer_button_down_on();
            match (self.held, down, pointer) {
                (false, true, Some(p)) => {
                    self.held = true;
                    self.last_x = p.x;
                    cmd.push(ClipCommand::BarPointerDown(geom.time_at(p.x, duration)));
                }
                (true, true, Some(p)) if p.x != self.last_x => {
                    self.last_x = p.x;
                    cmd.push(ClipCommand::BarPointerMove(geom.time_at(p.x, duration)));
                }
                (true, false, _) => {
                    self.held = false;
                    cmd.push(ClipCommand::BarPointerUp);
                }
                _ => {}
            }
            if resp.clicked() {
                if let Some(p) = pointer {
                    cmd.push(ClipCommand::BarClick(geom.time_at(p.x, duration)));
                }
            }
            if resp.hovered() || self.held {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        });
    }
}
