// crates/clipstrip-ui/src/modules/filmstrip.rs
//
// Thumbnail picker shown under the seek bar while the player is in
// PickingThumbnail mode. Slots are painted at the layout's rest positions
// shifted by the player's per-frame strip offset; the player turns the raw
// pointer stream into steps, taps and snaps.

use egui::{Align2, FontId, Pos2, Rect, RichText, Sense, Stroke, Ui};

use clipstrip_core::commands::ClipCommand;
use clipstrip_core::helpers::time::format_time;
use clipstrip_core::thumbnail::time_bucket;
use clipstrip_core::ItemList;

use super::{paint_thumb, Player, PlayerModule, ThumbnailCache};
use crate::theme::{ACCENT, BG_2, BORDER, CENTER_FRAME, TEXT_DIM};

const SLOT_ASPECT: f32 = 9.0 / 16.0;
const PAD:         f32 = 8.0;

#[derive(Default)]
pub struct FilmstripModule {
    held: bool,
}

impl PlayerModule for FilmstripModule {
    fn name(&self) -> &str { "Filmstrip" }

    fn ui(&mut self, ui: &mut Ui, player: &Player, _list: &ItemList, thumb_cache: &mut ThumbnailCache, cmd: &mut Vec<ClipCommand>) {
        if !player.filmstrip().is_open() {
            self.held = false;
            return;
        }

        let layout  = player.layout();
        let slots   = player.filmstrip_slots();
        let spans   = layout.slot_spans();
        let offset  = player.filmstrip().render_offset();
        let slot_h  = layout.center_width * SLOT_ASPECT;
        let picked  = player.selection().selected.map(time_bucket);

        egui::Frame::new()
            .fill(BG_2)
            .stroke(Stroke::new(1.0, BORDER))
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(PAD as i8))
            .show(ui, |ui| {
                // ── Strip ────────────────────────────────────────────────────
                let (view, resp) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), slot_h), Sense::click_and_drag());
                let strip_left = view.center().x - layout.strip_width() * 0.5;
                let mut clip_ui = ui.new_child(egui::UiBuilder::new().max_rect(view));
                clip_ui.set_clip_rect(view.intersect(ui.clip_rect()));

                for (slot, &(left, w)) in slots.iter().zip(&spans) {
                    let h = w * SLOT_ASPECT;
                    let rect = Rect::from_min_size(
                        Pos2::new(strip_left + left + offset, view.center().y - h * 0.5),
                        egui::vec2(w, h),
                    );
                    if !rect.intersects(view) {
                        continue;
                    }
                    paint_thumb(&clip_ui, rect, slot.url.as_deref(), slot.time, None, thumb_cache);
                    if picked == Some(time_bucket(slot.time)) {
                        clip_ui.painter().rect_stroke(rect, 3.0, Stroke::new(2.0, ACCENT),
                            egui::StrokeKind::Outside);
                    }
                    if slot.is_center {
                        clip_ui.painter().rect_stroke(rect.expand(1.0), 3.0,
                            Stroke::new(2.0, CENTER_FRAME), egui::StrokeKind::Outside);
                    }
                }

                // ── Pointer ──────────────────────────────────────────────────
                let down = resp.is_pointer_button_down_on();
                let pointer = resp.interact_pointer_pos();
                let lost = ui.input(|i| !i.pointer.has_pointer() || i.key_pressed(egui::Key::Escape));
                match (self.held, down, pointer) {
                    (true, _, _) if lost => {
                        self.held = false;
                        cmd.push(ClipCommand::FilmstripPointerCancel);
                    }
                    (false, true, Some(p)) => {
                        self.held = true;
                        let slot_time = layout
                            .slot_index_at(p.x - strip_left - offset)
                            .and_then(|i| slots.get(i))
                            .map(|s| s.time);
                        cmd.push(ClipCommand::FilmstripPointerDown { x: p.x, slot_time });
                    }
                    (true, true, Some(p)) => cmd.push(ClipCommand::FilmstripPointerMove(p.x)),
                    (true, false, _) => {
                        self.held = false;
                        cmd.push(ClipCommand::FilmstripPointerUp);
                    }
                    _ => {}
                }
                if self.held {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
                    ui.ctx().request_repaint();
                } else if resp.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                }

                // ── Footer ───────────────────────────────────────────────────
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("Preview {}", format_time(player.preview_time())))
                        .monospace().size(11.0));
                    ui.label(RichText::new("Drag to scrub, tap a frame to pick it")
                        .size(10.0).color(TEXT_DIM));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            cmd.push(ClipCommand::CloseFilmstrip);
                        }
                        if ui.button(RichText::new("Use this frame").color(ACCENT)).clicked() {
                            cmd.push(ClipCommand::SelectPreviewAsThumbnail);
                        }
                    });
                });

                if slots.is_empty() {
                    ui.painter().text(view.center(), Align2::CENTER_CENTER, "no frames",
                        FontId::proportional(12.0), TEXT_DIM);
                }
            });
    }
}
