// crates/clipstrip-ui/src/modules/step_panel.rs
//
// The three steps of building a clip: choose a range, choose a thumbnail,
// add it to the list. Reads the draft straight from the player.

use egui::{RichText, Ui};

use clipstrip_core::commands::ClipCommand;
use clipstrip_core::helpers::time::format_time;
use clipstrip_core::{ItemList, RangeHandle};

use super::{paint_thumb, Player, PlayerModule, ThumbnailCache};
use crate::theme::{ACCENT, BG_2, BORDER, RANGE_MARKER, TEXT_DIM};

const THUMB_W: f32 = 96.0;
const THUMB_H: f32 = 54.0;

#[derive(Default)]
pub struct StepPanelModule;

fn step_frame(ui: &mut Ui, title: &str, add: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .fill(BG_2)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(egui::CornerRadius::same(5))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).size(11.0).strong());
            ui.add_space(2.0);
            add(ui);
        });
}

fn time_field(ui: &mut Ui, value: f64, duration: f64) -> Option<f64> {
    let mut v = value;
    let resp = ui.add(
        egui::DragValue::new(&mut v)
            .speed(0.1)
            .range(0.0..=duration)
            .custom_formatter(|n, _| format_time(n))
            .custom_parser(|s| s.trim().parse::<f64>().ok()),
    );
    resp.changed().then_some(v)
}

impl StepPanelModule {
    fn range_step(ui: &mut Ui, player: &Player, cmd: &mut Vec<ClipCommand>) {
        step_frame(ui, "1 · Range", |ui| {
            let summary = player.range_summary().unwrap_or_else(|| "—".into());
            ui.label(RichText::new(summary).monospace().size(12.0).color(RANGE_MARKER));

            if player.mode().is_editing() {
                let r = player.range().candidate();
                let duration = player.duration();
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Start").size(10.0).color(TEXT_DIM));
                    if let Some(t) = time_field(ui, r.start, duration) {
                        cmd.push(ClipCommand::DragRangeHandle { handle: RangeHandle::Start, time: t });
                    }
                    ui.label(RichText::new("End").size(10.0).color(TEXT_DIM));
                    if let Some(t) = time_field(ui, r.end, duration) {
                        cmd.push(ClipCommand::DragRangeHandle { handle: RangeHandle::End, time: t });
                    }
                });
                ui.label(RichText::new("Drag on the seek bar to move the nearest marker")
                    .size(10.0).color(TEXT_DIM));
                ui.horizontal(|ui| {
                    if ui.add_enabled(player.is_range_dirty(), egui::Button::new("Save range")).clicked() {
                        cmd.push(ClipCommand::CommitRange);
                    }
                    if ui.button("Cancel").clicked() {
                        cmd.push(ClipCommand::CancelRangeEdit);
                    }
                });
                return;
            }

            ui.horizontal(|ui| {
                if ui.button("Edit range").clicked() {
                    cmd.push(ClipCommand::BeginRangeEdit);
                }
                if player.mode().is_restricted() {
                    if ui.button("Stop range playback").clicked() {
                        cmd.push(ClipCommand::ExitRestrictedPlayback);
                    }
                } else {
                    let ready = player.range().committed().is_some();
                    if ui.add_enabled(ready, egui::Button::new("Play range"))
                        .on_disabled_hover_text("Save a range first")
                        .clicked()
                    {
                        cmd.push(ClipCommand::EnterRestrictedPlayback);
                    }
                }
            });
        });
    }

    fn thumbnail_step(ui: &mut Ui, player: &Player, thumb_cache: &mut ThumbnailCache, cmd: &mut Vec<ClipCommand>) {
        step_frame(ui, "2 · Thumbnail", |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(THUMB_W, THUMB_H), egui::Sense::hover());
                match player.selection().selected {
                    Some(t) => {
                        let url = player.resolver().resolve(t);
                        paint_thumb(ui, rect, url.as_deref(), t, None, thumb_cache);
                    }
                    None => {
                        ui.painter().rect_stroke(rect, 3.0, egui::Stroke::new(1.0, BORDER),
                            egui::StrokeKind::Inside);
                        ui.painter().text(rect.center(), egui::Align2::CENTER_CENTER, "none",
                            egui::FontId::proportional(10.0), TEXT_DIM);
                    }
                }
                ui.vertical(|ui| {
                    match player.selection().selected {
                        Some(t) => ui.label(RichText::new(format!("Frame at {}", format_time(t))).size(11.0)),
                        None => ui.label(RichText::new("Open the filmstrip and tap a frame")
                            .size(10.0).color(TEXT_DIM)),
                    };
                    let label = if player.filmstrip().is_open() { "Done" } else { "Choose…" };
                    if ui.button(label).clicked() {
                        cmd.push(if player.filmstrip().is_open() {
                            ClipCommand::CloseFilmstrip
                        } else {
                            ClipCommand::OpenFilmstrip(None)
                        });
                    }
                });
            });
        });
    }

    fn add_step(ui: &mut Ui, player: &Player, list: &ItemList, cmd: &mut Vec<ClipCommand>) {
        step_frame(ui, "3 · Add", |ui| {
            ui.horizontal(|ui| {
                let add = egui::Button::new(RichText::new("Add to list").color(ACCENT));
                if ui.add_enabled(player.can_commit(), add)
                    .on_disabled_hover_text("Needs a range with length and a thumbnail")
                    .clicked()
                {
                    cmd.push(ClipCommand::CommitDraft);
                }
                if list.selected_id().is_some() && ui.button("New clip").clicked() {
                    cmd.push(ClipCommand::ClearSelection);
                }
            });
            if let Some(id) = list.selected_id() {
                ui.label(RichText::new(format!("Loaded {id}")).size(10.0).color(TEXT_DIM));
            }
        });
    }
}

impl PlayerModule for StepPanelModule {
    fn name(&self) -> &str { "Steps" }

    fn ui(&mut self, ui: &mut Ui, player: &Player, list: &ItemList, thumb_cache: &mut ThumbnailCache, cmd: &mut Vec<ClipCommand>) {
        Self::range_step(ui, player, cmd);
        ui.add_space(4.0);
        Self::thumbnail_step(ui, player, thumb_cache, cmd);
        ui.add_space(4.0);
        Self::add_step(ui, player, list, cmd);
    }
}
