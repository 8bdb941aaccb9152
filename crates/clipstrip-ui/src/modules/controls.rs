// crates/clipstrip-ui/src/modules/controls.rs
//
// Transport row: play / pause / restart, position, speed menu, and the
// filmstrip toggle. Space and the arrow keys work anywhere outside a text
// field.

use egui::{RichText, Ui};

use clipstrip_core::commands::ClipCommand;
use clipstrip_core::ItemList;

use super::{Player, PlayerModule, ThumbnailCache};
use crate::helpers::format::{position_label, rate_label};
use crate::theme::{ACCENT, TEXT_DIM};

/// Seconds moved by one arrow-key press.
const NUDGE_SECONDS: f64 = 5.0;

#[derive(Default)]
pub struct ControlsModule;

impl ControlsModule {
    fn hotkeys(ui: &Ui, player: &Player, cmd: &mut Vec<ClipCommand>) {
        if ui.memory(|m| m.focused().is_some()) {
            return;
        }
        let (space, left, right) = ui.input(|i| (
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::ArrowLeft),
            i.key_pressed(egui::Key::ArrowRight),
        ));
        if space {
            cmd.push(ClipCommand::PressPlayButton);
        }
        if left {
            cmd.push(ClipCommand::Seek(player.current() - NUDGE_SECONDS));
        }
        if right {
            cmd.push(ClipCommand::Seek(player.current() + NUDGE_SECONDS));
        }
    }
}

impl PlayerModule for ControlsModule {
    fn name(&self) -> &str { "Controls" }

    fn ui(&mut self, ui: &mut Ui, player: &Player, _list: &ItemList, _thumb_cache: &mut ThumbnailCache, cmd: &mut Vec<ClipCommand>) {
        Self::hotkeys(ui, player, cmd);

        ui.horizontal(|ui| {
            let icon = if player.should_show_reset() {
                "⟲"
            } else if player.is_playing() {
                "⏸"
            } else {
                "▶"
            };
            let hint = if player.should_show_reset() { "Restart" } else { "Play / pause" };
            if ui.button(RichText::new(icon).size(18.0).color(ACCENT)).on_hover_text(hint).clicked() {
                cmd.push(ClipCommand::PressPlayButton);
            }

            ui.add_space(12.0);
            ui.label(RichText::new(position_label(player.current(), player.duration()))
                .monospace().size(12.0));
            ui.add_space(12.0);

            let current = player.playback_rate();
            let mut picked = current;
            egui::ComboBox::from_id_salt("playback_rate")
                .width(64.0)
                .selected_text(rate_label(current))
                .show_ui(ui, |ui| {
                    for &rate in player.playback_rates() {
                        ui.selectable_value(&mut picked, rate, rate_label(rate));
                    }
                });
            if picked != current {
                cmd.push(ClipCommand::SetPlaybackRate(picked));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let open = player.filmstrip().is_open();
                let label = if open { "Hide filmstrip" } else { "Filmstrip" };
                if ui.selectable_label(open, label).clicked() {
                    cmd.push(ClipCommand::ToggleFilmstrip);
                }
                if player.mode().is_restricted() {
                    ui.label(RichText::new("looping range").size(10.0).color(TEXT_DIM));
                }
            });
        });
    }
}
