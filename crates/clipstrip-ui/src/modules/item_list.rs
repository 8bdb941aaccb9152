// crates/clipstrip-ui/src/modules/item_list.rs
//
// Committed clips for this session. Click a card to load it back into the
// player, drag a card onto another to move it there, pin to keep it on top.
use super::{paint_thumb, Player, PlayerModule, ThumbnailCache};
use clipstrip_core::commands::ClipCommand;
use clipstrip_core::ItemList;
use crate::helpers::format::{fit_label, item_caption};
use crate::theme::{ACCENT, BG_2, BG_3, BG_4, BORDER, PINNED, TEXT_DIM};
use egui::{Color32, Id, LayerId, Order, RichText, Sense, Stroke, Ui};

const CARD_THUMB: egui::Vec2 = egui::vec2(80.0, 45.0);
const DND_PAYLOAD: &str = "clip_dnd_payload";

#[derive(Default)]
pub struct ItemListModule;

impl PlayerModule for ItemListModule {
    fn name(&self) -> &str { "Clips" }

    fn ui(&mut self, ui: &mut Ui, _player: &Player, list: &ItemList, thumb_cache: &mut ThumbnailCache, cmd: &mut Vec<ClipCommand>) {
        // ── Hotkeys ──────────────────────────────────────────────────────────
        if ui.memory(|m| m.focused().is_none())
            && ui.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace))
        {
            if let Some(id) = list.selected_id() {
                cmd.push(ClipCommand::RemoveItem(id.to_owned()));
            }
        }

        // ── Header ───────────────────────────────────────────────────────────
        egui::Frame::new()
            .fill(BG_2)
            .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.name()).size(12.0).strong());
                    ui.label(RichText::new(format!("{}", list.len())).size(10.0).color(TEXT_DIM));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add_enabled(list.selected_id().is_some(),
                            egui::Button::new(RichText::new("Deselect").size(11.0))).clicked()
                        {
                            cmd.push(ClipCommand::ClearSelection);
                        }
                    });
                });
            });
        ui.separator();

        if list.is_empty() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No clips yet").size(12.0).color(TEXT_DIM));
                ui.add_space(4.0);
                ui.label(RichText::new("Pick a range and a thumbnail,\nthen Add to list")
                    .size(10.0).color(TEXT_DIM));
            });
            return;
        }

        let dragging: Option<String> = ui.memory(|m| m.data.get_temp(Id::new(DND_PAYLOAD)));
        let released = ui.input(|i| i.pointer.any_released());

        egui::ScrollArea::vertical().show(ui, |ui| {
            for entry in list.entries() {
                let item        = &entry.item;
                let card_id     = Id::new("clip_card").with(&item.id);
                let is_selected = list.selected_id() == Some(item.id.as_str());
                let is_dragged  = dragging.as_deref() == Some(item.id.as_str());
                let (range_text, thumb_text) = item_caption(item);

                let border = if is_selected || is_dragged { ACCENT } else { BORDER };
                let fill   = if is_selected { BG_4 } else { BG_3 };

                let card = egui::Frame::new()
                    .fill(fill)
                    .stroke(Stroke::new(if is_selected { 1.5 } else { 1.0 }, border))
                    .corner_radius(egui::CornerRadius::same(5))
                    .inner_margin(egui::Margin::same(4))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let (rect, _) = ui.allocate_exact_size(CARD_THUMB, Sense::hover());
                            paint_thumb(ui, rect, Some(&item.thumbnail_url), item.thumbnail_time,
                                None, thumb_cache);
                            ui.vertical(|ui| {
                                let w = ui.available_width() - 20.0;
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(fit_label(&range_text, w)).monospace().size(11.0));
                                    if entry.pinned {
                                        ui.label(RichText::new("📌").size(10.0).color(PINNED));
                                    }
                                });
                                ui.label(RichText::new(fit_label(&thumb_text, w)).size(10.0).color(TEXT_DIM));
                            });
                        });
                    })
                    .response;

                // ── Interact ─────────────────────────────────────────────────
                let interact = ui.interact(card.rect, card_id, Sense::click_and_drag());
                if interact.clicked() {
                    cmd.push(ClipCommand::SelectItem(item.id.clone()));
                }
                if interact.drag_started() {
                    let id = item.id.clone();
                    ui.memory_mut(|m| m.data.insert_temp(Id::new(DND_PAYLOAD), id));
                }
                if interact.dragged() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
                } else if interact.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                }

                // ── Right-click context menu ─────────────────────────────────
                interact.context_menu(|ui| {
                    ui.set_min_width(140.0);
                    let pin = if entry.pinned { "Unpin" } else { "📌  Pin to top" };
                    if ui.button(pin).clicked() {
                        cmd.push(ClipCommand::TogglePin(item.id.clone()));
                        ui.close();
                    }
                    if ui.button("🗑  Remove clip").clicked() {
                        cmd.push(ClipCommand::RemoveItem(item.id.clone()));
                        ui.close();
                    }
                    ui.separator();
                    ui.label(RichText::new(&item.id).size(10.0).color(TEXT_DIM));
                });

                // Drop target: the card under the pointer when the drag ends.
                if let Some(from) = &dragging {
                    let hovered = ui.ctx().pointer_interact_pos().is_some_and(|p| card.rect.contains(p));
                    if hovered && from != &item.id {
                        ui.painter().hline(card.rect.x_range(), card.rect.top() - 2.0,
                            Stroke::new(2.0, ACCENT));
                        if released {
                            cmd.push(ClipCommand::ReorderItem { from: from.clone(), to: item.id.clone() });
                        }
                    }
                }

                // ── Drag ghost ───────────────────────────────────────────────
                if is_dragged {
                    if let Some(ptr) = ui.ctx().pointer_interact_pos() {
                        let ghost = egui::Rect::from_center_size(ptr, CARD_THUMB);
                        let gp = ui.ctx().layer_painter(LayerId::new(Order::Tooltip, Id::new("clip_ghost")));
                        gp.rect_filled(ghost, 4.0, Color32::from_black_alpha(160));
                        gp.rect_stroke(ghost, 4.0, Stroke::new(1.5, ACCENT), egui::StrokeKind::Outside);
                        gp.text(ghost.center(), egui::Align2::CENTER_CENTER, &range_text,
                            egui::FontId::monospace(10.0), Color32::WHITE);
                    }
                }
                ui.add_space(4.0);
            }
        });

        if released && dragging.is_some() {
            ui.memory_mut(|m| m.data.remove::<String>(Id::new(DND_PAYLOAD)));
        }
    }
}
