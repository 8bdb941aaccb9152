// crates/clipstrip-ui/src/app.rs
//
// ClipStripApp: one player, one clip list, the panels, and the per-frame
// loop that ties them together.
//
// Frame order:
//   1. ingest finished thumbnails
//   2. panels read state and push ClipCommands
//   3. commands are routed to the list or the player
//   4. the list's reset token and selection are fed back to the player
//   5. the software clock advances, transport events are pumped, the
//      filmstrip offset for this frame is applied
//   6. committed items land in the list; new thumbnails are requested

use eframe::egui;
use tracing::{debug, info, trace};

use clipstrip_core::{ClipCommand, ItemList, PlayerEvent, ScriptedTransport};
use clipstrip_media::ThumbnailWorker;

use crate::context::AppContext;
use crate::modules::{
    controls::ControlsModule,
    filmstrip::FilmstripModule,
    item_list::ItemListModule,
    monitor::MonitorModule,
    seek_bar::SeekBarModule,
    step_panel::StepPanelModule,
    Player,
    PlayerModule,
};
use crate::settings::AppSettings;
use crate::theme::configure_style;

// ── App ───────────────────────────────────────────────────────────────────────

pub struct ClipStripApp {
    player:       Player,
    list:         ItemList,
    context:      AppContext,
    monitor:      MonitorModule,
    controls:     ControlsModule,
    seek_bar:     SeekBarModule,
    filmstrip:    FilmstripModule,
    steps:        StepPanelModule,
    items:        ItemListModule,
    /// Commands emitted by modules each frame, processed after the UI pass
    pending_cmds: Vec<ClipCommand>,
}

impl ClipStripApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings, worker: ThumbnailWorker) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        configure_style(&cc.egui_ctx);
        // Pin to dark mode so the OS theme does not overwrite ours.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        let mut player = Player::with_resolver(settings.player.clone(), settings.resolver());
        let mut transport = ScriptedTransport::new();
        transport.load(settings.media_duration);
        player.attach_transport(transport);
        info!(duration = settings.media_duration, resolver = ?player.resolver(), "player ready");

        Self {
            player,
            list:         ItemList::new(),
            context:      AppContext::new(worker),
            monitor:      MonitorModule,
            controls:     ControlsModule,
            seek_bar:     SeekBarModule::default(),
            filmstrip:    FilmstripModule::default(),
            steps:        StepPanelModule,
            items:        ItemListModule,
            pending_cmds: Vec::new(),
        }
    }

    fn process_commands(&mut self) {
        for cmd in std::mem::take(&mut self.pending_cmds) {
            if cmd.is_list_command() {
                self.list.process(&cmd);
            } else {
                self.player.process(&cmd);
            }
        }
        // The list drives the draft: a cleared selection resets it, a
        // selected item is loaded (once per id).
        self.player.reset_draft(self.list.reset_token());
        let selected = self.list.selected_item().cloned();
        self.player.load_for_editing(selected.as_ref());
    }

    fn tick_clock(&mut self, ctx: &egui::Context) {
        if self.player.is_playing() {
            let dt = ctx.input(|i| i.stable_dt as f64);
            if let Some(t) = self.player.transport_mut() {
                t.advance(dt);
            }
        }
        self.player.pump();

        for event in self.player.drain_events() {
            match event {
                PlayerEvent::ItemCommitted(item) => self.list.push(item),
                PlayerEvent::DraftChanged(draft) => {
                    debug!(start = draft.start, end = draft.end, thumb = ?draft.thumbnail_time, "draft changed");
                }
            }
        }

        // A release or step queued an offset for the next frame.
        if self.player.is_playing()
            || self.player.filmstrip().is_dragging()
            || self.player.filmstrip().offset_pending()
        {
            ctx.request_repaint();
        }
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for ClipStripApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.shutdown();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.context.ingest_media_results(ctx);
        // Apply the coalesced strip offset before anything paints.
        if let Some(offset) = self.player.on_frame() {
            trace!(offset, "strip offset");
        }

        egui::TopBottomPanel::top("top_panel")
            .exact_height(34.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(egui::RichText::new("ClipStrip")
                        .strong().size(15.0).color(crate::theme::ACCENT));
                    ui.separator();
                    let hint = self.player.range_summary()
                        .unwrap_or_else(|| "Pick a range, then a thumbnail".into());
                    ui.label(egui::RichText::new(hint).size(12.0).weak());
                });
            });

        egui::SidePanel::right("clips_panel")
            .resizable(true)
            .default_width(280.0)
            .min_width(200.0)
            .show(ctx, |ui| {
                self.items.ui(ui, &self.player, &self.list, &mut self.context.thumbnail_cache, &mut self.pending_cmds);
            });

        egui::TopBottomPanel::bottom("steps_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.steps.ui(ui, &self.player, &self.list, &mut self.context.thumbnail_cache, &mut self.pending_cmds);
                ui.add_space(4.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let ctl_h = if self.player.filmstrip().is_open() { 240.0 } else { 90.0 };
            ui.allocate_ui(egui::vec2(ui.available_width(), (ui.available_height() - ctl_h).max(80.0)), |ui| {
                self.monitor.ui(ui, &self.player, &self.list, &mut self.context.thumbnail_cache, &mut self.pending_cmds);
            });
            self.seek_bar.ui(ui, &self.player, &self.list, &mut self.context.thumbnail_cache, &mut self.pending_cmds);
            self.controls.ui(ui, &self.player, &self.list, &mut self.context.thumbnail_cache, &mut self.pending_cmds);
            self.filmstrip.ui(ui, &self.player, &self.list, &mut self.context.thumbnail_cache, &mut self.pending_cmds);
        });

        // ── Process commands emitted by modules this frame ────────────────────
        self.process_commands();
        self.tick_clock(ctx);
        self.context.flush_requests();
    }
}
