// crates/clipstrip-ui/src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod settings;
mod theme;

use anyhow::Context;
use clipstrip_media::{ThumbnailWorker, THUMB_H, THUMB_W};

fn main() -> anyhow::Result<()> {
    if let Err(e) = helpers::log::init() {
        eprintln!("clipstrip: {e:#}");
    }

    let settings = settings::AppSettings::load_or_default();
    let worker = ThumbnailWorker::new(THUMB_W, THUMB_H).context("starting thumbnail worker")?;

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("ClipStrip")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "ClipStrip",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::ClipStripApp::new(cc, settings, worker)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}
