mod app;
mod classifier;
mod color;
mod config;
mod data;
mod predict;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::FakeCashApp;
use config::AppConfig;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    // Without a model there is nothing to show: fail before opening a window.
    let model = classifier::load_model()
        .inspect_err(|e| log::error!("Cannot load classifier: {e}"))
        .context("loading classifier")?;

    let config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(FakeCashApp::new(model, config)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
