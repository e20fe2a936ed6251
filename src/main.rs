mod config;
mod param_editor;
mod param_model;
mod states;
mod ui;

use anyhow::{anyhow, Result};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = config::FormConfig::resolve(std::env::args_os().nth(1).map(Into::into))?;
    tracing::info!(params = config.params.len(), "starting param editor");

    let title = config.window_title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size(config.window_size),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Box::new(ui::create_app(config))),
    )
    .map_err(|err| anyhow!("failed to start window: {err}"))
}
