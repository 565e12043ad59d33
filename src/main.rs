// src/main.rs
mod gui;
use anyhow::{anyhow, Context, Result};
use eframe::egui;
use stripchart::ChartConfig;
/// Chart settings from the JSON file named on the command line, if any.
fn load_config() -> Result<ChartConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(ChartConfig {
            autoscale: true,
            ..ChartConfig::default()
        });
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read chart config {path}"))?;
    ChartConfig::from_json_str(&json).with_context(|| format!("invalid chart config {path}"))
}
fn main() -> Result<()> {
    env_logger::init();
    let config = load_config()?;
    log::info!("starting demo with {config:?}");
    let app = gui::StripChartApp::new(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 400.0])
            .with_min_inner_size([200.0, 120.0])
            .with_title("stripchart demo"),
        ..Default::default()
    };
    eframe::run_native("stripchart", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|err| anyhow!("demo window failed: {err}"))
}
