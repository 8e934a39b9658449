// src/main.rs
use anyhow::Result;
use dotenv::dotenv;
use eframe::egui;
use std::sync::Arc;

mod analysis;
mod app;
mod config;
mod file;
mod input;
mod state;
mod ui;

use crate::analysis::GeminiClient;
use crate::app::EnergyApp;
use crate::config::Settings;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings = Settings::load()?;
    // Without credentials there is nothing useful to show
    let api_key = settings.api_key()?.to_string();

    let runtime = tokio::runtime::Runtime::new()?;
    let advisor = Arc::new(GeminiClient::new(
        api_key,
        settings.model.clone(),
        settings.api_base.clone(),
    ));
    log::info!("Starting E-Power with model {}", advisor.model());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("E-Power"),
        ..Default::default()
    };

    let location = settings.default_location.clone();
    eframe::run_native(
        "E-Power",
        options,
        Box::new(move |_cc| Box::new(EnergyApp::new(location, advisor, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
