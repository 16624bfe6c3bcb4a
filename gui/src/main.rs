// GUI main entry point using Dioxus
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use engine::services::{DigitService, MarketService};

mod app;
mod components;
mod config;
mod services;
mod state;
mod views;

use app::App;
use config::AppConfig;
use services::EngineHandle;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Home Analyst (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded embedded configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            // The default config ships inside the binary; if it does not
            // parse there is nothing sensible to start with.
            panic!("Failed to load embedded default configuration: {}", e);
        }
    };

    let settings = app_config.engine_settings();

    let market = match MarketService::new(&settings) {
        Ok(service) => service,
        Err(e) => panic!("Failed to construct market service: {}", e),
    };

    // A missing or unreadable model artifact degrades the Digits view;
    // the market views do not depend on it.
    let digits = match DigitService::load(&settings.model_path) {
        Ok(service) => Some(service),
        Err(e) => {
            tracing::error!(path = %settings.model_path, error = %e, "Digit model unavailable");
            None
        }
    };

    let engine_handle = EngineHandle::new(market, digits);

    let window = WindowBuilder::new()
        .with_title(app_config.window.title.clone())
        .with_inner_size(LogicalSize::new(
            app_config.window.width,
            app_config.window.height,
        ));

    LaunchBuilder::desktop()
        .with_cfg(DesktopConfig::new().with_window(window))
        .with_context(engine_handle)
        .with_context(app_config)
        .launch(App);
}
