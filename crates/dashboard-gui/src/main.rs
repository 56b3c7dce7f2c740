//! Hacker Dashboard GUI — eframe/egui desktop application.

mod app;
mod ui;

use std::path::PathBuf;

use app::DashboardApp;
use dashboard_core::config::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, DashboardConfig, load_config};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Hacker Dashboard v{}", env!("CARGO_PKG_VERSION"));
    let config = resolve_config();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Hacker Girl Dashboard")
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hacker Dashboard",
        options,
        Box::new(move |cc| {
            ui::theme::apply_theme(&cc.egui_ctx);
            ui::theme::install_font(&cc.egui_ctx, config.font_path.as_deref());
            Ok(Box::new(DashboardApp::new(&config)))
        }),
    )
}

/// The config file is optional; a broken one is reported and replaced by defaults.
fn resolve_config() -> DashboardConfig {
    let path = std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return DashboardConfig::default();
    }

    match load_config(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::error!("{e:#}; using defaults");
            DashboardConfig::default()
        }
    }
}
