//! Cookbook - Recipes for common immediate-mode UI tasks
//!
//! A desktop application that walks through small, self-contained examples:
//! styled dataframes, side-by-side charts, row selection, range sliders,
//! label-mapped selectboxes, a rasterized line plot, a word cloud and emoji
//! shortcodes.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(dead_code)] // Parts of the core API are only exercised by tests

mod core;
mod persistence;
mod ui;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::AppState;
use crate::persistence::Database;
use crate::ui::CookbookApp;

/// Application name constant
pub const APP_NAME: &str = "Cookbook";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window size used until the user resizes it
const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 780.0];

fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    // Initialize database
    let db = Database::new()?;
    db.initialize()?;
    info!("Database initialized");

    // Create application state
    let app_state = AppState::new(db)?;
    info!(
        "Application state initialized, opening recipe {}",
        app_state.recipe()
    );

    let inner_size = app_state
        .settings
        .window_size
        .map(|(w, h)| [w as f32, h as f32])
        .unwrap_or(DEFAULT_WINDOW_SIZE);

    // Run the GUI application
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    info!("Starting GUI...");
    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        native_options,
        Box::new(|cc| Ok(Box::new(CookbookApp::new(cc, app_state)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cookbook=info,eframe=warn,egui=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
