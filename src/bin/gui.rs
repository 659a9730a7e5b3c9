// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use cftv_dash::config::{consts::DEFAULT_CONFIG_FILE, options::AppOptions, state::AppState};
use cftv_dash::gui;
use cftv_dash::log::{self, LogTarget};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(LogTarget::default(), cfg!(debug_assertions));

    // Optional first arg: config file
    let config = std::env::args().nth(1).map(PathBuf::from);
    let options = match AppOptions::load_or_default(config.as_deref()) {
        Ok(o) => o,
        Err(e) => {
            cftv_dash::loge!("Config: {} (using defaults)", e);
            eprintln!("{e}; using defaults (expected {DEFAULT_CONFIG_FILE})");
            AppOptions::default()
        }
    };

    let mut viewport = ViewportBuilder::default()
        .with_title(options.gui.title.clone())
        .with_inner_size([options.gui.window_w, options.gui.window_h]);
    if let Some(icon) = options.gui.logo.as_deref().and_then(gui::logo::icon) {
        // eframe 0.32: icon set via viewport builder
        viewport = viewport.with_icon(icon);
    }

    let native = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(native, AppState::new(options)) {
        cftv_dash::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
