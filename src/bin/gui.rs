// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use collegefinder::{config::{consts::CONFIG_FILE, file as config_file}, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    let state = config_file::load(Path::new(CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
