// src/config/file.rs
//
// `collegefinder.conf`: plain key=value lines, '#' comments.
// Missing file or unreadable text → defaults. Unknown keys are ignored.

use std::{fs, io, path::{Path, PathBuf}};

use super::state::{AppState, ViewMode};

pub fn load(path: &Path) -> AppState {
    let mut cfg = AppState::default();
    if !path.exists() {
        return cfg;
    }
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            loge!("Config: read {} failed: {}", path.display(), e);
            return cfg;
        }
    };
    apply(&mut cfg, &text);
    cfg
}

/// Apply `key=value` lines on top of `cfg`.
pub fn apply(cfg: &mut AppState, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "store_dir" if !val.is_empty() => cfg.options.store_dir = PathBuf::from(val),
            "export_path" => cfg.options.export.set_path(val),
            "initial_cards" => set_usize(&mut cfg.options.limits.initial, val),
            "show_all_cards" => set_usize(&mut cfg.options.limits.show_all, val),
            "upload_cards" => set_usize(&mut cfg.options.limits.upload, val),
            "window_w" => set_u32(&mut cfg.gui.window_w, val),
            "window_h" => set_u32(&mut cfg.gui.window_h, val),
            "view" => {
                cfg.gui.view_mode = if val.eq_ignore_ascii_case("table") {
                    ViewMode::Table
                } else {
                    ViewMode::Cards
                };
            }
            "last_upload" => cfg.gui.last_upload_path = s!(val),
            _ => logd!("Config: ignoring key {:?}", key),
        }
    }
}

fn set_usize(slot: &mut usize, val: &str) {
    if let Ok(v) = val.parse() { *slot = v; }
}

fn set_u32(slot: &mut u32, val: &str) {
    if let Ok(v) = val.parse() { *slot = v; }
}

pub fn to_string(cfg: &AppState) -> String {
    let o = &cfg.options;
    let mut s = String::new();
    s.push_str(&format!("store_dir={}\n", o.store_dir.display()));
    s.push_str(&format!("export_path={}\n", o.export.out_path().display()));
    s.push_str(&format!("initial_cards={}\n", o.limits.initial));
    s.push_str(&format!("show_all_cards={}\n", o.limits.show_all));
    s.push_str(&format!("upload_cards={}\n", o.limits.upload));
    s.push_str(&format!("window_w={}\n", cfg.gui.window_w));
    s.push_str(&format!("window_h={}\n", cfg.gui.window_h));
    let view = match cfg.gui.view_mode { ViewMode::Cards => "cards", ViewMode::Table => "table" };
    s.push_str(&format!("view={}\n", view));
    if !cfg.gui.last_upload_path.is_empty() {
        s.push_str(&format!("last_upload={}\n", cfg.gui.last_upload_path));
    }
    s
}

pub fn save(path: &Path, cfg: &AppState) -> io::Result<()> {
    fs::write(path, to_string(cfg))
}
