// tests/config_file.rs
//
// Settings file parsing and export path handling.
//
use std::path::{Path, PathBuf};

use collegefinder::config::file::{apply, load, save};
use collegefinder::config::options::{CardLimits, ExportOptions};
use collegefinder::config::state::{AppState, ViewMode};

#[test]
fn missing_file_gives_defaults() {
    let cfg = load(Path::new("definitely/not/here.conf"));
    assert_eq!(cfg.options.limits, CardLimits::default());
    assert_eq!(cfg.options.store_dir, PathBuf::from(".store"));
    assert_eq!(cfg.gui.view_mode, ViewMode::Cards);
}

#[test]
fn keys_override_and_junk_is_ignored() {
    let mut cfg = AppState::default();
    apply(
        &mut cfg,
        "# comment\nstore_dir = cache\ninitial_cards=10\nshow_all_cards=oops\nview=Table\nbogus=1\nno equals sign\n",
    );
    assert_eq!(cfg.options.store_dir, PathBuf::from("cache"));
    assert_eq!(cfg.options.limits.initial, 10);
    assert_eq!(cfg.options.limits.show_all, CardLimits::default().show_all);
    assert_eq!(cfg.gui.view_mode, ViewMode::Table);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collegefinder.conf");

    let mut cfg = AppState::default();
    cfg.options.limits.upload = 25;
    cfg.gui.window_w = 800;
    cfg.gui.last_upload_path = "data/colleges.json".into();
    cfg.options.export.set_path("exports/me.csv");
    save(&path, &cfg).unwrap();

    let back = load(&path);
    assert_eq!(back.options, cfg.options);
    assert_eq!(back.gui.window_w, 800);
    assert_eq!(back.gui.last_upload_path, "data/colleges.json");
}

#[test]
fn export_path_text_splits_dir_and_name() {
    let mut export = ExportOptions::default();
    assert!(export.is_default());
    assert!(export.out_path().ends_with("users.csv"));

    export.set_path("exports/profile.csv");
    assert_eq!(export.out_path(), Path::new("exports").join("profile.csv"));

    export.set_path("elsewhere/");
    assert_eq!(export.out_path(), PathBuf::from("elsewhere/").join("profile.csv"));

    export.set_path("   ");
    assert_eq!(export.out_path(), PathBuf::from("elsewhere/").join("profile.csv"));
}
