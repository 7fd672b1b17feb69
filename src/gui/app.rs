// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::{consts::CONFIG_FILE, file as config_file, state::AppState},
    controller::{Controller, Notifier},
    store::FileKv,
    upload::{read_upload, UploadedFile},
};

use super::{components, notifier::GuiNotifier};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "College Finder",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

type UploadSlot = Arc<Mutex<Option<crate::Result<UploadedFile>>>>;

pub struct App {
    // settings (persisted to collegefinder.conf on change)
    pub state: AppState,

    // single owner of store + view state (UI thread only)
    pub ctl: Controller<FileKv>,

    // modal queue + pending reset confirmation
    pub alerts: Vec<String>,
    pub confirm_reset: bool,

    // path text fields
    pub upload_path_text: String,
    pub export_path_text: String,
    pub export_path_dirty: bool,

    // background file read (one at a time)
    pub pending_upload: UploadSlot,
    pub loading: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        crate::log::init(&state.options.store_dir);

        let kv = FileKv::new(state.options.store_dir.clone());
        let mut ctl = Controller::new(kv, state.options.limits);
        ctl.init();

        let export_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let upload_path_text = state.gui.last_upload_path.clone();

        logf!("Init: GUI up, store={}", state.options.store_dir.display());

        Self {
            state,
            ctl,
            alerts: Vec::new(),
            confirm_reset: false,
            upload_path_text,
            export_path_text,
            export_path_dirty: false,
            pending_upload: Arc::new(Mutex::new(None)),
            loading: false,
            status: s!("Ready"),
        }
    }

    /// Write the settings file; failures only reach the log.
    pub fn persist_settings(&self) {
        if let Err(e) = config_file::save(&PathBuf::from(CONFIG_FILE), &self.state) {
            loge!("Config: save failed: {}", e);
        }
    }

    /// Kick off a background read of the file named in the upload field.
    pub fn start_upload(&mut self, ctx: &egui::Context) {
        if self.loading { return; }
        let text = self.upload_path_text.trim();
        if text.is_empty() {
            GuiNotifier::new(&mut self.alerts).notify("Enter the path of a CSV or JSON file first.");
            return;
        }
        let path = PathBuf::from(text);
        self.state.gui.last_upload_path = s!(text);
        self.persist_settings();

        self.loading = true;
        self.status = format!("Reading {}…", path.display());
        logf!("Upload: reading {}", path.display());

        let slot = self.pending_upload.clone();
        let ctx2 = ctx.clone();
        thread::spawn(move || {
            let res = read_upload(&path);
            if let Ok(mut guard) = slot.lock() {
                *guard = Some(res);
            }
            ctx2.request_repaint();
        });
    }

    /// Hand a finished read to the controller (completion callback).
    fn poll_upload(&mut self) {
        if !self.loading { return; }
        let done = match self.pending_upload.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        let Some(res) = done else { return };
        self.loading = false;

        let mut n = GuiNotifier::new(&mut self.alerts);
        match res {
            Ok(file) => {
                let ok = self.ctl.apply_upload(&file.name, &file.text, &mut n);
                self.status = if ok { format!("Loaded {}", file.name) } else { s!("Upload rejected") };
            }
            Err(e) => {
                loge!("Upload: read failed: {}", e);
                n.notify(&format!("Could not read file: {e}"));
                self.status = s!("Upload failed");
            }
        }
    }

    /// Apply the export text field (if edited) and write users.csv.
    pub fn download(&mut self) {
        if self.export_path_dirty {
            self.state.options.export.set_path(&self.export_path_text);
            self.export_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
            self.export_path_dirty = false;
            self.persist_settings();
        }
        let path = self.state.options.export.out_path();
        self.status = match self.ctl.download(&path) {
            Ok(p) => format!("Saved {}", p.display()),
            Err(e) => {
                loge!("Download: {}", e);
                format!("Download error: {e}")
            }
        };
    }

    pub fn reset_confirmed(&mut self) {
        self.confirm_reset = false;
        let mut n = GuiNotifier::confirmed(&mut self.alerts);
        if self.ctl.reset(&mut n) {
            self.status = s!("Cleared");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_upload();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            components::toolbar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).small().weak());
        });

        egui::SidePanel::left("search")
            .resizable(false)
            .show(ctx, |ui| {
                components::search_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::results::draw(ui, self);
        });

        components::profile_dialog::draw(ctx, self);
        components::dialogs::draw(ctx, self);
    }
}
