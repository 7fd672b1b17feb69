// src/gui/components/toolbar.rs
//
// Greeting + dataset/profile actions: edit info, upload, download, reset,
// and the cards/table toggle.

use eframe::egui::{self, widgets::Spinner, RichText};

use crate::{config::state::ViewMode, controller::PageState, gui::app::App, store::Source};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading(app.ctl.profile().greeting.as_str());

        let source = match app.ctl.store().source() {
            Source::Sample => "sample dataset",
            Source::Stored => "uploaded dataset",
        };
        ui.label(
            RichText::new(format!("{} records · {}", app.ctl.store().colleges().len(), source))
                .small()
                .weak(),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Reset").clicked() {
                logd!("UI: Reset requested");
                app.confirm_reset = true;
            }
            let editing_allowed = app.ctl.state() == PageState::Ready;
            if ui.add_enabled(editing_allowed, egui::Button::new("Edit info")).clicked() {
                app.ctl.edit();
            }
        });
    });

    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Dataset (CSV/JSON):");
        ui.add(
            egui::TextEdit::singleline(&mut app.upload_path_text)
                .hint_text("path/to/colleges.csv")
                .desired_width(260.0),
        );
        let can_upload = !app.loading;
        if ui.add_enabled(can_upload, egui::Button::new("Upload")).clicked() {
            let ctx = ui.ctx().clone();
            app.start_upload(&ctx);
        }
        if app.loading {
            ui.add(Spinner::new());
        }

        ui.separator();

        ui.label("Export:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.export_path_text).desired_width(200.0),
        );
        if resp.changed() {
            app.export_path_dirty = true;
        }
        if ui.button("Download users.csv").clicked() {
            app.download();
        }

        ui.separator();

        let before = app.state.gui.view_mode;
        ui.selectable_value(&mut app.state.gui.view_mode, ViewMode::Cards, "Cards");
        ui.selectable_value(&mut app.state.gui.view_mode, ViewMode::Table, "Table");
        if app.state.gui.view_mode != before {
            logf!("UI: View mode → {:?}", app.state.gui.view_mode);
            app.persist_settings();
        }
    });
}
