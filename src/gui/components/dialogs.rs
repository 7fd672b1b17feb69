// src/gui/components/dialogs.rs
//
// Modal alert queue and the reset confirmation.

use eframe::egui::{self, Align2};

use crate::{controller::RESET_PROMPT, gui::app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if app.confirm_reset {
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RESET_PROMPT);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        app.reset_confirmed();
                    }
                    if ui.button("No").clicked() {
                        logd!("UI: Reset declined");
                        app.confirm_reset = false;
                    }
                });
            });
    }

    // One alert at a time, oldest first.
    if let Some(msg) = app.alerts.first().cloned() {
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_TOP, [0.0, 40.0])
            .show(ctx, |ui| {
                ui.label(msg);
                if ui.button("OK").clicked() {
                    app.alerts.remove(0);
                }
            });
    }
}
