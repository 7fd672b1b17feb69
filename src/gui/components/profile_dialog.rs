// src/gui/components/profile_dialog.rs
//
// First-visit / edit dialog. Open while the controller is in
// AwaitingProfile or EditingProfile; errors render inline under the fields.

use eframe::egui::{self, Align2, RichText};

use crate::{
    catalog::{find_state, COURSES, STATES},
    controller::PageState,
    gui::{app::App, notifier::GuiNotifier},
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let state = app.ctl.state();
    if !state.shows_profile_form() {
        return;
    }

    let title = match state {
        PageState::EditingProfile => "Edit your info",
        _ => "Welcome! Tell us about you",
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let mut submit = false;
            let mut dismiss = false;
            {
                let form = &mut app.ctl.form;
                egui::Grid::new("profile_form").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label("State");
                    let shown = find_state(&form.state).unwrap_or(STATES[0]);
                    egui::ComboBox::from_id_salt("profile_state")
                        .selected_text(shown)
                        .show_ui(ui, |ui| {
                            for st in STATES {
                                ui.selectable_value(&mut form.state, s!(*st), *st);
                            }
                        });
                    ui.end_row();

                    ui.label("Mobile");
                    ui.text_edit_singleline(&mut form.mobile);
                    ui.end_row();

                    ui.label("Course");
                    ui.add(egui::TextEdit::singleline(&mut form.course).hint_text(COURSES.join(", ")));
                    ui.end_row();
                });
            }

            for err in &app.ctl.form_errors {
                ui.label(RichText::new(err.message.as_str()).color(ui.visuals().error_fg_color));
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    submit = true;
                }
                let label = if state == PageState::EditingProfile { "Cancel" } else { "Skip" };
                if ui.button(label).clicked() {
                    dismiss = true;
                }
            });

            if submit {
                let mut n = GuiNotifier::new(&mut app.alerts);
                if app.ctl.submit_profile(&mut n) {
                    app.status = s!("Saved your info");
                }
            } else if dismiss {
                match state {
                    PageState::EditingProfile => app.ctl.cancel_edit(),
                    _ => app.ctl.skip(),
                }
            }
        });
}
