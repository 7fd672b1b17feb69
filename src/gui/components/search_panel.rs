// src/gui/components/search_panel.rs
//
// Left panel: saved profile summary and the state/course filters.

use eframe::egui::{self, RichText};

use crate::{
    catalog::{COURSES, STATES},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Your info");
    match &app.ctl.profile().saved {
        None => {
            ui.label(RichText::new(crate::render::NO_PROFILE).small().weak());
        }
        Some(info) => {
            ui.label(RichText::new(info.name.as_str()).strong());
            ui.label(RichText::new(info.detail.as_str()).small().weak());
            ui.label(RichText::new(format!("📱 {}", info.mobile)).small().weak());
        }
    }

    ui.separator();
    ui.heading("Find colleges");

    let search = &mut app.ctl.search;

    ui.label("State");
    let shown = if search.state.is_empty() { "All states" } else { search.state.as_str() };
    egui::ComboBox::from_id_salt("search_state")
        .selected_text(shown.to_owned())
        .width(200.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut search.state, s!(), "All states");
            for st in STATES {
                ui.selectable_value(&mut search.state, s!(*st), *st);
            }
        });

    ui.label("Course");
    ui.add(
        egui::TextEdit::singleline(&mut search.course)
            .hint_text("e.g. B.Com")
            .desired_width(200.0),
    );
    egui::ComboBox::from_id_salt("course_hints")
        .selected_text("Suggestions")
        .width(200.0)
        .show_ui(ui, |ui| {
            for c in COURSES {
                if ui.selectable_label(search.course == *c, *c).clicked() {
                    search.course = s!(*c);
                }
            }
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Search").clicked() {
            let hits = app.ctl.search();
            app.status = format!("Search: {} match(es)", hits);
        }
        if ui.button("Show all").clicked() {
            app.ctl.show_all();
            app.status = s!("Showing all colleges");
        }
    });
}
