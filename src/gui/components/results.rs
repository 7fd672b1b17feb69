// src/gui/components/results.rs
//
// Applies the controller's ResultsView: either one framed card per record or
// a compact striped table. Purely a view.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::state::ViewMode,
    gui::app::App,
    render::{CardView, NO_RESULTS},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.ctl.results();
    ui.heading(view.heading.as_str());
    ui.separator();

    if view.no_results {
        ui.label(RichText::new(NO_RESULTS).weak());
        return;
    }

    match app.state.gui.view_mode {
        ViewMode::Cards => {
            egui::ScrollArea::vertical()
                .id_salt("cards_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for card in &view.cards {
                        draw_card(ui, card);
                        ui.add_space(4.0);
                    }
                });
        }
        ViewMode::Table => draw_table(ui, &view.cards),
    }
}

fn draw_card(ui: &mut egui::Ui, card: &CardView) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(card.name.as_str()).strong().size(16.0));
        ui.label(RichText::new(card.location.as_str()).small().weak());

        ui.horizontal(|ui| {
            let courses = if card.courses.is_empty() { "Courses" } else { card.courses.as_str() };
            ui.label(RichText::new(courses).background_color(ui.visuals().faint_bg_color))
                .on_hover_text(card.courses.as_str());
            ui.label(RichText::new(card.state.as_str()).background_color(ui.visuals().faint_bg_color));
        });

        ui.horizontal(|ui| {
            ui.label(RichText::new("Fees:").strong());
            ui.label(card.fees.as_str());
            ui.label("·");
            ui.label(RichText::new("Cutoff:").strong());
            ui.label(card.cutoff.as_str());
        });

        ui.horizontal(|ui| {
            if !card.contact.is_empty() {
                ui.label(RichText::new(card.contact.as_str()).small().weak());
            }
            if let Some(url) = &card.website {
                if !card.contact.is_empty() {
                    ui.label(RichText::new("·").small().weak());
                }
                ui.hyperlink_to("Website", url.as_str());
            }
        });
    });
}

fn draw_table(ui: &mut egui::Ui, cards: &[CardView]) {
    const HEADERS: [&str; 6] = ["Name", "Location", "Courses", "Fees", "Cutoff", "Contact"];

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(200.0).resizable(true).clip(true))
        .column(Column::initial(160.0).resizable(true).clip(true))
        .column(Column::initial(180.0).resizable(true).clip(true))
        .column(Column::initial(110.0).resizable(true).clip(true))
        .column(Column::initial(60.0).resizable(true).clip(true))
        .column(Column::remainder().clip(true))
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, cards.len(), |mut row| {
                let Some(card) = cards.get(row.index()) else { return };
                let cells = [
                    card.name.as_str(),
                    card.location.as_str(),
                    card.courses.as_str(),
                    card.fees.as_str(),
                    card.cutoff.as_str(),
                ];
                for cell in cells {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(cell);
                    });
                }
                row.col(|ui| match &card.website {
                    Some(url) => {
                        let text = if card.contact.is_empty() { "Website" } else { card.contact.as_str() };
                        ui.hyperlink_to(text, url.as_str());
                    }
                    None => {
                        ui.label(card.contact.as_str());
                    }
                });
            });
        });
}
