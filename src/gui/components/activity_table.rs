// src/gui/components/activity_table.rs
//
// Draws the live activity table. Purely a view over the current filtered
// indices; a Details click hands the id to the detail window.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const HEADERS: [&str; 6] = ["Title", "Date", "Location", "Price", "Tags", ""];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.row_ix.is_empty() {
        let msg = if app.site.activities.is_empty() {
            s!(app.site.settings.text("loading_text"))
        } else {
            s!(app.site.settings.text("no_results"))
        };
        ui.add_space(12.0);
        ui.vertical_centered(|ui| ui.label(RichText::new(msg).weak()));
        return;
    }

    let mut clicked: Option<u32> = None;

    {
        let set = &app.site.activities;
        let row_ix = &app.row_ix;

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::initial(220.0).resizable(true).clip(true))
            .column(Column::initial(110.0).resizable(true).clip(true))
            .column(Column::initial(150.0).resizable(true).clip(true))
            .column(Column::initial(90.0).resizable(true).clip(true))
            .column(Column::remainder().clip(true))
            .column(Column::exact(64.0))
            .header(24.0, |mut header| {
                for h in HEADERS {
                    header.col(|ui| {
                        ui.label(RichText::new(h).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, row_ix.len(), |mut row| {
                    let ix = row_ix.get(row.index()).copied();
                    let Some(a) = ix.and_then(|ix| set.activities().get(ix)) else {
                        return;
                    };

                    row.col(|ui| {
                        ui.label(a.title.as_str());
                    });
                    row.col(|ui| {
                        ui.label(a.date.as_str());
                    });
                    row.col(|ui| {
                        ui.label(a.location.as_str());
                    });
                    row.col(|ui| {
                        ui.label(a.price.as_str());
                    });
                    row.col(|ui| {
                        ui.label(a.tags.join(", "));
                    });
                    row.col(|ui| {
                        if ui.small_button("Details").clicked() {
                            clicked = Some(a.id);
                        }
                    });
                });
            });
    }

    if let Some(id) = clicked {
        logd!("UI: open detail id={}", id);
        app.detail_id = Some(id);
    }
}
