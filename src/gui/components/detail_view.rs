// src/gui/components/detail_view.rs
//
// Centered detail window for one activity — the desktop counterpart of the
// site's modal overlay. Closing clears the target id.

use eframe::egui::{self, Align2, RichText};

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(id) = app.detail_id else {
        return;
    };
    let Some(a) = app.site.activities.get(id).cloned() else {
        app.detail_id = None;
        return;
    };

    let date_label = s!(app.site.settings.text("detail_date_label"));
    let location_label = s!(app.site.settings.text("detail_location_label"));
    let price_label = s!(app.site.settings.text("detail_price_label"));
    let organizer_label = s!(app.site.settings.text("detail_organizer_label"));

    let mut open = true;
    egui::Window::new(a.title.as_str())
        .id(egui::Id::new("activity_detail"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(420.0)
        .open(&mut open)
        .show(ctx, |ui| {
            egui::Grid::new("detail_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new(date_label).strong());
                    ui.label(a.date.as_str());
                    ui.end_row();

                    ui.label(RichText::new(location_label).strong());
                    ui.label(a.location.as_str());
                    ui.end_row();

                    ui.label(RichText::new(price_label).strong());
                    ui.label(a.price.as_str());
                    ui.end_row();

                    if !a.organizer.is_empty() {
                        ui.label(RichText::new(organizer_label).strong());
                        ui.label(a.organizer.as_str());
                        ui.end_row();
                    }
                });

            if !a.tags.is_empty() {
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in &a.tags {
                        ui.label(RichText::new(format!("#{tag}")).weak());
                    }
                });
            }

            ui.separator();

            // Fall back to the card text when no long form exists
            let body = if a.full_description.is_empty() {
                a.description.as_str()
            } else {
                a.full_description.as_str()
            };
            egui::ScrollArea::vertical()
                .id_salt("detail_body_scroll")
                .max_height(240.0)
                .show(ui, |ui| {
                    ui.label(body);
                });

            if !a.link.is_empty() {
                ui.add_space(6.0);
                ui.hyperlink(a.link.as_str());
            }
        });

    if !open {
        app.detail_id = None;
    }
}
