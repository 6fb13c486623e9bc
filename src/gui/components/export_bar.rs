// src/gui/components/export_bar.rs

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::gui::{actions, app::App};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat {
    Csv,
    Tsv,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            if fmt != prev_fmt {
                export.format = match fmt {
                    UiFormat::Csv => ExportFormat::Csv,
                    UiFormat::Tsv => ExportFormat::Tsv,
                };
                logf!("UI: Export format → {:?}", export.format);
            }

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: include_headers → {}", export.include_headers);
            }
        });
    }

    // Keep the text box in sync while the user hasn't edited it
    if !app.out_path_dirty {
        app.out_path_text = app
            .state
            .options
            .export
            .out_path()
            .to_string_lossy()
            .into_owned();
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export / FETCH) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let accent = egui::Color32::from_rgb(30, 120, 200);
        if ui
            .add(
                egui::Button::new(
                    egui::RichText::new("FETCH")
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(accent),
            )
            .clicked()
        {
            actions::fetch(app);
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(format!("Status: {status}"));
    });
}
