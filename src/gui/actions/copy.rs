// src/gui/actions/copy.rs
use eframe::egui;

use crate::file;
use crate::gui::app::App;

use super::current_view;

pub fn copy(app: &mut App, ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    }

    let txt = {
        let view = current_view(app);
        logf!("Copy: rows={}", view.len());
        file::to_export_string(&app.state.options.export, &view)
    };

    ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
