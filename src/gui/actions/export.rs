// src/gui/actions/export.rs
use crate::file;
use crate::gui::app::App;

use super::current_view;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    if app.row_ix.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let result = {
        let view = current_view(app);
        logf!("Export: Begin rows={}", view.len());
        file::write_export_single(&app.state.options.export, &view)
    };

    match result {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
