// src/gui/actions/fetch.rs
use crate::gui::{app::App, progress::GuiProgress};
use crate::loader;

/// Run the full load chain and swap the session data on success. The chain
/// is synchronous; the status line tracks its stages.
pub fn fetch(app: &mut App) {
    logf!("Fetch: Begin");

    let mut prog = GuiProgress::new(app.status.clone());
    match loader::load_site(&app.state.options, Some(&mut prog)) {
        Ok(site) => {
            logf!(
                "Fetch: OK activities={} filters={}",
                site.activities.len(),
                site.filters.len()
            );
            app.site = site;
            app.detail_id = None;
            app.rebuild_view();
            app.status(format!("Ready — {} activities", app.site.activities.len()));
        }
        Err(e) => {
            loge!("Fetch: Error: {}", e);
            let msg = s!(app.site.settings.text("error_text"));
            app.status(format!("{msg} ({e})"));
        }
    }
}
