// src/gui/components/filter_panel.rs
//
// Left panel: search box plus one dropdown per filter group. Any change
// re-runs the full filter pass immediately — filtering is a pure synchronous
// recompute over the in-memory set, so there is nothing to debounce.

use eframe::egui;

use crate::data::FilterDef;
use crate::filter::ALL_SENTINEL;
use crate::gui::app::App;
use crate::sheets::filters::group_order;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let heading = s!(app.site.settings.text("filter_heading"));
    ui.heading(heading);

    let hint = s!(app.site.settings.text("search_placeholder"));
    let mut changed = ui
        .add(
            egui::TextEdit::singleline(&mut app.state.gui.search_text)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        )
        .changed();

    ui.separator();

    let all_label = s!(app.site.settings.text("filter_all"));
    let defs: Vec<FilterDef> = app.site.filters.clone();

    egui::ScrollArea::vertical()
        .id_salt("filter_panel_scroll")
        .show(ui, |ui| {
            for group in group_order(&defs) {
                let group_defs: Vec<&FilterDef> =
                    defs.iter().filter(|d| d.group == group).collect();

                ui.label(egui::RichText::new(display_name(&group)).strong());

                let mut cur = app
                    .state
                    .gui
                    .selected
                    .get(&group)
                    .cloned()
                    .unwrap_or_else(|| s!(ALL_SENTINEL));

                // Show the sheet's label for the selected category
                let selected_text = if cur == ALL_SENTINEL {
                    all_label.clone()
                } else {
                    group_defs
                        .iter()
                        .find(|d| d.category == cur)
                        .map(|d| d.label.clone())
                        .unwrap_or_else(|| cur.clone())
                };

                egui::ComboBox::from_id_salt(("filter_group", group.clone()))
                    .selected_text(selected_text)
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        changed |= ui
                            .selectable_value(&mut cur, s!(ALL_SENTINEL), all_label.clone())
                            .changed();
                        for d in &group_defs {
                            changed |= ui
                                .selectable_value(&mut cur, d.category.clone(), d.label.clone())
                                .changed();
                        }
                    });

                app.state.gui.selected.insert(group, cur);
                ui.add_space(6.0);
            }

            ui.separator();
            if ui.button("Reset").clicked() {
                app.state.gui.search_text.clear();
                app.state.gui.selected.clear();
                changed = true;
            }
        });

    if changed {
        app.rebuild_view();
        app.set_result_message();
        logd!(
            "UI: filter change — search={:?}, {} selections, {} rows",
            app.state.gui.search_text,
            app.state.gui.selected.len(),
            app.row_ix.len()
        );
    }
}

/// Human form of a group name ("tour_type" → "Tour type").
fn display_name(group: &str) -> String {
    let mut out = group.replace('_', " ");
    if let Some(first) = out.get(..1) {
        let upper = first.to_uppercase();
        out.replace_range(..1, &upper);
    }
    out
}
