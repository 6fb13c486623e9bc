// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::config::state::AppState;
use crate::filter::{self, FilterQuery};
use crate::loader::{self, SiteData};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Tourdex",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded session data; replaced wholesale by Fetch
    pub site: SiteData,

    // current filtered view (indices into site.activities)
    pub row_ix: Vec<usize>,

    // detail window target
    pub detail_id: Option<u32>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (load chain writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        // offline-first: last cached sheets, defaults where nothing cached
        let site = loader::load_cached();

        let status = if site.activities.is_empty() {
            s!("No local data — Fetch to load")
        } else {
            format!("Loaded local data — {} activities", site.activities.len())
        };
        logf!(
            "Init: activities={} filters={}",
            site.activities.len(),
            site.filters.len()
        );

        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            site,
            row_ix: Vec::new(),
            detail_id: None,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(status)),
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Current search + selections as one query.
    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            search: self.state.gui.search_text.clone(),
            selected: self
                .state
                .gui
                .selected
                .iter()
                .map(|(g, v)| (g.clone(), v.clone()))
                .collect(),
        }
    }

    /// Full synchronous recompute; runs on every search keystroke and every
    /// selector change.
    pub fn rebuild_view(&mut self) {
        self.row_ix = filter::filter_indices(&self.site.activities, &self.query());
    }

    pub fn set_result_message(&self) {
        self.status(format!(
            "{} of {} activities",
            self.row_ix.len(),
            self.site.activities.len()
        ));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                crate::gui::components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::activity_table::draw(ui, self);
        });

        crate::gui::components::detail_view::draw(ctx, self);
    }
}
