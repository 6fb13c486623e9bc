// src/config/state.rs
use std::collections::HashMap;

use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Current free-text search term
    pub search_text: String,

    /// Selected category per filter group ("all" = unrestricted; an absent
    /// group counts as "all" too)
    pub selected: HashMap<String, String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            search_text: s!(),
            selected: HashMap::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
