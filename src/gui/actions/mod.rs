// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,fetch}.

mod copy;   // src/gui/actions/copy.rs
mod export; // src/gui/actions/export.rs
mod fetch;  // src/gui/actions/fetch.rs

pub use copy::copy;
pub use export::export;
pub use fetch::fetch;

use crate::data::FilteredView;
use crate::gui::app::App;

/// The current on-screen view as an exportable borrow.
#[inline]
pub(super) fn current_view(app: &App) -> FilteredView<'_> {
    FilteredView::from_indices(&app.site.activities, app.row_ix.clone())
}
