// src/config/consts.rs

// Net config. The published sheet trio lives behind one host; paths can be
// overridden by `config` rows in the settings sheet.
pub const SHEET_HOST: &str = "sheets.tourdex.net";
pub const SETTINGS_PATH: &str = "/pub/settings.csv";
pub const FILTERS_PATH: &str = "/pub/filters.csv";
pub const ACTIVITIES_PATH: &str = "/pub/activities.csv";

// Local cache
pub const STORE_DIR: &str = ".store";

// Asset layout expected by the render layer
pub const ASSET_ROOT: &str = "assets/";
pub const ASSET_IMAGE_DIR: &str = "assets/images/";
pub const DEFAULT_IMAGE: &str = "assets/images/default.png";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "activities";
