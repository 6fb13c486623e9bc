// src/store.rs
//
// Local cache of the last successfully fetched sheet text. Feeds the
// fallback chain when the remote source is unreachable and gives the GUI an
// offline-first view at startup.

use std::{fs, io, path::PathBuf};

use crate::config::consts::STORE_DIR;
use crate::config::options::SheetKind;

pub fn sheet_path(kind: SheetKind) -> PathBuf {
    PathBuf::from(STORE_DIR).join(kind.file_name())
}

pub fn save_sheet(kind: SheetKind, text: &str) -> io::Result<PathBuf> {
    let p = sheet_path(kind);
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&p, text)?;
    Ok(p)
}

pub fn load_sheet(kind: SheetKind) -> io::Result<String> {
    fs::read_to_string(sheet_path(kind))
}
