// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Progress sink that writes into the shared status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    total: usize,
    done: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, total: 0, done: 0 }
    }

    fn set(&self, msg: String) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg;
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.set(s!("Loading..."));
    }

    fn log(&mut self, msg: &str) {
        self.set(s!(msg));
    }

    fn stage_done(&mut self, stage: &str) {
        self.done += 1;
        self.set(format!("Loaded {} ({}/{})", stage, self.done, self.total));
    }
}
