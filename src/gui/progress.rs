// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

/// Writes load status into the shared string the UI thread renders.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    max_pages: u32,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, max_pages: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap() = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, max_pages: u32) {
        self.max_pages = max_pages;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn page_done(&mut self, page: u32, total_rows: usize) {
        self.set_status(format!(
            "Retrieved {total_rows} demos so far... (page {page}/{})",
            self.max_pages
        ));
    }
    fn finish(&mut self) {}
}
