// src/progress.rs
/// Lightweight progress reporting for the chart load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the page cap for this load.
    fn begin(&mut self, _max_pages: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been fetched and folded in.
    fn page_done(&mut self, _page: u32, _total_rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
