// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{chart::ChartRow, config::state::AppState, scrape};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "CSDb Toplist",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Which column the table is sorted by. The screenshot column has no
/// sort mode; the release date column sorts by its numeric key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Place,
    Name,
    ReleaseDate,
    Event,
    Achievement,
    Rating,
    Votes,
    Id,
}

type LoadResult = Result<Vec<ChartRow>, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // Final chart rows; handed over once per load, read-only afterwards.
    pub rows: Vec<ChartRow>,

    // Display order after search filter + sort (indices into rows).
    pub view_ix: Vec<usize>,

    pub search_text: String,
    pub sort_by: SortColumn,
    pub sort_asc: bool,

    // status/progress (the load thread writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub load_failed: bool,
    pending: Option<mpsc::Receiver<LoadResult>>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            rows: Vec::new(),
            view_ix: Vec::new(),
            search_text: s!(),
            sort_by: SortColumn::Place,
            sort_asc: true,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            load_failed: false,
            pending: None,
            out_path_text,
            out_path_dirty: false,
        };

        // Load on startup; mirrors the original page-load trigger.
        app.start_load();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap().clone()
    }

    /// Spawn the chart load on one worker thread. The worker owns the
    /// accumulating list and sends the finished Vec exactly once; pages
    /// are still fetched strictly one at a time inside it.
    pub fn start_load(&mut self) {
        if self.running {
            return;
        }
        logf!("Load: begin (max_pages={})", self.state.options.scrape.max_pages);
        self.running = true;
        self.load_failed = false;

        let max_pages = self.state.options.scrape.max_pages;
        let status = self.status.clone();
        let (tx, rx) = mpsc::channel::<LoadResult>();
        self.pending = Some(rx);

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            let result = scrape::collect_chart(max_pages, Some(&mut prog))
                .map_err(|e| e.to_string());
            let _ = tx.send(result);
        });
    }

    /// Poll the worker; fold in the finished rows when they arrive.
    fn poll_load(&mut self) {
        let Some(rx) = self.pending.as_ref() else { return };
        match rx.try_recv() {
            Ok(Ok(rows)) => {
                logf!("Load: OK, rows={}", rows.len());
                self.rows = rows;
                self.pending = None;
                self.running = false;
                self.rebuild_view();
                self.status(format!("{} demos loaded", self.rows.len()));
            }
            Ok(Err(e)) => {
                loge!("Load: failed: {e}");
                self.rows.clear();
                self.view_ix.clear();
                self.pending = None;
                self.running = false;
                self.load_failed = true;
                self.status("Error loading data from CSDB");
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Load: worker ended without a result");
                self.pending = None;
                self.running = false;
                self.load_failed = true;
                self.status("Error loading data from CSDB");
            }
        }
    }

    /// Recompute view_ix from the search text + sort settings.
    pub fn rebuild_view(&mut self) {
        let needle = self.search_text.trim().to_lowercase();
        let mut ix: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| needle.is_empty() || row_matches(r, &needle))
            .map(|(i, _)| i)
            .collect();

        let by = self.sort_by;
        let rows = &self.rows;
        ix.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], by));
        if !self.sort_asc {
            ix.reverse();
        }
        self.view_ix = ix;
    }

    pub fn set_sort(&mut self, col: SortColumn) {
        if self.sort_by == col {
            self.sort_asc = !self.sort_asc;
        } else {
            self.sort_by = col;
            self.sort_asc = true;
        }
        self.rebuild_view();
    }
}

fn row_matches(row: &ChartRow, needle: &str) -> bool {
    row.name.to_lowercase().contains(needle)
        || row.release_date.to_lowercase().contains(needle)
        || row.event.as_deref().is_some_and(|v| v.to_lowercase().contains(needle))
        || row.achievement.as_deref().is_some_and(|v| v.to_lowercase().contains(needle))
        || row.place.to_string().contains(needle)
        || row.votes.to_string().contains(needle)
}

fn compare_rows(a: &ChartRow, b: &ChartRow, by: SortColumn) -> std::cmp::Ordering {
    use SortColumn::*;
    match by {
        Place => a.place.cmp(&b.place),
        Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        ReleaseDate => a.release_date_sort.cmp(&b.release_date_sort),
        Event => a.event.cmp(&b.event),
        Achievement => a.achievement.cmp(&b.achievement),
        Rating => a.rating.total_cmp(&b.rating),
        Votes => a.votes.cmp(&b.votes),
        Id => numeric_id(a).cmp(&numeric_id(b)),
    }
}

fn numeric_id(r: &ChartRow) -> u64 {
    r.id.trim().parse().unwrap_or(0)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        if self.running {
            // keep polling the worker and refreshing the status line
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::toolbar::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
