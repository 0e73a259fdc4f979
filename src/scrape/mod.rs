// src/scrape/mod.rs

mod extract;

pub use extract::extract_entries;

use std::error::Error;

use crate::{
    chart::{ChartRow, RawEntry, format_entry},
    config::consts::{MAX_PAGES, PAGE_SIZE},
    net,
    progress::Progress,
};

/// One fetched page: entries in document order plus the keep-going signal.
pub struct ChartPage {
    pub entries: Vec<RawEntry>,
    pub has_more: bool,
}

/// Fetch and extract a single 1-based chart page.
/// A full page of 25 is taken to mean more may follow; an exactly-full
/// final page costs one extra request that comes back empty. Same
/// behavior as the original page, kept on purpose.
pub fn fetch_page(page: u32) -> Result<ChartPage, Box<dyn Error>> {
    let body = net::http_get(&net::chart_page_url(page))?;
    let entries = extract_entries(&body)?;
    let has_more = entries.len() >= PAGE_SIZE;
    Ok(ChartPage { entries, has_more })
}

/// Collect the whole chart: pages 1..=cap, one request in flight at a time.
/// A fetch error ends the loop and whatever was accumulated is the result;
/// only a failure with nothing accumulated is reported as an error.
pub fn collect_chart(
    max_pages: u32,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<ChartRow>, Box<dyn Error>> {
    collect_chart_with(fetch_page, max_pages, progress)
}

/// The aggregation loop with an injectable page fetcher (tests stub this).
pub fn collect_chart_with<F>(
    mut fetch: F,
    max_pages: u32,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ChartRow>, Box<dyn Error>>
where
    F: FnMut(u32) -> Result<ChartPage, Box<dyn Error>>,
{
    let max_pages = max_pages.clamp(1, MAX_PAGES);
    let mut rows: Vec<ChartRow> = Vec::new();
    let mut failure: Option<String> = None;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(max_pages);
    }

    let mut page = 1;
    let mut has_more = true;

    while has_more && page <= max_pages {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching page {page}..."));
        }

        match fetch(page) {
            Ok(result) => {
                if result.entries.is_empty() {
                    break;
                }
                rows.extend(result.entries.iter().map(format_entry));
                if let Some(p) = progress.as_deref_mut() {
                    p.page_done(page, rows.len());
                }
                has_more = result.has_more;
                page += 1;
            }
            Err(e) => {
                loge!("Chart: page {page} failed: {e}");
                failure = Some(e.to_string());
                break;
            }
        }
    }

    if rows.is_empty() {
        if let Some(why) = failure {
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(why.into());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Processing {} demos...", rows.len()));
        p.finish();
    }

    Ok(rows)
}
