// src/chart.rs
//
// Record shapes for the CSDb chart feed, plus the mapping from the raw
// per-page entries to the flattened rows the table and exporters consume.

use chrono::NaiveDate;

use crate::config::consts::RELEASE_URL;

/// One `<Entry>` as read from a chart page. Values are verbatim feed text;
/// nothing here is validated.
#[derive(Clone, Debug, Default)]
pub struct RawEntry {
    pub place: String,
    pub rating: String,
    pub votes: String,
    pub release: RawRelease,
}

/// The `<Release>` block inside an entry. The three nested blocks are
/// genuinely optional in the feed, so they are optional here.
#[derive(Clone, Debug, Default)]
pub struct RawRelease {
    pub id: String,
    pub name: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub screenshot: String,
    pub group: Option<RawGroup>,
    pub event: Option<String>,
    pub achievement: Option<RawAchievement>,
}

/// `<ReleasedBy><Group>`: the releasing group.
#[derive(Clone, Debug, Default)]
pub struct RawGroup {
    pub id: String,
    pub name: String,
}

/// `<Achievement>`: a compo placing.
#[derive(Clone, Debug, Default)]
pub struct RawAchievement {
    pub place: String,
    pub compo: String,
}

/// Flattened row handed to the table and the exporters.
/// Built once per entry, never mutated afterwards.
#[derive(Clone, Debug)]
pub struct ChartRow {
    pub id: String,
    pub name: String,
    pub place: u32,
    /// "day/month/year" as given by the feed, or "Unknown".
    pub release_date: String,
    /// Milliseconds at UTC midnight of the release date; 0 when unknown.
    pub release_date_sort: i64,
    pub rating: f64,
    pub votes: u32,
    pub csdb_url: String,
    pub screenshot: Option<String>,
    pub achievement: Option<String>,
    pub event: Option<String>,
}

/// Column headers, in export order.
pub const HEADERS: [&str; 9] = [
    "Place", "Name", "Release date", "Event", "Achievement",
    "Rating", "Votes", "CSDb URL", "Screenshot",
];

pub const UNKNOWN_DATE: &str = "Unknown";

/// Map one raw entry to its display row. Pure; never fails.
/// Unparseable numerics fall back to 0, absent optionals stay absent.
pub fn format_entry(entry: &RawEntry) -> ChartRow {
    let release = &entry.release;

    let (release_date, release_date_sort) = format_release_date(release);

    let rating = entry.rating.trim().parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);
    let votes = entry.votes.trim().parse::<u32>().unwrap_or(0);
    let place = entry.place.trim().parse::<u32>().unwrap_or(0);

    let achievement = release.achievement.as_ref()
        .map(|a| format!("{}. place at {}", a.place, a.compo));
    let event = release.event.clone().filter(|name| !name.is_empty());
    let screenshot = if release.screenshot.is_empty() {
        None
    } else {
        Some(release.screenshot.clone())
    };

    ChartRow {
        id: release.id.clone(),
        name: release.name.clone(),
        place,
        release_date,
        release_date_sort,
        rating,
        votes,
        csdb_url: join!(RELEASE_URL, "?id=", &release.id),
        screenshot,
        achievement,
        event,
    }
}

/// "day/month/year" (no padding) plus the sort key, or ("Unknown", 0)
/// when any date component is missing from the feed.
fn format_release_date(release: &RawRelease) -> (String, i64) {
    if release.day.is_empty() || release.month.is_empty() || release.year.is_empty() {
        return (s!(UNKNOWN_DATE), 0);
    }
    let text = format!("{}/{}/{}", release.day, release.month, release.year);
    // Dates chrono rejects (e.g. 31/2) keep the literal text but sort at 0.
    let sort = date_sort_key(&release.year, &release.month, &release.day).unwrap_or(0);
    (text, sort)
}

pub fn date_sort_key(year: &str, month: &str, day: &str) -> Option<i64> {
    let y: i32 = year.trim().parse().ok()?;
    let m: u32 = month.trim().parse().ok()?;
    let d: u32 = day.trim().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(y, m, d)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

impl ChartRow {
    /// Row cells in `HEADERS` order.
    pub fn to_export_row(&self) -> Vec<String> {
        vec![
            self.place.to_string(),
            self.name.clone(),
            self.release_date.clone(),
            self.event.clone().unwrap_or_default(),
            self.achievement.clone().unwrap_or_default(),
            format!("{:.1}", self.rating),
            self.votes.to_string(),
            self.csdb_url.clone(),
            self.screenshot.clone().unwrap_or_default(),
        ]
    }
}
