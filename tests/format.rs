// tests/format.rs
//
// Formatter mapping: date strings and sort keys, numeric fallbacks,
// achievement/event shaping, detail URL.
//
use csdb_toplist::chart::{
    RawAchievement, RawEntry, RawGroup, RawRelease, date_sort_key, format_entry,
};

fn entry() -> RawEntry {
    RawEntry {
        place: "1".into(),
        rating: "9.5".into(),
        votes: "312".into(),
        release: RawRelease {
            id: "12345".into(),
            name: "Edge of Disgrace".into(),
            day: "4".into(),
            month: "12".into(),
            year: "2008".into(),
            screenshot: "https://csdb.dk/gfx/releases/12345.png".into(),
            group: Some(RawGroup { id: "7".into(), name: "Booze Design".into() }),
            event: Some("X'2008".into()),
            achievement: Some(RawAchievement {
                place: "1".into(),
                compo: "C64 Demo Competition".into(),
            }),
        },
    }
}

#[test]
fn full_date_formats_without_padding() {
    let row = format_entry(&entry());
    assert_eq!(row.release_date, "4/12/2008");
    assert_eq!(
        row.release_date_sort,
        date_sort_key("2008", "12", "4").unwrap()
    );
    assert!(row.release_date_sort > 0);
}

#[test]
fn missing_date_component_yields_unknown_and_zero_key() {
    for missing in ["day", "month", "year"] {
        let mut e = entry();
        match missing {
            "day" => e.release.day.clear(),
            "month" => e.release.month.clear(),
            _ => e.release.year.clear(),
        }
        let row = format_entry(&e);
        assert_eq!(row.release_date, "Unknown", "missing {missing}");
        assert_eq!(row.release_date_sort, 0, "missing {missing}");
    }
}

#[test]
fn sort_key_orders_calendar_dates() {
    let early = date_sort_key("1994", "3", "1").unwrap();
    let later = date_sort_key("1994", "3", "2").unwrap();
    let epoch = date_sort_key("1970", "1", "1").unwrap();
    assert!(early < later);
    assert_eq!(epoch, 0);
    assert_eq!(later - early, 24 * 60 * 60 * 1000);
}

#[test]
fn impossible_date_keeps_text_but_sorts_at_zero() {
    let mut e = entry();
    e.release.day = "31".into();
    e.release.month = "2".into();
    let row = format_entry(&e);
    assert_eq!(row.release_date, "31/2/2008");
    assert_eq!(row.release_date_sort, 0);
}

#[test]
fn rating_parses_or_defaults_to_zero() {
    let mut e = entry();
    let row = format_entry(&e);
    assert_eq!(row.rating, 9.5);

    e.rating = "".into();
    assert_eq!(format_entry(&e).rating, 0.0);
    e.rating = "n/a".into();
    assert_eq!(format_entry(&e).rating, 0.0);
    e.rating = "inf".into();
    assert_eq!(format_entry(&e).rating, 0.0);
}

#[test]
fn votes_parse_or_default_to_zero() {
    let mut e = entry();
    assert_eq!(format_entry(&e).votes, 312);

    e.votes = "".into();
    assert_eq!(format_entry(&e).votes, 0);
    e.votes = "lots".into();
    assert_eq!(format_entry(&e).votes, 0);
}

#[test]
fn achievement_renders_place_at_compo() {
    let row = format_entry(&entry());
    assert_eq!(
        row.achievement.as_deref(),
        Some("1. place at C64 Demo Competition")
    );

    let mut e = entry();
    e.release.achievement = None;
    assert_eq!(format_entry(&e).achievement, None);
}

#[test]
fn event_and_screenshot_drop_empty_values() {
    let row = format_entry(&entry());
    assert_eq!(row.event.as_deref(), Some("X'2008"));
    assert!(row.screenshot.is_some());

    let mut e = entry();
    e.release.event = Some(String::new());
    e.release.screenshot.clear();
    let row = format_entry(&e);
    assert_eq!(row.event, None);
    assert_eq!(row.screenshot, None);
}

#[test]
fn detail_url_is_keyed_by_release_id() {
    let row = format_entry(&entry());
    assert_eq!(row.csdb_url, "https://csdb.dk/release/?id=12345");
}

#[test]
fn place_falls_back_to_zero() {
    let mut e = entry();
    e.place = "".into();
    assert_eq!(format_entry(&e).place, 0);
}
