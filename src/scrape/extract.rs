// src/scrape/extract.rs
//
// Pulls the ordered entry list out of one chart page document.
// Missing scalar text stays "", absent optional blocks stay None;
// only structurally broken XML is an error.

use std::error::Error;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::chart::{RawAchievement, RawEntry, RawGroup, RawRelease};

pub fn extract_entries(xml: &str) -> Result<Vec<RawEntry>, Box<dyn Error>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut entry: Option<RawEntry> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                open_element(&name, &stack, &mut entry);
                stack.push(name);
            }
            Ok(Event::Empty(e)) => {
                // Self-closing element: opens and closes with no text.
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                open_element(&name, &stack, &mut entry);
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if name == "Entry" {
                    if let Some(done) = entry.take() {
                        entries.push(done);
                    }
                }
                if stack.last().map(String::as_str) == Some(name.as_str()) {
                    stack.pop();
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(cur) = entry.as_mut() {
                    let text = e.unescape().unwrap_or_default().to_string();
                    store_text(cur, &stack, text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("XML parse error: {e}").into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

/// Allocate the optional blocks when their elements actually appear.
/// `stack` holds the enclosing elements, innermost last.
fn open_element(name: &str, stack: &[String], entry: &mut Option<RawEntry>) {
    if name == "Entry" {
        *entry = Some(RawEntry::default());
        return;
    }
    let Some(cur) = entry.as_mut() else { return };
    let release: &mut RawRelease = &mut cur.release;
    match name {
        "Group" if ends_with(stack, &["ReleasedBy"]) => {
            release.group = Some(RawGroup::default());
        }
        "Event" if ends_with(stack, &["ReleasedAt"]) => {
            release.event = Some(s!());
        }
        "Achievement" if ends_with(stack, &["Release"]) => {
            release.achievement = Some(RawAchievement::default());
        }
        _ => {}
    }
}

/// Route element text into the current entry by its enclosing path.
/// Unknown paths are ignored, never an error.
fn store_text(cur: &mut RawEntry, stack: &[String], text: String) {
    let release = &mut cur.release;
    let path: Vec<&str> = stack.iter().map(String::as_str).collect();
    match path.as_slice() {
        [.., "Entry", "Place"] => cur.place = text,
        [.., "Entry", "Rating"] => cur.rating = text,
        [.., "Entry", "Votes"] => cur.votes = text,
        [.., "Release", "ID"] => release.id = text,
        [.., "Release", "Name"] => release.name = text,
        [.., "Release", "ReleaseDay"] => release.day = text,
        [.., "Release", "ReleaseMonth"] => release.month = text,
        [.., "Release", "ReleaseYear"] => release.year = text,
        [.., "Release", "ScreenShot"] => release.screenshot = text,
        [.., "ReleasedBy", "Group", "ID"] => {
            if let Some(g) = release.group.as_mut() { g.id = text; }
        }
        [.., "ReleasedBy", "Group", "Name"] => {
            if let Some(g) = release.group.as_mut() { g.name = text; }
        }
        [.., "ReleasedAt", "Event", "Name"] => {
            if let Some(ev) = release.event.as_mut() { *ev = text; }
        }
        [.., "Achievement", "Place"] => {
            if let Some(a) = release.achievement.as_mut() { a.place = text; }
        }
        [.., "Achievement", "Compo"] => {
            if let Some(a) = release.achievement.as_mut() { a.compo = text; }
        }
        _ => {}
    }
}

fn ends_with(stack: &[String], tail: &[&str]) -> bool {
    stack.len() >= tail.len()
        && stack[stack.len() - tail.len()..]
            .iter()
            .zip(tail)
            .all(|(a, b)| a == b)
}
