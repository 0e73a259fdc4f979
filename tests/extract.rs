// tests/extract.rs
//
// Extraction from chart page XML: the happy path, optional blocks,
// entity unescaping, and structurally broken input.
//
use csdb_toplist::scrape::extract_entries;

const FULL_PAGE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<CSDbData>
  <ChartEntries>
    <Entry>
      <Place>1</Place>
      <Release>
        <ID>72550</ID>
        <Name>Edge of Disgrace</Name>
        <ReleaseDay>25</ReleaseDay>
        <ReleaseMonth>10</ReleaseMonth>
        <ReleaseYear>2008</ReleaseYear>
        <ScreenShot>https://csdb.dk/gfx/releases/72000/72550.png</ScreenShot>
        <ReleasedBy>
          <Group>
            <ID>1877</ID>
            <Name>Booze Design</Name>
          </Group>
        </ReleasedBy>
        <ReleasedAt>
          <Event>
            <ID>1272</ID>
            <Name>X'2008</Name>
          </Event>
        </ReleasedAt>
        <Achievement>
          <Place>1</Place>
          <Compo>C64 Demo Competition</Compo>
        </Achievement>
      </Release>
      <Rating>9.7</Rating>
      <Votes>246</Votes>
    </Entry>
    <Entry>
      <Place>2</Place>
      <Release>
        <ID>190467</ID>
        <Name>Next Level</Name>
        <ReleaseDay>28</ReleaseDay>
        <ReleaseMonth>3</ReleaseMonth>
        <ReleaseYear>2020</ReleaseYear>
      </Release>
      <Rating>9.6</Rating>
      <Votes>180</Votes>
    </Entry>
  </ChartEntries>
</CSDbData>
"#;

#[test]
fn full_entry_extracts_every_field() {
    let entries = extract_entries(FULL_PAGE).unwrap();
    assert_eq!(entries.len(), 2);

    let e = &entries[0];
    assert_eq!(e.place, "1");
    assert_eq!(e.rating, "9.7");
    assert_eq!(e.votes, "246");
    assert_eq!(e.release.id, "72550");
    assert_eq!(e.release.name, "Edge of Disgrace");
    assert_eq!(e.release.day, "25");
    assert_eq!(e.release.month, "10");
    assert_eq!(e.release.year, "2008");
    assert_eq!(e.release.screenshot, "https://csdb.dk/gfx/releases/72000/72550.png");

    let group = e.release.group.as_ref().unwrap();
    assert_eq!(group.id, "1877");
    assert_eq!(group.name, "Booze Design");
    assert_eq!(e.release.event.as_deref(), Some("X'2008"));

    let ach = e.release.achievement.as_ref().unwrap();
    assert_eq!(ach.place, "1");
    assert_eq!(ach.compo, "C64 Demo Competition");
}

#[test]
fn absent_optional_blocks_stay_none() {
    let entries = extract_entries(FULL_PAGE).unwrap();
    let e = &entries[1];
    assert!(e.release.group.is_none());
    assert!(e.release.event.is_none());
    assert!(e.release.achievement.is_none());
    assert_eq!(e.release.screenshot, "");
}

#[test]
fn document_order_is_preserved() {
    let entries = extract_entries(FULL_PAGE).unwrap();
    assert_eq!(entries[0].place, "1");
    assert_eq!(entries[1].place, "2");
}

#[test]
fn missing_scalars_stay_empty() {
    let xml = "<CSDbData><Entry><Release><ID>5</ID></Release></Entry></CSDbData>";
    let entries = extract_entries(xml).unwrap();
    assert_eq!(entries.len(), 1);
    let e = &entries[0];
    assert_eq!(e.place, "");
    assert_eq!(e.rating, "");
    assert_eq!(e.votes, "");
    assert_eq!(e.release.id, "5");
    assert_eq!(e.release.name, "");
    assert_eq!(e.release.year, "");
}

#[test]
fn entities_are_unescaped() {
    let xml = "<CSDbData><Entry><Release>\
               <Name>Fire &amp; Ice &lt;final&gt;</Name>\
               </Release></Entry></CSDbData>";
    let entries = extract_entries(xml).unwrap();
    assert_eq!(entries[0].release.name, "Fire & Ice <final>");
}

#[test]
fn document_without_entries_is_empty() {
    let entries = extract_entries("<CSDbData><ChartEntries/></CSDbData>").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn self_closing_optional_block_allocates_it() {
    let xml = "<CSDbData><Entry><Release><ReleasedBy><Group/></ReleasedBy>\
               </Release></Entry></CSDbData>";
    let entries = extract_entries(xml).unwrap();
    let group = entries[0].release.group.as_ref().unwrap();
    assert_eq!(group.id, "");
    assert_eq!(group.name, "");
}

#[test]
fn unknown_elements_are_ignored() {
    let xml = "<CSDbData><Entry><Place>3</Place>\
               <Release><ID>9</ID><DownloadCount>512</DownloadCount></Release>\
               </Entry></CSDbData>";
    let entries = extract_entries(xml).unwrap();
    assert_eq!(entries[0].place, "3");
    assert_eq!(entries[0].release.id, "9");
}

#[test]
fn mismatched_end_tag_is_an_error() {
    assert!(extract_entries("<CSDbData><Entry></Wrong></CSDbData>").is_err());
}

#[test]
fn hostile_input_never_panics() {
    let inputs = [
        "",
        "not xml at all",
        "<",
        "<Entry",
        "<Entry><Place>1</Place>",
        "&&&&",
        "<a><b><c><d><e>deep</e></d></c></b></a>",
        "<Entry>\u{0}</Entry>",
        "<Entry><Place>1</Place></Entry><Entry>",
    ];
    for input in inputs {
        // Ok or Err are both fine, a panic is not.
        let _ = extract_entries(input);
    }
}
