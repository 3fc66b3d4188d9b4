use std::fs;

use tempfile::tempdir;

use super::*;
use crate::error::Error;

fn sample() -> Metadata {
    Metadata {
        filepath: "t.mp3".to_string(),
        event_name: "E".to_string(),
        title: "T".to_string(),
        speakers: vec!["A".to_string(), "B".to_string()],
        segments: vec!["00:10-00:20".to_string()],
    }
}

#[test]
fn tag_view_projects_title_speakers_and_event() {
    let view = sample().tag_view();
    assert_eq!(view.title, "T");
    assert_eq!(view.artist, "A, B");
    assert_eq!(view.album, "E");
}

#[test]
fn tag_view_of_empty_entry_is_empty() {
    let view = Metadata::default().tag_view();
    assert_eq!(view.title, "");
    assert_eq!(view.artist, "");
    assert_eq!(view.album, "");
}

#[test]
fn display_renders_all_fields_with_comma_joins() {
    let rendered = sample().to_string();
    assert_eq!(
        rendered,
        "Filepath:\tt.mp3\nEvent:\t\tE\nTitle:\t\tT\nSpeakers:\tA, B\nSegments:\t00:10-00:20",
    );
}

#[test]
fn add_returns_the_owned_entry_for_further_edits() {
    let mut catalogue = Catalogue::new();
    let entry = catalogue.add(Metadata {
        filepath: "t.mp3".to_string(),
        ..Metadata::default()
    });
    entry.title = "T".to_string();

    assert_eq!(catalogue.len(), 1);
    let stored = catalogue.find_by(Field::Filepath, "t.mp3").unwrap();
    assert_eq!(stored.title, "T");
}

#[test]
fn find_by_returns_first_match_for_duplicates() {
    let mut catalogue = Catalogue::new();
    catalogue.add(Metadata {
        filepath: "dup.mp3".to_string(),
        title: "first".to_string(),
        ..Metadata::default()
    });
    catalogue.add(Metadata {
        filepath: "dup.mp3".to_string(),
        title: "second".to_string(),
        ..Metadata::default()
    });

    let found = catalogue.find_by(Field::Filepath, "dup.mp3").unwrap();
    assert_eq!(found.title, "first");
}

#[test]
fn find_by_misses_yield_none() {
    let mut catalogue = Catalogue::new();
    catalogue.add(sample());

    assert!(catalogue.find_by(Field::Filepath, "absent.mp3").is_none());
    assert!(catalogue.find_by(Field::EventName, "absent").is_none());
}

#[test]
fn find_by_matches_event_and_title() {
    let mut catalogue = Catalogue::new();
    catalogue.add(sample());

    assert!(catalogue.find_by(Field::EventName, "E").is_some());
    assert!(catalogue.find_by(Field::Title, "T").is_some());
}

#[test]
fn write_csv_quotes_every_cell_and_packs_lists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metadata.csv");

    let mut catalogue = Catalogue::new();
    catalogue.add(sample());
    catalogue.write_csv(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "\"filepath\",\"event_name\",\"title\",\"speakers\",\"segments\"\n\
         \"t.mp3\",\"E\",\"T\",\"A;B\",\"00:10-00:20\"\n",
    );
}

#[test]
fn write_then_read_is_the_identity() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metadata.csv");

    let mut catalogue = Catalogue::new();
    catalogue.add(sample());
    catalogue.add(Metadata {
        filepath: "plain.mp3".to_string(),
        event_name: "Conf2024".to_string(),
        title: "Untitled".to_string(),
        speakers: Vec::new(),
        segments: Vec::new(),
    });
    catalogue.add(Metadata {
        filepath: "multi.mp3".to_string(),
        event_name: String::new(),
        title: String::new(),
        speakers: vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()],
        segments: vec!["00:10-05:00".to_string(), "10:00-12:30".to_string()],
    });
    catalogue.write_csv(&path).unwrap();

    let mut restored = Catalogue::new();
    restored.read_csv(&path).unwrap();

    assert_eq!(restored.len(), catalogue.len());
    for (original, read_back) in catalogue.iter().zip(restored.iter()) {
        assert_eq!(original, read_back);
    }
}

#[test]
fn read_csv_empty_cells_become_empty_lists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metadata.csv");
    fs::write(
        &path,
        "\"filepath\",\"event_name\",\"title\",\"speakers\",\"segments\"\n\
         \"a.mp3\",\"E\",\"T\",\"\",\"\"\n",
    )
    .unwrap();

    let mut catalogue = Catalogue::new();
    catalogue.read_csv(&path).unwrap();

    let entry = catalogue.find_by(Field::Filepath, "a.mp3").unwrap();
    assert!(entry.speakers.is_empty());
    assert!(entry.segments.is_empty());
}

#[test]
fn read_csv_appends_in_file_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metadata.csv");
    fs::write(
        &path,
        "\"filepath\",\"event_name\",\"title\",\"speakers\",\"segments\"\n\
         \"b.mp3\",\"\",\"\",\"\",\"\"\n\
         \"c.mp3\",\"\",\"\",\"\",\"\"\n",
    )
    .unwrap();

    let mut catalogue = Catalogue::new();
    catalogue.add(Metadata {
        filepath: "a.mp3".to_string(),
        ..Metadata::default()
    });
    catalogue.read_csv(&path).unwrap();

    let paths: Vec<&str> = catalogue.iter().map(|e| e.filepath.as_str()).collect();
    assert_eq!(paths, ["a.mp3", "b.mp3", "c.mp3"]);
}

#[test]
fn read_csv_rejects_unexpected_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metadata.csv");
    fs::write(&path, "\"filepath\",\"event\",\"title\",\"speakers\",\"segments\"\n").unwrap();

    let mut catalogue = Catalogue::new();
    match catalogue.read_csv(&path) {
        Err(Error::Header(found)) => assert_eq!(found[1], "event"),
        other => panic!("expected header error, got {other:?}"),
    }
}

#[test]
fn read_csv_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let mut catalogue = Catalogue::new();
    assert!(catalogue.read_csv(&dir.path().join("absent.csv")).is_err());
}
