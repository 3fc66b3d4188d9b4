//! segno: catalogue segment metadata for recorded talks.
//!
//! Thin command-line front end over the library: discovery, catalogue
//! inspection and editing, segment checking and review playback.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use segno::config::Settings;
use segno::player::Player;
use segno::{Catalogue, Metadata, library, segment};

const USAGE: &str = "\
Usage: segno <command> [args]

Commands:
  scan [dir]                                  list audio files under dir
  show [csv]                                  print every catalogue entry
  tags [csv]                                  print the tag projection of every entry
  add <file> [event] [title] [spkrs] [segs]   append an entry to the catalogue
                                              (lists are ;-separated)
  check <segment>                             validate a segment like 00:10-05:00
  play <file>                                 play a file (Enter stops)";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "segno=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load()?;
    settings.validate()?;

    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("scan") => {
            let dir = args.next().unwrap_or_else(|| ".".to_string());
            scan(Path::new(&dir), &settings);
        }
        Some("show") => {
            let path = catalogue_path(args.next(), &settings);
            show(&path)?;
        }
        Some("tags") => {
            let path = catalogue_path(args.next(), &settings);
            tags(&path)?;
        }
        Some("add") => {
            let file = args.next().ok_or("usage: segno add <file> [event] [title] [speakers] [segments]")?;
            add(file, &mut args, &settings)?;
        }
        Some("check") => {
            let text = args.next().ok_or("usage: segno check <segment>")?;
            let (start, end) = segment::parse_segment(&text)?;
            println!("{start}s .. {end}s");
        }
        Some("play") => {
            let file = args.next().ok_or("usage: segno play <file>")?;
            play(Path::new(&file), &settings)?;
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn catalogue_path(arg: Option<String>, settings: &Settings) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| settings.catalogue.path.clone())
}

fn scan(dir: &Path, settings: &Settings) {
    for file in library::scan(dir, &settings.library) {
        println!("{}", file.display());
    }
}

fn show(path: &Path) -> segno::Result<()> {
    let mut catalogue = Catalogue::new();
    catalogue.read_csv(path)?;
    for entry in catalogue.iter() {
        println!("{entry}");
        println!();
    }
    Ok(())
}

fn tags(path: &Path) -> segno::Result<()> {
    let mut catalogue = Catalogue::new();
    catalogue.read_csv(path)?;
    for entry in catalogue.iter() {
        let tag = entry.tag_view();
        println!("{}\t{} - {} [{}]", entry.filepath, tag.artist, tag.title, tag.album);
    }
    Ok(())
}

fn add(
    file: String,
    args: &mut impl Iterator<Item = String>,
    settings: &Settings,
) -> segno::Result<()> {
    let event_name = args.next().unwrap_or_default();
    let title = args.next().unwrap_or_default();
    let speakers = args.next().map(split_list).unwrap_or_default();
    let segments = args.next().map(split_list).unwrap_or_default();

    for text in &segments {
        segment::parse_segment(text)?;
    }

    let path = &settings.catalogue.path;
    let mut catalogue = Catalogue::new();
    if path.exists() {
        catalogue.read_csv(path)?;
    }
    catalogue.add(Metadata {
        filepath: file,
        event_name,
        title,
        speakers,
        segments,
    });
    catalogue.write_csv(path)
}

fn split_list(raw: String) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn play(file: &Path, settings: &Settings) -> segno::Result<()> {
    let _player = Player::launch(file, &settings.player)?;
    println!("Playing {} - press Enter to stop", file.display());
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
