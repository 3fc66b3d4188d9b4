use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use tracing::info;

use crate::error::{Error, Result};

use super::model::Metadata;

/// Column order of the persisted catalogue, fixed on both read and write.
pub const FIELDS: [&str; 5] = ["filepath", "event_name", "title", "speakers", "segments"];

/// Delimiter packing a speaker or segment list into a single CSV cell.
const MULTI_VALUE_SEPARATOR: &str = ";";

/// Scalar fields a catalogue lookup can match on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Filepath,
    EventName,
    Title,
}

/// An ordered collection of [`Metadata`] entries.
///
/// Entries stay in insertion order, matching file-discovery or entry order.
/// The catalogue owns its entries outright and exposes only domain
/// operations; duplicate filepaths are tolerated, with lookups returning
/// the first match.
#[derive(Debug, Default)]
pub struct Catalogue {
    entries: Vec<Metadata>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metadata> {
        self.entries.iter()
    }

    /// Append an entry and hand back the collection-owned reference, so the
    /// caller can keep filling in fields it constructed with defaults.
    pub fn add(&mut self, entry: Metadata) -> &mut Metadata {
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// First entry whose `field` equals `value`, in insertion order.
    pub fn find_by(&self, field: Field, value: &str) -> Option<&Metadata> {
        self.entries.iter().find(|entry| match field {
            Field::Filepath => entry.filepath == value,
            Field::EventName => entry.event_name == value,
            Field::Title => entry.title == value,
        })
    }

    /// Write the catalogue to `path` as CSV, overwriting any existing file.
    ///
    /// Every cell is quoted regardless of content so empty and
    /// delimiter-bearing fields survive the round trip unambiguously.
    /// Speaker and segment lists are packed into one cell each, joined
    /// with `;`; an empty list writes an empty cell.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        info!(path = %path.display(), entries = self.entries.len(), "writing catalogue");

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_path(path)?;

        writer.write_record(FIELDS)?;
        for entry in &self.entries {
            writer.write_record([
                entry.filepath.as_str(),
                entry.event_name.as_str(),
                entry.title.as_str(),
                &join_multi(&entry.speakers),
                &join_multi(&entry.segments),
            ])?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Read a catalogue file at `path`, appending one entry per row in file
    /// order. Fails with [`Error::Header`] when the header row differs from
    /// [`FIELDS`].
    pub fn read_csv(&mut self, path: &Path) -> Result<()> {
        info!(path = %path.display(), "reading catalogue");

        let mut reader = ReaderBuilder::new().from_path(path)?;

        let headers = reader.headers()?;
        if headers.iter().ne(FIELDS) {
            return Err(Error::Header(headers.iter().map(str::to_string).collect()));
        }

        for row in reader.records() {
            let row = row?;
            // Row arity is enforced against the header by the reader.
            let cell = |i: usize| row.get(i).unwrap_or_default();
            self.add(Metadata {
                filepath: cell(0).to_string(),
                event_name: cell(1).to_string(),
                title: cell(2).to_string(),
                speakers: split_multi(cell(3)),
                segments: split_multi(cell(4)),
            });
        }

        Ok(())
    }
}

fn join_multi(values: &[String]) -> String {
    values.join(MULTI_VALUE_SEPARATOR)
}

/// Inverse of [`join_multi`]: an empty cell is an empty list, so a write
/// followed by a read reproduces the original entry exactly.
fn split_multi(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split(MULTI_VALUE_SEPARATOR).map(str::to_string).collect()
}
