//! Crate-wide error type.
//!
//! Segment parsing and catalogue persistence surface their failures through
//! one enum; callers that need to absorb a failure (interactive validation)
//! do so explicitly.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The text does not match the `[[HH]:]MM:SS<sep>[[HH]:]MM:SS` grammar.
    #[error("invalid segment format: {0:?}")]
    SegmentFormat(String),

    /// The segment's end offset precedes its start offset.
    #[error("segment end ({end}s) precedes start ({start}s)")]
    SegmentOrder { start: u32, end: u32 },

    /// A catalogue file carries an unexpected header row.
    #[error("unexpected catalogue header: {0:?}")]
    Header(Vec<String>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
