//! Catalogue segment metadata for recorded talks.
//!
//! The crate keeps per-file metadata for recorded audio (event, title,
//! speakers, timestamp segments) in an ordered [`metadata::Catalogue`]
//! persisted as quote-always CSV, parses and validates
//! `[[HH]:]MM:SS-[[HH]:]MM:SS` segment literals, discovers audio files on
//! disk, and manages an external review player whose process is cleaned up
//! on every exit path.

pub mod config;
pub mod error;
pub mod library;
pub mod metadata;
pub mod player;
pub mod segment;

// Re-exports for convenience
pub use error::{Error, Result};
pub use metadata::{Catalogue, Field, Metadata, TagView};
