//! Audio file discovery.
//!
//! Walks a directory tree and collects the files whose extension matches
//! the configured allow-list. The catalogue workflow feeds on the returned
//! paths; nothing here opens the files themselves.

mod scan;

pub use scan::*;
