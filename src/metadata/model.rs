use std::fmt;

/// Descriptive metadata for one recorded audio file.
///
/// `speakers` and `segments` keep their insertion order; speaking credits
/// and segment listings are ordered, not sets. Each segment is stored in
/// its canonical `[[HH]:]MM:SS-[[HH]:]MM:SS` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub filepath: String,
    pub event_name: String,
    pub title: String,
    pub speakers: Vec<String>,
    pub segments: Vec<String>,
}

/// The projection an audio tag writer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl Metadata {
    /// Project this entry onto the tag schema: speakers become the artist
    /// credit, the event becomes the album. Empty fields stay empty; the
    /// tag writer accepts them.
    pub fn tag_view(&self) -> TagView {
        TagView {
            title: self.title.clone(),
            artist: self.speakers.join(", "),
            album: self.event_name.clone(),
        }
    }
}

impl fmt::Display for Metadata {
    /// Human-readable rendering. Multi-value fields are joined with `", "`
    /// here; the persisted form joins with `;` instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Filepath:\t{}", self.filepath)?;
        writeln!(f, "Event:\t\t{}", self.event_name)?;
        writeln!(f, "Title:\t\t{}", self.title)?;
        writeln!(f, "Speakers:\t{}", self.speakers.join(", "))?;
        write!(f, "Segments:\t{}", self.segments.join(", "))
    }
}
