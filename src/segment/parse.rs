use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Matches a start and an end timestamp, each `[[HH]:]MM:SS` with minutes
/// and seconds bounded to [00,59] and an optional, unbounded two-digit hours
/// group, separated by `-`, `|`, `+` or `;` with optional whitespace.
fn segment_regex() -> &'static Regex {
    static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    SEGMENT_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{2})?:?([0-5]\d):?([0-5]\d)\s*[-|+;]\s*(\d{2})?:?([0-5]\d):?([0-5]\d)$")
            .expect("segment pattern must compile")
    })
}

/// Fold timestamp components into a total second count.
///
/// Absent components count as zero: user-entered timestamps legitimately
/// omit the hours group.
pub fn total_seconds(seconds: Option<u32>, minutes: Option<u32>, hours: Option<u32>) -> u32 {
    hours.unwrap_or(0) * 3600 + minutes.unwrap_or(0) * 60 + seconds.unwrap_or(0)
}

/// Parse a segment literal into `(start, end)` second offsets.
///
/// Fails with [`Error::SegmentFormat`] when the text does not match the
/// grammar and with [`Error::SegmentOrder`] when the end offset precedes
/// the start offset. Equal offsets are accepted.
pub fn parse_segment(text: &str) -> Result<(u32, u32)> {
    let caps = segment_regex()
        .captures(text)
        .ok_or_else(|| Error::SegmentFormat(text.to_string()))?;

    // Capture groups hold only digits, so parsing cannot fail.
    let group = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let start = total_seconds(group(3), group(2), group(1));
    let end = total_seconds(group(6), group(5), group(4));

    if end < start {
        return Err(Error::SegmentOrder { start, end });
    }

    Ok((start, end))
}

/// Check whether `text` is an acceptable segment entry.
///
/// An empty string is the caller's end-of-input signal in "type empty to
/// finish" loops, not a malformed segment, so it counts as valid. Any parse
/// failure is absorbed into `false`.
pub fn is_valid_segment(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    parse_segment(text).is_ok()
}
