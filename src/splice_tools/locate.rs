//! locate_range: Find the marker-delimited line range in a target document
//!
//! A line satisfies a marker when its trimmed content starts with the
//! marker's literal prefix. The range is half-open: `[start, end)`.

use super::SpliceError;

/// A located line range, half-open: `start` is the first line of the
/// method header, `end` is the first line of the next definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Index of the first line matching the start marker (0-indexed)
    pub start: usize,
    /// Index of the first line after `start` matching the end marker
    pub end: usize,
}

impl Range {
    /// Number of lines covered by the range
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the range covers no lines (cannot happen for a
    /// range returned by `locate_range`)
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Locate the line range delimited by two marker prefixes
///
/// Scans `lines` in order. The first line whose trimmed content
/// starts with `start_marker` becomes `start`; scanning continues
/// strictly after it for the first line whose trimmed content starts
/// with `end_marker`, which becomes `end`. First match wins on both
/// sides, so content between or around the markers never affects the
/// result.
///
/// # Errors
/// * `SpliceError::StartNotFound` - no line matches the start marker
/// * `SpliceError::EndNotFound` - no line after `start` matches the end marker
pub fn locate_range(
    lines: &[String],
    start_marker: &str,
    end_marker: &str,
) -> Result<Range, SpliceError> {
    let start = lines
        .iter()
        .position(|line| line.trim().starts_with(start_marker))
        .ok_or_else(|| SpliceError::StartNotFound(start_marker.to_string()))?;

    let end = lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, line)| line.trim().starts_with(end_marker))
        .map(|(idx, _)| idx)
        .ok_or_else(|| SpliceError::EndNotFound(end_marker.to_string()))?;

    Ok(Range { start, end })
}
