//! Line splitting and block-level line classification.

/// Marker that opens a code block (as a prefix) and closes it (as a whole line).
pub const FENCE: &str = "```";

/// Prefix of an unordered list item.
pub const LIST_ITEM_PREFIX: &str = "- ";

/// Deepest heading level recognized.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Block-level meaning of a single line, judged only by how it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty line.
    Blank,
    /// `#` to `######` followed by a space. `text` is everything after the space.
    Heading { level: u8, text: &'a str },
    /// Line starting with three backticks. Anything after them is ignored.
    FenceStart,
    /// Line starting with `- `. Holds the text after the marker.
    ListItem(&'a str),
    /// Anything else.
    Paragraph(&'a str),
}

/// Classifies a line.
///
/// Checks run in a fixed order: blank, heading (six `#` down to one),
/// fence, list item, paragraph. A run of seven or more `#` is not a heading.
///
/// # Example
///
/// ```
/// use mdblog::convert::{classify_line, LineKind};
///
/// assert_eq!(
///     classify_line("###### x"),
///     LineKind::Heading { level: 6, text: "x" }
/// );
/// assert_eq!(classify_line("- item"), LineKind::ListItem("item"));
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some((level, text)) = heading(line) {
        return LineKind::Heading { level, text };
    }

    if line.starts_with(FENCE) {
        return LineKind::FenceStart;
    }

    if let Some(text) = line.strip_prefix(LIST_ITEM_PREFIX) {
        return LineKind::ListItem(text);
    }

    LineKind::Paragraph(line)
}

/// Returns the heading level and text when `line` opens with 1-6 `#` and a space.
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL as usize {
        return None;
    }

    line[hashes..]
        .strip_prefix(' ')
        .map(|text| (hashes as u8, text))
}

/// Returns true if `line` closes an open code block.
pub fn is_fence_close(line: &str) -> bool {
    line == FENCE
}

/// Splits a document into lines on `\n`.
///
/// A single trailing newline does not produce an extra empty line, and empty
/// input yields no lines at all. Carriage returns are kept as line content.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    text.strip_suffix('\n').unwrap_or(text).split('\n').collect()
}
