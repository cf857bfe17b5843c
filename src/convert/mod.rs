//! Markdown to HTML conversion.
//!
//! The converter is a pure function of its input: no I/O, no shared state,
//! and no failure mode. Malformed syntax is rendered as literal text.

mod html;
mod inline;
mod line;
mod options;

pub use html::{BlockState, HtmlRenderer, Step};
pub use inline::{render_inline, replace_images, replace_links};
pub use line::{
    classify_line, is_fence_close, split_lines, LineKind, FENCE, LIST_ITEM_PREFIX, MAX_HEADING_LEVEL,
};
pub use options::ConvertOptions;

use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Converts a Markdown document to HTML with default options.
///
/// # Example
///
/// ```
/// let html = mdblog::convert("# Title\n- a\n- b\nDone.");
/// assert_eq!(
///     html,
///     "<h1>Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>Done.</p>\n"
/// );
/// ```
pub fn convert(markdown: &str) -> String {
    HtmlRenderer::default().render(markdown)
}

/// Converts a Markdown document to HTML with custom options.
pub fn convert_with_options(markdown: &str, options: &ConvertOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(markdown)
}

/// Converts a Markdown file and returns the HTML.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn convert_file(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(convert_with_options(&String::from_utf8_lossy(&bytes), options))
}

/// Converts a Markdown document and writes the HTML to a writer.
pub fn convert_to_writer<W: Write>(
    markdown: &str,
    writer: &mut W,
    options: &ConvertOptions,
) -> Result<()> {
    let html = convert_with_options(markdown, options);
    writer.write_all(html.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_matches_default_renderer() {
        let input = "# t\ntext\n";
        assert_eq!(
            convert(input),
            convert_with_options(input, &ConvertOptions::default())
        );
    }

    #[test]
    fn test_convert_to_writer() {
        let mut buffer = Vec::new();
        convert_to_writer("hi", &mut buffer, &ConvertOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "<p>hi</p>\n");
    }

    #[test]
    fn test_convert_file_missing() {
        let result = convert_file("does/not/exist.md", &ConvertOptions::default());
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        std::fs::write(&path, "## Hello\n").unwrap();

        let html = convert_file(&path, &ConvertOptions::default()).unwrap();
        assert_eq!(html, "<h2>Hello</h2>\n");
    }

    #[test]
    fn test_convert_file_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.md");
        std::fs::write(&path, b"caf\xE9\n").unwrap();

        let html = convert_file(&path, &ConvertOptions::default()).unwrap();
        assert_eq!(html, "<p>caf\u{FFFD}</p>\n");
    }
}
