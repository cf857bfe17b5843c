//! # mdblog
//!
//! A small static blog generator. Converts a directory of Markdown pages
//! into standalone HTML pages and an index page linking them all.
//!
//! ## Supported Markdown
//!
//! - **Headings**: `#` to `######` followed by a space
//! - **Code blocks**: fenced with three backticks, content HTML-escaped
//! - **Lists**: consecutive lines starting with `- `
//! - **Paragraphs**: every other line, with inline `![alt](src)` images and
//!   `[text](href)` links
//!
//! Each non-blank line outside a block becomes its own element; a blank
//! line becomes `<p></p>`.
//!
//! ## Quick Start
//!
//! ```
//! let html = mdblog::convert("# Hello\nSee [the docs](docs.html).\n");
//! assert_eq!(
//!     html,
//!     "<h1>Hello</h1>\n<p>See <a href=\"docs.html\">the docs</a>.</p>\n"
//! );
//! ```
//!
//! Building a whole site:
//!
//! ```no_run
//! use mdblog::{build_site, SiteConfig};
//!
//! fn main() -> mdblog::Result<()> {
//!     let config = SiteConfig::rooted_at("./blog").with_out_dir("./public");
//!     let report = build_site(&config)?;
//!     println!("{} pages generated", report.pages.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): convert documents in parallel with rayon

pub mod convert;
pub mod error;
pub mod escape;
pub mod site;

// Re-exports
pub use convert::{convert, convert_file, convert_with_options, ConvertOptions, HtmlRenderer};
pub use error::{Error, Result};
pub use escape::escape_html;
pub use site::{build_site, BuildReport, FileSystem, SiteBuilder, SiteConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_document() {
        let input = "\
# Title
Intro with ![pic](p.png) and [link](l.html).

## Code
```
if a < b && c > d {}
```
- one
- two
Trailing line
";
        let expected = "\
<h1>Title</h1>
<p>Intro with <img src=\"p.png\" alt=\"pic\"> and <a href=\"l.html\">link</a>.</p>
<p></p>
<h2>Code</h2>
<pre><code>if a &lt; b &amp;&amp; c &gt; d {}
</code></pre>
<ul>
<li>one</li>
<li>two</li>
</ul>
<p>Trailing line</p>
";
        assert_eq!(convert(input), expected);
    }

    #[test]
    fn test_escape_examples() {
        assert_eq!(escape_html("<a>&\"'"), "&lt;a&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn test_heading_priority() {
        assert_eq!(convert("###### x"), "<h6>x</h6>\n");
    }

    #[test]
    fn test_empty_line_and_empty_input() {
        assert_eq!(convert(""), "");
        assert_eq!(convert("\n"), "<p></p>\n");
    }

    #[test]
    fn test_image_before_link() {
        assert_eq!(
            convert("![alt](img.png)"),
            "<p><img src=\"img.png\" alt=\"alt\"></p>\n"
        );
    }

    #[test]
    fn test_windows_line_endings_kept_in_content() {
        assert_eq!(convert("a\r\n"), "<p>a\r</p>\n");
        // A fence line with a carriage return does not close the block.
        assert_eq!(
            convert("```\r\nx\r\n```\r\n"),
            "<pre><code>x\r\n```\r\n</code></pre>\n"
        );
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(
            convert("## Café ☕\n- ünïcödé"),
            "<h2>Café ☕</h2>\n<ul>\n<li>ünïcödé</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_site_config_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.document_extension, "md");
        assert_eq!(config.index_name, "blog.html");
        assert!(!config.convert.escape_text);
    }
}
