//! Inline span substitution for paragraph lines.
//!
//! Two spans are recognized: images `![alt](src)` and links `[text](href)`.
//! Images are replaced first. An image is a link with a leading `!`, so
//! running the link pass first would turn the image's brackets into an
//! anchor and leave a stray `!` behind.
//!
//! Each pass is a single left-to-right sweep over the line. The link pass
//! does see the output of the image pass, which is how `[![logo](a.png)](/)`
//! becomes a linked image.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// `alt` may be empty, `src` may not.
static RE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Replaces every image and link span in `line` with its HTML element.
///
/// Unmatched bracket syntax is left as literal text.
///
/// # Example
///
/// ```
/// use mdblog::convert::render_inline;
///
/// assert_eq!(
///     render_inline("see [docs](/docs)"),
///     "see <a href=\"/docs\">docs</a>"
/// );
/// ```
pub fn render_inline(line: &str) -> Cow<'_, str> {
    match replace_images(line) {
        Cow::Borrowed(unchanged) => replace_links(unchanged),
        Cow::Owned(with_images) => Cow::Owned(replace_links(&with_images).into_owned()),
    }
}

/// Replaces `![alt](src)` with `<img src="src" alt="alt">`.
pub fn replace_images(line: &str) -> Cow<'_, str> {
    RE_IMAGE.replace_all(line, r#"<img src="${2}" alt="${1}">"#)
}

/// Replaces `[text](href)` with `<a href="href">text</a>`.
pub fn replace_links(line: &str) -> Cow<'_, str> {
    RE_LINK.replace_all(line, r#"<a href="${2}">${1}</a>"#)
}
