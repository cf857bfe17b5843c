//! HTML escaping for text placed inside generated markup.

use std::borrow::Cow;

/// Escape the five HTML-significant characters in `text`.
///
/// `&` becomes `&amp;`, `<` becomes `&lt;`, `>` becomes `&gt;`, `"` becomes
/// `&quot;` and `'` becomes `&#39;`. Every other character is left alone.
/// Each input character is visited once, so an ampersand produced by one
/// replacement is never escaped again.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use mdblog::escape_html;
///
/// assert_eq!(escape_html("<a>&\"'"), "&lt;a&gt;&amp;&quot;&#39;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(needs_escape) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() + text.len() / 8 + 8);
    result.push_str(&text[..first]);

    for c in text[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}
