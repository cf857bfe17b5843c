//! Template marker substitution.
//!
//! Templates are plain HTML files with literal marker elements. Every
//! occurrence of a marker is replaced; the replacement text is inserted
//! as-is.

/// Marker replaced by a page's converted HTML.
pub const POST_MARKER: &str = "<BlogPost></BlogPost>";

/// Marker replaced by the list of generated pages.
pub const LIST_MARKER: &str = "<BlogList></BlogList>";

/// Fills a page template with converted HTML.
pub fn render_post(template: &str, html: &str) -> String {
    template.replace(POST_MARKER, html)
}

/// Builds the `<ul>` linking every generated page. Each entry is used as
/// both the link target and its text.
///
/// # Example
///
/// ```
/// use mdblog::site::index_list;
///
/// assert_eq!(
///     index_list(&["a.html"]),
///     "<ul>\n<li><a href=\"a.html\">a.html</a></li>\n</ul>\n"
/// );
/// ```
pub fn index_list<S: AsRef<str>>(names: &[S]) -> String {
    let mut output = String::from("<ul>\n");
    for name in names {
        let name = name.as_ref();
        output.push_str(&format!("<li><a href=\"{name}\">{name}</a></li>\n"));
    }
    output.push_str("</ul>\n");
    output
}

/// Fills the index template with the list of generated pages.
pub fn render_index<S: AsRef<str>>(template: &str, names: &[S]) -> String {
    template.replace(LIST_MARKER, &index_list(names))
}
