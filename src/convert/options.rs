//! Options for HTML conversion.

/// Options for Markdown to HTML conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Whether to HTML-escape heading, list item and paragraph text.
    ///
    /// Code block content is always escaped. When this is off (the default)
    /// all other text is emitted verbatim, so raw HTML written in a page
    /// passes straight through to the output.
    pub escape_text: bool,
}

impl ConvertOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Escapes text outside code blocks as well.
    pub fn with_escaped_text(mut self) -> Self {
        self.escape_text = true;
        self
    }

    /// Sets whether text outside code blocks is escaped.
    pub fn with_escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_verbatim() {
        assert!(!ConvertOptions::default().escape_text);
    }

    #[test]
    fn test_builder() {
        assert!(ConvertOptions::new().with_escaped_text().escape_text);
        assert!(!ConvertOptions::new()
            .with_escaped_text()
            .with_escape_text(false)
            .escape_text);
    }
}
