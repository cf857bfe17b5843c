//! HTML renderer implementation.

use super::inline::render_inline;
use super::line::{classify_line, is_fence_close, split_lines, LineKind, LIST_ITEM_PREFIX};
use super::ConvertOptions;
use crate::escape::escape_html;

use std::borrow::Cow;

/// Block the renderer is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    /// Between blocks; the next line is classified from scratch.
    #[default]
    Default,
    /// Inside a fenced code block, waiting for a closing fence.
    InCodeBlock,
    /// Inside an unordered list, collecting consecutive `- ` lines.
    InListBlock,
}

/// Result of feeding one line to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// State after this line.
    pub next: BlockState,
    /// Whether the line was used up. A list hands back the first line that
    /// does not belong to it so it can be classified again.
    pub consumed: bool,
}

impl Step {
    fn consume(next: BlockState) -> Self {
        Self {
            next,
            consumed: true,
        }
    }

    fn reprocess(next: BlockState) -> Self {
        Self {
            next,
            consumed: false,
        }
    }
}

/// Markdown to HTML renderer.
///
/// Holds no per-document state, so one renderer can be shared across
/// threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: ConvertOptions,
}

impl HtmlRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Returns the options this renderer was built with.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Renders a Markdown document to an HTML fragment string.
    pub fn render(&self, markdown: &str) -> String {
        let lines = split_lines(markdown);
        let mut output = String::with_capacity(markdown.len() + markdown.len() / 2);
        let mut state = BlockState::Default;
        let mut cursor = 0;

        while let Some(line) = lines.get(cursor) {
            let step = self.step(state, line, &mut output);
            state = step.next;
            if step.consumed {
                cursor += 1;
            }
        }

        self.finish(state, &mut output);

        log::trace!("rendered {} lines into {} bytes", lines.len(), output.len());
        output
    }

    /// Feeds one line to the renderer in `state`, appending any output.
    pub fn step(&self, state: BlockState, line: &str, output: &mut String) -> Step {
        match state {
            BlockState::Default => self.step_default(line, output),
            BlockState::InCodeBlock => {
                if is_fence_close(line) {
                    output.push_str("</code></pre>\n");
                    return Step::consume(BlockState::Default);
                }
                output.push_str(&escape_html(line));
                output.push('\n');
                Step::consume(BlockState::InCodeBlock)
            }
            BlockState::InListBlock => match line.strip_prefix(LIST_ITEM_PREFIX) {
                Some(item) => {
                    output.push_str("<li>");
                    output.push_str(&self.text(item));
                    output.push_str("</li>\n");
                    Step::consume(BlockState::InListBlock)
                }
                None => {
                    output.push_str("</ul>\n");
                    Step::reprocess(BlockState::Default)
                }
            },
        }
    }

    /// Closes whatever block is still open at end of input.
    ///
    /// An unterminated code fence still gets its closing tags.
    pub fn finish(&self, state: BlockState, output: &mut String) {
        match state {
            BlockState::Default => {}
            BlockState::InCodeBlock => output.push_str("</code></pre>\n"),
            BlockState::InListBlock => output.push_str("</ul>\n"),
        }
    }

    fn step_default(&self, line: &str, output: &mut String) -> Step {
        let kind = classify_line(line);
        log::debug!("classified line as {kind:?}");
        match kind {
            LineKind::Blank => {
                output.push_str("<p></p>\n");
                Step::consume(BlockState::Default)
            }
            LineKind::Heading { level, text } => {
                output.push_str(&format!("<h{level}>{}</h{level}>\n", self.text(text)));
                Step::consume(BlockState::Default)
            }
            LineKind::FenceStart => {
                output.push_str("<pre><code>");
                Step::consume(BlockState::InCodeBlock)
            }
            LineKind::ListItem(_) => {
                // The list state renders this same line as its first item.
                output.push_str("<ul>\n");
                Step::reprocess(BlockState::InListBlock)
            }
            LineKind::Paragraph(text) => {
                let text = self.text(text);
                output.push_str("<p>");
                output.push_str(&render_inline(&text));
                output.push_str("</p>\n");
                Step::consume(BlockState::Default)
            }
        }
    }

    /// Text outside code blocks, escaped only when configured.
    fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.escape_text {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}
