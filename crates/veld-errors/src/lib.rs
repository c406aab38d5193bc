//! Diagnostics reported while parsing veld source text.

use annotate_snippets::{Level, Renderer, Snippet};
use text_size::TextRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self { message: message.into(), range }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Renders the diagnostic against the source it was reported for.
    pub fn render(&self, origin: &str, source: &str) -> String {
        let start = usize::from(self.range.start()).min(source.len());
        let end = usize::from(self.range.end()).min(source.len());

        let message = Level::Error.title(self.message()).snippet(
            Snippet::source(source)
                .origin(origin)
                .fold(true)
                .annotation(Level::Error.span(start..end)),
        );

        Renderer::plain().render(message).to_string()
    }
}
