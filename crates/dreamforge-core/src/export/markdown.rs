//! Markdown exporter

use super::{render_markdown, DocumentExporter, ExportDocument};
use crate::error::DreamResult;

/// Exports the concept as a Markdown document
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExporter;

impl DocumentExporter for MarkdownExporter {
    fn export(&self, document: &ExportDocument<'_>) -> DreamResult<Vec<u8>> {
        Ok(render_markdown(document).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_concept;
    use crate::types::GameIdea;

    #[test]
    fn test_markdown_is_utf8_with_title() {
        let idea = GameIdea::new("a lucid dream");
        let concept = sample_concept();
        let bytes = MarkdownExporter
            .export(&ExportDocument::new(&idea, &concept))
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("# Game Design Document"));
        assert!(text.contains("**The Dreamer's Paradox**"));
    }
}
