//! Document export
//!
//! Serializes a generated concept, together with the idea it came from, into
//! a shareable document. Exporters only read the concept; a failed export
//! never touches the engine's outcome.
//!
//! | format   | exporter           | output                         |
//! |----------|--------------------|--------------------------------|
//! | markdown | [`MarkdownExporter`] | `.md` text                   |
//! | html     | [`HtmlExporter`]     | standalone `.html` page      |
//! | json     | [`JsonExporter`]     | pretty-printed `.json`       |
//! | pdf      | [`PdfExporter`]      | paginated A4 `.pdf`          |

mod html;
mod json;
mod markdown;
mod pdf;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::error::{DreamError, DreamResult};
use crate::types::{GameIdea, GeneratedConcept, GenerationOutcome};

pub use html::HtmlExporter;
pub use json::JsonExporter;
pub use markdown::MarkdownExporter;
pub use pdf::{PdfExporter, PdfFont, PdfLayout, PdfLine};

/// Title printed at the top of every exported document
pub const DOCUMENT_TITLE: &str = "Game Design Document";

/// What gets exported: the original idea and the five sections
#[derive(Debug, Clone, Copy)]
pub struct ExportDocument<'a> {
    pub idea: &'a GameIdea,
    pub concept: &'a GeneratedConcept,
}

impl<'a> ExportDocument<'a> {
    pub fn new(idea: &'a GameIdea, concept: &'a GeneratedConcept) -> Self {
        Self { idea, concept }
    }
}

impl<'a> From<&'a GenerationOutcome> for ExportDocument<'a> {
    fn from(outcome: &'a GenerationOutcome) -> Self {
        Self::new(&outcome.idea, &outcome.concept)
    }
}

/// A document serializer
pub trait DocumentExporter {
    /// Serialize the document to bytes
    fn export(&self, document: &ExportDocument<'_>) -> DreamResult<Vec<u8>>;
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Html,
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> DreamResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DreamError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }

    pub fn exporter(self) -> Box<dyn DocumentExporter> {
        match self {
            ExportFormat::Markdown => Box::new(MarkdownExporter),
            ExportFormat::Html => Box::new(HtmlExporter),
            ExportFormat::Json => Box::new(JsonExporter),
            ExportFormat::Pdf => Box::new(PdfExporter::default()),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "html" | "htm" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(DreamError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Export `document` in `format` and write it to `path`.
pub fn export_to_file(
    document: &ExportDocument<'_>,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> DreamResult<()> {
    let path = path.as_ref();
    let bytes = format.exporter().export(document)?;
    std::fs::write(path, &bytes)
        .map_err(|e| DreamError::Export(format!("{}: {}", path.display(), e)))?;
    info!(?path, %format, bytes = bytes.len(), "Exported concept");
    Ok(())
}

/// Markdown rendering shared by the Markdown and HTML exporters
pub(crate) fn render_markdown(document: &ExportDocument<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", DOCUMENT_TITLE));
    out.push_str("## Game Idea\n\n");
    out.push_str(&escape_markdown(document.idea.as_str()));
    out.push_str("\n\n");
    for (title, body) in document.concept.sections() {
        out.push_str(&format!("## {}\n\n{}\n\n", title, body.trim()));
    }
    out
}

/// Characters that carry Markdown or inline HTML meaning anywhere in a line
const MARKDOWN_SPECIAL: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '#', '|', '~', '&'];

/// Escape user text so it renders literally inside a Markdown document.
///
/// Leading indentation is dropped so a line can never become a code block.
pub(crate) fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.trim().lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let line = line.trim_start();
        // Ordered list markers: a run of digits followed by '.' or ')'
        let mut digits_only = true;
        for (j, c) in line.char_indices() {
            let list_marker = digits_only && j > 0 && matches!(c, '.' | ')');
            let block_marker = j == 0 && matches!(c, '-' | '+' | '=');
            if list_marker || block_marker || MARKDOWN_SPECIAL.contains(&c) {
                out.push('\\');
            }
            out.push(c);
            digits_only = digits_only && c.is_ascii_digit();
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content;

    pub(crate) fn sample_concept() -> GeneratedConcept {
        GeneratedConcept {
            plotline: content::PLOTLINE.to_string(),
            world_map: content::WORLD_MAP_HORROR.to_string(),
            art_style: content::ART_STYLE_DEFAULT.to_string(),
            game_loop: content::GAME_LOOP.to_string(),
            ui_sketches: content::UI_SKETCHES.to_string(),
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!(matches!(
            "docx".parse::<ExportFormat>(),
            Err(DreamError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/concept.html")).unwrap(),
            ExportFormat::Html
        );
        assert!(ExportFormat::from_path(Path::new("concept")).is_err());
    }

    #[test]
    fn test_markdown_section_order() {
        let idea = GameIdea::new("a scary lighthouse");
        let concept = sample_concept();
        let md = render_markdown(&ExportDocument::new(&idea, &concept));

        let positions: Vec<usize> = ["## Game Idea", "## Plotline", "## World Map", "## Art Style", "## Game Loop", "## UI Sketches"]
            .iter()
            .map(|h| md.find(h).expect("heading present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(md.contains("a scary lighthouse"));
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("a <b> & c"), "a \\<b\\> \\& c");
        assert_eq!(escape_markdown("## Plotline"), "\\#\\# Plotline");
        assert_eq!(escape_markdown("1. first\n- second"), "1\\. first\n\\- second");
        assert_eq!(escape_markdown("    indented code"), "indented code");
        assert_eq!(escape_markdown("plain words, 3 of them."), "plain words, 3 of them.");
    }

    #[test]
    fn test_idea_cannot_add_sections() {
        let idea = GameIdea::new("## Plotline\nfake");
        let concept = sample_concept();
        let md = render_markdown(&ExportDocument::new(&idea, &concept));

        assert_eq!(md.lines().filter(|l| *l == "## Plotline").count(), 1);
        assert!(md.contains("\\#\\# Plotline\nfake"));
    }

    #[test]
    fn test_export_to_file_writes_every_format() {
        let dir = tempfile::tempdir().unwrap();
        let idea = GameIdea::new("ocean ruins");
        let concept = sample_concept();
        let document = ExportDocument::new(&idea, &concept);

        for format in [
            ExportFormat::Markdown,
            ExportFormat::Html,
            ExportFormat::Json,
            ExportFormat::Pdf,
        ] {
            let path = dir.path().join(format!("concept.{}", format.extension()));
            export_to_file(&document, format, &path).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let idea = GameIdea::new("ocean ruins");
        let concept = sample_concept();
        let document = ExportDocument::new(&idea, &concept);

        let path = dir.path().join("missing").join("concept.md");
        let err = export_to_file(&document, ExportFormat::Markdown, &path).unwrap_err();
        assert!(matches!(err, DreamError::Export(_)));
    }
}
