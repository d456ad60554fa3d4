//! PDF exporter
//!
//! Lays the document out as wrapped lines of text on A4 pages using the
//! standard Helvetica fonts, then writes the pages with lopdf. Layout is a
//! pure function of the document so pagination can be tested without
//! parsing the PDF back.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::{DocumentExporter, ExportDocument, DOCUMENT_TITLE};
use crate::error::{DreamError, DreamResult};

/// Font used for a laid-out line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFont {
    Regular,
    Bold,
}

impl PdfFont {
    fn resource_name(self) -> &'static str {
        match self {
            PdfFont::Regular => "F1",
            PdfFont::Bold => "F2",
        }
    }
}

/// One positioned line of text
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLine {
    pub text: String,
    pub font: PdfFont,
    pub size: i64,
    pub x: i64,
    pub y: i64,
}

/// Page geometry and type sizes (PDF points)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfLayout {
    pub page_width: i64,
    pub page_height: i64,
    pub margin: i64,
    pub title_size: i64,
    pub heading_size: i64,
    pub body_size: i64,
}

impl Default for PdfLayout {
    /// A4 portrait
    fn default() -> Self {
        Self {
            page_width: 595,
            page_height: 842,
            margin: 50,
            title_size: 20,
            heading_size: 14,
            body_size: 10,
        }
    }
}

impl PdfLayout {
    /// Check that every type size is positive
    pub fn validate(&self) -> DreamResult<()> {
        for (name, size) in [
            ("title", self.title_size),
            ("heading", self.heading_size),
            ("body", self.body_size),
        ] {
            if size <= 0 {
                return Err(DreamError::Export(format!(
                    "PDF {} size must be positive, got {}",
                    name, size
                )));
            }
        }
        Ok(())
    }

    fn line_height(size: i64) -> i64 {
        size.max(1) * 3 / 2
    }

    /// Characters per line for a font size, assuming Helvetica's average
    /// glyph width of half the font size
    fn max_chars(&self, size: i64) -> usize {
        let size = size.max(1);
        let usable = (self.page_width - 2 * self.margin).max(size);
        ((usable * 2) / size).max(1) as usize
    }
}

/// Exports the concept as a paginated PDF
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter {
    pub layout: PdfLayout,
}

/// A line before pagination
struct Block {
    text: String,
    font: PdfFont,
    size: i64,
    /// Extra space above the line
    gap_before: i64,
}

impl PdfExporter {
    pub fn new(layout: PdfLayout) -> DreamResult<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    /// Lay the document out into pages of positioned lines.
    pub fn layout_pages(&self, document: &ExportDocument<'_>) -> Vec<Vec<PdfLine>> {
        let layout = &self.layout;
        let mut blocks = Vec::new();

        blocks.push(Block {
            text: DOCUMENT_TITLE.to_string(),
            font: PdfFont::Bold,
            size: layout.title_size,
            gap_before: 0,
        });
        self.push_section(&mut blocks, "Game Idea", document.idea.as_str());
        for (title, body) in document.concept.sections() {
            self.push_section(&mut blocks, title, body);
        }

        let top = layout.page_height - layout.margin;
        let mut pages: Vec<Vec<PdfLine>> = vec![Vec::new()];
        let mut y = top;

        for block in blocks {
            let line_height = PdfLayout::line_height(block.size);
            // Gaps are dropped at the top of a page
            let mut advance = if y == top { line_height } else { block.gap_before + line_height };
            if y - advance < layout.margin {
                pages.push(Vec::new());
                y = top;
                advance = line_height;
            }
            y -= advance;

            if let Some(page) = pages.last_mut() {
                page.push(PdfLine {
                    text: block.text,
                    font: block.font,
                    size: block.size,
                    x: layout.margin,
                    y,
                });
            }
        }

        pages
    }

    fn push_section(&self, blocks: &mut Vec<Block>, title: &str, body: &str) {
        let layout = &self.layout;
        blocks.push(Block {
            text: title.to_string(),
            font: PdfFont::Bold,
            size: layout.heading_size,
            gap_before: layout.heading_size,
        });

        let mut pending_gap = 0;
        for raw in body.trim().lines() {
            if raw.trim().is_empty() {
                pending_gap = layout.body_size / 2;
                continue;
            }
            let trimmed = raw.trim();
            let bold = trimmed.starts_with("**") && trimmed.ends_with("**") && trimmed.len() > 4;
            let text = to_pdf_text(&raw.trim_end().replace("**", ""));
            let font = if bold { PdfFont::Bold } else { PdfFont::Regular };

            for (i, line) in wrap(&text, layout.max_chars(layout.body_size)).into_iter().enumerate() {
                blocks.push(Block {
                    text: line,
                    font,
                    size: layout.body_size,
                    gap_before: if i == 0 { pending_gap } else { 0 },
                });
            }
            pending_gap = 0;
        }
    }

    fn write_pdf(&self, pages: &[Vec<PdfLine>]) -> DreamResult<Vec<u8>> {
        let layout = &self.layout;
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for (index, lines) in pages.iter().enumerate() {
            let mut operations = Vec::new();
            for line in lines {
                push_text(&mut operations, line);
            }
            push_text(
                &mut operations,
                &PdfLine {
                    text: format!("Page {}", index + 1),
                    font: PdfFont::Regular,
                    size: 8,
                    x: layout.page_width - layout.margin - 30,
                    y: layout.margin / 2,
                },
            );

            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| DreamError::Export(format!("PDF content: {}", e)))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(layout.page_width),
                Object::Integer(layout.page_height),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| DreamError::Export(format!("PDF write: {}", e)))?;
        Ok(bytes)
    }
}

impl DocumentExporter for PdfExporter {
    fn export(&self, document: &ExportDocument<'_>) -> DreamResult<Vec<u8>> {
        self.layout.validate()?;
        let pages = self.layout_pages(document);
        self.write_pdf(&pages)
    }
}

fn push_text(operations: &mut Vec<Operation>, line: &PdfLine) {
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![line.font.resource_name().into(), Object::Integer(line.size)],
    ));
    operations.push(Operation::new(
        "Td",
        vec![Object::Integer(line.x), Object::Integer(line.y)],
    ));
    operations.push(Operation::new(
        "Tj",
        vec![Object::string_literal(line.text.as_str())],
    ));
    operations.push(Operation::new("ET", vec![]));
}

/// Replace characters the standard fonts cannot encode
fn to_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2192}' => out.push_str("->"),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            '\t' => out.push_str("    "),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Greedy word wrap keeping the line's leading indentation
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let indent_len = text.len() - text.trim_start().len();
    let indent = &text[..indent_len];
    let mut lines = Vec::new();
    let mut current = String::from(indent);

    for word in text.split_whitespace() {
        let candidate_len = if current.len() == indent_len {
            current.len() + word.len()
        } else {
            current.len() + 1 + word.len()
        };
        if candidate_len > max_chars && current.len() > indent_len {
            lines.push(std::mem::replace(&mut current, String::from(indent)));
        }
        if current.len() > indent_len {
            current.push(' ');
        }
        current.push_str(word);
    }
    if current.len() > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}
