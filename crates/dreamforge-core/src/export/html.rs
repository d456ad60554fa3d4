//! HTML exporter
//!
//! Renders the Markdown document with pulldown-cmark and wraps it in a
//! minimal standalone page.

use pulldown_cmark::{html, Options, Parser};

use super::{render_markdown, DocumentExporter, ExportDocument, DOCUMENT_TITLE};
use crate::error::DreamResult;

const STYLE: &str = "body{font-family:sans-serif;max-width:48em;margin:2em auto;line-height:1.5;}h2{border-bottom:1px solid #ccc;}";

/// Exports the concept as a standalone HTML page
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExporter;

impl HtmlExporter {
    /// Convert markdown to an HTML fragment
    pub fn render_fragment(markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);

        let parser = Parser::new_ext(markdown, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl DocumentExporter for HtmlExporter {
    fn export(&self, document: &ExportDocument<'_>) -> DreamResult<Vec<u8>> {
        let body = Self::render_fragment(&render_markdown(document));
        let page = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            DOCUMENT_TITLE, STYLE, body
        );
        Ok(page.into_bytes())
    }
}
