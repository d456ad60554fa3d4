//! JSON exporter

use serde::Serialize;

use super::{DocumentExporter, ExportDocument, DOCUMENT_TITLE};
use crate::error::{DreamError, DreamResult};
use crate::types::GeneratedConcept;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    title: &'static str,
    exported_at: String,
    game_idea: &'a str,
    concept: &'a GeneratedConcept,
}

/// Exports the concept as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl DocumentExporter for JsonExporter {
    fn export(&self, document: &ExportDocument<'_>) -> DreamResult<Vec<u8>> {
        let json = JsonDocument {
            title: DOCUMENT_TITLE,
            exported_at: chrono::Utc::now().to_rfc3339(),
            game_idea: document.idea.as_str(),
            concept: document.concept,
        };
        encode_pretty(&json)
    }
}

fn encode_pretty<T: Serialize>(value: &T) -> DreamResult<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| DreamError::Export(format!("JSON: {}", e)))
}
