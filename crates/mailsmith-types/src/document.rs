/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

use crate::block::Blocks;

/// The top-level value handed to the renderer: document-wide settings
/// plus the ordered list of top-level blocks.
///
/// Both fields are optional on the wire. A document missing either one
/// renders to the empty string; this is the documented no-op contract
/// for partially saved editor state, not an error path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub settings: Option<Settings>,
    pub blocks: Option<Blocks>,
}

impl Document {
    /// Parse a document from the editor's JSON serialization.
    ///
    /// This is a convenience for callers holding serialized documents;
    /// the renderer itself only ever sees the in-memory value.
    pub fn from_json(input: &str) -> Result<Document, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Document-wide rendering parameters, applied uniformly to every
/// block during compilation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub font_family: String,
    pub background_color: String,
    /// Max width of the centered content column, in pixels.
    pub content_width: u32,
    /// Default color for links and accent elements.
    pub primary_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            background_color: "#f4f4f4".to_string(),
            content_width: 600,
            primary_color: "#2563eb".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_and_blocks_parse_as_none() {
        let doc = Document::from_json("{}").unwrap();
        assert!(doc.settings.is_none());
        assert!(doc.blocks.is_none());
    }

    #[test]
    fn settings_fields_take_defaults() {
        let doc = Document::from_json(r#"{"settings": {}, "blocks": []}"#).unwrap();
        let settings = doc.settings.unwrap();
        assert_eq!(settings.content_width, 600);
        assert!(!settings.font_family.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Document::from_json("{not json").is_err());
    }
}
