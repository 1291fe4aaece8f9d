//! Draft document parsing.
//!
//! Turns the text of a JSON or TOML file into domain [`DraftSubmission`]s.
//!
//! # Document format
//!
//! A document holds one submission, a list of them, or a `drafts` table
//! array:
//!
//! ```toml
//! label = "mug"                      # optional; defaults to the file name
//!
//! [draft]
//! title         = "Ceramic Mug"
//! sku           = "MUG-350"
//! category_id   = "kitchen"
//! base_price    = 250                # numbers or numeric strings
//! compare_price = "300"
//! description   = "Stoneware, 350ml"
//!
//! [[auxiliary.simple_fields]]
//! key   = "Capacity"
//! value = "350ml"
//! ```
//!
//! The same shapes are accepted as JSON, where a top-level array is also a
//! list of submissions. camelCase keys (`basePrice`, `simpleFields`, ...)
//! are accepted as aliases.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use draftcheck_core::{
    application::ApplicationError,
    domain::{AuxiliaryData, DraftSubmission, ProductDraft},
    error::DraftcheckResult,
};

/// Supported document formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Extensions recognised when none are configured.
    pub const DEFAULT_EXTENSIONS: [&'static str; 2] = ["json", "toml"];

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Format of the file at `path`.
    pub fn from_path(path: &Path) -> DraftcheckResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::from_extension(extension).ok_or_else(|| {
            ApplicationError::UnsupportedFormat {
                location: path.display().to_string(),
                extension: extension.to_string(),
            }
            .into()
        })
    }
}

/// One submission as written in a document.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionDocument {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(alias = "product")]
    pub draft: ProductDraft,

    #[serde(default)]
    pub auxiliary: AuxiliaryData,
}

#[derive(Debug, Deserialize)]
struct BatchDocument {
    drafts: Vec<SubmissionDocument>,
}

#[derive(Debug, Error)]
enum ParseError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Toml(#[from] toml::de::Error),
}

/// Parse `content` and label each submission after `location`.
///
/// Unlabelled submissions are called `location` when the document holds a
/// single one, and `location#n` (1-based) otherwise.
pub fn parse_submissions(
    content: &str,
    format: DocumentFormat,
    location: &str,
) -> DraftcheckResult<Vec<DraftSubmission>> {
    let documents = match format {
        DocumentFormat::Json => parse_json(content),
        DocumentFormat::Toml => parse_toml(content),
    }
    .map_err(|e| ApplicationError::MalformedDocument {
        location: location.to_string(),
        reason: e.to_string(),
    })?;

    let single = documents.len() == 1;
    Ok(documents
        .into_iter()
        .enumerate()
        .map(|(index, doc)| {
            let label = match doc.label {
                Some(label) if !label.trim().is_empty() => label,
                _ if single => location.to_string(),
                _ => format!("{location}#{}", index + 1),
            };
            DraftSubmission::new(label, doc.draft, doc.auxiliary)
        })
        .collect())
}

fn parse_json(content: &str) -> Result<Vec<SubmissionDocument>, ParseError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let is_batch = value.get("drafts").is_some();

    let documents = if let serde_json::Value::Array(items) = value {
        items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()?
    } else if is_batch {
        serde_json::from_value::<BatchDocument>(value)?.drafts
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(documents)
}

fn parse_toml(content: &str) -> Result<Vec<SubmissionDocument>, ParseError> {
    let table: toml::Table = toml::from_str(content)?;

    let documents = if table.contains_key("drafts") {
        toml::from_str::<BatchDocument>(content)?.drafts
    } else {
        vec![toml::from_str(content)?]
    };
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftcheck_core::domain::{FormValidator, ProductField};
    use draftcheck_core::error::DraftcheckError;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.JSON")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("b.toml")).unwrap(),
            DocumentFormat::Toml
        );
        assert!(matches!(
            DocumentFormat::from_path(Path::new("notes.txt")),
            Err(DraftcheckError::Application(
                ApplicationError::UnsupportedFormat { .. }
            ))
        ));
    }

    #[test]
    fn single_json_document_takes_location_as_label() {
        let subs = parse_submissions(
            r#"{"draft":{"title":"Mug","basePrice":"250"},"auxiliary":{"simpleFields":["Capacity"]}}"#,
            DocumentFormat::Json,
            "mug.json",
        )
        .unwrap();

        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].label, "mug.json");
        assert_eq!(subs[0].draft.base_price_value(), Some(250.0));
        assert_eq!(subs[0].auxiliary.simple_fields.len(), 1);
    }

    #[test]
    fn json_array_labels_by_index() {
        let subs = parse_submissions(
            r#"[{"draft":{}},{"label":"second","draft":{}},{"product":{}}]"#,
            DocumentFormat::Json,
            "batch.json",
        )
        .unwrap();

        let labels: Vec<_> = subs.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["batch.json#1", "second", "batch.json#3"]);
    }

    #[test]
    fn json_drafts_key_is_a_batch() {
        let subs = parse_submissions(
            r#"{"drafts":[{"draft":{"title":"A"}},{"draft":{"title":"B"}}]}"#,
            DocumentFormat::Json,
            "b.json",
        )
        .unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[1].draft.title.as_deref(), Some("B"));
    }

    #[test]
    fn toml_single_document() {
        let content = r#"
label = "mug"

[draft]
title = "Ceramic Mug"
category_id = "kitchen"
base_price = 250
compare_price = "200"
description = "Stoneware"

[[auxiliary.simple_fields]]
key = "Capacity"
value = "350ml"
"#;
        let subs = parse_submissions(content, DocumentFormat::Toml, "mug.toml").unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].label, "mug");

        let errors = FormValidator::validate_submission(&subs[0]);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(ProductField::ComparePrice));
    }

    #[test]
    fn toml_drafts_array() {
        let content = r#"
[[drafts]]
[drafts.draft]
title = "One"

[[drafts]]
[drafts.draft]
title = "Two"
"#;
        let subs = parse_submissions(content, DocumentFormat::Toml, "many.toml").unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].label, "many.toml#1");
    }

    #[test]
    fn missing_draft_table_is_malformed() {
        let err = parse_submissions(r#"{"title":"Mug"}"#, DocumentFormat::Json, "x.json")
            .unwrap_err();
        assert!(matches!(
            err,
            DraftcheckError::Application(ApplicationError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn invalid_syntax_is_malformed() {
        assert!(parse_submissions("title = ", DocumentFormat::Toml, "x.toml").is_err());
        assert!(parse_submissions("{", DocumentFormat::Json, "x.json").is_err());
    }
}
