//! Table exports: TSV text and the server-side export request.

use serde::{Deserialize, Serialize};

use crate::filters::FilterExpr;
use crate::uri::{StateParseError, decode_state, encode_query_pairs, encode_state, remove_empty_keys};

pub const EXPORT_CASES_ROUTE: &str = "/_export_cases";

/// Joins cells with tabs and rows with newlines. Tabs and line breaks
/// inside a cell become spaces.
pub fn rows_to_tsv(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.replace(['\t', '\n', '\r'], " ").trim().to_string())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `explore-case-table.2024-01-31.tsv`
pub fn tsv_filename(base: &str, date: &str) -> String {
    format!("{base}.{date}.tsv")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Tsv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Tsv => "tsv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Tsv => "text/tab-separated-values; charset=utf-8",
        }
    }
}

/// Query of `GET /_export_cases`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Encoded [`FilterExpr`].
    #[serde(default)]
    pub filters: Option<String>,
    /// Comma separated API fields.
    pub fields: String,
    #[serde(default)]
    pub sort: Option<String>,
}

impl ExportRequest {
    pub fn new(format: ExportFormat, filters: Option<&FilterExpr>, fields: &[String], sort: Option<String>) -> Self {
        Self {
            format,
            filters: filters.map(encode_state),
            fields: fields.join(","),
            sort,
        }
    }

    pub fn decode_filters(&self) -> Result<Option<FilterExpr>, StateParseError> {
        match self.filters.as_deref() {
            None | Some("") => Ok(None),
            Some(encoded) => decode_state(encoded).map(Some),
        }
    }

    pub fn field_list(&self) -> Vec<String> {
        self.fields
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn href(&self) -> String {
        let pairs = remove_empty_keys([
            ("format".to_string(), Some(self.format.as_str().to_string())),
            ("filters".to_string(), self.filters.clone()),
            ("fields".to_string(), Some(self.fields.clone())),
            ("sort".to_string(), self.sort.clone()),
        ]);
        format!("{EXPORT_CASES_ROUTE}?{}", encode_query_pairs(&pairs))
    }

    pub fn filename(&self, date: &str) -> String {
        format!("cases.{date}.{}", self.format.as_str())
    }
}
