// Threat Telemetry - Export
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Serialization of the event log into downloadable artifacts.
//!
//! The delimited formats write values verbatim: commas or line breaks inside
//! a value are not quoted or escaped, so every row has the header's field
//! count only while values stay free of delimiters.

use std::fmt;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Base name shared by every artifact.
const FILE_STEM: &str = "threat_data";

/// Row terminator for the delimited formats.
const ROW_END: &str = "\r\n";

/// Supported artifact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON array.
    Json,
    /// Comma-separated text.
    Csv,
    /// Comma-separated text served under a spreadsheet content type.
    Spreadsheet,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Json, Self::Csv, Self::Spreadsheet];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Spreadsheet => "xls",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv;charset=utf-8;",
            Self::Spreadsheet => "application/vnd.ms-excel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
            Self::Spreadsheet => "Excel",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", FILE_STEM, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A serialized export ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Ready(ExportArtifact),
    /// Nothing to export; no artifact was produced.
    NoData,
}

impl ExportOutcome {
    pub fn artifact(self) -> Option<ExportArtifact> {
        match self {
            Self::Ready(artifact) => Some(artifact),
            Self::NoData => None,
        }
    }
}

/// Serialize `records` in `format`.
///
/// An empty slice yields [`ExportOutcome::NoData`].
pub fn export<T: Serialize>(records: &[T], format: ExportFormat) -> Result<ExportOutcome> {
    if records.is_empty() {
        debug!("Export requested with no data ({})", format);
        return Ok(ExportOutcome::NoData);
    }

    let bytes = match format {
        ExportFormat::Json => to_json(records)?,
        ExportFormat::Csv | ExportFormat::Spreadsheet => to_delimited(records)?.into_bytes(),
    };

    debug!("Exported {} records as {} ({} bytes)", records.len(), format, bytes.len());

    Ok(ExportOutcome::Ready(ExportArtifact {
        format,
        file_name: format.file_name(),
        content_type: format.content_type(),
        bytes,
    }))
}

/// Pretty-printed JSON array with two-space indentation.
pub fn to_json<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(records).context("Failed to serialize records as JSON")
}

/// Comma-separated text with a header taken from the first record's keys.
pub fn to_delimited<T: Serialize>(records: &[T]) -> Result<String> {
    let rows = records
        .iter()
        .map(|record| match serde_json::to_value(record) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => bail!("Expected an object record, got {}", other),
            Err(e) => Err(e).context("Failed to serialize record"),
        })
        .collect::<Result<Vec<_>>>()?;

    let Some(first) = rows.first() else {
        return Ok(String::new());
    };
    let keys: Vec<&String> = first.keys().collect();

    let mut out = String::new();
    out.push_str(&keys.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(","));
    out.push_str(ROW_END);

    for row in &rows {
        let line = keys
            .iter()
            .map(|key| row.get(key.as_str()).map(raw_field).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push_str(ROW_END);
    }

    Ok(out)
}

/// Stringify a value as-is: strings unquoted, everything else in JSON notation.
fn raw_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
