// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Flat response shape handed back to the front end.
//
// Success carries an operation-specific payload plus a message; failure
// carries the error message and its kind. Absent fields are omitted from the
// serialised JSON.

use std::path::{Path, PathBuf};

use pdfhub_core::error::{ErrorKind, PdfHubError};
use pdfhub_core::types::{Artifact, CompressionReport, DocumentInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressed_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

impl BridgeResponse {
    /// A successful response carrying `artifact`.
    pub fn success(artifact: Artifact, message: impl Into<String>) -> Self {
        let mut response = Self {
            success: true,
            message: Some(message.into()),
            ..Self::default()
        };
        match artifact {
            Artifact::Document(path) => response.output = Some(display(&path)),
            Artifact::Documents(paths) => {
                response.files = Some(paths.iter().map(|p| display(p)).collect())
            }
            Artifact::Text(text) => response.text = Some(text),
        }
        response
    }

    /// A successful compression, with sizes and the reduction rounded to one
    /// decimal place.
    pub fn compressed(report: &CompressionReport, message: impl Into<String>) -> Self {
        Self {
            original_size: Some(report.original_size),
            compressed_size: Some(report.compressed_size),
            reduction_percent: Some((report.reduction_percent * 10.0).round() / 10.0),
            ..Self::success(Artifact::Document(report.output.clone()), message)
        }
    }

    pub fn info(info: DocumentInfo) -> Self {
        Self {
            success: true,
            page_count: Some(info.page_count),
            file_size: Some(info.file_size),
            ..Self::default()
        }
    }

    pub fn saved(path: PathBuf) -> Self {
        Self {
            success: true,
            path: Some(display(&path)),
            ..Self::default()
        }
    }

    /// Flatten an error into `{success: false, error, error_kind}`.
    pub fn failure(err: &PdfHubError) -> Self {
        Self {
            success: false,
            error: Some(err.to_string()),
            error_kind: Some(err.kind()),
            ..Self::default()
        }
    }

    /// A request turned away before reaching the service.
    pub fn rejected(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            error_kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
