// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for PDF Hub operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PdfHubError, Result};

/// Unique identifier for a single operation invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationId(pub Uuid);

impl OperationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five document operations plus the info lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Merge,
    Split,
    Compress,
    ImagesToDocument,
    ExtractText,
    Inspect,
}

impl OperationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Split => "split",
            Self::Compress => "compress",
            Self::ImagesToDocument => "images_to_document",
            Self::ExtractText => "extract_text",
            Self::Inspect => "inspect",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Artifact {
    Document(PathBuf),
    Documents(Vec<PathBuf>),
    Text(String),
}

/// Outcome of a structural rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionReport {
    pub output: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
    /// Positive when the output shrank, negative when it grew.
    pub reduction_percent: f64,
}

impl CompressionReport {
    pub fn new(output: PathBuf, original_size: u64, compressed_size: u64) -> Result<Self> {
        let reduction_percent = reduction_percent(original_size, compressed_size)?;
        Ok(Self {
            output,
            original_size,
            compressed_size,
            reduction_percent,
        })
    }
}

/// Percentage size change from `original` to `compressed`.
///
/// A zero-byte original has no meaningful ratio and is rejected.
pub fn reduction_percent(original: u64, compressed: u64) -> Result<f64> {
    if original == 0 {
        return Err(PdfHubError::InvalidInput(
            "cannot compute size reduction for a zero-byte original".into(),
        ));
    }
    Ok((original as f64 - compressed as f64) / original as f64 * 100.0)
}

/// Page count and on-disk size of an existing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub page_count: usize,
    pub file_size: u64,
}
