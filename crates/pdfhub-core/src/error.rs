// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for PDF Hub.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for all PDF Hub operations.
#[derive(Debug, Error)]
pub enum PdfHubError {
    // -- Input validation --
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid range: {token} in \"{expression}\" ({reason}; PDF has {total_pages} pages)")]
    InvalidRange {
        expression: String,
        token: String,
        reason: String,
        total_pages: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // -- Codec errors --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- UI shell --
    #[error("{0}")]
    Cancelled(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Coarse classification of a [`PdfHubError`], carried across the UI boundary
/// alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An input path does not exist.
    NotFound,
    /// A page range or other caller-supplied value was rejected.
    Validation,
    /// A codec, filesystem, or platform failure.
    Processing,
    /// The user dismissed a dialog.
    Cancelled,
}

impl PdfHubError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidRange { .. } | Self::InvalidInput(_) => ErrorKind::Validation,
            Self::Cancelled(_) => ErrorKind::Cancelled,
            Self::PdfError(_)
            | Self::ImageError(_)
            | Self::Io(_)
            | Self::Serialization(_)
            | Self::PlatformUnavailable => ErrorKind::Processing,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PdfHubError>;
