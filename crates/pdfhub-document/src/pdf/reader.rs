// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — open existing PDF documents, enumerate their pages, and pull
// per-page text using the `lopdf` crate.

use std::path::Path;

use lopdf::{Document, ObjectId};
use pdfhub_core::error::{PdfHubError, Result};
use tracing::{debug, info, instrument};

/// Read-only view of an existing PDF file.
///
/// Wraps `lopdf::Document`. Pages are addressed by 1-based page number, the
/// same numbering used in page-range expressions.
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
    /// Source path, if opened from a file (useful for diagnostics).
    source_path: Option<String>,
}

impl PdfReader {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let document = Document::load(path_ref).map_err(|err| {
            PdfHubError::PdfError(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self {
            document,
            source_path: Some(path_ref.display().to_string()),
        })
    }

    /// Create a reader from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data).map_err(|err| {
            PdfHubError::PdfError(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self {
            document,
            source_path: None,
        })
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Return the source path if the reader was created via [`PdfReader::open`].
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Borrow the underlying lopdf document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Object ids of every page, in document order.
    pub fn page_ids(&self) -> Vec<ObjectId> {
        // get_pages() is keyed by page number, so values come out in order.
        self.document.get_pages().into_values().collect()
    }

    /// Object id of a single 1-based page.
    pub fn page_id(&self, page_number: u32) -> Result<ObjectId> {
        let pages = self.document.get_pages();
        pages.get(&page_number).copied().ok_or_else(|| {
            PdfHubError::PdfError(format!(
                "page {} out of range (document has {} pages)",
                page_number,
                pages.len()
            ))
        })
    }

    // -- Extraction -----------------------------------------------------------

    /// Extract the text of a single 1-based page.
    #[instrument(skip(self))]
    pub fn page_text(&self, page_number: u32) -> Result<String> {
        self.page_id(page_number)?;
        self.document.extract_text(&[page_number]).map_err(|err| {
            PdfHubError::PdfError(format!(
                "failed to extract text from page {}: {}",
                page_number, err
            ))
        })
    }
}
