// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfhub-document — Document processing for PDF Hub.
//
// Provides the document operation service (merge, split, compress,
// image-to-PDF, text extraction) on top of lopdf page copying, printpdf image
// pages, and `image` decoding.

pub mod image;
pub mod observer;
pub mod pdf;
pub mod service;

#[cfg(test)]
mod test_support;

// Re-export the primary structs so callers can use `pdfhub_document::DocumentService` etc.
pub use crate::image::processor::ImageProcessor;
pub use observer::TracingObserver;
pub use pdf::assembler::PageAssembler;
pub use pdf::reader::PdfReader;
pub use pdf::writer::PdfWriter;
pub use service::DocumentService;
