// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — reading existing PDFs, assembling new ones from copied pages,
// and building PDFs from images.

pub mod assembler;
pub mod reader;
pub mod writer;

pub use assembler::PageAssembler;
pub use reader::PdfReader;
pub use writer::PdfWriter;
