// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document operation service — merge, split, compress, image conversion, and
// text extraction over files on disk.
//
// Every operation is synchronous and self-contained: documents and images are
// opened, processed, and dropped within the call. The service keeps no state
// between calls, so it can be shared freely; writes to the same output path
// from concurrent calls are not coordinated.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pdfhub_core::AppConfig;
use pdfhub_core::error::{PdfHubError, Result};
use pdfhub_core::events::{EventStage, OperationEvent, OperationObserver};
use pdfhub_core::range::PageRange;
use pdfhub_core::types::{CompressionReport, DocumentInfo, OperationId, OperationKind};
use tracing::instrument;

use crate::image::ImageProcessor;
use crate::observer::TracingObserver;
use crate::pdf::{PageAssembler, PdfReader, PdfWriter};

/// Runs document operations and reports their progress to an observer.
#[derive(Clone)]
pub struct DocumentService {
    config: AppConfig,
    observer: Arc<dyn OperationObserver>,
}

/// Per-invocation handle used to emit events for one operation.
struct Scope<'a> {
    id: OperationId,
    kind: OperationKind,
    observer: &'a dyn OperationObserver,
}

impl Scope<'_> {
    fn emit(&self, stage: EventStage) {
        self.observer
            .on_event(&OperationEvent::new(self.id, self.kind, stage));
    }
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl DocumentService {
    /// Create a service that logs its events through `tracing`.
    pub fn new(config: AppConfig) -> Self {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    pub fn with_observer(config: AppConfig, observer: Arc<dyn OperationObserver>) -> Self {
        Self { config, observer }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // -- Operations -----------------------------------------------------------

    /// Concatenate the pages of `inputs`, in the order given, into `output`.
    ///
    /// The output's parent directory must already exist.
    #[instrument(skip_all, fields(inputs = inputs.len()))]
    pub fn merge<P: AsRef<Path>>(&self, inputs: &[P], output: impl AsRef<Path>) -> Result<PathBuf> {
        let output = output.as_ref();
        self.run(
            OperationKind::Merge,
            inputs.len(),
            |scope| {
                if inputs.is_empty() {
                    return Err(PdfHubError::InvalidInput("no PDF files to merge".into()));
                }
                ensure_all_exist(inputs)?;

                let mut assembler = PageAssembler::new(&self.config.pdf_version);
                for input in inputs {
                    let reader = PdfReader::open(input)?;
                    scope.emit(EventStage::InputLoaded {
                        path: input.as_ref().to_path_buf(),
                        pages: reader.page_count(),
                    });
                    assembler.append_all(&reader)?;
                }

                let pages = assembler.write_to_file(output)?;
                scope.emit(EventStage::ArtifactWritten {
                    path: output.to_path_buf(),
                    pages,
                });
                Ok(output.to_path_buf())
            },
            |_| format!("Successfully merged {} PDFs to {}", inputs.len(), output.display()),
        )
    }

    /// Write one document per range expression into `output_dir`, named
    /// `{stem}_part{n}.pdf` with `n` counting from 1.
    ///
    /// Every expression is validated before anything is written, so a bad
    /// expression leaves no partial output behind. `output_dir` is created if
    /// missing.
    #[instrument(skip_all, fields(ranges = ranges.len()))]
    pub fn split<S: AsRef<str>>(
        &self,
        input: impl AsRef<Path>,
        ranges: &[S],
        output_dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>> {
        let input = input.as_ref();
        let output_dir = output_dir.as_ref();
        self.run(
            OperationKind::Split,
            1,
            |scope| {
                ensure_exists(input)?;
                if ranges.is_empty() {
                    return Err(PdfHubError::InvalidInput("no page ranges specified".into()));
                }

                let reader = PdfReader::open(input)?;
                let total_pages = reader.page_count();
                scope.emit(EventStage::InputLoaded {
                    path: input.to_path_buf(),
                    pages: total_pages,
                });

                let parsed = ranges
                    .iter()
                    .map(|expression| PageRange::parse(expression.as_ref(), total_pages))
                    .collect::<Result<Vec<_>>>()?;

                std::fs::create_dir_all(output_dir)?;
                let stem = file_stem(input);

                let mut outputs = Vec::with_capacity(parsed.len());
                for (idx, range) in parsed.iter().enumerate() {
                    let mut assembler = PageAssembler::new(&self.config.pdf_version);
                    assembler.append_pages(&reader, range.pages())?;

                    let path = output_dir.join(format!("{}_part{}.pdf", stem, idx + 1));
                    let pages = assembler.write_to_file(&path)?;
                    scope.emit(EventStage::ArtifactWritten {
                        path: path.clone(),
                        pages,
                    });
                    outputs.push(path);
                }
                Ok(outputs)
            },
            |outputs| format!("Successfully split PDF into {} files", outputs.len()),
        )
    }

    /// Rewrite `input` into `output` by copying every page into a fresh
    /// document.
    ///
    /// This is a structural rewrite only; the output can be larger than the
    /// input. Zero-byte inputs are rejected.
    #[instrument(skip_all)]
    pub fn compress(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<CompressionReport> {
        let input = input.as_ref();
        let output = output.as_ref();
        self.run(
            OperationKind::Compress,
            1,
            |scope| {
                ensure_exists(input)?;
                let original_size = std::fs::metadata(input)?.len();
                if original_size == 0 {
                    return Err(PdfHubError::InvalidInput(format!(
                        "{} is empty",
                        input.display()
                    )));
                }

                let reader = PdfReader::open(input)?;
                scope.emit(EventStage::InputLoaded {
                    path: input.to_path_buf(),
                    pages: reader.page_count(),
                });

                let mut assembler = PageAssembler::new(&self.config.pdf_version);
                assembler.append_all(&reader)?;
                let pages = assembler.write_to_file(output)?;
                scope.emit(EventStage::ArtifactWritten {
                    path: output.to_path_buf(),
                    pages,
                });

                let compressed_size = std::fs::metadata(output)?.len();
                let report =
                    CompressionReport::new(output.to_path_buf(), original_size, compressed_size)?;
                scope.emit(EventStage::SizeReport {
                    original_size,
                    compressed_size,
                    reduction_percent: report.reduction_percent,
                });
                Ok(report)
            },
            |report| format!("Compression complete: {}", report.output.display()),
        )
    }

    /// Build a PDF from `images`, one image per page in the order given.
    ///
    /// Transparent images are composited onto white; other non-RGB images are
    /// converted directly. An empty list is rejected.
    #[instrument(skip_all, fields(images = images.len()))]
    pub fn images_to_document<P: AsRef<Path>>(
        &self,
        images: &[P],
        output: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let output = output.as_ref();
        self.run(
            OperationKind::ImagesToDocument,
            images.len(),
            |scope| {
                if images.is_empty() {
                    return Err(PdfHubError::InvalidInput("no images to convert".into()));
                }
                ensure_all_exist(images)?;
                let writer = PdfWriter::new(self.config.image_dpi, &self.config.document_title)?;

                let mut pages = Vec::with_capacity(images.len());
                for image in images {
                    let rgb = ImageProcessor::open(image)?.into_rgb();
                    scope.emit(EventStage::InputLoaded {
                        path: image.as_ref().to_path_buf(),
                        pages: 1,
                    });
                    pages.push(rgb);
                }

                writer.write_images_to_file(&pages, output)?;
                scope.emit(EventStage::ArtifactWritten {
                    path: output.to_path_buf(),
                    pages: pages.len(),
                });
                Ok(output.to_path_buf())
            },
            |path| format!("Successfully created PDF: {}", path.display()),
        )
    }

    /// Extract the text of every page, each prefixed by `=== Page {n} ===`.
    ///
    /// Pages with no visible text are skipped; the remaining headers keep
    /// their original page numbers.
    #[instrument(skip_all)]
    pub fn extract_text(&self, input: impl AsRef<Path>) -> Result<String> {
        let input = input.as_ref();
        self.run(
            OperationKind::ExtractText,
            1,
            |scope| {
                ensure_exists(input)?;
                let reader = PdfReader::open(input)?;
                let total = reader.page_count();
                scope.emit(EventStage::InputLoaded {
                    path: input.to_path_buf(),
                    pages: total,
                });

                let mut entries = Vec::new();
                for page in 1..=total {
                    let text = reader.page_text(page as u32)?;
                    if text.trim().is_empty() {
                        continue;
                    }
                    entries.push(format!("=== Page {page} ===\n{text}\n"));
                    scope.emit(EventStage::PageTextExtracted { page, total });
                }
                Ok(entries.join("\n"))
            },
            |_| format!("Successfully extracted text from {}", input.display()),
        )
    }

    /// Page count and file size of an existing document.
    #[instrument(skip_all)]
    pub fn document_info(&self, input: impl AsRef<Path>) -> Result<DocumentInfo> {
        let input = input.as_ref();
        self.run(
            OperationKind::Inspect,
            1,
            |_| {
                ensure_exists(input)?;
                let file_size = std::fs::metadata(input)?.len();
                let page_count = PdfReader::open(input)?.page_count();
                Ok(DocumentInfo {
                    page_count,
                    file_size,
                })
            },
            |info| format!("PDF info: {} pages", info.page_count),
        )
    }

    // -- Helpers --------------------------------------------------------------

    fn run<T>(
        &self,
        kind: OperationKind,
        inputs: usize,
        body: impl FnOnce(&Scope<'_>) -> Result<T>,
        summary: impl FnOnce(&T) -> String,
    ) -> Result<T> {
        let scope = Scope {
            id: OperationId::new(),
            kind,
            observer: self.observer.as_ref(),
        };
        scope.emit(EventStage::Started { inputs });

        match body(&scope) {
            Ok(value) => {
                scope.emit(EventStage::Completed {
                    message: summary(&value),
                });
                Ok(value)
            }
            Err(err) => {
                scope.emit(EventStage::Failed {
                    kind: err.kind(),
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(PdfHubError::not_found(path))
    }
}

/// Fails on the first missing path, before any file is opened.
fn ensure_all_exist<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    paths.iter().try_for_each(|path| ensure_exists(path.as_ref()))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}
