// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — create new PDF documents from raster images using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::path::Path;

use image::RgbImage;
use pdfhub_core::error::{PdfHubError, Result};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument};

/// Millimetres per inch.
const MM_PER_INCH: f32 = 25.4;

/// Creates new PDF documents with one full-page image per page.
///
/// Each page is sized to its image at the configured pixel density, so an
/// image fills its page exactly.
pub struct PdfWriter {
    /// Pixels per inch used to turn image dimensions into page dimensions.
    dpi: f32,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: String,
}

impl PdfWriter {
    /// Create a writer. `dpi` must be positive.
    pub fn new(dpi: f32, title: impl Into<String>) -> Result<Self> {
        if !(dpi.is_finite() && dpi > 0.0) {
            return Err(PdfHubError::InvalidInput(format!(
                "image DPI must be positive, got {}",
                dpi
            )));
        }
        Ok(Self {
            dpi,
            title: title.into(),
        })
    }

    /// Page dimensions for an image of `width` x `height` pixels.
    pub fn page_dimensions(&self, width: u32, height: u32) -> (Mm, Mm) {
        (
            Mm(width as f32 / self.dpi * MM_PER_INCH),
            Mm(height as f32 / self.dpi * MM_PER_INCH),
        )
    }

    // -- Image to PDF ---------------------------------------------------------

    /// Create a PDF with one page per image, in the order given.
    #[instrument(skip(self, images), fields(images = images.len()))]
    pub fn create_from_images(&self, images: &[RgbImage]) -> Result<Vec<u8>> {
        if images.is_empty() {
            return Err(PdfHubError::InvalidInput(
                "no images to place in the document".into(),
            ));
        }

        info!(dpi = self.dpi, title = %self.title, "Creating image PDF");

        let mut doc = PdfDocument::new(&self.title);
        let mut pages: Vec<PdfPage> = Vec::with_capacity(images.len());

        for rgb_image in images {
            let (width, height) = rgb_image.dimensions();
            let raw = RawImage {
                pixels: RawImageData::U8(rgb_image.as_raw().clone()),
                width: width as usize,
                height: height as usize,
                data_format: RawImageFormat::RGB8,
                tag: Vec::new(),
            };
            let xobject_id = doc.add_image(&raw);

            let (page_w, page_h) = self.page_dimensions(width, height);
            let ops = vec![Op::UseXobject {
                id: xobject_id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(0.0)),
                    translate_y: Some(Pt(0.0)),
                    scale_x: None,
                    scale_y: None,
                    dpi: Some(self.dpi),
                    rotate: None,
                },
            }];
            pages.push(PdfPage::new(page_w, page_h, ops));

            debug!(width, height, page_w_mm = page_w.0, page_h_mm = page_h.0, "Image placed on page");
        }

        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        debug!(output_bytes = output.len(), warnings = warnings.len(), "Image PDF serialised");

        Ok(output)
    }

    // -- File output convenience ----------------------------------------------

    /// Create an image PDF and write it directly to a file.
    pub fn write_images_to_file(&self, images: &[RgbImage], path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.create_from_images(images)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote image PDF to {}", path.as_ref().display());
        Ok(())
    }
}
