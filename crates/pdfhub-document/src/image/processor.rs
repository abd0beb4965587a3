// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode raster images and normalise them to opaque RGB
// before they are placed on PDF pages. Uses the `image` crate.

use image::{ColorType, DynamicImage, ImageReader, Rgb, RgbImage};
use pdfhub_core::error::{PdfHubError, Result};
use tracing::{debug, info, instrument};

/// Colour layout of a decoded image, reduced to what page placement cares
/// about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Plain 8-bit RGB; used as-is.
    Rgb,
    /// RGB with alpha.
    Rgba,
    /// Greyscale.
    Luma,
    /// Greyscale with alpha.
    LumaAlpha,
    /// Higher bit depth or float RGB without alpha.
    WideRgb,
}

impl ColorMode {
    fn of(color: ColorType) -> Self {
        match color {
            ColorType::Rgb8 => Self::Rgb,
            ColorType::L8 | ColorType::L16 => Self::Luma,
            ColorType::La8 | ColorType::La16 => Self::LumaAlpha,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => Self::Rgba,
            _ if color.has_alpha() => Self::Rgba,
            _ => Self::WideRgb,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::LumaAlpha)
    }
}

/// A single decoded image on its way onto a page.
///
/// Palette-indexed files are expanded by the decoder: with transparency they
/// arrive as RGBA, without it as RGB.
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    ///
    /// The format is sniffed from the file's leading bytes, so a mis-named or
    /// extensionless file still decodes.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| open_failed(path, err))?
            .decode()
            .map_err(|err| open_failed(path, err))?;
        info!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image loaded"
        );
        Ok(Self { image: img })
    }

    /// Create a processor from raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)
            .map_err(|err| PdfHubError::ImageError(format!("failed to decode image: {}", err)))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn color_mode(&self) -> ColorMode {
        ColorMode::of(self.image.color())
    }

    // -- Normalisation --------------------------------------------------------

    /// Convert to opaque 8-bit RGB.
    ///
    /// Images with an alpha channel are composited over white using their own
    /// alpha as the mask. Everything else is converted directly.
    pub fn into_rgb(self) -> RgbImage {
        let mode = self.color_mode();
        if mode.has_alpha() {
            debug!(?mode, "Compositing onto white background");
            return flatten_onto_white(&self.image);
        }
        match self.image {
            DynamicImage::ImageRgb8(rgb) => rgb,
            other => {
                debug!(?mode, "Converting to RGB");
                other.to_rgb8()
            }
        }
    }
}

fn open_failed(path: &std::path::Path, err: impl std::fmt::Display) -> PdfHubError {
    PdfHubError::ImageError(format!("failed to open {}: {}", path.display(), err))
}

/// Alpha-composite `image` over an opaque white canvas of the same size.
fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut canvas = RgbImage::from_pixel(rgba.width(), rgba.height(), Rgb([255, 255, 255]));

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        let blend = |channel: u8| -> u8 {
            ((channel as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8
        };
        canvas.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }

    canvas
}
