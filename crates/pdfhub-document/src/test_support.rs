// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Synthetic fixtures for unit tests: small text PDFs built with lopdf and
// in-memory raster images.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Build a PDF with one page per entry, each page showing its entry in
/// Courier. Empty entries produce pages with no text operators at all.
pub fn text_pdf(pages: &[&str]) -> Vec<u8> {
    build(pages, false)
}

/// Like [`text_pdf`], but `MediaBox` and `Resources` live on the page tree
/// root and are only inherited by the pages.
pub fn text_pdf_inherited(pages: &[&str]) -> Vec<u8> {
    build(pages, true)
}

/// Like [`text_pdf`], with a link annotation on page `from` whose `/Dest`
/// targets page `to`.
pub fn linked_pdf(pages: &[&str], from: u32, to: u32) -> Vec<u8> {
    let mut doc = Document::load_mem(&text_pdf(pages)).expect("reload fixture");
    let page_ids = doc.get_pages();
    let (from_id, to_id) = (page_ids[&from], page_ids[&to]);

    let rect: Vec<Object> = vec![0.into(), 0.into(), 100.into(), 20.into()];
    let dest: Vec<Object> = vec![Object::Reference(to_id), "Fit".into()];
    let link_id = doc.add_object(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => rect,
        "Dest" => dest,
        "P" => from_id,
    });
    doc.get_dictionary_mut(from_id)
        .expect("fixture page")
        .set("Annots", vec![Object::Reference(link_id)]);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialise fixture");
    bytes
}

pub fn write_text_pdf(dir: &Path, name: &str, pages: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text_pdf(pages)).expect("write fixture");
    path
}

/// Label used by [`numbered_pdf`] for page `n`.
pub fn page_label(n: usize) -> String {
    format!("Page-{n:03}")
}

/// Write a PDF whose pages read `Page-001`, `Page-002`, ... so tests can
/// check page order after copying.
pub fn numbered_pdf(dir: &Path, name: &str, count: usize) -> PathBuf {
    let labels: Vec<String> = (1..=count).map(page_label).collect();
    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    write_text_pdf(dir, name, &refs)
}

/// Encode a solid-colour image to `name` in `dir`, format taken from the
/// extension.
pub fn write_image(dir: &Path, name: &str, image: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    let format = ImageFormat::from_path(&path).expect("known image extension");
    image.save_with_format(&path, format).expect("write image fixture");
    path
}

/// Write a palette-indexed PNG. `palette` holds RGB triples, `trns` the
/// per-entry alpha (a tRNS chunk), `indices` one byte per pixel.
pub fn write_indexed_png(
    dir: &Path,
    name: &str,
    (width, height): (u32, u32),
    palette: &[u8],
    trns: Option<&[u8]>,
    indices: &[u8],
) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("create png fixture");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(palette.to_vec());
    if let Some(trns) = trns {
        encoder.set_trns(trns.to_vec());
    }
    let mut writer = encoder.write_header().expect("png header");
    writer.write_image_data(indices).expect("png data");
    writer.finish().expect("png trailer");
    path
}

pub fn solid_rgb(width: u32, height: u32, colour: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(colour)))
}

fn build(pages: &[&str], inherit: bool) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });
    let media_box: Vec<Object> = vec![0.into(), 0.into(), 595.into(), 842.into()];

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            lopdf::Dictionary::new(),
            content.encode().expect("encode content"),
        ));

        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        };
        if !inherit {
            page.set("MediaBox", media_box.clone());
            page.set("Resources", resources_id);
        }
        kids.push(doc.add_object(page).into());
    }

    let mut tree = dictionary! {
        "Type" => "Pages",
        "Count" => pages.len() as i64,
        "Kids" => kids,
    };
    if inherit {
        tree.set("MediaBox", media_box);
        tree.set("Resources", resources_id);
    }
    doc.objects.insert(pages_id, Object::Dictionary(tree));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialise fixture");
    bytes
}
