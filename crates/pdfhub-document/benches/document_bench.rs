// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for document processing in the pdfhub-document crate:
// page-range parsing and page copying on a synthetic image-built document.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};

use pdfhub_core::PageRange;
use pdfhub_document::{PageAssembler, PdfReader, PdfWriter};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A 50-page PDF built from small solid-colour images.
fn synthetic_document() -> Vec<u8> {
    let images: Vec<RgbImage> = (0..50u8)
        .map(|i| RgbImage::from_pixel(64, 64, Rgb([i, 255 - i, 128])))
        .collect();
    PdfWriter::new(72.0, "bench")
        .and_then(|writer| writer.create_from_images(&images))
        .expect("build synthetic document")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_range_parsing(c: &mut Criterion) {
    c.bench_function("page_range_parse (mixed, 500 pages)", |b| {
        b.iter(|| {
            let range = PageRange::parse(black_box("1-100, 150, 200-350, 7, 7, 400-500"), 500)
                .expect("valid range");
            black_box(range.len());
        });
    });
}

fn bench_page_copy(c: &mut Criterion) {
    let reader = PdfReader::from_bytes(&synthetic_document()).expect("load synthetic document");
    let range = PageRange::parse("1-10,20-30,49,49", reader.page_count()).expect("valid range");

    c.bench_function("split part (23 of 50 pages)", |b| {
        b.iter(|| {
            let mut assembler = PageAssembler::new("1.5");
            assembler
                .append_pages(&reader, black_box(range.pages()))
                .expect("copy pages");
            black_box(assembler.to_bytes().expect("serialise"));
        });
    });

    c.bench_function("rewrite all pages (50)", |b| {
        b.iter(|| {
            let mut assembler = PageAssembler::new("1.5");
            assembler.append_all(&reader).expect("copy pages");
            black_box(assembler.to_bytes().expect("serialise"));
        });
    });
}

criterion_group!(benches, bench_range_parsing, bench_page_copy);
criterion_main!(benches);
