// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Front-end API — the calls the UI makes, each answered with a flat
// `BridgeResponse`.
//
// This layer owns everything interactive: asking for destinations through the
// native dialogs, defaulting file names and extensions, and turning typed
// service errors into `{success: false, error, error_kind}`.

use std::path::{Path, PathBuf};

use pdfhub_core::AppConfig;
use pdfhub_core::error::{ErrorKind, PdfHubError, Result};
use pdfhub_core::types::Artifact;
use pdfhub_document::DocumentService;
use tracing::{error, info};

use crate::response::BridgeResponse;
use crate::traits::{FileFilter, NativeDialogs};

/// Bridge between the front end and the document service.
pub struct Api<D: NativeDialogs> {
    service: DocumentService,
    dialogs: D,
}

impl<D: NativeDialogs> Api<D> {
    pub fn new(service: DocumentService, dialogs: D) -> Self {
        info!("API initialized");
        Self { service, dialogs }
    }

    pub fn config(&self) -> &AppConfig {
        self.service.config()
    }

    // -- Operations -----------------------------------------------------------

    /// Merge `files` into one PDF at a location chosen in a save dialog.
    pub fn merge_pdfs(&self, files: &[String], output_name: Option<&str>) -> BridgeResponse {
        if files.is_empty() {
            return BridgeResponse::rejected("No files selected", ErrorKind::Validation);
        }
        let default_name = output_name.unwrap_or(&self.config().merged_file_name);

        respond("Merge", || {
            let save_path = self.ask_save_path(default_name, &FileFilter::pdf(), "pdf")?;
            let output = self.service.merge(files, &save_path)?;
            Ok(BridgeResponse::success(
                Artifact::Document(output),
                format!("Successfully merged {} PDFs", files.len()),
            ))
        })
    }

    /// Split `input` by `ranges` into a folder, asking for one if `output_dir`
    /// is absent.
    pub fn split_pdf(
        &self,
        input: &str,
        ranges: &[String],
        output_dir: Option<&str>,
    ) -> BridgeResponse {
        if input.is_empty() {
            return BridgeResponse::rejected("No file selected", ErrorKind::Validation);
        }
        if ranges.is_empty() {
            return BridgeResponse::rejected("No page ranges specified", ErrorKind::Validation);
        }

        respond("Split", || {
            let output_dir = match output_dir.filter(|dir| !dir.is_empty()) {
                Some(dir) => PathBuf::from(dir),
                None => self.dialogs.pick_folder()?.ok_or_else(|| {
                    PdfHubError::Cancelled("Output folder selection cancelled".into())
                })?,
            };
            let files = self.service.split(input, ranges, &output_dir)?;
            let message = format!("Created {} PDF files", files.len());
            Ok(BridgeResponse::success(Artifact::Documents(files), message))
        })
    }

    /// Rewrite `input` to a location chosen in a save dialog and report sizes.
    pub fn compress_pdf(&self, input: &str, output_name: Option<&str>) -> BridgeResponse {
        if input.is_empty() {
            return BridgeResponse::rejected("No file selected", ErrorKind::Validation);
        }
        let default_name = match output_name {
            Some(name) => name.to_string(),
            None => format!(
                "{}{}.pdf",
                file_stem(Path::new(input)),
                self.config().compressed_suffix
            ),
        };

        respond("Compression", || {
            let save_path = self.ask_save_path(&default_name, &FileFilter::pdf(), "pdf")?;
            let report = self.service.compress(input, &save_path)?;
            info!(
                reduction_percent = report.reduction_percent,
                "Compression successful"
            );
            Ok(BridgeResponse::compressed(
                &report,
                "PDF compressed successfully",
            ))
        })
    }

    /// Convert `images` into one PDF at a location chosen in a save dialog.
    pub fn image_to_pdf(&self, images: &[String], output_name: Option<&str>) -> BridgeResponse {
        if images.is_empty() {
            return BridgeResponse::rejected("No images selected", ErrorKind::Validation);
        }
        let default_name = output_name.unwrap_or(&self.config().images_file_name);

        respond("Image to PDF conversion", || {
            let save_path = self.ask_save_path(default_name, &FileFilter::pdf(), "pdf")?;
            let output = self.service.images_to_document(images, &save_path)?;
            Ok(BridgeResponse::success(
                Artifact::Document(output),
                format!("Converted {} images to PDF", images.len()),
            ))
        })
    }

    pub fn pdf_to_text(&self, input: &str) -> BridgeResponse {
        if input.is_empty() {
            return BridgeResponse::rejected("No file selected", ErrorKind::Validation);
        }

        respond("Text extraction", || {
            let text = self.service.extract_text(input)?;
            Ok(BridgeResponse::success(
                Artifact::Text(text),
                "Text extracted successfully",
            ))
        })
    }

    /// Write `text` to a `.txt` file chosen in a save dialog.
    pub fn save_text_file(&self, text: &str, default_name: Option<&str>) -> BridgeResponse {
        let default_name = default_name.unwrap_or(&self.config().text_file_name);

        respond("Save", || {
            let save_path = self.ask_save_path(default_name, &FileFilter::text(), "txt")?;
            std::fs::write(&save_path, text)?;
            info!("Text saved to: {}", save_path.display());
            Ok(BridgeResponse::saved(save_path))
        })
    }

    pub fn get_pdf_info(&self, input: &str) -> BridgeResponse {
        if input.is_empty() {
            return BridgeResponse::rejected("No file provided", ErrorKind::Validation);
        }

        respond("Get PDF info", || {
            Ok(BridgeResponse::info(self.service.document_info(input)?))
        })
    }

    // -- Dialog pass-throughs -------------------------------------------------

    /// Show an open dialog. Errors are logged and reported as "nothing
    /// selected".
    pub fn select_files(&self, filters: Option<&[FileFilter]>, multiple: bool) -> Vec<String> {
        let default_filters = [FileFilter::pdf()];
        let filters = filters.unwrap_or(&default_filters);
        match self.dialogs.pick_files(filters, multiple) {
            Ok(paths) => paths.iter().map(|p| p.display().to_string()).collect(),
            Err(err) => {
                error!("File selection failed: {err}");
                Vec::new()
            }
        }
    }

    pub fn select_images(&self, multiple: bool) -> Vec<String> {
        let filters = [FileFilter::images(), FileFilter::new("All Files", &["*"])];
        self.select_files(Some(&filters), multiple)
    }

    pub fn select_folder(&self) -> Option<String> {
        match self.dialogs.pick_folder() {
            Ok(folder) => folder.map(|p| p.display().to_string()),
            Err(err) => {
                error!("Folder selection failed: {err}");
                None
            }
        }
    }

    // -- Helpers --------------------------------------------------------------

    fn ask_save_path(&self, default_name: &str, filter: &FileFilter, ext: &str) -> Result<PathBuf> {
        let chosen = self
            .dialogs
            .save_file(default_name, filter)?
            .ok_or_else(|| PdfHubError::Cancelled("Save cancelled".into()))?;
        Ok(ensure_extension(chosen, ext))
    }
}

/// Run `body`, logging and flattening any error.
fn respond(action: &str, body: impl FnOnce() -> Result<BridgeResponse>) -> BridgeResponse {
    match body() {
        Ok(response) => {
            info!("{action} successful");
            response
        }
        Err(err) => {
            error!(kind = ?err.kind(), "{action} failed: {err}");
            BridgeResponse::failure(&err)
        }
    }
}

/// Append `.{ext}` unless `path` already ends with it.
pub fn ensure_extension(path: PathBuf, ext: &str) -> PathBuf {
    let suffix = format!(".{ext}");
    if path.to_string_lossy().ends_with(&suffix) {
        return path;
    }
    let mut raw = path.into_os_string();
    raw.push(&suffix);
    PathBuf::from(raw)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::StubDialogs;
    use image::{Rgb, RgbImage};
    use pdfhub_document::PdfWriter;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Dialogs that answer from a script instead of asking a user.
    #[derive(Default)]
    struct ScriptedDialogs {
        save_answers: RefCell<VecDeque<Option<PathBuf>>>,
        folder_answer: Option<PathBuf>,
        picked: Vec<PathBuf>,
        save_requests: RefCell<Vec<String>>,
    }

    impl ScriptedDialogs {
        fn saving_to(path: PathBuf) -> Self {
            let dialogs = Self::default();
            dialogs.save_answers.borrow_mut().push_back(Some(path));
            dialogs
        }
    }

    impl NativeDialogs for ScriptedDialogs {
        fn save_file(&self, default_name: &str, _filter: &FileFilter) -> Result<Option<PathBuf>> {
            self.save_requests.borrow_mut().push(default_name.to_string());
            Ok(self.save_answers.borrow_mut().pop_front().flatten())
        }

        fn pick_files(&self, _filters: &[FileFilter], multiple: bool) -> Result<Vec<PathBuf>> {
            let mut picked = self.picked.clone();
            if !multiple {
                picked.truncate(1);
            }
            Ok(picked)
        }

        fn pick_folder(&self) -> Result<Option<PathBuf>> {
            Ok(self.folder_answer.clone())
        }
    }

    fn api(dialogs: ScriptedDialogs) -> Api<ScriptedDialogs> {
        Api::new(DocumentService::default(), dialogs)
    }

    /// Write a PDF with `pages` image pages and return its path as a string.
    fn sample_pdf(dir: &Path, name: &str, pages: usize) -> String {
        let images: Vec<RgbImage> = (0..pages)
            .map(|i| RgbImage::from_pixel(8, 8, Rgb([i as u8, 0, 0])))
            .collect();
        let path = dir.join(name);
        PdfWriter::new(72.0, "test")
            .unwrap()
            .write_images_to_file(&images, &path)
            .unwrap();
        path.display().to_string()
    }

    fn sample_png(dir: &Path, name: &str) -> String {
        let path = dir.join(name);
        RgbImage::from_pixel(4, 4, Rgb([0, 0, 255])).save(&path).unwrap();
        path.display().to_string()
    }

    #[test]
    fn merge_appends_pdf_extension_and_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let a = sample_pdf(dir.path(), "a.pdf", 1);
        let b = sample_pdf(dir.path(), "b.pdf", 2);
        let api = api(ScriptedDialogs::saving_to(dir.path().join("combined")));

        let response = api.merge_pdfs(&[a, b], None);
        assert!(response.success, "{response:?}");
        let expected = dir.path().join("combined.pdf").display().to_string();
        assert_eq!(response.output.as_deref(), Some(expected.as_str()));
        assert_eq!(response.message.as_deref(), Some("Successfully merged 2 PDFs"));
        assert_eq!(api.dialogs.save_requests.borrow().as_slice(), ["merged.pdf"]);
    }

    #[test]
    fn merge_without_files_is_rejected_before_any_dialog() {
        let api = api(ScriptedDialogs::default());
        let response = api.merge_pdfs(&[], None);
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("No files selected"));
        assert_eq!(response.error_kind, Some(ErrorKind::Validation));
        assert!(api.dialogs.save_requests.borrow().is_empty());
    }

    #[test]
    fn dismissed_save_dialog_is_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let a = sample_pdf(dir.path(), "a.pdf", 1);
        let api = api(ScriptedDialogs::default());

        let response = api.merge_pdfs(&[a], Some("custom.pdf"));
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Save cancelled"));
        assert_eq!(response.error_kind, Some(ErrorKind::Cancelled));
        assert_eq!(api.dialogs.save_requests.borrow().as_slice(), ["custom.pdf"]);
    }

    #[test]
    fn missing_input_keeps_not_found_kind() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.pdf").display().to_string();
        let api = api(ScriptedDialogs::saving_to(dir.path().join("out.pdf")));

        let response = api.merge_pdfs(&[missing], None);
        assert!(!response.success);
        assert_eq!(response.error_kind, Some(ErrorKind::NotFound));
        assert!(response.error.unwrap().contains("missing.pdf"));
    }

    #[test]
    fn split_uses_folder_dialog_when_no_directory_given() {
        let dir = tempfile::tempdir().unwrap();
        let input = sample_pdf(dir.path(), "doc.pdf", 4);
        let out_dir = dir.path().join("parts");
        let api = api(ScriptedDialogs {
            folder_answer: Some(out_dir.clone()),
            ..ScriptedDialogs::default()
        });

        let response = api.split_pdf(&input, &["1-2".into(), "3-4".into()], None);
        assert!(response.success, "{response:?}");
        assert_eq!(response.message.as_deref(), Some("Created 2 PDF files"));
        let files = response.files.unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("doc_part1.pdf"));
        assert!(out_dir.join("doc_part2.pdf").exists());
    }

    #[test]
    fn split_reports_validation_errors() {
        let dir = tempfile::tempdir().unwrap();
        let input = sample_pdf(dir.path(), "doc.pdf", 2);
        let api = api(ScriptedDialogs::default());
        let out = dir.path().display().to_string();

        let response = api.split_pdf(&input, &["3".into()], Some(&out));
        assert!(!response.success);
        assert_eq!(response.error_kind, Some(ErrorKind::Validation));

        let response = api.split_pdf(&input, &[], Some(&out));
        assert_eq!(response.error.as_deref(), Some("No page ranges specified"));

        let response = api.split_pdf(&input, &["1".into()], None);
        assert_eq!(
            response.error.as_deref(),
            Some("Output folder selection cancelled")
        );
    }

    #[test]
    fn compress_defaults_name_from_input_stem() {
        let dir = tempfile::tempdir().unwrap();
        let input = sample_pdf(dir.path(), "scan.pdf", 2);
        let api = api(ScriptedDialogs::saving_to(dir.path().join("small.pdf")));

        let response = api.compress_pdf(&input, None);
        assert!(response.success, "{response:?}");
        assert_eq!(api.dialogs.save_requests.borrow().as_slice(), ["scan_compressed.pdf"]);
        assert!(response.original_size.is_some());
        assert!(response.compressed_size.is_some());
        assert!(response.reduction_percent.is_some());
        assert_eq!(response.message.as_deref(), Some("PDF compressed successfully"));
    }

    #[test]
    fn images_convert_to_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let images = vec![sample_png(dir.path(), "1.png"), sample_png(dir.path(), "2.png")];
        let api = api(ScriptedDialogs::saving_to(dir.path().join("album.pdf")));

        let response = api.image_to_pdf(&images, None);
        assert!(response.success, "{response:?}");
        assert_eq!(response.message.as_deref(), Some("Converted 2 images to PDF"));
        assert_eq!(api.dialogs.save_requests.borrow().as_slice(), ["images.pdf"]);

        let info = api.get_pdf_info(response.output.as_deref().unwrap());
        assert_eq!(info.page_count, Some(2));
    }

    #[test]
    fn images_without_selection_are_rejected() {
        let response = api(ScriptedDialogs::default()).image_to_pdf(&[], None);
        assert_eq!(response.error.as_deref(), Some("No images selected"));
    }

    #[test]
    fn text_round_trip_through_save_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(ScriptedDialogs::saving_to(dir.path().join("notes")));

        let response = api.save_text_file("=== Page 1 ===\nhello\n", None);
        assert!(response.success, "{response:?}");
        let saved = dir.path().join("notes.txt");
        assert_eq!(response.path, Some(saved.display().to_string()));
        assert_eq!(
            std::fs::read_to_string(saved).unwrap(),
            "=== Page 1 ===\nhello\n"
        );
    }

    #[test]
    fn pdf_to_text_of_image_only_document_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let input = sample_pdf(dir.path(), "pictures.pdf", 2);
        let response = api(ScriptedDialogs::default()).pdf_to_text(&input);
        assert!(response.success, "{response:?}");
        assert_eq!(response.text.as_deref(), Some(""));
    }

    #[test]
    fn select_files_respects_multiple_flag() {
        let api = api(ScriptedDialogs {
            picked: vec![PathBuf::from("/a.pdf"), PathBuf::from("/b.pdf")],
            ..ScriptedDialogs::default()
        });
        assert_eq!(api.select_files(None, true).len(), 2);
        assert_eq!(api.select_files(None, false), vec!["/a.pdf".to_string()]);
    }

    #[test]
    fn stub_dialogs_degrade_to_empty_selection() {
        let api = Api::new(DocumentService::default(), StubDialogs);
        assert!(api.select_images(true).is_empty());
        assert!(api.select_folder().is_none());

        let response = api.save_text_file("x", None);
        assert!(!response.success);
        assert_eq!(response.error_kind, Some(ErrorKind::Processing));
    }

    #[test]
    fn ensure_extension_only_appends_when_missing() {
        assert_eq!(
            ensure_extension(PathBuf::from("/tmp/out"), "pdf"),
            PathBuf::from("/tmp/out.pdf")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("/tmp/out.pdf"), "pdf"),
            PathBuf::from("/tmp/out.pdf")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("/tmp/out.PDF"), "pdf"),
            PathBuf::from("/tmp/out.PDF.pdf")
        );
    }
}
