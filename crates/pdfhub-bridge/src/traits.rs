// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native dialogs.

use std::path::PathBuf;

use pdfhub_core::error::Result;

/// A named set of file extensions offered by a dialog, e.g. "PDF Files" / `pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub label: String,
    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(label: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            label: label.into(),
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    pub fn pdf() -> Self {
        Self::new("PDF Files", &["pdf"])
    }

    pub fn text() -> Self {
        Self::new("Text Files", &["txt"])
    }

    pub fn images() -> Self {
        Self::new(
            "Image Files",
            &["jpg", "jpeg", "png", "bmp", "gif", "tiff"],
        )
    }
}

/// Open/save/folder dialogs presented by the host platform.
///
/// `Ok(None)` or an empty list means the user dismissed the dialog.
pub trait NativeDialogs {
    /// Ask for a destination file, pre-filled with `default_name`.
    fn save_file(&self, default_name: &str, filter: &FileFilter) -> Result<Option<PathBuf>>;

    /// Ask for one or more existing files.
    fn pick_files(&self, filters: &[FileFilter], multiple: bool) -> Result<Vec<PathBuf>>;

    /// Ask for a directory.
    fn pick_folder(&self) -> Result<Option<PathBuf>>;
}

impl<T: NativeDialogs + ?Sized> NativeDialogs for Box<T> {
    fn save_file(&self, default_name: &str, filter: &FileFilter) -> Result<Option<PathBuf>> {
        (**self).save_file(default_name, filter)
    }

    fn pick_files(&self, filters: &[FileFilter], multiple: bool) -> Result<Vec<PathBuf>> {
        (**self).pick_files(filters, multiple)
    }

    fn pick_folder(&self) -> Result<Option<PathBuf>> {
        (**self).pick_folder()
    }
}
