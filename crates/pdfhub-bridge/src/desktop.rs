// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native desktop dialogs via `rfd`.

use std::path::PathBuf;

use pdfhub_core::error::Result;
use rfd::FileDialog;

use crate::traits::{FileFilter, NativeDialogs};

/// Dialogs backed by the operating system's file chooser.
pub struct RfdDialogs;

fn with_filter(dialog: FileDialog, filter: &FileFilter) -> FileDialog {
    dialog.add_filter(filter.label.as_str(), filter.extensions.as_slice())
}

impl NativeDialogs for RfdDialogs {
    fn save_file(&self, default_name: &str, filter: &FileFilter) -> Result<Option<PathBuf>> {
        let dialog = with_filter(FileDialog::new().set_file_name(default_name), filter);
        Ok(dialog.save_file())
    }

    fn pick_files(&self, filters: &[FileFilter], multiple: bool) -> Result<Vec<PathBuf>> {
        let dialog = filters.iter().fold(FileDialog::new(), with_filter);
        let picked = if multiple {
            dialog.pick_files().unwrap_or_default()
        } else {
            dialog.pick_file().into_iter().collect()
        };
        Ok(picked)
    }

    fn pick_folder(&self) -> Result<Option<PathBuf>> {
        Ok(FileDialog::new().pick_folder())
    }
}
