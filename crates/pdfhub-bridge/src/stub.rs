// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub dialogs for headless/CI builds where no native dialog backend is
// compiled in.
//
// Every trait method returns `PlatformUnavailable`. The real implementation
// lives in the `desktop` module behind the `native-dialogs` feature.

use std::path::PathBuf;

use pdfhub_core::error::{PdfHubError, Result};

use crate::traits::{FileFilter, NativeDialogs};

/// No-op dialogs returned when native dialogs are not compiled in.
pub struct StubDialogs;

impl NativeDialogs for StubDialogs {
    fn save_file(&self, _default_name: &str, _filter: &FileFilter) -> Result<Option<PathBuf>> {
        tracing::warn!("NativeDialogs::save_file called on stub dialogs");
        Err(PdfHubError::PlatformUnavailable)
    }

    fn pick_files(&self, _filters: &[FileFilter], _multiple: bool) -> Result<Vec<PathBuf>> {
        tracing::warn!("NativeDialogs::pick_files called on stub dialogs");
        Err(PdfHubError::PlatformUnavailable)
    }

    fn pick_folder(&self) -> Result<Option<PathBuf>> {
        tracing::warn!("NativeDialogs::pick_folder called on stub dialogs");
        Err(PdfHubError::PlatformUnavailable)
    }
}
