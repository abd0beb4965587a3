// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Settings shared by the document service and the UI shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// PDF header version written into assembled documents.
    pub pdf_version: String,
    /// Pixel density used to size image pages (pixels per inch).
    pub image_dpi: f32,
    /// Title embedded in documents built from images.
    pub document_title: String,
    /// Suggested file name for merge output.
    pub merged_file_name: String,
    /// Suggested file name for image conversion output.
    pub images_file_name: String,
    /// Suggested file name for saved extracted text.
    pub text_file_name: String,
    /// Suffix appended to the input stem for compression output.
    pub compressed_suffix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pdf_version: "1.5".into(),
            image_dpi: 72.0,
            document_title: "PDF Hub".into(),
            merged_file_name: "merged.pdf".into(),
            images_file_name: "images.pdf".into(),
            text_file_name: "output.txt".into(),
            compressed_suffix: "_compressed".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"image_dpi": 150.0}"#).unwrap();
        assert_eq!(config.image_dpi, 150.0);
        assert_eq!(config.merged_file_name, "merged.pdf");
        assert_eq!(config.pdf_version, "1.5");
    }
}
