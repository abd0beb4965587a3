// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Config file persistence for the UI shell.

use std::path::Path;

use pdfhub_core::AppConfig;
use pdfhub_core::error::Result;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "config.json";

/// Read `config.json` from `config_dir`.
///
/// A missing or unreadable file yields `None`; callers fall back to
/// `AppConfig::default()`.
pub fn load_config(config_dir: &Path) -> Option<AppConfig> {
    let path = config_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(config) => {
            debug!(path = %path.display(), "config loaded");
            Some(config)
        }
        Err(err) => {
            warn!(path = %path.display(), "ignoring malformed config: {err}");
            None
        }
    }
}

/// Load the config, or the defaults if there is none.
pub fn load_or_default(config_dir: &Path) -> AppConfig {
    load_config(config_dir).unwrap_or_default()
}

pub fn persist_config(config_dir: &Path, config: &AppConfig) -> Result<()> {
    std::fs::create_dir_all(config_dir)?;
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(config_dir.join(CONFIG_FILE), json)?;
    Ok(())
}
