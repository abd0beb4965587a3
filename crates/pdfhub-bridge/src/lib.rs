// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfhub-bridge — UI shell boundary for PDF Hub.
//
// The front end talks to `Api`, which answers every call with a flat
// `BridgeResponse`. Native dialogs sit behind the `NativeDialogs` trait so the
// API can run headless (stub) or against the desktop file chooser (`rfd`,
// feature `native-dialogs`).

pub mod api;
pub mod config_store;
pub mod response;
pub mod traits;

pub mod stub;

#[cfg(feature = "native-dialogs")]
pub mod desktop;

pub use api::{Api, ensure_extension};
pub use config_store::{load_config, load_or_default, persist_config};
pub use response::BridgeResponse;
pub use traits::{FileFilter, NativeDialogs};

/// The dialog implementation compiled in for this build.
pub fn platform_dialogs() -> Box<dyn NativeDialogs> {
    #[cfg(feature = "native-dialogs")]
    {
        Box::new(desktop::RfdDialogs)
    }
    #[cfg(not(feature = "native-dialogs"))]
    {
        Box::new(stub::StubDialogs)
    }
}

/// Install the global `tracing` subscriber, filtered by `RUST_LOG` and
/// defaulting to `info`. Later calls are no-ops.
pub fn init_logging() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    if installed.is_ok() {
        tracing::info!("PDF Hub starting");
    }
}
