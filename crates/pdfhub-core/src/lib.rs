// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF Hub — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod events;
pub mod range;
pub mod types;

pub use config::AppConfig;
pub use error::{ErrorKind, PdfHubError};
pub use events::{EventStage, NoopObserver, OperationEvent, OperationObserver};
pub use range::PageRange;
pub use types::*;
