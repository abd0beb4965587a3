// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Default operation observer: forwards lifecycle events to `tracing`.

use pdfhub_core::events::{EventStage, OperationEvent, OperationObserver};
use tracing::{debug, error, info};

/// Logs each operation event through the active `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl OperationObserver for TracingObserver {
    fn on_event(&self, event: &OperationEvent) {
        let id = event.operation_id.to_string();
        let op = event.operation.label();
        match &event.stage {
            EventStage::Started { inputs } => {
                info!(operation_id = %id, op, inputs, "operation started");
            }
            EventStage::InputLoaded { path, pages } => {
                info!(operation_id = %id, op, pages, "Loaded: {}", path.display());
            }
            EventStage::PageTextExtracted { page, total } => {
                debug!(operation_id = %id, op, "Extracted text from page {page}/{total}");
            }
            EventStage::ArtifactWritten { path, pages } => {
                info!(operation_id = %id, op, pages, "Created: {}", path.display());
            }
            EventStage::SizeReport {
                original_size,
                compressed_size,
                reduction_percent,
            } => {
                info!(
                    operation_id = %id,
                    op,
                    original_kb = *original_size as f64 / 1024.0,
                    compressed_kb = *compressed_size as f64 / 1024.0,
                    "Size reduction: {reduction_percent:.1}%"
                );
            }
            EventStage::Completed { message } => {
                info!(operation_id = %id, op, "{message}");
            }
            EventStage::Failed { kind, message } => {
                error!(operation_id = %id, op, ?kind, "operation failed: {message}");
            }
        }
    }
}
