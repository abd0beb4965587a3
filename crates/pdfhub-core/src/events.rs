// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Operation lifecycle events and the observer seam that receives them.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;
use crate::types::{OperationId, OperationKind};

/// A single lifecycle event emitted while an operation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationEvent {
    pub operation_id: OperationId,
    pub operation: OperationKind,
    pub timestamp: DateTime<Utc>,
    pub stage: EventStage,
}

impl OperationEvent {
    pub fn new(operation_id: OperationId, operation: OperationKind, stage: EventStage) -> Self {
        Self {
            operation_id,
            operation,
            timestamp: Utc::now(),
            stage,
        }
    }
}

/// Stages an operation reports, in the order they usually occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum EventStage {
    Started {
        inputs: usize,
    },
    InputLoaded {
        path: PathBuf,
        pages: usize,
    },
    PageTextExtracted {
        page: usize,
        total: usize,
    },
    ArtifactWritten {
        path: PathBuf,
        pages: usize,
    },
    SizeReport {
        original_size: u64,
        compressed_size: u64,
        reduction_percent: f64,
    },
    Completed {
        message: String,
    },
    Failed {
        kind: ErrorKind,
        message: String,
    },
}

/// Receives operation events. Implementations must tolerate concurrent calls.
pub trait OperationObserver: Send + Sync {
    fn on_event(&self, event: &OperationEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl OperationObserver for NoopObserver {
    fn on_event(&self, _event: &OperationEvent) {}
}
