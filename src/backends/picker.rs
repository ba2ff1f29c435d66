// SPDX-License-Identifier: MPL-2.0

//! File-picker acquisition path
//!
//! The device file chooser hands over an already-enumerated, finite list
//! of payloads; this adapter normalizes them into raw acquisition records,
//! preserving input order.

use crate::media::types::{AcquisitionContext, MediaKind, PickedFile, RawAcquisition};
use tracing::debug;

/// Normalize picked files into raw acquisition records, one per file
pub fn acquire_from_picker(
    files: Vec<PickedFile>,
    kind: MediaKind,
    context: &AcquisitionContext,
) -> Vec<RawAcquisition> {
    debug!(count = files.len(), ?kind, "Acquiring from file picker");
    files
        .into_iter()
        .map(|file| RawAcquisition {
            payload: file.bytes.into(),
            kind,
            context: context.clone(),
            label: file.name,
        })
        .collect()
}
