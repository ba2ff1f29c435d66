// SPDX-License-Identifier: MPL-2.0

//! Batch validation
//!
//! Pure classification of raw acquisition records against the declarative
//! per-kind policy table. Rejection annotates, it never raises; one bad
//! record never aborts its siblings.

use crate::config::KindPolicy;
use crate::errors::RejectReason;
use crate::media::detection::{self, MediaFamily};
use crate::media::types::{AcquisitionContext, MediaKind, RawAcquisition};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, info};

/// A raw record that passed validation, annotated with its sniffed MIME type
#[derive(Debug, Clone)]
pub struct AcceptedRecord {
    /// The binary payload
    pub payload: Arc<[u8]>,
    /// Declared (and now verified) media kind
    pub kind: MediaKind,
    /// Target room or category
    pub context: AcquisitionContext,
    /// Source label (file name) for title defaulting
    pub label: Option<String>,
    /// Sniffed MIME type, carried forward so the encoder never re-sniffs
    pub mime: String,
}

/// A raw record the validator turned away
#[derive(Debug, Clone)]
pub struct RejectedRecord {
    /// Position of the record in the submitted batch
    pub index: usize,
    /// Why it was turned away
    pub reason: RejectReason,
}

/// Outcome of validating one acquisition batch
#[derive(Debug, Default)]
pub struct BatchValidation {
    /// Records that proceed to encoding, in batch order
    pub accepted: Vec<AcceptedRecord>,
    /// Records turned away, with positions and reasons
    pub rejected: Vec<RejectedRecord>,
}

impl BatchValidation {
    /// Human-readable rejection summary for UI display, `None` when the
    /// whole batch was accepted
    pub fn summary(&self) -> Option<String> {
        if self.rejected.is_empty() {
            return None;
        }
        let mut summary = format!("{} file(s) were not added:", self.rejected.len());
        for rejected in &self.rejected {
            // UI shows 1-based positions
            let _ = write!(
                &mut summary,
                "\n  file {}: {}",
                rejected.index + 1,
                rejected.reason
            );
        }
        Some(summary)
    }
}

/// Validate one acquisition batch against the policy for its declared kind
///
/// The batch count ceiling is evaluated first so records beyond the limit
/// are turned away before any per-record sniffing happens. Remaining rules
/// run independently per record: type family, format allowlist, size
/// ceiling.
pub fn validate(
    records: Vec<RawAcquisition>,
    kind: MediaKind,
    policy: &KindPolicy,
) -> BatchValidation {
    let total = records.len();
    let mut outcome = BatchValidation::default();

    for (index, record) in records.into_iter().enumerate() {
        // Batch ceiling first: earliest records are kept up to the limit
        if let Some(limit) = policy.batch_limit {
            if index >= limit {
                debug!(index, limit, "Record beyond batch ceiling");
                outcome.rejected.push(RejectedRecord {
                    index,
                    reason: RejectReason::BatchTooLarge { limit },
                });
                continue;
            }
        }

        match classify(&record, kind, policy) {
            Ok(mime) => outcome.accepted.push(AcceptedRecord {
                payload: record.payload,
                kind,
                context: record.context,
                label: record.label,
                mime,
            }),
            Err(reason) => {
                debug!(index, %reason, "Record rejected");
                outcome.rejected.push(RejectedRecord { index, reason });
            }
        }
    }

    info!(
        total,
        accepted = outcome.accepted.len(),
        rejected = outcome.rejected.len(),
        ?kind,
        "Batch validated"
    );
    outcome
}

/// Per-record rules; returns the sniffed MIME type on acceptance
fn classify(
    record: &RawAcquisition,
    kind: MediaKind,
    policy: &KindPolicy,
) -> Result<String, RejectReason> {
    let detected = detection::detect(&record.payload);

    let format = match (kind, detected) {
        (MediaKind::Photo, Some(f)) if f.family == MediaFamily::Image => f,
        (MediaKind::Video, Some(f)) if f.family == MediaFamily::Video => f,
        (_, Some(f)) => {
            return Err(RejectReason::WrongType {
                detected: Some(f.mime.to_string()),
            });
        }
        (_, None) => return Err(RejectReason::WrongType { detected: None }),
    };

    if let Some(allowed) = &policy.allowed_formats {
        if !allowed.iter().any(|mime| mime == format.mime) {
            return Err(RejectReason::UnsupportedFormat {
                detected: format.mime.to_string(),
            });
        }
    }

    if let Some(limit) = policy.max_bytes {
        let size = record.payload.len() as u64;
        if size > limit {
            return Err(RejectReason::TooLarge { size, limit });
        }
    }

    Ok(format.mime.to_string())
}
