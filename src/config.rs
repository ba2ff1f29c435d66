// SPDX-License-Identifier: GPL-3.0-only

use crate::constants;
use crate::media::MediaKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Validation and encoding limits for one media kind.
///
/// One declarative table per kind replaces scattered per-branch thresholds:
/// the validator and the encoder both read the same policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindPolicy {
    /// Hard per-file ceiling in bytes; `None` means no per-file ceiling
    pub max_bytes: Option<u64>,
    /// Threshold above which encoding is skipped and the item is kept
    /// with its preview reference only; `None` means always attempt
    pub large_bytes: Option<u64>,
    /// Per-batch record count ceiling; `None` means unbounded
    pub batch_limit: Option<usize>,
    /// Accepted container formats by sniffed MIME type; `None` means any
    /// format within the kind's MIME family
    pub allowed_formats: Option<Vec<String>>,
    /// Deadline for one encoding attempt
    pub encode_timeout: Duration,
}

/// Complete ingestion policy, one [`KindPolicy`] per media kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestPolicy {
    /// Photo limits
    pub photo: KindPolicy,
    /// Video limits
    pub video: KindPolicy,
}

impl IngestPolicy {
    /// Get the policy table for a media kind
    pub fn for_kind(&self, kind: MediaKind) -> &KindPolicy {
        match kind {
            MediaKind::Photo => &self.photo,
            MediaKind::Video => &self.video,
        }
    }
}

impl Default for IngestPolicy {
    fn default() -> Self {
        Self {
            // Photos have no per-file ceiling in this design; the batch as
            // a whole is bounded by the form layer.
            photo: KindPolicy {
                max_bytes: None,
                large_bytes: None,
                batch_limit: None,
                allowed_formats: None,
                encode_timeout: constants::ENCODE_TIMEOUT,
            },
            video: KindPolicy {
                max_bytes: Some(constants::VIDEO_MAX_BYTES),
                large_bytes: Some(constants::VIDEO_LARGE_BYTES),
                batch_limit: Some(constants::VIDEO_BATCH_LIMIT),
                allowed_formats: Some(
                    constants::VIDEO_FORMAT_ALLOWLIST
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                ),
                encode_timeout: constants::ENCODE_TIMEOUT,
            },
        }
    }
}
