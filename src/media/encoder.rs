// SPDX-License-Identifier: MPL-2.0

//! Per-item encoding
//!
//! Turns accepted records into [`MediaItem`]s. The preview view is always
//! produced immediately; the transportable base64 payload is attempted
//! under a hard deadline and skipped entirely for large videos. A failed
//! or timed-out encode demotes the item to preview-only, it never
//! discards it.

use crate::config::KindPolicy;
use crate::errors::EncodeError;
use crate::media::types::{EncodedPayload, MediaId, MediaItem, MediaKind, PreviewRef};
use crate::media::validator::AcceptedRecord;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Non-fatal per-item encoding problem, surfaced in the batch report
#[derive(Debug, Clone)]
pub struct IngestWarning {
    /// The affected item; it is still inserted, without its encoded payload
    pub id: MediaId,
    /// Item title for UI display
    pub title: String,
    /// What went wrong
    pub error: EncodeError,
}

impl std::fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.error)
    }
}

/// Build a [`MediaItem`] from an accepted record
///
/// `seq` is the acceptance ordinal fixing the item's Collection position.
/// Returns the item together with a warning when the encoding attempt
/// failed or timed out; the item itself is always produced.
pub async fn encode_record(
    record: AcceptedRecord,
    seq: u64,
    policy: &KindPolicy,
    batch_title: Option<&str>,
) -> (MediaItem, Option<IngestWarning>) {
    let id = MediaId::generate();
    let title = record
        .label
        .clone()
        .or_else(|| batch_title.map(str::to_string))
        .or_else(|| record.context.label().map(str::to_string))
        .unwrap_or_else(|| record.kind.display_name().to_string());

    let mut item = MediaItem {
        id,
        kind: record.kind,
        seq,
        preview: PreviewRef::new(&id, Arc::clone(&record.payload)),
        source: record.payload,
        encoded: None,
        title,
        tags: BTreeSet::new(),
        context: record.context,
    };

    if skip_encoding(&item, policy) {
        debug!(%id, size = item.source.len(), "Large video, keeping preview reference only");
        return (item, None);
    }

    match encode_bytes(Arc::clone(&item.source), record.mime, policy).await {
        Ok(encoded) => {
            debug!(%id, kind = ?item.kind, "Payload encoded");
            item.encoded = Some(encoded);
            (item, None)
        }
        Err(error) => {
            warn!(%id, %error, "Encoding failed, keeping item without payload");
            let warning = IngestWarning {
                id,
                title: item.title.clone(),
                error,
            };
            (item, Some(warning))
        }
    }
}

/// Size policy: videos above the large threshold keep the raw binary and
/// the preview reference, skipping text encoding entirely
fn skip_encoding(item: &MediaItem, policy: &KindPolicy) -> bool {
    if item.kind != MediaKind::Video {
        return false;
    }
    match policy.large_bytes {
        Some(threshold) => item.source.len() as u64 > threshold,
        None => false,
    }
}

/// Encode off the event loop, bounded by the policy deadline
///
/// A deadline miss is a completed failure, not a cancellation to propagate.
async fn encode_bytes(
    source: Arc<[u8]>,
    mime: String,
    policy: &KindPolicy,
) -> Result<EncodedPayload, EncodeError> {
    let task = tokio::task::spawn_blocking(move || EncodedPayload::encode(mime, &source));
    match tokio::time::timeout(policy.encode_timeout, task).await {
        Err(_) => Err(EncodeError::Timeout),
        Ok(Err(join_err)) => Err(EncodeError::Failed(join_err.to_string())),
        Ok(Ok(encoded)) => Ok(encoded),
    }
}
