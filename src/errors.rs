// SPDX-License-Identifier: MPL-2.0

//! Error types for the media ingestion pipeline

use std::fmt;

/// Result type alias using PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Main pipeline error type
#[derive(Debug, Clone)]
pub enum PipelineError {
    /// Camera acquisition errors
    Capture(CaptureError),
    /// Encoding errors
    Encode(EncodeError),
    /// Configuration errors (invalid labels, bad policy values)
    Config(String),
    /// Generic error with message
    Other(String),
}

/// Camera acquisition errors
///
/// Fatal to the acquisition attempt they occur in, never to the rest of
/// the pipeline.
#[derive(Debug, Clone)]
pub enum CaptureError {
    /// No camera device could be opened (none present, or permission denied)
    DeviceUnavailable(String),
    /// Operation on a session whose stream has already been stopped
    SessionClosed,
    /// The device produced no usable frame
    CaptureFailed(String),
}

/// Per-item encoding errors
///
/// Non-fatal: an item that fails to encode is kept without its
/// transportable payload rather than discarded.
#[derive(Debug, Clone)]
pub enum EncodeError {
    /// Encoding did not finish within the configured deadline
    Timeout,
    /// Encoding task failed
    Failed(String),
}

/// Validation-time rejection reasons
///
/// These classify a raw record, they never abort the batch containing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Payload type does not match the declared media kind
    WrongType {
        /// Sniffed MIME type, when recognisable at all
        detected: Option<String>,
    },
    /// Video container format outside the allowlist
    UnsupportedFormat {
        /// Sniffed MIME type
        detected: String,
    },
    /// Payload above the hard per-file ceiling
    TooLarge {
        /// Payload size in bytes
        size: u64,
        /// Configured ceiling in bytes
        limit: u64,
    },
    /// Record beyond the per-batch count ceiling
    BatchTooLarge {
        /// Configured per-batch limit
        limit: usize,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Capture(e) => write!(f, "Capture error: {}", e),
            PipelineError::Encode(e) => write!(f, "Encode error: {}", e),
            PipelineError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PipelineError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::DeviceUnavailable(msg) => write!(f, "No camera available: {}", msg),
            CaptureError::SessionClosed => write!(f, "Camera session already closed"),
            CaptureError::CaptureFailed(msg) => write!(f, "Capture failed: {}", msg),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Timeout => write!(f, "Encoding timed out"),
            EncodeError::Failed(msg) => write!(f, "Encoding failed: {}", msg),
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::WrongType {
                detected: Some(mime),
            } => {
                write!(f, "wrong type ({})", mime)
            }
            RejectReason::WrongType { detected: None } => {
                write!(f, "unrecognised payload type")
            }
            RejectReason::UnsupportedFormat { detected } => {
                write!(f, "unsupported format ({})", detected)
            }
            RejectReason::TooLarge { size, limit } => {
                write!(f, "too large ({} bytes, limit {} bytes)", size, limit)
            }
            RejectReason::BatchTooLarge { limit } => {
                write!(f, "over the per-batch limit of {}", limit)
            }
        }
    }
}

impl std::error::Error for PipelineError {}
impl std::error::Error for CaptureError {}
impl std::error::Error for EncodeError {}

// Conversions from sub-errors to PipelineError
impl From<CaptureError> for PipelineError {
    fn from(err: CaptureError) -> Self {
        PipelineError::Capture(err)
    }
}

impl From<EncodeError> for PipelineError {
    fn from(err: EncodeError) -> Self {
        PipelineError::Encode(err)
    }
}

impl From<String> for PipelineError {
    fn from(msg: String) -> Self {
        PipelineError::Other(msg)
    }
}

impl From<&str> for PipelineError {
    fn from(msg: &str) -> Self {
        PipelineError::Other(msg.to_string())
    }
}
