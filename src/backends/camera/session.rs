// SPDX-License-Identifier: MPL-2.0

//! Scoped camera session
//!
//! Owns the open frame stream for exactly one acquisition attempt. The
//! stream is stopped on successful capture, on cancel and on drop, so a
//! dismissed capture dialog can never leak a running camera.

use super::CameraStream;
use crate::errors::CaptureError;
use crate::media::types::{AcquisitionContext, MediaKind, RawAcquisition};
use tracing::{debug, info};

/// A live capture session bound to one opened device
pub struct CameraSession {
    stream: Option<Box<dyn CameraStream>>,
    device: String,
    context: AcquisitionContext,
}

impl CameraSession {
    pub(crate) fn new(
        stream: Box<dyn CameraStream>,
        device: String,
        context: AcquisitionContext,
    ) -> Self {
        CameraSession {
            stream: Some(stream),
            device,
            context,
        }
    }

    /// Whether the underlying stream is still running
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Name of the device this session is bound to
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Take one freeze-frame and close the session
    ///
    /// The stream is stopped whether or not the frame grab succeeds; a
    /// session delivers at most one photo. Calling this on an already
    /// closed session fails with [`CaptureError::SessionClosed`].
    pub fn capture(&mut self) -> Result<RawAcquisition, CaptureError> {
        let mut stream = self.stream.take().ok_or(CaptureError::SessionClosed)?;
        let frame = stream.grab_frame();
        stream.stop();

        let bytes = frame?;
        info!(device = %self.device, size = bytes.len(), "Frame captured");
        Ok(RawAcquisition {
            payload: bytes.into(),
            kind: MediaKind::Photo,
            context: self.context.clone(),
            label: None,
        })
    }

    /// Close the session without capturing; idempotent
    pub fn cancel(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            debug!(device = %self.device, "Camera session cancelled");
        }
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.cancel();
    }
}
