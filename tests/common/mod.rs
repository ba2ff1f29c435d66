// SPDX-License-Identifier: MPL-2.0

//! Shared test fixtures: synthetic payloads with real magic bytes and a
//! fake camera capability

#![allow(dead_code)]

use listing_media::errors::CaptureError;
use listing_media::{CameraCapability, CameraDescriptor, CameraFacing, CameraStream};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static TRACING: Once = Once::new();

/// Initialise tracing once for the whole test binary (RUST_LOG-controlled)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A real in-memory JPEG, sniffable as image/jpeg
pub fn jpeg_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([180, 120, 60]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Jpeg)
        .expect("in-memory JPEG encode");
    buf.into_inner()
}

/// A real in-memory PNG, sniffable as image/png
pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([40, 90, 200]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("in-memory PNG encode");
    buf.into_inner()
}

/// Pad a payload with trailing zeros up to `len` without disturbing the
/// leading magic bytes
pub fn padded(mut bytes: Vec<u8>, len: usize) -> Vec<u8> {
    if bytes.len() < len {
        bytes.resize(len, 0);
    }
    bytes
}

/// A minimal MP4 container header (ftyp/isom), padded to `len` bytes
pub fn mp4_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0x00, 0x00, 0x00, 0x18];
    bytes.extend_from_slice(b"ftyp");
    bytes.extend_from_slice(b"isom");
    bytes.extend_from_slice(&[0x00, 0x00, 0x02, 0x00]);
    bytes.extend_from_slice(b"isomiso2avc1mp41");
    padded(bytes, len)
}

/// A minimal AVI header: a real video format, but outside the allowlist
pub fn avi_bytes(len: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
    bytes.extend_from_slice(b"AVI LIST");
    padded(bytes, len)
}

/// Bytes matching no known signature
pub fn garbage_bytes() -> Vec<u8> {
    vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]
}

/// Stream handed out by [`FakeCamera`]; counts `stop` calls once
pub struct FakeStream {
    frame: Result<Vec<u8>, CaptureError>,
    stops: Arc<AtomicUsize>,
    stopped: bool,
}

impl CameraStream for FakeStream {
    fn grab_frame(&mut self) -> Result<Vec<u8>, CaptureError> {
        self.frame.clone()
    }

    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// In-memory [`CameraCapability`] with scripted devices and frames
pub struct FakeCamera {
    devices: Vec<CameraDescriptor>,
    frame: Result<Vec<u8>, CaptureError>,
    deny: bool,
    /// How many streams have been stopped so far
    pub stops: Arc<AtomicUsize>,
    /// Names of the devices opened, in order
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl FakeCamera {
    /// A camera that delivers `frame` from every listed device
    pub fn new(devices: Vec<CameraDescriptor>, frame: Vec<u8>) -> Self {
        FakeCamera {
            devices,
            frame: Ok(frame),
            deny: false,
            stops: Arc::new(AtomicUsize::new(0)),
            opened: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// One rear-facing device delivering `frame`
    pub fn single_rear(frame: Vec<u8>) -> Self {
        Self::new(
            vec![CameraDescriptor {
                name: "rear-cam".to_string(),
                facing: CameraFacing::Rear,
            }],
            frame,
        )
    }

    /// No devices at all
    pub fn absent() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Devices enumerate but every open is refused (permission denied)
    pub fn denied() -> Self {
        let mut camera = Self::single_rear(Vec::new());
        camera.deny = true;
        camera
    }

    /// Make every frame grab fail
    pub fn failing_frames(mut self, message: &str) -> Self {
        self.frame = Err(CaptureError::CaptureFailed(message.to_string()));
        self
    }

    /// Number of stopped streams
    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl CameraCapability for FakeCamera {
    fn enumerate(&self) -> Vec<CameraDescriptor> {
        self.devices.clone()
    }

    fn open(&self, descriptor: &CameraDescriptor) -> Result<Box<dyn CameraStream>, CaptureError> {
        if self.deny {
            return Err(CaptureError::DeviceUnavailable(
                "permission denied".to_string(),
            ));
        }
        self.opened
            .lock()
            .expect("opened-device list poisoned")
            .push(descriptor.name.clone());
        Ok(Box::new(FakeStream {
            frame: self.frame.clone(),
            stops: Arc::clone(&self.stops),
            stopped: false,
        }))
    }
}
