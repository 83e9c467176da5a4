//! Probe trait definitions
//!
//! Hardware-agnostic seams for the device probes. Production code plugs
//! in the cpal and nokhwa backends; tests substitute fakes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Device-level probe failure
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("failed to open device: {0}")]
    Open(String),

    #[error("device read failed: {0}")]
    Read(String),
}

/// Fixed capture configuration for the microphone probe.
///
/// Samples are signed 16-bit mono throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioCaptureSpec {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Frames per chunk read
    pub chunk_frames: usize,

    /// Capture duration in seconds
    pub capture_secs: u32,
}

impl Default for AudioCaptureSpec {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            chunk_frames: 1024,
            capture_secs: 3,
        }
    }
}

impl AudioCaptureSpec {
    /// Number of chunk reads covering the full capture window.
    pub fn chunk_reads(&self) -> usize {
        (self.sample_rate as f64 / self.chunk_frames as f64 * self.capture_secs as f64).ceil()
            as usize
    }

    /// Total samples expected across the capture window.
    pub fn total_samples(&self) -> usize {
        self.chunk_reads() * self.chunk_frames
    }
}

/// A held audio input device yielding sample chunks.
///
/// Dropping the reader releases the device; holders must drop it on
/// every exit path, including mid-capture read errors.
pub trait SampleReader {
    /// Read the next chunk of mono i16 samples, blocking until the chunk
    /// is available or the device fails.
    fn read_chunk(&mut self) -> Result<Vec<i16>, DeviceError>;
}

/// Source of microphone input devices
pub trait AudioSource {
    /// Acquire the default input device configured per `spec`.
    fn open(&self, spec: &AudioCaptureSpec) -> Result<Box<dyn SampleReader>, DeviceError>;
}

/// Source of camera frames
pub trait CameraSource {
    /// Open the default camera, read exactly one frame, release the
    /// device. Any step failing is an error.
    fn grab_frame(&self) -> Result<(), DeviceError>;
}
