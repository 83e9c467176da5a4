//! Device readiness probing
//!
//! One-shot checks that the candidate's microphone and camera actually
//! work before the interview starts. The microphone check records a
//! short fixed-duration sample and looks for any nonzero signal; the
//! camera check grabs a single frame. Both recover device failures into
//! a plain `false` rather than erroring out.
//!
//! Device access is exclusive at the hardware level. No lock is taken
//! here; callers are expected not to issue concurrent checks against
//! the same physical device.

pub mod camera;
pub mod mic;
pub mod traits;

pub use camera::NokhwaCameraSource;
pub use mic::CpalAudioSource;
pub use traits::{AudioCaptureSpec, AudioSource, CameraSource, DeviceError, SampleReader};

use serde::{Deserialize, Serialize};

/// Outcome of one device check, derived fresh on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCheckResult {
    pub mic_ok: bool,
    pub camera_ok: bool,
}

impl DeviceCheckResult {
    pub fn all_ok(&self) -> bool {
        self.mic_ok && self.camera_ok
    }
}

/// Presence-of-signal heuristic: mean absolute amplitude above zero.
///
/// Any nonzero average, sensor noise included, passes. This is a
/// liveness check, not a quality measure.
pub fn has_signal(samples: &[i16]) -> bool {
    if samples.is_empty() {
        return false;
    }
    let sum: u64 = samples.iter().map(|s| s.unsigned_abs() as u64).sum();
    sum as f64 / samples.len() as f64 > 0.0
}

/// Probes the default microphone and camera for readiness
pub struct SignalProbe {
    audio: Box<dyn AudioSource>,
    camera: Box<dyn CameraSource>,
    spec: AudioCaptureSpec,
}

impl SignalProbe {
    /// Build a probe from explicit device sources.
    pub fn new(
        audio: Box<dyn AudioSource>,
        camera: Box<dyn CameraSource>,
        spec: AudioCaptureSpec,
    ) -> Self {
        Self {
            audio,
            camera,
            spec,
        }
    }

    /// Build a probe against the host's default hardware devices.
    pub fn with_default_devices(spec: AudioCaptureSpec) -> Self {
        Self::new(
            Box::new(CpalAudioSource),
            Box::new(NokhwaCameraSource),
            spec,
        )
    }

    /// Run the microphone check followed by the camera check.
    pub fn check_devices(&mut self) -> DeviceCheckResult {
        let mic_ok = self.check_mic();
        let camera_ok = self.check_camera();

        tracing::info!(mic_ok, camera_ok, "device check complete");
        DeviceCheckResult { mic_ok, camera_ok }
    }

    fn check_mic(&mut self) -> bool {
        match self.record_sample() {
            Ok(samples) => has_signal(&samples),
            Err(e) => {
                tracing::warn!("microphone probe failed: {e}");
                false
            }
        }
    }

    /// Record the full capture window into one sample buffer.
    fn record_sample(&mut self) -> Result<Vec<i16>, DeviceError> {
        let mut reader = self.audio.open(&self.spec)?;
        let mut samples = Vec::with_capacity(self.spec.total_samples());
        for _ in 0..self.spec.chunk_reads() {
            samples.extend(reader.read_chunk()?);
        }
        // Reader drops here on every path, releasing the device.
        Ok(samples)
    }

    fn check_camera(&self) -> bool {
        match self.camera.grab_frame() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("camera probe failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields canned chunks, then fails any further reads.
    struct FakeReader {
        chunks: Vec<Vec<i16>>,
    }

    impl SampleReader for FakeReader {
        fn read_chunk(&mut self) -> Result<Vec<i16>, DeviceError> {
            if self.chunks.is_empty() {
                return Err(DeviceError::Read("no more chunks".into()));
            }
            Ok(self.chunks.remove(0))
        }
    }

    struct FakeAudio {
        chunks: Vec<Vec<i16>>,
        fail_open: bool,
    }

    impl AudioSource for FakeAudio {
        fn open(&self, _spec: &AudioCaptureSpec) -> Result<Box<dyn SampleReader>, DeviceError> {
            if self.fail_open {
                return Err(DeviceError::Open("no default input device".into()));
            }
            Ok(Box::new(FakeReader {
                chunks: self.chunks.clone(),
            }))
        }
    }

    struct FakeCamera {
        ok: bool,
    }

    impl CameraSource for FakeCamera {
        fn grab_frame(&self) -> Result<(), DeviceError> {
            if self.ok {
                Ok(())
            } else {
                Err(DeviceError::Read("no frame".into()))
            }
        }
    }

    /// One read of ten samples covers the whole window.
    fn ten_sample_spec() -> AudioCaptureSpec {
        AudioCaptureSpec {
            sample_rate: 10,
            chunk_frames: 10,
            capture_secs: 1,
        }
    }

    fn probe_with(audio: FakeAudio, camera: FakeCamera) -> SignalProbe {
        SignalProbe::new(Box::new(audio), Box::new(camera), ten_sample_spec())
    }

    #[test]
    fn silence_fails_mic_check() {
        let mut probe = probe_with(
            FakeAudio {
                chunks: vec![vec![0; 10]],
                fail_open: false,
            },
            FakeCamera { ok: true },
        );
        let result = probe.check_devices();
        assert!(!result.mic_ok);
        assert!(result.camera_ok);
        assert!(!result.all_ok());
    }

    #[test]
    fn single_nonzero_sample_passes_mic_check() {
        let mut samples = vec![0i16; 10];
        samples[7] = 3;
        let mut probe = probe_with(
            FakeAudio {
                chunks: vec![samples],
                fail_open: false,
            },
            FakeCamera { ok: true },
        );
        let result = probe.check_devices();
        assert!(result.mic_ok);
        assert!(result.all_ok());
    }

    #[test]
    fn unopenable_mic_reports_false_not_error() {
        let mut probe = probe_with(
            FakeAudio {
                chunks: vec![],
                fail_open: true,
            },
            FakeCamera { ok: true },
        );
        assert!(!probe.check_devices().mic_ok);
    }

    #[test]
    fn mid_capture_read_failure_reports_false() {
        // Two reads needed, only one chunk available.
        let spec = AudioCaptureSpec {
            sample_rate: 20,
            chunk_frames: 10,
            capture_secs: 1,
        };
        let mut probe = SignalProbe::new(
            Box::new(FakeAudio {
                chunks: vec![vec![5; 10]],
                fail_open: false,
            }),
            Box::new(FakeCamera { ok: true }),
            spec,
        );
        assert!(!probe.check_devices().mic_ok);
    }

    #[test]
    fn frameless_camera_fails_camera_check() {
        let mut probe = probe_with(
            FakeAudio {
                chunks: vec![vec![1; 10]],
                fail_open: false,
            },
            FakeCamera { ok: false },
        );
        let result = probe.check_devices();
        assert!(result.mic_ok);
        assert!(!result.camera_ok);
    }

    #[test]
    fn negative_amplitude_counts_as_signal() {
        assert!(has_signal(&[-1, 0, 0, 0]));
        assert!(has_signal(&[i16::MIN]));
        assert!(!has_signal(&[0; 1024]));
        assert!(!has_signal(&[]));
    }
}
