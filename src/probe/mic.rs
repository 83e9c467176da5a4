//! Default-microphone capture via cpal
//!
//! The cpal input stream delivers samples through a callback on an audio
//! thread; a bounded channel carries them back to the probe's blocking
//! read loop. Whatever the device's native sample format, samples are
//! converted to signed 16-bit before crossing the channel.

use super::traits::{AudioCaptureSpec, AudioSource, DeviceError, SampleReader};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, StreamConfig};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TrySendError};
use std::time::Duration;

/// Per-chunk wait before declaring the device dead.
const READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Opens the host's default audio input device
pub struct CpalAudioSource;

impl AudioSource for CpalAudioSource {
    fn open(&self, spec: &AudioCaptureSpec) -> Result<Box<dyn SampleReader>, DeviceError> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or_else(|| DeviceError::Open("no default input device".to_string()))?;
        let device_name = device.name().unwrap_or_else(|_| "unknown".to_string());

        let supported = device
            .default_input_config()
            .map_err(|e| DeviceError::Open(format!("failed to get input config: {e}")))?;

        let config = StreamConfig {
            channels: 1,
            sample_rate: cpal::SampleRate(spec.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        // One second of backlog; the callback drops samples past that.
        let (tx, rx) = sync_channel::<i16>(spec.sample_rate as usize);

        fn err_fn(e: cpal::StreamError) {
            tracing::warn!("input stream error: {e}");
        }

        let stream = match supported.sample_format() {
            SampleFormat::I16 => device
                .build_input_stream(
                    &config,
                    move |data: &[i16], _: &_| push_samples(&tx, data),
                    err_fn,
                    None,
                )
                .map_err(|e| DeviceError::Open(e.to_string()))?,
            SampleFormat::F32 => device
                .build_input_stream(
                    &config,
                    move |data: &[f32], _: &_| {
                        let converted: Vec<i16> = data
                            .iter()
                            .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0).round() as i16)
                            .collect();
                        push_samples(&tx, &converted);
                    },
                    err_fn,
                    None,
                )
                .map_err(|e| DeviceError::Open(e.to_string()))?,
            SampleFormat::U16 => device
                .build_input_stream(
                    &config,
                    move |data: &[u16], _: &_| {
                        // Shift unsigned [0,65535] to signed [-32768,32767]
                        let converted: Vec<i16> =
                            data.iter().map(|&s| (s as i32 - 32768) as i16).collect();
                        push_samples(&tx, &converted);
                    },
                    err_fn,
                    None,
                )
                .map_err(|e| DeviceError::Open(e.to_string()))?,
            other => {
                return Err(DeviceError::Open(format!(
                    "unsupported sample format: {other:?}"
                )))
            }
        };

        stream
            .play()
            .map_err(|e| DeviceError::Open(format!("failed to start input stream: {e}")))?;

        tracing::debug!("microphone opened: {device_name} ({}Hz)", spec.sample_rate);

        Ok(Box::new(CpalSampleReader {
            _stream: stream,
            rx,
            chunk_frames: spec.chunk_frames,
        }))
    }
}

fn push_samples(tx: &SyncSender<i16>, data: &[i16]) {
    for &sample in data {
        match tx.try_send(sample) {
            Ok(()) => {}
            // Reader fell behind; the probe only needs a bounded window.
            Err(TrySendError::Full(_)) => {}
            Err(TrySendError::Disconnected(_)) => return,
        }
    }
}

/// Holds the open input stream; dropping it releases the device.
struct CpalSampleReader {
    _stream: cpal::Stream,
    rx: Receiver<i16>,
    chunk_frames: usize,
}

impl SampleReader for CpalSampleReader {
    fn read_chunk(&mut self) -> Result<Vec<i16>, DeviceError> {
        let mut chunk = Vec::with_capacity(self.chunk_frames);
        while chunk.len() < self.chunk_frames {
            match self.rx.recv_timeout(READ_TIMEOUT) {
                Ok(sample) => chunk.push(sample),
                Err(e) => {
                    return Err(DeviceError::Read(format!(
                        "no samples from input stream: {e}"
                    )))
                }
            }
        }
        Ok(chunk)
    }
}
