//! Default-camera frame grab via nokhwa

use super::traits::{CameraSource, DeviceError};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

/// Opens the host's default camera (index 0)
pub struct NokhwaCameraSource;

impl CameraSource for NokhwaCameraSource {
    fn grab_frame(&self) -> Result<(), DeviceError> {
        let format =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);

        let mut camera = Camera::new(CameraIndex::Index(0), format)
            .map_err(|e| DeviceError::Open(format!("failed to open camera: {e}")))?;

        camera
            .open_stream()
            .map_err(|e| DeviceError::Open(format!("failed to start camera stream: {e}")))?;

        // The camera drops on every exit path below, releasing the device.
        let frame = camera
            .frame()
            .map_err(|e| DeviceError::Read(format!("failed to read frame: {e}")))?;

        tracing::debug!("camera frame captured: {} bytes", frame.buffer().len());

        if let Err(e) = camera.stop_stream() {
            tracing::warn!("failed to stop camera stream: {e}");
        }

        Ok(())
    }
}
