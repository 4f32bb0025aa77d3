// Clipboard image acquisition
//
// The image source is a black box to the pipeline: an image is either
// available right now or it is not. No polling, no notifications.

use image::{DynamicImage, RgbaImage};
use parking_lot::Mutex;
use tracing::debug;

use crate::core::errors::{CaptureError, CaptureResult};

/// Source of the image to analyze. `Ok(None)` means there is nothing to
/// process right now, which is a status, not an error.
pub trait ImageSource: Send + Sync {
    fn acquire(&self) -> CaptureResult<Option<DynamicImage>>;
}

/// System clipboard source backed by arboard
pub struct ClipboardSource {
    // arboard's handle is not Sync; one pipeline run is in flight at a time
    // anyway, so a mutex costs nothing here.
    clipboard: Mutex<arboard::Clipboard>,
}

impl ClipboardSource {
    pub fn new() -> CaptureResult<Self> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| CaptureError::ClipboardAccess(e.to_string()))?;
        Ok(Self {
            clipboard: Mutex::new(clipboard),
        })
    }
}

impl ImageSource for ClipboardSource {
    fn acquire(&self) -> CaptureResult<Option<DynamicImage>> {
        let mut clipboard = self.clipboard.lock();
        match clipboard.get_image() {
            Ok(data) => {
                let (width, height) = (data.width as u32, data.height as u32);
                let buffer = RgbaImage::from_raw(width, height, data.bytes.into_owned())
                    .ok_or_else(|| {
                        CaptureError::ClipboardAccess(format!(
                            "clipboard returned a malformed {width}x{height} RGBA buffer"
                        ))
                    })?;
                debug!("Clipboard image: {}x{}", width, height);
                Ok(Some(DynamicImage::ImageRgba8(buffer)))
            }
            // Clipboard holds text, nothing, or a format we cannot read
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(CaptureError::ClipboardAccess(e.to_string())),
        }
    }
}
