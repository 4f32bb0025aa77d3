// Debug artifact side channel
//
// The preprocessed image is made available for inspection independent of the
// main result path. Strictly failure tolerant: a sink that cannot persist the
// artifact logs a warning and the pipeline never notices.

use std::path::PathBuf;

use image::GrayImage;
use tracing::{debug, warn};

/// Optional hook receiving the preprocessed image of every run.
pub trait ArtifactSink: Send + Sync {
    fn publish(&self, image: &GrayImage);
}

/// Writes the artifact as a PNG to a fixed, well-known path, overwriting the
/// previous run's file.
pub struct PngArtifact {
    path: PathBuf,
}

impl PngArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArtifactSink for PngArtifact {
    fn publish(&self, image: &GrayImage) {
        match image.save(&self.path) {
            Ok(()) => debug!("Debug artifact written to {}", self.path.display()),
            Err(e) => warn!(
                "Failed to write debug artifact to {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

/// Disabled artifact hook.
pub struct NoopArtifact;

impl ArtifactSink for NoopArtifact {
    fn publish(&self, _image: &GrayImage) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png_to_target_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug_view.png");

        let sink = PngArtifact::new(&path);
        sink.publish(&GrayImage::from_pixel(8, 8, image::Luma([255])));

        assert!(path.exists());
    }

    #[test]
    fn persistence_failure_does_not_panic() {
        // Unwritable target: the parent directory does not exist
        let sink = PngArtifact::new("/nonexistent-dir/sub/debug_view.png");
        sink.publish(&GrayImage::from_pixel(2, 2, image::Luma([0])));
    }
}
