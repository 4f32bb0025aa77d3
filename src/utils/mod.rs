pub mod artifact;

// Re-export commonly used items
pub use artifact::{ArtifactSink, NoopArtifact, PngArtifact};
