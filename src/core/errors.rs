// Custom error types for the processing pipeline
//
// One enum per service boundary, composed into PipelineError by the
// orchestrator. The user only ever sees the short status label; full
// diagnostic detail goes to the tracing log.

use thiserror::Error;

/// Clipboard acquisition errors
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Clipboard access failed: {0}")]
    ClipboardAccess(String),
}

/// Image preprocessing errors
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },
}

/// Text recognition errors
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// The engine installation cannot be reached. A configuration problem,
    /// not a transient condition: reported, never retried.
    #[error("Recognition engine unavailable: {0}")]
    Unavailable(String),
}

/// Phonetic conversion errors
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Reading conversion unavailable: {0}")]
    Unavailable(String),
}

/// Translation service errors
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Translation service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Upscale factor must be between 1 and 10, got {0}")]
    InvalidScale(u32),

    #[error("Translation timeout must be greater than 0 seconds")]
    InvalidTimeout,

    #[error("Language codes must be non-empty")]
    EmptyLanguage,

    #[error("Invalid partial result policy: {0:?} (expected \"preserve\" or \"discard\")")]
    InvalidPartialResultPolicy(String),
}

/// Pipeline-level error: any stage failure, classified by origin
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Image capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Preprocessing failed: {0}")]
    Preprocess(#[from] PreprocessError),

    #[error("Recognition failed: {0}")]
    Recognition(#[from] RecognitionError),

    #[error("Reading conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Translation failed: {0}")]
    Translation(#[from] TranslationError),
}

impl PipelineError {
    /// Short user-facing label for the Failed status. Never carries the
    /// underlying diagnostic verbatim.
    pub fn status_label(&self) -> &'static str {
        match self {
            PipelineError::Capture(_) => "clipboard error",
            PipelineError::Preprocess(_) => "invalid image",
            PipelineError::Recognition(_) => "recognition unavailable",
            PipelineError::Conversion(_) => "reading unavailable",
            PipelineError::Translation(_) => "translation unavailable",
        }
    }
}

// Convenience type aliases for Results
pub type CaptureResult<T> = Result<T, CaptureError>;
pub type PreprocessResult<T> = Result<T, PreprocessError>;
pub type RecognitionResult<T> = Result<T, RecognitionError>;
pub type ConversionResult<T> = Result<T, ConversionError>;
pub type TranslationResult<T> = Result<T, TranslationError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
