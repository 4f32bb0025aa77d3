// Library exports for the clipboard-to-translation pipeline

pub mod core;
pub mod orchestration;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions
pub use crate::core::{
    config::Config,
    errors::{
        CaptureError, ConfigError, ConversionError, PipelineError, PreprocessError,
        RecognitionError, TranslationError,
    },
    types::{PartialResultPolicy, PipelineStatus, ReadingSegment, ResultBundle},
};

pub use orchestration::pipeline::{PipelineOptions, PipelineOrchestrator, ResultSink};

pub use services::{
    capture::{ClipboardSource, ImageSource},
    preprocess::preprocess,
    reading::{KakasiConverter, ReadingConverter},
    recognition::{normalize, Recognizer, TesseractRecognizer},
    translation::{GoogleTranslator, Translator},
};

pub use utils::artifact::{ArtifactSink, NoopArtifact, PngArtifact};
