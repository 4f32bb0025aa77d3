pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items for convenience
pub use config::Config;
pub use errors::{
    CaptureError, ConfigError, ConversionError, PipelineError, PreprocessError,
    RecognitionError, TranslationError,
};
pub use types::{PartialResultPolicy, PipelineStatus, ReadingSegment, ResultBundle};
