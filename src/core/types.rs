// Data model for one pipeline run

use serde::Serialize;

/// One contiguous span of normalized text with its phonetic renderings.
///
/// Segments are ordered left-to-right matching input order; concatenating
/// the surface forms reconstructs the normalized text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingSegment {
    /// The span of the source text this segment covers
    pub surface: String,
    /// Phonetic (hiragana) rendering of the surface
    pub phonetic: String,
    /// Romanized rendering of the surface
    pub romanized: String,
}

/// Immutable output of one pipeline run, published to the presentation sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultBundle {
    /// Recognized source text after whitespace normalization
    pub source: String,
    /// Concatenated phonetic forms of all reading segments
    pub reading: String,
    /// Space-joined romanized forms of all reading segments
    pub romaji: String,
    /// English translation. `None` only on a partial bundle published after a
    /// translation failure under the preserve policy.
    pub translation: Option<String>,
}

/// User-visible pipeline state. Drives presentation only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PipelineStatus {
    #[default]
    Idle,
    Processing,
    Success,
    NoImage,
    NoTextDetected,
    Failed(String),
}

impl PipelineStatus {
    pub fn label(&self) -> &str {
        match self {
            PipelineStatus::Idle => "idle",
            PipelineStatus::Processing => "processing",
            PipelineStatus::Success => "success",
            PipelineStatus::NoImage => "no image",
            PipelineStatus::NoTextDetected => "no text detected",
            PipelineStatus::Failed(reason) => reason,
        }
    }

    /// Terminal states re-enter from Idle on the next trigger.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PipelineStatus::Idle | PipelineStatus::Processing)
    }
}

/// What to publish when translation fails after recognition and reading
/// already succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialResultPolicy {
    /// Publish source + reading with a translation-error marker
    #[default]
    Preserve,
    /// Publish nothing, matching the strictest interpretation
    Discard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!PipelineStatus::Idle.is_terminal());
        assert!(!PipelineStatus::Processing.is_terminal());
        assert!(PipelineStatus::Success.is_terminal());
        assert!(PipelineStatus::NoImage.is_terminal());
        assert!(PipelineStatus::NoTextDetected.is_terminal());
        assert!(PipelineStatus::Failed("x".into()).is_terminal());
    }

    #[test]
    fn failed_label_carries_reason() {
        let status = PipelineStatus::Failed("translation unavailable".into());
        assert_eq!(status.label(), "translation unavailable");
    }
}
