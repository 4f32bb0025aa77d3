// Pipeline orchestrator: the sole entry point invoked on a user trigger
//
// Sequences capture -> preprocess -> recognize -> normalize -> reading ->
// translation and owns the status state machine:
//
//   Idle -> Processing -> { Success | NoImage | NoTextDetected | Failed }
//
// Terminal states re-enter from Idle on the next trigger; no state carries
// over between runs. All collaborators are injected (no process-wide
// singletons) so tests can substitute fakes at every seam.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, error, info, instrument};

use crate::core::errors::PipelineError;
use crate::core::types::{PartialResultPolicy, PipelineStatus, ResultBundle};
use crate::services::capture::ImageSource;
use crate::services::preprocess;
use crate::services::reading::{self, ReadingConverter};
use crate::services::recognition::{normalize, Recognizer};
use crate::services::translation::Translator;
use crate::utils::artifact::ArtifactSink;

/// Observer for status transitions. Called on entry to Processing and on
/// every terminal state; `bundle` is present on Success and, under the
/// preserve policy, on a translation-stage failure. Last write wins.
pub trait ResultSink: Send + Sync {
    fn publish(&self, status: &PipelineStatus, bundle: Option<&ResultBundle>);
}

/// Tunables the orchestrator needs per run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub threshold: u8,
    pub scale: u32,
    pub partial_results: PartialResultPolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            threshold: 140,
            scale: 3,
            partial_results: PartialResultPolicy::default(),
        }
    }
}

enum RunOutcome {
    NoImage,
    NoText,
    Completed(ResultBundle),
    TranslationFailed {
        partial: ResultBundle,
        error: PipelineError,
    },
}

pub struct PipelineOrchestrator {
    source: Arc<dyn ImageSource>,
    recognizer: Arc<dyn Recognizer>,
    converter: Arc<dyn ReadingConverter>,
    translator: Arc<dyn Translator>,
    artifact: Arc<dyn ArtifactSink>,
    sink: Arc<dyn ResultSink>,
    options: PipelineOptions,
    status: RwLock<PipelineStatus>,
    // Held for the whole of one run; a trigger that cannot take it is ignored
    run_guard: Mutex<()>,
}

impl PipelineOrchestrator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: Arc<dyn ImageSource>,
        recognizer: Arc<dyn Recognizer>,
        converter: Arc<dyn ReadingConverter>,
        translator: Arc<dyn Translator>,
        artifact: Arc<dyn ArtifactSink>,
        sink: Arc<dyn ResultSink>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            source,
            recognizer,
            converter,
            translator,
            artifact,
            sink,
            options,
            status: RwLock::new(PipelineStatus::Idle),
            run_guard: Mutex::new(()),
        }
    }

    /// Current user-visible status.
    pub fn status(&self) -> PipelineStatus {
        self.status.read().clone()
    }

    /// Run the pipeline once. A trigger arriving while a run is in flight is
    /// ignored and returns the in-flight status unchanged.
    #[instrument(skip(self))]
    pub fn run(&self) -> PipelineStatus {
        let Some(_guard) = self.run_guard.try_lock() else {
            debug!("Trigger ignored: a run is already in progress");
            return self.status();
        };

        self.transition(PipelineStatus::Processing, None);

        match self.execute() {
            Ok(RunOutcome::NoImage) => {
                info!("No image available from the source");
                self.transition(PipelineStatus::NoImage, None)
            }
            Ok(RunOutcome::NoText) => {
                info!("Recognition found no text");
                self.transition(PipelineStatus::NoTextDetected, None)
            }
            Ok(RunOutcome::Completed(bundle)) => {
                info!("Run completed: {} chars translated", bundle.source.chars().count());
                self.transition(PipelineStatus::Success, Some(bundle))
            }
            Ok(RunOutcome::TranslationFailed { partial, error }) => {
                error!("Translation stage failed, reading already derived: {error:?}");
                let bundle = match self.options.partial_results {
                    PartialResultPolicy::Preserve => Some(partial),
                    PartialResultPolicy::Discard => None,
                };
                self.transition(PipelineStatus::Failed(error.status_label().to_string()), bundle)
            }
            Err(e) => {
                error!("Pipeline run failed: {e:?}");
                self.transition(PipelineStatus::Failed(e.status_label().to_string()), None)
            }
        }
    }

    fn execute(&self) -> Result<RunOutcome, PipelineError> {
        let Some(image) = self.source.acquire()? else {
            return Ok(RunOutcome::NoImage);
        };
        debug!("Acquired {}x{} image", image.width(), image.height());

        let prepared = preprocess::preprocess(&image, self.options.threshold, self.options.scale)?;
        // Side channel only; the sink swallows its own failures
        self.artifact.publish(&prepared);

        let raw = self.recognizer.recognize(&prepared)?;
        let text = normalize(&raw);
        if text.is_empty() {
            return Ok(RunOutcome::NoText);
        }
        info!("Recognized: {}", text);

        let segments = self.converter.derive_reading(&text)?;
        let reading = reading::join_reading(&segments);
        let romaji = reading::join_romaji(&segments);

        match self.translator.translate(&text) {
            Ok(translation) => Ok(RunOutcome::Completed(ResultBundle {
                source: text,
                reading,
                romaji,
                translation: Some(translation),
            })),
            Err(e) => Ok(RunOutcome::TranslationFailed {
                partial: ResultBundle {
                    source: text,
                    reading,
                    romaji,
                    translation: None,
                },
                error: e.into(),
            }),
        }
    }

    fn transition(&self, status: PipelineStatus, bundle: Option<ResultBundle>) -> PipelineStatus {
        *self.status.write() = status.clone();
        self.sink.publish(&status, bundle.as_ref());
        status
    }
}
