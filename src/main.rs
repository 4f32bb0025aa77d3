// Main entry point for the Japanese screen reader
//
// The binary is only the presentation layer: it wires the injected adapters
// together, reads a zero-argument trigger from stdin and prints whatever the
// pipeline publishes.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use yomisnap::core::config::Config;
use yomisnap::core::types::{PipelineStatus, ResultBundle};
use yomisnap::orchestration::pipeline::{PipelineOptions, PipelineOrchestrator, ResultSink};
use yomisnap::services::capture::ClipboardSource;
use yomisnap::services::reading::KakasiConverter;
use yomisnap::services::recognition::TesseractRecognizer;
use yomisnap::services::translation::GoogleTranslator;
use yomisnap::utils::artifact::{ArtifactSink, NoopArtifact, PngArtifact};

/// Console sink. Mirrors the layout of the original screen reader: source
/// text, hiragana line with bracketed romaji, then the translation.
struct ConsoleSink;

impl ResultSink for ConsoleSink {
    fn publish(&self, status: &PipelineStatus, bundle: Option<&ResultBundle>) {
        match status {
            PipelineStatus::Idle => {}
            PipelineStatus::Processing => println!("Processing..."),
            PipelineStatus::NoImage => println!("No image found!"),
            PipelineStatus::NoTextDetected => println!("No text detected."),
            PipelineStatus::Failed(reason) => {
                if let Some(bundle) = bundle {
                    print_bundle(bundle);
                }
                println!("Error: {reason}");
            }
            PipelineStatus::Success => {
                if let Some(bundle) = bundle {
                    print_bundle(bundle);
                }
                println!("Success");
            }
        }
    }
}

fn print_bundle(bundle: &ResultBundle) {
    println!();
    println!("Original : {}", bundle.source);
    println!("Reading  : {}", bundle.reading);
    println!("           [{}]", bundle.romaji);
    match &bundle.translation {
        Some(translation) => println!("Meaning  : {translation}"),
        None => println!("Meaning  : (translation unavailable)"),
    }
    println!();
}

fn main() -> Result<()> {
    let config = Config::new().context("Failed to load configuration")?;

    // Initialize logging
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new(format!(
        "yomisnap={}",
        match config.log_level {
            tracing::Level::TRACE => "trace",
            tracing::Level::DEBUG => "debug",
            tracing::Level::INFO => "info",
            tracing::Level::WARN => "warn",
            tracing::Level::ERROR => "error",
        }
    ));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Config: threshold={} scale={} lang={} {}->{} timeout={}s",
        config.preprocess.threshold,
        config.preprocess.scale,
        config.recognition.lang,
        config.translation.source_lang,
        config.translation.target_lang,
        config.translation.timeout_seconds,
    );

    let source = Arc::new(ClipboardSource::new().context("Failed to open the system clipboard")?);
    let recognizer = Arc::new(TesseractRecognizer::new(&config.recognition.lang));
    let converter = Arc::new(KakasiConverter);
    let translator = Arc::new(
        GoogleTranslator::new(
            &config.translation.source_lang,
            &config.translation.target_lang,
            Duration::from_secs(config.translation.timeout_seconds),
        )
        .context("Failed to build the translation client")?,
    );
    let artifact: Arc<dyn ArtifactSink> = if config.artifact.enabled {
        Arc::new(PngArtifact::new(&config.artifact.path))
    } else {
        Arc::new(NoopArtifact)
    };

    let orchestrator = PipelineOrchestrator::new(
        source,
        recognizer,
        converter,
        translator,
        artifact,
        Arc::new(ConsoleSink),
        PipelineOptions {
            threshold: config.preprocess.threshold,
            scale: config.preprocess.scale,
            partial_results: config.partial_results,
        },
    );

    println!("Copy a screenshot, then press Enter to analyze it (Ctrl-D to quit).");
    print!("> ");
    io::stdout().flush()?;

    for line in io::stdin().lock().lines() {
        line?;
        let status = orchestrator.run();
        info!("Run finished: {}", status.label());
        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}
