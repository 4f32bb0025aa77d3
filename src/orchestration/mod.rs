pub mod pipeline;

pub use pipeline::{PipelineOptions, PipelineOrchestrator, ResultSink};
