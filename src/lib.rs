pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleDisplay, ConsolePrompter, RecordingDisplay, ScriptedPrompter};
pub use app::exercises::{Addition, BirthYear, ExerciseKind, Wage};
pub use config::{AppConfig, OutputFormat};
pub use core::pipeline::{PipelineState, PromptPipeline, RunOutcome};
pub use utils::error::{CalcError, Result};
