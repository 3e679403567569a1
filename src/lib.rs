pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, ScrubConfig, DEFAULT_PROJECT_FILE};

pub use core::{engine::ScrubEngine, pipeline::ProjectScrubPipeline};
pub use domain::model::{DeletionRule, RuleOutcome, ScrubReport};
pub use utils::error::{Result, ScrubError};
