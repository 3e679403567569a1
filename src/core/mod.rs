pub mod engine;
pub mod pipeline;
pub mod rules;

pub use crate::domain::model::{DeletionRule, RuleOutcome, ScrubReport, ScrubResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
