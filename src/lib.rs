pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::prompt::PromptLoader;
pub use crate::core::{engine::ComparisonEngine, normalizer::normalize, referee::Referee};
pub use crate::domain::model::{
    Budget, ComparisonResult, ConstraintKey, Constraints, Level, RawConstraints, Report,
    ServiceAssessment, ServiceCatalog, ServiceProfile,
};
pub use crate::utils::error::{RefereeError, Result};
