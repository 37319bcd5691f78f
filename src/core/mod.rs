pub mod engine;
pub mod normalizer;
pub mod referee;

pub use crate::domain::model::{ComparisonResult, Constraints, RawConstraints, Report};
pub use crate::domain::ports::{ConstraintSource, PromptSource};
pub use crate::utils::error::Result;
