use crate::domain::model::RawConstraints;
use crate::utils::error::Result;

/// Anything that can answer some or all of the constraint questions.
pub trait ConstraintSource {
    fn collect(&mut self) -> Result<RawConstraints>;
}

/// Supplies the optional preamble shown ahead of the report.
pub trait PromptSource {
    fn load(&self) -> Result<String>;
}
