use crate::core::engine::ComparisonEngine;
use crate::core::normalizer::normalize;
use crate::domain::model::Report;
use crate::domain::ports::{ConstraintSource, PromptSource};
use crate::utils::error::Result;

pub struct Referee {
    engine: ComparisonEngine,
}

impl Referee {
    pub fn new(engine: ComparisonEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ComparisonEngine {
        &self.engine
    }

    pub fn run<S: ConstraintSource + ?Sized>(&self, source: &mut S) -> Result<Report> {
        let raw = source.collect()?;
        tracing::debug!("Collected raw constraints: {:?}", raw);

        let constraints = normalize(&raw);
        tracing::info!(
            "Comparing with budget={}, data_privacy={}, scalability={}, vendor_lockin_tolerance={}",
            constraints.budget,
            constraints.data_privacy,
            constraints.scalability,
            constraints.vendor_lockin_tolerance
        );

        let result = self.engine.compare(&constraints);
        tracing::debug!(
            "{} pros/{} cons for {}, {} pros/{} cons for {}",
            result.managed.pros.len(),
            result.managed.cons.len(),
            result.managed.name,
            result.hosted.pros.len(),
            result.hosted.cons.len(),
            result.hosted.name
        );

        Ok(Report {
            constraints,
            result,
            preamble: None,
        })
    }

    /// Like `run`, with the preamble loaded first so a missing prompt file
    /// aborts before any question is asked.
    pub fn run_with_preamble<S, P>(&self, source: &mut S, prompt: &P) -> Result<Report>
    where
        S: ConstraintSource + ?Sized,
        P: PromptSource + ?Sized,
    {
        let preamble = prompt.load()?;
        let mut report = self.run(source)?;
        report.preamble = Some(preamble);
        Ok(report)
    }
}

impl Default for Referee {
    fn default() -> Self {
        Self::new(ComparisonEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Budget, ConstraintKey, Level, RawConstraints};
    use crate::utils::error::RefereeError;
    use std::path::PathBuf;

    struct Fixed(RawConstraints);

    impl ConstraintSource for Fixed {
        fn collect(&mut self) -> Result<RawConstraints> {
            Ok(self.0.clone())
        }
    }

    struct MissingPrompt;

    impl PromptSource for MissingPrompt {
        fn load(&self) -> Result<String> {
            Err(RefereeError::PromptNotFound {
                path: PathBuf::from("nowhere.txt"),
            })
        }
    }

    struct StaticPrompt;

    impl PromptSource for StaticPrompt {
        fn load(&self) -> Result<String> {
            Ok("You are a neutral referee.".to_string())
        }
    }

    #[test]
    fn test_run_normalizes_before_comparing() {
        let mut raw = RawConstraints::new();
        raw.set(ConstraintKey::Budget, "low");
        raw.set(ConstraintKey::DataPrivacy, "extreme");

        let report = Referee::default().run(&mut Fixed(raw)).unwrap();
        assert_eq!(report.constraints.budget, Budget::Low);
        assert_eq!(report.constraints.data_privacy, Level::Low);
        assert!(report.preamble.is_none());
    }

    #[test]
    fn test_missing_prompt_aborts_run() {
        let result = Referee::default()
            .run_with_preamble(&mut Fixed(RawConstraints::new()), &MissingPrompt);
        assert!(matches!(result, Err(RefereeError::PromptNotFound { .. })));
    }

    #[test]
    fn test_preamble_attached_to_report() {
        let report = Referee::default()
            .run_with_preamble(&mut Fixed(RawConstraints::new()), &StaticPrompt)
            .unwrap();
        assert_eq!(report.preamble.as_deref(), Some("You are a neutral referee."));
    }
}
