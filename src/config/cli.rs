use crate::domain::model::{ConstraintKey, RawConstraints};
use crate::domain::ports::ConstraintSource;
use crate::utils::error::Result;
use crate::utils::validation::clean_input;
use std::io::{BufRead, Write};

const RULE: &str = "============================================================";

/// Asks the constraint questions on a terminal, one line per answer.
pub struct InteractivePrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InteractivePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prompts for each of `keys` in order. End of input counts as an empty
    /// answer, which later normalizes to the default.
    pub fn ask(&mut self, keys: &[ConstraintKey]) -> Result<RawConstraints> {
        let mut answers = RawConstraints::new();
        if keys.is_empty() {
            return Ok(answers);
        }

        writeln!(self.writer, "\n{}", RULE)?;
        writeln!(self.writer, "☁️  CLOUD REFEREE - AWS Bedrock vs OpenAI API")?;
        writeln!(self.writer, "{}", RULE)?;
        writeln!(
            self.writer,
            "\nEnter your constraints to get a personalized comparison:\n"
        )?;

        for key in keys {
            write!(self.writer, "{}", key.prompt_label())?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                tracing::debug!("End of input while asking for {}", key.as_str());
            }
            answers.set(*key, clean_input(&line));
        }

        Ok(answers)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> ConstraintSource for InteractivePrompter<R, W> {
    fn collect(&mut self) -> Result<RawConstraints> {
        self.ask(&ConstraintKey::ALL)
    }
}

/// Merges several sources, later layers winning, and optionally falls back to
/// an interactive prompter for whatever is still unanswered.
pub struct LayeredSource<'a, R: BufRead, W: Write> {
    layers: Vec<Box<dyn ConstraintSource + 'a>>,
    interactive: Option<InteractivePrompter<R, W>>,
}

impl<'a, R: BufRead, W: Write> LayeredSource<'a, R, W> {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            interactive: None,
        }
    }

    pub fn layer(mut self, source: impl ConstraintSource + 'a) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    pub fn with_interactive(mut self, prompter: InteractivePrompter<R, W>) -> Self {
        self.interactive = Some(prompter);
        self
    }
}

impl<'a, R: BufRead, W: Write> Default for LayeredSource<'a, R, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: BufRead, W: Write> ConstraintSource for LayeredSource<'a, R, W> {
    fn collect(&mut self) -> Result<RawConstraints> {
        let mut merged = RawConstraints::new();
        for layer in self.layers.iter_mut() {
            merged = merged.merge(layer.collect()?);
        }

        if let Some(prompter) = self.interactive.as_mut() {
            let missing = merged.missing();
            if !missing.is_empty() {
                tracing::debug!("Prompting for {} unanswered constraint(s)", missing.len());
                merged = merged.merge(prompter.ask(&missing)?);
            }
        }

        Ok(merged)
    }
}
