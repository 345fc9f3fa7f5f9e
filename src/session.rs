//! Step-by-step playback of a narrated factorization.
//!
//! The factorization itself is immutable; the session only owns the
//! cursor, so a consumer can throw it away and start over at any time.

use crate::FactorError;
use crate::functions::cross_multiply::{
  ColumnInputs, FactorStep, Factorization, validate_inputs,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
  /// Moved to the next step.
  Moved,
  /// Moved onto the final step: time to reveal the result.
  Revealed,
  /// Advanced past the final step; the session is over.
  Finished,
}

#[derive(Debug, Clone)]
pub struct StepSession {
  factorization: Factorization,
  cursor: usize,
  finished: bool,
}

impl StepSession {
  pub fn new(factorization: Factorization) -> Self {
    Self {
      factorization,
      cursor: 0,
      finished: false,
    }
  }

  pub fn factorization(&self) -> &Factorization {
    &self.factorization
  }

  /// Zero-based index of the current step.
  pub fn position(&self) -> usize {
    self.cursor
  }

  pub fn len(&self) -> usize {
    self.factorization.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.factorization.steps.is_empty()
  }

  pub fn is_finished(&self) -> bool {
    self.finished
  }

  pub fn current(&self) -> Option<&FactorStep> {
    self.factorization.steps.get(self.cursor)
  }

  /// Move to the next step. An interactive step only lets the learner
  /// through when `inputs` agree with its expectations; otherwise the
  /// cursor stays put and `InputMismatch` is returned.
  pub fn advance(
    &mut self,
    inputs: &ColumnInputs,
  ) -> Result<Advance, FactorError> {
    if self.finished || self.cursor + 1 >= self.len() {
      self.finished = true;
      return Ok(Advance::Finished);
    }

    if let Some(step) = self.current() {
      if step.interactive && !validate_inputs(step, inputs) {
        tracing::debug!(step = self.cursor, "entered values rejected");
        return Err(FactorError::InputMismatch { step: self.cursor });
      }
    }

    self.cursor += 1;
    if self.cursor + 1 == self.len() {
      Ok(Advance::Revealed)
    } else {
      Ok(Advance::Moved)
    }
  }
}
