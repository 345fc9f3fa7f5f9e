use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod functions;
pub mod session;
pub mod syntax;
pub mod utils;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use functions::cross_multiply::{
  ColumnInputs, DivisorPair, FactorGroup, FactorOptions, FactorResult,
  FactorStep, Factorization, FailureReason, Locale, StepKind, VisualData,
  enumerate_divisor_pairs, expand, factorize, factorize_coeffs,
  matches_expected, search, validate_inputs, verification_lines,
};
pub use functions::display::{
  format_factorization, format_group, format_polynomial,
};
pub use functions::presets::{Preset, presets};
pub use session::{Advance, StepSession};
pub use syntax::{
  CoeffKey, PolynomialCoeffs, parse_assignment, parse_coefficient_text,
  parse_polynomial,
};
pub use utils::{
  MAX_PRACTICE_BOUND, PracticeProblem, practice_problem, random_problem,
};

#[derive(Parser)]
#[grammar = "polynomial.pest"]
pub struct PolynomialParser;

#[derive(Error, Debug)]
pub enum FactorError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Unsupported term: {0}")]
  UnsupportedTerm(String),
  #[error("Invalid coefficient assignment: {key}={text}")]
  InvalidCoefficient { key: String, text: String },
  #[error("Input does not match step {step}")]
  InputMismatch { step: usize },
}

impl PolynomialParser {
  pub fn parse_polynomial(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  PolynomialParser::parse_polynomial(input)
}

/// Parse a polynomial written out as text and factor it.
pub fn solve(
  input: &str,
  options: &FactorOptions,
) -> Result<FactorResult, FactorError> {
  let coeffs = parse_polynomial(input)?;
  tracing::debug!(input, polynomial = %format_polynomial(&coeffs), "parsed");
  Ok(factorize_coeffs(&coeffs, options))
}
