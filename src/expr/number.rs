
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The source text of a numeric literal, exactly as it appeared in
/// the input. The lexer groups digits and decimal points without
/// checking them, so a literal is not necessarily a valid number
/// until [`NumberLiteral::value`] succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
  text: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid number: {literal}")]
pub struct ParseNumberError {
  literal: String,
}

impl NumberLiteral {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  /// Parses the literal as an IEEE double. Literals such as `5.` and
  /// `.5` are accepted, but `.` alone and literals with more than one
  /// decimal point are not.
  pub fn value(&self) -> Result<f64, ParseNumberError> {
    f64::from_str(&self.text).map_err(|_| ParseNumberError { literal: self.text.clone() })
  }
}

impl Display for NumberLiteral {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}
