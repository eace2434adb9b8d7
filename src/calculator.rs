
//! Entry points for evaluating expression strings.

use crate::error::EvalError;
use crate::expr::{parens, parser, Expr};
use crate::expr::tokenizer::{tokenize, Token};
use crate::mode::CalculationMode;

use log::debug;

/// Evaluates expressions under a fixed [`CalculationMode`]. A
/// `Calculator` holds no mutable state, so one value can be shared
/// freely between threads.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
  mode: CalculationMode,
}

impl Calculator {
  pub fn new(mode: CalculationMode) -> Self {
    Self { mode }
  }

  pub fn mode(&self) -> &CalculationMode {
    &self.mode
  }

  /// Evaluates `expression` to a number.
  pub fn calculate(&self, expression: &str) -> Result<f64, EvalError> {
    debug!("evaluating {:?}", expression);
    let tokens = self.tokenize_nonempty(expression)?;
    let result = parens::resolve(tokens, &self.mode);
    match &result {
      Ok(value) => debug!("{:?} = {}", expression, value),
      Err(err) => debug!("{:?} failed: {}", expression, err),
    }
    result
  }

  /// Parses `expression` into a tree without evaluating it. The same
  /// syntax errors are reported as by [`Calculator::calculate`].
  pub fn parse(&self, expression: &str) -> Result<Expr, EvalError> {
    let tokens = self.tokenize_nonempty(expression)?;
    parens::check_balanced(&tokens, self.mode.max_depth())?;
    parser::parse_tokens(tokens)
  }

  fn tokenize_nonempty(&self, expression: &str) -> Result<Vec<Token>, EvalError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
      return Err(EvalError::EmptyExpression);
    }
    Ok(tokens)
  }
}

/// Evaluates `expression` under the default [`CalculationMode`].
pub fn calculate(expression: &str) -> Result<f64, EvalError> {
  Calculator::default().calculate(expression)
}

/// Parses `expression` under the default [`CalculationMode`].
pub fn parse(expression: &str) -> Result<Expr, EvalError> {
  Calculator::default().parse(expression)
}
