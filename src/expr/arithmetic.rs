
//! Floating-point arithmetic for the four operators.

use crate::error::EvalError;
use crate::mode::CalculationMode;
use crate::parsing::operator::Operator;

/// Applies `op` to `left` and `right`.
///
/// Division by exactly zero (either sign) is always an error. With
/// the strict-finite flag set, a non-finite result is an error as
/// well.
pub fn apply(op: Operator, left: f64, right: f64, mode: &CalculationMode) -> Result<f64, EvalError> {
  let value = match op {
    Operator::Add => left + right,
    Operator::Subtract => left - right,
    Operator::Multiply => left * right,
    Operator::Divide => {
      if right == 0.0 {
        return Err(EvalError::DivisionByZero);
      }
      left / right
    }
  };
  check_finite(value, mode)
}

/// Passes `value` through, unless the strict-finite flag is set and
/// `value` is NaN or infinite.
pub fn check_finite(value: f64, mode: &CalculationMode) -> Result<f64, EvalError> {
  if mode.has_strict_finite_flag() && !value.is_finite() {
    Err(EvalError::NonFiniteResult { value })
  } else {
    Ok(value)
  }
}
