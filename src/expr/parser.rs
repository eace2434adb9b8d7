
//! Drivers which turn a token sequence into an [`Expr`] or directly
//! into a value, using the shunting yard parser.

use super::Expr;
use super::arithmetic;
use super::number::NumberLiteral;
use super::tokenizer::Token;
use crate::error::EvalError;
use crate::mode::CalculationMode;
use crate::parsing::operator::Operator;
use crate::parsing::shunting_yard::{self, ShuntingYardDriver};
use crate::parsing::source::Span;

/// Driver which builds an [`Expr`] tree.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ExprBuilder {}

/// Driver which computes the value of the expression as it is
/// parsed, without building a tree.
#[derive(Clone, Debug)]
pub struct Evaluator<'a> {
  mode: &'a CalculationMode,
}

impl ExprBuilder {
  pub fn new() -> Self {
    Self {}
  }
}

impl<'a> Evaluator<'a> {
  pub fn new(mode: &'a CalculationMode) -> Self {
    Self { mode }
  }
}

impl ShuntingYardDriver<NumberLiteral> for ExprBuilder {
  type Output = Expr;
  type Error = EvalError;

  fn compile_scalar(&mut self, scalar: NumberLiteral, _span: Span) -> Result<Expr, EvalError> {
    Ok(Expr::Number(scalar.value()?))
  }

  fn compile_infix_op(&mut self, left: Expr, op: Operator, right: Expr) -> Result<Expr, EvalError> {
    Ok(Expr::binary_op(left, op, right))
  }
}

impl<'a> ShuntingYardDriver<NumberLiteral> for Evaluator<'a> {
  type Output = f64;
  type Error = EvalError;

  fn compile_scalar(&mut self, scalar: NumberLiteral, _span: Span) -> Result<f64, EvalError> {
    arithmetic::check_finite(scalar.value()?, self.mode)
  }

  fn compile_infix_op(&mut self, left: f64, op: Operator, right: f64) -> Result<f64, EvalError> {
    arithmetic::apply(op, left, right, self.mode)
  }
}

/// Parses a token sequence into an expression tree.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Expr, EvalError> {
  Ok(shunting_yard::parse(&mut ExprBuilder::new(), tokens)?)
}

/// Evaluates a token sequence, applying `*` and `/` before `+` and
/// `-`, and operators of equal precedence left to right.
pub fn evaluate_tokens(tokens: Vec<Token>, mode: &CalculationMode) -> Result<f64, EvalError> {
  Ok(shunting_yard::parse(&mut Evaluator::new(mode), tokens)?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorKind;
  use crate::expr::tokenizer::tokenize;

  fn eval(input: &str) -> Result<f64, EvalError> {
    evaluate_tokens(tokenize(input).unwrap(), &CalculationMode::new())
  }

  #[test]
  fn test_precedence() {
    assert_eq!(eval("5 + 3 * 2"), Ok(11.0));
    assert_eq!(eval("15 / 3 + 2 * 4"), Ok(13.0));
    assert_eq!(eval("2 * 3 - 4 / 2 + 1"), Ok(5.0));
  }

  #[test]
  fn test_left_to_right() {
    assert_eq!(eval("20 / 4 / 5"), Ok(1.0));
    assert_eq!(eval("10 - 4 - 3"), Ok(3.0));
    assert_eq!(eval("8 / 2 * 4"), Ok(16.0));
    assert_eq!(eval("10 - 2 + 3"), Ok(11.0));
  }

  #[test]
  fn test_floating_point_order_preserved() {
    // (0.1 + 0.2) + 0.3 and 0.1 + (0.2 + 0.3) differ in the last bit.
    assert_eq!(eval("0.1 + 0.2 + 0.3"), Ok((0.1 + 0.2) + 0.3));
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(eval("15 / 3 + 2 / 0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("1 / (2 - 2)"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("0 / 5"), Ok(0.0));
  }

  #[test]
  fn test_malformed() {
    assert_eq!(eval("5 3").unwrap_err().kind(), ErrorKind::MalformedExpression);
    assert_eq!(eval("5 +").unwrap_err().kind(), ErrorKind::MalformedExpression);
    assert_eq!(eval("* 5").unwrap_err().kind(), ErrorKind::MalformedExpression);
    assert_eq!(eval("1.2.3 + 1").unwrap_err(), EvalError::malformed("Invalid number: 1.2.3"));
  }

  #[test]
  fn test_unary_minus_unsupported() {
    assert_eq!(eval("-5 + 3").unwrap_err().kind(), ErrorKind::MalformedExpression);
    assert_eq!(eval("3 * -2").unwrap_err().kind(), ErrorKind::MalformedExpression);
  }

  #[test]
  fn test_parse_tokens() {
    let expr = parse_tokens(tokenize("(5 + 3) * 2").unwrap()).unwrap();
    assert_eq!(expr.to_string(), "(5 + 3) * 2");
    assert_eq!(expr.evaluate(&CalculationMode::new()), Ok(16.0));
  }

  #[test]
  fn test_parse_tokens_agrees_with_evaluator() {
    let mode = CalculationMode::new();
    for input in ["1 + 2 * 3 - 4 / 5", "((1.5))", "9 / 3 / 3 * 7 - 0.25"] {
      let tokens = tokenize(input).unwrap();
      let tree = parse_tokens(tokens.clone()).unwrap();
      assert_eq!(tree.evaluate(&mode), evaluate_tokens(tokens, &mode));
    }
  }
}
