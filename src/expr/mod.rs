
pub mod arithmetic;
pub mod number;
pub mod parens;
pub mod parser;
pub mod tokenizer;


use crate::display::expr_to_string;
use crate::error::EvalError;
use crate::mode::CalculationMode;
use crate::parsing::operator::Operator;

use std::fmt::{self, Display, Formatter};
use std::mem;

/// A parsed arithmetic expression.
///
/// Trees produced from long operator chains can be very deep, so
/// evaluation, display, comparison, and dropping all walk the tree
/// with an explicit stack rather than by recursion.
#[derive(Debug, Clone)]
pub enum Expr {
  Number(f64),
  BinaryOp(Box<Expr>, Operator, Box<Expr>),
}

enum EvalStep<'a> {
  Visit(&'a Expr),
  Apply(Operator),
}

impl Expr {
  /// Convenience constructor for [`Expr::BinaryOp`].
  pub fn binary_op(left: Expr, op: Operator, right: Expr) -> Expr {
    Expr::BinaryOp(Box::new(left), op, Box::new(right))
  }

  /// Evaluates the tree, left operand before right operand.
  pub fn evaluate(&self, mode: &CalculationMode) -> Result<f64, EvalError> {
    let mut steps = vec![EvalStep::Visit(self)];
    let mut values: Vec<f64> = Vec::new();
    while let Some(step) = steps.pop() {
      match step {
        EvalStep::Visit(Expr::Number(n)) => {
          values.push(arithmetic::check_finite(*n, mode)?);
        }
        EvalStep::Visit(Expr::BinaryOp(left, op, right)) => {
          steps.push(EvalStep::Apply(*op));
          steps.push(EvalStep::Visit(right));
          steps.push(EvalStep::Visit(left));
        }
        EvalStep::Apply(op) => {
          let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
            unreachable!("both operands are evaluated before their operator");
          };
          values.push(arithmetic::apply(op, left, right, mode)?);
        }
      }
    }
    match values.pop() {
      Some(value) => Ok(value),
      None => unreachable!("evaluating a tree always produces a value"),
    }
  }

  /// Detaches the children of a binary node, leaving placeholder
  /// leaves behind.
  fn take_children(&mut self) -> Option<(Expr, Expr)> {
    match self {
      Expr::Number(_) => None,
      Expr::BinaryOp(left, _, right) => Some((
        mem::replace(left.as_mut(), Expr::Number(0.0)),
        mem::replace(right.as_mut(), Expr::Number(0.0)),
      )),
    }
  }
}

impl PartialEq for Expr {
  fn eq(&self, other: &Expr) -> bool {
    let mut pending = vec![(self, other)];
    while let Some(pair) = pending.pop() {
      match pair {
        (Expr::Number(a), Expr::Number(b)) => {
          if a != b {
            return false;
          }
        }
        (Expr::BinaryOp(left_a, op_a, right_a), Expr::BinaryOp(left_b, op_b, right_b)) => {
          if op_a != op_b {
            return false;
          }
          pending.push((right_a.as_ref(), right_b.as_ref()));
          pending.push((left_a.as_ref(), left_b.as_ref()));
        }
        _ => return false,
      }
    }
    true
  }
}

impl Drop for Expr {
  fn drop(&mut self) {
    let mut detached = Vec::new();
    if let Some((left, right)) = self.take_children() {
      detached.push(left);
      detached.push(right);
    }
    while let Some(mut expr) = detached.pop() {
      if let Some((left, right)) = expr.take_children() {
        detached.push(left);
        detached.push(right);
      }
    }
  }
}

impl From<f64> for Expr {
  fn from(n: f64) -> Expr {
    Expr::Number(n)
  }
}

impl Display for Expr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&expr_to_string(self))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_evaluate() {
    let expr = Expr::binary_op(
      Expr::binary_op(Expr::Number(5.0), Operator::Add, Expr::Number(3.0)),
      Operator::Multiply,
      Expr::Number(2.0),
    );
    assert_eq!(expr.evaluate(&CalculationMode::new()), Ok(16.0));
    assert_eq!(expr.to_string(), "(5 + 3) * 2");
  }

  fn left_deep_chain(len: usize) -> Expr {
    (1..len).fold(Expr::Number(1.0), |acc, _| Expr::binary_op(acc, Operator::Add, Expr::Number(1.0)))
  }

  #[test]
  fn test_deep_tree() {
    let expr = left_deep_chain(100_000);
    assert_eq!(expr.evaluate(&CalculationMode::new()), Ok(100_000.0));
    assert!(expr == left_deep_chain(100_000));
    assert!(expr != left_deep_chain(99_999));
    drop(expr);
  }

  #[test]
  fn test_eq() {
    let a = Expr::binary_op(Expr::Number(1.0), Operator::Add, Expr::Number(2.0));
    let b = Expr::binary_op(Expr::Number(1.0), Operator::Subtract, Expr::Number(2.0));
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_ne!(a, Expr::Number(3.0));
  }

  #[test]
  fn test_evaluate_reports_leftmost_error_first() {
    let zero_division = Expr::binary_op(Expr::Number(1.0), Operator::Divide, Expr::Number(0.0));
    let overflow = Expr::Number(f64::INFINITY);
    let expr = Expr::binary_op(zero_division, Operator::Add, overflow);
    let strict = CalculationMode::new().with_strict_finite(true);
    assert_eq!(expr.evaluate(&strict), Err(EvalError::DivisionByZero));
  }

  #[test]
  fn test_evaluate_division_by_zero() {
    let expr = Expr::binary_op(Expr::Number(1.0), Operator::Divide, Expr::binary_op(Expr::Number(2.0), Operator::Subtract, Expr::Number(2.0)));
    assert_eq!(expr.evaluate(&CalculationMode::new()), Err(EvalError::DivisionByZero));
  }
}
