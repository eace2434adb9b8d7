
//! Presentation of results and expressions to the user.

use crate::expr::Expr;
use crate::parsing::operator::{Operator, Precedence};

/// Formats an evaluation result for display. Integral values are
/// shown without a fractional part (`16`, not `16.0`), and negative
/// zero is shown as `0`.
pub fn format_result(value: f64) -> String {
  if value == 0.0 {
    // Catches -0.0 as well.
    String::from("0")
  } else {
    value.to_string()
  }
}

/// Renders `expr` with the fewest parentheses needed to parse back to
/// the same tree.
pub fn expr_to_string(expr: &Expr) -> String {
  let mut out = String::new();
  write_expr(&mut out, expr, Precedence::MIN);
  out
}

enum Piece<'a> {
  Expr(&'a Expr, Precedence),
  Operator(Operator),
  CloseParen,
}

/// Writes `expr` to `out`, parenthesizing it if it binds more loosely
/// than `prec`.
pub fn write_expr(out: &mut String, expr: &Expr, prec: Precedence) {
  let mut pieces = vec![Piece::Expr(expr, prec)];
  while let Some(piece) = pieces.pop() {
    match piece {
      Piece::Expr(Expr::Number(n), _) => {
        out.push_str(&format_result(*n));
      }
      Piece::Expr(Expr::BinaryOp(left, op, right), prec) => {
        if op.precedence() < prec {
          out.push('(');
          pieces.push(Piece::CloseParen);
        }
        pieces.push(Piece::Expr(right, op.right_precedence()));
        pieces.push(Piece::Operator(*op));
        pieces.push(Piece::Expr(left, op.left_precedence()));
      }
      Piece::Operator(op) => {
        out.push(' ');
        out.push(op.symbol());
        out.push(' ');
      }
      Piece::CloseParen => {
        out.push(')');
      }
    }
  }
}
