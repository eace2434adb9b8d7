
//! Parenthesis matching, performed before precedence parsing.

use super::parser;
use super::tokenizer::Token;
use crate::error::EvalError;
use crate::mode::CalculationMode;

use log::trace;

/// Checks that every `(` in `tokens` has a matching `)` and vice
/// versa. A stray `)` is reported at its own position; an unclosed
/// `(` is reported at the position of the outermost unclosed one.
///
/// If `max_depth` is given, also checks that no more than `max_depth`
/// parentheses are open at any point.
pub fn check_balanced(tokens: &[Token], max_depth: Option<usize>) -> Result<(), EvalError> {
  let mut open_positions = Vec::new();
  for token in tokens {
    if token.is_left_paren() {
      open_positions.push(token.span().start);
      if let Some(limit) = max_depth {
        if open_positions.len() > limit {
          return Err(EvalError::NestingTooDeep { limit, position: token.span().start });
        }
      }
    } else if token.is_right_paren() && open_positions.pop().is_none() {
      return Err(EvalError::UnbalancedParentheses { position: token.span().start });
    }
  }
  match open_positions.first() {
    Some(&position) => Err(EvalError::UnbalancedParentheses { position }),
    None => Ok(()),
  }
}

/// Evaluates a token sequence which may contain parentheses. Grouping
/// is validated up front, so a mismatched parenthesis is reported
/// even when the expression contains other mistakes.
pub fn resolve(tokens: Vec<Token>, mode: &CalculationMode) -> Result<f64, EvalError> {
  check_balanced(&tokens, mode.max_depth())?;
  trace!("parentheses balanced in {} token(s)", tokens.len());
  parser::evaluate_tokens(tokens, mode)
}
