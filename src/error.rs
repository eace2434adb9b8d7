
use crate::expr::number::{NumberLiteral, ParseNumberError};
use crate::expr::tokenizer::TokenizerError;
use crate::parsing::shunting_yard::ShuntingYardError;
use crate::parsing::source::SourceOffset;

use thiserror::Error;

/// Everything that can go wrong while evaluating one expression.
/// Every failure is terminal for that evaluation.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Invalid character: {ch} at position {position}")]
  InvalidCharacter {
    ch: char,
    position: SourceOffset,
  },
  #[error("Empty expression")]
  EmptyExpression,
  #[error("Mismatched parentheses at position {position}")]
  UnbalancedParentheses {
    position: SourceOffset,
  },
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Invalid expression: {reason}")]
  MalformedExpression {
    reason: String,
  },
  #[error("Result is not a finite number: {value}")]
  NonFiniteResult {
    value: f64,
  },
  #[error("Parentheses nested more than {limit} levels deep at position {position}")]
  NestingTooDeep {
    limit: usize,
    position: SourceOffset,
  },
}

/// The kind of an [`EvalError`], without any of its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  InvalidCharacter,
  EmptyExpression,
  UnbalancedParentheses,
  DivisionByZero,
  MalformedExpression,
  NonFiniteResult,
  NestingTooDeep,
}

impl EvalError {
  pub fn malformed(reason: impl Into<String>) -> Self {
    EvalError::MalformedExpression { reason: reason.into() }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      EvalError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
      EvalError::EmptyExpression => ErrorKind::EmptyExpression,
      EvalError::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
      EvalError::DivisionByZero => ErrorKind::DivisionByZero,
      EvalError::MalformedExpression { .. } => ErrorKind::MalformedExpression,
      EvalError::NonFiniteResult { .. } => ErrorKind::NonFiniteResult,
      EvalError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
    }
  }
}

impl From<TokenizerError> for EvalError {
  fn from(err: TokenizerError) -> Self {
    match err {
      TokenizerError::UnexpectedChar(ch, position) => EvalError::InvalidCharacter { ch, position },
    }
  }
}

impl From<ParseNumberError> for EvalError {
  fn from(err: ParseNumberError) -> Self {
    EvalError::malformed(err.to_string())
  }
}

impl From<ShuntingYardError<NumberLiteral, EvalError>> for EvalError {
  fn from(err: ShuntingYardError<NumberLiteral, EvalError>) -> Self {
    match err {
      ShuntingYardError::CustomError(e) => e,
      ShuntingYardError::UnmatchedParen(span) => EvalError::UnbalancedParentheses { position: span.start },
      ShuntingYardError::EmptyGroup(_) => EvalError::EmptyExpression,
      err @ (ShuntingYardError::UnexpectedEOF | ShuntingYardError::UnexpectedToken(_)) => {
        EvalError::malformed(err.to_string())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::tokenizer::Token;
  use crate::parsing::source::Span;

  #[test]
  fn test_messages() {
    let err = EvalError::InvalidCharacter { ch: '&', position: SourceOffset(2) };
    assert_eq!(err.to_string(), "Invalid character: & at position 2");
    assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(EvalError::EmptyExpression.to_string(), "Empty expression");
  }

  #[test]
  fn test_from_shunting_yard_error() {
    let span = Span::new(SourceOffset(4), SourceOffset(5));

    let err: EvalError = ShuntingYardError::UnmatchedParen(span).into();
    assert_eq!(err, EvalError::UnbalancedParentheses { position: SourceOffset(4) });

    let err: EvalError = ShuntingYardError::EmptyGroup(span).into();
    assert_eq!(err.kind(), ErrorKind::EmptyExpression);

    let token = Token::scalar(NumberLiteral::new("3"), span);
    let err: EvalError = ShuntingYardError::UnexpectedToken(token).into();
    assert_eq!(err, EvalError::malformed("unexpected token '3' at position 4"));

    let err: EvalError = ShuntingYardError::CustomError(EvalError::DivisionByZero).into();
    assert_eq!(err, EvalError::DivisionByZero);
  }

  #[test]
  fn test_from_parse_number_error() {
    let err: EvalError = NumberLiteral::new("1.2.3").value().unwrap_err().into();
    assert_eq!(err, EvalError::malformed("Invalid number: 1.2.3"));
  }
}
