
//! Lexer for arithmetic expressions.

use super::number::NumberLiteral;
use crate::parsing::operator::Operator;
use crate::parsing::shunting_yard;
use crate::parsing::source::SourceOffset;
use crate::parsing::tokenizer::TokenizerState;

use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;
use log::trace;

pub type Token = shunting_yard::Token<NumberLiteral>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenizerError {
  #[error("Invalid character: {0}")]
  UnexpectedChar(char, SourceOffset),
}

/// Splits `input` into tokens. Whitespace between tokens is
/// discarded. Blank input produces an empty token list.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
  let mut state = TokenizerState::new(input);
  let tokens = read_tokens(&mut state)?;
  trace!("tokenized {} token(s)", tokens.len());
  Ok(tokens)
}

pub fn read_tokens(state: &mut TokenizerState<'_>) -> Result<Vec<Token>, TokenizerError> {
  let mut tokens = Vec::new();
  loop {
    state.consume_spaces();
    match read_one_token(state)? {
      Some(token) => tokens.push(token),
      None => return Ok(tokens),
    }
  }
}

/// Reads a single token, or returns `None` at the end of the input.
/// On error, the state is left at the offending character.
pub fn read_one_token(state: &mut TokenizerState<'_>) -> Result<Option<Token>, TokenizerError> {
  if let Some(token) = read_number_literal(state) {
    return Ok(Some(token));
  }

  let pos = state.current_pos();
  let Some(ch) = state.peek() else {
    return Ok(None);
  };
  let token = match ch {
    '(' => Token::left_paren(state.advance(1).span()),
    ')' => Token::right_paren(state.advance(1).span()),
    _ => match Operator::from_symbol(ch) {
      Some(op) => Token::infix_operator(op, state.advance(1).span()),
      None => return Err(TokenizerError::UnexpectedChar(ch, pos)),
    },
  };
  Ok(Some(token))
}

fn read_number_literal(state: &mut TokenizerState<'_>) -> Option<Token> {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.]+").unwrap());
  state.read_regex(&RE).map(|m| {
    Token::scalar(NumberLiteral::new(m.as_str()), m.span())
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::source::Span;

  fn span(start: usize, end: usize) -> Span {
    Span::new(SourceOffset(start), SourceOffset(end))
  }

  fn number(text: &str, start: usize, end: usize) -> Token {
    Token::scalar(NumberLiteral::new(text), span(start, end))
  }

  #[test]
  fn test_tokenize_simple_expression() {
    let tokens = tokenize("5 + 3 * 2").unwrap();
    assert_eq!(tokens, vec![
      number("5", 0, 1),
      Token::infix_operator(Operator::Add, span(2, 3)),
      number("3", 4, 5),
      Token::infix_operator(Operator::Multiply, span(6, 7)),
      number("2", 8, 9),
    ]);
  }

  #[test]
  fn test_tokenize_without_spaces() {
    let tokens = tokenize("(10.5-2)/4").unwrap();
    assert_eq!(tokens, vec![
      Token::left_paren(span(0, 1)),
      number("10.5", 1, 5),
      Token::infix_operator(Operator::Subtract, span(5, 6)),
      number("2", 6, 7),
      Token::right_paren(span(7, 8)),
      Token::infix_operator(Operator::Divide, span(8, 9)),
      number("4", 9, 10),
    ]);
  }

  #[test]
  fn test_tokenize_defers_literal_validation() {
    let tokens = tokenize("1.2.3 + .").unwrap();
    assert_eq!(tokens[0], number("1.2.3", 0, 5));
    assert_eq!(tokens[2], number(".", 8, 9));
  }

  #[test]
  fn test_space_splits_numbers() {
    let tokens = tokenize("12 34").unwrap();
    assert_eq!(tokens, vec![number("12", 0, 2), number("34", 3, 5)]);
  }

  #[test]
  fn test_tokenize_tabs() {
    let tokens = tokenize("\t1 +\t2 \t").unwrap();
    assert_eq!(tokens.len(), 3);
  }

  #[test]
  fn test_other_whitespace_rejected() {
    assert_eq!(tokenize("1\n+ 2"), Err(TokenizerError::UnexpectedChar('\n', SourceOffset(1))));
    assert_eq!(tokenize("1\u{a0}+ 2"), Err(TokenizerError::UnexpectedChar('\u{a0}', SourceOffset(1))));
    assert_eq!(tokenize("1\u{3000}+ 2"), Err(TokenizerError::UnexpectedChar('\u{3000}', SourceOffset(1))));
  }

  #[test]
  fn test_tokenize_blank() {
    assert_eq!(tokenize("").unwrap(), vec![]);
    assert_eq!(tokenize("   \t").unwrap(), vec![]);
  }

  #[test]
  fn test_invalid_character() {
    assert_eq!(tokenize("5 & 3"), Err(TokenizerError::UnexpectedChar('&', SourceOffset(2))));
    assert_eq!(tokenize("2^3"), Err(TokenizerError::UnexpectedChar('^', SourceOffset(1))));
    assert_eq!(tokenize("x"), Err(TokenizerError::UnexpectedChar('x', SourceOffset(0))));
  }

  #[test]
  fn test_invalid_character_reported_before_later_tokens() {
    assert_eq!(tokenize("(1 + 2) , 3)"), Err(TokenizerError::UnexpectedChar(',', SourceOffset(8))));
  }

  #[test]
  fn test_non_ascii_digits_rejected() {
    assert_eq!(tokenize("1 + ٣"), Err(TokenizerError::UnexpectedChar('٣', SourceOffset(4))));
  }

  #[test]
  fn test_deterministic() {
    let input = "((5 + 3) * 2) - 10 / 5";
    assert_eq!(tokenize(input).unwrap(), tokenize(input).unwrap());
  }
}
