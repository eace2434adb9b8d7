
//! Cursor over an input string, used by the expression lexer.

use super::source::{SourceOffset, Span};

use regex::Regex;
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0),
    }
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes, returning the
  /// skipped portion. Never advances beyond the end of the input.
  ///
  /// Panics if the new position does not fall on a character
  /// boundary.
  pub fn advance(&mut self, amount: usize) -> TokenizerMatch<'a> {
    let amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start: match_pos,
      end: match_pos + amount,
    }
  }

  /// If the input at the current position matches `regex`, consumes
  /// and returns the match.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");
    Some(self.advance(m.len()))
  }

  /// Skips spaces and tabs. Other whitespace, such as newlines, is
  /// left for the lexer to reject.
  pub fn consume_spaces(&mut self) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*").unwrap());
    self.read_regex(&RE).expect("regex should not fail");
  }
}

impl<'a> TokenizerMatch<'a> {
  pub fn as_str(&self) -> &'a str {
    self.matched_str
  }
  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }}
