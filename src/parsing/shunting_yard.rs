
use super::operator::Operator;
use super::source::Span;

use log::trace;

use std::error::{Error as StdError};
use std::fmt::{self, Display, Formatter};

/// A token, for the purposes of the shunting yard algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<T> {
  data: TokenData<T>,
  span: Span,
}

/// The contents of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenData<T> {
  /// A value in the target language.
  Scalar(T),
  /// An infix, binary operator.
  InfixOperator(Operator),
  LeftParen,
  RightParen,
}

/// Internal type which tracks an output value together with the first
/// token that produced it. Used to produce better error messages.
#[derive(Debug, Clone)]
struct OutputWithToken<T, O> {
  output: O,
  token: Token<T>,
}

#[derive(Clone, Debug)]
enum OpStackValue {
  Operator { operator: Operator, span: Span },
  LeftParen { span: Span },
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ShuntingYardError<T, E: StdError> {
  CustomError(E),
  UnexpectedEOF,
  UnexpectedToken(Token<T>),
  /// A parenthesis with no partner. The span is that of the
  /// offending parenthesis.
  UnmatchedParen(Span),
  /// A `()` pair with nothing inside it.
  EmptyGroup(Span),
}

/// A type implementing this trait is capable of driving the shunting
/// yard algorithm and compiling tokens to a given target language.
pub trait ShuntingYardDriver<T> {
  type Output;
  type Error: StdError;

  fn compile_scalar(&mut self, scalar: T, span: Span) -> Result<Self::Output, Self::Error>;
  fn compile_infix_op(
    &mut self,
    left: Self::Output,
    infix: Operator,
    right: Self::Output,
  ) -> Result<Self::Output, Self::Error>;
}

impl<T> Token<T> {
  pub fn scalar(data: T, span: Span) -> Self {
    Self { data: TokenData::Scalar(data), span }
  }

  pub fn infix_operator(op: Operator, span: Span) -> Self {
    Self { data: TokenData::InfixOperator(op), span }
  }

  pub fn left_paren(span: Span) -> Self {
    Self { data: TokenData::LeftParen, span }
  }

  pub fn right_paren(span: Span) -> Self {
    Self { data: TokenData::RightParen, span }
  }

  pub fn span(&self) -> Span {
    self.span
  }

  pub fn is_left_paren(&self) -> bool {
    matches!(self.data, TokenData::LeftParen)
  }

  pub fn is_right_paren(&self) -> bool {
    matches!(self.data, TokenData::RightParen)
  }
}

impl<T: Display> Display for TokenData<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      TokenData::Scalar(s) => s.fmt(f),
      TokenData::InfixOperator(op) => op.fmt(f),
      TokenData::LeftParen => write!(f, "("),
      TokenData::RightParen => write!(f, ")"),
    }
  }
}

impl<T: Display> Display for Token<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    write!(f, "{}", self.data)
  }
}

impl<T: Display, E: StdError> Display for ShuntingYardError<T, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      ShuntingYardError::CustomError(e) =>
        write!(f, "{}", e),
      ShuntingYardError::UnexpectedEOF =>
        write!(f, "unexpected end of expression"),
      ShuntingYardError::UnexpectedToken(t) =>
        write!(f, "unexpected token '{}' at position {}", t.data, t.span.start),
      ShuntingYardError::UnmatchedParen(span) =>
        write!(f, "unmatched parenthesis at position {}", span.start),
      ShuntingYardError::EmptyGroup(span) =>
        write!(f, "empty parentheses at position {}", span.start),
    }
  }
}

impl<T, E> StdError for ShuntingYardError<T, E>
where T: Display + fmt::Debug,
      E: StdError + 'static {
  fn source(&self) -> Option<&(dyn StdError + 'static)> {
    match self {
      ShuntingYardError::CustomError(e) => Some(e),
      _ => None,
    }
  }
}

impl<T, E: StdError> From<E> for ShuntingYardError<T, E> {
  fn from(e: E) -> Self {
    Self::CustomError(e)
  }
}

/// Parses an infix token sequence, honoring operator precedence,
/// associativity, and parentheses, and compiles it with `driver`.
///
/// Operands and operators must alternate. Operands are compiled in
/// source order, and each operator is compiled after both of its
/// operands.
///
/// Two operands side by side are an error, but it is only reported
/// once the enclosing group has been reduced. Errors raised by the
/// driver while reducing that group (such as a division by zero)
/// take priority.
pub fn parse<T, D, I>(
  driver: &mut D,
  input: I,
) -> Result<D::Output, ShuntingYardError<T, D::Error>>
where T: Clone,
      D: ShuntingYardDriver<T>,
      I: IntoIterator<Item = Token<T>> {
  let mut operator_stack: Vec<OpStackValue> = Vec::new();
  let mut output_stack: Vec<OutputWithToken<T, D::Output>> = Vec::new();
  // True when the next token must begin an operand (a scalar or a
  // left parenthesis).
  let mut expecting_operand = true;
  // One slot per open group, plus the top level: the first operand in
  // that group that directly followed another operand.
  let mut juxtaposed: Vec<Option<Token<T>>> = vec![None];

  for token in input {
    match &token.data {
      TokenData::Scalar(t) => {
        if !expecting_operand {
          reduce_group(driver, &mut operator_stack, &mut output_stack)?;
          note_juxtaposed(&mut juxtaposed, &token);
        }
        let output = driver.compile_scalar(t.clone(), token.span)?;
        output_stack.push(OutputWithToken { output, token });
        expecting_operand = false;
      }
      TokenData::LeftParen => {
        if !expecting_operand {
          reduce_group(driver, &mut operator_stack, &mut output_stack)?;
          note_juxtaposed(&mut juxtaposed, &token);
        }
        operator_stack.push(OpStackValue::LeftParen { span: token.span });
        juxtaposed.push(None);
      }
      TokenData::InfixOperator(op) => {
        if expecting_operand {
          return Err(ShuntingYardError::UnexpectedToken(token));
        }
        // Pop operators until we hit one which binds more loosely.
        while let Some(stack_value) = operator_stack.pop() {
          match stack_value {
            OpStackValue::Operator { operator, span } if compare_precedence(operator, *op) => {
              simplify_operator(driver, &mut output_stack, operator, span)?;
            }
            other => {
              operator_stack.push(other);
              break;
            }
          }
        }
        operator_stack.push(OpStackValue::Operator { operator: *op, span: token.span });
        expecting_operand = true;
      }
      TokenData::RightParen => {
        if expecting_operand {
          if let Some(OpStackValue::LeftParen { span }) = operator_stack.last() {
            return Err(ShuntingYardError::EmptyGroup(span.merge(token.span)));
          }
          return Err(ShuntingYardError::UnexpectedToken(token));
        }
        loop {
          match operator_stack.pop() {
            None => return Err(ShuntingYardError::UnmatchedParen(token.span)),
            Some(OpStackValue::LeftParen { .. }) => break,
            Some(OpStackValue::Operator { operator, span }) => {
              simplify_operator(driver, &mut output_stack, operator, span)?;
            }
          }
        }
        if let Some(Some(token)) = juxtaposed.pop() {
          return Err(ShuntingYardError::UnexpectedToken(token));
        }
      }
    }
  }

  if expecting_operand {
    return Err(ShuntingYardError::UnexpectedEOF);
  }

  // Pop and resolve remaining operators.
  while let Some(stack_value) = operator_stack.pop() {
    match stack_value {
      OpStackValue::LeftParen { span } => return Err(ShuntingYardError::UnmatchedParen(span)),
      OpStackValue::Operator { operator, span } => {
        simplify_operator(driver, &mut output_stack, operator, span)?;
      }
    }
  }

  if let Some(Some(token)) = juxtaposed.pop() {
    return Err(ShuntingYardError::UnexpectedToken(token));
  }

  let mut output_stack = output_stack.into_iter();
  let final_result = output_stack.next().ok_or(ShuntingYardError::UnexpectedEOF)?;
  if let Some(remaining_value) = output_stack.next() {
    return Err(ShuntingYardError::UnexpectedToken(remaining_value.token));
  }
  Ok(final_result.output)
}

fn compare_precedence(stack_op: Operator, current_op: Operator) -> bool {
  stack_op.precedence() > current_op.precedence() ||
    (stack_op.precedence() == current_op.precedence() && current_op.associativity().is_left_assoc())
}

/// Reduces every operator in the innermost open group, stopping at
/// its left parenthesis (which stays on the stack).
fn reduce_group<T, D>(
  driver: &mut D,
  operator_stack: &mut Vec<OpStackValue>,
  output_stack: &mut Vec<OutputWithToken<T, D::Output>>,
) -> Result<(), ShuntingYardError<T, D::Error>>
where D: ShuntingYardDriver<T> {
  while let Some(stack_value) = operator_stack.pop() {
    match stack_value {
      OpStackValue::Operator { operator, span } => {
        simplify_operator(driver, output_stack, operator, span)?;
      }
      left_paren @ OpStackValue::LeftParen { .. } => {
        operator_stack.push(left_paren);
        break;
      }
    }
  }
  Ok(())
}

fn note_juxtaposed<T: Clone>(juxtaposed: &mut [Option<Token<T>>], token: &Token<T>) {
  if let Some(slot) = juxtaposed.last_mut() {
    slot.get_or_insert_with(|| token.clone());
  }
}

fn simplify_operator<T, D>(
  driver: &mut D,
  output_stack: &mut Vec<OutputWithToken<T, D::Output>>,
  operator: Operator,
  span: Span,
) -> Result<(), ShuntingYardError<T, D::Error>>
where D: ShuntingYardDriver<T> {
  let (arg1, arg2) = output_stack.pop()
    .and_then(|arg2| output_stack.pop().map(|arg1| (arg1, arg2)))
    .ok_or(ShuntingYardError::UnexpectedEOF)?;
  trace!("reducing operator '{}' at {}", operator, span);
  let output = driver.compile_infix_op(arg1.output, operator, arg2.output)?;
  output_stack.push(OutputWithToken { output, token: arg1.token });
  Ok(())
}
