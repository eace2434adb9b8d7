
mod precedence;
mod associativity;

pub use precedence::Precedence;
pub use associativity::Associativity;

use phf::phf_map;

use std::fmt::{self, Display, Formatter};

/// The binary arithmetic operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

static OPERATORS_BY_SYMBOL: phf::Map<char, Operator> = phf_map! {
  '+' => Operator::Add,
  '-' => Operator::Subtract,
  '*' => Operator::Multiply,
  '/' => Operator::Divide,
};

// Note: We borrow the Emacs Calc operator precedence values here. See
// https://www.gnu.org/software/emacs/manual/html_mono/calc.html#Composition-Basics
const ADDITIVE_PRECEDENCE: Precedence = Precedence::new(180);
const MULTIPLICATIVE_PRECEDENCE: Precedence = Precedence::new(190);

impl Operator {
  pub const ALL: [Operator; 4] = [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide];

  /// Looks up the operator written as `symbol`, if any.
  pub fn from_symbol(symbol: char) -> Option<Operator> {
    OPERATORS_BY_SYMBOL.get(&symbol).copied()
  }

  pub fn symbol(self) -> char {
    match self {
      Operator::Add => '+',
      Operator::Subtract => '-',
      Operator::Multiply => '*',
      Operator::Divide => '/',
    }
  }

  pub fn precedence(self) -> Precedence {
    match self {
      Operator::Add | Operator::Subtract => ADDITIVE_PRECEDENCE,
      Operator::Multiply | Operator::Divide => MULTIPLICATIVE_PRECEDENCE,
    }
  }

  /// All four operators group left to right, including the
  /// mathematically associative ones, since floating-point addition
  /// and multiplication are not associative.
  pub fn associativity(self) -> Associativity {
    Associativity::LEFT
  }

  /// The minimum precedence an expression must have to appear
  /// unparenthesized as the left operand of `self`.
  pub fn left_precedence(self) -> Precedence {
    if self.associativity().is_left_assoc() {
      self.precedence()
    } else {
      self.precedence().incremented()
    }
  }

  /// The minimum precedence an expression must have to appear
  /// unparenthesized as the right operand of `self`.
  pub fn right_precedence(self) -> Precedence {
    if self.associativity().is_right_assoc() {
      self.precedence()
    } else {
      self.precedence().incremented()
    }
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
