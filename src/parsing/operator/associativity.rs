
/// The associativity of an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Associativity {
  left_assoc: bool,
  right_assoc: bool,
}

impl Associativity {
  /// Indicates an operator which associates to the left.
  pub const LEFT: Associativity = Associativity {
    left_assoc: true,
    right_assoc: false,
  };
  pub const fn is_left_assoc(self) -> bool {
    self.left_assoc
  }
  pub const fn is_right_assoc(self) -> bool {
    self.right_assoc
  }
}
