
use bitflags::bitflags;

/// The calculator's current calculation mode includes several bitwise
/// flags indicating how to evaluate expressions, as well as an
/// optional limit on parenthesis nesting.
///
/// This structure is designed to be cheap to clone, but its exact
/// implementation is private.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculationMode {
  inner: CalculationModeBits,
  max_depth: Option<usize>,
}

bitflags! {
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
  struct CalculationModeBits: u8 {
    const STRICT_FINITE = 0b0001;
  }
}

impl CalculationMode {
  pub fn new() -> Self {
    Self::default()
  }

  /// The strict-finite flag is off by default. If the flag is off,
  /// calculations which overflow, such as a literal too large for an
  /// `f64` or `inf - inf`, produce the
  /// IEEE infinity or NaN value that the arithmetic naturally yields.
  /// If the flag is on, any non-finite intermediate or final value is
  /// reported as an error instead.
  ///
  /// Division by zero is an error regardless of this flag.
  pub fn has_strict_finite_flag(&self) -> bool {
    self.inner.contains(CalculationModeBits::STRICT_FINITE)
  }

  /// Sets the strict-finite flag. See
  /// [`CalculationMode::has_strict_finite_flag`].
  pub fn set_strict_finite_flag(&mut self, mode: bool) {
    self.inner.set(CalculationModeBits::STRICT_FINITE, mode);
  }

  /// The maximum number of simultaneously open parentheses, or
  /// `None` (the default) for no limit.
  pub fn max_depth(&self) -> Option<usize> {
    self.max_depth
  }

  pub fn set_max_depth(&mut self, max_depth: Option<usize>) {
    self.max_depth = max_depth;
  }

  /// Builder-style variant of
  /// [`CalculationMode::set_strict_finite_flag`].
  pub fn with_strict_finite(mut self, mode: bool) -> Self {
    self.set_strict_finite_flag(mode);
    self
  }

  /// Builder-style variant of [`CalculationMode::set_max_depth`].
  pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
    self.set_max_depth(max_depth);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let mode = CalculationMode::new();
    assert!(!mode.has_strict_finite_flag());
    assert_eq!(mode.max_depth(), None);
  }

  #[test]
  fn test_set_flags() {
    let mut mode = CalculationMode::new();
    mode.set_strict_finite_flag(true);
    assert!(mode.has_strict_finite_flag());
    mode.set_strict_finite_flag(false);
    assert!(!mode.has_strict_finite_flag());

    let mode = CalculationMode::new().with_strict_finite(true).with_max_depth(Some(8));
    assert!(mode.has_strict_finite_flag());
    assert_eq!(mode.max_depth(), Some(8));
  }
}
