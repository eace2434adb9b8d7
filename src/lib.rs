
//! Evaluation of infix arithmetic expressions.
//!
//! ```text
//! calculate("((5 + 3) * 2) - 10 / 5") == Ok(14.0)
//! ```

pub mod calculator;
pub mod display;
pub mod error;
pub mod expr;
pub mod mode;
pub mod parsing;

pub use calculator::{calculate, parse, Calculator};
pub use error::{ErrorKind, EvalError};
pub use mode::CalculationMode;
