
//! Settings that change how expressions are evaluated.

pub mod calculation;

pub use calculation::CalculationMode;
