
//! Miscellaneous utilities for parsing expressions.

pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod tokenizer;
