//! Progressive income tax arithmetic.
//!
//! Brackets are applied marginally: each band taxes only the slice of
//! income that falls inside it.

pub mod common;
pub mod progressive;

pub use progressive::{CalculationError, apply_brackets, validate_brackets};
