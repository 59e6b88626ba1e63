pub mod calculations;
pub mod models;
pub mod service;
pub mod source;

pub use calculations::CalculationError;
pub use models::*;
pub use service::TaxCalculator;
pub use source::{BracketSource, FetchError};
