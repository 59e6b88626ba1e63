use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, info};

use crate::calculations::{CalculationError, apply_brackets};
use crate::models::{TaxBracket, TaxCalculationResult};
use crate::source::{BracketSource, FetchError};

/// Computes income tax from brackets provided by a [`BracketSource`].
///
/// Holds no per-request state: every call fetches a fresh table and nothing
/// is cached between calls.
#[derive(Clone)]
pub struct TaxCalculator {
    source: Arc<dyn BracketSource>,
}

impl TaxCalculator {
    pub fn new(source: Arc<dyn BracketSource>) -> Self {
        Self { source }
    }

    /// Fetches the bracket table for `year` without validating it.
    ///
    /// # Errors
    /// Any [`FetchError`] from the underlying source, unchanged.
    pub async fn brackets(
        &self,
        year: &str,
    ) -> Result<Vec<TaxBracket>, FetchError> {
        self.source.fetch(year).await
    }

    /// Fetches the table for `year` and applies it to `income`.
    ///
    /// # Errors
    /// * [`CalculationError::Fetch`] carrying the source's error unchanged.
    /// * [`CalculationError::NoBrackets`] when the source returned an empty table.
    /// * [`CalculationError::InvalidBrackets`] when the table cannot be applied.
    /// * [`CalculationError::NegativeIncome`] for `income < 0`.
    pub async fn calculate(
        &self,
        income: Decimal,
        year: &str,
    ) -> Result<TaxCalculationResult, CalculationError> {
        debug!(%income, year, "calculating tax");

        let brackets = self.source.fetch(year).await.inspect_err(|err| {
            error!(%income, year, error = %err, "error getting tax brackets");
        })?;

        let result = apply_brackets(income, year, &brackets).inspect_err(|err| {
            error!(%income, year, error = %err, "tax calculation failed");
        })?;

        info!(
            %income,
            year,
            total_tax = %result.total_tax,
            "tax calculation completed"
        );

        Ok(result)
    }
}
