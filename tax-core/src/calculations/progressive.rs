//! Marginal bracket apportionment.
//!
//! Income is walked through the table from the lowest band upward. Each
//! bounded band absorbs at most its own width; the open-ended top band
//! absorbs whatever is left.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::TaxBracket;
//! use tax_core::calculations::apply_brackets;
//!
//! let brackets = vec![
//!     TaxBracket { min: dec!(0), max: Some(dec!(50197)), rate: dec!(0.15) },
//!     TaxBracket { min: dec!(50197), max: None, rate: dec!(0.205) },
//! ];
//!
//! let result = apply_brackets(dec!(100000), "2022", &brackets).unwrap();
//!
//! assert_eq!(result.total_tax, dec!(17739.17));
//! assert_eq!(result.effective_rate, dec!(17.74));
//! assert_eq!(result.bands.len(), 2);
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::{BandTaxDetail, StructuredApiError, TaxBracket, TaxCalculationResult};
use crate::source::FetchError;

/// Errors that can occur while computing a tax result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// The bracket lookup failed; the fetch error is carried unchanged.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no tax brackets found for year {0}")]
    NoBrackets(String),

    /// The table is not ascending, contiguous and capped by a single
    /// open-ended bracket.
    #[error("invalid tax brackets for year {year}: {reason}")]
    InvalidBrackets { year: String, reason: String },

    #[error("income must be non-negative, got {0}")]
    NegativeIncome(Decimal),
}

impl CalculationError {
    /// The upstream's structured payload, when the failure carries one.
    pub fn structured(&self) -> Option<&StructuredApiError> {
        match self {
            Self::Fetch(err) => err.structured(),
            Self::NoBrackets(_) | Self::InvalidBrackets { .. } | Self::NegativeIncome(_) => None,
        }
    }
}

/// Checks that a table can be applied marginally.
///
/// A valid table has non-negative lower bounds, rates in `[0, 1]`, bounded
/// brackets with `max > min`, each bracket starting where the previous one
/// ends, and exactly one unbounded bracket in last position. An empty table
/// is accepted here; emptiness is reported separately by [`apply_brackets`].
///
/// # Errors
///
/// Returns a human readable reason describing the first violation found.
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), String> {
    let last = brackets.len().saturating_sub(1);
    let mut previous_max: Option<Decimal> = None;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.min < Decimal::ZERO {
            return Err(format!("bracket {index} has negative min {}", bracket.min));
        }

        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(format!(
                "bracket {index} has rate {} outside [0, 1]",
                bracket.rate
            ));
        }

        if let Some(prev) = previous_max {
            if bracket.min != prev {
                return Err(format!(
                    "bracket {index} starts at {} but the previous bracket ends at {prev}",
                    bracket.min
                ));
            }
        }

        match bracket.max {
            Some(max) if max <= bracket.min => {
                return Err(format!(
                    "bracket {index} has max {max} not above min {}",
                    bracket.min
                ));
            }
            Some(_) if index == last => {
                return Err("top bracket must be unbounded".to_string());
            }
            None if index != last => {
                return Err(format!("bracket {index} is unbounded but not last"));
            }
            _ => {}
        }

        previous_max = bracket.max;
    }

    Ok(())
}

/// Applies a marginal tax table to `income`.
///
/// Band amounts are rounded to cents for reporting, but the total is
/// accumulated from the unrounded band amounts and rounded once at the end.
/// The effective rate is derived from that unrounded total; after-tax income
/// is derived from the rounded one.
///
/// Zero income produces no bands.
///
/// # Errors
///
/// * [`CalculationError::NegativeIncome`] for `income < 0`.
/// * [`CalculationError::NoBrackets`] when `brackets` is empty.
/// * [`CalculationError::InvalidBrackets`] when [`validate_brackets`] rejects the table.
pub fn apply_brackets(
    income: Decimal,
    year: &str,
    brackets: &[TaxBracket],
) -> Result<TaxCalculationResult, CalculationError> {
    if income < Decimal::ZERO {
        return Err(CalculationError::NegativeIncome(income));
    }

    if brackets.is_empty() {
        return Err(CalculationError::NoBrackets(year.to_string()));
    }

    validate_brackets(brackets).map_err(|reason| CalculationError::InvalidBrackets {
        year: year.to_string(),
        reason,
    })?;

    let mut remaining = income;
    let mut unrounded_total = Decimal::ZERO;
    let mut bands = Vec::new();

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let width = bracket.width();
        let taxable_income = remaining.min(width.unwrap_or(remaining));
        let band_tax = taxable_income * bracket.rate;

        bands.push(BandTaxDetail {
            min: bracket.min,
            max: bracket.max,
            rate: bracket.rate,
            taxable_income,
            tax_amount: round_half_up(band_tax),
        });
        unrounded_total += band_tax;

        // Bounded bands consume their full width even when income runs out
        // inside them; the next iteration then sees remaining <= 0.
        remaining = match width {
            Some(width) => remaining - width,
            None => Decimal::ZERO,
        };
    }

    let effective_rate = if income.is_zero() {
        Decimal::ZERO
    } else {
        round_half_up(unrounded_total / income * Decimal::ONE_HUNDRED)
    };
    let total_tax = round_half_up(unrounded_total);

    Ok(TaxCalculationResult {
        income,
        tax_year: year.to_string(),
        total_tax,
        bands,
        effective_rate,
        after_tax_income: round_half_up(income - total_tax),
    })
}
