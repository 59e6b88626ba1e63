//! Request checks applied before any upstream call is made.

use rust_decimal::Decimal;
use thiserror::Error;

/// Tax years the service accepts.
pub const SUPPORTED_TAX_YEARS: [&str; 4] = ["2019", "2020", "2021", "2022"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid request format")]
    MalformedBody,

    #[error("Income must be non-negative")]
    NegativeIncome,

    #[error("Tax year must be one of: {}", SUPPORTED_TAX_YEARS.join(", "))]
    UnsupportedTaxYear(String),
}

pub fn validate_income(income: Decimal) -> Result<(), ValidationError> {
    if income < Decimal::ZERO {
        return Err(ValidationError::NegativeIncome);
    }
    Ok(())
}

pub fn validate_tax_year(year: &str) -> Result<(), ValidationError> {
    if SUPPORTED_TAX_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedTaxYear(year.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_and_positive_income_are_valid() {
        assert_eq!(validate_income(dec!(0)), Ok(()));
        assert_eq!(validate_income(dec!(1234567.89)), Ok(()));
    }

    #[test]
    fn negative_income_is_rejected() {
        assert_eq!(
            validate_income(dec!(-0.01)),
            Err(ValidationError::NegativeIncome)
        );
    }

    #[test]
    fn every_supported_year_is_valid() {
        for year in SUPPORTED_TAX_YEARS {
            assert_eq!(validate_tax_year(year), Ok(()));
        }
    }

    #[test]
    fn unsupported_years_are_rejected() {
        for year in ["2018", "2023", "", "22", " 2022"] {
            assert_eq!(
                validate_tax_year(year),
                Err(ValidationError::UnsupportedTaxYear(year.to_string()))
            );
        }
    }

    #[test]
    fn unsupported_year_message_lists_years() {
        let err = validate_tax_year("2023").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Tax year must be one of: 2019, 2020, 2021, 2022"
        );
    }
}
