use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bracket's share of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTaxDetail {
    pub min: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
    pub rate: Decimal,

    /// Portion of the income that falls inside this band.
    pub taxable_income: Decimal,

    /// `taxable_income * rate`, rounded to cents.
    pub tax_amount: Decimal,
}

/// Outcome of applying a tax table to an income.
///
/// Every monetary and rate field is rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    pub income: Decimal,
    pub tax_year: String,
    pub total_tax: Decimal,

    #[serde(rename = "taxes_by_band")]
    pub bands: Vec<BandTaxDetail>,

    /// Total tax as a percentage of income; zero when income is zero.
    pub effective_rate: Decimal,
    pub after_tax_income: Decimal,
}
