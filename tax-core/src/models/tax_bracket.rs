use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal band of a tax table. `max` is `None` for the open-ended top
/// bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Width of the band, or `None` when the bracket is unbounded.
    pub fn width(&self) -> Option<Decimal> {
        self.max.map(|max| max - self.min)
    }
}

/// Success body of the upstream tax-year endpoint, also the body of
/// `GET /tax/brackets/{year}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketsResponse {
    pub tax_brackets: Vec<TaxBracket>,
}
