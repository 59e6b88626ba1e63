mod api_error;
mod tax_bracket;
mod tax_calculation;

pub use api_error::{ApiErrorDetail, StructuredApiError};
pub use tax_bracket::{TaxBracket, TaxBracketsResponse};
pub use tax_calculation::{BandTaxDetail, TaxCalculationResult};
