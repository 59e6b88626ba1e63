use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tax_core::{TaxBracketsResponse, TaxCalculationResult};
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::ApiError;
use crate::validation::{ValidationError, validate_income, validate_tax_year};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationRequest {
    pub income: Decimal,
    pub tax_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// `POST /tax/calculate`
pub async fn calculate_tax(
    State(state): State<AppState>,
    payload: Result<Json<TaxCalculationRequest>, JsonRejection>,
) -> Result<Json<TaxCalculationResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "could not bind calculation request");
        ValidationError::MalformedBody
    })?;

    validate_income(request.income)?;
    validate_tax_year(&request.tax_year)?;

    let result = state
        .calculator
        .calculate(request.income, &request.tax_year)
        .await?;

    Ok(Json(result))
}

/// `GET /tax/brackets/{year}`
pub async fn get_tax_brackets(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<TaxBracketsResponse>, ApiError> {
    validate_tax_year(&year)?;

    let tax_brackets = state.calculator.brackets(&year).await?;
    info!(year = %year, count = tax_brackets.len(), "serving tax brackets");

    Ok(Json(TaxBracketsResponse { tax_brackets }))
}
