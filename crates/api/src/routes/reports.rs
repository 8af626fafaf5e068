//! Report routes.
//!
//! - `POST /reports/zakah` returns the aggregation as JSON
//! - `POST /reports/zakah/pdf` returns the PDF as an attachment

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info};
use zakah_core::report::ZakahReportService;
use zakah_core::zakah::{
    AggregationResult, CalendarBasis, MAX_UNIT_PRICE, NisabBasis, ReportOptions, StockValuation,
    UnitPrices,
};
use zakah_shared::{AppError, CurrencyCode, Money};

use crate::AppState;
use crate::error::error_response;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/zakah", post(summarize_report))
        .route("/reports/zakah/pdf", post(export_report))
}

// ============================================================================
// Request Types
// ============================================================================

/// Calculation settings; anything omitted takes its default.
#[derive(Debug, Default, Deserialize)]
pub struct OptionsRequest {
    /// Nisab basis.
    pub nisab_basis: Option<NisabBasis>,
    /// Calendar basis.
    pub calendar: Option<CalendarBasis>,
    /// Stock valuation method.
    pub stock_valuation: Option<StockValuation>,
    /// Display currency code.
    pub currency: Option<CurrencyCode>,
}

/// Body of both report endpoints.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    /// Raw field values keyed by field id; numbers or numeric strings.
    #[serde(default)]
    pub fields: Map<String, Value>,
    /// Metal unit prices in the display currency.
    pub prices: UnitPrices,
    /// Calculation settings.
    #[serde(default)]
    pub options: OptionsRequest,
}

impl ReportRequest {
    fn validate(&self) -> Result<(), AppError> {
        for (name, price) in [
            ("gold_per_gram", self.prices.gold_per_gram),
            ("silver_per_gram", self.prices.silver_per_gram),
        ] {
            if price.is_sign_negative() || price > MAX_UNIT_PRICE {
                return Err(AppError::Validation(format!(
                    "prices.{name} must be between 0 and {MAX_UNIT_PRICE}"
                )));
            }
        }
        Ok(())
    }

    fn options(&self, default_currency: &CurrencyCode) -> ReportOptions {
        ReportOptions {
            nisab_basis: self.options.nisab_basis.unwrap_or_default(),
            calendar: self.options.calendar.unwrap_or_default(),
            stock_valuation: self.options.stock_valuation.unwrap_or_default(),
            currency: self
                .options
                .currency
                .clone()
                .unwrap_or_else(|| default_currency.clone()),
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the JSON summary.
#[derive(Debug, Serialize)]
pub struct ReportSummaryResponse {
    /// Display currency.
    pub currency: String,
    /// Obligation formatted for display.
    pub obligation_display: String,
    /// Net wealth formatted for display.
    pub net_wealth_display: String,
    /// Full aggregation.
    #[serde(flatten)]
    pub result: AggregationResult,
}

impl ReportSummaryResponse {
    fn new(result: AggregationResult, currency: &CurrencyCode) -> Self {
        Self {
            currency: currency.to_string(),
            obligation_display: Money::new(result.obligation_due, currency.clone()).to_string(),
            net_wealth_display: Money::new(result.net_wealth, currency.clone()).to_string(),
            result,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

fn parse_request(
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<ReportRequest, Response> {
    let Json(request) = payload.map_err(|rejection| {
        error_response(&AppError::Validation(rejection.body_text()))
    })?;
    request.validate().map_err(|e| error_response(&e))?;
    Ok(request)
}

/// POST `/reports/zakah` - Aggregation summary as JSON.
async fn summarize_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let request = match parse_request(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let options = request.options(&state.default_currency);
    let result = ZakahReportService::summarize(&request.fields, &request.prices, &options);

    (
        StatusCode::OK,
        Json(ReportSummaryResponse::new(result, &options.currency)),
    )
        .into_response()
}

/// POST `/reports/zakah/pdf` - PDF report download.
///
/// Exports are serialized: the gate is held for the whole pass and released
/// on drop whether the export succeeds or fails.
async fn export_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let request = match parse_request(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let options = request.options(&state.default_currency);

    let _gate = state.export_gate.lock().await;
    match state
        .report_service
        .export(&request.fields, &request.prices, &options)
        .await
    {
        Ok(report) => {
            info!(filename = %report.filename, pages = report.page_count, "PDF export served");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", report.filename),
                    ),
                ],
                report.bytes,
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "PDF export failed");
            error_response(&AppError::from(e))
        }
    }
}
