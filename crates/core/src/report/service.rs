//! Report export service.

use bytes::Bytes;
use tracing::{error, info};

use super::composer::{ReportComposer, report_filename};
use super::error::ExportError;
use super::pdf;
use crate::date::{DateResolver, ReportDate};
use crate::fields::{FieldSource, RawValues, ValueReader};
use crate::layout::{Canvas, DisplayList};
use crate::zakah::{AggregationEngine, AggregationResult, ReportOptions, UnitPrices};

/// PDF document title.
const DOCUMENT_TITLE: &str = "Zakah Assessment Report";

/// A finished export.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    /// Download file name, `zakah-report-<iso>.pdf`.
    pub filename: String,
    /// Encoded PDF.
    pub bytes: Bytes,
    /// Number of pages.
    pub page_count: usize,
    /// Date printed on the report.
    pub date: ReportDate,
    /// Figures the report was built from.
    pub summary: AggregationResult,
}

/// Service for aggregating figures and exporting the PDF report.
#[derive(Clone)]
pub struct ZakahReportService {
    composer: ReportComposer,
    dates: DateResolver,
}

impl ZakahReportService {
    /// Creates the service.
    #[must_use]
    pub const fn new(composer: ReportComposer, dates: DateResolver) -> Self {
        Self { composer, dates }
    }

    /// Aggregates the fields without rendering anything.
    pub fn summarize<S: FieldSource + ?Sized>(
        fields: &S,
        prices: &UnitPrices,
        options: &ReportOptions,
    ) -> AggregationResult {
        let raw = RawValues::collect(&ValueReader::new(fields));
        AggregationEngine::aggregate(&raw, prices, options)
    }

    /// Runs one export: date, values, aggregation, composition, encoding.
    ///
    /// The date lookup is the only suspension point. Any failure aborts the
    /// whole pass; no partial document is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the renderer is unavailable or the
    /// document cannot be encoded.
    pub async fn export<S: FieldSource + Sync + ?Sized>(
        &self,
        fields: &S,
        prices: &UnitPrices,
        options: &ReportOptions,
    ) -> Result<ExportedReport, ExportError> {
        let canvas = DisplayList::new();
        if !canvas.is_ready() {
            error!("renderer unavailable, export aborted");
            return Err(ExportError::RendererUnavailable);
        }

        let date = self.dates.resolve().await;
        let summary = Self::summarize(fields, prices, options);

        let doc = self
            .composer
            .compose(canvas, &summary, options, &date)
            .inspect_err(|err| error!(error = %err, "report composition failed"))?;
        let page_count = doc.page_count();

        let bytes = pdf::encode(&doc, DOCUMENT_TITLE)
            .inspect_err(|err| error!(error = %err, "report encoding failed"))?;
        let filename = report_filename(&date.iso);

        info!(
            pages = page_count,
            bytes = bytes.len(),
            filename = %filename,
            eligible = summary.is_eligible,
            "zakah report exported"
        );

        Ok(ExportedReport {
            filename,
            bytes: Bytes::from(bytes),
            page_count,
            date,
            summary,
        })
    }
}
