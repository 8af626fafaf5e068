//! Report export.
//!
//! - `composer` lays aggregation output onto a canvas in fixed section order
//! - `pdf` encodes the laid-out pages
//! - `service` runs the whole export pass

pub mod composer;
pub mod error;
pub mod pdf;
pub mod service;


pub use composer::{Branding, ReportComposer, report_filename};
pub use error::{EXPORT_FAILED_MESSAGE, ExportError, RENDERER_UNAVAILABLE_MESSAGE};
pub use service::{ExportedReport, ZakahReportService};
