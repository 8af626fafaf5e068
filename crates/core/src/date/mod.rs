//! Report date resolution.
//!
//! The date is report metadata only. A remote lookup is attempted once,
//! bounded by a timeout; any failure falls back to the local clock.

pub mod resolver;

pub use resolver::{
    DateError, DateResolver, DateSource, ReportDate, resolve_zone, resolve_zone_from,
};
