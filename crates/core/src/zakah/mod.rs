//! Zakah aggregation: sections, nisab threshold, and obligation.

pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::AggregationEngine;
pub use types::{
    AggregationResult, CalendarBasis, Category, GOLD_NISAB_GRAMS, LONG_TERM_PROXY, LUNAR_RATE,
    LineItem, MAX_UNIT_PRICE, Metal, NisabBasis, ReportOptions, SILVER_NISAB_GRAMS, SOLAR_RATE, Section,
    SectionKind, StockValuation, UnitPrices,
};
