//! Input boundary: the named numeric fields and the reader that extracts them.
//!
//! Every field is optional. Anything missing, empty, negative, or unparsable
//! reads as zero; input defects are never surfaced to the user.

pub mod catalog;
pub mod reader;

pub use catalog::{
    BUSINESS_ASSETS, FieldDef, INVESTMENTS, InvestmentFieldDef, LIABILITIES, LIQUID_ASSETS,
    MetalFieldDef, PRECIOUS_METALS, Purity, all_field_keys,
};
pub use reader::{FieldSource, MAX_FIELD_AMOUNT, RawValues, ValueReader, parse_amount};
