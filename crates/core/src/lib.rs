//! Core logic for the Zakah report service.
//!
//! This crate contains pure report logic with ZERO web dependencies.
//! Collaborators that need the network (date lookup, asset origin) are
//! expressed as traits and implemented by the API crate.
//!
//! # Modules
//!
//! - `fields` - Input field catalogue and value reader
//! - `zakah` - Aggregation, nisab threshold, and obligation
//! - `layout` - Paginated layout engine and row renderers
//! - `report` - Report composition, PDF encoding, and export service
//! - `date` - Report date resolution with local fallback
//! - `shell_cache` - App shell asset caching strategies

pub mod date;
pub mod fields;
pub mod layout;
pub mod report;
pub mod shell_cache;
pub mod zakah;
