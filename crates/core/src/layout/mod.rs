//! Paginated layout engine.
//!
//! Geometry is in millimetres on an A4 portrait page with a top-left origin.
//! A [`LayoutSession`] owns the canvas and the cursor; every row renderer
//! guards for space first, draws, and returns the advanced cursor. Footers
//! are stamped in a second phase once the page count is final.

#![allow(clippy::float_arithmetic)]

pub mod canvas;
pub mod display_list;
pub mod metrics;
pub mod rows;
pub mod session;
pub mod theme;

#[cfg(test)]
mod tests;

pub use canvas::{Align, Canvas, DrawOp, FontStyle, Paint, Rect, Rgb, TextStyle};
pub use display_list::{DisplayList, Page};
pub use rows::{Highlight, SummaryRow};
pub use session::{Footer, LayoutSession, LayoutState, PendingFooters};
