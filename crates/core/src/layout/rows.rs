//! Row renderers.
//!
//! Each renderer reserves its guard height, draws at the resulting cursor,
//! and returns the cursor after its advance. Values arrive pre-formatted.

use super::canvas::{Canvas, DrawOp, FontStyle, Paint, Rect, Rgb, TextStyle};
use super::metrics::wrap_text;
use super::session::LayoutSession;
use super::theme::{
    BANNER_TITLE, CAUTION_FILL, CAUTION_TEXT, CONTENT_WIDTH, DARK, DISCLAIMER_X, ELIGIBLE_FILL, GOLD,
    GREEN, LABEL_X, LIABILITY_FILL, LIABILITY_SHADE, LIABILITY_TEXT, MARGIN_X, MUTED, RED, RIGHT_EDGE,
    ROW_SHADE, ROW_TEXT, ROW_VALUE, STRIPE_WIDTH, SUMMARY_SHADE, SUMMARY_TEXT, TOTAL_FILL,
    VALUE_X, WHITE,
};

/// Placeholder printed for a section without visible entries.
pub const EMPTY_SECTION_TEXT: &str = "No entries recorded for this section.";

/// Height reserved before the summary block so it is not split.
pub const SUMMARY_GUARD: f32 = 70.0;

/// One key/value line of the summary block.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Left-hand label.
    pub label: String,
    /// Right-hand value.
    pub value: String,
    /// Value colour.
    pub color: Rgb,
    /// Larger bold label.
    pub emphasized: bool,
}

/// The obligation banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Heading.
    pub title: String,
    /// Line under the heading.
    pub subtitle: String,
    /// Formatted amount.
    pub amount: String,
    /// Affirmative styling when true, caution styling otherwise.
    pub eligible: bool,
}

fn liability_value(value: &str) -> String {
    format!("(-) {value}")
}

impl<C: Canvas> LayoutSession<C> {
    /// Dark band with a gold stripe and a white bold title.
    pub fn draw_section_header(&mut self, title: &str) -> f32 {
        let y = self.ensure_space(12.0);
        self.fill_rect(Rect::new(MARGIN_X, y, CONTENT_WIDTH, 9.0), DARK);
        self.fill_rect(Rect::new(MARGIN_X, y, STRIPE_WIDTH, 9.0), GOLD);
        self.text(
            23.0,
            y + 6.2,
            title,
            TextStyle::new(FontStyle::Bold, 9.0, WHITE),
        );
        self.advance(9.0)
    }

    /// Asset entry; shaded when `index` (among visible rows) is even.
    pub fn draw_data_row(&mut self, label: &str, value: &str, index: usize) -> f32 {
        let y = self.ensure_space(7.0);
        if index % 2 == 0 {
            self.fill_rect(Rect::new(MARGIN_X, y, CONTENT_WIDTH, 6.8), ROW_SHADE);
        }
        self.text(
            LABEL_X,
            y + 4.8,
            label,
            TextStyle::new(FontStyle::Normal, 8.5, ROW_TEXT),
        );
        self.text(
            VALUE_X,
            y + 4.8,
            value,
            TextStyle::new(FontStyle::Normal, 8.5, ROW_VALUE).right(),
        );
        self.advance(6.8)
    }

    /// Italic placeholder for a section with nothing to show.
    pub fn draw_empty_row(&mut self) -> f32 {
        let y = self.ensure_space(7.0);
        self.text(
            LABEL_X,
            y + 5.0,
            EMPTY_SECTION_TEXT,
            TextStyle::new(FontStyle::Italic, 8.0, MUTED),
        );
        self.advance(8.0)
    }

    /// Tinted bar with an accent top rule and bold label and value.
    pub fn draw_totals_row(&mut self, label: &str, value: &str, accent: Rgb) -> f32 {
        let y = self.ensure_space(8.0);
        self.fill_rect(Rect::new(MARGIN_X, y, CONTENT_WIDTH, 8.0), TOTAL_FILL);
        self.rule(y, accent, 0.3);
        let style = TextStyle::new(FontStyle::Bold, 9.5, accent);
        self.text(LABEL_X, y + 5.5, label, style);
        self.text(VALUE_X, y + 5.5, value, style.right());
        self.advance(11.0)
    }

    /// Liability entry; warning tint when `index` is even.
    pub fn draw_liability_row(&mut self, label: &str, value: &str, index: usize) -> f32 {
        let y = self.ensure_space(7.0);
        if index % 2 == 0 {
            self.fill_rect(Rect::new(MARGIN_X, y, CONTENT_WIDTH, 6.8), LIABILITY_SHADE);
        }
        self.text(
            LABEL_X,
            y + 4.8,
            label,
            TextStyle::new(FontStyle::Normal, 8.5, LIABILITY_TEXT),
        );
        self.text(
            VALUE_X,
            y + 4.8,
            liability_value(value),
            TextStyle::new(FontStyle::Normal, 8.5, RED).right(),
        );
        self.advance(6.8)
    }

    /// Warning bar closing the liabilities section.
    pub fn draw_liability_totals_row(&mut self, label: &str, value: &str) -> f32 {
        let y = self.ensure_space(8.0);
        self.fill_rect(Rect::new(MARGIN_X, y, CONTENT_WIDTH, 8.0), LIABILITY_FILL);
        self.rule(y, RED, 0.3);
        let style = TextStyle::new(FontStyle::Bold, 9.5, RED);
        self.text(LABEL_X, y + 5.5, label, style);
        self.text(VALUE_X, y + 5.5, liability_value(value), style.right());
        self.advance(13.0)
    }

    /// Heading of the summary block with the eligibility status.
    ///
    /// Reserves room for the whole block so it starts on a fresh page
    /// rather than splitting.
    pub fn draw_summary_header(&mut self, title: &str, status: &str) -> f32 {
        let y = self.ensure_space(SUMMARY_GUARD);
        self.fill_rect(Rect::new(MARGIN_X, y, CONTENT_WIDTH, 11.0), DARK);
        self.fill_rect(Rect::new(MARGIN_X, y, CONTENT_WIDTH, 2.0), GOLD);
        self.fill_rect(Rect::new(MARGIN_X, y, STRIPE_WIDTH, 11.0), GOLD);
        self.text(
            23.0,
            y + 7.5,
            title,
            TextStyle::new(FontStyle::Bold, 11.0, WHITE),
        );
        self.text(
            VALUE_X,
            y + 7.5,
            status,
            TextStyle::new(FontStyle::Bold, 8.0, GOLD).right(),
        );
        self.advance(11.0)
    }

    /// Zebra key/value line of the summary block.
    pub fn draw_summary_row(&mut self, row: &SummaryRow, index: usize) -> f32 {
        let y = self.ensure_space(8.0);
        let shade = if index % 2 == 0 { SUMMARY_SHADE } else { WHITE };
        self.fill_rect(Rect::new(MARGIN_X, y, CONTENT_WIDTH, 8.0), shade);
        let (font, size) = if row.emphasized {
            (FontStyle::Bold, 10.0)
        } else {
            (FontStyle::Normal, 9.0)
        };
        self.text(
            LABEL_X,
            y + 5.5,
            row.label.as_str(),
            TextStyle::new(font, size, SUMMARY_TEXT),
        );
        self.text(
            VALUE_X,
            y + 5.5,
            row.value.as_str(),
            TextStyle::new(FontStyle::Bold, size, row.color).right(),
        );
        self.advance(8.0)
    }

    /// Outlined banner carrying the obligation amount.
    pub fn draw_highlight_banner(&mut self, banner: &Highlight) -> f32 {
        let y = self.ensure_space(16.0);
        let (fill, accent, amount_color) = if banner.eligible {
            (ELIGIBLE_FILL, GREEN, GREEN)
        } else {
            (CAUTION_FILL, GOLD, CAUTION_TEXT)
        };
        self.draw(DrawOp::Rect {
            rect: Rect::new(MARGIN_X, y, CONTENT_WIDTH, 16.0),
            paint: Paint::FillStroke {
                fill,
                stroke: accent,
                width: 0.6,
            },
        });
        self.fill_rect(Rect::new(MARGIN_X, y, 4.0, 16.0), accent);
        self.text(
            24.0,
            y + 7.0,
            banner.title.as_str(),
            TextStyle::new(FontStyle::Bold, 12.0, BANNER_TITLE),
        );
        self.text(
            24.0,
            y + 12.5,
            banner.subtitle.as_str(),
            TextStyle::new(FontStyle::Normal, 8.5, MUTED),
        );
        self.text(
            VALUE_X,
            y + 10.0,
            banner.amount.as_str(),
            TextStyle::new(FontStyle::Bold, 16.0, amount_color).right(),
        );
        self.advance(20.0)
    }

    /// Small italic paragraph wrapped to the content width less 4 mm.
    pub fn draw_disclaimer(&mut self, text: &str) -> f32 {
        let y = self.ensure_space(20.0) + 4.0;
        let lines = wrap_text(text, CONTENT_WIDTH - 4.0, FontStyle::Italic, 7.0);
        let style = TextStyle::new(FontStyle::Italic, 7.0, MUTED);
        let mut line_y = y;
        for line in &lines {
            self.text(DISCLAIMER_X, line_y, line.as_str(), style);
            line_y += 4.0;
        }
        self.set_cursor(line_y + 4.0);
        self.cursor_y()
    }

    fn rule(&mut self, y: f32, color: Rgb, width: f32) {
        self.draw(DrawOp::Line {
            x1: MARGIN_X,
            y1: y,
            x2: RIGHT_EDGE,
            y2: y,
            color,
            width,
        });
    }
}
