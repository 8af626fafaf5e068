//! Page geometry and palette.

use super::canvas::Rgb;

/// A4 width.
pub const PAGE_WIDTH: f32 = 210.0;
/// A4 height.
pub const PAGE_HEIGHT: f32 = 297.0;
/// Left and right margin.
pub const MARGIN_X: f32 = 15.0;
/// Usable width between the side margins.
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;
/// Right edge of the content area.
pub const RIGHT_EDGE: f32 = PAGE_WIDTH - MARGIN_X;
/// Space reserved below the printable area for the footer.
pub const BOTTOM_MARGIN: f32 = 19.0;
/// Lowest y any body row may reach.
pub const PRINTABLE_BOTTOM: f32 = PAGE_HEIGHT - BOTTOM_MARGIN;
/// Cursor position after a continuation header.
pub const HEADER_OFFSET: f32 = 18.0;
/// Cursor position after the cover banner.
pub const COVER_OFFSET: f32 = 54.0;
/// Top of the footer bar.
pub const FOOTER_Y: f32 = 288.0;
/// Height of the footer bar.
pub const FOOTER_HEIGHT: f32 = 9.0;
/// Anchor for right-aligned row values.
pub const VALUE_X: f32 = 192.0;
/// Anchor for row labels.
pub const LABEL_X: f32 = 20.0;
/// Left edge of the disclaimer paragraph.
pub const DISCLAIMER_X: f32 = MARGIN_X + 2.0;
/// Height of the accent stripe on section headers and banners.
pub const STRIPE_WIDTH: f32 = 3.5;

/// Header bands.
pub const DARK: Rgb = Rgb(17, 24, 39);
/// Brand accent.
pub const GOLD: Rgb = Rgb(201, 168, 76);
/// Settings banner fill.
pub const LIGHT_GOLD: Rgb = Rgb(252, 248, 234);
/// Secondary text.
pub const MUTED: Rgb = Rgb(120, 130, 150);
/// Asset accent.
pub const TEAL: Rgb = Rgb(30, 180, 160);
/// Business section accent.
pub const VIOLET: Rgb = Rgb(100, 80, 200);
/// Liability accent.
pub const RED: Rgb = Rgb(210, 70, 70);
/// Affirmative accent.
pub const GREEN: Rgb = Rgb(34, 160, 85);
/// Zebra shading for asset rows.
pub const ROW_SHADE: Rgb = Rgb(244, 247, 252);
/// Plain white.
pub const WHITE: Rgb = Rgb(255, 255, 255);
/// Data row label.
pub const ROW_TEXT: Rgb = Rgb(55, 55, 70);
/// Data row value.
pub const ROW_VALUE: Rgb = Rgb(80, 65, 20);
/// Totals bar fill.
pub const TOTAL_FILL: Rgb = Rgb(240, 248, 242);
/// Zebra shading for liability rows.
pub const LIABILITY_SHADE: Rgb = Rgb(252, 245, 245);
/// Liability row label.
pub const LIABILITY_TEXT: Rgb = Rgb(80, 50, 50);
/// Liability totals bar fill.
pub const LIABILITY_FILL: Rgb = Rgb(252, 240, 240);
/// Zebra shading for summary rows.
pub const SUMMARY_SHADE: Rgb = Rgb(245, 249, 254);
/// Summary row label.
pub const SUMMARY_TEXT: Rgb = Rgb(60, 70, 90);
/// Eligible banner fill.
pub const ELIGIBLE_FILL: Rgb = Rgb(228, 248, 236);
/// Ineligible banner fill.
pub const CAUTION_FILL: Rgb = Rgb(248, 242, 228);
/// Ineligible banner amount.
pub const CAUTION_TEXT: Rgb = Rgb(180, 140, 30);
/// Banner title.
pub const BANNER_TITLE: Rgb = Rgb(30, 50, 40);
/// Pale text on dark bands.
pub const PALE: Rgb = Rgb(180, 180, 180);
/// Footer text.
pub const FOOTER_TEXT: Rgb = Rgb(180, 190, 210);
/// Cover subtitle.
pub const COVER_SUBTITLE: Rgb = Rgb(190, 200, 220);
/// Settings banner heading.
pub const SETTINGS_HEADING: Rgb = Rgb(120, 90, 20);
/// Settings banner values.
pub const SETTINGS_VALUE: Rgb = Rgb(80, 60, 10);
