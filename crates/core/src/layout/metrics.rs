//! Helvetica advance widths and word wrapping.

use super::canvas::FontStyle;

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Width used for characters outside the table.
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica widths for `' '..='~'`, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold widths for `' '..='~'`, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn glyph_width(c: char, font: FontStyle) -> u16 {
    let table = match font {
        FontStyle::Bold => &HELVETICA_BOLD,
        FontStyle::Normal | FontStyle::Italic => &HELVETICA,
    };
    // Dashes and bullet share one advance across both weights.
    match c {
        '\u{2014}' => 1000,
        '\u{2013}' => 556,
        '\u{2022}' => 350,
        _ => u32::from(c)
            .checked_sub(0x20)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or(FALLBACK_WIDTH),
    }
}

/// Advance width of `text` at `size` points, in millimetres.
#[must_use]
pub fn text_width(text: &str, font: FontStyle, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, font))).sum();
    #[allow(clippy::cast_precision_loss)]
    let units = units as f32;
    units / 1000.0 * size * MM_PER_PT
}

/// Greedy word wrap of `text` into lines no wider than `max_width` mm.
///
/// A single word wider than the limit occupies a line of its own.
#[must_use]
pub fn wrap_text(text: &str, max_width: f32, font: FontStyle, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if text_width(&candidate, font, size) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
