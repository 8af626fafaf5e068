//! PDF encoding of a laid-out [`DisplayList`].
//!
//! Millimetre coordinates with a top-left origin are converted to points with
//! the PDF bottom-left origin. Text uses the three standard Helvetica faces
//! with WinAnsi encoding, so no font program is embedded.

#![allow(clippy::float_arithmetic)]

use pdf_writer::{Content, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};

use super::error::ExportError;
use crate::layout::metrics::text_width;
use crate::layout::theme::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::layout::{Align, DisplayList, DrawOp, FontStyle, Paint, Rect, TextStyle};

/// Points per millimetre.
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Bezier control distance for quarter circles.
const KAPPA: f32 = 0.552_284_8;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");
const FONT_OBLIQUE: Name<'static> = Name(b"F3");

fn pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Page-space y of a top-origin millimetre coordinate.
fn flip(y_mm: f32) -> f32 {
    pt(PAGE_HEIGHT - y_mm)
}

const fn font_name(font: FontStyle) -> Name<'static> {
    match font {
        FontStyle::Normal => FONT_REGULAR,
        FontStyle::Bold => FONT_BOLD,
        FontStyle::Italic => FONT_OBLIQUE,
    }
}

/// Maps text to WinAnsi bytes; unmappable characters become `?`.
#[must_use]
pub fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => u8::try_from(u32::from(c)).unwrap_or(b'?'),
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            _ => b'?',
        })
        .collect()
}

/// Encodes every page of `doc` into a single PDF file.
///
/// # Errors
///
/// Returns [`ExportError::Encoding`] if the document has no pages.
pub fn encode(doc: &DisplayList, title: &str) -> Result<Vec<u8>, ExportError> {
    let pages = doc.pages();
    if pages.is_empty() {
        return Err(ExportError::Encoding("document has no pages".to_string()));
    }

    let count = i32::try_from(pages.len()).map_err(|e| ExportError::Encoding(e.to_string()))?;

    let mut pdf = Pdf::new();
    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let info_id = Ref::new(3);
    let font_ids = [Ref::new(4), Ref::new(5), Ref::new(6)];
    let mut next = 7;
    let mut alloc = || {
        let id = Ref::new(next);
        next += 1;
        id
    };
    let page_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().copied())
        .count(count);
    pdf.document_info(info_id)
        .title(TextStr(title))
        .producer(TextStr("zakah"));

    let faces: [(&[u8], Name<'static>); 3] = [
        (b"Helvetica", FONT_REGULAR),
        (b"Helvetica-Bold", FONT_BOLD),
        (b"Helvetica-Oblique", FONT_OBLIQUE),
    ];
    for (id, (base, _)) in font_ids.iter().zip(faces) {
        pdf.type1_font(*id)
            .base_font(Name(base))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for ((page, page_id), content_id) in pages.iter().zip(&page_ids).zip(&content_ids) {
        let mut content = Content::new();
        for op in page.ops() {
            render_op(&mut content, op);
        }
        pdf.stream(*content_id, &content.finish());

        let mut pdf_page = pdf.page(*page_id);
        pdf_page
            .media_box(PdfRect::new(0.0, 0.0, pt(PAGE_WIDTH), pt(PAGE_HEIGHT)))
            .parent(tree_id)
            .contents(*content_id);
        let mut resources = pdf_page.resources();
        let mut fonts = resources.fonts();
        for (id, (_, name)) in font_ids.iter().zip(faces) {
            fonts.pair(name, *id);
        }
    }

    Ok(pdf.finish())
}

fn render_op(content: &mut Content, op: &DrawOp) {
    match op {
        DrawOp::Rect { rect, paint } => {
            apply_paint(content, *paint);
            content.rect(pt(rect.x), flip(rect.y + rect.h), pt(rect.w), pt(rect.h));
            finish_shape(content, *paint);
        }
        DrawOp::RoundedRect {
            rect,
            radius,
            paint,
        } => {
            apply_paint(content, *paint);
            rounded_rect_path(content, *rect, *radius);
            finish_shape(content, *paint);
        }
        DrawOp::Circle { cx, cy, r, paint } => {
            apply_paint(content, *paint);
            circle_path(content, *cx, *cy, *r);
            finish_shape(content, *paint);
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => {
            let (r, g, b) = color.unit();
            content
                .set_stroke_rgb(r, g, b)
                .set_line_width(pt(*width))
                .move_to(pt(*x1), flip(*y1))
                .line_to(pt(*x2), flip(*y2))
                .stroke();
        }
        DrawOp::Text { x, y, text, style } => render_text(content, *x, *y, text, *style),
    }
}

fn apply_paint(content: &mut Content, paint: Paint) {
    match paint {
        Paint::Fill(fill) => {
            let (r, g, b) = fill.unit();
            content.set_fill_rgb(r, g, b);
        }
        Paint::Stroke { color, width } => {
            let (r, g, b) = color.unit();
            content.set_stroke_rgb(r, g, b).set_line_width(pt(width));
        }
        Paint::FillStroke {
            fill,
            stroke,
            width,
        } => {
            let (fr, fg, fb) = fill.unit();
            let (sr, sg, sb) = stroke.unit();
            content
                .set_fill_rgb(fr, fg, fb)
                .set_stroke_rgb(sr, sg, sb)
                .set_line_width(pt(width));
        }
    }
}

fn finish_shape(content: &mut Content, paint: Paint) {
    match paint {
        Paint::Fill(_) => content.fill_nonzero(),
        Paint::Stroke { .. } => content.stroke(),
        Paint::FillStroke { .. } => content.fill_nonzero_and_stroke(),
    };
}

fn rounded_rect_path(content: &mut Content, rect: Rect, radius: f32) {
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0);
    let k = r * KAPPA;
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.w, rect.y + rect.h);

    content.move_to(pt(left + r), flip(top));
    content.line_to(pt(right - r), flip(top));
    content.cubic_to(
        pt(right - r + k),
        flip(top),
        pt(right),
        flip(top + r - k),
        pt(right),
        flip(top + r),
    );
    content.line_to(pt(right), flip(bottom - r));
    content.cubic_to(
        pt(right),
        flip(bottom - r + k),
        pt(right - r + k),
        flip(bottom),
        pt(right - r),
        flip(bottom),
    );
    content.line_to(pt(left + r), flip(bottom));
    content.cubic_to(
        pt(left + r - k),
        flip(bottom),
        pt(left),
        flip(bottom - r + k),
        pt(left),
        flip(bottom - r),
    );
    content.line_to(pt(left), flip(top + r));
    content.cubic_to(
        pt(left),
        flip(top + r - k),
        pt(left + r - k),
        flip(top),
        pt(left + r),
        flip(top),
    );
    content.close_path();
}

fn circle_path(content: &mut Content, cx: f32, cy: f32, r: f32) {
    let k = r * KAPPA;
    content.move_to(pt(cx + r), flip(cy));
    content.cubic_to(pt(cx + r), flip(cy + k), pt(cx + k), flip(cy + r), pt(cx), flip(cy + r));
    content.cubic_to(pt(cx - k), flip(cy + r), pt(cx - r), flip(cy + k), pt(cx - r), flip(cy));
    content.cubic_to(pt(cx - r), flip(cy - k), pt(cx - k), flip(cy - r), pt(cx), flip(cy - r));
    content.cubic_to(pt(cx + k), flip(cy - r), pt(cx + r), flip(cy - k), pt(cx + r), flip(cy));
    content.close_path();
}

fn render_text(content: &mut Content, x: f32, y: f32, text: &str, style: TextStyle) {
    let width = text_width(text, style.font, style.size);
    let left = match style.align {
        Align::Left => x,
        Align::Right => x - width,
        Align::Center => x - width / 2.0,
    };
    let (r, g, b) = style.color.unit();
    let bytes = to_winansi(text);
    content
        .set_fill_rgb(r, g, b)
        .begin_text()
        .set_font(font_name(style.font), style.size)
        .next_line(pt(left), flip(y))
        .show(Str(&bytes))
        .end_text();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Canvas, Rgb};

    fn sample() -> DisplayList {
        let mut doc = DisplayList::new();
        doc.draw(DrawOp::Rect {
            rect: Rect::new(15.0, 20.0, 180.0, 9.0),
            paint: Paint::Fill(Rgb(17, 24, 39)),
        });
        doc.draw(DrawOp::Text {
            x: 195.0,
            y: 28.0,
            text: "Page 1 of 2".to_string(),
            style: TextStyle::new(FontStyle::Normal, 7.0, Rgb(0, 0, 0)).right(),
        });
        doc.add_page();
        doc.draw(DrawOp::Circle {
            cx: 26.0,
            cy: 24.0,
            r: 9.5,
            paint: Paint::Fill(Rgb(201, 168, 76)),
        });
        doc
    }

    #[test]
    fn test_encode_produces_pdf() {
        let bytes = encode(&sample(), "Zakah Report").unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Helvetica-Bold"));
        assert!(text.contains("/WinAnsiEncoding"));
        assert!(text.contains("/Count 2"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_winansi_mapping() {
        assert_eq!(to_winansi("Abc 1"), b"Abc 1".to_vec());
        assert_eq!(to_winansi("\u{2014}"), vec![0x97]);
        assert_eq!(to_winansi("caf\u{e9}"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(to_winansi("\u{09f3}"), vec![b'?']);
    }

    #[test]
    fn test_coordinate_flip() {
        assert!((flip(0.0) - pt(297.0)).abs() < 1e-3);
        assert!(flip(297.0).abs() < 1e-3);
        assert!((pt(25.4) - 72.0).abs() < 1e-3);
    }
}
