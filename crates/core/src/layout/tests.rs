//! Pagination tests for the layout session.

use rstest::rstest;

use super::canvas::{Canvas, DrawOp, Paint};
use super::display_list::DisplayList;
use super::rows::{EMPTY_SECTION_TEXT, Highlight, SummaryRow};
use super::session::{Footer, LayoutSession};
use super::theme::{DISCLAIMER_X, GOLD, GREEN, HEADER_OFFSET, PRINTABLE_BOTTOM, STRIPE_WIDTH};

fn session_at(y: f32) -> LayoutSession<DisplayList> {
    LayoutSession::new(DisplayList::new(), "ZAKAH CALCULATOR  |  Test", y)
}

fn footer() -> Footer {
    Footer {
        note: "Test | Zakah Calculator".to_string(),
    }
}

#[test]
fn test_ensure_space_keeps_cursor_when_it_fits() {
    let mut session = session_at(100.0);
    assert!((session.ensure_space(12.0) - 100.0).abs() < 1e-4);
    assert_eq!(session.page_count(), 1);
}

#[test]
fn test_ensure_space_exact_fit_does_not_break() {
    let mut session = session_at(PRINTABLE_BOTTOM - 7.0);
    let y = session.ensure_space(7.0);
    assert!((y - (PRINTABLE_BOTTOM - 7.0)).abs() < 1e-4);
    assert_eq!(session.page_count(), 1);
}

#[test]
fn test_ensure_space_breaks_and_draws_running_header() {
    let mut session = session_at(275.0);
    let y = session.ensure_space(7.0);

    assert!((y - HEADER_OFFSET).abs() < 1e-4);
    assert_eq!(session.state().page_index, 1);

    let doc = session.finish_content().stamp_footers(&footer());
    assert_eq!(doc.page_count(), 2);
    assert!(doc.pages()[1].has_text("ZAKAH CALCULATOR  |  Test"));
    assert!(doc.pages()[1].has_text("cont."));
    assert!(!doc.pages()[0].has_text("cont."));
}

#[rstest]
#[case(1)]
#[case(12)]
#[case(40)]
#[case(95)]
fn test_rows_advance_by_their_height(#[case] rows: usize) {
    let mut session = session_at(54.0);
    let mut breaks = 0;
    let mut page = 0;
    for i in 0..rows {
        let before = session.cursor_y();
        let after = session.draw_data_row("Cash on Hand", "BDT 1,000.00", i);
        if session.state().page_index != page {
            page = session.state().page_index;
            breaks += 1;
            assert!((after - (HEADER_OFFSET + 6.8)).abs() < 1e-4);
        } else {
            assert!((after - (before + 6.8)).abs() < 1e-4);
        }
        assert!(after <= PRINTABLE_BOTTOM + 1e-4);
    }

    let doc = session.finish_content().stamp_footers(&footer());
    assert_eq!(doc.page_count(), breaks + 1);
}

#[test]
fn test_forced_breaks_stamp_every_footer() {
    let mut session = session_at(54.0);
    let forced = 3;
    for _ in 0..forced {
        session.set_cursor(PRINTABLE_BOTTOM);
        session.draw_section_header("SECTION");
    }

    let pending = session.finish_content();
    assert_eq!(pending.page_count(), forced + 1);
    let doc = pending.stamp_footers(&footer());

    let total = doc.page_count();
    assert_eq!(total, forced + 1);
    for (i, page) in doc.pages().iter().enumerate() {
        let label = format!("Page {} of {}", i + 1, total);
        assert!(page.has_text(&label), "missing {label}");
        assert_eq!(page.texts().filter(|t| t.starts_with("Page ")).count(), 1);
        assert!(page.has_text("Test | Zakah Calculator"));
    }
}

#[test]
fn test_footers_drawn_last_on_each_page() {
    let mut session = session_at(54.0);
    session.draw_data_row("A", "1", 0);
    session.set_cursor(PRINTABLE_BOTTOM);
    session.draw_data_row("B", "2", 1);

    let doc = session.finish_content().stamp_footers(&footer());
    for page in doc.pages() {
        match page.ops().last() {
            Some(DrawOp::Text { text, .. }) => assert!(text.starts_with("Page ")),
            other => panic!("unexpected last op {other:?}"),
        }
    }
}

#[test]
fn test_data_row_shading_follows_index() {
    let mut session = session_at(54.0);
    session.draw_data_row("Even", "1", 0);
    session.draw_data_row("Odd", "2", 1);
    let doc = session.finish_content().stamp_footers(&footer());

    let ops = doc.pages()[0].ops();
    // even row: shade, label, value; odd row: label, value
    assert!(matches!(ops[0], DrawOp::Rect { .. }));
    assert!(matches!(ops[1], DrawOp::Text { .. }));
    assert!(matches!(ops[3], DrawOp::Text { .. }));
    assert!(matches!(ops[4], DrawOp::Text { .. }));
}

#[test]
fn test_empty_row_prints_placeholder() {
    let mut session = session_at(54.0);
    let y = session.draw_empty_row();
    assert!((y - 62.0).abs() < 1e-4);

    let doc = session.finish_content().stamp_footers(&footer());
    assert_eq!(
        doc.pages()[0]
            .texts()
            .filter(|t| *t == EMPTY_SECTION_TEXT)
            .count(),
        1
    );
}

#[test]
fn test_liability_rows_carry_minus_prefix() {
    let mut session = session_at(54.0);
    session.draw_liability_row("Personal Loans Due", "BDT 500.00", 0);
    let y = session.draw_liability_totals_row("Total Liabilities", "BDT 500.00");
    assert!((y - (54.0 + 6.8 + 13.0)).abs() < 1e-4);

    let doc = session.finish_content().stamp_footers(&footer());
    let dashes = doc.pages()[0]
        .texts()
        .filter(|t| *t == "(-) BDT 500.00")
        .count();
    assert_eq!(dashes, 2);
}

#[test]
fn test_summary_header_reserves_block() {
    let mut session = session_at(PRINTABLE_BOTTOM - 60.0);
    let y = session.draw_summary_header("ZAKAH SUMMARY", "ZAKAH OBLIGATORY");
    assert_eq!(session.page_count(), 2);
    assert!((y - (HEADER_OFFSET + 11.0)).abs() < 1e-4);
}

#[test]
fn test_summary_and_highlight_advance() {
    let mut session = session_at(100.0);
    let row = SummaryRow {
        label: "Net Zakatable Wealth".to_string(),
        value: "BDT 3,500.00".to_string(),
        color: GREEN,
        emphasized: true,
    };
    assert!((session.draw_summary_row(&row, 0) - 108.0).abs() < 1e-4);

    let banner = Highlight {
        title: "ZAKAH DUE THIS YEAR".to_string(),
        subtitle: "Based on one full Hawl (1 Hijri year)".to_string(),
        amount: "BDT 87.50".to_string(),
        eligible: true,
    };
    assert!((session.draw_highlight_banner(&banner) - 128.0).abs() < 1e-4);
}

#[test]
fn test_disclaimer_advances_per_line() {
    let text = "word ".repeat(120);
    let mut session = session_at(100.0);
    let y = session.draw_disclaimer(&text);

    let doc = session.finish_content().stamp_footers(&footer());
    let lines = doc.pages()[0]
        .texts()
        .filter(|t| t.starts_with("word"))
        .count();
    assert!(lines > 1);
    #[allow(clippy::cast_precision_loss)]
    let expected = 100.0 + 4.0 + lines as f32 * 4.0 + 4.0;
    assert!((y - expected).abs() < 1e-3);
}

#[test]
fn test_section_header_stripe_is_gold() {
    let mut session = session_at(54.0);
    session.draw_section_header("SECTION E");

    let doc = session.finish_content().stamp_footers(&footer());
    let stripe = doc.pages()[0].ops().iter().find_map(|op| match op {
        DrawOp::Rect { rect, paint } if (rect.w - STRIPE_WIDTH).abs() < 1e-4 => Some(*paint),
        _ => None,
    });
    assert_eq!(stripe, Some(Paint::Fill(GOLD)));
}

#[test]
fn test_disclaimer_is_indented() {
    let mut session = session_at(100.0);
    session.draw_disclaimer("Figures are estimates.");

    let doc = session.finish_content().stamp_footers(&footer());
    let x = doc.pages()[0].ops().iter().find_map(|op| match op {
        DrawOp::Text { x, text, .. } if text.starts_with("Figures") => Some(*x),
        _ => None,
    });
    assert!(x.is_some_and(|x| (x - DISCLAIMER_X).abs() < 1e-4));
}
