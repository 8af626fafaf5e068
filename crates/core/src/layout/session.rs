//! Layout session: cursor, page-break guard, and footer phase.

use tracing::debug;

use super::canvas::{Canvas, DrawOp, FontStyle, Paint, Rect, Rgb, TextStyle};
use super::theme::{
    DARK, FOOTER_HEIGHT, FOOTER_TEXT, FOOTER_Y, GOLD, HEADER_OFFSET, MARGIN_X, PAGE_WIDTH, PALE,
    PRINTABLE_BOTTOM, RIGHT_EDGE,
};

/// Position of the layout cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    /// Zero-based page the cursor is on.
    pub page_index: usize,
    /// Vertical position in millimetres from the page top.
    pub cursor_y: f32,
}

/// Text stamped into every page footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    /// Left-hand note.
    pub note: String,
}

/// One in-flight layout pass over a canvas.
///
/// Not shared: each export builds its own session and consumes it through
/// [`LayoutSession::finish_content`].
pub struct LayoutSession<C: Canvas> {
    canvas: C,
    state: LayoutState,
    running_header: String,
}

impl<C: Canvas> LayoutSession<C> {
    /// Starts on the canvas's current page at `start_y`.
    ///
    /// `running_header` is printed in the condensed header of every page
    /// after the first.
    pub fn new(canvas: C, running_header: impl Into<String>, start_y: f32) -> Self {
        let page_index = canvas.current_page();
        Self {
            canvas,
            state: LayoutState {
                page_index,
                cursor_y: start_y,
            },
            running_header: running_header.into(),
        }
    }

    /// Current cursor.
    #[must_use]
    pub const fn state(&self) -> LayoutState {
        self.state
    }

    /// Current vertical position.
    #[must_use]
    pub const fn cursor_y(&self) -> f32 {
        self.state.cursor_y
    }

    /// Moves the cursor down by `dy` and returns the new position.
    pub fn advance(&mut self, dy: f32) -> f32 {
        self.state.cursor_y += dy;
        self.state.cursor_y
    }

    /// Moves the cursor to `y`.
    pub fn set_cursor(&mut self, y: f32) {
        self.state.cursor_y = y;
    }

    /// Number of pages so far.
    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    /// Draws on the current page.
    pub fn draw(&mut self, op: DrawOp) {
        self.canvas.draw(op);
    }

    /// Draws a text run.
    pub fn text(&mut self, x: f32, y: f32, text: impl Into<String>, style: TextStyle) {
        self.canvas.draw(DrawOp::Text {
            x,
            y,
            text: text.into(),
            style,
        });
    }

    /// Fills a rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.canvas.draw(DrawOp::Rect {
            rect,
            paint: Paint::Fill(color),
        });
    }

    /// Advance width of `text` in millimetres.
    pub fn text_width(&self, text: &str, font: FontStyle, size: f32) -> f32 {
        self.canvas.text_width(text, font, size)
    }

    /// Guarantees `needed` mm below the cursor on the current page.
    ///
    /// When the row would cross the printable bottom a new page is started,
    /// the running header drawn, and the cursor reset below it. Returns the
    /// cursor position to draw at.
    pub fn ensure_space(&mut self, needed: f32) -> f32 {
        if self.state.cursor_y + needed > PRINTABLE_BOTTOM {
            self.canvas.add_page();
            self.state.page_index = self.canvas.current_page();
            self.state.cursor_y = self.draw_running_header();
            debug!(
                page = self.state.page_index + 1,
                needed, "layout page break"
            );
        }
        self.state.cursor_y
    }

    fn draw_running_header(&mut self) -> f32 {
        self.fill_rect(Rect::new(0.0, 0.0, PAGE_WIDTH, 12.0), DARK);
        self.fill_rect(Rect::new(0.0, 0.0, PAGE_WIDTH, 2.0), GOLD);
        let label = self.running_header.clone();
        self.text(MARGIN_X, 8.0, label, TextStyle::new(FontStyle::Bold, 8.0, GOLD));
        self.text(
            RIGHT_EDGE,
            8.0,
            "cont.",
            TextStyle::new(FontStyle::Normal, 8.0, PALE).right(),
        );
        HEADER_OFFSET
    }

    /// Ends the content phase. The page count is fixed from here on.
    #[must_use]
    pub fn finish_content(self) -> PendingFooters<C> {
        PendingFooters {
            canvas: self.canvas,
        }
    }
}

/// A laid-out document awaiting its footers.
pub struct PendingFooters<C: Canvas> {
    canvas: C,
}

impl<C: Canvas> PendingFooters<C> {
    /// Final page count.
    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    /// Stamps the footer bar and "Page p of N" on every page.
    pub fn stamp_footers(mut self, footer: &Footer) -> C {
        let total = self.canvas.page_count();
        for index in 0..total {
            self.canvas.set_page(index);
            self.canvas.draw(DrawOp::Rect {
                rect: Rect::new(0.0, FOOTER_Y, PAGE_WIDTH, FOOTER_HEIGHT),
                paint: Paint::Fill(DARK),
            });
            self.canvas.draw(DrawOp::Rect {
                rect: Rect::new(0.0, FOOTER_Y, PAGE_WIDTH, 0.8),
                paint: Paint::Fill(GOLD),
            });
            let style = TextStyle::new(FontStyle::Normal, 7.0, FOOTER_TEXT);
            self.canvas.draw(DrawOp::Text {
                x: MARGIN_X,
                y: 293.0,
                text: footer.note.clone(),
                style,
            });
            self.canvas.draw(DrawOp::Text {
                x: RIGHT_EDGE,
                y: 293.0,
                text: format!("Page {} of {}", index + 1, total),
                style: style.right(),
            });
        }
        self.canvas
    }
}
