//! Abstract drawing surface.

use super::metrics;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components scaled to `0.0..=1.0`.
    #[must_use]
    pub fn unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

/// Helvetica face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Regular weight.
    Normal,
    /// Bold weight.
    Bold,
    /// Oblique.
    Italic,
}

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// x is the left edge.
    #[default]
    Left,
    /// x is the right edge.
    Right,
    /// x is the centre.
    Center,
}

/// How a text run is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Face.
    pub font: FontStyle,
    /// Size in points.
    pub size: f32,
    /// Fill colour.
    pub color: Rgb,
    /// Anchoring.
    pub align: Align,
}

impl TextStyle {
    /// Left-aligned text.
    #[must_use]
    pub const fn new(font: FontStyle, size: f32, color: Rgb) -> Self {
        Self {
            font,
            size,
            color,
            align: Align::Left,
        }
    }

    /// Same style, right-aligned.
    #[must_use]
    pub const fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    /// Same style, centred.
    #[must_use]
    pub const fn center(mut self) -> Self {
        self.align = Align::Center;
        self
    }
}

/// Axis-aligned rectangle, top-left origin, millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Fill and stroke of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Filled, no outline.
    Fill(Rgb),
    /// Outline only.
    Stroke {
        /// Line colour.
        color: Rgb,
        /// Line width in millimetres.
        width: f32,
    },
    /// Filled and outlined.
    FillStroke {
        /// Fill colour.
        fill: Rgb,
        /// Line colour.
        stroke: Rgb,
        /// Line width in millimetres.
        width: f32,
    },
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Rectangle.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Paint.
        paint: Paint,
    },
    /// Rectangle with rounded corners.
    RoundedRect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        radius: f32,
        /// Paint.
        paint: Paint,
    },
    /// Circle.
    Circle {
        /// Centre x.
        cx: f32,
        /// Centre y.
        cy: f32,
        /// Radius.
        r: f32,
        /// Paint.
        paint: Paint,
    },
    /// Straight line.
    Line {
        /// Start x.
        x1: f32,
        /// Start y.
        y1: f32,
        /// End x.
        x2: f32,
        /// End y.
        y2: f32,
        /// Colour.
        color: Rgb,
        /// Width in millimetres.
        width: f32,
    },
    /// Single-line text run; `y` is the baseline.
    Text {
        /// Anchor x.
        x: f32,
        /// Baseline y.
        y: f32,
        /// Content.
        text: String,
        /// Style.
        style: TextStyle,
    },
}

/// A page-oriented drawing surface with an implicit current page.
///
/// A fresh canvas holds one empty page, which is current.
pub trait Canvas {
    /// Whether the surface can accept drawing at all.
    fn is_ready(&self) -> bool {
        true
    }

    /// Appends a page and makes it current.
    fn add_page(&mut self);

    /// Makes the zero-based `index` current. Out-of-range indices are ignored.
    fn set_page(&mut self, index: usize);

    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Zero-based index of the current page.
    fn current_page(&self) -> usize;

    /// Draws on the current page.
    fn draw(&mut self, op: DrawOp);

    /// Advance width of `text` in millimetres.
    fn text_width(&self, text: &str, font: FontStyle, size: f32) -> f32 {
        metrics::text_width(text, font, size)
    }
}
