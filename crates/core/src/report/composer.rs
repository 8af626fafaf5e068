//! Report composition: aggregation output laid out page by page.

#![allow(clippy::float_arithmetic)]

use rust_decimal::Decimal;
use zakah_shared::Money;

use super::error::ExportError;
use crate::date::ReportDate;
use crate::layout::theme::{
    COVER_OFFSET, COVER_SUBTITLE, CONTENT_WIDTH, DARK, GOLD, GREEN, LIGHT_GOLD, MARGIN_X, MUTED,
    PAGE_WIDTH, RED, RIGHT_EDGE, SETTINGS_HEADING, SETTINGS_VALUE, TEAL, VIOLET, WHITE,
};
use crate::layout::{
    Canvas, DrawOp, FontStyle, Footer, Highlight, LayoutSession, Paint, Rect, Rgb, SummaryRow,
    TextStyle,
};
use crate::zakah::{
    AggregationResult, CalendarBasis, Category, NisabBasis, ReportOptions, Section,
    StockValuation,
};

/// Fixed disclaimer; `{publisher}` is substituted.
const DISCLAIMER: &str = "This report is generated for estimation purposes only. Metal prices \
and exchange rates are sourced from third-party providers and may not reflect exact market \
values. Please consult a qualified Islamic scholar for authoritative Zakah rulings. \
{publisher} does not warrant the accuracy of this report.";

/// Names printed in banners and footers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    /// Product title, e.g. `ZAKAH CALCULATOR`.
    pub product_name: String,
    /// Publisher line.
    pub publisher: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            product_name: "ZAKAH CALCULATOR".to_string(),
            publisher: "Samin's Initiatives".to_string(),
        }
    }
}

/// File name of the exported document for a report date.
#[must_use]
pub fn report_filename(iso_date: &str) -> String {
    format!("zakah-report-{iso_date}.pdf")
}

/// Lays an [`AggregationResult`] out onto a [`Canvas`].
#[derive(Debug, Clone, Default)]
pub struct ReportComposer {
    branding: Branding,
}

impl ReportComposer {
    /// Creates a composer.
    #[must_use]
    pub const fn new(branding: Branding) -> Self {
        Self { branding }
    }

    /// Branding in use.
    #[must_use]
    pub const fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Composes the full report onto `canvas` and returns it with footers stamped.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::RendererUnavailable`] when the canvas is not
    /// ready; nothing is drawn in that case.
    pub fn compose<C: Canvas>(
        &self,
        canvas: C,
        result: &AggregationResult,
        options: &ReportOptions,
        date: &ReportDate,
    ) -> Result<C, ExportError> {
        if !canvas.is_ready() {
            return Err(ExportError::RendererUnavailable);
        }

        let running_header = format!(
            "{}  |  {}",
            self.branding.product_name, self.branding.publisher
        );
        let mut session = LayoutSession::new(canvas, running_header, 0.0);
        let money = |amount: Decimal| Money::new(amount, options.currency.clone()).to_string();

        self.draw_cover(&mut session, date);
        session.set_cursor(COVER_OFFSET);
        Self::draw_settings(&mut session, options);

        for section in result.asset_sections() {
            Self::draw_asset_section(&mut session, section, &money);
        }
        Self::draw_liabilities(&mut session, &result.liabilities, &money);

        let status = if result.is_eligible {
            "ZAKAH OBLIGATORY"
        } else {
            "NOT YET ELIGIBLE"
        };
        session.draw_summary_header("ZAKAH SUMMARY", status);
        for (index, row) in Self::summary_rows(result, options, &money).iter().enumerate() {
            session.draw_summary_row(row, index);
        }

        session.draw_highlight_banner(&Highlight {
            title: "ZAKAH DUE THIS YEAR".to_string(),
            subtitle: hawl_note(options.calendar).to_string(),
            amount: money(result.obligation_due),
            eligible: result.is_eligible,
        });

        session.draw_disclaimer(&DISCLAIMER.replace("{publisher}", &self.branding.publisher));

        let footer = Footer {
            note: format!(
                "{}  |  Zakah Calculator  |  100% Local Processing \u{2014} No Data Shared",
                self.branding.publisher
            ),
        };
        Ok(session.finish_content().stamp_footers(&footer))
    }

    fn draw_cover<C: Canvas>(&self, session: &mut LayoutSession<C>, date: &ReportDate) {
        session.fill_rect(Rect::new(0.0, 0.0, PAGE_WIDTH, 48.0), DARK);
        session.fill_rect(Rect::new(0.0, 0.0, PAGE_WIDTH, 3.5), GOLD);
        session.draw(DrawOp::Circle {
            cx: 26.0,
            cy: 24.0,
            r: 9.5,
            paint: Paint::Fill(GOLD),
        });
        session.text(
            26.0,
            27.5,
            "ZC",
            TextStyle::new(FontStyle::Bold, 10.0, DARK).center(),
        );

        session.text(
            42.0,
            20.0,
            self.branding.product_name.as_str(),
            TextStyle::new(FontStyle::Bold, 20.0, WHITE),
        );
        session.text(
            42.0,
            29.0,
            self.branding.publisher.as_str(),
            TextStyle::new(FontStyle::Normal, 10.0, GOLD),
        );
        session.text(
            42.0,
            37.0,
            "Zakah Assessment Report  |  1430H Method",
            TextStyle::new(FontStyle::Normal, 8.5, COVER_SUBTITLE),
        );

        session.text(
            RIGHT_EDGE,
            21.0,
            date.display.as_str(),
            TextStyle::new(FontStyle::Bold, 9.0, GOLD).right(),
        );
        let pale = TextStyle::new(FontStyle::Normal, 8.0, COVER_SUBTITLE).right();
        session.text(RIGHT_EDGE, 28.0, "Date of Report", pale);
        session.text(RIGHT_EDGE, 34.0, format!("ISO: {}", date.iso), pale);

        session.fill_rect(Rect::new(0.0, 44.5, PAGE_WIDTH, 2.0), GOLD);
    }

    fn draw_settings<C: Canvas>(session: &mut LayoutSession<C>, options: &ReportOptions) {
        let y = session.cursor_y();
        session.draw(DrawOp::RoundedRect {
            rect: Rect::new(MARGIN_X, y, CONTENT_WIDTH, 20.0),
            radius: 2.5,
            paint: Paint::FillStroke {
                fill: LIGHT_GOLD,
                stroke: GOLD,
                width: 0.4,
            },
        });
        session.text(
            19.0,
            y + 6.5,
            "CALCULATION SETTINGS",
            TextStyle::new(FontStyle::Bold, 7.5, SETTINGS_HEADING),
        );

        let columns = [
            ("Nisab Basis", nisab_label(options.nisab_basis).to_string()),
            ("Calendar", calendar_label(options.calendar).to_string()),
            ("Stock Method", stock_label(options.stock_valuation).to_string()),
            ("Currency", options.currency.to_string()),
        ];
        let label_style = TextStyle::new(FontStyle::Normal, 7.5, MUTED);
        let value_style = TextStyle::new(FontStyle::Bold, 8.0, SETTINGS_VALUE);
        let mut x = 19.0;
        for (label, value) in columns {
            session.text(x, y + 13.0, label, label_style);
            session.text(x, y + 18.0, value, value_style);
            x += 45.0;
        }
        session.advance(26.0);
    }

    fn draw_asset_section<C: Canvas>(
        session: &mut LayoutSession<C>,
        section: &Section,
        money: &impl Fn(Decimal) -> String,
    ) {
        let accent = accent(section.category);
        session.draw_section_header(section.category.title());
        if section.is_blank() {
            session.draw_empty_row();
        } else {
            for (index, entry) in section.visible_entries().enumerate() {
                session.draw_data_row(&entry.label, &money(entry.amount), index);
            }
        }
        session.draw_totals_row("Section Total", &money(section.total), accent);
        session.advance(2.0);
    }

    fn draw_liabilities<C: Canvas>(
        session: &mut LayoutSession<C>,
        section: &Section,
        money: &impl Fn(Decimal) -> String,
    ) {
        session.draw_section_header(section.category.title());
        if section.is_blank() {
            session.draw_empty_row();
        } else {
            for (index, entry) in section.visible_entries().enumerate() {
                session.draw_liability_row(&entry.label, &money(entry.amount), index);
            }
        }
        session.draw_liability_totals_row("Total Liabilities", &money(section.total));
    }

    fn summary_rows(
        result: &AggregationResult,
        options: &ReportOptions,
        money: &impl Fn(Decimal) -> String,
    ) -> [SummaryRow; 5] {
        let row = |label: &str, value: String, color: Rgb, emphasized: bool| SummaryRow {
            label: label.to_string(),
            value,
            color,
            emphasized,
        };
        [
            row("Total Assets", money(result.total_assets), TEAL, false),
            row(
                "(-) Total Liabilities",
                money(result.total_liabilities),
                RED,
                false,
            ),
            row("Net Zakatable Wealth", money(result.net_wealth), GREEN, true),
            row("Nisab Threshold", money(result.nisab_value), MUTED, false),
            row(
                "Rate Applied",
                rate_label(options.calendar).to_string(),
                DARK,
                false,
            ),
        ]
    }
}

const fn accent(category: Category) -> Rgb {
    match category {
        Category::LiquidAssets | Category::Investments => TEAL,
        Category::PreciousMetals => GOLD,
        Category::BusinessAssets => VIOLET,
        Category::Liabilities => RED,
    }
}

const fn nisab_label(basis: NisabBasis) -> &'static str {
    match basis {
        NisabBasis::Silver => "Silver \u{2014} 612.36g",
        NisabBasis::Gold => "Gold \u{2014} 87.48g",
    }
}

const fn calendar_label(calendar: CalendarBasis) -> &'static str {
    match calendar {
        CalendarBasis::Lunar => "Lunar / Hijri (2.5%)",
        CalendarBasis::Solar => "Solar / Gregorian (2.577%)",
    }
}

const fn stock_label(method: StockValuation) -> &'static str {
    match method {
        StockValuation::Trading => "Short-term Trading",
        StockValuation::LongTermHolding => "Long-term Investment (25% proxy)",
    }
}

const fn rate_label(calendar: CalendarBasis) -> &'static str {
    match calendar {
        CalendarBasis::Lunar => "2.5% (Lunar/Hijri)",
        CalendarBasis::Solar => "2.577% (Solar/Gregorian)",
    }
}

const fn hawl_note(calendar: CalendarBasis) -> &'static str {
    match calendar {
        CalendarBasis::Lunar => "Based on one full Hawl (1 Hijri year)",
        CalendarBasis::Solar => "Based on one full Hawl (1 Gregorian year)",
    }
}
