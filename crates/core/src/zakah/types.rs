//! Aggregation data types.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use zakah_shared::CurrencyCode;

/// Silver nisab in grams.
pub const SILVER_NISAB_GRAMS: Decimal = dec!(612.36);

/// Gold nisab in grams.
pub const GOLD_NISAB_GRAMS: Decimal = dec!(87.48);

/// Rate for a lunar (Hijri) year.
pub const LUNAR_RATE: Decimal = dec!(0.025);

/// Rate for a solar (Gregorian) year.
pub const SOLAR_RATE: Decimal = dec!(0.02577);

/// Share of face value counted for long-term holdings.
pub const LONG_TERM_PROXY: Decimal = dec!(0.25);

/// Largest per-gram price accepted; anything above counts as unavailable.
pub const MAX_UNIT_PRICE: Decimal = dec!(1000000000);

/// Precious metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metal {
    /// Gold.
    Gold,
    /// Silver.
    Silver,
}

/// Metal whose price sets the nisab threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NisabBasis {
    /// 612.36 g of silver.
    #[default]
    Silver,
    /// 87.48 g of gold.
    Gold,
}

impl NisabBasis {
    /// Metal backing this basis.
    #[must_use]
    pub const fn metal(self) -> Metal {
        match self {
            Self::Silver => Metal::Silver,
            Self::Gold => Metal::Gold,
        }
    }

    /// Threshold mass in grams.
    #[must_use]
    pub const fn threshold_grams(self) -> Decimal {
        match self {
            Self::Silver => SILVER_NISAB_GRAMS,
            Self::Gold => GOLD_NISAB_GRAMS,
        }
    }
}

/// Calendar the holding year (hawl) is counted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarBasis {
    /// Lunar / Hijri year.
    #[default]
    Lunar,
    /// Solar / Gregorian year.
    Solar,
}

impl CalendarBasis {
    /// Obligation rate for this calendar.
    #[must_use]
    pub const fn rate(self) -> Decimal {
        match self {
            Self::Lunar => LUNAR_RATE,
            Self::Solar => SOLAR_RATE,
        }
    }
}

/// How tradable holdings are valued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockValuation {
    /// Short-term trading: full face value.
    #[default]
    #[serde(alias = "trade")]
    Trading,
    /// Long-term investment: 25% of face value.
    #[serde(alias = "longterm", alias = "long_term")]
    LongTermHolding,
}

/// Metal unit prices in the display currency, per gram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPrices {
    /// Price of one gram of pure gold.
    pub gold_per_gram: Decimal,
    /// Price of one gram of pure silver.
    pub silver_per_gram: Decimal,
}

impl UnitPrices {
    /// Creates a price pair.
    #[must_use]
    pub const fn new(gold_per_gram: Decimal, silver_per_gram: Decimal) -> Self {
        Self {
            gold_per_gram,
            silver_per_gram,
        }
    }

    /// Price of `metal`. Negative prices and prices above
    /// [`MAX_UNIT_PRICE`] count as unavailable (zero).
    #[must_use]
    pub fn price_of(&self, metal: Metal) -> Decimal {
        let price = match metal {
            Metal::Gold => self.gold_per_gram,
            Metal::Silver => self.silver_per_gram,
        };
        if price.is_sign_negative() || price > MAX_UNIT_PRICE {
            return Decimal::ZERO;
        }
        price
    }
}

/// User-selected calculation settings.
///
/// Passed explicitly into aggregation and composition; nothing is read from
/// ambient state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Metal setting the threshold.
    pub nisab_basis: NisabBasis,
    /// Calendar setting the rate.
    pub calendar: CalendarBasis,
    /// Stock valuation method.
    pub stock_valuation: StockValuation,
    /// Display currency code.
    pub currency: CurrencyCode,
}

/// Whether a section adds to or deducts from wealth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Added to total assets.
    Asset,
    /// Subtracted from total assets.
    Liability,
}

/// The five report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Section A.
    LiquidAssets,
    /// Section B.
    PreciousMetals,
    /// Section C.
    Investments,
    /// Section D.
    BusinessAssets,
    /// Section E.
    Liabilities,
}

impl Category {
    /// Asset or liability.
    #[must_use]
    pub const fn kind(self) -> SectionKind {
        match self {
            Self::Liabilities => SectionKind::Liability,
            _ => SectionKind::Asset,
        }
    }

    /// Heading printed above the section.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::LiquidAssets => "SECTION A \u{2014} CASH & LIQUID ASSETS",
            Self::PreciousMetals => "SECTION B \u{2014} PRECIOUS METALS & JEWELRY",
            Self::Investments => "SECTION C \u{2014} INVESTMENTS & FINANCIAL ASSETS",
            Self::BusinessAssets => "SECTION D \u{2014} BUSINESS ASSETS",
            Self::Liabilities => "SECTION E \u{2014} LIABILITIES & DEDUCTIONS",
        }
    }
}

/// A labelled amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display label.
    pub label: String,
    /// Amount, never negative.
    pub amount: Decimal,
}

impl LineItem {
    /// Creates a line item; negative amounts are clamped to zero.
    #[must_use]
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount: amount.max(Decimal::ZERO),
        }
    }
}

/// One report section and its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Which section this is.
    pub category: Category,
    /// Every entry in display order, zero-valued ones included.
    pub entries: Vec<LineItem>,
    /// Sum of all entries, saturating at `Decimal::MAX`.
    pub total: Decimal,
}

impl Section {
    /// Builds a section; the total is derived from the entries.
    #[must_use]
    pub fn new(category: Category, entries: Vec<LineItem>) -> Self {
        let total = entries
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount));
        Self {
            category,
            entries,
            total,
        }
    }

    /// Asset or liability.
    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        self.category.kind()
    }

    /// Entries shown in the report: those with a positive amount.
    pub fn visible_entries(&self) -> impl Iterator<Item = &LineItem> {
        self.entries.iter().filter(|e| e.amount > Decimal::ZERO)
    }

    /// True when no entry would be shown.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.visible_entries().next().is_none()
    }
}

/// Outcome of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Section A.
    pub liquid_assets: Section,
    /// Section B.
    pub precious_metals: Section,
    /// Section C.
    pub investments: Section,
    /// Section D.
    pub business_assets: Section,
    /// Section E.
    pub liabilities: Section,
    /// Sum of the four asset section totals.
    pub total_assets: Decimal,
    /// Liabilities section total.
    pub total_liabilities: Decimal,
    /// `max(0, total_assets - total_liabilities)`.
    pub net_wealth: Decimal,
    /// Threshold mass times the unit price of the basis metal.
    pub nisab_value: Decimal,
    /// Rate of the selected calendar.
    pub rate: Decimal,
    /// `nisab_value > 0 && net_wealth >= nisab_value`.
    pub is_eligible: bool,
    /// `net_wealth * rate` when eligible, otherwise zero.
    pub obligation_due: Decimal,
}

impl AggregationResult {
    /// Asset sections in report order.
    #[must_use]
    pub fn asset_sections(&self) -> [&Section; 4] {
        [
            &self.liquid_assets,
            &self.precious_metals,
            &self.investments,
            &self.business_assets,
        ]
    }
}
