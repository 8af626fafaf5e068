//! Aggregation engine: sections, threshold, and obligation.

use rust_decimal::Decimal;

use super::types::{
    AggregationResult, Category, LONG_TERM_PROXY, LineItem, ReportOptions, Section,
    StockValuation, UnitPrices,
};
use crate::fields::{
    BUSINESS_ASSETS, FieldDef, INVESTMENTS, LIABILITIES, LIQUID_ASSETS, PRECIOUS_METALS,
    RawValues,
};

/// Label suffix for holdings valued at the long-term proxy.
const PROXY_SUFFIX: &str = " (25% proxy)";

/// Pure aggregation of raw field values into an [`AggregationResult`].
pub struct AggregationEngine;

impl AggregationEngine {
    /// Aggregates raw values under the given prices and options.
    ///
    /// Pure: identical inputs always produce an identical result. Malformed
    /// input has already degraded to zero in [`RawValues`]; a zero price for
    /// the nisab metal yields a zero threshold and therefore no obligation.
    #[must_use]
    pub fn aggregate(
        raw: &RawValues,
        prices: &UnitPrices,
        options: &ReportOptions,
    ) -> AggregationResult {
        let liquid_assets = Self::plain_section(Category::LiquidAssets, LIQUID_ASSETS, raw);
        let precious_metals = Self::metals_section(raw, prices);
        let investments = Self::investments_section(raw, options.stock_valuation);
        let business_assets = Self::plain_section(Category::BusinessAssets, BUSINESS_ASSETS, raw);
        let liabilities = Self::plain_section(Category::Liabilities, LIABILITIES, raw);

        let total_assets = liquid_assets.total
            + precious_metals.total
            + investments.total
            + business_assets.total;
        let total_liabilities = liabilities.total;
        let net_wealth = (total_assets - total_liabilities).max(Decimal::ZERO);

        let basis = options.nisab_basis;
        let nisab_value = basis.threshold_grams() * prices.price_of(basis.metal());
        let rate = options.calendar.rate();
        let is_eligible = Self::is_eligible(net_wealth, nisab_value);
        let obligation_due = if is_eligible {
            net_wealth * rate
        } else {
            Decimal::ZERO
        };

        AggregationResult {
            liquid_assets,
            precious_metals,
            investments,
            business_assets,
            liabilities,
            total_assets,
            total_liabilities,
            net_wealth,
            nisab_value,
            rate,
            is_eligible,
            obligation_due,
        }
    }

    /// Eligibility needs a positive threshold and wealth at or above it.
    #[must_use]
    pub fn is_eligible(net_wealth: Decimal, nisab_value: Decimal) -> bool {
        nisab_value > Decimal::ZERO && net_wealth >= nisab_value
    }

    fn plain_section(category: Category, fields: &[FieldDef], raw: &RawValues) -> Section {
        let entries = fields
            .iter()
            .map(|f| LineItem::new(f.label, raw.get(f.key)))
            .collect();
        Section::new(category, entries)
    }

    fn metals_section(raw: &RawValues, prices: &UnitPrices) -> Section {
        let entries = PRECIOUS_METALS
            .iter()
            .map(|f| {
                let grams = raw.get(f.key);
                let pure_grams = grams * f.purity.factor();
                let label = format!("{}: {:.3}g", f.label, grams);
                LineItem::new(label, pure_grams * prices.price_of(f.metal))
            })
            .collect();
        Section::new(Category::PreciousMetals, entries)
    }

    fn investments_section(raw: &RawValues, method: StockValuation) -> Section {
        let long_term = method == StockValuation::LongTermHolding;
        let entries = INVESTMENTS
            .iter()
            .map(|f| {
                let face_value = raw.get(f.key);
                if f.long_term_proxy && long_term {
                    LineItem::new(
                        format!("{}{PROXY_SUFFIX}", f.label),
                        face_value * LONG_TERM_PROXY,
                    )
                } else {
                    LineItem::new(f.label, face_value)
                }
            })
            .collect();
        Section::new(Category::Investments, entries)
    }
}
