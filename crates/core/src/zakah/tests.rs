//! Property-based tests for zakah aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::AggregationEngine;
use super::types::{CalendarBasis, NisabBasis, ReportOptions, StockValuation, UnitPrices};
use crate::fields::{INVESTMENTS, RawValues, all_field_keys};

fn options_strategy() -> impl Strategy<Value = ReportOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(gold, solar, long_term)| {
        ReportOptions {
            nisab_basis: if gold { NisabBasis::Gold } else { NisabBasis::Silver },
            calendar: if solar {
                CalendarBasis::Solar
            } else {
                CalendarBasis::Lunar
            },
            stock_valuation: if long_term {
                StockValuation::LongTermHolding
            } else {
                StockValuation::Trading
            },
            ..ReportOptions::default()
        }
    })
}

fn raw_strategy() -> impl Strategy<Value = RawValues> {
    let keys: Vec<&'static str> = all_field_keys().collect();
    prop::collection::vec(0i64..10_000_000, keys.len()).prop_map(move |amounts| {
        RawValues::from_pairs(
            keys.iter()
                .copied()
                .zip(amounts.into_iter().map(|a| Decimal::new(a, 2))),
        )
    })
}

fn prices_strategy() -> impl Strategy<Value = UnitPrices> {
    (0i64..2_000_000, 0i64..50_000)
        .prop_map(|(gold, silver)| UnitPrices::new(Decimal::new(gold, 2), Decimal::new(silver, 2)))
}

proptest! {
    /// Net wealth is never negative and obligation is zero unless eligible.
    #[test]
    fn test_net_wealth_and_obligation_bounds(
        raw in raw_strategy(),
        prices in prices_strategy(),
        options in options_strategy(),
    ) {
        let result = AggregationEngine::aggregate(&raw, &prices, &options);

        prop_assert!(result.net_wealth >= Decimal::ZERO);
        prop_assert!(result.obligation_due >= Decimal::ZERO);
        if result.is_eligible {
            prop_assert_eq!(result.obligation_due, result.net_wealth * result.rate);
            prop_assert!(result.nisab_value > Decimal::ZERO);
        } else {
            prop_assert_eq!(result.obligation_due, Decimal::ZERO);
        }
    }

    /// Totals are the sums of their parts.
    #[test]
    fn test_totals_are_consistent(
        raw in raw_strategy(),
        prices in prices_strategy(),
        options in options_strategy(),
    ) {
        let result = AggregationEngine::aggregate(&raw, &prices, &options);

        let asset_sum: Decimal = result.asset_sections().iter().map(|s| s.total).sum();
        prop_assert_eq!(result.total_assets, asset_sum);
        prop_assert_eq!(result.total_liabilities, result.liabilities.total);
        for section in result.asset_sections() {
            let entry_sum: Decimal = section.entries.iter().map(|e| e.amount).sum();
            prop_assert_eq!(section.total, entry_sum);
        }
        prop_assert_eq!(
            result.net_wealth,
            (result.total_assets - result.total_liabilities).max(Decimal::ZERO)
        );
    }

    /// Aggregation is deterministic.
    #[test]
    fn test_aggregation_is_pure(
        raw in raw_strategy(),
        prices in prices_strategy(),
        options in options_strategy(),
    ) {
        let first = AggregationEngine::aggregate(&raw, &prices, &options);
        let second = AggregationEngine::aggregate(&raw, &prices, &options);
        prop_assert_eq!(first, second);
    }

    /// Long-term valuation scales only the proxy holdings, by exactly a quarter.
    #[test]
    fn test_long_term_scales_proxy_holdings(
        raw in raw_strategy(),
        prices in prices_strategy(),
    ) {
        let trading = AggregationEngine::aggregate(&raw, &prices, &ReportOptions::default());
        let long_term = AggregationEngine::aggregate(&raw, &prices, &ReportOptions {
            stock_valuation: StockValuation::LongTermHolding,
            ..ReportOptions::default()
        });

        for ((def, full), proxied) in INVESTMENTS
            .iter()
            .zip(&trading.investments.entries)
            .zip(&long_term.investments.entries)
        {
            if def.long_term_proxy {
                prop_assert_eq!(proxied.amount * Decimal::from(4), full.amount);
            } else {
                prop_assert_eq!(proxied.amount, full.amount);
            }
        }
        prop_assert!(long_term.investments.total <= trading.investments.total);
    }

    /// Eligibility flips exactly at the threshold.
    #[test]
    fn test_eligibility_boundary(nisab in 1i64..100_000_000, delta in -1000i64..1000) {
        let nisab = Decimal::new(nisab, 2);
        let wealth = (nisab + Decimal::new(delta, 2)).max(Decimal::ZERO);
        prop_assert_eq!(AggregationEngine::is_eligible(wealth, nisab), wealth >= nisab);
    }

    /// A zero-priced basis metal never produces an obligation.
    #[test]
    fn test_zero_basis_price_never_eligible(raw in raw_strategy(), gold in 0i64..2_000_000) {
        let prices = UnitPrices::new(Decimal::new(gold, 2), Decimal::ZERO);
        let result = AggregationEngine::aggregate(&raw, &prices, &ReportOptions::default());
        prop_assert!(!result.is_eligible);
        prop_assert_eq!(result.obligation_due, Decimal::ZERO);
    }
}
