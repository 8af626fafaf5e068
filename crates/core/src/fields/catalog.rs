//! Field catalogue, in report display order.

use rust_decimal::Decimal;

use crate::zakah::Metal;

/// A plain monetary input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Wire key of the field.
    pub key: &'static str,
    /// Label printed in the report.
    pub label: &'static str,
}

/// Metal fineness of a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purity {
    /// Gold of the given karat (out of 24).
    Karat(u32),
    /// Already pure (coins, bars, silver).
    Pure,
}

impl Purity {
    /// Multiplier converting held mass into pure-equivalent mass.
    #[must_use]
    pub fn factor(self) -> Decimal {
        match self {
            Self::Karat(karat) => Decimal::from(karat) / Decimal::from(24),
            Self::Pure => Decimal::ONE,
        }
    }
}

/// A metal holding measured in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetalFieldDef {
    /// Wire key of the field.
    pub key: &'static str,
    /// Label prefix; the report appends the mass.
    pub label: &'static str,
    /// Which unit price values this holding.
    pub metal: Metal,
    /// Fineness of the holding.
    pub purity: Purity,
}

/// An investment holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestmentFieldDef {
    /// Wire key of the field.
    pub key: &'static str,
    /// Label printed in the report.
    pub label: &'static str,
    /// Valued at the long-term holding proxy when that method is selected.
    pub long_term_proxy: bool,
}

/// Section A: cash and liquid assets.
pub const LIQUID_ASSETS: &[FieldDef] = &[
    FieldDef { key: "cash_on_hand", label: "Cash on Hand" },
    FieldDef { key: "cash_foreign", label: "Foreign Currency" },
    FieldDef { key: "bank_savings", label: "Savings Account" },
    FieldDef { key: "bank_current", label: "Current / Checking" },
    FieldDef { key: "bank_fixed_deposit", label: "FDR / Fixed Deposits" },
    FieldDef { key: "bkash", label: "bKash" },
    FieldDef { key: "nagad", label: "Nagad" },
    FieldDef { key: "upay", label: "Upay" },
    FieldDef { key: "cellfin", label: "Cellfin" },
    FieldDef { key: "rocket", label: "Rocket / DBBL" },
    FieldDef { key: "paypal", label: "PayPal / Payoneer" },
    FieldDef { key: "other_wallets", label: "Other Digital Wallets" },
    FieldDef { key: "money_lent", label: "Money Lent to Others" },
    FieldDef { key: "salary_due", label: "Salary / Bonus Due" },
];

/// Section B: precious metals and jewelry.
#[rustfmt::skip]
pub const PRECIOUS_METALS: &[MetalFieldDef] = &[
    MetalFieldDef { key: "gold_24k", label: "Gold 24k", metal: Metal::Gold, purity: Purity::Karat(24) },
    MetalFieldDef { key: "gold_22k", label: "Gold 22k", metal: Metal::Gold, purity: Purity::Karat(22) },
    MetalFieldDef { key: "gold_18k", label: "Gold 18k", metal: Metal::Gold, purity: Purity::Karat(18) },
    MetalFieldDef { key: "gold_21k", label: "Gold 21k", metal: Metal::Gold, purity: Purity::Karat(21) },
    MetalFieldDef { key: "gold_coins", label: "Gold Coins/Bars 24k", metal: Metal::Gold, purity: Purity::Pure },
    MetalFieldDef { key: "silver_grams", label: "Silver", metal: Metal::Silver, purity: Purity::Pure },
    MetalFieldDef { key: "silver_bullion", label: "Silver Bullion", metal: Metal::Silver, purity: Purity::Pure },
];

/// Section C: investments and financial assets.
#[rustfmt::skip]
pub const INVESTMENTS: &[InvestmentFieldDef] = &[
    InvestmentFieldDef { key: "dse_stocks", label: "DSE Stocks", long_term_proxy: true },
    InvestmentFieldDef { key: "intl_stocks", label: "International Stocks", long_term_proxy: true },
    InvestmentFieldDef { key: "mutual_funds", label: "Mutual Funds / ETFs", long_term_proxy: true },
    InvestmentFieldDef { key: "btc", label: "Bitcoin (BTC)", long_term_proxy: false },
    InvestmentFieldDef { key: "eth", label: "Ethereum (ETH)", long_term_proxy: false },
    InvestmentFieldDef { key: "other_crypto", label: "Other Crypto", long_term_proxy: false },
    InvestmentFieldDef { key: "provident_fund", label: "GPF / Provident Fund", long_term_proxy: false },
    InvestmentFieldDef { key: "savings_certificates", label: "Sanchayapatra / NSC", long_term_proxy: false },
    InvestmentFieldDef { key: "bonds", label: "Govt Bonds / Sukuk", long_term_proxy: false },
    InvestmentFieldDef { key: "other_investments", label: "Other Investment Schemes", long_term_proxy: false },
];

/// Section D: business assets.
pub const BUSINESS_ASSETS: &[FieldDef] = &[
    FieldDef { key: "biz_cash", label: "Business Cash (in hand)" },
    FieldDef { key: "biz_bank", label: "Business Bank Balance" },
    FieldDef { key: "petty_cash", label: "Petty Cash / Float" },
    FieldDef { key: "finished_goods", label: "Finished Goods" },
    FieldDef { key: "raw_materials", label: "Raw Materials" },
    FieldDef { key: "work_in_progress", label: "Work in Progress (WIP)" },
    FieldDef { key: "trade_goods", label: "Trade Goods / Merchandise" },
    FieldDef { key: "trade_receivables", label: "Trade Receivables" },
    FieldDef { key: "advances_paid", label: "Advances Paid to Suppliers" },
    FieldDef { key: "security_deposits", label: "Security Deposits Given" },
];

/// Section E: liabilities and deductions.
pub const LIABILITIES: &[FieldDef] = &[
    FieldDef { key: "personal_loans", label: "Personal Loans Due" },
    FieldDef { key: "credit_card", label: "Credit Card Balance" },
    FieldDef { key: "mortgage_12m", label: "Mortgage (next 12 months)" },
    FieldDef { key: "rent_utilities", label: "Overdue Rent / Utilities" },
    FieldDef { key: "taxes_due", label: "Taxes Due" },
    FieldDef { key: "business_loans_12m", label: "Business Loans (12 months)" },
    FieldDef { key: "trade_payables", label: "Trade Payables / Supplier Bills" },
    FieldDef { key: "salaries_payable", label: "Salaries Payable" },
    FieldDef { key: "advances_received", label: "Customer Advances Received" },
];

/// Every field key the report reads, in display order.
pub fn all_field_keys() -> impl Iterator<Item = &'static str> {
    LIQUID_ASSETS
        .iter()
        .map(|f| f.key)
        .chain(PRECIOUS_METALS.iter().map(|f| f.key))
        .chain(INVESTMENTS.iter().map(|f| f.key))
        .chain(BUSINESS_ASSETS.iter().map(|f| f.key))
        .chain(LIABILITIES.iter().map(|f| f.key))
}
