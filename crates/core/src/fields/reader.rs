//! Numeric value reader.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use super::catalog::all_field_keys;

/// Largest accepted field amount; anything above reads as invalid.
pub const MAX_FIELD_AMOUNT: Decimal = dec!(1000000000000000);

/// Anything that can hand out the raw text of a named field.
pub trait FieldSource {
    /// Returns the raw value of `key`, or `None` when the field is absent.
    fn raw(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn raw(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn raw(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl FieldSource for serde_json::Map<String, Value> {
    fn raw(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }
}

/// Reads decimal amounts out of a [`FieldSource`].
pub struct ValueReader<'a, S: FieldSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: FieldSource + ?Sized> ValueReader<'a, S> {
    /// Creates a reader over `source`.
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Returns the amount held by `key`, or zero when it is absent, empty,
    /// negative, out of range, or unparsable. Never fails.
    pub fn read(&self, key: &str) -> Decimal {
        self.source
            .raw(key)
            .and_then(|raw| parse_amount(&raw))
            .unwrap_or(Decimal::ZERO)
    }
}

/// Parses the leading numeric prefix of `raw` (`"12.5 g"` reads as `12.5`).
///
/// Returns `None` for empty input, a missing numeric prefix, negative values,
/// and values above [`MAX_FIELD_AMOUNT`].
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = &s[frac_start..frac_end];
        pos = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos + 1..end];
        }
    }

    let mut normalized = String::with_capacity(int_digits.len() + frac_digits.len() + 8);
    normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_digits);
    }

    let value = if exponent.is_empty() {
        Decimal::from_str(&normalized).ok()?
    } else {
        normalized.push('e');
        normalized.push_str(exponent);
        Decimal::from_scientific(&normalized).ok()?
    };

    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    if negative || value > MAX_FIELD_AMOUNT {
        return None;
    }
    Some(value)
}

/// Every catalogue field read once, keyed by field key.
///
/// Keys not present read as zero. Values are never negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawValues {
    values: BTreeMap<&'static str, Decimal>,
}

impl RawValues {
    /// Reads every catalogue field through `reader`.
    pub fn collect<S: FieldSource + ?Sized>(reader: &ValueReader<'_, S>) -> Self {
        let values = all_field_keys()
            .map(|key| (key, reader.read(key)))
            .collect();
        Self { values }
    }

    /// Builds raw values directly from `(key, amount)` pairs.
    ///
    /// Amounts follow the same bounds as parsed input: negative values and
    /// values above [`MAX_FIELD_AMOUNT`] read as zero.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Decimal)>,
    {
        let values = pairs
            .into_iter()
            .map(|(key, amount)| {
                let in_range = !amount.is_sign_negative() && amount <= MAX_FIELD_AMOUNT;
                (key, if in_range { amount } else { Decimal::ZERO })
            })
            .collect();
        Self { values }
    }

    /// Amount held by `key`, or zero.
    #[must_use]
    pub fn get(&self, key: &str) -> Decimal {
        self.values.get(key).copied().unwrap_or(Decimal::ZERO)
    }
}
