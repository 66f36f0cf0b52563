use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{cmp::Ordering, fmt, str::FromStr};

/// Largest precision an `eosio` asset symbol can carry.
pub const MAX_PRECISION: usize = 18;

/// A token quantity as the chain encodes it: `"12.3400 EOS"`.
///
/// The amount is stored scaled by `10^precision`, so `"12.3400 EOS"` is
/// `amount = 123400, precision = 4`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Asset {
    pub amount: i64,
    pub precision: u8,
    pub symbol: String,
}

impl Asset {
    pub fn new(amount: i64, precision: u8, symbol: impl Into<String>) -> Self {
        Self {
            amount,
            precision,
            symbol: symbol.into(),
        }
    }

    pub fn zero(precision: u8, symbol: impl Into<String>) -> Self {
        Self::new(0, precision, symbol)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Parses what a user typed into an amount field ("5", "5.1", ".25") into an
    /// asset of the given symbol. At most `precision` decimals are accepted.
    pub fn from_user_input(
        input: impl AsRef<str>,
        precision: u8,
        symbol: impl Into<String>,
    ) -> Result<Self, Error> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(Error::EmptyAmount);
        }
        if input.starts_with('-') {
            return Err(Error::InvalidAmount(input.to_string()));
        }

        let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
        if fraction.len() > precision as usize {
            return Err(Error::InvalidAmount(input.to_string()));
        }

        let amount = scaled_amount(whole, fraction, precision as usize)
            .ok_or_else(|| Error::InvalidAmount(input.to_string()))??;

        Ok(Self::new(amount, precision, symbol))
    }

    /// The amount as a float, for display math only.
    pub fn to_f64(&self) -> f64 {
        self.amount as f64 / 10f64.powi(self.precision as i32)
    }

    /// Compares only the quantities, regardless of symbol. Precision differences
    /// are normalized so `"1.0 REX"` equals `"1.0000 REX"`.
    pub fn cmp_amount(&self, other: &Asset) -> Ordering {
        let precision = self.precision.max(other.precision) as u32;
        let lhs = self.amount as i128 * 10i128.pow(precision - self.precision as u32);
        let rhs = other.amount as i128 * 10i128.pow(precision - other.precision as u32);
        lhs.cmp(&rhs)
    }

    /// The numeric part only, e.g. `"12.3400"`.
    pub fn quantity(&self) -> String {
        let factor = 10u64.pow(self.precision as u32);
        let sign = if self.amount < 0 { "-" } else { "" };
        let value = self.amount.unsigned_abs();

        let integer_part = value / factor;
        let fractional_part = value % factor;

        if self.precision == 0 {
            return format!("{sign}{integer_part}");
        }

        format!(
            "{sign}{integer_part}.{fractional_part:0width$}",
            width = self.precision as usize
        )
    }
}

// Returns None when the digits are malformed, Some(Err) when they overflow.
fn scaled_amount(whole: &str, fraction: &str, precision: usize) -> Option<Result<i64, Error>> {
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) {
        return None;
    }

    let mut digits = String::with_capacity(whole.len() + precision);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.push_str(&"0".repeat(precision - fraction.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some(Ok(0));
    }

    Some(digits.parse::<i64>().map_err(|_| Error::Overflow))
}

impl FromStr for Asset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::EmptyAmount);
        }

        let (quantity, symbol) = s
            .split_once(' ')
            .ok_or_else(|| Error::InvalidSymbol(s.to_string()))?;
        let symbol = symbol.trim();

        if symbol.is_empty()
            || symbol.len() > 7
            || !symbol.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(Error::InvalidSymbol(symbol.to_string()));
        }

        let (negative, quantity) = match quantity.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, quantity),
        };

        let (whole, fraction) = quantity.split_once('.').unwrap_or((quantity, ""));
        if whole.is_empty() {
            return Err(Error::InvalidAmount(quantity.to_string()));
        }
        if fraction.len() > MAX_PRECISION {
            return Err(Error::PrecisionTooLarge(fraction.len()));
        }

        let amount = scaled_amount(whole, fraction, fraction.len())
            .ok_or_else(|| Error::InvalidAmount(quantity.to_string()))??;

        Ok(Self {
            amount: if negative { -amount } else { amount },
            precision: fraction.len() as u8,
            symbol: symbol.to_string(),
        })
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity(), self.symbol)
    }
}

impl Serialize for Asset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Asset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chain_assets() {
        let asset: Asset = "12.3400 EOS".parse().unwrap();
        assert_eq!(asset, Asset::new(123400, 4, "EOS"));
        assert_eq!(asset.to_string(), "12.3400 EOS");

        let rex: Asset = "0.0000 REX".parse().unwrap();
        assert!(rex.is_zero());
        assert_eq!(rex.precision, 4);

        let negative: Asset = "-1.5 EOS".parse().unwrap();
        assert_eq!(negative.amount, -15);
        assert_eq!(negative.to_string(), "-1.5 EOS");
    }

    #[test]
    fn rejects_malformed_assets() {
        assert_eq!("".parse::<Asset>(), Err(Error::EmptyAmount));
        assert!(matches!("12.34".parse::<Asset>(), Err(Error::InvalidSymbol(_))));
        assert!(matches!("12.34 eos".parse::<Asset>(), Err(Error::InvalidSymbol(_))));
        assert!(matches!("1x.00 EOS".parse::<Asset>(), Err(Error::InvalidAmount(_))));
        assert!(matches!(".5 EOS".parse::<Asset>(), Err(Error::InvalidAmount(_))));
        assert_eq!(
            "99999999999999999999.0000 EOS".parse::<Asset>(),
            Err(Error::Overflow)
        );
    }

    #[test]
    fn user_input_is_padded_to_precision() {
        let asset = Asset::from_user_input("5", 4, "EOS").unwrap();
        assert_eq!(asset.to_string(), "5.0000 EOS");

        let asset = Asset::from_user_input(".25", 4, "REX").unwrap();
        assert_eq!(asset.to_string(), "0.2500 REX");

        assert!(Asset::from_user_input("1.23456", 4, "EOS").is_err());
        assert!(Asset::from_user_input("-1", 4, "EOS").is_err());
        assert!(Asset::from_user_input("1.2.3", 4, "EOS").is_err());
        assert!(Asset::from_user_input(".", 4, "EOS").is_err());
        assert_eq!(
            Asset::from_user_input("  ", 4, "EOS"),
            Err(Error::EmptyAmount)
        );
    }

    #[test]
    fn compares_across_precisions() {
        let a: Asset = "1.0 REX".parse().unwrap();
        let b: Asset = "1.0000 REX".parse().unwrap();
        let c: Asset = "0.9999 REX".parse().unwrap();

        assert_eq!(a.cmp_amount(&b), Ordering::Equal);
        assert_eq!(c.cmp_amount(&a), Ordering::Less);
        assert_eq!(a.cmp_amount(&c), Ordering::Greater);
    }

    #[test]
    fn serializes_as_string() {
        let asset = Asset::new(50000, 4, "EOS");
        assert_eq!(serde_json::to_string(&asset).unwrap(), "\"5.0000 EOS\"");

        let parsed: Asset = serde_json::from_str("\"5.0000 EOS\"").unwrap();
        assert_eq!(parsed, asset);
    }
}
