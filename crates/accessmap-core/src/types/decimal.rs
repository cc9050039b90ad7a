use derive_more::Display;
use rust_decimal::Decimal as Inner;
use serde::{Deserialize, Serialize, de};
use std::{fmt, str::FromStr};

///
/// Decimal
///
/// Exact decimal number. Scale is kept, so `"1.50"` renders as `"1.50"`.
/// Text that needs more than 28 significant digits is rejected rather than
/// rounded.
///
/// The management API writes decimals as text but some endpoints report plain
/// JSON numbers (timeouts, rate limits); both are accepted on the way in, and
/// text is always written on the way out.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{_0}")]
pub struct Decimal(Inner);

impl Decimal {
    #[must_use]
    pub const fn inner(self) -> Inner {
        self.0
    }

    #[must_use]
    pub fn is_integer(self) -> bool {
        self.0.fract().is_zero()
    }
}

impl From<Inner> for Decimal {
    fn from(value: Inner) -> Self {
        Self(value)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self(Inner::from(value))
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // exponent form shows up when numbers pass through float-minded tooling;
        // only its mantissa parse can round, so that part is checked exactly
        if let Some((mantissa, _)) = s.split_once(['e', 'E']) {
            Inner::from_str_exact(mantissa)?;
            return Inner::from_scientific(s).map(Self);
        }

        Inner::from_str_exact(s).map(Self)
    }
}

impl Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl de::Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or decimal text")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal(Inner::from(v)))
    }

    // JSON floats are read through their shortest text form
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        v.to_string().parse().map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        v.parse().map_err(E::custom)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_keeps_trailing_scale() {
        let d: Decimal = "1.50".parse().unwrap();
        assert_eq!(d.to_string(), "1.50");
        assert!(!d.is_integer());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let d: Decimal = " 30 ".parse().unwrap();
        assert_eq!(d, Decimal::from(30));
        assert!(d.is_integer());
    }

    #[test]
    fn exponent_form_is_accepted() {
        let d: Decimal = "1.5e2".parse().unwrap();
        assert_eq!(d, Decimal::from(150));
    }

    #[test]
    fn integers_beyond_u64_fit() {
        let d: Decimal = "36893488147419103232".parse().unwrap();
        assert_eq!(d.to_string(), "36893488147419103232");
    }

    #[test]
    fn long_text_is_exact_or_rejected() {
        let fits = "1234567890.123456789012345678";
        assert_eq!(fits.parse::<Decimal>().unwrap().to_string(), fits);

        assert!("0.12345678901234567890123456789012".parse::<Decimal>().is_err());
        assert!("123456789012345678901234567890".parse::<Decimal>().is_err());
        assert!("1.23456789012345678901234567890e3".parse::<Decimal>().is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("12,5".parse::<Decimal>().is_err());
        assert!("".parse::<Decimal>().is_err());
        assert!("sixty".parse::<Decimal>().is_err());
    }

    #[test]
    fn api_numbers_and_text_both_deserialize() {
        let from_number: Decimal = serde_json::from_value(json!(240)).unwrap();
        let from_text: Decimal = serde_json::from_value(json!("240")).unwrap();
        let from_float: Decimal = serde_json::from_value(json!(0.25)).unwrap();

        assert_eq!(from_number, from_text);
        assert_eq!(from_float.to_string(), "0.25");
        assert_eq!(serde_json::to_value(from_number).unwrap(), json!("240"));
    }
}
