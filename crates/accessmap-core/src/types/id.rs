use derive_more::Display;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize, de};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// IdError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IdError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier contains non-digit character '{0}'")]
    InvalidDigit(char),
}

///
/// Id
///
/// Non-negative integer identifier of unbounded width.
///
/// Parsing accepts plain ASCII digits only: no sign, no separators, no
/// whitespace inside the number. Leading zeros are accepted and dropped, so the
/// canonical text of `"007"` is `"7"`.
///

#[derive(Clone, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Id(BigUint);

impl Id {
    #[must_use]
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Narrow to `u64` when the value fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.0).ok()
    }
}

impl FromStr for Id {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        if let Some(bad) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(IdError::InvalidDigit(bad));
        }

        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or(IdError::Empty)
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Id {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

// The remote API speaks JSON numbers; values wider than u64 fall back to text
// because serde_json cannot carry them as numbers without arbitrary precision.
impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.to_u64() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(IdVisitor)
    }
}

struct IdVisitor;

impl de::Visitor<'_> for IdVisitor {
    type Value = Id;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or its decimal text")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
        Ok(Id::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Id, E> {
        Ok(Id(BigUint::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
        u64::try_from(v)
            .map(Id::from)
            .map_err(|_| E::custom(format!("negative identifier {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
        v.parse().map_err(E::custom)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parses_plain_digits() {
        let id: Id = "1334".parse().unwrap();
        assert_eq!(id.to_u64(), Some(1334));
        assert_eq!(id.to_string(), "1334");
    }

    #[test]
    fn id_keeps_precision_past_u64() {
        let raw = "340282366920938463463374607431768211457";
        let id: Id = raw.parse().unwrap();
        assert_eq!(id.to_u64(), None);
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn id_rejects_signs_and_fractions() {
        assert_eq!("-1".parse::<Id>(), Err(IdError::InvalidDigit('-')));
        assert_eq!("+1".parse::<Id>(), Err(IdError::InvalidDigit('+')));
        assert_eq!("1.0".parse::<Id>(), Err(IdError::InvalidDigit('.')));
        assert_eq!("1_000".parse::<Id>(), Err(IdError::InvalidDigit('_')));
        assert_eq!("".parse::<Id>(), Err(IdError::Empty));
    }

    #[test]
    fn id_serializes_as_number_when_it_fits() {
        let small = Id::from(42);
        assert_eq!(serde_json::to_string(&small).unwrap(), "42");

        let wide: Id = "18446744073709551616".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&wide).unwrap(),
            "\"18446744073709551616\""
        );
    }

    #[test]
    fn id_deserializes_from_number_or_text() {
        let a: Id = serde_json::from_str("7").unwrap();
        let b: Id = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<Id>("-7").is_err());
    }
}
