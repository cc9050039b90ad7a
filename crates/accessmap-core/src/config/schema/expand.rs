use super::{ConfigSchemaError, Validate};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Defaults
///

mod defaults {
    pub const fn max_sequence_len() -> usize {
        10_000
    }
}

pub const MAX_SEQUENCE_LEN: usize = 1_000_000;

///
/// ExpandConfig
///
/// Controls the CT → RM direction only; flatten has no tunables.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExpandConfig {
    #[serde(default)]
    pub unknown_keys: UnknownKeys,

    #[serde(default = "defaults::max_sequence_len")]
    pub max_sequence_len: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            unknown_keys: UnknownKeys::default(),
            max_sequence_len: defaults::max_sequence_len(),
        }
    }
}

impl Validate for ExpandConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.max_sequence_len == 0 {
            return Err(ConfigSchemaError::ValidationError(
                "expand.max_sequence_len must be at least 1".into(),
            ));
        }

        if self.max_sequence_len > MAX_SEQUENCE_LEN {
            return Err(ConfigSchemaError::ValidationError(format!(
                "expand.max_sequence_len {} exceeds max {}",
                self.max_sequence_len, MAX_SEQUENCE_LEN
            )));
        }

        Ok(())
    }
}

///
/// UnknownKeys
///
/// What expand does with CT members no descriptor claims.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeys {
    #[default]
    Ignore,
    Warn,
    Reject,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_expand_config_validates() {
        assert!(ExpandConfig::default().validate().is_ok());
    }

    #[test]
    fn oversized_sequence_limit_is_rejected() {
        let cfg = ExpandConfig {
            max_sequence_len: MAX_SEQUENCE_LEN + 1,
            ..ExpandConfig::default()
        };

        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds max"));
    }
}
