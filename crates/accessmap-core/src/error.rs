use crate::config::ConfigError;
use derive_more::Display;
use thiserror::Error as ThisError;

/// Result alias for expand-direction operations.
pub type MapResult<T> = Result<T, MappingError>;

///
/// Error
///
/// Crate-level error envelope. Configuration problems and mapping failures
/// stay distinct so callers can report them differently (the former is an
/// operator mistake, the latter a user-facing validation failure).
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

///
/// MappingError
///
/// Raised only on the expand (CT → RM) path. Flatten is total.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MappingError {
    #[error("{path}: expected {expected}, found {found}")]
    FieldType {
        path: String,
        expected: &'static str,
        found: String,
    },

    #[error("{path}: cannot parse '{raw}' as {expected}")]
    Parse {
        path: String,
        raw: String,
        expected: &'static str,
    },

    #[error("{path}: {reason}")]
    Shape { path: String, reason: String },

    #[error("{path}: unknown group '{key}'")]
    UnknownGroup { path: String, key: String },

    #[error("{path}: unknown {tag} '{discriminator}'")]
    UnknownVariant {
        path: String,
        tag: &'static str,
        discriminator: String,
    },
}

impl MappingError {
    pub fn field_type(
        path: impl ToString,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::FieldType {
            path: path.to_string(),
            expected,
            found: found.into(),
        }
    }

    pub fn parse(path: impl ToString, raw: impl Into<String>, expected: &'static str) -> Self {
        Self::Parse {
            path: path.to_string(),
            raw: raw.into(),
            expected,
        }
    }

    pub fn shape(path: impl ToString, reason: impl Into<String>) -> Self {
        Self::Shape {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub fn unknown_group(path: impl ToString, key: impl Into<String>) -> Self {
        Self::UnknownGroup {
            path: path.to_string(),
            key: key.into(),
        }
    }

    pub fn unknown_variant(
        path: impl ToString,
        tag: &'static str,
        discriminator: impl Into<String>,
    ) -> Self {
        Self::UnknownVariant {
            path: path.to_string(),
            tag,
            discriminator: discriminator.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::FieldType { .. } => ErrorClass::FieldType,
            Self::Parse { .. } => ErrorClass::Parse,
            Self::Shape { .. } => ErrorClass::Shape,
            Self::UnknownGroup { .. } => ErrorClass::UnknownGroup,
            Self::UnknownVariant { .. } => ErrorClass::UnknownVariant,
        }
    }

    /// Flat-map address of the offending CT member.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::FieldType { path, .. }
            | Self::Parse { path, .. }
            | Self::Shape { path, .. }
            | Self::UnknownGroup { path, .. }
            | Self::UnknownVariant { path, .. } => path,
        }
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorClass {
    FieldType,
    Parse,
    Shape,
    UnknownGroup,
    UnknownVariant,
}

///
/// TESTS
///
