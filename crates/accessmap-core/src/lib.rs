//! Core mapping engine between a flat configuration tree and a typed
//! resource model.
//!
//! Most users depend on the `accessmap` facade crate, which adds the concrete
//! resource kinds on top of these codecs.

pub mod codec;
pub mod config;
pub mod error;
pub mod log;
pub mod tree;
pub mod types;

pub use error::{Error, ErrorClass, MapResult, MappingError};

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the process-wide configuration from a TOML document.
///
/// Optional: without it every mapper runs on the defaults.
pub fn init_config(toml: &str) -> Result<(), Error> {
    config::Config::init_from_toml(toml)?;

    Ok(())
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        codec::{
            group::{GroupKey, GroupMapper, Groups},
            hidden::{HiddenField, HiddenFieldMapper},
            record::{Field, FieldKind, Record, RecordMapper},
            scalar::{Scalar, ScalarMapper},
            variant::{Variant, VariantMapper},
        },
        error::{MapResult, MappingError},
        tree::{Scope, TreeMap},
        types::{Decimal, Id},
    };
}
