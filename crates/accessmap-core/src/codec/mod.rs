//!
//! Bidirectional codecs between the configuration tree and the resource model.
//!
//! Expand (CT → RM) is fallible and reports the flat-map path of the first
//! offending member. Flatten (RM → CT) is total.
//!

pub mod group;
pub mod hidden;
pub mod record;
pub mod scalar;
pub mod variant;

use crate::{
    config::schema::UnknownKeys,
    error::{MapResult, MappingError},
    log,
    log::Topic,
    tree::{Scope, TreeMap},
};

/// Apply the configured unknown-key policy to the members of `map`.
pub(crate) fn check_unknown_keys(
    map: &TreeMap,
    is_known: impl Fn(&str) -> bool,
    scope: &Scope,
) -> MapResult<()> {
    let policy = scope.config().expand.unknown_keys;
    if policy == UnknownKeys::Ignore {
        return Ok(());
    }

    for key in map.keys().filter(|k| !is_known(k)) {
        let key_scope = scope.field(key);

        match policy {
            UnknownKeys::Reject => {
                return Err(MappingError::shape(
                    key_scope.path(),
                    format!("unknown field '{key}'"),
                ));
            }
            UnknownKeys::Warn => {
                log!(Topic::Expand, Warn, "{}: ignoring unknown field", key_scope.path());
            }
            UnknownKeys::Ignore => {}
        }
    }

    Ok(())
}
