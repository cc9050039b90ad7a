//!
//! Resource model: the typed shapes exchanged with the gateway management API.
//!
//! Field names follow the remote schema in camelCase. Every member is optional
//! so that "not configured" and "configured as empty" stay distinguishable.
//!

pub mod application;
pub mod credentials;
pub mod policy;
pub mod rule;
pub mod rule_set;
pub mod web_session;

pub use application::*;
pub use credentials::*;
pub use policy::*;
pub use rule::*;
pub use rule_set::*;
pub use web_session::*;

///
/// Prelude
///

pub(crate) mod prelude {
    pub use accessmap_core::{
        codec::hidden::HiddenField,
        types::{Decimal, Id},
    };
    pub use serde::{Deserialize, Serialize};
}
