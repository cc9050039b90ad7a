//! Bidirectional mapping between configuration trees and the access-gateway
//! resource model.
//!
//! ```ignore
//! use accessmap::prelude::*;
//!
//! let app = ApplicationMapper::expand(&tree)?;
//! let echoed = ApplicationMapper::read(&server_copy, &tree);
//! ```

pub mod mapper;
pub mod model;
pub mod resource;

pub use accessmap_core::{
    Error, ErrorClass, MapResult, MappingError, codec, config, error, init_config, log, tree,
    types,
};

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        mapper::*,
        model::*,
        resource::{Resource, ResourceKind, ResourceMapper},
    };
    pub use accessmap_core::prelude::*;
}
