//!
//! Per-kind mappers between configuration trees and resource models.
//!
//! Each resource kind registers its field descriptors as a `Record` and gets a
//! thin `*Mapper` facade. All four directions share the helpers below.
//!

mod application;
mod credentials;
mod policy;
mod rule;
mod rule_set;
mod web_session;

pub use application::ApplicationMapper;
pub use credentials::OAuthClientCredentialsMapper;
pub use policy::{PolicyItemMapper, PolicyMapper};
pub use rule::RuleMapper;
pub use rule_set::RuleSetMapper;
pub use web_session::WebSessionMapper;

use accessmap_core::{
    codec::record::{Record, RecordMapper},
    config::ConfigModel,
    error::MapResult,
    log,
    log::Topic,
    tree::{Scope, TreeMap},
};
use std::sync::Arc;

fn expand<R: Record>(map: &TreeMap, scope: &Scope) -> MapResult<R> {
    log!(Topic::Expand, Debug, "expanding {} ({} members)", R::NAME, map.len());

    RecordMapper::expand_fields(map, scope).inspect_err(|err| {
        log!(Topic::Expand, Info, "{} rejected: {err}", R::NAME);
    })
}

fn expand_with<R: Record>(map: &TreeMap, config: &ConfigModel) -> MapResult<R> {
    expand(map, &Scope::with_config(Arc::new(config.clone())))
}

fn flatten<R: Record>(model: &R) -> TreeMap {
    log!(Topic::Flatten, Debug, "flattening {}", R::NAME);

    RecordMapper::flatten_fields(model)
}

fn read<R: Record>(model: &R, prior: &TreeMap) -> TreeMap {
    log!(Topic::Flatten, Debug, "reading {} against prior state", R::NAME);

    RecordMapper::read_fields(model, Some(prior))
}
