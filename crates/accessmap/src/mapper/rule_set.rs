use crate::model::RuleSet;
use accessmap_core::{
    codec::record::{Field, Record},
    config::ConfigModel,
    error::MapResult,
    tree::{Scope, TreeMap},
};

impl Record for RuleSet {
    const NAME: &'static str = "RuleSet";
    const REQUIRED: &'static [&'static str] = &["name"];

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar("name", |r| &r.name, |r| &mut r.name),
            Field::scalar("element_type", |r| &r.element_type, |r| &mut r.element_type),
            Field::scalar(
                "success_criteria",
                |r| &r.success_criteria,
                |r| &mut r.success_criteria,
            ),
            Field::variants("policy", |r| &r.policy, |r| &mut r.policy),
        ]
    }
}

///
/// RuleSetMapper
///

pub struct RuleSetMapper;

impl RuleSetMapper {
    pub fn expand(map: &TreeMap) -> MapResult<RuleSet> {
        super::expand(map, &Scope::root())
    }

    pub fn expand_with(map: &TreeMap, config: &ConfigModel) -> MapResult<RuleSet> {
        super::expand_with(map, config)
    }

    #[must_use]
    pub fn flatten(model: &RuleSet) -> TreeMap {
        super::flatten(model)
    }

    #[must_use]
    pub fn read(model: &RuleSet, prior: &TreeMap) -> TreeMap {
        super::read(model, prior)
    }
}
