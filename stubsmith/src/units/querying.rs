//! The query interface shared by a model and its relations.

use super::{BOOLEAN, UNTYPED, nilable};
use crate::descriptor::TargetClassDescriptor;
use crate::error::UnitError;
use crate::naming;
use crate::tree::{DeclarationTree, Method, Parameter};
use crate::unit::GeneratorUnit;

/// What a query method hands back.
#[derive(Debug, Clone, Copy)]
enum Yields {
    Relation,
    Record,
    MaybeRecord,
    Boolean,
    Count,
}

/// `(name, takes *args, result)`.
const QUERIES: &[(&str, bool, Yields)] = &[
    ("all", false, Yields::Relation),
    ("unscoped", false, Yields::Relation),
    ("none", false, Yields::Relation),
    ("distinct", false, Yields::Relation),
    ("where", true, Yields::Relation),
    ("rewhere", true, Yields::Relation),
    ("not", true, Yields::Relation),
    ("or", true, Yields::Relation),
    ("order", true, Yields::Relation),
    ("reorder", true, Yields::Relation),
    ("limit", true, Yields::Relation),
    ("offset", true, Yields::Relation),
    ("joins", true, Yields::Relation),
    ("left_joins", true, Yields::Relation),
    ("includes", true, Yields::Relation),
    ("preload", true, Yields::Relation),
    ("eager_load", true, Yields::Relation),
    ("group", true, Yields::Relation),
    ("having", true, Yields::Relation),
    ("extending", true, Yields::Relation),
    ("find", true, Yields::Record),
    ("find_by", true, Yields::MaybeRecord),
    ("find_by!", true, Yields::Record),
    ("first", false, Yields::MaybeRecord),
    ("first!", false, Yields::Record),
    ("last", false, Yields::MaybeRecord),
    ("last!", false, Yields::Record),
    ("take", false, Yields::MaybeRecord),
    ("exists?", true, Yields::Boolean),
    ("count", true, Yields::Count),
];

/// Emits the ActiveRecord query methods into the shared relation module.
#[derive(Debug, Clone)]
pub struct QueryingUnit {
    class_name: String,
}

impl QueryingUnit {
    /// Captures the name of `target`.
    #[must_use]
    pub fn new(target: &TargetClassDescriptor) -> Self {
        Self {
            class_name: target.name.clone(),
        }
    }

    fn result_type(&self, relation: &str, yields: Yields) -> String {
        match yields {
            Yields::Relation => relation.to_owned(),
            Yields::Record => self.class_name.clone(),
            Yields::MaybeRecord => nilable(&self.class_name),
            Yields::Boolean => BOOLEAN.to_owned(),
            Yields::Count => "Integer".to_owned(),
        }
    }
}

impl GeneratorUnit for QueryingUnit {
    fn name(&self) -> &str {
        "active_record_querying"
    }

    fn generate(&self, tree: &mut DeclarationTree) -> Result<(), UnitError> {
        let relation = naming::relation_class(&self.class_name);
        let mut shared = tree.new_module(naming::relation_methods_module(&self.class_name));
        for &(name, takes_args, yields) in QUERIES {
            let mut method = Method::new(name).returns(self.result_type(&relation, yields));
            if takes_args {
                method = method.param(Parameter::rest("args", UNTYPED));
            }
            shared.create_method(method);
        }
        tree.insert(shared);
        Ok(())
    }
}
