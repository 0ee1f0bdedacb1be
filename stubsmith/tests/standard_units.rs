//! The standard units driven by a schema snapshot.

use rstest::{fixture, rstest};
use stubsmith::{
    Diagnostic, Generator, Introspector, ModelSchema, Provenance, SchemaIntrospector,
    UnitRegistry, introspect,
};
use test_helpers::fixtures::SCHEMA_JSON;
use test_helpers::rbi;

#[fixture]
fn introspector() -> SchemaIntrospector {
    SchemaIntrospector::new(ModelSchema::from_json(SCHEMA_JSON).expect("fixture schema is valid"))
}

fn generate(introspector: &SchemaIntrospector, name: &str) -> stubsmith::Rendered {
    let target = introspect(introspector, name).expect("model is in the schema");
    Generator::new(UnitRegistry::standard())
        .generate(&target, &introspector.known_classes())
        .expect("model has a superclass")
}

#[rstest]
fn widget_model_block_lists_every_accessor(introspector: SchemaIntrospector) {
    let rendered = generate(&introspector, "Widget");
    assert!(rendered.diagnostics.is_empty(), "{:?}", rendered.diagnostics);

    let widget = rbi::block(&rendered.text, "class Widget < ApplicationRecord")
        .expect("Widget block is rendered");
    assert_eq!(
        rbi::defs(&widget),
        vec![
            "status",
            "status=",
            "draft?",
            "draft!",
            "live?",
            "live!",
            "label",
            "label=",
            "label?",
            "size",
            "size=",
            "size?",
            "owner",
            "owner=",
            "build_owner",
            "create_owner",
            "parts",
            "parts=",
            "part_ids",
            "part_ids=",
            "self.statuses",
        ]
    );
    assert!(widget.contains("  sig { returns(T.nilable(User)) }\n  def owner; end\n"));
    assert!(widget.contains("  sig { returns(Admin::PartCollectionProxy) }\n  def parts; end\n"));
}

#[rstest]
fn shared_module_holds_scopes_and_queries(introspector: SchemaIntrospector) {
    let rendered = generate(&introspector, "Widget");
    let shared = rbi::block(&rendered.text, "module Widget::RelationMethods")
        .expect("shared module is rendered");
    let defs = rbi::defs(&shared);
    assert_eq!(defs.first().map(String::as_str), Some("draft"));
    for name in ["live", "recent", "where", "find_by", "first"] {
        assert!(defs.iter().any(|def| def == name), "missing {name}");
    }
    assert!(shared.contains(
        "  sig { params(args: T.untyped).returns(WidgetRelation) }\n  def recent(*args); end\n"
    ));
}

#[rstest]
fn runtime_failure_falls_back_to_static_shape(introspector: SchemaIntrospector) {
    let rendered = generate(&introspector, "Broken");
    let broken = rbi::block(&rendered.text, "class Broken < ApplicationRecord")
        .expect("Broken block is rendered");
    assert!(!broken.contains("def label"));
    assert!(rendered.text.contains("def visible(*args); end"));
}

#[rstest]
fn abstract_models_keep_their_declared_parent(introspector: SchemaIntrospector) {
    let rendered = generate(&introspector, "ApplicationRecord");
    assert!(
        rendered
            .text
            .contains("class ApplicationRecord < ActiveRecord::Base\n")
    );
}

#[rstest]
fn enum_accessors_clashing_with_columns_are_dropped() {
    let schema = ModelSchema::from_json(
        r#"{ "models": [{
            "name": "Order",
            "superclass": "ApplicationRecord",
            "attributes": [{ "name": "state", "type": "integer" }],
            "enums": [{ "name": "state", "values": ["open", "closed"] }],
            "scopes": ["open"]
        }] }"#,
    )
    .expect("schema is valid");
    let introspector = SchemaIntrospector::new(schema);
    let rendered = generate(&introspector, "Order");

    let order = rbi::block(&rendered.text, "class Order < ApplicationRecord")
        .expect("Order block is rendered");
    let defs = rbi::defs(&order);
    assert!(!defs.iter().any(|def| def == "state" || def == "state="));
    assert!(defs.iter().any(|def| def == "state?"));

    let shared = rbi::block(&rendered.text, "module Order::RelationMethods")
        .expect("shared module is rendered");
    let open_scopes = rbi::defs(&shared)
        .into_iter()
        .filter(|def| def == "open")
        .count();
    assert_eq!(open_scopes, 1);

    let dropped: Vec<(String, Vec<Provenance>)> = rendered
        .diagnostics
        .iter()
        .filter_map(|diagnostic| match diagnostic {
            Diagnostic::CollisionDropped {
                member, dropped, ..
            } => Some((member.name.clone(), dropped.clone())),
            _ => None,
        })
        .collect();
    let both = vec![
        Provenance::unit("active_record_enum"),
        Provenance::unit("active_record_attribute"),
    ];
    assert_eq!(
        dropped,
        vec![("state".to_owned(), both.clone()), ("state=".to_owned(), both)]
    );
}
