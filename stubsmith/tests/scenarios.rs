//! End-to-end generation runs covering collisions, unit failures and
//! unresolved superclasses.

use rstest::rstest;
use stubsmith::tree::MemberKind;
use stubsmith::{
    Diagnostic, GenerateError, Generator, KnownClassSet, Method, Provenance, UnitRegistry,
};
use test_helpers::fixtures;
use test_helpers::rbi;
use test_helpers::units::ScriptedUnit;

fn active_collision_registry() -> UnitRegistry {
    UnitRegistry::new()
        .with(
            ScriptedUnit::new("scopes")
                .method("Widget", Method::new("active").returns("WidgetRelation"))
                .factory(),
        )
        .with(
            ScriptedUnit::new("attributes")
                .method("Widget", Method::new("active").returns("T::Boolean"))
                .method("Widget", Method::new("label").returns("String"))
                .factory(),
        )
}

#[rstest]
fn colliding_members_are_dropped_and_reported() {
    let rendered = Generator::new(active_collision_registry())
        .generate(&fixtures::widget(), &KnownClassSet::new())
        .expect("Widget has a superclass");

    let widget = rbi::block(&rendered.text, "class Widget < ApplicationRecord")
        .expect("Widget block is rendered");
    assert_eq!(rbi::defs(&widget), vec!["label"]);

    let [Diagnostic::CollisionDropped {
        owner,
        member,
        dropped,
        kept,
    }] = rendered.diagnostics.as_slice()
    else {
        panic!("expected one collision, got {:?}", rendered.diagnostics);
    };
    assert_eq!(owner, "Widget");
    assert_eq!(member.kind, MemberKind::InstanceMethod);
    assert_eq!(member.name, "active");
    assert_eq!(
        dropped,
        &vec![Provenance::unit("scopes"), Provenance::unit("attributes")]
    );
    assert_eq!(kept, &None);
    assert_eq!(
        rendered.diagnostics.first().map(ToString::to_string).as_deref(),
        Some("conflict on Widget#active: dropped candidates from `scopes`, `attributes`")
    );
}

#[rstest]
fn failing_and_panicking_units_contribute_nothing() {
    let registry = UnitRegistry::new()
        .with(
            ScriptedUnit::new("first")
                .method("Widget", Method::new("first_ok"))
                .factory(),
        )
        .with(
            ScriptedUnit::new("erroring")
                .method("Widget", Method::new("partial_error"))
                .module_method("Widget::Leftovers", Method::new("stray"))
                .failing("column list unavailable")
                .factory(),
        )
        .with(
            ScriptedUnit::new("panicking")
                .method("Widget", Method::new("partial_panic"))
                .panicking("boom")
                .factory(),
        )
        .with(
            ScriptedUnit::new("last")
                .method("Widget", Method::new("last_ok"))
                .factory(),
        );

    let rendered = Generator::new(registry)
        .generate(&fixtures::widget(), &KnownClassSet::new())
        .expect("unit failures are not fatal");

    let widget = rbi::block(&rendered.text, "class Widget < ApplicationRecord")
        .expect("Widget block is rendered");
    assert_eq!(rbi::defs(&widget), vec!["first_ok", "last_ok"]);
    assert!(!rendered.text.contains("Widget::Leftovers"));
    assert!(rendered.text.contains("class WidgetRelation < ActiveRecord::Relation"));

    let failures: Vec<String> = rendered
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        failures,
        vec![
            "unit `erroring` failed for Widget: invalid model shape: column list unavailable",
            "unit `panicking` failed for Widget: unit panicked: boom",
        ]
    );
}

#[rstest]
fn every_unit_failing_leaves_the_skeleton() {
    let registry = UnitRegistry::new()
        .with(ScriptedUnit::new("a").failing("no").factory())
        .with(ScriptedUnit::new("b").panicking("no").factory());
    let with_failures = Generator::new(registry)
        .generate(&fixtures::widget(), &KnownClassSet::new())
        .expect("unit failures are not fatal");
    let skeleton_only = Generator::new(UnitRegistry::new())
        .generate(&fixtures::widget(), &KnownClassSet::new())
        .expect("Widget has a superclass");
    assert_eq!(with_failures.text, skeleton_only.text);
    assert_eq!(with_failures.diagnostics.len(), 2);
}

#[rstest]
fn unresolved_superclass_aborts_the_target() {
    let err = Generator::new(UnitRegistry::standard())
        .generate(&fixtures::ghost(), &fixtures::known_classes())
        .expect_err("Ghost has no superclass");
    assert!(matches!(
        &err,
        GenerateError::SuperclassUnresolved { class } if class == "Ghost"
    ));
    assert_eq!(
        err.to_string(),
        "superclass unresolved for 'Ghost'; refusing to guess a parent class"
    );
}

#[rstest]
fn diagnostics_never_change_the_text() {
    let registry = || {
        active_collision_registry().with(ScriptedUnit::new("noisy").failing("ignored").factory())
    };
    let quiet = Generator::new(active_collision_registry())
        .generate(&fixtures::widget(), &KnownClassSet::new())
        .expect("Widget has a superclass");
    let noisy = Generator::new(registry())
        .generate(&fixtures::widget(), &KnownClassSet::new())
        .expect("Widget has a superclass");
    assert_ne!(quiet.diagnostics.len(), noisy.diagnostics.len());
    assert_eq!(quiet.text, noisy.text);
}
