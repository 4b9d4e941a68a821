pub mod char_sequence;
pub mod custom;
pub mod numeric;

use constraint_rail::prelude::*;

struct Profile {
    nickname: Option<String>,
    bio: Option<String>,
}

#[test]
fn not_null_reports_only_not_null_for_absent_value() {
    let validator = Validator::<Profile>::builder()
        .constraint_nullable("nickname", |p: &Profile| p.nickname.as_ref(), |c| {
            c.not_null().not_blank().less_than(10)
        })
        .build();

    let violations = validator.validate(&Profile { nickname: None, bio: None });
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message_key(), "object.notNull");
    assert_eq!(violations[0].args(), &[Arg::from("nickname"), Arg::Null]);
}

#[test]
fn absent_value_without_not_null_runs_only_presence_checks() {
    let validator = Validator::<Profile>::builder()
        .constraint_nullable("nickname", |p: &Profile| p.nickname.as_ref(), |c| {
            c.not_empty().less_than(10)
        })
        .constraint_nullable("bio", |p: &Profile| p.bio.as_ref(), |c| c.less_than(3).ipv4())
        .build();

    let violations = validator.validate(&Profile { nickname: None, bio: None });
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].name(), "nickname");
    assert_eq!(violations[0].message_key(), "container.notEmpty");
    assert_eq!(violations[0].violated_value(), Some(&Arg::Null));
}

#[test]
fn is_null_fails_only_for_present_values() {
    let validator = Validator::<Profile>::builder()
        .constraint_nullable("bio", |p: &Profile| p.bio.as_ref(), |c| c.is_null())
        .build();

    assert!(validator.validate(&Profile { nickname: None, bio: None }).is_valid());

    let violations = validator.validate(&Profile { nickname: None, bio: Some("hi".into()) });
    assert_eq!(violations[0].message(), "\"bio\" must be null");
}

#[test]
fn rules_report_in_registration_order() {
    let validator = Validator::<String>::builder()
        .constraint("s", |s: &String| s, |c| c.greater_than(5).starts_with("x").ends_with("y"))
        .build();

    let violations = validator.validate(&"abc".to_string());
    let keys: Vec<_> = violations.iter().map(|v| v.message_key()).collect();
    assert_eq!(keys, ["container.greaterThan", "charSequence.startsWith", "charSequence.endsWith"]);
}

#[test]
fn predicate_nullable_sees_absent_values() {
    let validator = Validator::<Profile>::builder()
        .constraint_nullable("nickname", |p: &Profile| p.nickname.as_ref(), |c| {
            c.predicate_nullable(
                |v: Option<&String>| v.is_some_and(|s| s.len() > 1),
                ViolationMessage::of("nickname.required", "\"{0}\" is required"),
            )
        })
        .build();

    let violations = validator.validate(&Profile { nickname: None, bio: None });
    assert_eq!(violations[0].message(), "\"nickname\" is required");
}

#[test]
fn constraint_on_object_reports_null_as_violated_value() {
    use std::time::Duration;

    struct Wrapper {
        timeout: Option<Duration>,
    }

    let validator = Validator::<Wrapper>::builder()
        .constraint_on_object("timeout", |w: &Wrapper| w.timeout.as_ref(), |c| {
            c.not_null().predicate(
                |d: &Duration| d.as_secs() < 60,
                ViolationMessage::of("duration.max", "\"{0}\" is too long"),
            )
        })
        .build();

    let violations = validator.validate(&Wrapper { timeout: None });
    assert_eq!(violations[0].message_key(), "object.notNull");

    let violations = validator.validate(&Wrapper { timeout: Some(Duration::from_secs(120)) });
    assert_eq!(violations[0].message(), "\"timeout\" is too long");
    assert_eq!(violations[0].violated_value(), Some(&Arg::Null));
}

#[test]
fn constraint_keeps_required_flag_and_predicates() {
    let constraint = NumericConstraint::<i32>::new().not_null().greater_than(1);
    assert!(constraint.is_required());
    assert_eq!(constraint.predicates().len(), 2);
    assert_eq!(constraint.predicates()[1].message().message_key(), "numeric.greaterThan");
}
