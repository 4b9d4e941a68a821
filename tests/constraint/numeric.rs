use constraint_rail::prelude::*;

struct Reading {
    celsius: f64,
    count: u64,
    delta: i8,
    grade: char,
    enabled: bool,
}

fn reading() -> Reading {
    Reading { celsius: 21.5, count: 3, delta: -2, grade: 'B', enabled: false }
}

#[test]
fn numeric_bounds_use_strict_and_inclusive_comparisons() {
    let validator = Validator::<Reading>::builder()
        .constraint("count", |r: &Reading| &r.count, |c| c.greater_than_or_equal(3).less_than(3))
        .build();

    let violations = validator.validate(&reading());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message(), "\"count\" must be less than 3");
    assert_eq!(violations[0].args(), &[Arg::from("count"), Arg::from(3u64), Arg::from(3u64)]);
}

#[test]
fn float_and_signed_bounds() {
    let validator = Validator::<Reading>::builder()
        .constraint("celsius", |r: &Reading| &r.celsius, |c| c.less_than_or_equal(21.0))
        .constraint("delta", |r: &Reading| &r.delta, |c| c.greater_than(-2))
        .build();

    let violations = validator.validate(&reading());
    assert_eq!(violations[0].message(), "\"celsius\" must be less than or equal to 21");
    assert_eq!(violations[0].violated_value(), Some(&Arg::F64(21.5)));
    assert_eq!(violations[1].message(), "\"delta\" must be greater than -2");
}

#[test]
fn chars_are_ordered_values() {
    let validator = Validator::<Reading>::builder()
        .constraint("grade", |r: &Reading| &r.grade, |c| c.greater_than_or_equal('C'))
        .build();

    assert_eq!(
        validator.validate(&reading())[0].message(),
        "\"grade\" must be greater than or equal to C"
    );
}

#[test]
fn boolean_rules() {
    let validator = Validator::<Reading>::builder()
        .constraint("enabled", |r: &Reading| &r.enabled, |c| c.is_true())
        .build();

    let violations = validator.validate(&reading());
    assert_eq!(violations[0].message_key(), "boolean.isTrue");
    assert_eq!(violations[0].violated_value(), Some(&Arg::Bool(false)));

    let validator = Validator::<Reading>::builder()
        .constraint("enabled", |r: &Reading| &r.enabled, |c| c.is_false())
        .build();
    assert!(validator.validate(&reading()).is_valid());
}

#[test]
fn optional_numbers_skip_bounds_when_absent() {
    struct Limits {
        max: Option<u16>,
    }

    let validator = Validator::<Limits>::builder()
        .constraint_nullable("max", |l: &Limits| l.max.as_ref(), |c| c.less_than(10))
        .build();

    assert!(validator.validate(&Limits { max: None }).is_valid());
    assert_eq!(validator.validate(&Limits { max: Some(10) }).len(), 1);
}
