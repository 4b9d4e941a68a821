use constraint_rail::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Email(String);

fn email_validator() -> Validator<Email> {
    Validator::<Email>::builder()
        .constraint("email", |e: &Email| &e.0, |c| c.not_blank().email())
        .build()
}

#[test]
fn validated_returns_target_or_aggregate_error() {
    let validator = email_validator();

    let ok = validator.validated(Email("a@b.co".into()));
    assert_eq!(ok.unwrap(), Email("a@b.co".into()));

    let err = validator.validated(Email("broken".into())).unwrap_err();
    assert_eq!(err.violations().len(), 1);
    assert!(err.message().starts_with("Constraint violations found!"));
    assert!(err.message().ends_with("* \"email\" must be a valid email address"));
    assert_eq!(err.to_string(), err.message());
}

#[test]
fn aggregate_error_lists_every_violation() {
    let validator = Validator::<Email>::builder()
        .constraint("email", |e: &Email| &e.0, |c| c.not_blank().greater_than(3))
        .build();

    let err = validator.validated(Email(" ".into())).unwrap_err();
    let lines: Vec<_> = err.message().lines().collect();
    assert_eq!(
        lines,
        [
            "Constraint violations found!",
            "* \"email\" must not be blank",
            "* The size of \"email\" must be greater than 3. The given size is 1",
        ]
    );

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("must not be blank"));
}

#[test]
fn validated_with_groups_respects_groups() {
    let validator = Validator::<Email>::builder()
        .constraint_on_group(ConstraintGroup::CREATE, |b| {
            b.constraint("email", |e: &Email| &e.0, |c| c.ends_with(".com"))
        })
        .build();

    assert!(validator.validated(Email("a@b.org".into())).is_ok());
    let created = validator.validated_with_groups(Email("a@b.org".into()), &[ConstraintGroup::CREATE]);
    assert!(created.is_err());
}

#[test]
fn validate_to_either_and_validation() {
    let validator = email_validator();

    let right = validator.validate_to_either(Email("a@b.co".into()));
    assert_eq!(right, Either::Right(Email("a@b.co".into())));

    let left = validator.validate_to_either(Email("".into()));
    assert!(left.is_left());
    assert_eq!(left.left().map(|v| v.len()), Some(1));

    let invalid = validator.validate_to_validation(Email("x".into()));
    assert!(invalid.is_invalid());
    assert_eq!(invalid.errors()[0].message_key(), "charSequence.email");

    let valid = validator.validate_to_validation(Email("x@y.z".into()));
    assert_eq!(valid.into_value(), Some(Email("x@y.z".into())));
}

#[test]
fn violations_visit_and_convert() {
    let violations = email_validator().validate(&Email("bad".into()));

    let mut visited = Vec::new();
    violations.apply(|name, key, args, message| {
        visited.push((name.to_string(), key.to_string(), args.len(), message.to_string()));
    });
    assert_eq!(
        visited,
        [(
            "email".to_string(),
            "charSequence.email".to_string(),
            2,
            "\"email\" must be a valid email address".to_string()
        )]
    );

    let details = violations.details();
    assert_eq!(details[0].key, "charSequence.email");
    assert_eq!(details[0].args, vec![Arg::from("email"), Arg::from("bad")]);

    let mapped = violations.clone().throw_if_invalid(|v| v.len());
    assert_eq!(mapped, Err(1));
    assert!(violations.into_result().is_err());
}
