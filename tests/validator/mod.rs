pub mod nested;
#[cfg(feature = "regex")]
pub mod outcome;

use constraint_rail::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    email: String,
    age: i32,
}

#[cfg(feature = "regex")]
fn user_validator() -> Validator<User> {
    Validator::<User>::builder()
        .constraint("name", |u: &User| &u.name, |c| c.not_blank().less_than_or_equal(20))
        .constraint("email", |u: &User| &u.email, |c| c.not_blank().email())
        .constraint("age", |u: &User| &u.age, |c| {
            c.greater_than_or_equal(0).less_than_or_equal(200)
        })
        .build()
}

#[cfg(feature = "regex")]
#[test]
fn valid_target_has_no_violations() {
    let user = User { name: "alice".into(), email: "alice@example.com".into(), age: 30 };
    let violations = user_validator().validate(&user);
    assert!(violations.is_valid());
    assert!(violations.is_empty());
}

#[cfg(feature = "regex")]
#[test]
fn every_failing_rule_is_reported_in_order() {
    let user = User { name: " ".into(), email: "nope".into(), age: 201 };
    let violations = user_validator().validate(&user);

    let summary: Vec<_> = violations.iter().map(|v| (v.name(), v.message_key())).collect();
    assert_eq!(
        summary,
        [
            ("name", "charSequence.notBlank"),
            ("email", "charSequence.email"),
            ("age", "numeric.lessThanOrEqual"),
        ]
    );
    assert_eq!(violations[2].message(), "\"age\" must be less than or equal to 200");
}

#[cfg(feature = "regex")]
#[test]
fn validation_is_idempotent() {
    let validator = user_validator();
    let user = User { name: String::new(), email: String::new(), age: -1 };

    let first = validator.validate(&user);
    let second = validator.validate(&user);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[cfg(feature = "regex")]
#[test]
fn message_key_separator_changes_nested_names() {
    struct Outer {
        inner: User,
    }

    let validator = Validator::<Outer>::builder()
        .message_key_separator("/")
        .nest("inner", |o: &Outer| &o.inner, &user_validator())
        .build();

    assert_eq!(validator.message_key_separator(), "/");
    let inner = User { name: "bob".into(), email: "bob@example.com".into(), age: -5 };
    let outer = Outer { inner };
    assert_eq!(validator.validate(&outer)[0].name(), "inner/age");
}

#[cfg(feature = "regex")]
#[test]
fn message_formatter_renders_every_message() {
    let formatter = TemplateMessageFormatter::new()
        .with_template("charSequence.notBlank", "{0} is required")
        .with_template("numeric.greaterThanOrEqual", "{0} cannot be below {1} (was {2})");

    let validator = Validator::<User>::builder()
        .message_formatter(formatter)
        .constraint("name", |u: &User| &u.name, |c| c.not_blank())
        .constraint("age", |u: &User| &u.age, |c| c.greater_than_or_equal(0))
        .constraint("email", |u: &User| &u.email, |c| c.email())
        .build();

    let user = User { name: String::new(), email: "x".into(), age: -3 };
    let violations = validator.validate(&user);
    let messages: Vec<_> = violations.iter().map(|v| v.message()).collect();
    assert_eq!(
        messages,
        [
            "name is required",
            "age cannot be below 0 (was -3)",
            "\"email\" must be a valid email address",
        ]
    );
}

#[test]
fn closures_can_format_messages() {
    let validator = Validator::<User>::builder()
        .message_formatter(|key: &str, _default: &str, args: &[Arg]| format!("{key}@{}", args[0]))
        .constraint("age", |u: &User| &u.age, |c| c.less_than(0))
        .build();

    let user = User { name: String::new(), email: String::new(), age: 1 };
    assert_eq!(validator.validate(&user)[0].message(), "numeric.lessThan@age");
}

#[test]
fn constraint_on_target_checks_whole_object() {
    let validator = Validator::<User>::builder()
        .constraint_on_target(
            "nameNotEmail",
            |u: &User| u.name != u.email,
            ViolationMessage::of("user.nameNotEmail", "\"{0}\" name must differ from email"),
        )
        .build();

    let user = User { name: "a@b.c".into(), email: "a@b.c".into(), age: 1 };
    let violations = validator.validate(&user);
    assert_eq!(violations[0].name(), "nameNotEmail");
    assert_eq!(violations[0].message(), "\"nameNotEmail\" name must differ from email");
    assert_eq!(violations[0].violated_value(), Some(&Arg::Null));
}

#[test]
fn validators_debug_without_entries_content() {
    let validator = Validator::<User>::builder()
        .constraint("age", |u: &User| &u.age, |c| c.greater_than(0))
        .build();
    let rendered = format!("{validator:?}");
    assert!(rendered.starts_with("Validator"));
    assert!(rendered.contains("fail_fast: false"));
}
