use constraint_rail::prelude::*;
use constraint_rail::{ArgVec, ConstraintPredicate, NullValidity};

struct DivisibleBy(u32);

impl CustomConstraint<u32> for DivisibleBy {
    fn test(&self, value: &u32) -> bool {
        value % self.0 == 0
    }

    fn message(&self) -> ViolationMessage {
        ViolationMessage::of("numeric.divisibleBy", "\"{0}\" must be divisible by {1} but was {2}")
    }

    fn args(&self) -> ArgVec {
        [Arg::from(self.0)].into_iter().collect()
    }
}

#[test]
fn custom_constraint_args_precede_violated_value() {
    let validator = Validator::<u32>::builder()
        .constraint("n", |n: &u32| n, |c| c.custom(DivisibleBy(4)))
        .build();

    assert!(validator.validate(&8).is_valid());

    let violations = validator.validate(&6);
    assert_eq!(violations[0].message(), "\"n\" must be divisible by 4 but was 6");
    assert_eq!(violations[0].message_key(), "numeric.divisibleBy");
    assert_eq!(violations[0].default_message_format(), "\"{0}\" must be divisible by {1} but was {2}");
}

#[test]
fn predicate_uses_caller_message() {
    let validator = Validator::<String>::builder()
        .constraint("word", |s: &String| s, |c| {
            c.predicate(
                |s: &String| s.chars().all(char::is_alphabetic),
                ViolationMessage::of("word.alphabetic", "\"{0}\" must be alphabetic, got {1}"),
            )
        })
        .build();

    let violations = validator.validate(&"abc1".to_string());
    assert_eq!(violations[0].message(), "\"word\" must be alphabetic, got abc1");
}

#[test]
fn hand_built_predicates_can_be_pushed() {
    let upper = ConstraintPredicate::nullable(
        |v: Option<&String>| v.map_or(true, |s| s.chars().all(|c| !c.is_lowercase())),
        ViolationMessage::of("word.upper", "\"{0}\" must be upper case"),
        |s: &String| Arg::from(s),
        NullValidity::NullIsValid,
    );
    assert_eq!(upper.null_validity(), NullValidity::NullIsValid);

    let validator = Validator::<String>::builder()
        .constraint("word", |s: &String| s, |c| c.push(upper))
        .build();

    assert!(validator.validate(&"ABC".to_string()).is_valid());
    assert_eq!(validator.validate(&"AbC".to_string())[0].message_key(), "word.upper");
}
