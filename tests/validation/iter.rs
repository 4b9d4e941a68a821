use constraint_rail::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Sku(String);

fn sku_validator() -> Validator<Sku> {
    Validator::<Sku>::builder()
        .constraint("sku", |s: &Sku| &s.0, |c| c.not_blank().fixed_size(6).starts_with("SKU"))
        .build()
}

fn keys(validation: &Validation<ConstraintViolation, Sku>) -> Vec<&str> {
    validation.iter_errors().map(|v| v.message_key()).collect()
}

#[test]
fn valid_outcome_yields_its_target_once() {
    let outcome = sku_validator().validate_to_validation(Sku("SKU123".into()));

    assert_eq!(outcome.iter().collect::<Vec<_>>(), [&Sku("SKU123".into())]);
    assert_eq!(outcome.iter_errors().count(), 0);
    assert_eq!((&outcome).into_iter().count(), 1);
    assert_eq!(outcome.into_iter().next(), Some(Sku("SKU123".into())));
}

#[test]
fn invalid_outcome_yields_violations_in_rule_order() {
    let outcome = sku_validator().validate_to_validation(Sku("ab".into()));

    assert_eq!(outcome.iter().next(), None);
    assert_eq!(keys(&outcome), ["container.fixedSize", "charSequence.startsWith"]);
    assert_eq!(outcome.into_iter().count(), 0);
}

#[test]
fn mutable_iteration_edits_value_or_violations() {
    let validator = sku_validator();

    let mut valid = validator.validate_to_validation(Sku("SKU001".into()));
    for sku in &mut valid {
        sku.0.make_ascii_lowercase();
    }
    assert_eq!(valid.into_value(), Some(Sku("sku001".into())));

    let mut invalid = validator.validate_to_validation(Sku(" ".into()));
    assert_eq!(invalid.iter_mut().next(), None);
    let names: Vec<_> = invalid.iter_errors_mut().map(|v| v.name().to_string()).collect();
    assert_eq!(names, ["sku", "sku", "sku"]);
}

#[test]
fn collecting_outcomes_accumulates_every_violation() {
    let validator = sku_validator();
    let batch = [Sku("SKU001".into()), Sku("bad".into()), Sku("SKU002".into()), Sku("".into())];

    let collected: Validation<ConstraintViolation, Vec<Sku>> =
        batch.iter().cloned().map(|sku| validator.validate_to_validation(sku)).collect();

    let keys: Vec<_> = collected.iter_errors().map(|v| v.message_key()).collect();
    assert_eq!(
        keys,
        [
            "container.fixedSize",
            "charSequence.startsWith",
            "charSequence.notBlank",
            "container.fixedSize",
            "charSequence.startsWith",
        ]
    );
}

#[test]
fn collecting_all_valid_outcomes_keeps_values_in_order() {
    let validator = sku_validator();
    let collected: Validation<ConstraintViolation, Vec<String>> = ["SKU001", "SKU002"]
        .into_iter()
        .map(|s| validator.validate_to_validation(Sku(s.into())).map(|sku| sku.0))
        .collect();

    assert_eq!(collected.into_value(), Some(vec!["SKU001".to_string(), "SKU002".to_string()]));
}

#[test]
fn collecting_results_uses_violations_as_errors() {
    let validator = sku_validator();
    let results = [Sku("SKU777".into()), Sku("x".into())].map(|sku| {
        let violations = validator.validate(&sku);
        match violations.violations().first() {
            Some(first) => Err(first.clone()),
            None => Ok(sku),
        }
    });

    let collected: Validation<ConstraintViolation, Vec<Sku>> = results.into_iter().collect();
    assert!(collected.is_invalid());
    assert_eq!(collected.errors()[0].message(), "The size of \"sku\" must be 6. The given size is 1");
}
