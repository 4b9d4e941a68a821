use std::future::{ready, Ready};

use constraint_rail::prelude_async::*;

fn quantity_present(quantity: i32) -> Ready<Validation<&'static str, i32>> {
    ready(match quantity {
        q if q > 0 => Validation::Valid(q),
        _ => Validation::invalid("quantity.positive"),
    })
}

fn quantity_in_pairs(quantity: i32) -> Ready<Validation<&'static str, i32>> {
    ready(match quantity {
        q if q % 2 == 0 => Validation::Valid(q),
        _ => Validation::invalid("quantity.pairs"),
    })
}

fn quantity_within_stock(quantity: i32) -> Ready<Validation<&'static str, i32>> {
    ready(match quantity {
        q if q <= 24 => Validation::Valid(q),
        _ => Validation::invalid("quantity.stock"),
    })
}

#[tokio::test]
async fn every_quantity_check_passes() {
    let checks = [quantity_present(12), quantity_in_pairs(12), quantity_within_stock(12)];
    let result = validate_all_async(checks).await;

    assert_eq!(result.into_value(), Some(vec![12, 12, 12]));
}

#[tokio::test]
async fn failed_quantity_checks_accumulate_in_order() {
    let checks = [quantity_present(-1), quantity_in_pairs(3), quantity_within_stock(30)];
    let result = validate_all_async(checks).await;

    assert_eq!(result.errors(), ["quantity.positive", "quantity.pairs", "quantity.stock"]);
}

#[tokio::test]
async fn validate_seq_async_stops_at_first_failure() {
    let steps: [fn(i32) -> Ready<Validation<&'static str, i32>>; 3] =
        [quantity_present, quantity_in_pairs, quantity_within_stock];

    let result = validate_seq_async(-3, steps).await;
    assert_eq!(result.errors(), ["quantity.positive"]);

    let result = validate_seq_async(26, steps).await;
    assert_eq!(result.errors(), ["quantity.stock"]);

    let result = validate_seq_async(8, steps).await;
    assert_eq!(result.into_value(), Some(8));
}

#[tokio::test]
async fn await_map_only_runs_on_valid() {
    let valid = Validation::<&str, i32>::valid(2).await_map(|v| async move { v * 3 }).await;
    assert_eq!(valid.into_value(), Some(6));

    let invalid = Validation::<&str, i32>::invalid("e").await_map(|v| async move { v * 3 }).await;
    assert_eq!(invalid.errors(), ["e"]);
}

#[tokio::test]
async fn await_map_error_maps_each_error_in_order() {
    let mapped = Validation::<&str, i32>::invalid_many(["a", "bb"])
        .await_map_error(|e| async move { e.len() })
        .await;
    assert_eq!(mapped.errors(), [1, 2]);
}

#[tokio::test]
async fn await_map_errors_and_fold() {
    let mapped = Validation::<&str, i32>::invalid_many(["a", "b"])
        .await_map_errors(|errors| async move { vec![errors.join("+")] })
        .await;
    assert_eq!(mapped.errors(), ["a+b".to_string()]);

    let folded = Validation::<&str, i32>::valid(5)
        .await_fold(|errors| async move { errors.len() as i32 }, |v| async move { v * 2 })
        .await;
    assert_eq!(folded, 10);

    let bimapped = Validation::<&str, i32>::invalid("x")
        .await_bimap(
            |errors| async move { errors.into_iter().map(str::len) },
            |v| async move { v },
        )
        .await;
    assert_eq!(bimapped.errors(), [1]);
}

#[tokio::test]
async fn violations_flow_into_async_mappers() {
    struct Code(String);

    let validator = Validator::<Code>::builder()
        .constraint("code", |c: &Code| &c.0, |c| c.fixed_size(3))
        .build();

    let messages = validator
        .validate_to_validation(Code("ab".into()))
        .await_map_error(|v| async move { v.message().to_string() })
        .await;
    let expected = "The size of \"code\" must be 3. The given size is 2".to_string();
    assert_eq!(messages.errors(), [expected]);
}
