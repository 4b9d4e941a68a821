use constraint_rail::prelude::*;

#[derive(Debug, Clone)]
struct Country {
    name: String,
}

#[derive(Debug, Clone)]
struct Address {
    country: Country,
    city: String,
    zip: Option<String>,
}

#[derive(Debug, Clone)]
struct Customer {
    address: Address,
    billing: Option<Address>,
    shipping: Option<Address>,
}

fn country_validator() -> Validator<Country> {
    Validator::<Country>::builder()
        .constraint("name", |c: &Country| &c.name, |c| c.not_blank().less_than_or_equal(3))
        .build()
}

fn address_validator() -> Validator<Address> {
    Validator::<Address>::builder()
        .nest("country", |a: &Address| &a.country, &country_validator())
        .constraint("city", |a: &Address| &a.city, |c| c.not_blank())
        .constraint_nullable("zip", |a: &Address| a.zip.as_ref(), |c| c.fixed_size(5))
        .build()
}

fn address(country: &str, city: &str) -> Address {
    Address { country: Country { name: country.into() }, city: city.into(), zip: None }
}

#[test]
fn nested_names_are_joined_with_separator() {
    let validator = Validator::<Customer>::builder()
        .nest("address", |c: &Customer| &c.address, &address_validator())
        .build();

    let customer = Customer { address: address("JAPAN", ""), billing: None, shipping: None };
    let violations = validator.validate(&customer);

    let names: Vec<_> = violations.iter().map(|v| v.name()).collect();
    assert_eq!(names, ["address.country.name", "address.city"]);
    assert_eq!(
        violations[0].message(),
        "The size of \"address.country.name\" must be less than or equal to 3. The given size is 5"
    );
}

#[test]
fn nest_nullable_reports_absence_and_if_present_skips_it() {
    let validator = Validator::<Customer>::builder()
        .nest_nullable("billing", |c: &Customer| c.billing.as_ref(), &address_validator())
        .nest_if_present("shipping", |c: &Customer| c.shipping.as_ref(), &address_validator())
        .build();

    let customer = Customer { address: address("JP", "Tokyo"), billing: None, shipping: None };
    let violations = validator.validate(&customer);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].name(), "billing");
    assert_eq!(violations[0].message(), "\"billing\" must not be null");

    let customer = Customer {
        address: address("JP", "Tokyo"),
        billing: Some(address("JP", "Osaka")),
        shipping: Some(address("", "Kyoto")),
    };
    let violations = validator.validate(&customer);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].name(), "shipping.country.name");
}

#[test]
fn nest_with_builds_inline_validator() {
    let validator = Validator::<Customer>::builder()
        .nest_with("address", |c: &Customer| &c.address, |b| {
            b.constraint("city", |a: &Address| &a.city, |c| c.starts_with("T"))
                .nest_with("country", |a: &Address| &a.country, |b| {
                    b.constraint("name", |c: &Country| &c.name, |c| c.fixed_size(2))
                })
        })
        .nest_if_present_with("billing", |c: &Customer| c.billing.as_ref(), |b| {
            b.constraint("city", |a: &Address| &a.city, |c| c.not_blank())
        })
        .nest_nullable_with("shipping", |c: &Customer| c.shipping.as_ref(), |b| b)
        .build();

    let customer = Customer { address: address("JPN", "Osaka"), billing: None, shipping: None };
    let names: Vec<_> =
        validator.validate(&customer).iter().map(|v| v.name().to_string()).collect();
    assert_eq!(names, ["address.city", "address.country.name", "shipping"]);
}

#[test]
fn outer_formatter_applies_to_nested_violations() {
    let inner = Validator::<Country>::builder()
        .message_formatter(
            TemplateMessageFormatter::new().with_template("charSequence.notBlank", "inner"),
        )
        .constraint("name", |c: &Country| &c.name, |c| c.not_blank())
        .build();

    let outer = Validator::<Address>::builder()
        .message_formatter(
            TemplateMessageFormatter::new().with_template("charSequence.notBlank", "outer {0}"),
        )
        .nest("country", |a: &Address| &a.country, &inner)
        .build();

    let violations = outer.validate(&address("", "Tokyo"));
    assert_eq!(violations[0].message(), "outer country.name");
}

#[test]
fn optional_leaf_inside_nested_validator() {
    let validator = Validator::<Customer>::builder()
        .nest("address", |c: &Customer| &c.address, &address_validator())
        .build();

    let mut customer = Customer { address: address("JP", "Tokyo"), billing: None, shipping: None };
    assert!(validator.validate(&customer).is_valid());

    customer.address.zip = Some("123".into());
    let violations = validator.validate(&customer);
    assert_eq!(violations[0].name(), "address.zip");
    assert_eq!(violations[0].message_key(), "container.fixedSize");
}
