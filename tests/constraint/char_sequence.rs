use constraint_rail::prelude::*;

fn string_validator<B>(block: B) -> Validator<String>
where
    B: FnOnce(CharSequenceConstraint<String>) -> CharSequenceConstraint<String>,
{
    Validator::<String>::builder().constraint("s", |s: &String| s, block).build()
}

fn keys(validator: &Validator<String>, value: &str) -> Vec<String> {
    validator.validate(&value.to_string()).iter().map(|v| v.message_key().to_string()).collect()
}

#[test]
fn not_blank_rejects_whitespace_only() {
    let validator = string_validator(|c| c.not_blank());
    assert_eq!(keys(&validator, " \t"), ["charSequence.notBlank"]);
    assert_eq!(keys(&validator, ""), ["charSequence.notBlank"]);
    assert!(keys(&validator, " a ").is_empty());
}

#[test]
fn size_counts_unicode_scalars() {
    let validator = string_validator(|c| c.fixed_size(2));
    assert!(keys(&validator, "日本").is_empty());

    let violations = validator.validate(&"日本語".to_string());
    assert_eq!(violations[0].message(), "The size of \"s\" must be 2. The given size is 3");
}

#[test]
fn size_counts_composed_characters() {
    let validator = string_validator(|c| c.fixed_size(2));
    assert!(keys(&validator, "モシ\u{3099}").is_empty());

    let raw = string_validator(|c| c.normalizer(false).fixed_size(3));
    assert!(keys(&raw, "モシ\u{3099}").is_empty());

    let violations = raw.validate(&"モジ".to_string());
    assert_eq!(violations[0].message(), "The size of \"s\" must be 3. The given size is 2");
}

#[test]
fn size_skips_variation_selectors() {
    let validator = string_validator(|c| c.fixed_size(1));
    assert!(keys(&validator, "\u{20B9F}\u{E0100}").is_empty());
    assert!(keys(&validator, "\u{908A}\u{E0107}").is_empty());
    assert!(keys(&validator, "\u{1820}\u{180B}").is_empty());

    let keep_ivs = string_validator(|c| c.variant(|t| t.ignore_ivs(false)).fixed_size(2));
    assert!(keys(&keep_ivs, "\u{908A}\u{E0107}").is_empty());
}

#[test]
fn text_options_apply_to_rules_added_afterwards() {
    let validator = string_validator(|c| c.fixed_size(2).normalizer(false).fixed_size(3));
    assert!(keys(&validator, "モシ\u{3099}").is_empty());
}

#[test]
fn byte_size_counts_utf8_bytes() {
    let validator = string_validator(|c| c.byte_size_less_than_or_equal(4));
    assert!(keys(&validator, "abcd").is_empty());

    let violations = validator.validate(&"日本".to_string());
    assert_eq!(violations[0].message_key(), "byteSize.lessThanOrEqual");
    assert_eq!(violations[0].violated_value(), Some(&Arg::from(6usize)));
}

#[test]
fn contains_and_affixes_report_their_argument() {
    let validator = string_validator(|c| c.contains("mid").starts_with("pre").ends_with("post"));
    assert!(keys(&validator, "pre-mid-post").is_empty());

    let violations = validator.validate(&"nothing".to_string());
    assert_eq!(violations[0].message(), "\"s\" must contain mid");
    assert_eq!(violations[1].message(), "\"s\" must start with \"pre\"");
    assert_eq!(violations[2].message(), "\"s\" must end with \"post\"");
    assert_eq!(violations[2].args()[1], Arg::from("post"));
}

#[test]
fn format_rules_accept_empty_string() {
    let validator = string_validator(|c| c.ipv4().ipv6().luhn());
    assert!(keys(&validator, "").is_empty());
}

#[cfg(feature = "regex")]
#[test]
fn regex_format_rules_accept_empty_string() {
    let validator = string_validator(|c| c.email().url());
    assert!(keys(&validator, "").is_empty());
}

#[cfg(feature = "regex")]
#[test]
fn email_rule_checks_address_shape() {
    let validator = string_validator(|c| c.email());
    assert!(keys(&validator, "user@example.com").is_empty());
    assert!(keys(&validator, "USER@Example.COM").is_empty());
    assert_eq!(keys(&validator, "user.example.com"), ["charSequence.email"]);
    assert_eq!(keys(&validator, "user@exa mple.com"), ["charSequence.email"]);
}

#[cfg(feature = "regex")]
#[test]
fn email_rule_accepts_ipv4_literal_domain() {
    let validator = string_validator(|c| c.email());
    assert!(keys(&validator, "foo@[127.0.0.1]").is_empty());
    assert_eq!(keys(&validator, "foo@[127.0.0]"), ["charSequence.email"]);
    assert_eq!(keys(&validator, "foo@127.0.0.1]"), ["charSequence.email"]);
}

#[test]
fn ip_rules_check_address_families() {
    let v4 = string_validator(|c| c.ipv4());
    assert!(keys(&v4, "192.168.0.1").is_empty());
    assert_eq!(keys(&v4, "256.1.1.1"), ["charSequence.ipv4"]);
    assert_eq!(keys(&v4, "::1"), ["charSequence.ipv4"]);

    let v6 = string_validator(|c| c.ipv6());
    assert!(keys(&v6, "2001:db8::1").is_empty());
    assert_eq!(keys(&v6, "192.168.0.1"), ["charSequence.ipv6"]);
}

#[cfg(feature = "regex")]
#[test]
fn url_rule_requires_scheme_and_host() {
    let validator = string_validator(|c| c.url());
    assert!(keys(&validator, "https://example.com/a?b=c").is_empty());
    assert!(keys(&validator, "FTP://files.example.com").is_empty());
    assert_eq!(keys(&validator, "example.com"), ["charSequence.url"]);
    assert_eq!(keys(&validator, "https:///path"), ["charSequence.url"]);
}

#[test]
fn luhn_rule_checks_digit_sum() {
    let validator = string_validator(|c| c.luhn());
    assert!(keys(&validator, "4111111111111111").is_empty());
    assert_eq!(keys(&validator, "4111111111111112"), ["charSequence.luhn"]);
}

#[test]
fn parse_rules_follow_integer_ranges() {
    let validator = string_validator(|c| c.is_byte());
    assert!(keys(&validator, "-128").is_empty());
    assert_eq!(keys(&validator, "128"), ["charSequence.byte"]);
    assert_eq!(keys(&validator, ""), ["charSequence.byte"]);

    let validator = string_validator(|c| c.is_short().is_integer().is_long());
    assert!(keys(&validator, "32767").is_empty());
    assert_eq!(keys(&validator, "32768"), ["charSequence.short"]);
    assert_eq!(keys(&validator, "2147483648"), ["charSequence.short", "charSequence.integer"]);

    let validator = string_validator(|c| c.is_float().is_double().is_boolean());
    assert_eq!(keys(&validator, "TRUE"), ["charSequence.float", "charSequence.double"]);
    assert_eq!(keys(&validator, "1.5"), ["charSequence.boolean"]);
}

#[cfg(feature = "regex")]
#[test]
fn pattern_requires_full_match() {
    let validator = string_validator(|c| c.pattern(regex::Regex::new("[0-9]{3}").unwrap()));
    assert!(keys(&validator, "123").is_empty());
    assert!(keys(&validator, "").is_empty());
    assert_eq!(keys(&validator, "1234"), ["charSequence.pattern"]);
    assert_eq!(keys(&validator, "a123"), ["charSequence.pattern"]);
}

#[test]
fn str_slices_are_char_sequences() {
    struct Static {
        code: &'static str,
    }

    let validator = Validator::<Static>::builder()
        .constraint("code", |s: &Static| s.code, |c| c.less_than_or_equal(2))
        .build();

    assert_eq!(validator.validate(&Static { code: "abc" })[0].name(), "code");
}
