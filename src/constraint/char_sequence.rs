//! Rules for string values.
//!
//! Format rules (`email`, `ipv4`, `ipv6`, `url`, `pattern`, `luhn`) accept the empty
//! string; combine them with `not_empty` or `not_blank` to require a value.
//!
//! Size rules measure strings through [`TextSize`]: NFC-normalized, with ideographic
//! and Mongolian free variation selectors left uncounted.

use core::net::{Ipv4Addr, Ipv6Addr};
use core::ops::RangeInclusive;

#[cfg(feature = "regex")]
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

use crate::constraint::kind::CharSequenceKind;
use crate::constraint::{Constraint, ConstraintPredicate, NullValidity};
use crate::types::alloc_type::Cow;
use crate::types::{Arg, ViolationMessage};

const IDEOGRAPHIC_VARIATION_SELECTORS: RangeInclusive<char> = '\u{E0100}'..='\u{E01EF}';
const MONGOLIAN_FREE_VARIATION_SELECTORS: RangeInclusive<char> = '\u{180B}'..='\u{180D}';

/// How the size rules count the characters of a string.
///
/// # Examples
///
/// ```
/// use constraint_rail::TextSize;
///
/// // "モジ" spelled with a combining voiced sound mark
/// assert_eq!(TextSize::default().measure("モシ\u{3099}"), 2);
/// assert_eq!(TextSize::RAW.measure("モシ\u{3099}"), 3);
///
/// // 邊 followed by an ideographic variation selector
/// assert_eq!(TextSize::default().measure("\u{908A}\u{E0107}"), 1);
/// assert_eq!(TextSize::default().ignore_ivs(false).measure("\u{908A}\u{E0107}"), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSize {
    normalize: bool,
    ignore_ivs: bool,
    ignore_fvs: bool,
}

impl Default for TextSize {
    fn default() -> Self {
        Self { normalize: true, ignore_ivs: true, ignore_fvs: true }
    }
}

impl TextSize {
    /// Counts every Unicode scalar value as is.
    pub const RAW: Self = Self { normalize: false, ignore_ivs: false, ignore_fvs: false };

    /// Counts the NFC form of the text when `true`.
    #[must_use]
    pub const fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Skips ideographic variation selectors (U+E0100..=U+E01EF) when `true`.
    #[must_use]
    pub const fn ignore_ivs(mut self, ignore: bool) -> Self {
        self.ignore_ivs = ignore;
        self
    }

    /// Skips Mongolian free variation selectors (U+180B..=U+180D) when `true`.
    #[must_use]
    pub const fn ignore_fvs(mut self, ignore: bool) -> Self {
        self.ignore_fvs = ignore;
        self
    }

    #[must_use]
    pub fn measure(&self, text: &str) -> usize {
        let counted = text.chars().filter(|c| {
            !((self.ignore_ivs && IDEOGRAPHIC_VARIATION_SELECTORS.contains(c))
                || (self.ignore_fvs && MONGOLIAN_FREE_VARIATION_SELECTORS.contains(c)))
        });
        if self.normalize {
            counted.nfc().count()
        } else {
            counted.count()
        }
    }
}

fn byte_len<V: ?Sized + AsRef<str>>(value: &V) -> Arg {
    Arg::from(value.as_ref().len())
}

fn byte_size_rule<V: ?Sized + AsRef<str> + 'static>(
    message: ViolationMessage,
    bound: usize,
    accept: fn(usize, usize) -> bool,
) -> ConstraintPredicate<V> {
    ConstraintPredicate::of(
        move |v: &V| accept(v.as_ref().len(), bound),
        message,
        byte_len::<V>,
    )
    .with_args([bound])
}

impl<V: ?Sized + AsRef<str> + 'static> Constraint<V, CharSequenceKind> {
    fn str_rule<F>(self, accept: F, message: ViolationMessage) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let to_arg = self.violated_value();
        self.push(ConstraintPredicate::of(move |v: &V| accept(v.as_ref()), message, to_arg))
    }

    fn str_rule_with_arg<F>(self, accept: F, message: ViolationMessage, arg: Arg) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let to_arg = self.violated_value();
        self.push(
            ConstraintPredicate::of(move |v: &V| accept(v.as_ref()), message, to_arg)
                .with_args([arg]),
        )
    }

    /// Switches NFC normalization on or off for size rules added afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::prelude::*;
    ///
    /// let raw = Validator::<String>::builder()
    ///     .constraint("s", |s: &String| s, |c| c.normalizer(false).fixed_size(3))
    ///     .build();
    ///
    /// assert!(raw.validate(&"モシ\u{3099}".to_string()).is_valid());
    /// ```
    #[must_use]
    pub fn normalizer(mut self, normalize: bool) -> Self {
        self.text = self.text.normalize(normalize);
        self
    }

    /// Adjusts which variation selectors size rules added afterwards skip.
    #[must_use]
    pub fn variant<F>(mut self, options: F) -> Self
    where
        F: FnOnce(TextSize) -> TextSize,
    {
        self.text = options(self.text);
        self
    }

    /// Fails when the value is absent, empty, or only whitespace (`charSequence.notBlank`).
    #[must_use]
    pub fn not_blank(self) -> Self {
        let to_arg = self.violated_value();
        self.push(ConstraintPredicate::nullable(
            |v: Option<&V>| v.is_some_and(|v| !v.as_ref().trim().is_empty()),
            ViolationMessage::CHAR_SEQUENCE_NOT_BLANK,
            to_arg,
            NullValidity::NullIsInvalid,
        ))
    }

    /// Requires `needle` to occur in the value.
    #[must_use]
    pub fn contains(self, needle: impl Into<Cow<'static, str>>) -> Self {
        let needle = needle.into();
        let arg = Arg::from(needle.clone());
        self.str_rule_with_arg(
            move |s| s.contains(needle.as_ref()),
            ViolationMessage::CHAR_SEQUENCE_CONTAINS,
            arg,
        )
    }

    #[must_use]
    pub fn starts_with(self, prefix: impl Into<Cow<'static, str>>) -> Self {
        let prefix = prefix.into();
        let arg = Arg::from(prefix.clone());
        self.str_rule_with_arg(
            move |s| s.starts_with(prefix.as_ref()),
            ViolationMessage::CHAR_SEQUENCE_STARTS_WITH,
            arg,
        )
    }

    #[must_use]
    pub fn ends_with(self, suffix: impl Into<Cow<'static, str>>) -> Self {
        let suffix = suffix.into();
        let arg = Arg::from(suffix.clone());
        self.str_rule_with_arg(
            move |s| s.ends_with(suffix.as_ref()),
            ViolationMessage::CHAR_SEQUENCE_ENDS_WITH,
            arg,
        )
    }

    /// Requires an address of the form `local@domain` or `local@[a.b.c.d]`.
    #[cfg(feature = "regex")]
    #[must_use]
    pub fn email(self) -> Self {
        self.str_rule(|s| s.is_empty() || is_email(s), ViolationMessage::CHAR_SEQUENCE_EMAIL)
    }

    #[must_use]
    pub fn ipv4(self) -> Self {
        self.str_rule(
            |s| s.is_empty() || s.parse::<Ipv4Addr>().is_ok(),
            ViolationMessage::CHAR_SEQUENCE_IPV4,
        )
    }

    #[must_use]
    pub fn ipv6(self) -> Self {
        self.str_rule(
            |s| s.is_empty() || s.parse::<Ipv6Addr>().is_ok(),
            ViolationMessage::CHAR_SEQUENCE_IPV6,
        )
    }

    /// Requires `scheme://authority...` with a non-empty authority and no whitespace.
    #[cfg(feature = "regex")]
    #[must_use]
    pub fn url(self) -> Self {
        self.str_rule(|s| s.is_empty() || is_url(s), ViolationMessage::CHAR_SEQUENCE_URL)
    }

    /// Requires the whole value to match `regex`.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::prelude::*;
    /// use regex::Regex;
    ///
    /// let validator = Validator::<String>::builder()
    ///     .constraint("code", |s: &String| s, |c| c.pattern(Regex::new("[A-Z]{3}").unwrap()))
    ///     .build();
    ///
    /// assert!(validator.validate(&"ABC".to_string()).is_valid());
    /// assert_eq!(
    ///     validator.validate(&"ABCD".to_string())[0].message(),
    ///     "\"code\" must match [A-Z]{3}"
    /// );
    /// ```
    #[cfg(feature = "regex")]
    #[must_use]
    pub fn pattern(self, regex: regex::Regex) -> Self {
        let arg = Arg::from(regex.as_str());
        let anchored = regex::Regex::new(&crate::types::alloc_type::format!(
            r"\A(?:{})\z",
            regex.as_str()
        ))
        .unwrap_or(regex);
        self.str_rule_with_arg(
            move |s| {
                s.is_empty() || anchored.find(s).is_some_and(|m| m.start() == 0 && m.end() == s.len())
            },
            ViolationMessage::CHAR_SEQUENCE_PATTERN,
            arg,
        )
    }

    /// Requires an all-digit value with a valid Luhn check digit.
    #[must_use]
    pub fn luhn(self) -> Self {
        self.str_rule(|s| s.is_empty() || is_luhn(s), ViolationMessage::CHAR_SEQUENCE_LUHN)
    }

    /// Accepts `true` or `false`, ignoring ASCII case.
    #[must_use]
    pub fn is_boolean(self) -> Self {
        self.str_rule(
            |s| s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false"),
            ViolationMessage::CHAR_SEQUENCE_BOOLEAN,
        )
    }

    /// Requires a value parseable as an 8-bit signed integer.
    #[must_use]
    pub fn is_byte(self) -> Self {
        self.str_rule(|s| s.parse::<i8>().is_ok(), ViolationMessage::CHAR_SEQUENCE_BYTE)
    }

    #[must_use]
    pub fn is_short(self) -> Self {
        self.str_rule(|s| s.parse::<i16>().is_ok(), ViolationMessage::CHAR_SEQUENCE_SHORT)
    }

    #[must_use]
    pub fn is_integer(self) -> Self {
        self.str_rule(|s| s.parse::<i32>().is_ok(), ViolationMessage::CHAR_SEQUENCE_INTEGER)
    }

    #[must_use]
    pub fn is_long(self) -> Self {
        self.str_rule(|s| s.parse::<i64>().is_ok(), ViolationMessage::CHAR_SEQUENCE_LONG)
    }

    #[must_use]
    pub fn is_float(self) -> Self {
        self.str_rule(|s| s.parse::<f32>().is_ok(), ViolationMessage::CHAR_SEQUENCE_FLOAT)
    }

    #[must_use]
    pub fn is_double(self) -> Self {
        self.str_rule(|s| s.parse::<f64>().is_ok(), ViolationMessage::CHAR_SEQUENCE_DOUBLE)
    }

    /// Requires the UTF-8 length to be `< max`.
    #[must_use]
    pub fn byte_size_less_than(self, max: usize) -> Self {
        self.push(byte_size_rule(ViolationMessage::BYTE_SIZE_LESS_THAN, max, |s, b| s < b))
    }

    #[must_use]
    pub fn byte_size_less_than_or_equal(self, max: usize) -> Self {
        self.push(byte_size_rule(ViolationMessage::BYTE_SIZE_LESS_THAN_OR_EQUAL, max, |s, b| s <= b))
    }

    #[must_use]
    pub fn byte_size_greater_than(self, min: usize) -> Self {
        self.push(byte_size_rule(ViolationMessage::BYTE_SIZE_GREATER_THAN, min, |s, b| s > b))
    }

    #[must_use]
    pub fn byte_size_greater_than_or_equal(self, min: usize) -> Self {
        self.push(byte_size_rule(
            ViolationMessage::BYTE_SIZE_GREATER_THAN_OR_EQUAL,
            min,
            |s, b| s >= b,
        ))
    }

    #[must_use]
    pub fn byte_size_fixed(self, size: usize) -> Self {
        self.push(byte_size_rule(ViolationMessage::BYTE_SIZE_FIXED_SIZE, size, |s, b| s == b))
    }
}

#[cfg(feature = "regex")]
macro_rules! email_part {
    () => {
        r#"[^\x00-\x1F()<>@,;:\\".\[\]\s]"#
    };
}

#[cfg(feature = "regex")]
static EMAIL_REGEX: LazyLock<Option<regex::Regex>> = LazyLock::new(|| {
    regex::Regex::new(concat!(
        "(?i)^",
        email_part!(),
        r"+(\.",
        email_part!(),
        r"+)*@(",
        email_part!(),
        r"+(\.",
        email_part!(),
        r"+)*",
        r"|\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]",
        r")$"
    ))
    .ok()
});

#[cfg(feature = "regex")]
static URL_REGEX: LazyLock<Option<regex::Regex>> =
    LazyLock::new(|| regex::Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*://[^\s/?#]+[^\s]*$").ok());

#[cfg(feature = "regex")]
pub(crate) fn is_email(s: &str) -> bool {
    EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(s))
}

#[cfg(feature = "regex")]
pub(crate) fn is_url(s: &str) -> bool {
    URL_REGEX.as_ref().is_some_and(|re| re.is_match(s))
}

pub(crate) fn is_luhn(s: &str) -> bool {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = s
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| match i % 2 {
            0 => d,
            _ if d * 2 > 9 => d * 2 - 9,
            _ => d * 2,
        })
        .sum();
    sum % 10 == 0
}
