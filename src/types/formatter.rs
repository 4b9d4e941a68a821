//! Message rendering.
//!
//! A [`MessageFormatter`] turns a message key, its default template and the typed
//! argument list into the human-readable text stored on each violation. Rendering
//! is pure and never panics: unknown placeholders are kept verbatim.

use core::fmt::Write;

use crate::types::alloc_type::{BTreeMap, Cow, String};
use crate::types::Arg;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for customizing how violation messages are rendered.
///
/// Implementations must be shareable across threads since a built
/// [`Validator`](crate::Validator) holds its formatter behind an `Arc`.
///
/// Any `Fn(&str, &str, &[Arg]) -> String` closure is a formatter as well.
///
/// # Examples
///
/// ```
/// use constraint_rail::{Arg, MessageFormatter, SimpleMessageFormatter};
///
/// let rendered = SimpleMessageFormatter.format(
///     "numeric.lessThan",
///     "\"{0}\" must be less than {1}",
///     &[Arg::from("age"), Arg::from(10), Arg::from(12)],
/// );
/// assert_eq!(rendered, "\"age\" must be less than 10");
/// ```
pub trait MessageFormatter: Send + Sync {
    fn format(&self, message_key: &str, default_message_format: &str, args: &[Arg]) -> String;
}

impl<F> MessageFormatter for F
where
    F: Fn(&str, &str, &[Arg]) -> String + Send + Sync,
{
    fn format(&self, message_key: &str, default_message_format: &str, args: &[Arg]) -> String {
        self(message_key, default_message_format, args)
    }
}

/// Substitutes positional `{n}` placeholders into the default template.
///
/// An empty default template renders generically as `<key> [<args>]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleMessageFormatter;

impl MessageFormatter for SimpleMessageFormatter {
    fn format(&self, message_key: &str, default_message_format: &str, args: &[Arg]) -> String {
        if default_message_format.is_empty() {
            generic(message_key, args)
        } else {
            render(default_message_format, args)
        }
    }
}

/// Looks templates up by message key, falling back to each rule's default template.
///
/// When neither a registered template nor a default template is available the
/// message is rendered generically as `<key> [<args>]`.
///
/// # Examples
///
/// ```
/// use constraint_rail::{Arg, MessageFormatter, TemplateMessageFormatter};
///
/// let formatter = TemplateMessageFormatter::new()
///     .with_template("object.notNull", "{0} is required");
///
/// let args = [Arg::from("name"), Arg::Null];
/// assert_eq!(formatter.format("object.notNull", "unused", &args), "name is required");
/// assert_eq!(formatter.format("other", "", &args), "other [name, null]");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateMessageFormatter {
    templates: BTreeMap<Cow<'static, str>, Cow<'static, str>>,
}

impl TemplateMessageFormatter {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the template for `message_key`.
    #[must_use]
    pub fn with_template(
        mut self,
        message_key: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.templates.insert(message_key.into(), template.into());
        self
    }

    #[must_use]
    #[inline]
    pub fn template(&self, message_key: &str) -> Option<&str> {
        self.templates.get(message_key).map(|t| t.as_ref())
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateMessageFormatter
where
    K: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { templates: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl MessageFormatter for TemplateMessageFormatter {
    fn format(&self, message_key: &str, default_message_format: &str, args: &[Arg]) -> String {
        match self.template(message_key) {
            Some(template) => render(template, args),
            None if !default_message_format.is_empty() => render(default_message_format, args),
            None => generic(message_key, args),
        }
    }
}

/// Renders `template`, replacing each `{n}` with `args[n]`.
///
/// Placeholders that are malformed or out of range are emitted unchanged.
#[must_use]
pub fn render(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let index = &after[..close];
        match index.parse::<usize>().ok().and_then(|i| args.get(i)) {
            Some(arg) if index.bytes().all(|b| b.is_ascii_digit()) => {
                // writing into a String cannot fail
                let _ = write!(out, "{arg}");
            },
            _ => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

fn generic(message_key: &str, args: &[Arg]) -> String {
    let mut out = String::from(message_key);
    out.push_str(" [");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{arg}");
    }
    out.push(']');
    out
}
