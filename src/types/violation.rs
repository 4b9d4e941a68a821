use core::fmt;

use crate::types::alloc_type::{Cow, String, Vec};
use crate::types::{Arg, ArgVec, MessageFormatter, ViolationMessage};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single failed rule occurrence.
///
/// Holds the dotted/bracketed path of the offending value, the rule's message key,
/// the ordered argument list `[path, rule args..., violated value]` and the message
/// rendered when the violation was created. Violations are immutable.
///
/// # Examples
///
/// ```
/// use constraint_rail::{Arg, ConstraintViolation, SimpleMessageFormatter, ViolationMessage};
///
/// let violation = ConstraintViolation::new(
///     "name",
///     &ViolationMessage::OBJECT_NOT_NULL,
///     [Arg::Null].into_iter().collect(),
///     &SimpleMessageFormatter,
/// );
///
/// assert_eq!(violation.message(), "\"name\" must not be null");
/// assert_eq!(violation.args()[0], Arg::from("name"));
/// assert_eq!(violation.violated_value(), Some(&Arg::Null));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    name: String,
    message_key: Cow<'static, str>,
    default_message_format: Cow<'static, str>,
    args: ArgVec,
    message: String,
}

impl ConstraintViolation {
    /// Creates a violation and renders its message with `formatter`.
    ///
    /// # Arguments
    ///
    /// * `name` - Path of the violated value, prepended as argument `{0}`
    /// * `message` - Key and default template of the failing rule
    /// * `args` - Rule arguments followed by the violated value
    /// * `formatter` - Formatter used to render the message
    pub fn new(
        name: impl Into<String>,
        message: &ViolationMessage,
        args: ArgVec,
        formatter: &dyn MessageFormatter,
    ) -> Self {
        let name = name.into();
        let mut full = ArgVec::with_capacity(args.len() + 1);
        full.push(Arg::from(name.as_str()));
        full.extend(args);

        let rendered =
            formatter.format(message.message_key(), message.default_message_format(), &full);

        let (message_key, default_message_format) = message.cloned_parts();
        Self {
            name,
            message_key,
            default_message_format,
            args: full,
            message: rendered,
        }
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    #[inline]
    pub fn default_message_format(&self) -> &str {
        &self.default_message_format
    }

    /// The full argument list, path first and violated value last.
    #[must_use]
    #[inline]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The value that failed the rule ([`Arg::Null`] for absent values).
    #[must_use]
    #[inline]
    pub fn violated_value(&self) -> Option<&Arg> {
        if self.args.len() > 1 {
            self.args.last()
        } else {
            None
        }
    }

    /// Converts into a transport-friendly detail record.
    #[must_use]
    pub fn detail(&self) -> ViolationDetail {
        ViolationDetail {
            key: self.message_key.clone().into_owned(),
            args: self.args.to_vec(),
            default_message: self.message.clone(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Key, args and rendered message of a violation, without the path field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ViolationDetail {
    pub key: String,
    pub args: Vec<Arg>,
    pub default_message: String,
}
