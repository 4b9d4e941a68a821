//! Message keys and default templates for the built-in rules.

use crate::types::alloc_type::Cow;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A message key paired with the template used when no override is registered.
///
/// Templates use positional placeholders: `{0}` is always the violation path,
/// followed by rule arguments, with the violated value last.
///
/// # Examples
///
/// ```
/// use constraint_rail::ViolationMessage;
///
/// let custom = ViolationMessage::of("user.adult", "\"{0}\" must be an adult");
/// assert_eq!(custom.message_key(), "user.adult");
/// assert_eq!(ViolationMessage::OBJECT_NOT_NULL.message_key(), "object.notNull");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViolationMessage {
    message_key: Cow<'static, str>,
    default_message_format: Cow<'static, str>,
}

const fn builtin(key: &'static str, format: &'static str) -> ViolationMessage {
    ViolationMessage {
        message_key: Cow::Borrowed(key),
        default_message_format: Cow::Borrowed(format),
    }
}

impl ViolationMessage {
    pub const OBJECT_NOT_NULL: Self = builtin("object.notNull", "\"{0}\" must not be null");
    pub const OBJECT_IS_NULL: Self = builtin("object.isNull", "\"{0}\" must be null");

    pub const CONTAINER_NOT_EMPTY: Self =
        builtin("container.notEmpty", "\"{0}\" must not be empty");
    pub const CONTAINER_LESS_THAN: Self = builtin(
        "container.lessThan",
        "The size of \"{0}\" must be less than {1}. The given size is {2}",
    );
    pub const CONTAINER_LESS_THAN_OR_EQUAL: Self = builtin(
        "container.lessThanOrEqual",
        "The size of \"{0}\" must be less than or equal to {1}. The given size is {2}",
    );
    pub const CONTAINER_GREATER_THAN: Self = builtin(
        "container.greaterThan",
        "The size of \"{0}\" must be greater than {1}. The given size is {2}",
    );
    pub const CONTAINER_GREATER_THAN_OR_EQUAL: Self = builtin(
        "container.greaterThanOrEqual",
        "The size of \"{0}\" must be greater than or equal to {1}. The given size is {2}",
    );
    pub const CONTAINER_FIXED_SIZE: Self = builtin(
        "container.fixedSize",
        "The size of \"{0}\" must be {1}. The given size is {2}",
    );

    pub const NUMERIC_GREATER_THAN: Self =
        builtin("numeric.greaterThan", "\"{0}\" must be greater than {1}");
    pub const NUMERIC_GREATER_THAN_OR_EQUAL: Self = builtin(
        "numeric.greaterThanOrEqual",
        "\"{0}\" must be greater than or equal to {1}",
    );
    pub const NUMERIC_LESS_THAN: Self = builtin("numeric.lessThan", "\"{0}\" must be less than {1}");
    pub const NUMERIC_LESS_THAN_OR_EQUAL: Self =
        builtin("numeric.lessThanOrEqual", "\"{0}\" must be less than or equal to {1}");

    pub const BOOLEAN_IS_TRUE: Self = builtin("boolean.isTrue", "\"{0}\" must be true");
    pub const BOOLEAN_IS_FALSE: Self = builtin("boolean.isFalse", "\"{0}\" must be false");

    pub const CHAR_SEQUENCE_NOT_BLANK: Self =
        builtin("charSequence.notBlank", "\"{0}\" must not be blank");
    pub const CHAR_SEQUENCE_CONTAINS: Self =
        builtin("charSequence.contains", "\"{0}\" must contain {1}");
    pub const CHAR_SEQUENCE_STARTS_WITH: Self =
        builtin("charSequence.startsWith", "\"{0}\" must start with \"{1}\"");
    pub const CHAR_SEQUENCE_ENDS_WITH: Self =
        builtin("charSequence.endsWith", "\"{0}\" must end with \"{1}\"");
    pub const CHAR_SEQUENCE_EMAIL: Self =
        builtin("charSequence.email", "\"{0}\" must be a valid email address");
    pub const CHAR_SEQUENCE_IPV4: Self = builtin("charSequence.ipv4", "\"{0}\" must be a valid IPv4");
    pub const CHAR_SEQUENCE_IPV6: Self = builtin("charSequence.ipv6", "\"{0}\" must be a valid IPv6");
    pub const CHAR_SEQUENCE_URL: Self = builtin("charSequence.url", "\"{0}\" must be a valid URL");
    pub const CHAR_SEQUENCE_PATTERN: Self =
        builtin("charSequence.pattern", "\"{0}\" must match {1}");
    pub const CHAR_SEQUENCE_LUHN: Self = builtin(
        "charSequence.luhn",
        "the check digit for \"{0}\" is invalid, Luhn checksum failed",
    );
    pub const CHAR_SEQUENCE_BOOLEAN: Self = builtin(
        "charSequence.boolean",
        "\"{0}\" must be a valid representation of a boolean",
    );
    pub const CHAR_SEQUENCE_BYTE: Self =
        builtin("charSequence.byte", "\"{0}\" must be a valid representation of a byte");
    pub const CHAR_SEQUENCE_SHORT: Self =
        builtin("charSequence.short", "\"{0}\" must be a valid representation of a short");
    pub const CHAR_SEQUENCE_INTEGER: Self = builtin(
        "charSequence.integer",
        "\"{0}\" must be a valid representation of an integer",
    );
    pub const CHAR_SEQUENCE_LONG: Self =
        builtin("charSequence.long", "\"{0}\" must be a valid representation of a long");
    pub const CHAR_SEQUENCE_FLOAT: Self =
        builtin("charSequence.float", "\"{0}\" must be a valid representation of a float");
    pub const CHAR_SEQUENCE_DOUBLE: Self =
        builtin("charSequence.double", "\"{0}\" must be a valid representation of a double");

    pub const BYTE_SIZE_LESS_THAN: Self = builtin(
        "byteSize.lessThan",
        "The byte size of \"{0}\" must be less than {1}. The given size is {2}",
    );
    pub const BYTE_SIZE_LESS_THAN_OR_EQUAL: Self = builtin(
        "byteSize.lessThanOrEqual",
        "The byte size of \"{0}\" must be less than or equal to {1}. The given size is {2}",
    );
    pub const BYTE_SIZE_GREATER_THAN: Self = builtin(
        "byteSize.greaterThan",
        "The byte size of \"{0}\" must be greater than {1}. The given size is {2}",
    );
    pub const BYTE_SIZE_GREATER_THAN_OR_EQUAL: Self = builtin(
        "byteSize.greaterThanOrEqual",
        "The byte size of \"{0}\" must be greater than or equal to {1}. The given size is {2}",
    );
    pub const BYTE_SIZE_FIXED_SIZE: Self = builtin(
        "byteSize.fixedSize",
        "The byte size of \"{0}\" must be {1}. The given size is {2}",
    );

    pub const COLLECTION_CONTAINS: Self =
        builtin("collection.contains", "\"{0}\" must contain {1}");
    pub const MAP_CONTAINS_KEY: Self = builtin("map.containsKey", "\"{0}\" must contain key {1}");
    pub const MAP_CONTAINS_VALUE: Self =
        builtin("map.containsValue", "\"{0}\" must contain value {1}");

    /// Creates a message with a custom key and default template.
    ///
    /// # Arguments
    ///
    /// * `message_key` - Key looked up by the active [`MessageFormatter`](crate::MessageFormatter)
    /// * `default_message_format` - Template used when the key has no override
    #[must_use]
    pub fn of(
        message_key: impl Into<Cow<'static, str>>,
        default_message_format: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            message_key: message_key.into(),
            default_message_format: default_message_format.into(),
        }
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

    pub(crate) fn cloned_parts(&self) -> (Cow<'static, str>, Cow<'static, str>) {
        (self.message_key.clone(), self.default_message_format.clone())
    }
}
