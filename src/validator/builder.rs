use core::fmt;

use crate::constraint::kind::ObjectKind;
use crate::constraint::{Constrainable, Constraint, Elements};
use crate::types::alloc_type::{Arc, Box, Cow, Vec};
use crate::types::{MessageFormatter, SimpleMessageFormatter, ViolationMessage};
use crate::validator::entry::{
    ConditionalEntry, Entries, Evaluate, Extract, FieldEntry, ForEachEntry, NestedEntry, Nullable,
    Required, TargetEntry,
};
use crate::validator::{ConstraintCondition, ConstraintGroup, Validator, DEFAULT_SEPARATOR};

/// Accumulates constraints for `T` until [`build`](ValidatorBuilder::build) freezes them.
///
/// Entries run in registration order. Every registration takes an explicit name and
/// an extractor closure. The `_nullable` and `_if_present` variants take extractors
/// returning `Option<&V>`: for nested and for-each entries, `_nullable` reports
/// `object.notNull` on an absent value while `_if_present` skips it.
///
/// # Examples
///
/// ```
/// use constraint_rail::prelude::*;
///
/// struct Inner {
///     x: i32,
/// }
///
/// struct Outer {
///     inner: Option<Inner>,
///     tags: Option<Vec<String>>,
/// }
///
/// let validator = Validator::<Outer>::builder()
///     .nest_nullable_with("inner", |o: &Outer| o.inner.as_ref(), |b| {
///         b.constraint("x", |i: &Inner| &i.x, |c| c.greater_than(0))
///     })
///     .for_each_if_present_with("tags", |o: &Outer| o.tags.as_ref(), |b| {
///         b.constraint("", |s: &String| s, |c| c.not_blank())
///     })
///     .build();
///
/// let violations = validator.validate(&Outer { inner: None, tags: None });
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].message(), "\"inner\" must not be null");
///
/// let violations = validator.validate(&Outer {
///     inner: Some(Inner { x: 0 }),
///     tags: Some(vec!["ok".into(), " ".into()]),
/// });
/// let names: Vec<_> = violations.iter().map(|v| v.name()).collect();
/// assert_eq!(names, ["inner.x", "tags[1]"]);
/// ```
pub struct ValidatorBuilder<T> {
    entries: Entries<T>,
    separator: Cow<'static, str>,
    formatter: Arc<dyn MessageFormatter>,
    fail_fast: bool,
}

impl<T> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            separator: Cow::Borrowed(DEFAULT_SEPARATOR),
            formatter: Arc::new(SimpleMessageFormatter),
            fail_fast: false,
        }
    }
}

impl<T: 'static> ValidatorBuilder<T> {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator placed between nested names (default `"."`).
    #[must_use]
    pub fn message_key_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the formatter used to render messages (default [`SimpleMessageFormatter`]).
    #[must_use]
    pub fn message_formatter<M>(mut self, formatter: M) -> Self
    where
        M: MessageFormatter + 'static,
    {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Stops validation at the first violation when `true` (default `false`).
    ///
    /// Only the validator on which `validate` is called decides; the setting of
    /// nested validators is ignored, like their separator and formatter.
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    fn push<E>(mut self, entry: E) -> Self
    where
        E: Evaluate<T> + 'static,
    {
        self.entries.push(Box::new(entry));
        self
    }

    fn field<V, K, X>(self, name: Cow<'static, str>, extract: X, constraint: Constraint<V, K>) -> Self
    where
        V: ?Sized + 'static,
        X: Extract<T, V> + 'static,
    {
        let required = constraint.is_required();
        self.push(FieldEntry { name, extract, predicates: constraint.into_predicates(), required })
    }

    /// Registers rules for a value that is always present.
    ///
    /// # Arguments
    ///
    /// * `name` - Path segment reported for this value
    /// * `extractor` - Reads the value from the target
    /// * `block` - Adds rules to the value's [`Constraint`]
    #[must_use]
    pub fn constraint<V, F, B>(self, name: impl Into<Cow<'static, str>>, extractor: F, block: B) -> Self
    where
        V: ?Sized + Constrainable + 'static,
        F: Fn(&T) -> &V + Send + Sync + 'static,
        B: FnOnce(Constraint<V, V::Kind>) -> Constraint<V, V::Kind>,
    {
        self.field(name.into(), Required(extractor), block(Constraint::new()))
    }

    /// Registers rules for an optional value.
    ///
    /// An absent value reports only `object.notNull` when the rules include `not_null`;
    /// otherwise only presence checks such as `not_empty` run on it.
    #[must_use]
    pub fn constraint_nullable<V, F, B>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        block: B,
    ) -> Self
    where
        V: ?Sized + Constrainable + 'static,
        F: Fn(&T) -> Option<&V> + Send + Sync + 'static,
        B: FnOnce(Constraint<V, V::Kind>) -> Constraint<V, V::Kind>,
    {
        self.field(name.into(), Nullable(extractor), block(Constraint::new()))
    }

    /// Registers null checks and custom predicates for a value of any type.
    #[must_use]
    pub fn constraint_on_object<V, F, B>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        block: B,
    ) -> Self
    where
        V: ?Sized + 'static,
        F: Fn(&T) -> Option<&V> + Send + Sync + 'static,
        B: FnOnce(Constraint<V, ObjectKind>) -> Constraint<V, ObjectKind>,
    {
        self.field(name.into(), Nullable(extractor), block(Constraint::object()))
    }

    /// Registers a rule over the whole target, reported under `name`.
    #[must_use]
    pub fn constraint_on_target<F>(
        self,
        name: impl Into<Cow<'static, str>>,
        predicate: F,
        message: ViolationMessage,
    ) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.push(TargetEntry { name: name.into(), predicate, message })
    }

    /// Validates an always-present value with `validator`, prefixing paths with `name`.
    #[must_use]
    pub fn nest<N, F>(self, name: impl Into<Cow<'static, str>>, extractor: F, validator: &Validator<N>) -> Self
    where
        N: 'static,
        F: Fn(&T) -> &N + Send + Sync + 'static,
    {
        self.push(NestedEntry {
            name: name.into(),
            extract: Required(extractor),
            validator: validator.clone(),
            required: true,
        })
    }

    /// Like [`nest`](Self::nest) for an optional value; absence reports `object.notNull`.
    #[must_use]
    pub fn nest_nullable<N, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        validator: &Validator<N>,
    ) -> Self
    where
        N: 'static,
        F: Fn(&T) -> Option<&N> + Send + Sync + 'static,
    {
        self.push(NestedEntry {
            name: name.into(),
            extract: Nullable(extractor),
            validator: validator.clone(),
            required: true,
        })
    }

    /// Like [`nest`](Self::nest) for an optional value; absence is silently skipped.
    #[must_use]
    pub fn nest_if_present<N, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        validator: &Validator<N>,
    ) -> Self
    where
        N: 'static,
        F: Fn(&T) -> Option<&N> + Send + Sync + 'static,
    {
        self.push(NestedEntry {
            name: name.into(),
            extract: Nullable(extractor),
            validator: validator.clone(),
            required: false,
        })
    }

    /// [`nest`](Self::nest) with the nested validator built in place.
    ///
    /// The nested builder's separator and formatter are not used; the validator on
    /// which `validate` is called renders every message.
    #[must_use]
    pub fn nest_with<N, F, B>(self, name: impl Into<Cow<'static, str>>, extractor: F, block: B) -> Self
    where
        N: 'static,
        F: Fn(&T) -> &N + Send + Sync + 'static,
        B: FnOnce(ValidatorBuilder<N>) -> ValidatorBuilder<N>,
    {
        let validator = block(ValidatorBuilder::new()).build();
        self.nest(name, extractor, &validator)
    }

    #[must_use]
    pub fn nest_nullable_with<N, F, B>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        block: B,
    ) -> Self
    where
        N: 'static,
        F: Fn(&T) -> Option<&N> + Send + Sync + 'static,
        B: FnOnce(ValidatorBuilder<N>) -> ValidatorBuilder<N>,
    {
        let validator = block(ValidatorBuilder::new()).build();
        self.nest_nullable(name, extractor, &validator)
    }

    #[must_use]
    pub fn nest_if_present_with<N, F, B>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        block: B,
    ) -> Self
    where
        N: 'static,
        F: Fn(&T) -> Option<&N> + Send + Sync + 'static,
        B: FnOnce(ValidatorBuilder<N>) -> ValidatorBuilder<N>,
    {
        let validator = block(ValidatorBuilder::new()).build();
        self.nest_if_present(name, extractor, &validator)
    }

    /// Validates every element of a container, reporting paths as `name[i]`.
    ///
    /// Maps contribute their values in iteration order; keys are never validated.
    #[must_use]
    pub fn for_each<C, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        validator: &Validator<C::Element>,
    ) -> Self
    where
        C: ?Sized + Elements + 'static,
        C::Element: 'static,
        F: Fn(&T) -> &C + Send + Sync + 'static,
    {
        self.push(ForEachEntry::<C, _> {
            name: name.into(),
            extract: Required(extractor),
            validator: validator.clone(),
            required: true,
        })
    }

    /// Like [`for_each`](Self::for_each) for an optional container; absence reports
    /// `object.notNull` on the container path.
    #[must_use]
    pub fn for_each_nullable<C, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        validator: &Validator<C::Element>,
    ) -> Self
    where
        C: ?Sized + Elements + 'static,
        C::Element: 'static,
        F: Fn(&T) -> Option<&C> + Send + Sync + 'static,
    {
        self.push(ForEachEntry::<C, _> {
            name: name.into(),
            extract: Nullable(extractor),
            validator: validator.clone(),
            required: true,
        })
    }

    /// Like [`for_each`](Self::for_each) for an optional container; absence is skipped.
    #[must_use]
    pub fn for_each_if_present<C, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        validator: &Validator<C::Element>,
    ) -> Self
    where
        C: ?Sized + Elements + 'static,
        C::Element: 'static,
        F: Fn(&T) -> Option<&C> + Send + Sync + 'static,
    {
        self.push(ForEachEntry::<C, _> {
            name: name.into(),
            extract: Nullable(extractor),
            validator: validator.clone(),
            required: false,
        })
    }

    #[must_use]
    pub fn for_each_with<C, F, B>(self, name: impl Into<Cow<'static, str>>, extractor: F, block: B) -> Self
    where
        C: ?Sized + Elements + 'static,
        C::Element: 'static,
        F: Fn(&T) -> &C + Send + Sync + 'static,
        B: FnOnce(ValidatorBuilder<C::Element>) -> ValidatorBuilder<C::Element>,
    {
        let validator = block(ValidatorBuilder::new()).build();
        self.for_each(name, extractor, &validator)
    }

    #[must_use]
    pub fn for_each_nullable_with<C, F, B>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        block: B,
    ) -> Self
    where
        C: ?Sized + Elements + 'static,
        C::Element: 'static,
        F: Fn(&T) -> Option<&C> + Send + Sync + 'static,
        B: FnOnce(ValidatorBuilder<C::Element>) -> ValidatorBuilder<C::Element>,
    {
        let validator = block(ValidatorBuilder::new()).build();
        self.for_each_nullable(name, extractor, &validator)
    }

    #[must_use]
    pub fn for_each_if_present_with<C, F, B>(
        self,
        name: impl Into<Cow<'static, str>>,
        extractor: F,
        block: B,
    ) -> Self
    where
        C: ?Sized + Elements + 'static,
        C::Element: 'static,
        F: Fn(&T) -> Option<&C> + Send + Sync + 'static,
        B: FnOnce(ValidatorBuilder<C::Element>) -> ValidatorBuilder<C::Element>,
    {
        let validator = block(ValidatorBuilder::new()).build();
        self.for_each_if_present(name, extractor, &validator)
    }

    /// Registers a block that runs only when `condition` holds for an active group.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::prelude::*;
    ///
    /// struct Account {
    ///     id: u64,
    /// }
    ///
    /// let validator = Validator::<Account>::builder()
    ///     .constraint_on_group(ConstraintGroup::UPDATE, |b| {
    ///         b.constraint("id", |a: &Account| &a.id, |c| c.greater_than(0))
    ///     })
    ///     .build();
    ///
    /// let account = Account { id: 0 };
    /// assert!(validator.validate(&account).is_valid());
    /// assert!(!validator.validate_with_groups(&account, &[ConstraintGroup::UPDATE]).is_valid());
    /// ```
    #[must_use]
    pub fn constraint_on_condition<B>(self, condition: ConstraintCondition<T>, block: B) -> Self
    where
        B: FnOnce(ValidatorBuilder<T>) -> ValidatorBuilder<T>,
    {
        let inner = block(ValidatorBuilder::new());
        self.push(ConditionalEntry { condition, entries: inner.entries })
    }

    /// Registers a block that runs only when `group` is active.
    #[must_use]
    pub fn constraint_on_group<B>(self, group: ConstraintGroup, block: B) -> Self
    where
        B: FnOnce(ValidatorBuilder<T>) -> ValidatorBuilder<T>,
    {
        self.constraint_on_condition(group.to_condition(), block)
    }

    /// Freezes the registered entries into an immutable, shareable [`Validator`].
    #[must_use]
    pub fn build(self) -> Validator<T> {
        Validator::from_parts(self.entries, self.separator, self.formatter, self.fail_fast)
    }
}

impl<T> fmt::Debug for ValidatorBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("entries", &self.entries.len())
            .field("separator", &self.separator)
            .field("fail_fast", &self.fail_fast)
            .finish_non_exhaustive()
    }
}
