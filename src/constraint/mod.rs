//! Constraint rules and the value categories they dispatch on.
//!
//! A [`Constraint<V, K>`] accumulates [`ConstraintPredicate`]s for one extracted value
//! of type `V`. The kind marker `K` selects which rules are available: size bounds on
//! char sequences and containers compare the *size* and render
//! `The size of "..." must be ...`, while the same method names on numerics compare
//! the value itself.
//!
//! # Examples
//!
//! ```
//! use constraint_rail::{Arg, NumericConstraint};
//!
//! let rules = NumericConstraint::<i32>::new().greater_than(0).less_than(10);
//! let failures: Vec<_> = rules
//!     .predicates()
//!     .iter()
//!     .filter_map(|p| p.test(Some(&10)))
//!     .collect();
//!
//! assert_eq!(failures, [Arg::Int(10)]);
//! ```
use core::fmt;
use core::marker::PhantomData;

use crate::types::alloc_type::Vec;
use crate::types::{Arg, ViolationMessage};

pub mod char_sequence;
pub mod container;
pub mod numeric;
pub mod predicate;

pub use char_sequence::TextSize;
pub use container::{Elements, Keyed, Size};
pub use predicate::{ConstraintPredicate, CustomConstraint, NullValidity};

/// Marker kinds selecting the rule set of a [`Constraint`].
pub mod kind {
    /// Any value; only the null checks and custom predicates apply.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ObjectKind;
    /// Strings; size rules count Unicode scalar values as measured by
    /// [`TextSize`](super::TextSize).
    #[derive(Debug, Clone, Copy, Default)]
    pub struct CharSequenceKind;
    /// Sequences and sets; size rules count elements.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct CollectionKind;
    /// Maps; size rules count entries.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct MapKind;
    /// Ordered scalars; bounds compare the value.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NumericKind;
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BooleanKind;
}

use kind::*;

pub type ObjectConstraint<V> = Constraint<V, ObjectKind>;
pub type CharSequenceConstraint<V> = Constraint<V, CharSequenceKind>;
pub type CollectionConstraint<V> = Constraint<V, CollectionKind>;
pub type MapConstraint<V> = Constraint<V, MapKind>;
pub type NumericConstraint<V> = Constraint<V, NumericKind>;
pub type BooleanConstraint = Constraint<bool, BooleanKind>;

/// Maps a value type to its constraint kind.
///
/// Implemented for strings, primitive numbers, `bool`, `char`, and the standard
/// sequences, sets, and maps. Containers report their size as the violated value.
pub trait Constrainable {
    type Kind;

    /// Converts the value into the argument shown as the violated value.
    fn to_arg(&self) -> Arg;
}

/// Ordered rule list for one value.
///
/// A rule list containing [`not_null`](Constraint::not_null) is *required*: an absent
/// value reports only `object.notNull`. Otherwise an absent value skips every rule
/// except the presence checks (`not_empty`, `not_blank`, `predicate_nullable`).
pub struct Constraint<V: ?Sized, K> {
    predicates: Vec<ConstraintPredicate<V>>,
    violated_value: fn(&V) -> Arg,
    required: bool,
    text: TextSize,
    kind: PhantomData<fn() -> K>,
}

fn null_arg<V: ?Sized>(_: &V) -> Arg {
    Arg::Null
}

impl<V: ?Sized + Constrainable> Constraint<V, V::Kind> {
    /// Creates an empty rule list for a value of the given category.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::with_violated_value(V::to_arg)
    }
}

impl<V: ?Sized + Constrainable> Default for Constraint<V, V::Kind> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> Constraint<V, ObjectKind> {
    /// Creates an empty rule list for an arbitrary value.
    ///
    /// Object values have no argument form, so failures report [`Arg::Null`].
    #[must_use]
    #[inline]
    pub fn object() -> Self {
        Self::with_violated_value(null_arg::<V>)
    }
}

impl<V: ?Sized, K> Constraint<V, K> {
    /// Creates an empty rule list that renders failing values with `violated_value`.
    #[must_use]
    #[inline]
    pub fn with_violated_value(violated_value: fn(&V) -> Arg) -> Self {
        Self {
            predicates: Vec::new(),
            violated_value,
            required: false,
            text: TextSize::default(),
            kind: PhantomData,
        }
    }

    #[must_use]
    #[inline]
    pub fn predicates(&self) -> &[ConstraintPredicate<V>] {
        &self.predicates
    }

    #[must_use]
    #[inline]
    pub fn into_predicates(self) -> Vec<ConstraintPredicate<V>> {
        self.predicates
    }

    /// Returns `true` once [`not_null`](Constraint::not_null) has been added.
    #[must_use]
    #[inline]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Appends an already-built rule.
    #[must_use]
    pub fn push(mut self, predicate: ConstraintPredicate<V>) -> Self {
        self.predicates.push(predicate);
        self
    }

    #[inline]
    pub(crate) fn violated_value(&self) -> fn(&V) -> Arg {
        self.violated_value
    }
}

impl<V: ?Sized + 'static, K> Constraint<V, K> {
    /// Fails when the value is absent (`object.notNull`).
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.required = true;
        let to_arg = self.violated_value;
        self.push(ConstraintPredicate::nullable(
            |v: Option<&V>| v.is_some(),
            ViolationMessage::OBJECT_NOT_NULL,
            to_arg,
            NullValidity::NullIsInvalid,
        ))
    }

    /// Fails when the value is present (`object.isNull`).
    #[must_use]
    pub fn is_null(self) -> Self {
        let to_arg = self.violated_value;
        self.push(ConstraintPredicate::nullable(
            |v: Option<&V>| v.is_none(),
            ViolationMessage::OBJECT_IS_NULL,
            to_arg,
            NullValidity::NullIsValid,
        ))
    }

    /// Adds an ad-hoc rule; skipped for absent values.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Returns `true` when the value is acceptable
    /// * `message` - Key and default template reported on failure
    #[must_use]
    pub fn predicate<F>(self, predicate: F, message: ViolationMessage) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        let to_arg = self.violated_value;
        self.push(ConstraintPredicate::of(predicate, message, to_arg))
    }

    /// Adds an ad-hoc rule that also receives absent values.
    #[must_use]
    pub fn predicate_nullable<F>(self, predicate: F, message: ViolationMessage) -> Self
    where
        F: Fn(Option<&V>) -> bool + Send + Sync + 'static,
    {
        let to_arg = self.violated_value;
        self.push(ConstraintPredicate::nullable(
            predicate,
            message,
            to_arg,
            NullValidity::NullIsInvalid,
        ))
    }

    /// Adds a [`CustomConstraint`] implementation.
    #[must_use]
    pub fn custom<C>(self, constraint: C) -> Self
    where
        C: CustomConstraint<V>,
    {
        let message = constraint.message();
        let args = constraint.args();
        let to_arg = self.violated_value;
        self.push(
            ConstraintPredicate::of(move |v: &V| constraint.test(v), message, to_arg)
                .with_args(args),
        )
    }
}

impl<V: ?Sized, K> fmt::Debug for Constraint<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("predicates", &self.predicates)
            .field("required", &self.required)
            .finish()
    }
}
