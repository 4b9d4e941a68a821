use crate::constraint::kind::{BooleanKind, NumericKind};
use crate::constraint::{Constrainable, Constraint, ConstraintPredicate};
use crate::types::{Arg, ViolationMessage};

macro_rules! impl_numeric {
    ($($ty:ty),*) => {
        $(impl Constrainable for $ty {
            type Kind = NumericKind;

            #[inline]
            fn to_arg(&self) -> Arg {
                Arg::from(*self)
            }
        })*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

impl Constrainable for bool {
    type Kind = BooleanKind;

    #[inline]
    fn to_arg(&self) -> Arg {
        Arg::Bool(*self)
    }
}

impl<V> Constraint<V, NumericKind>
where
    V: Copy + PartialOrd + Into<Arg> + Send + Sync + 'static,
{
    fn bound(self, bound: V, message: ViolationMessage, accept: fn(&V, &V) -> bool) -> Self {
        let to_arg = self.violated_value();
        self.push(
            ConstraintPredicate::of(move |v: &V| accept(v, &bound), message, to_arg)
                .with_args([bound]),
        )
    }

    /// Requires `value > min` (`numeric.greaterThan`).
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::prelude::*;
    ///
    /// let validator = Validator::<i64>::builder()
    ///     .constraint("amount", |n: &i64| n, |c| c.greater_than(0).less_than(100))
    ///     .build();
    ///
    /// assert!(validator.validate(&50).is_valid());
    /// assert_eq!(validator.validate(&0)[0].message(), "\"amount\" must be greater than 0");
    /// assert_eq!(validator.validate(&100)[0].message_key(), "numeric.lessThan");
    /// ```
    #[must_use]
    pub fn greater_than(self, min: V) -> Self {
        self.bound(min, ViolationMessage::NUMERIC_GREATER_THAN, |v, b| v > b)
    }

    /// Requires `value >= min` (`numeric.greaterThanOrEqual`).
    #[must_use]
    pub fn greater_than_or_equal(self, min: V) -> Self {
        self.bound(min, ViolationMessage::NUMERIC_GREATER_THAN_OR_EQUAL, |v, b| v >= b)
    }

    /// Requires `value < max` (`numeric.lessThan`).
    #[must_use]
    pub fn less_than(self, max: V) -> Self {
        self.bound(max, ViolationMessage::NUMERIC_LESS_THAN, |v, b| v < b)
    }

    /// Requires `value <= max` (`numeric.lessThanOrEqual`).
    #[must_use]
    pub fn less_than_or_equal(self, max: V) -> Self {
        self.bound(max, ViolationMessage::NUMERIC_LESS_THAN_OR_EQUAL, |v, b| v <= b)
    }
}

impl Constraint<bool, BooleanKind> {
    #[must_use]
    pub fn is_true(self) -> Self {
        self.predicate(|v| *v, ViolationMessage::BOOLEAN_IS_TRUE)
    }

    #[must_use]
    pub fn is_false(self) -> Self {
        self.predicate(|v| !*v, ViolationMessage::BOOLEAN_IS_FALSE)
    }
}
