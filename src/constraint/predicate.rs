use core::fmt;

use crate::types::alloc_type::Box;
use crate::types::{Arg, ArgVec, ViolationMessage};

/// How a rule treats an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullValidity {
    /// The rule is skipped when the value is absent.
    NullIsValid,
    /// The rule is evaluated against the absent value, and may fail on it.
    NullIsInvalid,
}

type Test<V> = Box<dyn Fn(Option<&V>) -> bool + Send + Sync>;
type ToArg<V> = Box<dyn Fn(&V) -> Arg + Send + Sync>;

/// One rule: a test, its message and its static arguments.
///
/// Rules are created by the [`Constraint`](crate::Constraint) builder methods and
/// are immutable afterwards.
///
/// # Examples
///
/// ```
/// use constraint_rail::{Arg, ConstraintPredicate, ViolationMessage};
///
/// let positive = ConstraintPredicate::of(
///     |v: &i32| *v > 0,
///     ViolationMessage::of("positive", "\"{0}\" must be positive"),
///     |v: &i32| Arg::from(*v),
/// );
///
/// assert_eq!(positive.test(Some(&3)), None);
/// assert_eq!(positive.test(Some(&-1)), Some(Arg::Int(-1)));
/// assert_eq!(positive.test(None), None);
/// ```
pub struct ConstraintPredicate<V: ?Sized> {
    test: Test<V>,
    message: ViolationMessage,
    args: ArgVec,
    violated_value: ToArg<V>,
    null_validity: NullValidity,
}

impl<V: ?Sized> ConstraintPredicate<V> {
    /// Creates a rule that is skipped for absent values.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Returns `true` when the value satisfies the rule
    /// * `message` - Message used when the rule fails
    /// * `violated_value` - Converts the failing value into its message argument
    pub fn of<F, G>(predicate: F, message: ViolationMessage, violated_value: G) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
        G: Fn(&V) -> Arg + Send + Sync + 'static,
    {
        Self {
            test: Box::new(move |value: Option<&V>| value.map_or(true, &predicate)),
            message,
            args: ArgVec::new(),
            violated_value: Box::new(violated_value),
            null_validity: NullValidity::NullIsValid,
        }
    }

    /// Creates a rule that also sees absent values.
    ///
    /// With [`NullValidity::NullIsValid`] the predicate is still never called with `None`.
    pub fn nullable<F, G>(
        predicate: F,
        message: ViolationMessage,
        violated_value: G,
        null_validity: NullValidity,
    ) -> Self
    where
        F: Fn(Option<&V>) -> bool + Send + Sync + 'static,
        G: Fn(&V) -> Arg + Send + Sync + 'static,
    {
        Self {
            test: Box::new(predicate),
            message,
            args: ArgVec::new(),
            violated_value: Box::new(violated_value),
            null_validity,
        }
    }

    /// Appends static rule arguments, rendered between the path and the violated value.
    #[must_use]
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Tests `value`, returning the violated value argument on failure.
    #[must_use]
    pub fn test(&self, value: Option<&V>) -> Option<Arg> {
        if value.is_none() && self.null_validity == NullValidity::NullIsValid {
            return None;
        }
        if (self.test)(value) {
            None
        } else {
            Some(value.map_or(Arg::Null, |v| (self.violated_value)(v)))
        }
    }

    #[must_use]
    #[inline]
    pub fn message(&self) -> &ViolationMessage {
        &self.message
    }

    #[must_use]
    #[inline]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    #[must_use]
    #[inline]
    pub fn null_validity(&self) -> NullValidity {
        self.null_validity
    }

    /// Full argument list for a failure: static args then the violated value.
    pub(crate) fn violation_args(&self, violated: Arg) -> ArgVec {
        let mut args = ArgVec::with_capacity(self.args.len() + 1);
        args.extend(self.args.iter().cloned());
        args.push(violated);
        args
    }
}

impl<V: ?Sized> fmt::Debug for ConstraintPredicate<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintPredicate")
            .field("message", &self.message)
            .field("args", &self.args)
            .field("null_validity", &self.null_validity)
            .finish_non_exhaustive()
    }
}

/// A reusable user-defined rule.
///
/// # Examples
///
/// ```
/// use constraint_rail::prelude::*;
/// use constraint_rail::{Arg, ArgVec, CustomConstraint, ViolationMessage};
///
/// struct Even;
///
/// impl CustomConstraint<u32> for Even {
///     fn test(&self, value: &u32) -> bool {
///         value % 2 == 0
///     }
///
///     fn message(&self) -> ViolationMessage {
///         ViolationMessage::of("numeric.even", "\"{0}\" must be even but was {1}")
///     }
/// }
///
/// let validator = Validator::<u32>::builder()
///     .constraint("n", |n: &u32| n, |c| c.custom(Even))
///     .build();
///
/// assert_eq!(validator.validate(&3)[0].message(), "\"n\" must be even but was 3");
/// ```
pub trait CustomConstraint<V: ?Sized>: Send + Sync + 'static {
    fn test(&self, value: &V) -> bool;

    fn message(&self) -> ViolationMessage;

    /// Static arguments placed between the path and the violated value.
    fn args(&self) -> ArgVec {
        ArgVec::new()
    }
}
