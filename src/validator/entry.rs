//! Evaluation entries and the per-call context they report into.

use core::fmt::Write;

use crate::constraint::{ConstraintPredicate, Elements};
use crate::types::alloc_type::{Box, Cow, String, Vec};
use crate::types::{Arg, ArgVec, ConstraintViolation, MessageFormatter, ViolationMessage};
use crate::validator::{ConstraintCondition, ConstraintGroup, Validator};

/// Mutable state of one `validate` call: current path and collected violations.
pub(crate) struct EvalContext<'a> {
    path: String,
    separator: &'a str,
    groups: &'a [ConstraintGroup],
    formatter: &'a dyn MessageFormatter,
    fail_fast: bool,
    violations: Vec<ConstraintViolation>,
}

impl<'a> EvalContext<'a> {
    pub(crate) fn new(
        separator: &'a str,
        groups: &'a [ConstraintGroup],
        formatter: &'a dyn MessageFormatter,
        fail_fast: bool,
    ) -> Self {
        Self { path: String::new(), separator, groups, formatter, fail_fast, violations: Vec::new() }
    }

    /// `true` once fail-fast mode has recorded a violation.
    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        self.fail_fast && !self.violations.is_empty()
    }

    #[inline]
    pub(crate) fn groups(&self) -> &'a [ConstraintGroup] {
        self.groups
    }

    /// Runs `f` with `segment` appended to the path.
    pub(crate) fn scoped<R>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        let len = self.path.len();
        if !self.path.is_empty() && !segment.is_empty() {
            self.path.push_str(self.separator);
        }
        self.path.push_str(segment);
        let out = f(self);
        self.path.truncate(len);
        out
    }

    /// Runs `f` with `[index]` appended to the path.
    pub(crate) fn indexed<R>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        let len = self.path.len();
        // writing into a String cannot fail
        let _ = write!(self.path, "[{index}]");
        let out = f(self);
        self.path.truncate(len);
        out
    }

    pub(crate) fn report(&mut self, message: &ViolationMessage, args: ArgVec) {
        let violation = ConstraintViolation::new(self.path.as_str(), message, args, self.formatter);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            path = %violation.name(),
            key = %violation.message_key(),
            "constraint violated"
        );

        self.violations.push(violation);
    }

    /// Reports `message` with [`Arg::Null`] as the violated value.
    pub(crate) fn report_absent(&mut self, message: &ViolationMessage) {
        let mut args = ArgVec::new();
        args.push(Arg::Null);
        self.report(message, args);
    }

    pub(crate) fn report_not_null(&mut self) {
        self.report_absent(&ViolationMessage::OBJECT_NOT_NULL);
    }

    pub(crate) fn into_violations(self) -> Vec<ConstraintViolation> {
        self.violations
    }
}

/// One registered unit of a validator.
pub(crate) trait Evaluate<T>: Send + Sync {
    fn evaluate(&self, target: &T, ctx: &mut EvalContext<'_>);
}

pub(crate) type Entries<T> = Vec<Box<dyn Evaluate<T>>>;

/// Reads a possibly absent value out of the target.
pub(crate) trait Extract<T, V: ?Sized>: Send + Sync {
    fn extract<'a>(&self, target: &'a T) -> Option<&'a V>;
}

pub(crate) struct Required<F>(pub(crate) F);

pub(crate) struct Nullable<F>(pub(crate) F);

impl<T, V: ?Sized, F> Extract<T, V> for Required<F>
where
    F: Fn(&T) -> &V + Send + Sync,
{
    #[inline]
    fn extract<'a>(&self, target: &'a T) -> Option<&'a V> {
        Some((self.0)(target))
    }
}

impl<T, V: ?Sized, F> Extract<T, V> for Nullable<F>
where
    F: Fn(&T) -> Option<&V> + Send + Sync,
{
    #[inline]
    fn extract<'a>(&self, target: &'a T) -> Option<&'a V> {
        (self.0)(target)
    }
}

/// Rules applied to one named value.
pub(crate) struct FieldEntry<V: ?Sized, X> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) extract: X,
    pub(crate) predicates: Vec<ConstraintPredicate<V>>,
    pub(crate) required: bool,
}

impl<T, V, X> Evaluate<T> for FieldEntry<V, X>
where
    V: ?Sized + 'static,
    X: Extract<T, V>,
{
    fn evaluate(&self, target: &T, ctx: &mut EvalContext<'_>) {
        let value = self.extract.extract(target);
        ctx.scoped(&self.name, |ctx| {
            if value.is_none() && self.required {
                ctx.report_not_null();
                return;
            }
            for predicate in &self.predicates {
                if ctx.is_done() {
                    return;
                }
                if let Some(violated) = predicate.test(value) {
                    ctx.report(predicate.message(), predicate.violation_args(violated));
                }
            }
        });
    }
}

/// A rule over the whole target, reported under `name`.
pub(crate) struct TargetEntry<F> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) predicate: F,
    pub(crate) message: ViolationMessage,
}

impl<T, F> Evaluate<T> for TargetEntry<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn evaluate(&self, target: &T, ctx: &mut EvalContext<'_>) {
        if !(self.predicate)(target) {
            ctx.scoped(&self.name, |ctx| ctx.report_absent(&self.message));
        }
    }
}

/// A nested validator applied to one extracted value.
pub(crate) struct NestedEntry<N, X> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) extract: X,
    pub(crate) validator: Validator<N>,
    pub(crate) required: bool,
}

impl<T, N, X> Evaluate<T> for NestedEntry<N, X>
where
    N: 'static,
    X: Extract<T, N>,
{
    fn evaluate(&self, target: &T, ctx: &mut EvalContext<'_>) {
        match self.extract.extract(target) {
            Some(nested) => ctx.scoped(&self.name, |ctx| self.validator.evaluate_in(nested, ctx)),
            None if self.required => ctx.scoped(&self.name, EvalContext::report_not_null),
            None => {},
        }
    }
}

/// An element validator applied to every element of an extracted container.
pub(crate) struct ForEachEntry<C: ?Sized + Elements, X> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) extract: X,
    pub(crate) validator: Validator<C::Element>,
    pub(crate) required: bool,
}

impl<T, C, X> Evaluate<T> for ForEachEntry<C, X>
where
    C: ?Sized + Elements + 'static,
    C::Element: 'static,
    X: Extract<T, C>,
{
    fn evaluate(&self, target: &T, ctx: &mut EvalContext<'_>) {
        match self.extract.extract(target) {
            Some(container) => ctx.scoped(&self.name, |ctx| {
                for (index, element) in container.elements().enumerate() {
                    if ctx.is_done() {
                        return;
                    }
                    ctx.indexed(index, |ctx| self.validator.evaluate_in(element, ctx));
                }
            }),
            None if self.required => ctx.scoped(&self.name, EvalContext::report_not_null),
            None => {},
        }
    }
}

/// Entries that run only when the condition holds for an active group.
pub(crate) struct ConditionalEntry<T> {
    pub(crate) condition: ConstraintCondition<T>,
    pub(crate) entries: Entries<T>,
}

impl<T> Evaluate<T> for ConditionalEntry<T> {
    fn evaluate(&self, target: &T, ctx: &mut EvalContext<'_>) {
        if self.condition.test_any(target, ctx.groups()) {
            for entry in &self.entries {
                if ctx.is_done() {
                    return;
                }
                entry.evaluate(target, ctx);
            }
        }
    }
}
