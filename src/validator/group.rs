use core::fmt;

use crate::types::alloc_type::{Arc, Cow};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named tag selecting which conditional blocks run in one `validate` call.
///
/// Groups are compared by name. The built-in groups carry no special behavior;
/// [`ConstraintGroup::DEFAULT`] is the group in effect when none is supplied.
///
/// # Examples
///
/// ```
/// use constraint_rail::ConstraintGroup;
///
/// let admin = ConstraintGroup::of("ADMIN");
/// assert_eq!(admin.name(), "ADMIN");
/// assert_ne!(admin, ConstraintGroup::DEFAULT);
/// assert!(admin.to_condition::<()>().test(&(), &ConstraintGroup::of("ADMIN")));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintGroup {
    name: Cow<'static, str>,
}

impl ConstraintGroup {
    pub const DEFAULT: Self = Self::of_static("DEFAULT");
    pub const CREATE: Self = Self::of_static("CREATE");
    pub const UPDATE: Self = Self::of_static("UPDATE");
    pub const DELETE: Self = Self::of_static("DELETE");

    #[must_use]
    #[inline]
    pub const fn of_static(name: &'static str) -> Self {
        Self { name: Cow::Borrowed(name) }
    }

    #[must_use]
    #[inline]
    pub fn of(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A condition holding exactly when the active group has this group's name.
    #[must_use]
    pub fn to_condition<T: 'static>(&self) -> ConstraintCondition<T> {
        let group = self.clone();
        ConstraintCondition::new(move |_: &T, active: &ConstraintGroup| active.name == group.name)
    }
}

impl fmt::Display for ConstraintGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

type ConditionFn<T> = dyn Fn(&T, &ConstraintGroup) -> bool + Send + Sync;

/// A predicate over the target and one active group.
///
/// A conditional block runs when its condition holds for *any* of the groups
/// passed to `validate`.
pub struct ConstraintCondition<T> {
    test: Arc<ConditionFn<T>>,
}

impl<T> ConstraintCondition<T> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T, &ConstraintGroup) -> bool + Send + Sync + 'static,
    {
        Self { test: Arc::new(test) }
    }

    #[must_use]
    #[inline]
    pub fn test(&self, target: &T, group: &ConstraintGroup) -> bool {
        (self.test)(target, group)
    }

    /// Holds when the condition holds for any of `groups`.
    #[must_use]
    pub fn test_any(&self, target: &T, groups: &[ConstraintGroup]) -> bool {
        groups.iter().any(|group| self.test(target, group))
    }
}

impl<T: 'static> ConstraintCondition<T> {
    /// A condition on the target alone, ignoring the active groups.
    pub fn when<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(move |target: &T, _: &ConstraintGroup| test(target))
    }

    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |t: &T, g: &ConstraintGroup| self.test(t, g) && other.test(t, g))
    }

    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |t: &T, g: &ConstraintGroup| self.test(t, g) || other.test(t, g))
    }
}

impl<T> Clone for ConstraintCondition<T> {
    fn clone(&self) -> Self {
        Self { test: Arc::clone(&self.test) }
    }
}

impl<T> fmt::Debug for ConstraintCondition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintCondition").finish_non_exhaustive()
    }
}

impl<T: 'static> From<ConstraintGroup> for ConstraintCondition<T> {
    fn from(group: ConstraintGroup) -> Self {
        group.to_condition()
    }
}
