//! Size and element access for strings, sequences, sets, and maps.

use crate::constraint::kind::{CharSequenceKind, CollectionKind, MapKind};
use crate::constraint::{Constrainable, Constraint, ConstraintPredicate, NullValidity};
use crate::types::alloc_type::{BTreeMap, BTreeSet, Box, Cow, String, Vec, VecDeque};
use crate::types::{Arg, ViolationMessage};

#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};
#[cfg(feature = "std")]
use std::hash::{BuildHasher, Hash};

/// Values with a size: Unicode scalar count for strings, element count otherwise.
pub trait Size {
    fn size(&self) -> usize;
}

/// Containers whose elements can be walked by reference.
///
/// Maps yield their values in iteration order; keys are never visited.
pub trait Elements {
    type Element;
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    fn elements(&self) -> Self::Iter<'_>;
}

/// Maps that can answer key membership.
pub trait Keyed: Elements {
    type Key;

    fn has_key(&self, key: &Self::Key) -> bool;
}

impl Size for str {
    #[inline]
    fn size(&self) -> usize {
        self.chars().count()
    }
}

macro_rules! impl_char_sequence {
    ($($ty:ty),*) => {
        $(
            impl Size for $ty {
                #[inline]
                fn size(&self) -> usize {
                    <str as Size>::size(self)
                }
            }

            impl Constrainable for $ty {
                type Kind = CharSequenceKind;

                fn to_arg(&self) -> Arg {
                    Arg::from(AsRef::<str>::as_ref(self))
                }
            }
        )*
    };
}

impl_char_sequence!(String, Box<str>, Cow<'_, str>);

impl Constrainable for str {
    type Kind = CharSequenceKind;

    fn to_arg(&self) -> Arg {
        Arg::from(self)
    }
}

macro_rules! impl_collection {
    ($kind:ty; $([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Size for $ty {
                #[inline]
                fn size(&self) -> usize {
                    self.len()
                }
            }

            impl<$($gen)*> Constrainable for $ty {
                type Kind = $kind;

                fn to_arg(&self) -> Arg {
                    Arg::from(self.len())
                }
            }
        )*
    };
}

impl_collection!(CollectionKind;
    [E] [E],
    [E] Vec<E>,
    [E, const N: usize] [E; N],
    [E] VecDeque<E>,
    [E] BTreeSet<E>,
);
impl_collection!(MapKind; [K, V] BTreeMap<K, V>);

#[cfg(feature = "std")]
impl_collection!(CollectionKind; [E, S] HashSet<E, S>);
#[cfg(feature = "std")]
impl_collection!(MapKind; [K, V, S] HashMap<K, V, S>);

impl<E> Elements for [E] {
    type Element = E;
    type Iter<'a> = core::slice::Iter<'a, E> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<E> Elements for Vec<E> {
    type Element = E;
    type Iter<'a> = core::slice::Iter<'a, E> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<E, const N: usize> Elements for [E; N] {
    type Element = E;
    type Iter<'a> = core::slice::Iter<'a, E> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<E> Elements for VecDeque<E> {
    type Element = E;
    type Iter<'a> = alloc::collections::vec_deque::Iter<'a, E> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<E> Elements for BTreeSet<E> {
    type Element = E;
    type Iter<'a> = alloc::collections::btree_set::Iter<'a, E> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<K, V> Elements for BTreeMap<K, V> {
    type Element = V;
    type Iter<'a> = alloc::collections::btree_map::Values<'a, K, V> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.values()
    }
}

impl<K: Ord, V> Keyed for BTreeMap<K, V> {
    type Key = K;

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

#[cfg(feature = "std")]
impl<E, S> Elements for HashSet<E, S> {
    type Element = E;
    type Iter<'a> = std::collections::hash_set::Iter<'a, E> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Elements for HashMap<K, V, S> {
    type Element = V;
    type Iter<'a> = std::collections::hash_map::Values<'a, K, V> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.values()
    }
}

#[cfg(feature = "std")]
impl<K: Eq + Hash, V, S: BuildHasher> Keyed for HashMap<K, V, S> {
    type Key = K;

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

fn size_rule<V, S>(
    sizer: S,
    message: ViolationMessage,
    bound: usize,
    accept: fn(usize, usize) -> bool,
) -> ConstraintPredicate<V>
where
    V: ?Sized + 'static,
    S: Fn(&V) -> usize + Copy + Send + Sync + 'static,
{
    ConstraintPredicate::of(
        move |v: &V| accept(sizer(v), bound),
        message,
        move |v: &V| Arg::from(sizer(v)),
    )
    .with_args([bound])
}

impl<V: ?Sized + Size + 'static> Constraint<V, CollectionKind> {
    #[inline]
    fn sizer(&self) -> fn(&V) -> usize {
        <V as Size>::size
    }
}

impl<V: ?Sized + Size + 'static> Constraint<V, MapKind> {
    #[inline]
    fn sizer(&self) -> fn(&V) -> usize {
        <V as Size>::size
    }
}

impl<V: ?Sized + AsRef<str> + 'static> Constraint<V, CharSequenceKind> {
    #[inline]
    fn sizer(&self) -> impl Fn(&V) -> usize + Copy + Send + Sync + 'static {
        let text = self.text;
        move |v: &V| text.measure(v.as_ref())
    }
}

macro_rules! size_rules {
    ($($kind:ty => [$($bound:tt)*]),* $(,)?) => {
        $(
            impl<V: ?Sized + $($bound)* + 'static> Constraint<V, $kind> {
                /// Fails when the value is absent or has size zero (`container.notEmpty`).
                #[must_use]
                pub fn not_empty(self) -> Self {
                    let to_arg = self.violated_value();
                    let sizer = self.sizer();
                    self.push(ConstraintPredicate::nullable(
                        move |v: Option<&V>| v.is_some_and(|v| sizer(v) != 0),
                        ViolationMessage::CONTAINER_NOT_EMPTY,
                        to_arg,
                        NullValidity::NullIsInvalid,
                    ))
                }

                /// Requires `size < max`.
                #[must_use]
                pub fn less_than(self, max: usize) -> Self {
                    let rule =
                        size_rule(self.sizer(), ViolationMessage::CONTAINER_LESS_THAN, max, |s, b| s < b);
                    self.push(rule)
                }

                /// Requires `size <= max`.
                #[must_use]
                pub fn less_than_or_equal(self, max: usize) -> Self {
                    let rule = size_rule(
                        self.sizer(),
                        ViolationMessage::CONTAINER_LESS_THAN_OR_EQUAL,
                        max,
                        |s, b| s <= b,
                    );
                    self.push(rule)
                }

                /// Requires `size > min`.
                #[must_use]
                pub fn greater_than(self, min: usize) -> Self {
                    let rule = size_rule(
                        self.sizer(),
                        ViolationMessage::CONTAINER_GREATER_THAN,
                        min,
                        |s, b| s > b,
                    );
                    self.push(rule)
                }

                /// Requires `size >= min`.
                #[must_use]
                pub fn greater_than_or_equal(self, min: usize) -> Self {
                    let rule = size_rule(
                        self.sizer(),
                        ViolationMessage::CONTAINER_GREATER_THAN_OR_EQUAL,
                        min,
                        |s, b| s >= b,
                    );
                    self.push(rule)
                }

                /// Requires `size == size`.
                #[must_use]
                pub fn fixed_size(self, size: usize) -> Self {
                    let rule =
                        size_rule(self.sizer(), ViolationMessage::CONTAINER_FIXED_SIZE, size, |s, b| s == b);
                    self.push(rule)
                }
            }
        )*
    };
}

size_rules!(
    CharSequenceKind => [AsRef<str>],
    CollectionKind => [Size],
    MapKind => [Size],
);

impl<V> Constraint<V, CollectionKind>
where
    V: ?Sized + Elements + 'static,
{
    /// Requires at least one element equal to `element` (`collection.contains`).
    #[must_use]
    pub fn contains(self, element: V::Element) -> Self
    where
        V::Element: PartialEq + Clone + Into<Arg> + Send + Sync + 'static,
    {
        let arg: Arg = element.clone().into();
        let to_arg = self.violated_value();
        self.push(
            ConstraintPredicate::of(
                move |v: &V| v.elements().any(|e| *e == element),
                ViolationMessage::COLLECTION_CONTAINS,
                to_arg,
            )
            .with_args([arg]),
        )
    }
}

impl<V> Constraint<V, MapKind>
where
    V: ?Sized + Keyed + 'static,
{
    /// Requires `key` to be present (`map.containsKey`).
    #[must_use]
    pub fn contains_key(self, key: V::Key) -> Self
    where
        V::Key: Clone + Into<Arg> + Send + Sync + 'static,
    {
        let arg: Arg = key.clone().into();
        let to_arg = self.violated_value();
        self.push(
            ConstraintPredicate::of(
                move |v: &V| v.has_key(&key),
                ViolationMessage::MAP_CONTAINS_KEY,
                to_arg,
            )
            .with_args([arg]),
        )
    }

    /// Requires some entry to hold `value` (`map.containsValue`).
    #[must_use]
    pub fn contains_value(self, value: V::Element) -> Self
    where
        V::Element: PartialEq + Clone + Into<Arg> + Send + Sync + 'static,
    {
        let arg: Arg = value.clone().into();
        let to_arg = self.violated_value();
        self.push(
            ConstraintPredicate::of(
                move |v: &V| v.elements().any(|e| *e == value),
                ViolationMessage::MAP_CONTAINS_VALUE,
                to_arg,
            )
            .with_args([arg]),
        )
    }
}
