use crate::types::ErrorVec;
use crate::validation::core::Validation;

/// Borrowing iterator over the success value (zero or one item).
#[derive(Debug, Clone)]
pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

#[derive(Debug)]
pub struct IterMut<'a, A> {
    inner: Option<&'a mut A>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

#[derive(Debug, Clone)]
pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<E, A> IntoIterator for Validation<E, A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, E, A> IntoIterator for &'a Validation<E, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E, A> IntoIterator for &'a mut Validation<E, A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<E, A> Validation<E, A> {
    pub fn iter(&self) -> Iter<'_, A> {
        Iter { inner: self.value() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        match self {
            Validation::Valid(a) => IterMut { inner: Some(a) },
            Validation::Invalid(_) => IterMut { inner: None },
        }
    }

    /// Iterates the errors in order; empty when valid.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        self.errors().iter()
    }

    pub fn iter_errors_mut(&mut self) -> core::slice::IterMut<'_, E> {
        match self {
            Validation::Valid(_) => Default::default(),
            Validation::Invalid(errors) => errors.iter_mut(),
        }
    }
}

/// Collects values, accumulating the errors of every invalid item.
///
/// # Examples
///
/// ```
/// use constraint_rail::validation::Validation;
///
/// let items = vec![Validation::valid(1), Validation::invalid("a"), Validation::invalid("b")];
/// let collected: Validation<&str, Vec<i32>> = items.into_iter().collect();
/// assert_eq!(collected.errors(), ["a", "b"]);
/// ```
impl<E, A, C> FromIterator<Validation<E, A>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        let mut errors = ErrorVec::new();
        let values: C = iter
            .into_iter()
            .filter_map(|item| match item {
                Validation::Valid(value) => Some(value),
                Validation::Invalid(errs) => {
                    errors.extend(errs);
                    None
                },
            })
            .collect();

        if errors.is_empty() {
            Validation::Valid(values)
        } else {
            Validation::Invalid(errors)
        }
    }
}

impl<E, A, C> FromIterator<Result<A, E>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        iter.into_iter().map(Validation::from_result).collect()
    }
}
