//! Async adapters for `Validation`.

use core::future::Future;

use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;
use crate::validation::Validation;

impl<E, A> Validation<E, A> {
    /// Async [`fold`](Validation::fold).
    pub async fn await_fold<U, FE, FA, FutE, FutA>(self, errors_mapper: FE, value_mapper: FA) -> U
    where
        FE: FnOnce(ErrorVec<E>) -> FutE,
        FutE: Future<Output = U>,
        FA: FnOnce(A) -> FutA,
        FutA: Future<Output = U>,
    {
        match self {
            Self::Valid(value) => value_mapper(value).await,
            Self::Invalid(errors) => errors_mapper(errors).await,
        }
    }

    /// Async [`bimap`](Validation::bimap).
    pub async fn await_bimap<G, B, I, FE, FA, FutE, FutA>(
        self,
        errors_mapper: FE,
        value_mapper: FA,
    ) -> Validation<G, B>
    where
        FE: FnOnce(ErrorVec<E>) -> FutE,
        FutE: Future<Output = I>,
        I: IntoIterator<Item = G>,
        FA: FnOnce(A) -> FutA,
        FutA: Future<Output = B>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value_mapper(value).await),
            Self::Invalid(errors) => Validation::invalid_many(errors_mapper(errors).await),
        }
    }

    /// Async [`map`](Validation::map); errors pass through untouched.
    pub async fn await_map<B, F, Fut>(self, mapper: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(mapper(value).await),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Async [`map_err`](Validation::map_err): maps each error in order, one at a time.
    pub async fn await_map_error<G, F, Fut>(self, mut mapper: F) -> Validation<G, A>
    where
        F: FnMut(E) -> Fut,
        Fut: Future<Output = G>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => {
                let mut mapped = ErrorVec::with_capacity(errors.len());
                for error in errors {
                    mapped.push(mapper(error).await);
                }
                Validation::Invalid(mapped)
            },
        }
    }

    /// Async [`map_errors`](Validation::map_errors): maps the whole error list.
    pub async fn await_map_errors<G, I, F, Fut>(self, mapper: F) -> Validation<G, A>
    where
        F: FnOnce(ErrorVec<E>) -> Fut,
        Fut: Future<Output = I>,
        I: IntoIterator<Item = G>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::invalid_many(mapper(errors).await),
        }
    }
}

/// Awaits several validation futures in order and accumulates every error.
///
/// Futures are awaited sequentially to stay runtime-neutral.
///
/// # Example
///
/// ```
/// use constraint_rail::async_ext::validate_all_async;
/// use constraint_rail::validation::Validation;
///
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let result = rt.block_on(validate_all_async((1..=3).map(|n| async move {
///     if n == 1 {
///         Validation::<u32, u32>::valid(n)
///     } else {
///         Validation::invalid(n)
///     }
/// })));
/// assert_eq!(result.errors(), &[2, 3]);
/// ```
pub async fn validate_all_async<T, E, Fut, I>(validations: I) -> Validation<E, Vec<T>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Validation<E, T>>,
{
    let iter = validations.into_iter();
    let (lower, upper) = iter.size_hint();

    let mut values = Vec::with_capacity(upper.unwrap_or(lower));
    let mut errors: ErrorVec<E> = ErrorVec::new();

    for fut in iter {
        match fut.await {
            Validation::Valid(v) => values.push(v),
            Validation::Invalid(errs) => errors.extend(errs),
        }
    }

    if errors.is_empty() {
        Validation::Valid(values)
    } else {
        Validation::Invalid(errors)
    }
}

/// Threads a value through async validation steps, stopping at the first invalid one.
pub async fn validate_seq_async<T, E, F, Fut>(
    initial: T,
    steps: impl IntoIterator<Item = F>,
) -> Validation<E, T>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Validation<E, T>>,
{
    let mut current = initial;

    for step in steps {
        match step(current).await {
            Validation::Valid(v) => current = v,
            invalid => return invalid,
        }
    }

    Validation::Valid(current)
}
