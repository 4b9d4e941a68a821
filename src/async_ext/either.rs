use core::future::Future;

use crate::either::Either;

impl<L, R> Either<L, R> {
    /// Async [`bimap`](Either::bimap): awaits the mapper of the active branch only.
    pub async fn await_bimap<L2, R2, FL, FR, FutL, FutR>(
        self,
        left_mapper: FL,
        right_mapper: FR,
    ) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> FutL,
        FutL: Future<Output = L2>,
        FR: FnOnce(R) -> FutR,
        FutR: Future<Output = R2>,
    {
        match self {
            Self::Left(l) => Either::Left(left_mapper(l).await),
            Self::Right(r) => Either::Right(right_mapper(r).await),
        }
    }

    /// Async [`fold`](Either::fold).
    pub async fn await_fold<U, FL, FR, FutL, FutR>(self, left_mapper: FL, right_mapper: FR) -> U
    where
        FL: FnOnce(L) -> FutL,
        FutL: Future<Output = U>,
        FR: FnOnce(R) -> FutR,
        FutR: Future<Output = U>,
    {
        match self {
            Self::Left(l) => left_mapper(l).await,
            Self::Right(r) => right_mapper(r).await,
        }
    }

    pub async fn await_left_map<L2, F, Fut>(self, mapper: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = L2>,
    {
        match self {
            Self::Left(l) => Either::Left(mapper(l).await),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub async fn await_right_map<R2, F, Fut>(self, mapper: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = R2>,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(mapper(r).await),
        }
    }
}
