use crate::{run_async, run_sync, Outcome};
use futures::future::Ready;
use std::future::Future;

/// Represents a computation whose wrapping strategy the caller tags
/// explicitly.
///
/// # Remarks
///
/// The two variants are the two static shapes [`run`] accepts; the
/// [`call`](Computation::call) and [`defer`](Computation::defer) constructors
/// pin the unused type parameter so callers never have to name it.
pub enum Computation<F, Fut> {
    /// A zero-argument computation to run immediately.
    Call(F),
    /// A deferred computation to await.
    Defer(Fut),
}

impl<T, F: FnOnce() -> T> Computation<F, Ready<T>> {
    /// Tags a zero-argument computation for immediate wrapping.
    ///
    /// # Arguments
    ///
    /// * `compute` - the computation to run
    pub fn call(compute: F) -> Self {
        Self::Call(compute)
    }
}

impl<T, Fut: Future<Output = T>> Computation<fn() -> T, Fut> {
    /// Tags a deferred computation for awaited wrapping.
    ///
    /// # Arguments
    ///
    /// * `future` - the deferred computation to await
    pub fn defer(future: Fut) -> Self {
        Self::Defer(future)
    }
}

/// Represents the result of dispatching a [`Computation`]: either an
/// [`Outcome`] produced synchronously or a future that settles to one.
pub enum Dispatched<T, Fut> {
    /// The outcome was produced synchronously, with no future involved.
    Ready(Outcome<T>),
    /// The outcome settles later, when the wrapped future completes.
    Pending(Fut),
}

impl<T, Fut: Future<Output = Outcome<T>>> Dispatched<T, Fut> {
    /// Indicates whether the outcome was produced synchronously.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Gets the synchronously produced [`Outcome`], if there is one.
    pub fn ready(self) -> Option<Outcome<T>> {
        match self {
            Self::Ready(outcome) => Some(outcome),
            Self::Pending(_) => None,
        }
    }

    /// Resolves to the final [`Outcome`], awaiting the wrapped future when
    /// necessary.
    pub async fn settle(self) -> Outcome<T> {
        match self {
            Self::Ready(outcome) => outcome,
            Self::Pending(future) => future.await,
        }
    }
}

/// Routes a tagged [`Computation`] to the immediate or deferred wrapper.
///
/// # Arguments
///
/// * `computation` - the tagged computation to dispatch
///
/// # Remarks
///
/// Exactly one runtime check happens here: the variant match. A
/// [`Call`](Computation::Call) is executed through
/// [`run_sync`](crate::run_sync) before this function returns and comes back
/// as [`Dispatched::Ready`]; a [`Defer`](Computation::Defer) comes back as
/// [`Dispatched::Pending`] wrapping [`run_async`](crate::run_async).
pub fn run<T, F, Fut>(
    computation: Computation<F, Fut>,
) -> Dispatched<T, impl Future<Output = Outcome<T>>>
where
    F: FnOnce() -> T,
    Fut: Future<Output = T>,
{
    match computation {
        Computation::Call(compute) => Dispatched::Ready(run_sync(compute)),
        Computation::Defer(future) => Dispatched::Pending(run_async(future)),
    }
}
