use crate::{normalize_error, Outcome};
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Awaits a deferred computation, converting any panic during polling into a
/// failed [`Outcome`].
///
/// # Arguments
///
/// * `future` - the deferred computation to await
///
/// # Remarks
///
/// The caller is suspended until the future settles; settlement to any value
/// is a success, including `()` and other empty values, while a panic is
/// caught and its payload routed through
/// [`normalize_error`](crate::normalize_error). No concurrency is introduced:
/// the future is only observed, not spawned. There is no timeout or
/// cancellation; if the future never settles, neither does the returned one,
/// and callers needing a deadline must race the result against their own
/// timer.
pub async fn run_async<T, Fut>(future: Fut) -> Outcome<T>
where
    Fut: Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(normalize_error)
}
