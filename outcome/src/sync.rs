use crate::{normalize_error, Outcome};
use std::panic::{self, AssertUnwindSafe};

/// Runs a computation immediately, converting any panic into a failed
/// [`Outcome`].
///
/// # Arguments
///
/// * `compute` - the zero-argument computation to run
///
/// # Remarks
///
/// The computation runs exactly once, on the calling thread, before this
/// function returns; any value it yields is a success, including `()` and
/// other empty values. A panic is caught and its payload routed through
/// [`normalize_error`](crate::normalize_error). The single-execution contract
/// is what makes the internal [`AssertUnwindSafe`] sound: the computation is
/// consumed and cannot be re-observed in a broken state.
///
/// Panics that abort rather than unwind (`panic = "abort"`) cannot be caught.
pub fn run_sync<T, F>(compute: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(compute)).map_err(normalize_error)
}
