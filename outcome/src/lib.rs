mod deferred;
mod dispatch;
mod error;
mod normalize;
mod result;
mod sync;

pub use deferred::run_async;
pub use dispatch::{run, Computation, Dispatched};
pub use error::NormalizedError;
pub use normalize::normalize_error;
pub use result::{Outcome, Parts};
pub use sync::run_sync;
