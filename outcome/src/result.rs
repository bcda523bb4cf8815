use crate::NormalizedError;

/// Represents a success-or-failure pair where exactly one alternative is
/// populated.
///
/// # Remarks
///
/// The mutual-exclusion invariant is carried by the sum type itself rather
/// than by convention; a value holding both a success and an error is
/// unrepresentable. Every success value is valid, including `()`, `0`,
/// `false`, `""`, and `None`.
pub type Outcome<T, E = NormalizedError> = Result<T, E>;

/// Destructures a result into its Go-style two-slot form.
pub trait Parts<T, E> {
    /// Splits the result into `(value, error)` where exactly one side is
    /// [`Some`].
    fn parts(self) -> (Option<T>, Option<E>);
}

impl<T, E> Parts<T, E> for Result<T, E> {
    fn parts(self) -> (Option<T>, Option<E>) {
        match self {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        }
    }
}
