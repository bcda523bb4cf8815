use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// Represents the canonical form of an arbitrary failure value.
///
/// # Remarks
///
/// A normalized error always carries a human-readable message, may chain to an
/// underlying cause through [`Error::source`], and records a
/// [backtrace](Backtrace) captured at the moment the failure was observed.
/// Capture honors the standard `RUST_BACKTRACE` and `RUST_LIB_BACKTRACE`
/// environment variables.
///
/// When the failure was already error-like, the original value is retained as
/// the source, so its concrete type and any extra fields remain reachable with
/// [`Error::source`] and [`downcast_ref`](Error::downcast_ref).
pub struct NormalizedError {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
    backtrace: Backtrace,
}

impl NormalizedError {
    /// Initializes a new [`NormalizedError`] with no underlying cause.
    ///
    /// # Arguments
    ///
    /// * `message` - the human-readable failure message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
            backtrace: Backtrace::capture(),
        }
    }

    /// Initializes a new [`NormalizedError`] chained to an underlying cause.
    ///
    /// # Arguments
    ///
    /// * `message` - the human-readable failure message
    /// * `source` - the underlying [cause](Error)
    pub fn caused_by(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
            backtrace: Backtrace::capture(),
        }
    }

    /// Initializes a new [`NormalizedError`] from an already error-like
    /// failure, taking its message from the source's [`Display`] form and
    /// retaining the source itself for downcasting.
    ///
    /// # Arguments
    ///
    /// * `source` - the original [error](Error) value
    pub fn passthrough(source: Box<dyn Error + Send + Sync>) -> Self {
        Self {
            message: source.to_string(),
            source: Some(source),
            backtrace: Backtrace::capture(),
        }
    }

    /// Gets the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the [backtrace](Backtrace) captured when the failure was observed.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

#[cfg(feature = "json")]
impl NormalizedError {
    /// Initializes a new [`NormalizedError`] whose message is the compact
    /// structural text of the specified value, with key order following the
    /// value's own iteration order.
    ///
    /// # Arguments
    ///
    /// * `value` - the structured value to [serialize](serde::Serialize)
    ///
    /// # Remarks
    ///
    /// If serialization itself fails, the message is the serializer's own
    /// failure text rather than a generic placeholder.
    pub fn from_serialize<S: serde::Serialize>(value: &S) -> Self {
        match serde_json::to_string(value) {
            Ok(text) => Self::new(text),
            Err(error) => Self::new(error.to_string()),
        }
    }
}

impl Display for NormalizedError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Debug for NormalizedError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NormalizedError")
            .field("message", &self.message)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl Error for NormalizedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn Error + 'static))
    }
}

impl From<String> for NormalizedError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for NormalizedError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
