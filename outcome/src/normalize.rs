use crate::NormalizedError;
#[cfg(any(feature = "json", feature = "regex"))]
use cfg_if::cfg_if;
use std::any::Any;
use std::error::Error;

// How the standard panic handler renders a payload it cannot print.
const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

macro_rules! stringify_payload {
    ($raw:ident, $($type:ty),+ $(,)?) => {
        $(
            if let Some(value) = $raw.downcast_ref::<$type>() {
                return NormalizedError::new(value.to_string());
            }
        )+
    };
}

/// Converts an arbitrary panic payload into a [`NormalizedError`].
///
/// # Arguments
///
/// * `raw` - the payload recovered from an unwound panic
///
/// # Remarks
///
/// Normalization is total: it never panics and never fails, whatever the
/// payload's shape. Classification runs in priority order:
///
/// 1. A [`NormalizedError`] payload is returned unchanged. A boxed
///    [error](Error) trait object is passed through with its concrete type
///    and extra fields preserved as the [source](Error::source).
/// 2. A [pattern](regex::Regex) payload yields the pattern's textual form
///    *(requires the `regex` feature)*.
/// 3. A structured [value](serde_json::Value) payload yields its compact
///    structural text, key order preserved; if serialization itself fails,
///    the message is the serializer's own failure text *(requires the `json`
///    feature)*.
/// 4. A primitive payload (string, integer of any width, float, boolean, or
///    character) yields its default textual conversion.
/// 5. Anything else yields the opaque-payload fallback text, matching the
///    standard panic handler's rendering.
pub fn normalize_error(raw: Box<dyn Any + Send>) -> NormalizedError {
    let raw = match raw.downcast::<NormalizedError>() {
        Ok(error) => return *error,
        Err(raw) => raw,
    };
    let raw = match raw.downcast::<Box<dyn Error + Send + Sync>>() {
        Ok(error) => return NormalizedError::passthrough(*error),
        Err(raw) => raw,
    };

    cfg_if! {
        if #[cfg(feature = "regex")] {
            let raw = match raw.downcast::<regex::Regex>() {
                Ok(pattern) => return NormalizedError::new(pattern.as_str()),
                Err(raw) => raw,
            };
        }
    }

    cfg_if! {
        if #[cfg(feature = "json")] {
            let raw = match raw.downcast::<serde_json::Value>() {
                Ok(value) => return NormalizedError::from_serialize(&*value),
                Err(raw) => raw,
            };
        }
    }

    stringify_payload!(
        raw, &str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
        f64, bool, char,
    );

    NormalizedError::new(OPAQUE_PAYLOAD)
}
