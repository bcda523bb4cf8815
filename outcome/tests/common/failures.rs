use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A typed failure with an extra field, used to verify subtype preservation.
#[derive(Error, Debug, PartialEq)]
#[error("brew refused: {code}")]
pub struct BrewError {
    pub code: u16,
}

impl BrewError {
    pub fn new(code: u16) -> Self {
        Self { code }
    }
}

/// A value whose serialization always fails, standing in for a payload the
/// serializer cannot encode.
pub struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("cannot serialize cyclic structure"))
    }
}
