//! Error type for vocabulary lookups.

use thiserror::Error;

/// A string did not name any member of a fixed vocabulary.
///
/// Returned by the `FromStr` implementations of [`Instrument`](crate::instrument::Instrument),
/// [`DataLevel`](crate::data_level::DataLevel), [`FileExtension`](crate::extension::FileExtension)
/// and [`Version`](crate::version::Version).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {vocabulary} `{value}`")]
pub struct UnknownValueError {
    vocabulary: &'static str,
    value: String,
}

impl UnknownValueError {
    /// Create a new error for `value` which is not part of `vocabulary`.
    pub fn new(vocabulary: &'static str, value: impl Into<String>) -> Self {
        Self {
            vocabulary,
            value: value.into(),
        }
    }

    /// Name of the vocabulary that was searched (e.g. `"instrument"`).
    pub fn vocabulary(&self) -> &'static str {
        self.vocabulary
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }
}
