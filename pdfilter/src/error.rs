//! Configuration errors reported by [`crate::PersonalDataFilterBuilder::build`].

use thiserror::Error;

/// Result type alias for filter construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a filter.
///
/// Filtering itself never fails; every error here is raised by `build`.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A whole-replacement pattern and additional patterns were both requested.
    #[error("can't use `pattern` and `add_patterns` at the same time")]
    ConflictingPatterns,

    /// A whole-replacement name list and additional names were both requested.
    #[error("can't use `personal_data_names` and `add_personal_data_names` at the same time")]
    ConflictingPersonalDataNames,

    /// An additional pattern fragment did not compile.
    #[error("invalid detection pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
