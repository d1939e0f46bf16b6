//! Adapters for emitting filtered values through `slog`.
//!
//! This module connects [`PersonalData`] with `slog` by providing a
//! `slog::Value` that serializes the filtered value as structured JSON via
//! `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation comes from
//!   [`PersonalDataFilter::remove_personal_data`], not from the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or build filters.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{filter::PersonalDataFilter, traversal::PersonalData};

/// Logged in place of a filtered value that could not be converted to JSON.
pub const SERIALIZATION_FAILED: &str = "Failed to serialize filtered value";

/// A `slog::Value` that emits an owned filtered payload as structured JSON.
///
/// If converting the filtered output into a JSON value fails, this holds a
/// JSON string with [`SERIALIZATION_FAILED`] instead.
#[derive(Debug, Clone)]
pub struct FilteredJson {
    value: JsonValue,
}

impl FilteredJson {
    /// The JSON that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for FilteredJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their filtered form as JSON.
///
/// ## Example
/// ```ignore
/// use pdfilter::slog::ToFilteredJson;
///
/// info!(logger, "signup"; "request" => request.to_filtered_json(&filter));
/// ```
pub trait ToFilteredJson: PersonalData + Serialize {
    /// Filters `self` and returns a `slog::Value` that serializes as structured JSON.
    ///
    /// The original value is left untouched and is never serialized.
    fn to_filtered_json(&self, filter: &PersonalDataFilter) -> FilteredJson {
        let filtered = filter.remove_personal_data(self);
        let value = serde_json::to_value(filtered)
            .unwrap_or_else(|_| JsonValue::String(SERIALIZATION_FAILED.to_string()));
        FilteredJson { value }
    }
}

impl<T> ToFilteredJson for T where T: PersonalData + Serialize {}
