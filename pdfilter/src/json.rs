//! `PersonalData` for dynamically typed JSON values.
//!
//! Objects follow the map rule (a string under a personal key becomes the
//! mask), arrays are rebuilt element by element, strings are filtered, and
//! numbers, booleans and `null` are kept.

use serde_json::{Map, Value};

use crate::traversal::{filter_named, walk, FilterMapper, PersonalData};

impl PersonalData for Value {
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        match self {
            Self::String(text) => Self::String(mapper.filter_text(text)),
            Self::Array(values) => Self::Array(values.iter().map(|value| walk(value, mapper)).collect()),
            Self::Object(map) => Self::Object(map.filter_with(mapper)),
            Self::Null | Self::Bool(_) | Self::Number(_) => self.clone(),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(value) => !value,
            Self::Number(number) => {
                number.as_u64() == Some(0) || number.as_i64() == Some(0) || is_zero_float(number.as_f64())
            }
            Self::String(text) => text.is_empty(),
            Self::Array(values) => values.is_empty(),
            Self::Object(map) => map.is_empty(),
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn mask_text(&self, mask: &str) -> Option<Self> {
        self.is_string().then(|| Self::String(mask.to_owned()))
    }
}

#[allow(clippy::float_cmp)]
fn is_zero_float(value: Option<f64>) -> bool {
    value == Some(0.0)
}

impl PersonalData for Map<String, Value> {
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), filter_named(value, key, mapper)))
            .collect()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
