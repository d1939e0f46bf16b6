//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `to_filtered_json()` produces filtered JSON values
//! - The `slog::Value` implementation works with slog's serialization API
//! - Serialization failures are logged as a placeholder string

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use pdfilter::{
    slog::{ToFilteredJson, SERIALIZATION_FAILED},
    PersonalData, PersonalDataFilter,
};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Other,
    // For nested serde values, we capture the JSON representation
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }

    fn insert(&self, key: slog::Key, value: CapturedValue) -> slog::Result {
        self.captured.borrow_mut().insert(key.into(), value);
        Ok(())
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.insert(key, CapturedValue::Str(val.to_string()))
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.insert(key, CapturedValue::Str(val.into()))
    }

    fn emit_bool(&mut self, key: slog::Key, _val: bool) -> slog::Result {
        self.insert(key, CapturedValue::Other)
    }

    fn emit_unit(&mut self, key: slog::Key) -> slog::Result {
        self.insert(key, CapturedValue::Other)
    }

    fn emit_none(&mut self, key: slog::Key) -> slog::Result {
        self.insert(key, CapturedValue::Other)
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.insert(key, CapturedValue::Serde(json))
    }
}

/// Serializes a slog::Value into the capturing serializer.
fn capture<V: slog::Value>(value: &V, key: &'static str) -> CapturedValue {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    let mut serializer = CapturingSerializer::new();
    value.serialize(&record, key, &mut serializer).unwrap();
    serializer.get(key).expect("value should be captured")
}

fn masking_filter() -> PersonalDataFilter {
    PersonalDataFilter::builder().mask("*****").build().unwrap()
}

#[derive(Clone, Serialize, PersonalData)]
struct SignupRequest {
    pub username: String,
    pub password: String,
    pub referrer: String,
    pub plan: String,
}

fn signup() -> SignupRequest {
    SignupRequest {
        username: "alice".into(),
        password: "super_secret_password".into(),
        referrer: "invited by bob@example.com".into(),
        plan: "pro".into(),
    }
}

#[test]
fn logs_the_filtered_record_as_nested_json() {
    let logged = capture(&signup().to_filtered_json(&masking_filter()), "request");

    assert_eq!(
        logged,
        CapturedValue::Serde(json!({
            "username": "*****",
            "password": "*****",
            "referrer": "invited by *****",
            "plan": "pro",
        }))
    );
}

#[test]
fn original_value_is_left_untouched() {
    let request = signup();
    let logged = request.to_filtered_json(&masking_filter());

    assert_eq!(request.password, "super_secret_password");
    assert_eq!(logged.as_json()["password"], "*****");
}

#[test]
fn plain_text_logs_as_a_json_string() {
    let logged = capture(
        &"reach me at 10.0.0.1".to_string().to_filtered_json(&masking_filter()),
        "message",
    );

    assert_eq!(logged, CapturedValue::Serde(json!("reach me at *****")));
}

#[test]
fn unserializable_values_log_a_placeholder() {
    // JSON object keys must be strings.
    let mut by_pair: HashMap<(u32, u32), String> = HashMap::new();
    by_pair.insert((1, 2), "a@b.com".to_string());

    let logged = by_pair.to_filtered_json(&masking_filter());

    assert_eq!(logged.as_json(), &JsonValue::String(SERIALIZATION_FAILED.to_string()));
    assert_eq!(
        capture(&logged, "pairs"),
        CapturedValue::Serde(json!(SERIALIZATION_FAILED))
    );
}
