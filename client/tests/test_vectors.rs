//! Verify query building and body decoding against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector file describes filter inputs, expected query strings,
//! response bodies, and expected decode results. Expected records are
//! compared as decoded `Activity` values, not raw strings, to stay
//! independent of field ordering.

use bored_client::{Activity, ActivityQuery, ApiError, BoredClient};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000/api/activity";

fn client() -> BoredClient {
    BoredClient::with_base_url(BASE_URL)
}

/// Assemble an `ActivityQuery` from a vector's `input` object.
fn query_from_value(input: &Value) -> ActivityQuery {
    let mut query = ActivityQuery::new();
    if let Some(id) = input.get("id").and_then(Value::as_i64) {
        query = query.id(id);
    }
    if let Some(category) = input.get("category").and_then(Value::as_str) {
        query = query.category(category);
    }
    if let Some(participants) = input.get("participants").and_then(Value::as_u64) {
        query = query.participants(participants as u32);
    }
    if let Some(cost) = input.get("cost").and_then(Value::as_f64) {
        query = query.cost(cost);
    }
    if let Some(min_cost) = input.get("min_cost").and_then(Value::as_f64) {
        query = query.min_cost(min_cost);
    }
    if let Some(max_cost) = input.get("max_cost").and_then(Value::as_f64) {
        query = query.max_cost(max_cost);
    }
    if let Some(accessibility) = input.get("accessibility").and_then(Value::as_f64) {
        query = query.accessibility(accessibility);
    }
    if let Some(min_accessibility) = input.get("min_accessibility").and_then(Value::as_f64) {
        query = query.min_accessibility(min_accessibility);
    }
    if let Some(max_accessibility) = input.get("max_accessibility").and_then(Value::as_f64) {
        query = query.max_accessibility(max_accessibility);
    }
    query
}

#[test]
fn build_test_vectors() {
    let raw = include_str!("../../test-vectors/build.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let query = query_from_value(&case["input"]);
        let expected_query = case["expected_query"].as_str().unwrap();
        assert_eq!(query.to_query_string(), expected_query, "{name}: query string");

        let url = c.request_url(&query);
        if expected_query.is_empty() {
            assert_eq!(url, BASE_URL, "{name}: url");
        } else {
            assert_eq!(url, format!("{BASE_URL}?{expected_query}"), "{name}: url");
        }
    }
}

#[test]
fn decode_test_vectors() {
    let raw = include_str!("../../test-vectors/decode.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let body = case["body"].as_str().unwrap();
        let result = c.parse_activity(body);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Service" => {
                    let ApiError::Service(message) = &err else {
                        panic!("{name}: expected Service, got {err:?}");
                    };
                    if let Some(expected_message) =
                        case.get("expected_message").and_then(Value::as_str)
                    {
                        assert_eq!(message, expected_message, "{name}: message");
                    }
                }
                "Decode" => {
                    assert!(matches!(err, ApiError::Decode(_)), "{name}: expected Decode, got {err:?}");
                }
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let activity = result.unwrap();
            let expected: Activity = serde_json::from_value(case["expected"].clone()).unwrap();
            assert_eq!(activity, expected, "{name}: decoded result");
        }
    }
}
