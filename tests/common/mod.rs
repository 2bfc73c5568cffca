// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared context builders and assertion helpers

#![allow(dead_code)]

use serde_json::{json, Value};

/// The word list most array-helper fixtures run against.
pub fn word_array_context() -> Value {
    json!({ "array": ["hi", "person", "how", "are", "you"] })
}

/// A request-shaped user record for object-processing fixtures.
pub fn user_context() -> Value {
    json!({
        "user": {
            "email": "test@test.com",
            "roleId": "ADMIN",
            "type": "user",
            "tableId": "ta_users",
            "subscriptionDue": "2021-01-12T12:00:00.000Z",
            "_id": "ro_ta_users_us_test@test.com",
            "_rev": "2-24cc794985eb54183ecb93e148563f3d"
        }
    })
}

/// Render a template and unwrap the common string-result case.
pub fn render(template: &str, context: &Value) -> String {
    match stencil::process_string(template, context) {
        Value::String(text) => text,
        other => panic!("expected string output, got {other:?}"),
    }
}
