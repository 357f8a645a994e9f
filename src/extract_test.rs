use serde_json::json;

use super::*;

fn message(body: &Value) -> String {
    extract_error_message(Some(body))
}

// =============================================================================
// Falsy / absent bodies
// =============================================================================

#[test]
fn absent_body_is_request_failed() {
    assert_eq!(extract_error_message(None), "Request failed");
}

#[test]
fn falsy_bodies_are_request_failed() {
    for body in [json!(null), json!(false), json!(0), json!("")] {
        assert_eq!(message(&body), "Request failed", "body {body}");
    }
}

#[test]
fn truthy_scalars_other_than_strings_are_request_failed() {
    assert_eq!(message(&json!(true)), "Request failed");
    assert_eq!(message(&json!(418)), "Request failed");
}

// =============================================================================
// Known shapes
// =============================================================================

#[test]
fn plain_string_is_used_verbatim() {
    assert_eq!(message(&json!("Service unavailable")), "Service unavailable");
}

#[test]
fn error_field_wins() {
    assert_eq!(message(&json!({ "error": "Email already used" })), "Email already used");
}

#[test]
fn error_field_wins_over_detail() {
    let body = json!({ "detail": "Not found.", "error": "User not found" });
    assert_eq!(message(&body), "User not found");
}

#[test]
fn detail_field_used_when_no_error() {
    assert_eq!(message(&json!({ "detail": "Authentication credentials were not provided." })), "Authentication credentials were not provided.");
}

#[test]
fn falsy_error_falls_through_to_detail() {
    assert_eq!(message(&json!({ "error": "", "detail": "Bad request" })), "Bad request");
}

#[test]
fn non_string_error_is_stringified() {
    assert_eq!(message(&json!({ "error": 400 })), "400");
    assert_eq!(message(&json!({ "error": ["a", "b"] })), "a,b");
    assert_eq!(message(&json!({ "error": { "code": 1 } })), "[object Object]");
}

// =============================================================================
// Field-keyed validation errors
// =============================================================================

#[test]
fn field_error_list_uses_first_entry() {
    assert_eq!(message(&json!({ "phone": ["This field is required."] })), "This field is required.");
}

#[test]
fn first_truthy_field_in_insertion_order() {
    let body = json!({
        "username": [],
        "phone": null,
        "email": ["Enter a valid email address.", "Second"],
        "bod": ["Invalid date."]
    });
    // `[]` is truthy but empty, so nothing usable comes out of it.
    assert_eq!(message(&body), "Request failed");

    let body = json!({
        "phone": null,
        "email": ["Enter a valid email address.", "Second"],
        "bod": ["Invalid date."]
    });
    assert_eq!(message(&body), "Enter a valid email address.");
}

#[test]
fn field_string_value_used_directly() {
    assert_eq!(message(&json!({ "non_field_errors": "Passwords do not match" })), "Passwords do not match");
}

#[test]
fn first_truthy_number_is_request_failed() {
    assert_eq!(message(&json!({ "count": 0, "code": 7 })), "Request failed");
}

#[test]
fn index_keys_are_visited_before_named_keys() {
    assert_eq!(message(&json!({ "b": "x", "1": "y" })), "y");
    assert_eq!(message(&json!({ "email": ["Taken"], "10": ["ten"], "2": ["two"] })), "two");
}

#[test]
fn non_canonical_index_keys_keep_insertion_order() {
    assert_eq!(message(&json!({ "b": "x", "01": "y", "-1": "z" })), "x");
    assert_eq!(message(&json!({ "b": "x", "4294967295": "max" })), "x");
}

#[test]
fn empty_object_is_request_failed() {
    assert_eq!(message(&json!({})), "Request failed");
}

#[test]
fn top_level_array_uses_first_truthy_string() {
    assert_eq!(message(&json!(["", "Rejected"])), "Rejected");
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn same_body_same_message() {
    let bodies = [
        json!({ "error": "Email already used" }),
        json!({ "phone": ["This field is required."] }),
        json!("plain"),
        json!(null),
    ];
    for body in &bodies {
        assert_eq!(message(body), message(body));
    }
}

// =============================================================================
// stringify / is_truthy
// =============================================================================

#[test]
fn stringify_matches_loose_conventions() {
    assert_eq!(stringify(&json!(null)), "null");
    assert_eq!(stringify(&json!(true)), "true");
    assert_eq!(stringify(&json!(2.5)), "2.5");
    assert_eq!(stringify(&json!(3.0)), "3");
    assert_eq!(stringify(&json!([1, null, "x"])), "1,,x");
}

#[test]
fn stringify_uses_exponent_form_at_the_extremes() {
    assert_eq!(stringify(&json!(1e21)), "1e+21");
    assert_eq!(stringify(&json!(-2.5e30)), "-2.5e+30");
    assert_eq!(stringify(&json!(1e-7)), "1e-7");
    assert_eq!(stringify(&json!(1.5e-7)), "1.5e-7");
    assert_eq!(stringify(&json!(0.000_001)), "0.000001");
    assert_eq!(stringify(&json!(1e20)), "100000000000000000000");
    assert_eq!(stringify(&json!(-0.0)), "0");
}

#[test]
fn truthiness_of_containers() {
    assert!(is_truthy(&json!([])));
    assert!(is_truthy(&json!({})));
    assert!(!is_truthy(&json!(0.0)));
}
