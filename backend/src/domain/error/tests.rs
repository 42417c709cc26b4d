//! Regression coverage for the domain error type.

use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
#[case(ErrorCode::InvalidRequest, "invalid_request")]
#[case(ErrorCode::Unauthorized, "unauthorized")]
#[case(ErrorCode::NotFound, "not_found")]
#[case(ErrorCode::Conflict, "conflict")]
#[case(ErrorCode::ServiceUnavailable, "service_unavailable")]
#[case(ErrorCode::InternalError, "internal_error")]
fn error_codes_serialise_as_snake_case(#[case] code: ErrorCode, #[case] expected: &str) {
    let serialised = serde_json::to_value(code).expect("code serialises");
    assert_eq!(serialised, json!(expected));
}

#[test]
fn try_new_rejects_blank_messages() {
    let err = Error::try_new(ErrorCode::NotFound, "   ").expect_err("blank message rejected");
    assert_eq!(err, ErrorValidationError::EmptyMessage);
}

#[test]
fn details_are_omitted_when_absent() {
    let err = Error::not_found("donation abc not found");
    let payload = serde_json::to_value(&err).expect("error serialises");
    assert_eq!(
        payload,
        json!({ "code": "not_found", "message": "donation abc not found" })
    );
}

#[test]
fn details_round_trip_through_serialisation() {
    let err = Error::invalid_request("amount must be positive")
        .with_details(json!({ "field": "amount", "code": "non_positive_amount" }));
    let payload = serde_json::to_value(&err).expect("error serialises");
    assert_eq!(payload["details"]["field"], json!("amount"));

    let parsed: Error = serde_json::from_value(payload).expect("error deserialises");
    assert_eq!(parsed, err);
}

#[test]
fn display_exposes_the_message_only() {
    let err = Error::conflict("donation already decided");
    assert_eq!(err.to_string(), "donation already decided");
}
