use super::*;
use sarpras_shared::{Category, LoanStatus};

#[test]
fn enveloped_payload_decodes() {
    let body = r#"{ "data": [ { "id": 1, "name": "Elektronik" } ] }"#;
    let cats: Vec<Category> = decode_body(200, body, true).unwrap();
    assert_eq!(cats[0].name, "Elektronik");
}

#[test]
fn missing_envelope_fails_loudly() {
    // a bare payload where an envelope is documented must not be guessed at
    let body = r#"[ { "id": 1, "name": "Elektronik" } ]"#;
    let err = decode_body::<Vec<Category>>(200, body, true).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn bare_message_endpoint_decodes() {
    let body = r#"{ "message": "Logged out" }"#;
    let msg: MessageResponse = decode_body(200, body, false).unwrap();
    assert_eq!(msg.message, "Logged out");
}

#[test]
fn unauthorized_maps_to_its_own_variant() {
    let err = decode_body::<MessageResponse>(401, r#"{"message":"Unauthenticated."}"#, false)
        .unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn server_error_carries_the_server_message() {
    let err = decode_body::<Loan>(422, r#"{"message":"Stok tidak mencukupi"}"#, true).unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Stok tidak mencukupi");
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[test]
fn server_error_without_message_gets_a_fallback() {
    let err = decode_body::<Loan>(500, "<html>oops</html>", true).unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("500"));
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[test]
fn wire_statuses_round_trip_through_the_envelope() {
    let body = r#"{ "data": {
        "id": 7, "user_id": 3,
        "items": [ { "item_id": 12, "quantity": 1 } ],
        "loan_date": "2026-08-01", "return_due": "2026-08-10",
        "status": "dipinjam"
    } }"#;
    let loan: Loan = decode_body(200, body, true).unwrap();
    assert_eq!(loan.status, LoanStatus::Dipinjam);
}
