use super::*;

fn cart() -> Vec<LoanItemRequest> {
    vec![LoanItemRequest {
        item_id: 5,
        quantity: 2,
    }]
}

#[test]
fn empty_cart_is_rejected() {
    let err = build_request(&[], "2026-08-06", "2026-08-10", "").unwrap_err();
    assert!(err.contains("at least one item"));
}

#[test]
fn dates_must_parse_and_be_ordered() {
    assert!(build_request(&cart(), "", "2026-08-10", "").is_err());
    assert!(build_request(&cart(), "2026-08-06", "nope", "").is_err());
    assert!(build_request(&cart(), "2026-08-10", "2026-08-06", "").is_err());
    // same-day borrow and return is fine
    assert!(build_request(&cart(), "2026-08-06", "2026-08-06", "").is_ok());
}

#[test]
fn blank_purpose_becomes_none() {
    let request = build_request(&cart(), "2026-08-06", "2026-08-10", "   ").unwrap();
    assert_eq!(request.purpose, None);

    let request = build_request(&cart(), "2026-08-06", "2026-08-10", " praktikum ").unwrap();
    assert_eq!(request.purpose.as_deref(), Some("praktikum"));
    assert_eq!(request.items, cart());
}

#[test]
fn duplicate_items_merge_in_the_cart() {
    let mut entries = cart();
    merge_entry(
        &mut entries,
        LoanItemRequest {
            item_id: 5,
            quantity: 3,
        },
    );
    merge_entry(
        &mut entries,
        LoanItemRequest {
            item_id: 8,
            quantity: 1,
        },
    );
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].quantity, 5);
    assert_eq!(entries[1].item_id, 8);
}
