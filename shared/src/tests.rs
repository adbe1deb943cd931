use super::*;

fn item(id: i64, stock: u32) -> Item {
    Item {
        id,
        code: format!("INV-{id:03}"),
        name: format!("Item {id}"),
        category_id: None,
        category: None,
        stock,
        condition: ItemCondition::Good,
        photo: None,
        description: None,
        acquired_at: None,
        acquisition_value: None,
    }
}

// =========================================================
// Loan status graph
// =========================================================

#[test]
fn status_graph_allows_exactly_three_transitions() {
    use LoanStatus::*;
    let all = [Menunggu, Dipinjam, Dikembalikan, Ditolak];
    for from in all {
        for to in all {
            let legal = matches!(
                (from, to),
                (Menunggu, Dipinjam) | (Menunggu, Ditolak) | (Dipinjam, Dikembalikan)
            );
            assert_eq!(
                from.can_transition_to(to),
                legal,
                "transition {from:?} -> {to:?}"
            );
        }
    }
}

#[test]
fn terminal_statuses_never_transition() {
    use LoanStatus::*;
    for terminal in [Dikembalikan, Ditolak] {
        assert!(terminal.is_terminal());
        for to in [Menunggu, Dipinjam, Dikembalikan, Ditolak] {
            assert!(!terminal.can_transition_to(to));
        }
    }
    assert!(!Menunggu.is_terminal());
    assert!(!Dipinjam.is_terminal());
}

#[test]
fn status_wire_values_are_lowercase_indonesian() {
    assert_eq!(
        serde_json::to_string(&LoanStatus::Menunggu).unwrap(),
        "\"menunggu\""
    );
    assert_eq!(
        serde_json::from_str::<LoanStatus>("\"dikembalikan\"").unwrap(),
        LoanStatus::Dikembalikan
    );
}

// =========================================================
// Roles
// =========================================================

#[test]
fn role_decodes_leniently() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"staff\"").unwrap(), Role::Staff);
    assert_eq!(serde_json::from_str::<Role>("\"Admin\"").unwrap(), Role::Admin);
    // a role this client has never heard of must not fail the payload
    assert_eq!(
        serde_json::from_str::<Role>("\"supervisor\"").unwrap(),
        Role::Unknown
    );
}

#[test]
fn self_service_signup_carries_fixed_defaults() {
    let req = RegisterRequest::self_service(
        "Budi".to_string(),
        "budi@example.com".to_string(),
        "rahasia1".to_string(),
    );
    assert_eq!(req.role, SELF_SERVICE_ROLE);
    assert_eq!(req.division, SELF_SERVICE_DIVISION);
    assert_eq!(req.password, req.password_confirmation);
}

// =========================================================
// Items
// =========================================================

#[test]
fn availability_is_stock_greater_than_zero() {
    assert!(!item(1, 0).is_available());
    assert!(item(2, 1).is_available());
    assert!(item(3, 250).is_available());
}

#[test]
fn age_is_whole_years_since_acquisition() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let mut it = item(1, 1);
    assert_eq!(it.age_years(today), None);

    it.acquired_at = NaiveDate::from_ymd_opt(2020, 8, 6);
    assert_eq!(it.age_years(today), Some(6));

    // anniversary not reached yet this year
    it.acquired_at = NaiveDate::from_ymd_opt(2020, 9, 1);
    assert_eq!(it.age_years(today), Some(5));

    // acquired in the future: no age rather than a negative one
    it.acquired_at = NaiveDate::from_ymd_opt(2027, 1, 1);
    assert_eq!(it.age_years(today), None);
}

// =========================================================
// Wire decoding
// =========================================================

#[test]
fn loan_decodes_without_embedded_records() {
    let raw = r#"{
        "id": 7,
        "user_id": 3,
        "items": [{ "item_id": 12, "quantity": 2 }],
        "loan_date": "2026-08-01",
        "return_due": "2026-08-10",
        "status": "menunggu"
    }"#;
    let loan: Loan = serde_json::from_str(raw).unwrap();
    assert_eq!(loan.id, 7);
    assert_eq!(loan.status, LoanStatus::Menunggu);
    assert!(loan.user.is_none());
    assert!(loan.items[0].item.is_none());
    assert!(loan.returned_at.is_none());
}

#[test]
fn update_request_omits_absent_return_date() {
    let approve = UpdateLoanRequest {
        status: LoanStatus::Dipinjam,
        returned_at: None,
    };
    assert_eq!(
        serde_json::to_string(&approve).unwrap(),
        r#"{"status":"dipinjam"}"#
    );

    let finish = UpdateLoanRequest {
        status: LoanStatus::Dikembalikan,
        returned_at: NaiveDate::from_ymd_opt(2026, 8, 6),
    };
    assert!(serde_json::to_string(&finish).unwrap().contains("2026-08-06"));
}

// =========================================================
// Date helpers
// =========================================================

#[test]
fn date_input_round_trip() {
    let d = date::parse_input("2026-08-06").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
    assert!(date::parse_input("06/08/2026").is_none());
    assert!(date::parse_input("").is_none());
    assert_eq!(date::month_key(d), "2026-08");
}
