use super::*;
use chrono::NaiveDate;
use sarpras_shared::LoanItem;

fn item(id: i64, name: &str, stock: u32) -> Item {
    Item {
        id,
        code: format!("INV-{id:03}"),
        name: name.to_string(),
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

fn loan(id: i64, status: LoanStatus, items: Vec<LoanItem>) -> Loan {
    Loan {
        id,
        user_id: 3,
        user: None,
        items,
        loan_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        return_due: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
        returned_at: None,
        purpose: None,
        status,
    }
}

fn entry(item_id: i64, quantity: u32, embedded: Option<Item>) -> LoanItem {
    LoanItem {
        item_id,
        quantity,
        item: embedded,
    }
}

fn load(items: Vec<Item>, loans: Vec<Loan>) -> StaffState {
    reduce(StaffState::default(), StaffAction::Loaded { items, loans })
}

#[test]
fn catalog_availability_follows_stock() {
    let state = load(
        vec![item(1, "Proyektor", 0), item(2, "Laptop", 3)],
        Vec::new(),
    );
    assert!(!state.catalog[0].available);
    assert!(state.catalog[1].available);
}

#[test]
fn returned_loans_leave_the_active_panel() {
    let state = load(
        Vec::new(),
        vec![
            loan(1, LoanStatus::Menunggu, vec![entry(9, 1, None)]),
            loan(2, LoanStatus::Dipinjam, vec![entry(9, 1, None)]),
            loan(3, LoanStatus::Dikembalikan, vec![entry(9, 1, None)]),
            loan(4, LoanStatus::Ditolak, vec![entry(9, 1, None)]),
        ],
    );
    let ids: Vec<i64> = state.active.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[test]
fn entry_name_prefers_the_embedded_item() {
    let state = load(
        vec![item(5, "From list", 1)],
        vec![loan(
            1,
            LoanStatus::Dipinjam,
            vec![entry(5, 1, Some(item(5, "From payload", 1)))],
        )],
    );
    assert_eq!(state.active[0].entries[0].name.as_deref(), Some("From payload"));
}

#[test]
fn entry_name_falls_back_to_the_item_list() {
    let state = load(
        vec![item(5, "Kamera", 1)],
        vec![loan(1, LoanStatus::Dipinjam, vec![entry(5, 2, None)])],
    );
    assert_eq!(state.active[0].entries[0].name.as_deref(), Some("Kamera"));
    assert_eq!(state.active[0].entries[0].quantity, 2);
}

#[test]
fn unresolvable_entry_renders_as_placeholder_not_panic() {
    // neither an embedded item nor a match in the list — e.g. the item was
    // deleted after the loan was made
    let state = load(
        vec![item(5, "Kamera", 1)],
        vec![loan(1, LoanStatus::Dipinjam, vec![entry(999, 1, None)])],
    );
    assert_eq!(state.active[0].entries[0].name, None);
}

#[test]
fn return_action_removes_the_loan_unconditionally() {
    let state = load(
        Vec::new(),
        vec![
            loan(1, LoanStatus::Dipinjam, vec![entry(9, 1, None)]),
            loan(2, LoanStatus::Dipinjam, vec![entry(9, 1, None)]),
        ],
    );
    // the page applies this regardless of whether the update call succeeded
    let state = reduce(state, StaffAction::Returned { id: 1 });
    assert_eq!(state.active.len(), 1);
    assert_eq!(state.active[0].id, 2);

    // unknown id: no-op, no panic
    let state = reduce(state, StaffAction::Returned { id: 42 });
    assert_eq!(state.active.len(), 1);
}

#[test]
fn failed_fetches_load_as_empty_lists() {
    // the page maps fetch errors to empty vectors before dispatching
    let state = load(Vec::new(), Vec::new());
    assert!(state.catalog.is_empty());
    assert!(state.active.is_empty());
}
