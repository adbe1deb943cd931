use super::*;
use sarpras_shared::{Item, ItemCondition, LoanItem, Role, User};

fn user(name: &str) -> User {
    User {
        id: 3,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: Role::Staff,
        division: None,
        phone: None,
        address: None,
        photo: None,
    }
}

fn item(id: i64, name: &str) -> Item {
    Item {
        id,
        code: format!("INV-{id:03}"),
        name: name.to_string(),
        category_id: None,
        category: None,
        stock: 1,
        condition: ItemCondition::Good,
        photo: None,
        description: None,
        acquired_at: None,
        acquisition_value: None,
    }
}

fn loan(id: i64, borrower: &str, item_name: &str, status: LoanStatus) -> Loan {
    Loan {
        id,
        user_id: 3,
        user: Some(user(borrower)),
        items: vec![LoanItem {
            item_id: 12,
            quantity: 1,
            item: Some(item(12, item_name)),
        }],
        loan_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        return_due: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
        returned_at: None,
        purpose: None,
        status,
    }
}

fn loaded(loans: Vec<Loan>) -> AdminLoansState {
    reduce(AdminLoansState::default(), AdminLoansAction::Loaded(loans))
}

#[test]
fn rows_flatten_one_per_loan_with_a_summary() {
    let mut l = loan(1, "Budi", "Proyektor", LoanStatus::Menunggu);
    l.items.push(LoanItem {
        item_id: 99,
        quantity: 2,
        item: None,
    });
    let state = loaded(vec![l]);
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].borrower, "Budi");
    assert_eq!(state.rows[0].item_summary, "Proyektor x1, (removed item) x2");
}

#[test]
fn missing_borrower_gets_a_placeholder() {
    let mut l = loan(1, "Budi", "Proyektor", LoanStatus::Menunggu);
    l.user = None;
    let state = loaded(vec![l]);
    assert_eq!(state.rows[0].borrower, "user #3");
}

#[test]
fn partitions_split_on_pending_status() {
    let state = loaded(vec![
        loan(1, "Budi", "Proyektor", LoanStatus::Menunggu),
        loan(2, "Siti", "Laptop", LoanStatus::Dipinjam),
        loan(3, "Andi", "Kamera", LoanStatus::Dikembalikan),
    ]);
    assert_eq!(state.pending_count(), 1);
    let pending: Vec<i64> = state.visible().iter().map(|r| r.id).collect();
    assert_eq!(pending, vec![1]);

    let state = reduce(state, AdminLoansAction::TabChanged(LoanTab::History));
    let history: Vec<i64> = state.visible().iter().map(|r| r.id).collect();
    assert_eq!(history, vec![2, 3]);
}

#[test]
fn search_is_case_insensitive_and_scoped_to_the_partition() {
    let state = loaded(vec![
        loan(1, "Budi", "Proyektor", LoanStatus::Menunggu),
        loan(2, "Siti", "Proyektor", LoanStatus::Dipinjam),
        loan(3, "Budi Santoso", "Laptop", LoanStatus::Menunggu),
    ]);

    // by requester name
    let state = reduce(state, AdminLoansAction::SearchChanged("bUdI".to_string()));
    let ids: Vec<i64> = state.visible().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);

    // by item name, within the pending partition only
    let state = reduce(
        state,
        AdminLoansAction::SearchChanged("proyektor".to_string()),
    );
    let ids: Vec<i64> = state.visible().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn approving_a_pending_loan_moves_it_to_history() {
    // admin approves loan 7: status menunggu -> dipinjam, gone from the
    // pending partition, present in history
    let state = loaded(vec![
        loan(7, "Budi", "Proyektor", LoanStatus::Menunggu),
        loan(8, "Siti", "Laptop", LoanStatus::Menunggu),
    ]);
    let state = reduce(
        state,
        AdminLoansAction::Decided {
            id: 7,
            status: LoanStatus::Dipinjam,
            returned_at: None,
        },
    );
    let pending: Vec<i64> = state.visible().iter().map(|r| r.id).collect();
    assert_eq!(pending, vec![8]);

    let state = reduce(state, AdminLoansAction::TabChanged(LoanTab::History));
    let history = state.visible();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, 7);
    assert_eq!(history[0].status, LoanStatus::Dipinjam);
}

#[test]
fn marking_returned_records_the_date() {
    let state = loaded(vec![loan(5, "Budi", "Proyektor", LoanStatus::Dipinjam)]);
    let returned = NaiveDate::from_ymd_opt(2026, 8, 6);
    let state = reduce(
        state,
        AdminLoansAction::Decided {
            id: 5,
            status: LoanStatus::Dikembalikan,
            returned_at: returned,
        },
    );
    assert_eq!(state.rows[0].status, LoanStatus::Dikembalikan);
    assert_eq!(state.rows[0].returned_at, returned);
}

#[test]
fn transitions_outside_the_graph_are_refused() {
    let state = loaded(vec![
        loan(1, "Budi", "Proyektor", LoanStatus::Dikembalikan),
        loan(2, "Siti", "Laptop", LoanStatus::Ditolak),
        loan(3, "Andi", "Kamera", LoanStatus::Menunggu),
    ]);
    // terminal loans stay terminal; pending cannot jump straight to returned
    let state = reduce(
        state,
        AdminLoansAction::Decided {
            id: 1,
            status: LoanStatus::Dipinjam,
            returned_at: None,
        },
    );
    let state = reduce(
        state,
        AdminLoansAction::Decided {
            id: 2,
            status: LoanStatus::Dipinjam,
            returned_at: None,
        },
    );
    let state = reduce(
        state,
        AdminLoansAction::Decided {
            id: 3,
            status: LoanStatus::Dikembalikan,
            returned_at: NaiveDate::from_ymd_opt(2026, 8, 6),
        },
    );
    assert_eq!(state.rows[0].status, LoanStatus::Dikembalikan);
    assert_eq!(state.rows[1].status, LoanStatus::Ditolak);
    assert_eq!(state.rows[2].status, LoanStatus::Menunggu);
    assert_eq!(state.rows[2].returned_at, None);
}

#[test]
fn deciding_an_unknown_loan_is_a_noop() {
    let state = loaded(vec![loan(1, "Budi", "Proyektor", LoanStatus::Menunggu)]);
    let before = state.clone();
    let after = reduce(
        state,
        AdminLoansAction::Decided {
            id: 404,
            status: LoanStatus::Dipinjam,
            returned_at: None,
        },
    );
    assert_eq!(before, after);
}
