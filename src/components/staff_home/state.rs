//! Staff loan view model - pure state.
//!
//! Reconciles the two independently fetched collections (items, loans) into
//! display rows and applies local transitions through a plain
//! `(state, action) -> state` function, so the logic tests without any
//! network or DOM in sight. The page component owns the fetching and calls
//! [`reduce`].

use chrono::NaiveDate;
use sarpras_shared::{Item, ItemCondition, Loan, LoanStatus};

#[cfg(test)]
mod tests;

/// Display record for one catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: Option<String>,
    pub stock: u32,
    pub condition: ItemCondition,
    /// Binary availability derived from stock.
    pub available: bool,
}

impl CatalogRow {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            code: item.code.clone(),
            name: item.name.clone(),
            category: item.category.as_ref().map(|c| c.name.clone()),
            stock: item.stock,
            condition: item.condition,
            available: item.is_available(),
        }
    }
}

/// One line of a loan. `name` is `None` when the item reference resolved
/// nowhere; the row renders a placeholder instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanEntryRow {
    pub item_id: i64,
    pub name: Option<String>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveLoanRow {
    pub id: i64,
    pub status: LoanStatus,
    pub loan_date: NaiveDate,
    pub return_due: NaiveDate,
    pub purpose: Option<String>,
    pub entries: Vec<LoanEntryRow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffState {
    pub catalog: Vec<CatalogRow>,
    /// The "currently borrowed" panel: everything not yet returned.
    pub active: Vec<ActiveLoanRow>,
}

#[derive(Debug, Clone)]
pub enum StaffAction {
    /// Both fetches joined. Either list may be empty after a failed fetch;
    /// the display degrades rather than erroring.
    Loaded { items: Vec<Item>, loans: Vec<Loan> },
    /// The user initiated a return for this loan. The page applies this
    /// whatever the update call's outcome.
    Returned { id: i64 },
}

/// Transition function: `(state, action) -> state`.
pub fn reduce(state: StaffState, action: StaffAction) -> StaffState {
    match action {
        StaffAction::Loaded { items, loans } => StaffState {
            catalog: items.iter().map(CatalogRow::from_item).collect(),
            active: loans
                .iter()
                // returned loans leave the panel; rejected ones stay visible
                // with their badge
                .filter(|loan| loan.status != LoanStatus::Dikembalikan)
                .map(|loan| active_row(loan, &items))
                .collect(),
        },
        StaffAction::Returned { id } => {
            let mut state = state;
            state.active.retain(|loan| loan.id != id);
            state
        }
    }
}

fn active_row(loan: &Loan, items: &[Item]) -> ActiveLoanRow {
    ActiveLoanRow {
        id: loan.id,
        status: loan.status,
        loan_date: loan.loan_date,
        return_due: loan.return_due,
        purpose: loan.purpose.clone(),
        entries: loan
            .items
            .iter()
            .map(|entry| LoanEntryRow {
                item_id: entry.item_id,
                name: resolve_name(entry.item.as_ref(), entry.item_id, items),
                quantity: entry.quantity,
            })
            .collect(),
    }
}

/// Item-name resolution: the loan payload's embedded item first, then a
/// lookup against the freshly fetched item list, then nothing.
fn resolve_name(embedded: Option<&Item>, item_id: i64, items: &[Item]) -> Option<String> {
    embedded.map(|item| item.name.clone()).or_else(|| {
        items
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| item.name.clone())
    })
}
