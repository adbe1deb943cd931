//! Admin loan view model - pure state.
//!
//! Flattens every user's loans into one row per loan, partitions them into
//! pending and history, filters by search text, and applies confirmed
//! decisions. Decisions arrive here only after the server accepted them; the
//! reducer still refuses anything outside the status graph.

use chrono::NaiveDate;
use sarpras_shared::{Loan, LoanStatus};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanTab {
    #[default]
    Pending,
    History,
}

/// One row per loan, with the item names concatenated for display and
/// search.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminLoanRow {
    pub id: i64,
    pub borrower: String,
    pub item_summary: String,
    pub loan_date: NaiveDate,
    pub return_due: NaiveDate,
    pub returned_at: Option<NaiveDate>,
    pub status: LoanStatus,
    pub purpose: Option<String>,
}

/// Flatten loans into display rows. Missing embedded records degrade to
/// placeholders, never to a panic.
pub fn map_loans(loans: &[Loan]) -> Vec<AdminLoanRow> {
    loans
        .iter()
        .map(|loan| AdminLoanRow {
            id: loan.id,
            borrower: loan
                .user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_else(|| format!("user #{}", loan.user_id)),
            item_summary: loan
                .items
                .iter()
                .map(|entry| match entry.item.as_ref() {
                    Some(item) => format!("{} x{}", item.name, entry.quantity),
                    None => format!("(removed item) x{}", entry.quantity),
                })
                .collect::<Vec<_>>()
                .join(", "),
            loan_date: loan.loan_date,
            return_due: loan.return_due,
            returned_at: loan.returned_at,
            status: loan.status,
            purpose: loan.purpose.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminLoansState {
    pub rows: Vec<AdminLoanRow>,
    pub tab: LoanTab,
    pub search: String,
}

#[derive(Debug, Clone)]
pub enum AdminLoansAction {
    Loaded(Vec<Loan>),
    TabChanged(LoanTab),
    SearchChanged(String),
    /// A decision the server has already accepted. Only the status (and the
    /// return date, when present) is patched; other fields stay as fetched
    /// and may go stale until the next reload.
    Decided {
        id: i64,
        status: LoanStatus,
        returned_at: Option<NaiveDate>,
    },
}

/// Transition function: `(state, action) -> state`.
pub fn reduce(state: AdminLoansState, action: AdminLoansAction) -> AdminLoansState {
    let mut state = state;
    match action {
        AdminLoansAction::Loaded(loans) => state.rows = map_loans(&loans),
        AdminLoansAction::TabChanged(tab) => state.tab = tab,
        AdminLoansAction::SearchChanged(search) => state.search = search,
        AdminLoansAction::Decided {
            id,
            status,
            returned_at,
        } => {
            if let Some(row) = state.rows.iter_mut().find(|row| row.id == id) {
                // the lifecycle is monotonic; a stale button click on a
                // terminal loan changes nothing
                if row.status.can_transition_to(status) {
                    row.status = status;
                    if returned_at.is_some() {
                        row.returned_at = returned_at;
                    }
                }
            }
        }
    }
    state
}

impl AdminLoansState {
    fn in_tab(&self, row: &AdminLoanRow) -> bool {
        match self.tab {
            LoanTab::Pending => row.status == LoanStatus::Menunggu,
            LoanTab::History => row.status != LoanStatus::Menunggu,
        }
    }

    /// Rows of the active partition matching the search text,
    /// case-insensitively, on requester name or item-name summary.
    pub fn visible(&self) -> Vec<AdminLoanRow> {
        let needle = self.search.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| self.in_tab(row))
            .filter(|row| {
                needle.is_empty()
                    || row.borrower.to_lowercase().contains(&needle)
                    || row.item_summary.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn pending_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.status == LoanStatus::Menunggu)
            .count()
    }
}
