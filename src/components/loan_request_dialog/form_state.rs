//! Loan request form state.
//!
//! The signals hold raw input strings; [`build_request`] does validation and
//! assembly as a pure function so it stays testable away from the reactive
//! system.

use leptos::prelude::*;
use sarpras_shared::{CreateLoanRequest, LoanItemRequest, date};

#[cfg(test)]
mod tests;

/// Uses `RwSignal` throughout so the whole struct stays `Copy` and can be
/// passed around freely.
#[derive(Clone, Copy)]
pub struct FormState {
    pub selected_item: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub entries: RwSignal<Vec<LoanItemRequest>>,
    pub loan_date: RwSignal<String>,
    pub return_due: RwSignal<String>,
    pub purpose: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            selected_item: RwSignal::new(String::new()),
            quantity: RwSignal::new("1".to_string()),
            entries: RwSignal::new(Vec::new()),
            loan_date: RwSignal::new(date::today().to_string()),
            return_due: RwSignal::new(String::new()),
            purpose: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.selected_item.set(String::new());
        self.quantity.set("1".to_string());
        self.entries.set(Vec::new());
        self.loan_date.set(date::today().to_string());
        self.return_due.set(String::new());
        self.purpose.set(String::new());
    }

    /// Move the currently selected item and quantity into the cart.
    pub fn add_entry(&self) -> Result<(), String> {
        let item_id = self
            .selected_item
            .get()
            .parse::<i64>()
            .map_err(|_| "Choose an item first".to_string())?;
        let quantity = self
            .quantity
            .get()
            .parse::<u32>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| "Quantity must be at least 1".to_string())?;
        self.entries
            .update(|entries| merge_entry(entries, LoanItemRequest { item_id, quantity }));
        self.quantity.set("1".to_string());
        Ok(())
    }

    pub fn remove_entry(&self, item_id: i64) {
        self.entries
            .update(|entries| entries.retain(|e| e.item_id != item_id));
    }

    pub fn to_request(&self) -> Result<CreateLoanRequest, String> {
        build_request(
            &self.entries.get(),
            &self.loan_date.get(),
            &self.return_due.get(),
            &self.purpose.get(),
        )
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Picking the same item twice merges into one line.
fn merge_entry(entries: &mut Vec<LoanItemRequest>, entry: LoanItemRequest) {
    match entries.iter_mut().find(|e| e.item_id == entry.item_id) {
        Some(existing) => existing.quantity += entry.quantity,
        None => entries.push(entry),
    }
}

/// Validate the raw form fields and assemble the request.
pub fn build_request(
    entries: &[LoanItemRequest],
    loan_date: &str,
    return_due: &str,
    purpose: &str,
) -> Result<CreateLoanRequest, String> {
    if entries.is_empty() {
        return Err("Add at least one item to the request".to_string());
    }
    let loan_date =
        date::parse_input(loan_date).ok_or_else(|| "Choose a loan date".to_string())?;
    let return_due =
        date::parse_input(return_due).ok_or_else(|| "Choose a return date".to_string())?;
    if return_due < loan_date {
        return Err("The return date cannot precede the loan date".to_string());
    }
    let purpose = purpose.trim();
    Ok(CreateLoanRequest {
        items: entries.to_vec(),
        loan_date,
        return_due,
        purpose: (!purpose.is_empty()).then(|| purpose.to_string()),
    })
}
