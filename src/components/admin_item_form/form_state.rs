//! Item form state.
//!
//! Raw input strings in signals, with [`build_draft`] doing the pure
//! validation and conversion into the multipart field set.

use leptos::prelude::*;
use sarpras_shared::{Item, ItemCondition, ItemDraft, date};

#[cfg(test)]
mod tests;

#[derive(Clone, Copy)]
pub struct FormState {
    pub code: RwSignal<String>,
    pub name: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub condition: RwSignal<String>,
    pub description: RwSignal<String>,
    pub acquired_at: RwSignal<String>,
    pub acquisition_value: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            code: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            category_id: RwSignal::new(String::new()),
            stock: RwSignal::new("0".to_string()),
            condition: RwSignal::new(ItemCondition::Good.as_wire().to_string()),
            description: RwSignal::new(String::new()),
            acquired_at: RwSignal::new(String::new()),
            acquisition_value: RwSignal::new(String::new()),
        }
    }

    /// Populate from an existing item (edit flow).
    pub fn load(&self, item: &Item) {
        self.code.set(item.code.clone());
        self.name.set(item.name.clone());
        self.category_id
            .set(item.category_id.map(|id| id.to_string()).unwrap_or_default());
        self.stock.set(item.stock.to_string());
        self.condition.set(item.condition.as_wire().to_string());
        self.description
            .set(item.description.clone().unwrap_or_default());
        self.acquired_at
            .set(item.acquired_at.map(|d| d.to_string()).unwrap_or_default());
        self.acquisition_value.set(
            item.acquisition_value
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
    }

    pub fn to_draft(&self) -> Result<ItemDraft, String> {
        build_draft(
            &self.code.get(),
            &self.name.get(),
            &self.category_id.get(),
            &self.stock.get(),
            &self.condition.get(),
            &self.description.get(),
            &self.acquired_at.get(),
            &self.acquisition_value.get(),
        )
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the raw form fields and assemble the draft.
#[allow(clippy::too_many_arguments)]
pub fn build_draft(
    code: &str,
    name: &str,
    category_id: &str,
    stock: &str,
    condition: &str,
    description: &str,
    acquired_at: &str,
    acquisition_value: &str,
) -> Result<ItemDraft, String> {
    let code = code.trim();
    if code.is_empty() {
        return Err("Code is required".to_string());
    }
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    let stock = stock
        .trim()
        .parse::<u32>()
        .map_err(|_| "Stock must be a non-negative whole number".to_string())?;
    let condition =
        ItemCondition::from_wire(condition).ok_or_else(|| "Choose a condition".to_string())?;
    let category_id = match category_id.trim() {
        "" => None,
        raw => Some(
            raw.parse::<i64>()
                .map_err(|_| "Choose a valid category".to_string())?,
        ),
    };
    let acquired_at = match acquired_at.trim() {
        "" => None,
        raw => Some(date::parse_input(raw).ok_or_else(|| "Invalid acquisition date".to_string())?),
    };
    let acquisition_value = match acquisition_value.trim() {
        "" => None,
        raw => Some(
            raw.parse::<f64>()
                .map_err(|_| "Invalid acquisition value".to_string())?,
        ),
    };
    Ok(ItemDraft {
        code: code.to_string(),
        name: name.to_string(),
        category_id,
        stock,
        condition,
        description: description.trim().to_string(),
        acquired_at,
        acquisition_value,
    })
}
