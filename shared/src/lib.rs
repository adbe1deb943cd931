use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod date;
pub mod protocol;

#[cfg(test)]
mod tests;

// =========================================================
// Constants
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// Role assigned to self-service signups. Admins are promoted server-side.
pub const SELF_SERVICE_ROLE: Role = Role::Staff;
pub const SELF_SERVICE_DIVISION: &str = "umum";

// =========================================================
// Identity
// =========================================================

/// Access-level tag gating which pages a session may reach.
///
/// Decoded leniently: a role string the client does not know maps to
/// `Unknown` instead of failing the whole payload, and `Unknown` is routed
/// like staff everywhere a decision is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Staff,
    Admin,
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "staff" => Role::Staff,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

// =========================================================
// Inventory
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Physical condition of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCondition {
    #[serde(rename = "baik")]
    Good,
    #[serde(rename = "rusak_ringan")]
    LightDamage,
    #[serde(rename = "rusak_berat")]
    HeavyDamage,
}

impl ItemCondition {
    /// Wire token, as sent in multipart form fields.
    pub fn as_wire(&self) -> &'static str {
        match self {
            ItemCondition::Good => "baik",
            ItemCondition::LightDamage => "rusak_ringan",
            ItemCondition::HeavyDamage => "rusak_berat",
        }
    }

    /// Inverse of [`Self::as_wire`]; used by `<select>` handlers.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "baik" => Some(ItemCondition::Good),
            "rusak_ringan" => Some(ItemCondition::LightDamage),
            "rusak_berat" => Some(ItemCondition::HeavyDamage),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemCondition::Good => "Good",
            ItemCondition::LightDamage => "Light damage",
            ItemCondition::HeavyDamage => "Heavy damage",
        }
    }
}

impl Display for ItemCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A unit-counted piece of inventory.
///
/// `stock` is the count of units currently available for lending; stock
/// accounting on approval/return happens server-side, the client only
/// reflects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Embedded category record, present when the server joins it in.
    #[serde(default)]
    pub category: Option<Category>,
    pub stock: u32,
    pub condition: ItemCondition,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub acquired_at: Option<NaiveDate>,
    #[serde(default)]
    pub acquisition_value: Option<f64>,
}

impl Item {
    /// An item is available iff at least one unit is in stock.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Whole years since acquisition, `None` when the acquisition date is
    /// missing or in the future.
    pub fn age_years(&self, today: NaiveDate) -> Option<u32> {
        self.acquired_at.and_then(|d| today.years_since(d))
    }
}

// =========================================================
// Loans
// =========================================================

/// Loan lifecycle, owned by the server and observed by the client.
///
/// The only legal transitions are `Menunggu -> Dipinjam`,
/// `Menunggu -> Ditolak` and `Dipinjam -> Dikembalikan`; the two
/// terminal states never transition again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// Pending an admin decision.
    Menunggu,
    /// Approved and currently borrowed.
    Dipinjam,
    /// Returned (terminal).
    Dikembalikan,
    /// Rejected (terminal).
    Ditolak,
}

impl LoanStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoanStatus::Dikembalikan | LoanStatus::Ditolak)
    }

    pub fn can_transition_to(&self, next: LoanStatus) -> bool {
        matches!(
            (self, next),
            (LoanStatus::Menunggu, LoanStatus::Dipinjam)
                | (LoanStatus::Menunggu, LoanStatus::Ditolak)
                | (LoanStatus::Dipinjam, LoanStatus::Dikembalikan)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanStatus::Menunggu => "Pending",
            LoanStatus::Dipinjam => "Borrowed",
            LoanStatus::Dikembalikan => "Returned",
            LoanStatus::Ditolak => "Rejected",
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            LoanStatus::Menunggu => "menunggu",
            LoanStatus::Dipinjam => "dipinjam",
            LoanStatus::Dikembalikan => "dikembalikan",
            LoanStatus::Ditolak => "ditolak",
        }
    }

    /// Inverse of [`Self::as_wire`]; used by `<select>` handlers.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "menunggu" => Some(LoanStatus::Menunggu),
            "dipinjam" => Some(LoanStatus::Dipinjam),
            "dikembalikan" => Some(LoanStatus::Dikembalikan),
            "ditolak" => Some(LoanStatus::Ditolak),
            _ => None,
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One line of a loan: an item reference and how many units of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanItem {
    pub item_id: i64,
    pub quantity: u32,
    /// Embedded item record. May be absent, and may point at an item that
    /// no longer exists; display code must fall back gracefully.
    #[serde(default)]
    pub item: Option<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user: Option<User>,
    pub items: Vec<LoanItem>,
    pub loan_date: NaiveDate,
    pub return_due: NaiveDate,
    #[serde(default)]
    pub returned_at: Option<NaiveDate>,
    #[serde(default)]
    pub purpose: Option<String>,
    pub status: LoanStatus,
}

// =========================================================
// Request / response payloads
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: Role,
    pub division: String,
}

impl RegisterRequest {
    /// Self-service signup: the role and division are fixed defaults, not
    /// user input.
    pub fn self_service(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password_confirmation: password.clone(),
            password,
            role: SELF_SERVICE_ROLE,
            division: SELF_SERVICE_DIVISION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanItemRequest {
    pub item_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoanRequest {
    pub items: Vec<LoanItemRequest>,
    pub loan_date: NaiveDate,
    pub return_due: NaiveDate,
    #[serde(default)]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLoanRequest {
    pub status: LoanStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<NaiveDate>,
}

/// Field set of the item create/edit form. Sent as multipart form data
/// (with an optional photo part), not as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub code: String,
    pub name: String,
    pub category_id: Option<i64>,
    pub stock: u32,
    pub condition: ItemCondition,
    pub description: String,
    pub acquired_at: Option<NaiveDate>,
    pub acquisition_value: Option<f64>,
}

/// Bare `{ "message": ... }` response used by the auth housekeeping
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
