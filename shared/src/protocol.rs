//! Typed endpoint protocol.
//!
//! Each fixed-path endpoint is described by its request type: the path, the
//! HTTP method and the response type travel together, so the API client can
//! send any of them through one generic code path. Endpoints with path
//! parameters or multipart bodies live as concrete methods on the client
//! instead.

use crate::{
    AuthPayload, Category, ChangePasswordRequest, CreateLoanRequest, ForgotPasswordRequest, Item,
    Loan, LoginRequest, MessageResponse, RegisterRequest, ResetPasswordRequest,
    UpdateProfileRequest, User,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an
/// API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the response body arrives inside a `{ "data": ... }`
    /// envelope. The auth housekeeping endpoints answer with a bare
    /// `{ "message": ... }` object instead.
    const ENVELOPE: bool = true;
}

// =========================================================
// Session
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = AuthPayload;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for RegisterRequest {
    type Response = User;
    const PATH: &'static str = "/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Response = MessageResponse;
    const PATH: &'static str = "/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENVELOPE: bool = false;
}

impl ApiRequest for ForgotPasswordRequest {
    type Response = MessageResponse;
    const PATH: &'static str = "/forgot-password";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENVELOPE: bool = false;
}

impl ApiRequest for ResetPasswordRequest {
    type Response = MessageResponse;
    const PATH: &'static str = "/reset-password";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENVELOPE: bool = false;
}

impl ApiRequest for ChangePasswordRequest {
    type Response = MessageResponse;
    const PATH: &'static str = "/change-password";
    const METHOD: HttpMethod = HttpMethod::Put;
    const ENVELOPE: bool = false;
}

// =========================================================
// Profile / users
// =========================================================

/// Current user's identity record.
#[derive(Debug, Serialize, Deserialize)]
pub struct MeRequest;

impl ApiRequest for MeRequest {
    type Response = User;
    const PATH: &'static str = "/me";
    const METHOD: HttpMethod = HttpMethod::Get;
}

impl ApiRequest for UpdateProfileRequest {
    type Response = User;
    const PATH: &'static str = "/user/update";
    const METHOD: HttpMethod = HttpMethod::Put;
}

/// All registered users (admin).
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsersRequest;

impl ApiRequest for ListUsersRequest {
    type Response = Vec<User>;
    const PATH: &'static str = "/user";
    const METHOD: HttpMethod = HttpMethod::Get;
}

// =========================================================
// Inventory
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListItemsRequest;

impl ApiRequest for ListItemsRequest {
    type Response = Vec<Item>;
    const PATH: &'static str = "/items";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListCategoriesRequest;

impl ApiRequest for ListCategoriesRequest {
    type Response = Vec<Category>;
    const PATH: &'static str = "/categories";
    const METHOD: HttpMethod = HttpMethod::Get;
}

// =========================================================
// Loans
// =========================================================

/// The requesting user's own loans.
#[derive(Debug, Serialize, Deserialize)]
pub struct MyLoansRequest;

impl ApiRequest for MyLoansRequest {
    type Response = Vec<Loan>;
    const PATH: &'static str = "/loans";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Every user's loans (admin).
#[derive(Debug, Serialize, Deserialize)]
pub struct AllLoansRequest;

impl ApiRequest for AllLoansRequest {
    type Response = Vec<Loan>;
    const PATH: &'static str = "/allLoans";
    const METHOD: HttpMethod = HttpMethod::Get;
}

impl ApiRequest for CreateLoanRequest {
    type Response = Loan;
    const PATH: &'static str = "/loan/store";
    const METHOD: HttpMethod = HttpMethod::Post;
}
