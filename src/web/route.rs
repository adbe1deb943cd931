//! Route definitions - domain model.
//!
//! This is the pure business-logic layer, free of DOM and `web_sys`
//! concerns: every route knows which roles may render it, and [`resolve`]
//! turns a (route, session role) pair into a guard decision. The router
//! service applies these decisions to the browser.

use sarpras_shared::Role;
use std::fmt::Display;

#[cfg(test)]
mod tests;

/// Application route table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Login page (default route).
    #[default]
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    /// Staff home: the catalog plus the user's own loans.
    StaffHome,
    /// Profile and password management, any authenticated role.
    Profile,
    AdminHome,
    AdminLoans,
    AdminItems,
    AdminItemNew,
    AdminItemEdit(i64),
    AdminReports,
    AdminUsers,
    NotFound,
}

const STAFF_ONLY: &[Role] = &[Role::Staff];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ANY_ROLE: &[Role] = &[Role::Staff, Role::Admin];

impl AppRoute {
    /// Parse a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        if let Some(rest) = path.strip_prefix("/admin/items/edit/") {
            return match rest.parse::<i64>() {
                Ok(id) => Self::AdminItemEdit(id),
                Err(_) => Self::NotFound,
            };
        }
        match path {
            "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/forgot-password" => Self::ForgotPassword,
            "/reset-password" => Self::ResetPassword,
            "/user" => Self::StaffHome,
            "/profile" => Self::Profile,
            "/admin" => Self::AdminHome,
            "/admin/loans" => Self::AdminLoans,
            "/admin/items" => Self::AdminItems,
            "/admin/items/new" => Self::AdminItemNew,
            "/admin/reports" => Self::AdminReports,
            "/admin/users" => Self::AdminUsers,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),
            Self::Register => "/register".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::ResetPassword => "/reset-password".to_string(),
            Self::StaffHome => "/user".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::AdminHome => "/admin".to_string(),
            Self::AdminLoans => "/admin/loans".to_string(),
            Self::AdminItems => "/admin/items".to_string(),
            Self::AdminItemNew => "/admin/items/new".to_string(),
            Self::AdminItemEdit(id) => format!("/admin/items/edit/{id}"),
            Self::AdminReports => "/admin/reports".to_string(),
            Self::AdminUsers => "/admin/users".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Roles allowed to render this route; `None` means public.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::Login
            | Self::Register
            | Self::ForgotPassword
            | Self::ResetPassword
            | Self::NotFound => None,
            Self::StaffHome => Some(STAFF_ONLY),
            Self::Profile => Some(ANY_ROLE),
            Self::AdminHome
            | Self::AdminLoans
            | Self::AdminItems
            | Self::AdminItemNew
            | Self::AdminItemEdit(_)
            | Self::AdminReports
            | Self::AdminUsers => Some(ADMIN_ONLY),
        }
    }

    /// Guest pages an authenticated user is bounced away from.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(
            self,
            Self::Login | Self::Register | Self::ForgotPassword | Self::ResetPassword
        )
    }

    /// Landing page per role. Anything that is not an admin — including a
    /// role this client does not recognize — lands on the staff home.
    pub fn home_for(role: Role) -> Self {
        if role.is_admin() {
            Self::AdminHome
        } else {
            Self::StaffHome
        }
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Outcome of guarding one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(AppRoute),
}

/// **Core guard logic.**
///
/// `role` is `None` when no session exists; the session invariant makes
/// "has a token" and "has a role" the same question.
pub fn resolve(route: &AppRoute, role: Option<Role>) -> GuardDecision {
    let Some(allowed) = route.allowed_roles() else {
        // public page; authenticated users skip the guest pages
        return match role {
            Some(role) if route.should_redirect_when_authenticated() => {
                GuardDecision::Redirect(AppRoute::home_for(role))
            }
            _ => GuardDecision::Render,
        };
    };
    let Some(role) = role else {
        return GuardDecision::Redirect(AppRoute::auth_failure_redirect());
    };
    if allowed.contains(&role) {
        return GuardDecision::Render;
    }
    // Disallowed role: send it home. When the fall-through home is the very
    // route being resolved (an unknown role reaching the staff home), render
    // instead of redirecting in place.
    let home = AppRoute::home_for(role);
    if home == *route {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(home)
    }
}
