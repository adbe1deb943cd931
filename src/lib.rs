//! Sarpras front end: inventory catalog, loan workflow, reporting.
//!
//! Context-driven architecture with the moving parts kept decoupled:
//! - `web::route`: route table and guard rules (domain model)
//! - `web::router`: routing service (core engine)
//! - `session`: session state management, single writer
//! - `api`: the one outbound HTTP channel
//! - `components`: page layer

mod api;
mod session;

mod components {
    pub mod admin_home;
    pub mod admin_item_form;
    pub mod admin_items;
    pub mod admin_loans;
    pub mod admin_reports;
    pub mod admin_users;
    mod icons;
    pub mod loan_request_dialog;
    pub mod login;
    pub mod password;
    pub mod profile;
    pub mod register;
    pub mod shell;
    pub mod staff_home;
}

pub(crate) mod web;

use crate::components::admin_home::AdminHomePage;
use crate::components::admin_item_form::ItemFormPage;
use crate::components::admin_items::AdminItemsPage;
use crate::components::admin_loans::AdminLoansPage;
use crate::components::admin_reports::AdminReportsPage;
use crate::components::admin_users::AdminUsersPage;
use crate::components::login::LoginPage;
use crate::components::password::{ForgotPasswordPage, ResetPasswordPage};
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::components::staff_home::StaffHomePage;
use crate::session::{SessionContext, init_session};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;

/// Maps the current route to its page component. The router has already
/// applied the role guard before anything lands here.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        AppRoute::StaffHome => view! { <StaffHomePage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::AdminHome => view! { <AdminHomePage /> }.into_any(),
        AppRoute::AdminLoans => view! { <AdminLoansPage /> }.into_any(),
        AppRoute::AdminItems => view! { <AdminItemsPage /> }.into_any(),
        AppRoute::AdminItemNew => view! { <ItemFormPage /> }.into_any(),
        AppRoute::AdminItemEdit(id) => view! { <ItemFormPage item_id=id /> }.into_any(),
        AppRoute::AdminReports => view! { <AdminReportsPage /> }.into_any(),
        AppRoute::AdminUsers => view! { <AdminUsersPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. session context
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);

    // 2. restore the persisted session before anything renders
    init_session(&session_ctx);

    // 3. the role signal feeds the router's guard (decoupled)
    let session_role = session_ctx.role_signal();

    view! {
        <Router session_role=session_role>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
