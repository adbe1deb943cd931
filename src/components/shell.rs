//! Page chrome: the navbar every authenticated page sits in, plus the
//! blocking prompt helpers the mutation flows use.

use crate::components::icons::{LogOut, Package};
use crate::session::{self, use_session};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Blocking failure message, using the browser's native alert.
pub fn blocking_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Native confirmation prompt; `false` when the window is unavailable.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Badge class per loan status, shared by every loan table.
pub fn status_badge(status: sarpras_shared::LoanStatus) -> &'static str {
    match status {
        sarpras_shared::LoanStatus::Menunggu => "badge badge-warning",
        sarpras_shared::LoanStatus::Dipinjam => "badge badge-info",
        sarpras_shared::LoanStatus::Dikembalikan => "badge badge-success",
        sarpras_shared::LoanStatus::Ditolak => "badge badge-error",
    }
}

/// Navbar + content shell for authenticated pages. The link set follows the
/// session's role; the guard has already vetted the page itself.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let user = session.user_signal();
    let is_admin = Signal::derive(move || {
        user.get().map(|u| u.role.is_admin()).unwrap_or(false)
    });
    let user_name = move || user.get().map(|u| u.name).unwrap_or_default();

    let on_logout = move |_| {
        spawn_local(async move {
            // the router's session effect handles the redirect
            session::logout(&session).await;
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-md px-4">
                <div class="flex-1 gap-2">
                    <Package attr:class="h-6 w-6 text-primary" />
                    <a class="btn btn-ghost text-xl">"Sarpras"</a>
                    <Show
                        when=move || is_admin.get()
                        fallback=move || view! {
                            <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/user")>"Catalog"</a>
                        }
                    >
                        <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/admin")>"Dashboard"</a>
                        <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/admin/loans")>"Loans"</a>
                        <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/admin/items")>"Items"</a>
                        <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/admin/reports")>"Reports"</a>
                        <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/admin/users")>"Users"</a>
                    </Show>
                </div>
                <div class="flex-none gap-2">
                    <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/profile")>
                        {user_name}
                    </a>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                        <LogOut attr:class="h-4 w-4" /> "Sign out"
                    </button>
                </div>
            </div>
            <main class="p-4 md:p-8 max-w-7xl mx-auto space-y-6">{children()}</main>
        </div>
    }
}
