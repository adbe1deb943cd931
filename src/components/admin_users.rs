use crate::components::shell::Shell;
use crate::session::{self, use_session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use sarpras_shared::User;
use sarpras_shared::protocol::ListUsersRequest;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Registered users, read-only. Account management happens server-side.
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let session = use_session();

    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    {
        let alive = alive.clone();
        let api = session.api();
        spawn_local(async move {
            let list = api.send(&ListUsersRequest).await.unwrap_or_else(|e| {
                session::note_unauthorized(&session, &e);
                web_sys::console::error_1(&format!("[Users] loading users failed: {e}").into());
                Vec::new()
            });
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            set_users.set(list);
            set_loading.set(false);
        });
    }

    let users_empty = move || users.with(|list| list.is_empty());

    view! {
        <Shell>
            <div>
                <h2 class="text-2xl font-bold">"Users"</h2>
                <p class="text-base-content/70 text-sm">"Everyone with a Sarpras account."</p>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th class="hidden md:table-cell">"Division"</th>
                                    <th class="hidden md:table-cell">"Phone"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || users_empty() && !loading.get()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            "No users to show."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || loading.get() && users_empty()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || users.get()
                                    key=|user| user.id
                                    children=move |user| {
                                        let role_class = if user.role.is_admin() {
                                            "badge badge-primary"
                                        } else {
                                            "badge badge-ghost"
                                        };
                                        view! {
                                            <tr>
                                                <td class="font-medium">{user.name.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>
                                                    <span class=role_class>{user.role.as_str()}</span>
                                                </td>
                                                <td class="hidden md:table-cell">
                                                    {user.division.clone().unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td class="hidden md:table-cell">
                                                    {user.phone.clone().unwrap_or_else(|| "-".to_string())}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </Shell>
    }
}
