use crate::components::icons::RefreshCw;
use crate::components::loan_request_dialog::LoanRequestDialog;
use crate::components::shell::{Shell, blocking_alert, status_badge};
use crate::session::{self, use_session};
use futures::future::join;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sarpras_shared::protocol::{ListItemsRequest, MyLoansRequest};
use sarpras_shared::{CreateLoanRequest, LoanStatus, UpdateLoanRequest, date};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub mod state;

use state::{StaffAction, StaffState, reduce};

/// Staff home: the item catalog and the user's own loans, reconciled from
/// two parallel fetches.
#[component]
pub fn StaffHomePage() -> impl IntoView {
    let session = use_session();

    let (board, set_board) = signal(StaffState::default());
    let (loading, set_loading) = signal(true);
    // (message, is_error)
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    // cooperative unmount guard: a fetch that completes after teardown must
    // not write into disposed state
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    let load = Callback::new({
        let alive = alive.clone();
        move |_: ()| {
            let alive = alive.clone();
            let api = session.api();
            set_loading.set(true);
            spawn_local(async move {
                // both fetches in flight at once, joined before state is
                // touched; a failure degrades its list to empty
                let (items_res, loans_res) =
                    join(api.send(&ListItemsRequest), api.send(&MyLoansRequest)).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let items = items_res.unwrap_or_else(|e| {
                    session::note_unauthorized(&session, &e);
                    web_sys::console::error_1(
                        &format!("[Loans] loading items failed: {e}").into(),
                    );
                    Vec::new()
                });
                let loans = loans_res.unwrap_or_else(|e| {
                    session::note_unauthorized(&session, &e);
                    web_sys::console::error_1(
                        &format!("[Loans] loading loans failed: {e}").into(),
                    );
                    Vec::new()
                });
                set_board.update(|s| {
                    *s = reduce(std::mem::take(s), StaffAction::Loaded { items, loans })
                });
                set_loading.set(false);
            });
        }
    });

    load.run(());

    // Return flow: the update call fires, then the loan leaves the panel
    // whatever the outcome; a failure is only logged.
    let on_return = Callback::new({
        let alive = alive.clone();
        move |loan_id: i64| {
            let alive = alive.clone();
            let api = session.api();
            spawn_local(async move {
                let request = UpdateLoanRequest {
                    status: LoanStatus::Dikembalikan,
                    returned_at: Some(date::today()),
                };
                if let Err(e) = api.update_loan(loan_id, &request).await {
                    session::note_unauthorized(&session, &e);
                    web_sys::console::error_1(
                        &format!("[Loans] return update for loan {loan_id} failed: {e}").into(),
                    );
                }
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                set_board
                    .update(|s| *s = reduce(std::mem::take(s), StaffAction::Returned { id: loan_id }));
            });
        }
    });

    let handle_submit = Callback::new(move |request: CreateLoanRequest| {
        let api = session.api();
        spawn_local(async move {
            match api.send(&request).await {
                Ok(_) => {
                    set_notification.set(Some(("Loan request submitted.".to_string(), false)));
                    load.run(());
                }
                Err(e) => {
                    session::note_unauthorized(&session, &e);
                    blocking_alert(&e.user_message());
                }
            }
        });
    });

    // clear the toast after 3 seconds
    Effect::new(move |_| {
        if notification.get().is_some() {
            Timeout::new(3_000, move || set_notification.set(None)).forget();
        }
    });

    let catalog = Signal::derive(move || board.with(|b| b.catalog.clone()));
    let active_loans = move || board.with(|b| b.active.clone());
    let catalog_empty = move || board.with(|b| b.catalog.is_empty());
    let active_empty = move || board.with(|b| b.active.is_empty());

    view! {
        <Shell>
            <Show when=move || notification.get().is_some()>
                <div class="toast toast-top toast-end z-50">
                    <div class=move || {
                        let is_err = notification.get().map(|(_, e)| e).unwrap_or(false);
                        if is_err { "alert alert-error shadow-lg" } else { "alert alert-success shadow-lg" }
                    }>
                        <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-2xl font-bold">"Inventory catalog"</h2>
                    <p class="text-base-content/70 text-sm">"What you can borrow right now."</p>
                </div>
                <div class="flex gap-2">
                    <button
                        on:click=move |_| load.run(())
                        disabled=move || loading.get()
                        class="btn btn-ghost btn-circle"
                    >
                        <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                    </button>
                    <LoanRequestDialog items=catalog on_submit=handle_submit />
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Code"</th>
                                    <th>"Name"</th>
                                    <th class="hidden md:table-cell">"Category"</th>
                                    <th class="hidden md:table-cell">"Condition"</th>
                                    <th>"Stock"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || catalog_empty() && !loading.get()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            "No items to show."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || loading.get() && catalog_empty()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || catalog.get()
                                    key=|row| row.id
                                    children=move |row| {
                                        view! {
                                            <tr>
                                                <td class="font-mono text-sm">{row.code}</td>
                                                <td class="font-medium">{row.name}</td>
                                                <td class="hidden md:table-cell">
                                                    {row.category.unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td class="hidden md:table-cell">{row.condition.label()}</td>
                                                <td>{row.stock}</td>
                                                <td>
                                                    {if row.available {
                                                        view! { <span class="badge badge-success badge-outline">"Available"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge-ghost">"Out of stock"</span> }.into_any()
                                                    }}
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

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="p-6 pb-2">
                        <h3 class="card-title">"My loans"</h3>
                        <p class="text-base-content/70 text-sm">
                            "Requests and items currently with you. Returned loans disappear from this list."
                        </p>
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table w-full">
                            <thead>
                                <tr>
                                    <th>"Items"</th>
                                    <th class="hidden md:table-cell">"Loaned"</th>
                                    <th class="hidden md:table-cell">"Return by"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || active_empty() && !loading.get()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            "Nothing borrowed at the moment."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=active_loans
                                    key=|row| row.id
                                    children=move |row| {
                                        let summary = row
                                            .entries
                                            .iter()
                                            .map(|entry| {
                                                // unresolved reference: placeholder, not a crash
                                                let name = entry
                                                    .name
                                                    .clone()
                                                    .unwrap_or_else(|| format!("item #{} (removed)", entry.item_id));
                                                format!("{} x{}", name, entry.quantity)
                                            })
                                            .collect::<Vec<_>>()
                                            .join(", ");
                                        let purpose = row.purpose.clone().unwrap_or_default();
                                        let row_id = row.id;
                                        let status = row.status;
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="font-medium">{summary}</div>
                                                    <div class="text-xs text-base-content/50">{purpose}</div>
                                                </td>
                                                <td class="hidden md:table-cell">{row.loan_date.to_string()}</td>
                                                <td class="hidden md:table-cell">{row.return_due.to_string()}</td>
                                                <td>
                                                    <span class=status_badge(status)>{status.label()}</span>
                                                </td>
                                                <td>
                                                    <Show when=move || status == LoanStatus::Dipinjam>
                                                        <button
                                                            class="btn btn-outline btn-sm"
                                                            on:click=move |_| on_return.run(row_id)
                                                        >
                                                            "Return"
                                                        </button>
                                                    </Show>
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
