use crate::components::icons::{RefreshCw, Search};
use crate::components::shell::{Shell, blocking_alert, status_badge};
use crate::session::{self, use_session};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sarpras_shared::protocol::AllLoansRequest;
use sarpras_shared::{LoanStatus, UpdateLoanRequest, date};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub mod state;

use state::{AdminLoansAction, AdminLoansState, LoanTab, reduce};

/// Admin loan management: pending requests on one tab, everything else on
/// the other, with a shared search box. Decisions patch local state only
/// after the server accepted them.
#[component]
pub fn AdminLoansPage() -> impl IntoView {
    let session = use_session();

    let (board, set_board) = signal(AdminLoansState::default());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

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
                let loans = api.send(&AllLoansRequest).await.unwrap_or_else(|e| {
                    session::note_unauthorized(&session, &e);
                    web_sys::console::error_1(
                        &format!("[Loans] loading all loans failed: {e}").into(),
                    );
                    Vec::new()
                });
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                set_board.update(|s| *s = reduce(std::mem::take(s), AdminLoansAction::Loaded(loans)));
                set_loading.set(false);
            });
        }
    });

    load.run(());

    // Decision flow: the local row is patched only after the update call
    // succeeded; a failure surfaces as a blocking message and changes
    // nothing locally.
    let decide = Callback::new({
        let alive = alive.clone();
        move |(loan_id, status): (i64, LoanStatus)| {
            let alive = alive.clone();
            let api = session.api();
            spawn_local(async move {
                let returned_at = (status == LoanStatus::Dikembalikan).then(date::today);
                let request = UpdateLoanRequest {
                    status,
                    returned_at,
                };
                match api.update_loan(loan_id, &request).await {
                    Ok(_) => {
                        if !alive.load(Ordering::Relaxed) {
                            return;
                        }
                        set_board.update(|s| {
                            *s = reduce(
                                std::mem::take(s),
                                AdminLoansAction::Decided {
                                    id: loan_id,
                                    status,
                                    returned_at,
                                },
                            )
                        });
                        set_notification
                            .set(Some((format!("Loan marked {}.", status.label().to_lowercase()), false)));
                    }
                    Err(e) => {
                        session::note_unauthorized(&session, &e);
                        blocking_alert(&e.user_message());
                    }
                }
            });
        }
    });

    Effect::new(move |_| {
        if notification.get().is_some() {
            Timeout::new(3_000, move || set_notification.set(None)).forget();
        }
    });

    let set_tab = move |tab: LoanTab| {
        set_board.update(|s| *s = reduce(std::mem::take(s), AdminLoansAction::TabChanged(tab)));
    };
    let on_search = move |ev| {
        let text = event_target_value(&ev);
        set_board.update(|s| *s = reduce(std::mem::take(s), AdminLoansAction::SearchChanged(text)));
    };

    let visible = move || board.with(|b| b.visible());
    let visible_empty = move || board.with(|b| b.visible().is_empty());
    let pending_count = move || board.with(|b| b.pending_count());
    let tab = move || board.with(|b| b.tab);
    let on_history_tab = move || tab() == LoanTab::History;

    view! {
        <Shell>
            <Show when=move || notification.get().is_some()>
                <div class="toast toast-top toast-end z-50">
                    <div class="alert alert-success shadow-lg">
                        <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <div class="flex items-center justify-between flex-wrap gap-2">
                <div>
                    <h2 class="text-2xl font-bold">"Loan requests"</h2>
                    <p class="text-base-content/70 text-sm">"Approve, reject and close loans."</p>
                </div>
                <button
                    on:click=move |_| load.run(())
                    disabled=move || loading.get()
                    class="btn btn-ghost btn-circle"
                >
                    <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                </button>
            </div>

            <div class="flex items-center justify-between flex-wrap gap-2">
                <div role="tablist" class="tabs tabs-boxed">
                    <a
                        role="tab"
                        class=move || if tab() == LoanTab::Pending { "tab tab-active" } else { "tab" }
                        on:click=move |_| set_tab(LoanTab::Pending)
                    >
                        "Pending" <span class="badge badge-warning badge-sm ml-2">{pending_count}</span>
                    </a>
                    <a
                        role="tab"
                        class=move || if tab() == LoanTab::History { "tab tab-active" } else { "tab" }
                        on:click=move |_| set_tab(LoanTab::History)
                    >
                        "History"
                    </a>
                </div>
                <label class="input input-bordered flex items-center gap-2 w-full md:w-72">
                    <Search attr:class="h-4 w-4 opacity-50" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search by name or item"
                        on:input=on_search
                        prop:value=move || board.with(|b| b.search.clone())
                    />
                </label>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Requester"</th>
                                    <th>"Items"</th>
                                    <th class="hidden md:table-cell">"Loaned"</th>
                                    <th class="hidden md:table-cell">"Return by"</th>
                                    <th class="hidden lg:table-cell">"Returned"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || visible_empty() && !loading.get()>
                                    <tr>
                                        <td colspan="7" class="text-center py-8 text-base-content/50">
                                            {move || if on_history_tab() {
                                                "No loans in the history yet."
                                            } else {
                                                "No pending requests."
                                            }}
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || loading.get() && visible_empty()>
                                    <tr>
                                        <td colspan="7" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=visible
                                    key=|row| (row.id, row.status)
                                    children=move |row| {
                                        let row_id = row.id;
                                        let status = row.status;
                                        let purpose = row.purpose.clone().unwrap_or_default();
                                        view! {
                                            <tr>
                                                <td class="font-medium">{row.borrower}</td>
                                                <td>
                                                    <div>{row.item_summary}</div>
                                                    <div class="text-xs text-base-content/50">{purpose}</div>
                                                </td>
                                                <td class="hidden md:table-cell">{row.loan_date.to_string()}</td>
                                                <td class="hidden md:table-cell">{row.return_due.to_string()}</td>
                                                <td class="hidden lg:table-cell">
                                                    {row.returned_at.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td>
                                                    <span class=status_badge(status)>{status.label()}</span>
                                                </td>
                                                <td>
                                                    <div class="flex gap-1 justify-end">
                                                        <Show when=move || status == LoanStatus::Menunggu>
                                                            <button
                                                                class="btn btn-success btn-xs"
                                                                on:click=move |_| decide.run((row_id, LoanStatus::Dipinjam))
                                                            >
                                                                "Approve"
                                                            </button>
                                                            <button
                                                                class="btn btn-error btn-outline btn-xs"
                                                                on:click=move |_| decide.run((row_id, LoanStatus::Ditolak))
                                                            >
                                                                "Reject"
                                                            </button>
                                                        </Show>
                                                        <Show when=move || status == LoanStatus::Dipinjam>
                                                            <button
                                                                class="btn btn-outline btn-xs"
                                                                on:click=move |_| decide.run((row_id, LoanStatus::Dikembalikan))
                                                            >
                                                                "Mark returned"
                                                            </button>
                                                        </Show>
                                                    </div>
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
