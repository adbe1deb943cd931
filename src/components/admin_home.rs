use crate::components::admin_loans::state::{AdminLoanRow, map_loans};
use crate::components::icons::{ClipboardList, Package, Users};
use crate::components::shell::Shell;
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use futures::future::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sarpras_shared::LoanStatus;
use sarpras_shared::protocol::{AllLoansRequest, ListItemsRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Admin landing page: headline numbers and the newest pending requests.
#[component]
pub fn AdminHomePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (item_count, set_item_count) = signal(0usize);
    let (unit_count, set_unit_count) = signal(0u64);
    let (rows, set_rows) = signal(Vec::<AdminLoanRow>::new());
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
            let (items_res, loans_res) =
                join(api.send(&ListItemsRequest), api.send(&AllLoansRequest)).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            let items = items_res.unwrap_or_else(|e| {
                session::note_unauthorized(&session, &e);
                web_sys::console::error_1(&format!("[Admin] loading items failed: {e}").into());
                Vec::new()
            });
            let loans = loans_res.unwrap_or_else(|e| {
                session::note_unauthorized(&session, &e);
                web_sys::console::error_1(&format!("[Admin] loading loans failed: {e}").into());
                Vec::new()
            });
            set_item_count.set(items.len());
            set_unit_count.set(items.iter().map(|item| item.stock as u64).sum());
            set_rows.set(map_loans(&loans));
            set_loading.set(false);
        });
    }

    let pending = move || {
        rows.with(|rows| {
            rows.iter()
                .filter(|row| row.status == LoanStatus::Menunggu)
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let pending_count = move || pending().len();
    let active_count = move || {
        rows.with(|rows| {
            rows.iter()
                .filter(|row| row.status == LoanStatus::Dipinjam)
                .count()
        })
    };
    // the five newest pending requests
    let newest_pending = move || {
        let mut list = pending();
        list.reverse();
        list.truncate(5);
        list
    };

    view! {
        <Shell>
            <div>
                <h2 class="text-2xl font-bold">"Dashboard"</h2>
                <p class="text-base-content/70 text-sm">"Inventory and loans at a glance."</p>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Package attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"Items"</div>
                    <div class="stat-value text-primary">{item_count}</div>
                    <div class="stat-desc">{move || format!("{} units in stock", unit_count.get())}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-warning">
                        <ClipboardList attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"Pending requests"</div>
                    <div class="stat-value text-warning">{pending_count}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-info">
                        <Users attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"Currently borrowed"</div>
                    <div class="stat-value text-info">{active_count}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="flex items-center justify-between p-6 pb-2">
                        <div>
                            <h3 class="card-title">"Newest pending requests"</h3>
                            <p class="text-base-content/70 text-sm">"Waiting for a decision."</p>
                        </div>
                        <button
                            class="btn btn-outline btn-sm"
                            on:click=move |_| router.navigate_to(AppRoute::AdminLoans)
                        >
                            "Review all"
                        </button>
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table w-full">
                            <thead>
                                <tr>
                                    <th>"Requester"</th>
                                    <th>"Items"</th>
                                    <th class="hidden md:table-cell">"Loaned"</th>
                                    <th class="hidden md:table-cell">"Return by"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || pending_count() == 0 && !loading.get()>
                                    <tr>
                                        <td colspan="4" class="text-center py-8 text-base-content/50">
                                            "Nothing waiting. Well done."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || loading.get() && pending_count() == 0>
                                    <tr>
                                        <td colspan="4" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=newest_pending
                                    key=|row| row.id
                                    children=move |row| {
                                        view! {
                                            <tr>
                                                <td class="font-medium">{row.borrower}</td>
                                                <td>{row.item_summary}</td>
                                                <td class="hidden md:table-cell">{row.loan_date.to_string()}</td>
                                                <td class="hidden md:table-cell">{row.return_due.to_string()}</td>
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
