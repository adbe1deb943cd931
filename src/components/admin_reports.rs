use crate::components::admin_loans::state::{AdminLoanRow, map_loans};
use crate::components::icons::BarChart3;
use crate::components::shell::{Shell, status_badge};
use crate::session::{self, use_session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use sarpras_shared::protocol::AllLoansRequest;
use sarpras_shared::{LoanStatus, date};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Summary counts over a filtered row set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub pending: usize,
    pub active: usize,
    pub returned: usize,
    pub rejected: usize,
}

pub fn summarize(rows: &[AdminLoanRow]) -> ReportSummary {
    let mut summary = ReportSummary {
        total: rows.len(),
        ..ReportSummary::default()
    };
    for row in rows {
        match row.status {
            LoanStatus::Menunggu => summary.pending += 1,
            LoanStatus::Dipinjam => summary.active += 1,
            LoanStatus::Dikembalikan => summary.returned += 1,
            LoanStatus::Ditolak => summary.rejected += 1,
        }
    }
    summary
}

/// Month filter: an empty key selects everything, otherwise the loan date's
/// `YYYY-MM` key must match.
fn month_matches(row: &AdminLoanRow, month: &str) -> bool {
    month.is_empty() || date::month_key(row.loan_date) == month
}

/// Status filter from the select: anything that is not a known wire token
/// (including the "all" option) selects everything.
fn status_matches(row: &AdminLoanRow, filter: &str) -> bool {
    match LoanStatus::from_wire(filter) {
        Some(status) => row.status == status,
        None => true,
    }
}

pub fn filter_rows(rows: &[AdminLoanRow], month: &str, status: &str) -> Vec<AdminLoanRow> {
    rows.iter()
        .filter(|row| month_matches(row, month) && status_matches(row, status))
        .cloned()
        .collect()
}

/// Loan report: every loan tabulated, filterable by month and status, with
/// summary counts. Printing/export stays out of scope; this is the data.
#[component]
pub fn AdminReportsPage() -> impl IntoView {
    let session = use_session();

    let (rows, set_rows) = signal(Vec::<AdminLoanRow>::new());
    let (loading, set_loading) = signal(true);
    let (month, set_month) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    {
        let alive = alive.clone();
        let api = session.api();
        spawn_local(async move {
            let loans = api.send(&AllLoansRequest).await.unwrap_or_else(|e| {
                session::note_unauthorized(&session, &e);
                web_sys::console::error_1(&format!("[Reports] loading loans failed: {e}").into());
                Vec::new()
            });
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            set_rows.set(map_loans(&loans));
            set_loading.set(false);
        });
    }

    let filtered = Memo::new(move |_| {
        rows.with(|rows| filter_rows(rows, &month.get(), &status_filter.get()))
    });
    let summary = Memo::new(move |_| filtered.with(|rows| summarize(rows)));
    let filtered_empty = move || filtered.with(|rows| rows.is_empty());

    view! {
        <Shell>
            <div class="flex items-center gap-3">
                <BarChart3 attr:class="h-8 w-8 text-primary" />
                <div>
                    <h2 class="text-2xl font-bold">"Loan report"</h2>
                    <p class="text-base-content/70 text-sm">"Every loan, filterable by month and status."</p>
                </div>
            </div>

            <div class="flex flex-wrap gap-4 items-end">
                <div class="form-control">
                    <label class="label" for="month">
                        <span class="label-text">"Month"</span>
                    </label>
                    <input
                        id="month"
                        type="month"
                        class="input input-bordered"
                        on:input=move |ev| set_month.set(event_target_value(&ev))
                        prop:value=month
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="status">
                        <span class="label-text">"Status"</span>
                    </label>
                    <select
                        id="status"
                        class="select select-bordered"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                        prop:value=status_filter
                    >
                        <option value="">"All statuses"</option>
                        <option value=LoanStatus::Menunggu.as_wire()>{LoanStatus::Menunggu.label()}</option>
                        <option value=LoanStatus::Dipinjam.as_wire()>{LoanStatus::Dipinjam.label()}</option>
                        <option value=LoanStatus::Dikembalikan.as_wire()>{LoanStatus::Dikembalikan.label()}</option>
                        <option value=LoanStatus::Ditolak.as_wire()>{LoanStatus::Ditolak.label()}</option>
                    </select>
                </div>
                <button
                    class="btn btn-ghost"
                    on:click=move |_| {
                        set_month.set(String::new());
                        set_status_filter.set(String::new());
                    }
                >
                    "Clear filters"
                </button>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Loans"</div>
                    <div class="stat-value text-primary">{move || summary.get().total}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Pending"</div>
                    <div class="stat-value text-warning">{move || summary.get().pending}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Borrowed"</div>
                    <div class="stat-value text-info">{move || summary.get().active}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Returned"</div>
                    <div class="stat-value text-success">{move || summary.get().returned}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Rejected"</div>
                    <div class="stat-value text-error">{move || summary.get().rejected}</div>
                </div>
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
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || filtered_empty() && !loading.get()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            "Nothing matches these filters."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || loading.get() && filtered_empty()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || filtered.get()
                                    key=|row| row.id
                                    children=move |row| {
                                        view! {
                                            <tr>
                                                <td class="font-medium">{row.borrower}</td>
                                                <td>{row.item_summary}</td>
                                                <td class="hidden md:table-cell">{row.loan_date.to_string()}</td>
                                                <td class="hidden md:table-cell">{row.return_due.to_string()}</td>
                                                <td class="hidden lg:table-cell">
                                                    {row.returned_at.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td>
                                                    <span class=status_badge(row.status)>{row.status.label()}</span>
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
