use crate::components::icons::Plus;
use crate::components::staff_home::state::CatalogRow;
use leptos::prelude::*;
use sarpras_shared::CreateLoanRequest;

mod form_state;

use form_state::FormState;

/// Loan request dialog: a small cart (item + quantity lines), the date
/// range, and a purpose note. Validation happens in the form state; the
/// parent owns the actual submission.
#[component]
pub fn LoanRequestDialog(
    /// Catalog rows; only available ones are offered.
    #[prop(into)] items: Signal<Vec<CatalogRow>>,
    #[prop(into)] on_submit: Callback<CreateLoanRequest>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let form = FormState::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let available = move || {
        items
            .get()
            .into_iter()
            .filter(|row| row.available)
            .collect::<Vec<_>>()
    };

    // cart lines carry only the item id; the name comes from the catalog
    let entry_name = move |item_id: i64| {
        items
            .get()
            .iter()
            .find(|row| row.id == item_id)
            .map(|row| row.name.clone())
            .unwrap_or_else(|| format!("item #{item_id}"))
    };

    let on_add = move |_| match form.add_entry() {
        Ok(()) => set_error_msg.set(None),
        Err(msg) => set_error_msg.set(Some(msg)),
    };

    let on_submit_form = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.to_request() {
            Ok(request) => {
                on_submit.run(request);
                set_open.set(false);
                set_error_msg.set(None);
                form.reset();
            }
            Err(msg) => set_error_msg.set(Some(msg)),
        }
    };

    view! {
        <button class="btn btn-primary gap-2" on:click=move |_| set_open.set(true)>
            <Plus attr:class="h-4 w-4" /> "Request a loan"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box max-w-lg">
                <h3 class="font-bold text-lg">"New loan request"</h3>
                <p class="py-2 text-base-content/70">"Pick the items you need and for how long."</p>

                <form on:submit=on_submit_form class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="flex gap-2 items-end">
                        <div class="form-control flex-1">
                            <label class="label" for="loan_item">
                                <span class="label-text">"Item"</span>
                            </label>
                            <select
                                id="loan_item"
                                class="select select-bordered w-full"
                                on:change=move |ev| form.selected_item.set(event_target_value(&ev))
                                prop:value=move || form.selected_item.get()
                            >
                                <option value="">"Choose an item"</option>
                                <For
                                    each=available
                                    key=|row| row.id
                                    children=move |row| {
                                        view! {
                                            <option value=row.id.to_string()>
                                                {format!("{} ({} in stock)", row.name, row.stock)}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <div class="form-control w-20">
                            <label class="label" for="loan_qty">
                                <span class="label-text">"Qty"</span>
                            </label>
                            <input
                                id="loan_qty"
                                type="number"
                                min="1"
                                class="input input-bordered w-full"
                                on:input=move |ev| form.quantity.set(event_target_value(&ev))
                                prop:value=move || form.quantity.get()
                            />
                        </div>
                        <button type="button" class="btn btn-outline" on:click=on_add>
                            "Add"
                        </button>
                    </div>

                    <Show when=move || !form.entries.get().is_empty()>
                        <ul class="menu bg-base-200 rounded-box">
                            <For
                                each=move || form.entries.get()
                                key=|entry| entry.item_id
                                children=move |entry| {
                                    view! {
                                        <li>
                                            <div class="flex justify-between">
                                                <span>{entry_name(entry.item_id)} " x" {entry.quantity}</span>
                                                <button
                                                    type="button"
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |_| form.remove_entry(entry.item_id)
                                                >
                                                    "remove"
                                                </button>
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="loan_date">
                                <span class="label-text">"Loan date"</span>
                            </label>
                            <input
                                id="loan_date"
                                type="date"
                                class="input input-bordered"
                                on:input=move |ev| form.loan_date.set(event_target_value(&ev))
                                prop:value=move || form.loan_date.get()
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="return_due">
                                <span class="label-text">"Return by"</span>
                            </label>
                            <input
                                id="return_due"
                                type="date"
                                class="input input-bordered"
                                on:input=move |ev| form.return_due.set(event_target_value(&ev))
                                prop:value=move || form.return_due.get()
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="purpose">
                            <span class="label-text">"Purpose"</span>
                        </label>
                        <textarea
                            id="purpose"
                            class="textarea textarea-bordered"
                            placeholder="What is this for?"
                            on:input=move |ev| form.purpose.set(event_target_value(&ev))
                            prop:value=move || form.purpose.get()
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            "Submit request"
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
