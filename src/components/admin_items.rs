use crate::components::icons::{Pencil, Plus, RefreshCw, Trash2};
use crate::components::shell::{Shell, blocking_alert, confirm};
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use futures::future::join;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sarpras_shared::protocol::{ListCategoriesRequest, ListItemsRequest};
use sarpras_shared::{Category, Item, date};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Admin asset catalog: list, jump to create/edit, delete. Plain CRUD, no
/// state machine — deletions filter the local list after the server call.
#[component]
pub fn AdminItemsPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (items, set_items) = signal(Vec::<Item>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
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
                let (items_res, categories_res) = join(
                    api.send(&ListItemsRequest),
                    api.send(&ListCategoriesRequest),
                )
                .await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                set_items.set(items_res.unwrap_or_else(|e| {
                    session::note_unauthorized(&session, &e);
                    web_sys::console::error_1(
                        &format!("[Items] loading items failed: {e}").into(),
                    );
                    Vec::new()
                }));
                set_categories.set(categories_res.unwrap_or_else(|e| {
                    session::note_unauthorized(&session, &e);
                    web_sys::console::error_1(
                        &format!("[Items] loading categories failed: {e}").into(),
                    );
                    Vec::new()
                }));
                set_loading.set(false);
            });
        }
    });

    load.run(());

    let on_delete = Callback::new({
        let alive = alive.clone();
        move |(item_id, name): (i64, String)| {
            if !confirm(&format!("Delete \"{name}\"? This cannot be undone.")) {
                return;
            }
            let alive = alive.clone();
            let api = session.api();
            spawn_local(async move {
                match api.delete_item(item_id).await {
                    Ok(_) => {
                        if !alive.load(Ordering::Relaxed) {
                            return;
                        }
                        set_items.update(|list| list.retain(|item| item.id != item_id));
                        set_notification.set(Some(("Item deleted.".to_string(), false)));
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

    // embedded category first, then the fetched category list
    let category_name = move |item: &Item| -> String {
        item.category
            .as_ref()
            .map(|c| c.name.clone())
            .or_else(|| {
                item.category_id.and_then(|id| {
                    categories
                        .get()
                        .iter()
                        .find(|c| c.id == id)
                        .map(|c| c.name.clone())
                })
            })
            .unwrap_or_else(|| "-".to_string())
    };

    let items_empty = move || items.with(|list| list.is_empty());

    view! {
        <Shell>
            <Show when=move || notification.get().is_some()>
                <div class="toast toast-top toast-end z-50">
                    <div class="alert alert-success shadow-lg">
                        <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-2xl font-bold">"Items"</h2>
                    <p class="text-base-content/70 text-sm">"The asset catalog."</p>
                </div>
                <div class="flex gap-2">
                    <button
                        on:click=move |_| load.run(())
                        disabled=move || loading.get()
                        class="btn btn-ghost btn-circle"
                    >
                        <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                    </button>
                    <button
                        class="btn btn-primary gap-2"
                        on:click=move |_| router.navigate_to(AppRoute::AdminItemNew)
                    >
                        <Plus attr:class="h-4 w-4" /> "Add item"
                    </button>
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
                                    <th>"Stock"</th>
                                    <th class="hidden md:table-cell">"Condition"</th>
                                    <th class="hidden lg:table-cell">"Age"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || items_empty() && !loading.get()>
                                    <tr>
                                        <td colspan="7" class="text-center py-8 text-base-content/50">
                                            "No items yet. Add one to get started."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || loading.get() && items_empty()>
                                    <tr>
                                        <td colspan="7" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || items.get()
                                    key=|item| item.id
                                    children=move |item| {
                                        let item_id = item.id;
                                        let item_name = item.name.clone();
                                        let category = category_name(&item);
                                        let age = item
                                            .age_years(date::today())
                                            .map(|years| format!("{years} yr"))
                                            .unwrap_or_else(|| "-".to_string());
                                        let stock = item.stock;
                                        let stock_class = if stock > 0 { "" } else { "text-error font-semibold" };
                                        view! {
                                            <tr>
                                                <td class="font-mono text-sm">{item.code.clone()}</td>
                                                <td class="font-medium">{item.name.clone()}</td>
                                                <td class="hidden md:table-cell">{category}</td>
                                                <td>
                                                    <span class=stock_class>{stock}</span>
                                                </td>
                                                <td class="hidden md:table-cell">{item.condition.label()}</td>
                                                <td class="hidden lg:table-cell">{age}</td>
                                                <td>
                                                    <div class="flex gap-1 justify-end">
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-square"
                                                            on:click=move |_| router.navigate_to(AppRoute::AdminItemEdit(item_id))
                                                        >
                                                            <Pencil attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-square text-error"
                                                            on:click=move |_| on_delete.run((item_id, item_name.clone()))
                                                        >
                                                            <Trash2 attr:class="h-4 w-4" />
                                                        </button>
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
