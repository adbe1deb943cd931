use crate::components::icons::ArrowLeft;
use crate::components::shell::{Shell, blocking_alert};
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sarpras_shared::protocol::ListCategoriesRequest;
use sarpras_shared::{Category, ItemCondition};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod form_state;

use form_state::FormState;

/// Create/edit form for an inventory item. Both flows submit multipart form
/// data with an optional photo; the edit flow targets the POST-with-override
/// update endpoint.
#[component]
pub fn ItemFormPage(#[prop(into, optional)] item_id: Option<i64>) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let form = FormState::new();
    let photo_ref = NodeRef::<html::Input>::new();

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    // categories for the select; in the edit flow the item itself too
    {
        let alive = alive.clone();
        let api = session.api();
        spawn_local(async move {
            match api.send(&ListCategoriesRequest).await {
                Ok(list) => {
                    if alive.load(Ordering::Relaxed) {
                        set_categories.set(list);
                    }
                }
                Err(e) => {
                    session::note_unauthorized(&session, &e);
                    web_sys::console::error_1(
                        &format!("[Items] loading categories failed: {e}").into(),
                    );
                }
            }
        });
    }
    if let Some(id) = item_id {
        let alive = alive.clone();
        let api = session.api();
        spawn_local(async move {
            match api.item(id).await {
                Ok(item) => {
                    if alive.load(Ordering::Relaxed) {
                        form.load(&item);
                    }
                }
                Err(e) => {
                    session::note_unauthorized(&session, &e);
                    web_sys::console::error_1(&format!("[Items] loading item {id} failed: {e}").into());
                    if alive.load(Ordering::Relaxed) {
                        set_error_msg.set(Some("Could not load this item.".to_string()));
                    }
                }
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(msg) => {
                set_error_msg.set(Some(msg));
                return;
            }
        };
        let photo = photo_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = session.api();
        spawn_local(async move {
            let result = match item_id {
                Some(id) => api.update_item(id, &draft, photo.as_ref()).await,
                None => api.store_item(&draft, photo.as_ref()).await,
            };
            match result {
                Ok(_) => router.navigate_to(AppRoute::AdminItems),
                Err(e) => {
                    session::note_unauthorized(&session, &e);
                    blocking_alert(&e.user_message());
                    set_is_submitting.set(false);
                }
            }
        });
    };

    let title = if item_id.is_some() {
        "Edit item"
    } else {
        "New item"
    };

    view! {
        <Shell>
            <div class="flex items-center gap-2">
                <button
                    class="btn btn-ghost btn-circle"
                    on:click=move |_| router.navigate_to(AppRoute::AdminItems)
                >
                    <ArrowLeft attr:class="h-5 w-5" />
                </button>
                <h2 class="text-2xl font-bold">{title}</h2>
            </div>

            <div class="card bg-base-100 shadow-xl max-w-2xl">
                <form class="card-body space-y-2" on:submit=on_submit>
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="code">
                                <span class="label-text">"Code"</span>
                            </label>
                            <input
                                id="code"
                                type="text"
                                placeholder="INV-001"
                                class="input input-bordered"
                                on:input=move |ev| form.code.set(event_target_value(&ev))
                                prop:value=move || form.code.get()
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| form.name.set(event_target_value(&ev))
                                prop:value=move || form.name.get()
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="category">
                                <span class="label-text">"Category"</span>
                            </label>
                            <select
                                id="category"
                                class="select select-bordered"
                                on:change=move |ev| form.category_id.set(event_target_value(&ev))
                                prop:value=move || form.category_id.get()
                            >
                                <option value="">"No category"</option>
                                <For
                                    each=move || categories.get()
                                    key=|category| category.id
                                    children=move |category| {
                                        view! {
                                            <option value=category.id.to_string()>{category.name}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="stock">
                                <span class="label-text">"Stock"</span>
                            </label>
                            <input
                                id="stock"
                                type="number"
                                min="0"
                                class="input input-bordered"
                                on:input=move |ev| form.stock.set(event_target_value(&ev))
                                prop:value=move || form.stock.get()
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="condition">
                                <span class="label-text">"Condition"</span>
                            </label>
                            <select
                                id="condition"
                                class="select select-bordered"
                                on:change=move |ev| form.condition.set(event_target_value(&ev))
                                prop:value=move || form.condition.get()
                            >
                                <option value=ItemCondition::Good.as_wire()>{ItemCondition::Good.label()}</option>
                                <option value=ItemCondition::LightDamage.as_wire()>{ItemCondition::LightDamage.label()}</option>
                                <option value=ItemCondition::HeavyDamage.as_wire()>{ItemCondition::HeavyDamage.label()}</option>
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="acquired_at">
                                <span class="label-text">"Acquired on"</span>
                            </label>
                            <input
                                id="acquired_at"
                                type="date"
                                class="input input-bordered"
                                on:input=move |ev| form.acquired_at.set(event_target_value(&ev))
                                prop:value=move || form.acquired_at.get()
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="value">
                                <span class="label-text">"Acquisition value"</span>
                            </label>
                            <input
                                id="value"
                                type="number"
                                min="0"
                                step="any"
                                class="input input-bordered"
                                on:input=move |ev| form.acquisition_value.set(event_target_value(&ev))
                                prop:value=move || form.acquisition_value.get()
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="photo">
                                <span class="label-text">"Photo"</span>
                            </label>
                            <input
                                id="photo"
                                type="file"
                                accept="image/*"
                                class="file-input file-input-bordered"
                                node_ref=photo_ref
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="description">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="description"
                            class="textarea textarea-bordered"
                            on:input=move |ev| form.description.set(event_target_value(&ev))
                            prop:value=move || form.description.get()
                        ></textarea>
                    </div>

                    <div class="form-control mt-4">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                            } else {
                                "Save item".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Shell>
    }
}
