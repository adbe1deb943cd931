use crate::components::shell::{Shell, blocking_alert};
use crate::session::{self, use_session};
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sarpras_shared::protocol::MeRequest;
use sarpras_shared::{ChangePasswordRequest, UpdateProfileRequest, User};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Profile page: identity details, photo, and password change. The cached
/// identity is refreshed from `/me` on mount so edits start from the
/// server's copy.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (address, set_address) = signal(String::new());

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    let (is_saving, set_is_saving) = signal(false);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let photo_ref = NodeRef::<html::Input>::new();

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    let fill_form = move |user: &User| {
        set_name.set(user.name.clone());
        set_email.set(user.email.clone());
        set_phone.set(user.phone.clone().unwrap_or_default());
        set_address.set(user.address.clone().unwrap_or_default());
    };

    // start from the cached identity, then refresh from the server
    if let Some(user) = session.user() {
        fill_form(&user);
    }
    {
        let alive = alive.clone();
        let api = session.api();
        spawn_local(async move {
            match api.send(&MeRequest).await {
                Ok(user) => {
                    if alive.load(Ordering::Relaxed) {
                        fill_form(&user);
                        session::refresh_user(&session, user);
                    }
                }
                Err(e) => {
                    session::note_unauthorized(&session, &e);
                    web_sys::console::error_1(&format!("[Profile] refresh failed: {e}").into());
                }
            }
        });
    }

    let on_save_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() || email.get().is_empty() {
            set_notification.set(Some(("Name and email are required".to_string(), true)));
            return;
        }
        set_is_saving.set(true);

        let request = UpdateProfileRequest {
            name: name.get(),
            email: email.get(),
            phone: {
                let value = phone.get();
                (!value.trim().is_empty()).then_some(value)
            },
            address: {
                let value = address.get();
                (!value.trim().is_empty()).then_some(value)
            },
        };
        let api = session.api();
        spawn_local(async move {
            match api.send(&request).await {
                Ok(user) => {
                    session::refresh_user(&session, user);
                    set_notification.set(Some(("Profile updated.".to_string(), false)));
                }
                Err(e) => {
                    session::note_unauthorized(&session, &e);
                    blocking_alert(&e.user_message());
                }
            }
            set_is_saving.set(false);
        });
    };

    let on_upload_photo = move |_| {
        let Some(file) = photo_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            set_notification.set(Some(("Choose a photo first".to_string(), true)));
            return;
        };
        let api = session.api();
        spawn_local(async move {
            match api.upload_photo(&file).await {
                Ok(user) => {
                    session::refresh_user(&session, user);
                    set_notification.set(Some(("Photo updated.".to_string(), false)));
                }
                Err(e) => {
                    session::note_unauthorized(&session, &e);
                    blocking_alert(&e.user_message());
                }
            }
        });
    };

    let on_change_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if current_password.get().is_empty() || new_password.get().is_empty() {
            set_notification.set(Some(("Fill in both password fields".to_string(), true)));
            return;
        }
        if new_password.get() != confirm_password.get() {
            set_notification.set(Some(("New passwords do not match".to_string(), true)));
            return;
        }

        let request = ChangePasswordRequest {
            current_password: current_password.get(),
            new_password: new_password.get(),
            new_password_confirmation: confirm_password.get(),
        };
        let api = session.api();
        spawn_local(async move {
            match api.send(&request).await {
                Ok(res) => {
                    set_notification.set(Some((res.message, false)));
                    set_current_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                Err(e) => {
                    session::note_unauthorized(&session, &e);
                    blocking_alert(&e.user_message());
                }
            }
        });
    };

    Effect::new(move |_| {
        if notification.get().is_some() {
            Timeout::new(3_000, move || set_notification.set(None)).forget();
        }
    });

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

            <div>
                <h2 class="text-2xl font-bold">"My profile"</h2>
                <p class="text-base-content/70 text-sm">"Who the loans get booked against."</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 items-start">
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body space-y-2" on:submit=on_save_profile>
                        <h3 class="card-title">"Details"</h3>
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"Full name"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                class="input input-bordered"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="phone">
                                <span class="label-text">"Phone"</span>
                            </label>
                            <input
                                id="phone"
                                type="tel"
                                class="input input-bordered"
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                prop:value=phone
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="address">
                                <span class="label-text">"Address"</span>
                            </label>
                            <textarea
                                id="address"
                                class="textarea textarea-bordered"
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                                prop:value=address
                            ></textarea>
                        </div>
                        <div class="form-control mt-2">
                            <button class="btn btn-primary" disabled=move || is_saving.get()>
                                "Save changes"
                            </button>
                        </div>

                        <div class="divider"></div>

                        <h3 class="card-title text-base">"Photo"</h3>
                        <div class="flex gap-2">
                            <input
                                type="file"
                                accept="image/*"
                                class="file-input file-input-bordered flex-1"
                                node_ref=photo_ref
                            />
                            <button type="button" class="btn btn-outline" on:click=on_upload_photo>
                                "Upload"
                            </button>
                        </div>
                    </form>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body space-y-2" on:submit=on_change_password>
                        <h3 class="card-title">"Change password"</h3>
                        <div class="form-control">
                            <label class="label" for="current_password">
                                <span class="label-text">"Current password"</span>
                            </label>
                            <input
                                id="current_password"
                                type="password"
                                class="input input-bordered"
                                on:input=move |ev| set_current_password.set(event_target_value(&ev))
                                prop:value=current_password
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="new_password">
                                <span class="label-text">"New password"</span>
                            </label>
                            <input
                                id="new_password"
                                type="password"
                                class="input input-bordered"
                                on:input=move |ev| set_new_password.set(event_target_value(&ev))
                                prop:value=new_password
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm_password">
                                <span class="label-text">"Confirm new password"</span>
                            </label>
                            <input
                                id="confirm_password"
                                type="password"
                                class="input input-bordered"
                                on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                prop:value=confirm_password
                            />
                        </div>
                        <div class="form-control mt-2">
                            <button class="btn btn-outline">"Update password"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Shell>
    }
}
