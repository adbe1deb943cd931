//! Password recovery pages. Both talk to the API unauthenticated and only
//! relay the server's message; the actual token issuance happens by email.

use crate::api::{Api, DEFAULT_API_BASE};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sarpras_shared::{ForgotPasswordRequest, ResetPasswordRequest};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    // (message, is_error)
    let (outcome, set_outcome) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() {
            set_outcome.set(Some(("Please enter your email".to_string(), true)));
            return;
        }
        set_is_submitting.set(true);
        set_outcome.set(None);

        spawn_local(async move {
            let api = Api::new(DEFAULT_API_BASE, None);
            let request = ForgotPasswordRequest { email: email.get() };
            match api.send(&request).await {
                Ok(res) => set_outcome.set(Some((res.message, false))),
                Err(e) => set_outcome.set(Some((e.user_message(), true))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Forgot password"</h1>
                    <p class="text-base-content/70">"We will email you a reset code"</p>
                </div>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || outcome.get().is_some()>
                            <div role="alert" class=move || {
                                if outcome.get().map(|(_, err)| err).unwrap_or(false) {
                                    "alert alert-error text-sm py-2"
                                } else {
                                    "alert alert-success text-sm py-2"
                                }
                            }>
                                <span>{move || outcome.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Sending..." }.into_any()
                                } else {
                                    "Send reset code".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm text-base-content/70 mt-2">
                            <a class="link link-hover" on:click=move |_| router.navigate("/reset-password")>
                                "Already have a code?"
                            </a>
                            " · "
                            <a class="link link-hover" on:click=move |_| router.navigate("/login")>
                                "Back to sign in"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (token, set_token) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (outcome, set_outcome) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || token.get().is_empty() || password.get().is_empty() {
            set_outcome.set(Some(("Please fill in all fields".to_string(), true)));
            return;
        }
        if password.get() != confirm.get() {
            set_outcome.set(Some(("Passwords do not match".to_string(), true)));
            return;
        }
        set_is_submitting.set(true);
        set_outcome.set(None);

        spawn_local(async move {
            let api = Api::new(DEFAULT_API_BASE, None);
            let request = ResetPasswordRequest {
                email: email.get(),
                token: token.get(),
                password: password.get(),
                password_confirmation: confirm.get(),
            };
            match api.send(&request).await {
                Ok(res) => set_outcome.set(Some((res.message, false))),
                Err(e) => set_outcome.set(Some((e.user_message(), true))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Reset password"</h1>
                    <p class="text-base-content/70">"Use the code from the email we sent you"</p>
                </div>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || outcome.get().is_some()>
                            <div role="alert" class=move || {
                                if outcome.get().map(|(_, err)| err).unwrap_or(false) {
                                    "alert alert-error text-sm py-2"
                                } else {
                                    "alert alert-success text-sm py-2"
                                }
                            }>
                                <span>{move || outcome.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="token">
                                <span class="label-text">"Reset code"</span>
                            </label>
                            <input
                                id="token"
                                type="text"
                                on:input=move |ev| set_token.set(event_target_value(&ev))
                                prop:value=token
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"New password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm">
                                <span class="label-text">"Confirm new password"</span>
                            </label>
                            <input
                                id="confirm"
                                type="password"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Resetting..." }.into_any()
                                } else {
                                    "Reset password".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm text-base-content/70 mt-2">
                            <a class="link link-hover" on:click=move |_| router.navigate("/login")>
                                "Back to sign in"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
