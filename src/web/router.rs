//! Router service - core engine.
//!
//! Wraps the `web_sys` History API so every `window.history` touch lives in
//! this module, and drives the "request -> resolve(guard) -> load" flow for
//! every navigation: clicks, popstate, and session changes all funnel
//! through [`route::resolve`].

use leptos::prelude::*;
use sarpras_shared::Role;
use wasm_bindgen::prelude::*;

use super::route::{self, AppRoute, GuardDecision};

/// Current browser path.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects so the denied URL does not pile up in history.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service.
///
/// All routing state flows through signals; the session role is injected so
/// the router stays decoupled from the session store itself.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Injected session role; `None` while unauthenticated.
    session_role: Signal<Option<Role>>,
}

impl RouterService {
    fn new(session_role: Signal<Option<Role>>) -> Self {
        // the guard applies to the very first load too: a deep link into a
        // protected page redirects before anything renders
        let requested = AppRoute::from_path(&current_path());
        let initial_route = match route::resolve(&requested, session_role.get_untracked()) {
            GuardDecision::Render => requested,
            GuardDecision::Redirect(redirect) => {
                replace_history_state(&redirect.to_path());
                redirect
            }
        };
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session_role,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a path string (link targets).
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// Navigate straight to a route value (targets with parameters).
    pub fn navigate_to(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let role = self.session_role.get_untracked();

        let final_route = match route::resolve(&target, role) {
            GuardDecision::Render => target,
            GuardDecision::Redirect(redirect) => {
                web_sys::console::log_1(
                    &format!("[Router] Access denied for {target}. Redirecting to {redirect}.")
                        .into(),
                );
                redirect
            }
        };

        if use_push {
            push_history_state(&final_route.to_path());
        } else {
            replace_history_state(&final_route.to_path());
        }
        self.set_route.set(final_route);
    }

    /// Back/forward buttons run the guard too.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session_role = self.session_role;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            match route::resolve(&target, session_role.get_untracked()) {
                GuardDecision::Render => set_route.set(target),
                GuardDecision::Redirect(redirect) => {
                    replace_history_state(&redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // leak the closure to keep the listener alive
        closure.forget();
    }

    /// Re-resolve the current route whenever the session changes: a fresh
    /// login leaves the guest pages, a logout or expired credential leaves
    /// the protected ones.
    fn setup_session_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session_role = self.session_role;

        Effect::new(move |_| {
            let role = session_role.get();
            let route_now = current_route.get_untracked();

            if let GuardDecision::Redirect(redirect) = route::resolve(&route_now, role) {
                web_sys::console::log_1(
                    &format!("[Router] Session changed on {route_now}. Redirecting to {redirect}.")
                        .into(),
                );
                push_history_state(&redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

fn provide_router(session_role: Signal<Option<Role>>) -> RouterService {
    let router = RouterService::new(session_role);

    router.init_popstate_listener();
    router.setup_session_redirect();

    provide_context(router);
    router
}

/// From Context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Router root component; provides the routing context, so it must wrap the
/// whole app.
#[component]
pub fn Router(
    /// Session role signal, injected for guarding.
    session_role: Signal<Option<Role>>,
    /// Child components.
    children: Children,
) -> impl IntoView {
    provide_router(session_role);

    children()
}

/// Renders whatever the current route maps to.
#[component]
pub fn RouterOutlet(
    /// Route matcher: takes the current route, returns the matching view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
