//! Session store.
//!
//! Holds the current credential and identity, persisted to LocalStorage and
//! exposed through a narrow read interface. Every mutation goes through this
//! module — the write half of the signal never leaves it — so the
//! token-and-user-together invariant holds at every observable point.
//! Concurrent tabs are not synchronized.

use crate::api::{Api, ApiError, DEFAULT_API_BASE};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use sarpras_shared::protocol::LogoutRequest;
use sarpras_shared::{AuthPayload, LoginRequest, RegisterRequest, Role, User};

#[cfg(test)]
mod tests;

const STORAGE_TOKEN_KEY: &str = "sarpras_token";
const STORAGE_USER_KEY: &str = "sarpras_user";

/// An authenticated session: credential and identity always travel together.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Default)]
pub struct SessionState {
    session: Option<Session>,
}

/// Session context, provided once at the app root and injected everywhere a
/// page needs identity. Readers get snapshots and derived signals; only the
/// functions in this module write.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.session.as_ref().map(|se| se.token.clone()))
    }

    pub fn user(&self) -> Option<User> {
        self.state.with_untracked(|s| s.session.as_ref().map(|se| se.user.clone()))
    }

    /// API client carrying the current credential.
    pub fn api(&self) -> Api {
        Api::new(DEFAULT_API_BASE, self.token())
    }

    /// Current role as a signal, `None` while unauthenticated. This is what
    /// the router consumes for guarding (decoupling, as with the teacher's
    /// injected auth signal).
    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.as_ref().map(|se| se.user.role)))
    }

    pub fn user_signal(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.as_ref().map(|se| se.user.clone())))
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// From Context; panics when the app root forgot to provide it.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// A persisted session is only restored when both halves survived; a
/// half-written pair (e.g. a tab killed mid-login) restores to nothing.
fn restore(token: Option<String>, user: Option<User>) -> Option<Session> {
    match (token, user) {
        (Some(token), Some(user)) => Some(Session { token, user }),
        _ => None,
    }
}

/// Load the persisted session, if any. Runs synchronously at the app root,
/// before the router first resolves a route.
pub fn init_session(ctx: &SessionContext) {
    let token = LocalStorage::get::<String>(STORAGE_TOKEN_KEY).ok();
    let user = LocalStorage::get::<User>(STORAGE_USER_KEY).ok();
    let session = restore(token, user);
    if session.is_none() {
        // drop stragglers so storage mirrors the invariant
        LocalStorage::delete(STORAGE_TOKEN_KEY);
        LocalStorage::delete(STORAGE_USER_KEY);
    }
    ctx.set_state.update(|s| s.session = session);
}

/// Authenticate and persist. Returns the user so the caller can pick the
/// right landing page; the error carries the server's message.
pub async fn login(ctx: &SessionContext, email: String, password: String) -> Result<User, ApiError> {
    let api = Api::new(DEFAULT_API_BASE, None);
    let payload: AuthPayload = api.send(&LoginRequest { email, password }).await?;
    persist(&payload);
    ctx.set_state.update(|s| {
        s.session = Some(Session {
            token: payload.token.clone(),
            user: payload.user.clone(),
        });
    });
    Ok(payload.user)
}

/// Self-service signup. Does not create a session; the register page logs in
/// with the same credentials afterwards.
pub async fn register(request: RegisterRequest) -> Result<User, ApiError> {
    Api::new(DEFAULT_API_BASE, None).send(&request).await
}

/// Best-effort server-side invalidation, then an unconditional local clear.
/// A network failure is logged and swallowed — the local session goes away
/// either way, and the router's auth effect handles the redirect.
pub async fn logout(ctx: &SessionContext) {
    if ctx.token().is_some() {
        if let Err(e) = ctx.api().send(&LogoutRequest).await {
            web_sys::console::warn_1(&format!("[Session] logout request failed: {e}").into());
        }
    }
    clear(ctx);
}

/// Drop the local session without a server round trip. Used when the
/// backend rejects the bearer credential.
pub fn expire(ctx: &SessionContext) {
    web_sys::console::log_1(&"[Session] credential rejected, clearing session.".into());
    clear(ctx);
}

/// View models funnel their errors through here so a rejected credential
/// always ends the session, whatever the calling page was doing.
pub fn note_unauthorized(ctx: &SessionContext, err: &ApiError) {
    if matches!(err, ApiError::Unauthorized) {
        expire(ctx);
    }
}

/// Replace the cached identity after a profile mutation. The credential is
/// untouched; a call without an active session is ignored.
pub fn refresh_user(ctx: &SessionContext, user: User) {
    ctx.set_state.update(|s| {
        if let Some(session) = s.session.as_mut() {
            let _ = LocalStorage::set(STORAGE_USER_KEY, &user);
            session.user = user;
        }
    });
}

fn persist(payload: &AuthPayload) {
    let _ = LocalStorage::set(STORAGE_TOKEN_KEY, &payload.token);
    let _ = LocalStorage::set(STORAGE_USER_KEY, &payload.user);
}

fn clear(ctx: &SessionContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    LocalStorage::delete(STORAGE_USER_KEY);
    ctx.set_state.update(|s| s.session = None);
}
