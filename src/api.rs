//! API gateway client.
//!
//! The single outbound HTTP channel: every feature view goes through [`Api`].
//! A bearer credential is attached when one exists; responses are decoded
//! strictly against the per-endpoint type, so an unexpected shape is a loud
//! [`ApiError::Decode`] instead of a silent guess. No retry, no timeout.

use gloo_net::http::{Request, RequestBuilder, Response};
use sarpras_shared::protocol::{ApiRequest, HttpMethod};
use sarpras_shared::{
    HEADER_AUTHORIZATION, Item, ItemDraft, Loan, MessageResponse, UpdateLoanRequest, User,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[cfg(test)]
mod tests;

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport-level failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the bearer credential. The session layer reacts
    /// by dropping the local session.
    #[error("credential rejected")]
    Unauthorized,
    /// The server answered with a non-success status and (usually) a
    /// business error message in the body.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The response did not match the endpoint's documented shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a blocking alert: the server's own message when
    /// it sent one, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Unauthorized => {
                "Your session has expired. Please sign in again.".to_string()
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// `{ "data": ... }` wrapper used by the data-carrying endpoints.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error bodies carry a `message` field; anything else is ignored.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Decode a response body against the endpoint's documented shape.
fn decode_body<T: DeserializeOwned>(status: u16, text: &str, envelope: bool) -> Result<T, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        return Err(ApiError::Server { status, message });
    }
    if envelope {
        serde_json::from_str::<Envelope<T>>(text)
            .map(|wrapped| wrapped.data)
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        serde_json::from_str::<T>(text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn js_err(value: JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Api {
    base_url: String,
    token: Option<String>,
}

impl Api {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn builder(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        match &self.token {
            Some(token) => builder.header(HEADER_AUTHORIZATION, &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn read<T: DeserializeOwned>(res: Response, envelope: bool) -> Result<T, ApiError> {
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(status, &text, envelope)
    }

    /// Send any fixed-path endpoint described by its request type.
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let builder = self.builder(R::METHOD, R::PATH);
        let res = match R::METHOD {
            HttpMethod::Get => builder.send().await,
            _ => builder
                .json(req)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(res, R::ENVELOPE).await
    }

    /// GET `/item/{id}`
    pub async fn item(&self, id: i64) -> Result<Item, ApiError> {
        let res = self
            .builder(HttpMethod::Get, &format!("/item/{id}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(res, true).await
    }

    /// POST `/item/store` — multipart, with an optional photo part.
    pub async fn store_item(
        &self,
        draft: &ItemDraft,
        photo: Option<&web_sys::File>,
    ) -> Result<Item, ApiError> {
        let form = item_form(draft, photo, None)?;
        self.send_form("/item/store", form).await
    }

    /// POST `/item/update/{id}` — multipart with a `_method=PUT` override
    /// field; browsers cannot send multipart PUT, the backend unwraps it.
    pub async fn update_item(
        &self,
        id: i64,
        draft: &ItemDraft,
        photo: Option<&web_sys::File>,
    ) -> Result<Item, ApiError> {
        let form = item_form(draft, photo, Some("PUT"))?;
        self.send_form(&format!("/item/update/{id}"), form).await
    }

    /// DELETE `/item/delete/{id}`
    pub async fn delete_item(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let res = self
            .builder(HttpMethod::Delete, &format!("/item/delete/{id}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(res, false).await
    }

    /// PUT `/loan/update/{id}`
    pub async fn update_loan(&self, id: i64, req: &UpdateLoanRequest) -> Result<Loan, ApiError> {
        let res = self
            .builder(HttpMethod::Put, &format!("/loan/update/{id}"))
            .json(req)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(res, true).await
    }

    /// POST `/user/photo` — multipart.
    pub async fn upload_photo(&self, file: &web_sys::File) -> Result<User, ApiError> {
        let form = web_sys::FormData::new().map_err(js_err)?;
        form.append_with_blob_and_filename("photo", file, &file.name())
            .map_err(js_err)?;
        self.send_form("/user/photo", form).await
    }

    async fn send_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        // no explicit Content-Type: the browser sets the multipart boundary
        let res = self
            .builder(HttpMethod::Post, path)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(res, true).await
    }
}

fn item_form(
    draft: &ItemDraft,
    photo: Option<&web_sys::File>,
    method_override: Option<&str>,
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_str("code", &draft.code).map_err(js_err)?;
    form.append_with_str("name", &draft.name).map_err(js_err)?;
    if let Some(category_id) = draft.category_id {
        form.append_with_str("category_id", &category_id.to_string())
            .map_err(js_err)?;
    }
    form.append_with_str("stock", &draft.stock.to_string())
        .map_err(js_err)?;
    form.append_with_str("condition", draft.condition.as_wire())
        .map_err(js_err)?;
    form.append_with_str("description", &draft.description)
        .map_err(js_err)?;
    if let Some(acquired_at) = draft.acquired_at {
        form.append_with_str("acquired_at", &acquired_at.to_string())
            .map_err(js_err)?;
    }
    if let Some(value) = draft.acquisition_value {
        form.append_with_str("acquisition_value", &value.to_string())
            .map_err(js_err)?;
    }
    if let Some(file) = photo {
        form.append_with_blob_and_filename("photo", file, &file.name())
            .map_err(js_err)?;
    }
    if let Some(method) = method_override {
        form.append_with_str("_method", method).map_err(js_err)?;
    }
    Ok(form)
}
