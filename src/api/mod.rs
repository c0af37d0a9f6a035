//! HTTP API Bindings
//!
//! Thin `fetch` wrappers over the EasyTrack REST API, organized by domain.

mod catalog;
mod notifications;
mod session;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

// Re-export all public items
pub use catalog::*;
pub use notifications::*;
pub use session::*;

/// Turn a non-2xx response into `ApiError::Status`, otherwise decode the body
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
        });
    }
    response.json::<T>().await.map_err(ApiError::from)
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder.send().await?;
    read_json(response).await
}

async fn send_with_body<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let response = builder.json(body)?.send().await?;
    read_json(response).await
}

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    send(Request::get(url)).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    send_with_body(Request::post(url), body).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    send_with_body(Request::put(url), body).await
}

pub(crate) async fn delete_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    send(Request::delete(url)).await
}
