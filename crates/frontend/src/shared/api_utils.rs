//! API utilities for frontend-backend communication
//!
//! Every call goes through the helpers here so that non-success statuses,
//! transport failures and undecodable bodies all come back as
//! [`ApiError`] variants.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Backend used when no override was given at build time.
pub const DEFAULT_API_BASE: &str = "https://general-backend-production-a734.up.railway.app";

/// Get the base URL for API requests
///
/// Fixed at compile time. Set `PRIVATEGXT_API_BASE` while building to
/// point the client at another backend.
pub fn api_base() -> &'static str {
    option_env!("PRIVATEGXT_API_BASE")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/privategxt/documents");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Turns a non-success response into `ApiError::Http`, reading `detail`
/// from the body when the backend sent one.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Validation(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

/// Multipart upload. The browser sets the boundary header itself.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(network_error)?;
    check_status(response).await.map(|_| ())
}
