//! Session Endpoints
//!
//! Only what the top bar needs: who is logged in, and logging out.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use super::read_json;
use crate::error::ApiError;
use crate::models::User;

/// `None` when the server answers 401
pub async fn fetch_current_user(base: &str) -> Result<Option<User>, ApiError> {
    let url = format!("{}/api/user", base);
    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    match read_json::<User>(response).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_unauthorized() => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn logout(base: &str) -> Result<(), ApiError> {
    let url = format!("{}/api/logout", base);
    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
        });
    }
    Ok(())
}
