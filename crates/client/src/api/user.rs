//! Auth endpoints: login, captcha, current-user profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use repairhub_core::UserInfo;

use crate::gateway::{Gateway, GatewayError};

/// Path of the current-user profile endpoint, also used by
/// [`crate::session::SessionStore::get_user_info`].
pub const USER_INFO_PATH: &str = "/user/userInfo";

/// Login credentials.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub account: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
}

/// Successful login: the bearer token for subsequent calls.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange credentials for a bearer token.
///
/// The caller commits the token to the session via
/// [`crate::session::SessionStore::set_token`].
///
/// # Errors
///
/// Propagates gateway failures; bad credentials surface as a business
/// failure with the server's message.
pub async fn login(gateway: &Gateway, request: &LoginRequest) -> Result<LoginResponse, GatewayError> {
    gateway.post("/user/login", request).await
}

/// Fetch a captcha challenge for the login form.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn get_captcha(gateway: &Gateway) -> Result<Value, GatewayError> {
    gateway.get("/user/getCaptcha", &[]).await
}

/// Fetch the profile of the currently authenticated user.
///
/// Most callers want [`crate::session::SessionStore::get_user_info`], which
/// guards against concurrent fetches and commits the result.
///
/// # Errors
///
/// Propagates gateway failures; a 401 clears the session as a side effect.
pub async fn get_user_info(gateway: &Gateway) -> Result<UserInfo, GatewayError> {
    gateway.get(USER_INFO_PATH, &[]).await
}
