// API service layer for communicating with the chat server
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const API_BASE_URL: &str = "/api/v4";
const AUTH_TOKEN_KEY: &str = "parlor_auth_token";

// ============================================
// ERROR HANDLING
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    fn get_auth_token() -> Option<String> {
        LocalStorage::get::<String>(AUTH_TOKEN_KEY).ok()
    }

    pub async fn get<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        let url = format!("{}{}", API_BASE_URL, endpoint);

        let mut req = Request::get(&url);
        if let Some(token) = Self::get_auth_token() {
            req = req.header("Authorization", &format!("Bearer {}", token));
        }

        let response = req.send().await.map_err(|e| ApiError {
            message: e.to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        })?;

        if response.ok() {
            response.json::<T>().await.map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("PARSE_ERROR".to_string()),
            })
        } else {
            let error = response.json::<ApiError>().await.unwrap_or(ApiError {
                message: format!("HTTP Error: {}", response.status()),
                code: Some(format!("HTTP_{}", response.status())),
            });
            Err(error)
        }
    }
}

// ============================================
// USERS SERVICE
// ============================================

pub mod users {
    use super::*;
    use parlor_shared::{User, UserStatus};
    use std::collections::HashMap;

    pub async fn get_me() -> ApiResult<User> {
        ApiClient::get("/users/me").await
    }

    pub async fn get_channel_members(channel: &str) -> ApiResult<Vec<User>> {
        ApiClient::get(&format!("/channels/{}/members", channel)).await
    }

    pub async fn get_statuses() -> ApiResult<HashMap<String, UserStatus>> {
        ApiClient::get("/users/statuses").await
    }

    /// Avatar URL; `_` changes whenever a new picture is uploaded.
    pub fn profile_image_url(user: &User) -> String {
        format!(
            "{}/users/{}/image?_={}",
            API_BASE_URL, user.id, user.last_picture_update
        )
    }
}

// ============================================
// CONFIG SERVICE
// ============================================

pub mod config {
    use super::*;
    use parlor_shared::ClientConfig;

    pub async fn get_client_config() -> ApiResult<ClientConfig> {
        ApiClient::get("/config/client").await
    }
}
