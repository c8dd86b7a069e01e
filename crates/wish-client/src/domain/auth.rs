//! Auth Payloads

use serde::{Deserialize, Serialize};

/// `POST /auth/register` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// `POST /auth/login` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Login/register response; only `access_token` is required
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<User>,
}
