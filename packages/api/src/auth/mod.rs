//! Authentication endpoints: `/auth/login`, `/auth/register`, `/auth/verify`
//! and `/auth/logout`.

use serde::{Deserialize, Serialize};
use store::{KeyValueStore, UserRecord, UserType};

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub user_type: UserType,
}

/// Response to login and register. Register carries no token.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    pub user: UserRecord,
}

/// Response to `GET /auth/verify`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Exchange credentials for a token. Does not touch the session.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", request).await
    }

    /// Create an account. The caller still has to sign in afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", request).await
    }

    /// Check the stored token with the server.
    pub async fn verify(&self) -> Result<VerifyResponse, ApiError> {
        self.get("/auth/verify").await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request("/auth/logout", RequestOptions::post_empty())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_body_shape() {
        let body = serde_json::to_value(LoginRequest {
            email: "asha@example.com".to_string(),
            password: "secret1".to_string(),
            user_type: UserType::Owner,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "email": "asha@example.com",
                "password": "secret1",
                "user_type": "owner"
            })
        );
    }

    #[test]
    fn test_register_response_without_token() {
        let resp: AuthResponse = serde_json::from_value(serde_json::json!({
            "message": "User registered successfully",
            "user": {
                "id": "u-9",
                "email": "ravi@example.com",
                "full_name": "Ravi Kumar",
                "user_type": "student"
            }
        }))
        .unwrap();
        assert!(resp.token.is_none());
        assert_eq!(resp.user.full_name.as_deref(), Some("Ravi Kumar"));
    }
}
