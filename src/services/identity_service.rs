// ==================== IDENTITY PROVIDER CLIENT ====================
// Account creation is delegated to an external identity provider speaking the
// Identity Toolkit REST contract (accounts:signUp). Only the returned uid is
// kept; credentials never touch the document store.

use crate::utils::error::AppError;
use serde_json::Value;
use std::time::Duration;

#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    signup_url: String,
}

impl IdentityClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::IdentityError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            signup_url: signup_url(base_url, api_key),
        })
    }

    /// Creates an email/password account and returns the provider-assigned uid.
    pub async fn create_account(&self, email: &str, password: &str) -> Result<String, AppError> {
        let response = self
            .http
            .post(&self.signup_url)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": false,
            }))
            .send()
            .await
            .map_err(|e| AppError::IdentityError(format!("Identity provider unreachable: {}", e)))?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            AppError::IdentityError(format!("Invalid identity provider response: {}", e))
        })?;

        if !status.is_success() {
            return Err(AppError::IdentityError(error_message(&body)));
        }

        uid_from_response(&body)
            .map(str::to_string)
            .ok_or_else(|| AppError::IdentityError("No uid in identity provider response".to_string()))
    }
}

fn signup_url(base_url: &str, api_key: &str) -> String {
    format!(
        "{}/v1/accounts:signUp?key={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(api_key)
    )
}

fn uid_from_response(body: &Value) -> Option<&str> {
    body["localId"].as_str()
}

fn error_message(body: &Value) -> String {
    body["error"]["message"]
        .as_str()
        .unwrap_or("Account creation rejected")
        .to_string()
}
