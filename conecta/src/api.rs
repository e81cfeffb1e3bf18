//! Account API client
//!
//! Thin async wrapper over the ConectaIA user backend (`/api/usuario`). The
//! wire format keeps the backend's Portuguese field names; Rust code uses
//! English names via serde renames.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("Invalid e-mail or password")]
    InvalidCredentials,
    #[error("Request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// User record as the backend returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "cargo", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    #[serde(rename = "senha")]
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateUserRequest<'a> {
    #[serde(rename = "nome")]
    name: &'a str,
    email: &'a str,
    #[serde(rename = "senha")]
    password: &'a str,
}

/// Update payload. The backend DTO takes the full record; the password is
/// only included when the user is changing it.
#[derive(Debug, Serialize)]
struct UpdateUserRequest<'a> {
    #[serde(rename = "nome")]
    name: &'a str,
    email: &'a str,
    #[serde(rename = "senha", skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

/// Async HTTP client for the user endpoints
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client for a base URL like `http://host:4503/api/usuario`
    pub fn new(base_url: &str) -> ApiResult<Self> {
        // Trailing slash so Url::join keeps the final path segment
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(&base)?,
        })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Authenticate. A 401/403 becomes `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<RemoteUser> {
        let url = self.endpoint("login")?;
        tracing::debug!(%url, "login request");
        let response = self
            .http
            .post(url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ApiError::InvalidCredentials);
        }
        Self::into_json(response).await
    }

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<RemoteUser> {
        let url = self.endpoint("criar")?;
        tracing::debug!(%url, "create user request");
        let response = self
            .http
            .post(url)
            .json(&CreateUserRequest { name, email, password })
            .send()
            .await?;
        Self::into_json(response).await
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        name: &str,
        email: &str,
        password: Option<&str>,
    ) -> ApiResult<RemoteUser> {
        let url = self.endpoint(&format!("atualizar/{user_id}"))?;
        tracing::debug!(%url, user_id, "update user request");
        let response = self
            .http
            .put(url)
            .json(&UpdateUserRequest { name, email, password })
            .send()
            .await?;
        Self::into_json(response).await
    }

    /// Read a success body as JSON; non-2xx becomes `Rejected` with the body
    /// text the backend sent.
    async fn into_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_format() {
        let body = serde_json::to_value(LoginRequest {
            email: "ana@example.com",
            password: "secret",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "email": "ana@example.com", "senha": "secret" })
        );
    }

    #[test]
    fn test_create_request_wire_format() {
        let body = serde_json::to_value(CreateUserRequest {
            name: "Ana",
            email: "ana@example.com",
            password: "secret",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "nome": "Ana", "email": "ana@example.com", "senha": "secret" })
        );
    }

    #[test]
    fn test_update_request_omits_unchanged_password() {
        let body = serde_json::to_value(UpdateUserRequest {
            name: "Ana",
            email: "ana@example.com",
            password: None,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "nome": "Ana", "email": "ana@example.com" })
        );
    }

    #[test]
    fn test_remote_user_accepts_missing_role() {
        let user: RemoteUser =
            serde_json::from_str(r#"{ "id": 3, "nome": "Ana", "email": "ana@example.com" }"#)
                .unwrap();
        assert_eq!(user.role, None);

        let with_role: RemoteUser = serde_json::from_str(
            r#"{ "id": 3, "nome": "Ana", "email": "ana@example.com", "cargo": "Dev" }"#,
        )
        .unwrap();
        assert_eq!(with_role.role.as_deref(), Some("Dev"));
    }

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let client = ApiClient::new("http://192.168.1.115:4503/api/usuario").unwrap();
        assert_eq!(
            client.endpoint("login").unwrap().as_str(),
            "http://192.168.1.115:4503/api/usuario/login"
        );
        assert_eq!(
            client.endpoint("atualizar/7").unwrap().as_str(),
            "http://192.168.1.115:4503/api/usuario/atualizar/7"
        );

        // A trailing slash on the base makes no difference
        let slashed = ApiClient::new("http://localhost:4503/api/usuario/").unwrap();
        assert_eq!(
            slashed.endpoint("criar").unwrap().as_str(),
            "http://localhost:4503/api/usuario/criar"
        );
    }
}
