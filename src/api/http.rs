//! HTTP client for the portfolio backend (Django REST, token auth).
//!
//! Authenticated endpoints send `Authorization: Token <token>`; the token
//! is read from the shared [`TokenStore`] on every request, so the client
//! always reflects the latest login/logout without being told.

use crate::api::traits::{Credentials, PasswordChange, PortfolioApi, RegistrationData};
use crate::config::ApiConfig;
use crate::storage::TokenStore;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

pub struct HttpPortfolioApi {
    base_url: String,
    client: Client,
    tokens: Arc<dyn TokenStore>,
}

impl HttpPortfolioApi {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
                .build()
                .unwrap_or_else(|_| Client::new()),
            tokens,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    fn with_auth_header(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.load() {
            Some(token) if !token.is_empty() => {
                req.header("Authorization", format!("Token {token}"))
            }
            _ => req,
        }
    }

    async fn expect_success(
        endpoint: &str,
        response: reqwest::Response,
    ) -> anyhow::Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Portfolio API error from {endpoint} ({status}): {body}")
    }
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn login(&self, credentials: &Credentials) -> anyhow::Result<Value> {
        let response = self
            .client
            .post(self.url("/api/token/"))
            .json(credentials)
            .send()
            .await?;
        let response = Self::expect_success("/api/token/", response).await?;
        Ok(response.json().await?)
    }

    async fn logout(&self) -> anyhow::Result<()> {
        let response = self
            .with_auth_header(self.client.post(self.url("/api/logout/")))
            .send()
            .await?;
        Self::expect_success("/api/logout/", response).await?;
        Ok(())
    }

    async fn register(&self, registration: &RegistrationData) -> anyhow::Result<()> {
        let response = self
            .client
            .post(self.url("/api/register/"))
            .json(registration)
            .send()
            .await?;
        Self::expect_success("/api/register/", response).await?;
        Ok(())
    }

    async fn delete_account(&self) -> anyhow::Result<()> {
        let response = self
            .with_auth_header(self.client.delete(self.url("/api/delete-account/")))
            .send()
            .await?;
        Self::expect_success("/api/delete-account/", response).await?;
        Ok(())
    }

    async fn broker_choices(&self) -> anyhow::Result<Vec<Value>> {
        let response = self
            .with_auth_header(self.client.get(self.url("/api/settings/choices/")))
            .send()
            .await?;
        let response = Self::expect_success("/api/settings/choices/", response).await?;
        let body: Value = response.json().await?;
        body.get("broker_choices")
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No broker_choices in settings choices response"))
    }

    async fn change_password(&self, change: &PasswordChange) -> anyhow::Result<Value> {
        let response = self
            .with_auth_header(self.client.post(self.url("/api/change-password/")).json(change))
            .send()
            .await?;
        let response = Self::expect_success("/api/change-password/", response).await?;
        Ok(response.json().await?)
    }

    async fn user_profile(&self) -> anyhow::Result<Value> {
        let response = self
            .with_auth_header(self.client.get(self.url("/api/profile/")))
            .send()
            .await?;
        let response = Self::expect_success("/api/profile/", response).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTokenStore;

    fn make_api(base_url: &str) -> HttpPortfolioApi {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        HttpPortfolioApi::new(&config, Arc::new(MemoryTokenStore::new()))
    }

    #[test]
    fn strips_trailing_slash() {
        let api = make_api("http://localhost:8000/");
        assert_eq!(api.base_url, "http://localhost:8000");
    }

    #[test]
    fn joins_endpoint_paths() {
        let api = make_api("http://localhost:8000");
        assert_eq!(api.url("/api/token/"), "http://localhost:8000/api/token/");
    }
}
