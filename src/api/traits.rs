use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Login form fields.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form fields.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationData {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Password change form fields.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// The backend API the session store orchestrates against.
///
/// Payloads the store treats as opaque records (login response, profile,
/// password-change result) are raw JSON values.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Obtain an auth token. The returned body also carries user fields
    /// (`user_id`, `email`) alongside `token`.
    async fn login(&self, credentials: &Credentials) -> anyhow::Result<Value>;

    /// Invalidate the current token on the backend.
    async fn logout(&self) -> anyhow::Result<()>;

    async fn register(&self, registration: &RegistrationData) -> anyhow::Result<()>;

    async fn delete_account(&self) -> anyhow::Result<()>;

    /// Broker choices for the settings form, as `[value, label]` pairs.
    async fn broker_choices(&self) -> anyhow::Result<Vec<Value>>;

    async fn change_password(&self, change: &PasswordChange) -> anyhow::Result<Value>;

    async fn user_profile(&self) -> anyhow::Result<Value>;
}
