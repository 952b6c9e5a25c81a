//! The session store: async actions over an injected API client and token
//! storage, committing synchronous mutations to [`SessionState`].
//!
//! One store per application, constructed with its collaborators rather
//! than reached through a global. Overlapping actions are not mutually
//! excluded; the state lock is only held around each synchronous mutation,
//! never across a network call, so overlapping commits are last-write-wins.

pub mod outcome;

use crate::api::traits::{Credentials, PasswordChange, PortfolioApi, RegistrationData};
use crate::state::SessionState;
use crate::storage::TokenStore;
use outcome::ActionOutcome;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

pub struct SessionStore {
    state: RwLock<SessionState>,
    api: Arc<dyn PortfolioApi>,
    tokens: Arc<dyn TokenStore>,
}

impl SessionStore {
    /// Build a store over the given API client and token storage.
    ///
    /// The token is hydrated from storage: a restored token counts as
    /// authenticated until the backend says otherwise.
    pub fn new(api: Arc<dyn PortfolioApi>, tokens: Arc<dyn TokenStore>) -> Self {
        let state = SessionState {
            token: tokens.load(),
            ..SessionState::default()
        };
        Self {
            state: RwLock::new(state),
            api,
            tokens,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Read access without cloning the whole record.
    pub fn with_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.state.read())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Log in. On success persists the token and commits both the token and
    /// the full response as the user record.
    pub async fn login(&self, credentials: Credentials) -> ActionOutcome {
        match self.api.login(&credentials).await {
            Ok(response) => {
                let token = response
                    .get("token")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                self.tokens.save(&token);
                let mut state = self.state.write();
                state.set_token(Some(token));
                state.set_user(Some(response));
                ActionOutcome::ok()
            }
            Err(error) => {
                tracing::error!("Login failed: {error:#}");
                ActionOutcome::failed_api(error)
            }
        }
    }

    /// Log out. The local session is always cleared; the backend call is a
    /// best-effort notification. Failure reports a fixed message.
    pub async fn logout(&self) -> ActionOutcome {
        let result = self.api.logout().await;
        self.tokens.clear();
        self.state.write().logout();
        match result {
            Ok(()) => ActionOutcome::ok(),
            Err(error) => {
                tracing::error!("Logout failed: {error:#}");
                ActionOutcome::failed_message("Logout failed")
            }
        }
    }

    /// Register a new account. No state is mutated either way.
    pub async fn register(&self, registration: RegistrationData) -> ActionOutcome {
        match self.api.register(&registration).await {
            Ok(()) => ActionOutcome::ok_with("Registration successful. Please log in."),
            Err(error) => {
                tracing::error!("Registration failed: {error:#}");
                ActionOutcome::failed_api(error)
            }
        }
    }

    /// Delete the account. Unlike [`SessionStore::logout`], storage and
    /// session are cleared only when the backend call succeeds.
    pub async fn delete_account(&self) -> ActionOutcome {
        match self.api.delete_account().await {
            Ok(()) => {
                self.tokens.clear();
                self.state.write().logout();
                ActionOutcome::ok_with("Account successfully deleted.")
            }
            Err(error) => {
                tracing::error!("Account deletion failed: {error:#}");
                ActionOutcome::failed_api(error)
            }
        }
    }

    pub fn update_page_title(&self, title: impl Into<String>) {
        self.state.write().set_page_title(title.into());
    }

    pub fn set_loading_flag(&self, loading: bool) {
        self.state.write().set_loading(loading);
    }

    pub fn set_error_value(&self, error: Option<Value>) {
        self.state.write().set_error(error);
    }

    /// Fetch broker choices into state. Never fails to the caller: a fetch
    /// failure leaves the cached selection alone and records a fixed error
    /// message instead.
    pub async fn set_custom_brokers(&self) {
        match self.api.broker_choices().await {
            Ok(choices) => {
                self.state.write().set_custom_broker_selection(Some(choices));
            }
            Err(error) => {
                tracing::error!("Failed to fetch brokers: {error:#}");
                self.state
                    .write()
                    .set_error(Some(Value::from("Failed to fetch brokers")));
            }
        }
    }

    pub fn update_selected_broker(&self, broker: Option<String>) {
        self.state.write().set_selected_broker(broker);
    }

    pub fn trigger_data_refresh(&self) {
        self.state.write().increment_data_refresh_trigger();
    }

    /// Change the password. Propagates failure to the caller instead of
    /// swallowing it into an outcome.
    pub async fn change_password(&self, change: PasswordChange) -> anyhow::Result<Value> {
        match self.api.change_password(&change).await {
            Ok(result) => Ok(result),
            Err(error) => {
                tracing::error!("Password change failed: {error:#}");
                Err(error)
            }
        }
    }

    /// Fetch the user profile. Propagates failure to the caller.
    pub async fn fetch_user_profile(&self) -> anyhow::Result<Value> {
        match self.api.user_profile().await {
            Ok(profile) => Ok(profile),
            Err(error) => {
                tracing::error!("Fetching user profile failed: {error:#}");
                Err(error)
            }
        }
    }
}
