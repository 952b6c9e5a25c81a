//! Mutable session and UI state for the portfolio front-end.
//!
//! Mutators are synchronous, infallible, and touch nothing outside the
//! state record itself. Orchestration (network calls, token persistence)
//! lives in [`crate::session::SessionStore`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The application state record observed by the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Auth token. Mirrored into persistent storage by the session store.
    #[serde(default)]
    pub token: Option<String>,
    /// Current user. The full login response, stored as returned by the
    /// backend (token field included).
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default)]
    pub page_title: String,
    /// Global busy flag.
    #[serde(default)]
    pub loading: bool,
    /// Last reported error: a plain message or a structured API body.
    #[serde(default)]
    pub error: Option<Value>,
    /// Cached broker choices from the settings endpoint.
    #[serde(default)]
    pub custom_broker_selection: Option<Vec<Value>>,
    /// Monotonic refresh signal. Only ever incremented.
    #[serde(default)]
    pub data_refresh_trigger: u64,
    #[serde(default)]
    pub selected_broker: Option<String>,
}

impl SessionState {
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn set_user(&mut self, user: Option<Value>) {
        self.user = user;
    }

    /// Clears token and user together. Local-only; storage cleanup is the
    /// session store's job.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn set_page_title(&mut self, title: String) {
        self.page_title = title;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<Value>) {
        self.error = error;
    }

    pub fn set_custom_broker_selection(&mut self, choices: Option<Vec<Value>>) {
        self.custom_broker_selection = choices;
    }

    pub fn increment_data_refresh_trigger(&mut self) {
        self.data_refresh_trigger += 1;
    }

    pub fn set_selected_broker(&mut self, broker: Option<String>) {
        self.selected_broker = broker;
    }

    /// Derived accessor: authenticated iff a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
