#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

pub mod api;
pub mod config;
pub mod session;
pub mod state;
pub mod storage;

pub use api::http::HttpPortfolioApi;
pub use api::traits::{Credentials, PasswordChange, PortfolioApi, RegistrationData};
pub use config::ApiConfig;
pub use session::SessionStore;
pub use session::outcome::{ActionError, ActionOutcome};
pub use state::SessionState;
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
