//! In-process token storage for tests and ephemeral sessions.

use super::traits::TokenStore;
use parking_lot::Mutex;

#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a token, as after a prior session.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_round_trips() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());
        store.save("t1");
        assert_eq!(store.load().as_deref(), Some("t1"));
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn with_token_pre_seeds() {
        let store = MemoryTokenStore::with_token("t0");
        assert_eq!(store.load().as_deref(), Some("t0"));
    }
}
