/// Persistent storage for the auth token.
pub trait TokenStore: Send + Sync {
    /// Current token, if one is stored.
    fn load(&self) -> Option<String>;

    fn save(&self, token: &str);

    fn clear(&self);
}
