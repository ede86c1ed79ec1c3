//! Credential storage and password verification.

use std::collections::HashMap;

/// bcrypt hash of a random throwaway password, verified when a username
/// is unknown so that lookup misses take as long as a wrong password.
const DUMMY_HASH: &str = "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewdBPj4J8fS4qC3u";

/// Read-only username to bcrypt-hash mapping, loaded once at startup and
/// shared across request handlers.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a single-user store from an inline `user:password` pair,
    /// hashing the password with the default bcrypt cost.
    pub fn from_inline(auth: &str) -> Result<Self, String> {
        let (user, password) = auth
            .split_once(':')
            .ok_or_else(|| "invalid auth format, expected user:password".to_string())?;
        if user.is_empty() {
            return Err("invalid auth format, username is empty".to_string());
        }

        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| format!("hashing password: {e}"))?;

        let mut store = Self::new();
        store.insert(user, hash);
        Ok(store)
    }

    /// Insert or replace a user's hash.
    pub fn insert(&mut self, username: impl Into<String>, hash: impl Into<String>) {
        self.users.insert(username.into(), hash.into());
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Verify a username/password pair.
    ///
    /// Unknown usernames still run a full bcrypt comparison against
    /// [`DUMMY_HASH`], keeping the timing of a miss comparable to a
    /// wrong password instead of short-circuiting on the lookup.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(hash) => bcrypt::verify(password, hash).unwrap_or(false),
            None => {
                let _ = bcrypt::verify(password, DUMMY_HASH);
                false
            }
        }
    }
}
