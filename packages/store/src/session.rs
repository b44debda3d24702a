//! # Session store — bearer token plus cached user
//!
//! The session lives in two local-storage entries that the rest of the site
//! also reads:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"authToken"`) | the raw bearer token |
//! | [`USER_KEY`] (`"userData"`) | the [`UserRecord`] as JSON |
//!
//! The two writes in [`SessionStore::set_session`] are not transactional, so
//! readers never combine the keys themselves. [`SessionStore::session`] only
//! reports a [`Session`] when both halves are present and valid, and
//! [`SessionStore::user`] treats the cached record as absent whenever the token
//! is missing. A stale `userData` left behind by another tab can therefore
//! never make the client look signed in.
//!
//! Nothing is cached in memory: each call reads the backing store.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::UserRecord;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "userData";

/// A signed-in identity: both halves are always present.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}

/// Session accessors over any [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored bearer token, if any. Empty strings count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The cached user record.
    ///
    /// `None` when the token is absent or the stored JSON does not parse.
    pub fn user(&self) -> Option<UserRecord> {
        self.token()?;
        self.store.get_json(USER_KEY)
    }

    /// Both halves of the session, or `None` if either is missing.
    pub fn session(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self.store.get_json(USER_KEY)?;
        Some(Session { token, user })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Persist a new session: token first, then the user record.
    pub fn set_session(&self, token: &str, user: &UserRecord) -> Result<(), StoreError> {
        self.store.set(TOKEN_KEY, token)?;
        if let Err(e) = self.store.set_json(USER_KEY, user) {
            // Do not leave a token without its user behind.
            self.store.remove(TOKEN_KEY);
            return Err(e);
        }
        Ok(())
    }

    /// Replace the cached user wholesale (after re-verification).
    pub fn set_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        self.store.set_json(USER_KEY, user)
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::UserType;

    fn user(user_type: UserType) -> UserRecord {
        UserRecord {
            id: "u-1".to_string(),
            email: "asha@example.com".to_string(),
            full_name: Some("Asha Patel".to_string()),
            phone: Some("9876543210".to_string()),
            user_type,
            is_verified: Some(true),
        }
    }

    #[test]
    fn test_empty_store_has_no_session() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.token().is_none());
        assert!(sessions.user().is_none());
        assert!(sessions.session().is_none());
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_set_session_then_read() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone());
        sessions.set_session("tok-123", &user(UserType::Owner)).unwrap();

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-123"));
        let session = sessions.session().unwrap();
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user.user_type, UserType::Owner);
    }

    #[test]
    fn test_stale_user_without_token_is_ignored() {
        let store = MemoryStore::new();
        store
            .set_json(USER_KEY, &user(UserType::Student))
            .unwrap();
        let sessions = SessionStore::new(store);

        assert!(sessions.user().is_none());
        assert!(sessions.session().is_none());
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_token_without_user_is_not_a_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok").unwrap();
        let sessions = SessionStore::new(store);

        assert_eq!(sessions.token().as_deref(), Some("tok"));
        assert!(sessions.session().is_none());
    }

    #[test]
    fn test_unparsable_user_reads_as_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok").unwrap();
        store.set(USER_KEY, "{\"id\":").unwrap();
        let sessions = SessionStore::new(store);

        assert!(sessions.user().is_none());
        assert!(sessions.session().is_none());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "").unwrap();
        store.set_json(USER_KEY, &user(UserType::Student)).unwrap();
        assert!(SessionStore::new(store).session().is_none());
    }

    #[test]
    fn test_set_user_overwrites_wholesale() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.set_session("tok", &user(UserType::Student)).unwrap();

        let mut fresh = user(UserType::Owner);
        fresh.full_name = None;
        sessions.set_user(&fresh).unwrap();

        let cached = sessions.user().unwrap();
        assert_eq!(cached.user_type, UserType::Owner);
        assert!(cached.full_name.is_none());
    }

    #[test]
    fn test_clear_removes_both_keys_only() {
        let store = MemoryStore::new();
        store.set("userSettings", "{}").unwrap();
        let sessions = SessionStore::new(store.clone());
        sessions.set_session("tok", &user(UserType::Admin)).unwrap();

        sessions.clear();
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
        assert_eq!(store.get("userSettings").as_deref(), Some("{}"));
    }
}
