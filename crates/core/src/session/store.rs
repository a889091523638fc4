//! In-memory session registry.

use dashmap::DashMap;
use uuid::Uuid;

use super::error::SessionError;
use super::types::Session;

/// Process-wide registry of live sessions.
///
/// Each session is owned exclusively by the store; callers access it
/// through closures so map guards never escape. State lives only in this
/// process and dies with it.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<Uuid, Session>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Creates a session and returns its ID.
    pub fn create(&self) -> Uuid {
        let session = Session::new();
        let id = session.id();
        self.sessions.insert(id, session);
        id
    }

    /// Runs a closure against a session, read-only.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` when no session has this ID.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&Session) -> T,
    ) -> Result<T, SessionError> {
        self.sessions
            .get(&id)
            .map(|session| f(&session))
            .ok_or(SessionError::NotFound(id))
    }

    /// Runs a closure against a session with mutable access.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` when no session has this ID.
    pub fn with_session_mut<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, SessionError> {
        self.sessions
            .get_mut(&id)
            .map(|mut session| f(&mut session))
            .ok_or(SessionError::NotFound(id))
    }

    /// Discards a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` when no session has this ID.
    pub fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionError::NotFound(id))
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True when no sessions are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_and_read_back() {
        let store = SessionStore::new();
        let id = store.create();
        assert_eq!(store.len(), 1);

        let read_id = store.with_session(id, Session::id).unwrap();
        assert_eq!(read_id, id);
    }

    #[test]
    fn test_missing_session_is_not_found() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        assert_eq!(
            store.with_session(id, |_| ()).unwrap_err(),
            SessionError::NotFound(id)
        );
        assert_eq!(store.remove(id).unwrap_err(), SessionError::NotFound(id));
    }

    #[test]
    fn test_mutations_are_visible_to_later_reads() {
        let store = SessionStore::new();
        let id = store.create();

        store
            .with_session_mut(id, |session| {
                session
                    .tables_mut()
                    .add_row(TableKind::Operating, "Rent", "1200")
            })
            .unwrap()
            .unwrap();

        let total = store
            .with_session(id, |session| session.tables().totals(TableKind::Operating))
            .unwrap();
        assert_eq!(total, dec!(1200));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create();
        let b = store.create();

        store
            .with_session_mut(a, |session| {
                session
                    .tables_mut()
                    .add_row(TableKind::Operating, "Rent", "1200")
            })
            .unwrap()
            .unwrap();

        let other_total = store
            .with_session(b, |session| session.tables().totals(TableKind::Operating))
            .unwrap();
        assert_eq!(other_total, dec!(0));
    }

    #[test]
    fn test_remove_discards_state() {
        let store = SessionStore::new();
        let id = store.create();
        store.remove(id).unwrap();
        assert!(store.is_empty());
        assert!(store.with_session(id, |_| ()).is_err());
    }
}
