//! Auth-session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login pages write it, `RequireAuth` reads it, logout clears it. One store
//! is built at app start and provided through Leptos context as
//! `RwSignal<PanelSession>`.
//!
//! TRADE-OFFS
//! ==========
//! Durability is best-effort: storage failures are logged and swallowed so
//! the in-memory session always reflects the last update.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::{BrowserStorage, SessionStorage};

pub const TOKEN_KEY: &str = "auth_token";
pub const IDENTIFIER_KEY: &str = "auth_mobile";

/// Token plus the phone number it was issued for.
///
/// `token.is_none()` means unauthenticated. `identifier` may be set on its
/// own between requesting and verifying a one-time code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub identifier: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// How [`SessionStore::set_session`] treats the identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IdentifierUpdate {
    /// Leave the current identifier as it is.
    #[default]
    Keep,
    /// Replace it; `None` clears it.
    Set(Option<String>),
}

/// Session state plus the storage it is mirrored to.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
}

/// The store as wired into the app.
pub type PanelSession = SessionStore<BrowserStorage>;

impl<S: SessionStorage> SessionStore<S> {
    /// Rehydrate from `storage`. Unreadable storage yields an empty session.
    pub fn load(storage: S) -> Self {
        let session = Session {
            token: read_field(&storage, TOKEN_KEY),
            identifier: read_field(&storage, IDENTIFIER_KEY),
        };
        Self { session, storage }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.session.identifier.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the token; replace the identifier only for
    /// [`IdentifierUpdate::Set`]. Both fields are then persisted.
    pub fn set_session(&mut self, token: Option<String>, identifier: IdentifierUpdate) {
        self.session.token = token.filter(|t| !t.is_empty());
        if let IdentifierUpdate::Set(identifier) = identifier {
            self.session.identifier = identifier.filter(|i| !i.is_empty());
        }
        self.persist();
    }

    /// Replace the token and keep the identifier.
    pub fn set_token(&mut self, token: Option<String>) {
        self.set_session(token, IdentifierUpdate::Keep);
    }

    /// Forget both fields. Calling it again changes nothing.
    pub fn clear_session(&mut self) {
        self.session = Session::default();
        self.persist();
    }

    fn persist(&self) {
        write_field(&self.storage, TOKEN_KEY, self.session.token.as_deref());
        write_field(&self.storage, IDENTIFIER_KEY, self.session.identifier.as_deref());
    }
}

fn read_field<S: SessionStorage>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            log::warn!("session: failed to load {key}: {e}");
            None
        }
    }
}

fn write_field<S: SessionStorage>(storage: &S, key: &str, value: Option<&str>) {
    let result = match value {
        Some(value) => storage.set(key, value),
        None => storage.remove(key),
    };
    if let Err(e) = result {
        log::warn!("session: failed to persist {key}: {e}");
    }
}
