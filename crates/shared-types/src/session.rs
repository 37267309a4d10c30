use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::error::AppError;
use crate::navigation::PermissionCheck;
use crate::role::Role;

/// Authenticated identity as the client knows it.
///
/// Written by the login flow from the backend's auth response and replaced
/// wholesale on every login or logout. The wire shape is
/// `{ "roleId": 3, "permissions": ["invoice.view"], "name": "Ada" }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role_id: u32,
    pub permissions: BTreeSet<String>,
    #[serde(default, rename = "name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new<I, S>(role_id: u32, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role_id,
            permissions: permissions.into_iter().map(Into::into).collect(),
            display_name: None,
            expires_at: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// The named role, or `None` for ids outside the catalog.
    pub fn role(&self) -> Option<Role> {
        Role::from_id(self.role_id)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Parse persisted text, rejecting anything that is not a well-formed session.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let session: Session = serde_json::from_str(raw)?;
        if session.permissions.iter().any(|p| p.trim().is_empty()) {
            return Err(AppError::bad_request("Blank permission code in session"));
        }
        Ok(session)
    }
}

impl PermissionCheck for Session {
    fn has_permission(&self, code: &str) -> bool {
        self.permissions.contains(code)
    }
}

impl PermissionCheck for Option<Session> {
    fn has_permission(&self, code: &str) -> bool {
        self.as_ref().is_some_and(|s| s.has_permission(code))
    }
}

/// Synchronous client-side storage holding the serialized session.
pub trait SessionStore {
    /// Raw persisted text, or `None` when nothing is stored.
    fn load(&self) -> Result<Option<String>, AppError>;
    fn save(&self, raw: &str) -> Result<(), AppError>;
    /// Remove persisted data. Removing nothing is not an error.
    fn remove(&self) -> Result<(), AppError>;
}

impl<T: SessionStore + ?Sized> SessionStore for Box<T> {
    fn load(&self) -> Result<Option<String>, AppError> {
        (**self).load()
    }

    fn save(&self, raw: &str) -> Result<(), AppError> {
        (**self).save(raw)
    }

    fn remove(&self) -> Result<(), AppError> {
        (**self).remove()
    }
}

/// In-memory store for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with raw text, well-formed or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, raw: &str) -> Result<(), AppError> {
        *self.slot.borrow_mut() = Some(raw.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), AppError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// Point queries over the persisted session.
///
/// Every call goes back to the store, so the answer always reflects the
/// latest login or logout. Anything unreadable counts as "no session".
#[derive(Debug)]
pub struct SessionAccessor<S> {
    store: S,
}

impl<S: SessionStore> SessionAccessor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_session(&self) -> Option<Session> {
        self.get_session_at(Utc::now())
    }

    /// [`Self::get_session`] against an explicit clock.
    pub fn get_session_at(&self, now: DateTime<Utc>) -> Option<Session> {
        let raw = match self.store.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "session storage unreadable");
                return None;
            }
        };
        let session = match Session::parse(&raw) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed session");
                return None;
            }
        };
        if session.is_expired_at(now) {
            tracing::debug!(role_id = session.role_id, "session expired");
            return None;
        }
        Some(session)
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_session().is_some()
    }

    pub fn has_permission(&self, code: &str) -> bool {
        <Self as PermissionCheck>::has_permission(self, code)
    }

    /// Replace the persisted session, as the login flow does.
    pub fn save_session(&self, session: &Session) -> Result<(), AppError> {
        let raw = serde_json::to_string(session)?;
        self.store.save(&raw)?;
        tracing::debug!(role_id = session.role_id, "session saved");
        Ok(())
    }

    pub fn clear_session(&self) -> Result<(), AppError> {
        self.store.remove()?;
        tracing::debug!("session cleared");
        Ok(())
    }
}

impl<S: SessionStore> PermissionCheck for SessionAccessor<S> {
    fn has_permission(&self, code: &str) -> bool {
        self.get_session()
            .is_some_and(|session| session.has_permission(code))
    }
}
