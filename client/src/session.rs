//! Observable sign-in state.
//!
//! The synchronizer never reads a global "current user". It is handed a
//! [`SessionSignal`] and reacts to its transitions.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// Identity of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub user_id: String,
    /// Bearer credential attached to remote calls
    #[serde(skip_serializing, default)]
    pub token: String,
}

impl UserIdentity {
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }
}

/// Current authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No signed-in user
    #[default]
    Anonymous,
    Authenticated(UserIdentity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }
}

/// Shared handle to the session state.
///
/// Clones observe and drive the same underlying value.
#[derive(Debug, Clone)]
pub struct SessionSignal {
    tx: Arc<watch::Sender<Session>>,
}

impl SessionSignal {
    pub fn new(initial: Session) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// A signal starting signed out.
    pub fn anonymous() -> Self {
        Self::new(Session::Anonymous)
    }

    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    /// Bearer token of the signed-in user, if any.
    pub fn token(&self) -> Option<String> {
        self.tx.borrow().user().map(|u| u.token.clone())
    }

    pub fn login(&self, user: UserIdentity) {
        self.set(Session::Authenticated(user));
    }

    pub fn logout(&self) {
        self.set(Session::Anonymous);
    }

    /// Replace the session. Observers are only notified when the value changes.
    pub fn set(&self, session: Session) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == session {
                return false;
            }
            *current = session;
            true
        });

        if changed {
            tracing::debug!(
                authenticated = self.is_authenticated(),
                "Session changed"
            );
        }
    }

    /// Observe session transitions.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}

impl Default for SessionSignal {
    fn default() -> Self {
        Self::anonymous()
    }
}
