//! Authentication collaborator contract.

use crate::remote::{RemoteError, RemoteResult};

/// Authenticated user session as reported by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    /// Opaque bearer token forwarded to other collaborators.
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Result of a sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Account created and signed in.
    SignedIn(Session),
    /// Account created; the user must confirm their email first.
    ConfirmationPending,
}

/// Identity service. The core only ever asks for the active session.
pub trait IdentityProvider {
    fn current_session(&self) -> RemoteResult<Option<Session>>;
    fn sign_in(&self, credentials: &Credentials) -> RemoteResult<Session>;
    fn sign_up(&self, credentials: &Credentials) -> RemoteResult<SignUpOutcome>;
    fn sign_out(&self) -> RemoteResult<()>;
}

/// Identity provider for signed-out or offline use: never has a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentityProvider for Anonymous {
    fn current_session(&self) -> RemoteResult<Option<Session>> {
        Ok(None)
    }

    fn sign_in(&self, _credentials: &Credentials) -> RemoteResult<Session> {
        Err(RemoteError::Unauthorized(
            "no identity service configured".to_string(),
        ))
    }

    fn sign_up(&self, _credentials: &Credentials) -> RemoteResult<SignUpOutcome> {
        Err(RemoteError::Unauthorized(
            "no identity service configured".to_string(),
        ))
    }

    fn sign_out(&self) -> RemoteResult<()> {
        Ok(())
    }
}
