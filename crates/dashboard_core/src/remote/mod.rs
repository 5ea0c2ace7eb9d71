//! Seams for external collaborators the core consumes but does not implement.
//!
//! # Responsibility
//! - Define the identity, remote task and quote source contracts.
//! - Map remote row shapes onto local records with explicit adapters.
//! - Describe user-facing notices for collaborator failures.
//!
//! # Invariants
//! - Collaborator failures never propagate past the service that called
//!   them; they degrade to an empty or cached value plus a notice.

pub mod identity;
pub mod notice;
pub mod quote_source;
pub mod task_source;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// No valid session, or the session was rejected.
    Unauthorized(String),
    /// Transport-level failure (offline, timeout, DNS, ...).
    Network(String),
    /// The collaborator answered with an error.
    Service { status: u16, message: String },
    /// The collaborator answered with a payload we cannot use.
    InvalidPayload(String),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(message) => write!(f, "unauthorized: {message}"),
            Self::Network(message) => write!(f, "network failure: {message}"),
            Self::Service { status, message } => {
                write!(f, "remote service error {status}: {message}")
            }
            Self::InvalidPayload(message) => write!(f, "invalid remote payload: {message}"),
        }
    }
}

impl Error for RemoteError {}
