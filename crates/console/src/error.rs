use thiserror::Error;

use relaydesk_auth::{AuthzError, IdentityError};
use relaydesk_core::DomainError;

/// Everything a console operation can fail with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("no active session")]
    NotLoggedIn,

    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// The mutation was refused and not applied.
    #[error(transparent)]
    Authz(#[from] AuthzError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid {key}: {reason}")]
    Config { key: &'static str, reason: String },
}
