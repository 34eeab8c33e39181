//! `relaydesk-auth`: roles, sessions and the advisory mutation policy.
//!
//! Decoupled from views and storage. Nothing in this crate is a security
//! boundary; see [`authorize`].

pub mod authorize;
pub mod identity;
pub mod permissions;
pub mod roles;
pub mod session;

pub use authorize::{
    AuthorizationExplanation, AuthzError, PolicyRegistry, authorize, explain_authorization,
    granted_permissions, is_permitted, is_read_only,
};
pub use identity::{Credentials, IdentityError, IdentityProvider};
pub use permissions::{Action, EntityKind, Permission};
pub use roles::Role;
pub use session::Session;
