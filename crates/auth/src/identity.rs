//! Mock identity provider.
//!
//! Resolves (username, password, selected role) into a [`Session`] against the
//! directory's system users, with a demo fallback so every role can be tried
//! without seeding accounts. This is not an authentication mechanism: passwords
//! are compared in plaintext.

use thiserror::Error;

use relaydesk_directory::SystemUser;

use crate::{Role, Session};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Login form input.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Account name that enables the demo role override.
pub const DEMO_ADMIN: &str = "admin";

#[derive(Debug, Clone)]
pub struct IdentityProvider {
    default_password: String,
}

impl IdentityProvider {
    pub fn new(default_password: impl Into<String>) -> Self {
        Self {
            default_password: default_password.into(),
        }
    }

    pub fn default_password(&self) -> &str {
        &self.default_password
    }

    /// Log in.
    ///
    /// A registered user logs in with its stored password (or the default one
    /// when none is stored) and gets the role mapped from its role name. The
    /// `admin` account combined with a non-platform `selected_role` is a demo
    /// override and skips the lookup. Unknown users fall back to a demo session
    /// for `selected_role` when the default password is given.
    pub fn login(
        &self,
        credentials: Credentials<'_>,
        selected_role: Role,
        users: &[SystemUser],
    ) -> Result<Session, IdentityError> {
        let demo_override = credentials.username == DEMO_ADMIN && selected_role != Role::Platform;
        let found = users.iter().find(|u| u.username == credentials.username);

        if let (Some(user), false) = (found, demo_override) {
            let expected = user.password.as_deref().unwrap_or(&self.default_password);
            if credentials.password != expected {
                tracing::warn!(username = credentials.username, "login rejected");
                return Err(IdentityError::InvalidCredentials);
            }

            let role = Role::from_role_name(&user.role_name);
            let organization = user.organization.clone().unwrap_or_default();
            tracing::info!(username = credentials.username, role = role.as_str(), "login");
            return Ok(Session::new(user.id.clone(), user.username.clone(), role, organization));
        }

        if credentials.password != self.default_password {
            tracing::warn!(username = credentials.username, "login rejected");
            return Err(IdentityError::InvalidCredentials);
        }

        let (display_name, organization) = demo_identity(selected_role);
        let user_name = if credentials.username == DEMO_ADMIN {
            display_name.to_string()
        } else {
            credentials.username.to_string()
        };
        tracing::info!(
            username = credentials.username,
            role = selected_role.as_str(),
            organization,
            "demo login"
        );
        Ok(Session::new(
            format!("demo_{}", selected_role.as_str()),
            user_name,
            selected_role,
            organization,
        ))
    }
}

impl Default for IdentityProvider {
    fn default() -> Self {
        Self::new("123456a")
    }
}

/// Display name and organization of the demo account for a role.
///
/// The organizations match seeded records so each demo role has data to see.
pub fn demo_identity(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Provider => ("服务商管理员", "深圳市快金数据"),
        Role::Partner => ("合伙人", "快递鸟"),
        Role::Property => ("物业管理员", relaydesk_directory::seed::PENGBAI_PROPERTY),
        Role::Station => ("驿站站长", "厚德品园上门服务"),
        Role::Platform | Role::Courier => ("快金管理员", "平台总部"),
    }
}
