//! Mutation policy: which role may create, edit, delete or review which records.
//!
//! This is an *advisory* check. It decides what the console offers and which
//! saves it applies, but there is no server behind it: any real deployment has
//! to enforce the same table at an authoritative boundary.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::{Action, EntityKind, Permission, Role, Session};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{role}' lacks permission '{permission}'")]
    Forbidden { role: Role, permission: Permission },

    #[error("forbidden: record '{record}' is outside the scope of '{organization}'")]
    OutOfScope {
        permission: Permission,
        record: String,
        organization: String,
    },
}

impl AuthzError {
    pub fn permission(&self) -> Permission {
        match self {
            AuthzError::Forbidden { permission, .. } => *permission,
            AuthzError::OutOfScope { permission, .. } => *permission,
        }
    }
}

/// The policy table.
///
/// - No IO
/// - No panics
/// - Total over every (role, action, kind) combination
pub fn is_permitted(role: Role, action: Action, kind: EntityKind) -> bool {
    use Action::*;
    use EntityKind::*;

    match role {
        Role::Platform => true,
        Role::Provider => match kind {
            Partner | Property | Station | SystemUser => matches!(action, Create | Edit | Delete),
            EntityKind::Provider => action == Edit,
            StationAudit => action == Review,
            Parcel => action == Edit,
            Ticket => matches!(action, Create | Edit),
            _ => false,
        },
        Role::Partner => match kind {
            Station => matches!(action, Create | Edit),
            SystemUser => matches!(action, Create | Edit | Delete),
            Parcel => action == Edit,
            Ticket => matches!(action, Create | Edit),
            _ => false,
        },
        // Property companies only read.
        Role::Property => false,
        Role::Station => kind == Parcel && matches!(action, Create | Edit),
        Role::Courier => kind == Parcel && action == Edit,
    }
}

/// Authorize a session for a permission.
pub fn authorize(session: &Session, required: &Permission) -> Result<(), AuthzError> {
    if is_permitted(session.role(), required.action, required.kind) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            role: session.role(),
            permission: *required,
        })
    }
}

/// Whether detail forms for `kind` open read-only for `role`.
pub fn is_read_only(role: Role, kind: EntityKind) -> bool {
    !is_permitted(role, Action::Edit, kind)
}

/// Every permission granted to a role, in table order.
pub fn granted_permissions(role: Role) -> Vec<Permission> {
    EntityKind::ALL
        .into_iter()
        .flat_map(|kind| Action::ALL.into_iter().map(move |action| Permission::new(kind, action)))
        .filter(|p| is_permitted(role, p.action, p.kind))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of an authorization decision.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationExplanation {
    pub required_permission: String,
    pub granted: bool,
    /// Human-readable reason for the decision.
    pub reason: String,
    pub role: Role,
    pub organization: String,
    /// Roles that would be granted this permission.
    pub granting_roles: Vec<Role>,
    pub suggestions: Vec<String>,
}

/// Explain why a mutation would be allowed or refused for a session.
pub fn explain_authorization(session: &Session, required: &Permission) -> AuthorizationExplanation {
    let role = session.role();
    let granted = is_permitted(role, required.action, required.kind);
    let granting_roles: Vec<Role> = Role::ALL
        .into_iter()
        .filter(|r| is_permitted(*r, required.action, required.kind))
        .collect();

    let reason = if role == Role::Platform {
        "Platform operator is unrestricted".to_string()
    } else if granted {
        format!("Role '{role}' is granted '{required}'")
    } else {
        format!("Role '{role}' is not granted '{required}'")
    };

    let suggestions = if granted {
        Vec::new()
    } else {
        let mut s = vec![format!(
            "Ask an account of a granting role ({}) to perform this action",
            granting_roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", ")
        )];
        if role == Role::Property {
            s.push("Property companies have read-only access to the network topology".to_string());
        }
        s
    };

    AuthorizationExplanation {
        required_permission: required.to_string(),
        granted,
        reason,
        role,
        organization: session.organization_name().to_string(),
        granting_roles,
        suggestions,
    }
}

/// Role definition with its granted permissions (for audit/display).
#[derive(Debug, Clone, Serialize)]
pub struct RoleDefinition {
    pub role: Role,
    pub label: &'static str,
    pub description: &'static str,
    pub permissions: Vec<String>,
}

/// Complete, statically-auditable view of the mutation policy.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyRegistry {
    pub roles: BTreeMap<Role, RoleDefinition>,
}

impl PolicyRegistry {
    pub fn snapshot() -> Self {
        let roles = Role::ALL
            .into_iter()
            .map(|role| {
                let def = RoleDefinition {
                    role,
                    label: role.label(),
                    description: role_description(role),
                    permissions: granted_permissions(role).iter().map(|p| p.to_string()).collect(),
                };
                (role, def)
            })
            .collect();
        Self { roles }
    }
}

fn role_description(role: Role) -> &'static str {
    match role {
        Role::Platform => "Platform operator; manages providers and all downstream records",
        Role::Provider => "Service provider; manages its partners, property companies and their stations",
        Role::Partner => "Regional partner; manages the stations it operates",
        Role::Property => "Property company; read-only view of stations on its estates",
        Role::Station => "Pickup station; operates parcels",
        Role::Courier => "Courier; updates parcels it delivers",
    }
}
