use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use relaydesk_core::{EntityId, SessionId};

use crate::Role;

/// The logged-in identity the console acts for.
///
/// Created at login and never mutated; logout drops it. The organization
/// name is the join key for scoping and is compared exactly (no trimming,
/// no case folding). It carries no meaning for [`Role::Platform`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: SessionId,
    user_id: EntityId,
    user_name: String,
    role: Role,
    organization_name: String,
    logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        user_id: impl Into<EntityId>,
        user_name: impl Into<String>,
        role: Role,
        organization_name: impl Into<String>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            role,
            organization_name: organization_name.into(),
            logged_in_at: Utc::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn user_id(&self) -> &EntityId {
        &self.user_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    pub fn logged_in_at(&self) -> DateTime<Utc> {
        self.logged_in_at
    }

    pub fn is_platform(&self) -> bool {
        self.role == Role::Platform
    }
}
